use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;

use crate::prelude::*;

lazy_static! {
    static ref CLOCK_RE: Regex = Regex::new(r"^(?<h>[0-9]{2,3}):(?<m>[0-9]{2}):(?<s>[0-9]{2})$").unwrap();
    static ref MILLIS_RE: Regex = Regex::new(r"^(?<ms>[0-9]+(\.[0-9]+)?)(ms)?$").unwrap();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Options with which the user can control a search.
pub enum SearchArgs
{
    Time(Duration),
    Depth(Depth),
}

impl SearchArgs
{
    /// Determines the hard depth limit, if any.
    pub fn depth(&self) -> Option<Depth>
    {
        match self
        {
            | Self::Depth(d) => Some(*d),
            | Self::Time(_) => None,
        }
    }

    /// Tries to parse args into a set of search options.
    pub fn parse(args: &[&str]) -> Result<SearchArgs>
    {
        let base = Error::for_parse::<Self>(args.join(" "));

        if args.len() < 2
        {
            let err = Error::new(
                Kind::ParseError,
                "Search options require a mode (time or depth) and a corresponding value.".into(),
            );
            return Err(err.chain(base));
        }

        match args[0]
        {
            | "time" =>
            {
                let time = Self::parse_time(args[1]).map_err(|err| err.chain(base))?;
                Ok(SearchArgs::Time(time))
            }
            | "depth" =>
            {
                let Ok(depth) = args[1].parse::<Depth>()
                else
                {
                    let err = Error::for_parse::<Depth>(args[1].to_owned());
                    return Err(err.chain(base));
                };

                if depth == 0
                {
                    let err = Error::new(Kind::InvalidOption, "Search depth must be at least one ply.".into());
                    return Err(err.chain(base));
                }
                Ok(SearchArgs::Depth(depth))
            }
            | _ => Err(base),
        }
    }

    /// Parses either `hh:mm:ss` or a number of milliseconds.
    fn parse_time(s: &str) -> Result<Duration>
    {
        if let Some(caps) = MILLIS_RE.captures(s)
        {
            let Ok(ms) = caps["ms"].parse::<f64>()
            else
            {
                return Err(Error::new(Kind::InvalidTime, format!("Invalid number of milliseconds '{}'.", s)));
            };
            return Ok(Duration::from_nanos((ms * 1e6).round() as u64));
        }

        let Some(caps) = CLOCK_RE.captures(s)
        else
        {
            let err = Error::new(Kind::InvalidTime, "Expected milliseconds, or a duration in the form of hh:mm:ss".into());
            return Err(err.chain(Error::for_parse::<Duration>(s.to_owned())));
        };

        let mut seconds: u64 = 0;
        for (group, scale) in [("h", 3600), ("m", 60), ("s", 1)]
        {
            let Ok(value) = caps[group].parse::<u64>()
            else
            {
                return Err(Error::new(Kind::InvalidTime, format!("Invalid time component '{}'.", &caps[group])));
            };
            seconds += value * scale;
        }

        Ok(Duration::from_secs(seconds))
    }
}
