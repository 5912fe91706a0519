use std::time::{Duration, Instant};

/// A source of remaining time, in milliseconds.
///
/// Any `Fn() -> f64` is a clock, so a caller can hand its own timer straight to a searcher.
pub trait Clock
{
    fn time_left(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    fn time_left(&self) -> f64
    {
        self()
    }
}

#[derive(Clone, Copy, Debug)]
/// A clock that runs out a fixed budget after it was created.
pub struct Deadline
{
    start:  Instant,
    budget: Duration,
}

impl Deadline
{
    /// Starts a new deadline `budget` from now.
    pub fn new(budget: Duration) -> Deadline
    {
        Deadline {
            start: Instant::now(),
            budget,
        }
    }

    /// A deadline from a budget in milliseconds.
    pub fn from_millis(budget: f64) -> Deadline
    {
        Deadline::new(Duration::from_secs_f64(budget.max(0.0) / 1e3))
    }
}

impl Clock for Deadline
{
    fn time_left(&self) -> f64
    {
        (self.budget.as_secs_f64() - self.start.elapsed().as_secs_f64()) * 1e3
    }
}

#[derive(Clone, Copy, Debug, Default)]
/// A clock that never runs out. Depth-limited searches use this.
pub struct Unlimited;

impl Clock for Unlimited
{
    fn time_left(&self) -> f64
    {
        f64::INFINITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Raised when the governor runs out of time.
///
/// This is control flow, not a failure: only the top level of a searcher ever sees it.
pub struct SearchTimeout;

impl std::fmt::Display for SearchTimeout
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "search timed out")
    }
}

impl std::error::Error for SearchTimeout {}

/// The result of any step of a search that can run out of time.
pub type Search<T> = std::result::Result<T, SearchTimeout>;

#[derive(Clone, Copy)]
/// Polls a clock against a fixed threshold.
pub struct Governor<'a>
{
    clock:     &'a dyn Clock,
    threshold: f64,
}

impl<'a> Governor<'a>
{
    /// Creates a governor which aborts once fewer than `threshold` milliseconds remain.
    pub fn new(clock: &'a dyn Clock, threshold: f64) -> Governor<'a>
    {
        Governor {
            clock,
            threshold: threshold.max(0.0),
        }
    }

    /// Fails with a timeout if the remaining time has dropped below the threshold.
    pub fn check(&self) -> Search<()>
    {
        if self.clock.time_left() < self.threshold
        {
            Err(SearchTimeout)
        }
        else
        {
            Ok(())
        }
    }

    pub fn time_left(&self) -> f64
    {
        self.clock.time_left()
    }
}

impl std::fmt::Debug for Governor<'_>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "Governor {{ {:.1}ms left, threshold {:.1}ms }}", self.clock.time_left(), self.threshold)
    }
}
