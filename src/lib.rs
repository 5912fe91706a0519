pub(crate) mod agent;
pub(crate) mod error;
pub mod game;
pub(crate) mod protocol;

#[allow(unused)]
pub mod prelude
{
    pub use std::str::FromStr;

    pub use log::{self};

    pub use crate::{
        agent::*,
        error::{Error, Kind, Result},
        game::*,
        protocol::{Server, ServerOptions},
    };
}
