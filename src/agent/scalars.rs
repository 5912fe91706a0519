/// A ply-count of search depth.
pub type Depth = u32;

pub mod consts
{
    /// The utility of a decided win. It dominates every heuristic value.
    pub const WIN: f64 = f64::INFINITY;

    /// The utility of a decided loss.
    pub const LOSS: f64 = f64::NEG_INFINITY;
}

pub use consts::*;
