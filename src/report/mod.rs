pub mod csv;
pub mod tally;

pub use tally::{aggregate, Tallies, Tally};
