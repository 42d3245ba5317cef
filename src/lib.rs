pub mod connector;
pub mod error;
pub mod math;
pub mod placement;
pub mod planning;
pub mod spanning;
pub mod triangulation;

#[cfg(test)]
mod test_support;

pub use error::{DungeonError, Result};
