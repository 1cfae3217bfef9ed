//! Domain models for the agriculture assistant

mod crop;
mod pest;
mod soil;
mod state;

pub use crop::*;
pub use pest::*;
pub use soil::*;
pub use state::*;
