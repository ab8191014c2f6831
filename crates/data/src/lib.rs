//! Dataset loading: manifest, per-dataset item files and stop-word config.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
