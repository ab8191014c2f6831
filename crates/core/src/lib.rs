//! Card drawing logic: filtering, weighted sampling and the selection session.
//! Keep this crate free of IO and platform concerns.

pub mod dataset;
pub mod error;
pub mod events;
pub mod filter;
pub mod item;
pub mod presentation;
pub mod rng;
pub mod sampler;
pub mod session;
pub mod timer;

pub use dataset::*;
pub use error::*;
pub use events::*;
pub use filter::*;
pub use item::*;
pub use presentation::*;
pub use rng::*;
pub use sampler::*;
pub use session::*;
pub use timer::*;
