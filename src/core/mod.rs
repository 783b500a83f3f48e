//! Analytics core: stateless services plus the engine and public helpers on top of them.
//! No terminal I/O and no storage access.

pub mod engine;
pub mod public_api;
pub mod services;
pub mod time;
pub mod utils;

pub use engine::StatsEngine;
pub use time::{Clock, FixedClock, SystemClock};
