#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;
pub mod selector;
pub mod time;

pub use time::Clock;
