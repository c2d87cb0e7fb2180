#![forbid(unsafe_code)]

pub mod file;
pub mod http;
pub mod report;
pub mod repository;
pub mod rows;

pub use file::FileSource;
pub use http::HttpSource;
pub use repository::{InMemorySource, QuestionSource, SourceError, SourceLocation, Storage};
