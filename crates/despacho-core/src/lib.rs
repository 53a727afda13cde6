//! Shared error contract between the feature crates and the HTTP layer

mod error;

pub use error::HttpError;
