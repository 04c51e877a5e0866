pub mod client;
pub mod error;

pub use client::{NewsClient, NewsResponse, DEFAULT_BASE_URL};
pub use error::ApiError;
