pub mod client;
pub mod source;
pub mod types;

pub use client::HttpFortuneSource;
pub use source::{FetchError, FortuneSource};
pub use types::EndpointTarget;
