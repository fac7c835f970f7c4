//! Transport implementations for the Quill client.

pub mod http;
pub mod retry;

pub use http::HttpTransport;
pub use retry::{RetryPolicy, RetryTransport};
