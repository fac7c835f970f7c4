//! # Quill Client
//!
//! The caller-facing surface: a [`Client`] context that owns the cache store
//! and the transport, and per-resource-kind managers that implement
//! read-through caching and write-through invalidation on top of them.
//!
//! ```no_run
//! use quill_client::Client;
//! use quill_core::auth::AuthCredential;
//!
//! # async fn run() -> Result<(), quill_core::error::RestError> {
//! let client = Client::builder(AuthCredential::bot("token")).build()?;
//! let channel = client.channels().get_channel("1234").await?;
//! println!("{:?}", channel.name);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod channels;
pub mod client;

pub use cache::{CacheStore, Partition};
pub use channels::ChannelManager;
pub use client::{Client, ClientBuilder};
