//! # Quill Core
//!
//! Domain types, the transport trait, and error definitions for the Quill
//! chat-platform API client. This crate has **no HTTP dependency** — it
//! defines the contract that the transport and resource-manager crates
//! implement against.
//!
//! ## Design Philosophy
//!
//! The seam between resource managers and the network is the [`Transport`]
//! trait. Implementations live in their own crates, which enables:
//! - Swapping the HTTP stack without touching manager logic
//! - Easy testing with recording/stub transports
//! - A clean dependency graph (all crates depend inward on core)

pub mod auth;
pub mod error;
pub mod options;
pub mod resource;
pub mod transport;

// Re-export key types at crate root for ergonomics
pub use auth::{AuthCredential, TokenScheme};
pub use error::{Error, RestError, Result};
pub use options::{
    AddRecipientOptions, ArchivedThreadsQuery, CreateInviteOptions, CreateMessageOptions,
    EditMessageOptions, EditPermissionsOptions, FollowChannelOptions, GetMessagesQuery,
    MessageSelector, ModifyChannelOptions, StartThreadOptions,
};
pub use resource::{ArchivedThreads, Channel, FollowedChannel, Invite, Message, ThreadMember};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
