//! Channel resource manager.
//!
//! One method per remote channel operation. Reads of a single channel go
//! through the cache (read-through); mutations that return a channel
//! representation overwrite its cache entry and deletes evict it
//! (write-through); list and query operations pass straight through. The
//! only multi-step operation is the bulk delete by count, which resolves a
//! message count into an explicit id list with a read before the write.

use std::sync::Arc;

use quill_core::error::RestError;
use quill_core::options::{
    AddRecipientOptions, ArchivedThreadsQuery, CreateInviteOptions, CreateMessageOptions,
    EditMessageOptions, EditPermissionsOptions, FollowChannelOptions, GetMessagesQuery,
    MessageSelector, ModifyChannelOptions, StartThreadOptions,
};
use quill_core::resource::{
    ArchivedThreads, Channel, FollowedChannel, Invite, Message, ThreadMember,
};
use quill_core::transport::{ApiRequest, Transport};
use tracing::debug;

use crate::cache::CacheStore;

/// Manager for the channel resource kind.
///
/// Cheap to construct: holds handles to the client's transport and cache.
pub struct ChannelManager {
    transport: Arc<dyn Transport>,
    cache: Arc<CacheStore>,
}

impl ChannelManager {
    pub fn new(transport: Arc<dyn Transport>, cache: Arc<CacheStore>) -> Self {
        Self { transport, cache }
    }

    /// Get a channel.
    ///
    /// A cached channel is returned without a network request, even though
    /// it may be stale — the cache is authoritative once populated. On a
    /// miss the fetched representation is cached before being returned.
    pub async fn get_channel(&self, channel_id: &str) -> Result<Channel, RestError> {
        if let Some(channel) = self.cache.channels.get(channel_id) {
            return Ok(channel);
        }

        let request = ApiRequest::get(format!("/channels/{channel_id}"));
        let channel: Channel = self.transport.send(request).await?.json()?;
        self.cache.channels.set(channel_id, channel.clone());
        Ok(channel)
    }

    /// Modify a channel. The returned representation overwrites the cache
    /// entry.
    pub async fn modify_channel(
        &self,
        channel_id: &str,
        options: &ModifyChannelOptions,
        reason: Option<&str>,
    ) -> Result<Channel, RestError> {
        let request = ApiRequest::patch(format!("/channels/{channel_id}"))
            .json(options)?
            .audit(reason);
        let channel: Channel = self.transport.send(request).await?.json()?;
        self.cache.channels.set(channel_id, channel.clone());
        Ok(channel)
    }

    /// Delete a channel and evict it from the cache.
    pub async fn delete_channel(
        &self,
        channel_id: &str,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request = ApiRequest::delete(format!("/channels/{channel_id}")).audit(reason);
        self.transport.send(request).await?;
        self.cache.channels.delete(channel_id);
        Ok(())
    }

    /// Get messages from a channel.
    pub async fn get_channel_messages(
        &self,
        channel_id: &str,
        query: &GetMessagesQuery,
    ) -> Result<Vec<Message>, RestError> {
        let request =
            ApiRequest::get(format!("/channels/{channel_id}/messages")).query(query.to_pairs());
        self.transport.send(request).await?.json()
    }

    /// Get a single message from a channel.
    pub async fn get_channel_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Message, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/messages/{message_id}"));
        self.transport.send(request).await?.json()
    }

    /// Send a message in a channel.
    pub async fn create_message(
        &self,
        channel_id: &str,
        options: &CreateMessageOptions,
    ) -> Result<Message, RestError> {
        let request = ApiRequest::post(format!("/channels/{channel_id}/messages")).json(options)?;
        self.transport.send(request).await?.json()
    }

    /// Crosspost a message to the channels that follow this one.
    pub async fn crosspost_message(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> Result<Message, RestError> {
        let request = ApiRequest::post(format!(
            "/channels/{channel_id}/messages/{message_id}/crosspost"
        ));
        self.transport.send(request).await?.json()
    }

    /// Edit a message.
    pub async fn edit_message(
        &self,
        channel_id: &str,
        message_id: &str,
        options: &EditMessageOptions,
    ) -> Result<Message, RestError> {
        let request = ApiRequest::patch(format!("/channels/{channel_id}/messages/{message_id}"))
            .json(options)?;
        self.transport.send(request).await?.json()
    }

    /// Delete a message.
    pub async fn delete_message(
        &self,
        channel_id: &str,
        message_id: &str,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request = ApiRequest::delete(format!("/channels/{channel_id}/messages/{message_id}"))
            .audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Delete a group of messages in one call.
    ///
    /// [`MessageSelector::MostRecent`] first fetches up to that many of the
    /// channel's most recent messages and projects them to their ids; fewer
    /// than requested is fine. A failed fetch aborts before any delete is
    /// issued.
    pub async fn bulk_delete_messages(
        &self,
        channel_id: &str,
        selector: MessageSelector,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let ids = match selector {
            MessageSelector::Ids(ids) => ids,
            MessageSelector::MostRecent(count) => {
                let messages = self
                    .get_channel_messages(channel_id, &GetMessagesQuery::with_limit(count))
                    .await?;
                messages.into_iter().map(|m| m.id).collect()
            }
        };

        debug!(channel_id, count = ids.len(), "Bulk deleting messages");

        let request = ApiRequest::post(format!("/channels/{channel_id}/messages/bulk-delete"))
            .json(&serde_json::json!({ "messages": ids }))?
            .audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Set a permission overwrite for a role or user.
    pub async fn edit_channel_permissions(
        &self,
        channel_id: &str,
        overwrite_id: &str,
        options: &EditPermissionsOptions,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request = ApiRequest::put(format!("/channels/{channel_id}/permissions/{overwrite_id}"))
            .json(options)?
            .audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Get all invites for a channel.
    pub async fn get_channel_invites(&self, channel_id: &str) -> Result<Vec<Invite>, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/invites"));
        self.transport.send(request).await?.json()
    }

    /// Create an invite. An all-default options record is valid.
    pub async fn create_channel_invite(
        &self,
        channel_id: &str,
        options: &CreateInviteOptions,
        reason: Option<&str>,
    ) -> Result<Invite, RestError> {
        let request = ApiRequest::post(format!("/channels/{channel_id}/invites"))
            .json(options)?
            .audit(reason);
        self.transport.send(request).await?.json()
    }

    /// Remove a permission overwrite.
    pub async fn delete_channel_permission(
        &self,
        channel_id: &str,
        overwrite_id: &str,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request =
            ApiRequest::delete(format!("/channels/{channel_id}/permissions/{overwrite_id}"))
                .audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Follow a news channel into a target channel's webhook.
    pub async fn follow_news_channel(
        &self,
        channel_id: &str,
        options: &FollowChannelOptions,
    ) -> Result<FollowedChannel, RestError> {
        let request =
            ApiRequest::post(format!("/channels/{channel_id}/followers")).json(options)?;
        self.transport.send(request).await?.json()
    }

    /// Trigger the typing indicator in a channel.
    pub async fn trigger_typing_indicator(&self, channel_id: &str) -> Result<(), RestError> {
        let request = ApiRequest::post(format!("/channels/{channel_id}/typing"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Get the channel's pinned messages.
    pub async fn get_pinned_messages(&self, channel_id: &str) -> Result<Vec<Message>, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/pins"));
        self.transport.send(request).await?.json()
    }

    /// Pin a message.
    pub async fn pin_message(
        &self,
        channel_id: &str,
        message_id: &str,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request =
            ApiRequest::put(format!("/channels/{channel_id}/pins/{message_id}")).audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Unpin a message.
    pub async fn unpin_message(
        &self,
        channel_id: &str,
        message_id: &str,
        reason: Option<&str>,
    ) -> Result<(), RestError> {
        let request =
            ApiRequest::delete(format!("/channels/{channel_id}/pins/{message_id}")).audit(reason);
        self.transport.send(request).await?;
        Ok(())
    }

    /// Add a recipient to a DM group.
    pub async fn group_dm_add_recipient(
        &self,
        channel_id: &str,
        user_id: &str,
        options: &AddRecipientOptions,
    ) -> Result<(), RestError> {
        let request = ApiRequest::put(format!("/channels/{channel_id}/recipients/{user_id}"))
            .json(options)?;
        self.transport.send(request).await?;
        Ok(())
    }

    /// Remove a recipient from a DM group.
    pub async fn group_dm_remove_recipient(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<(), RestError> {
        let request = ApiRequest::delete(format!("/channels/{channel_id}/recipients/{user_id}"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Start a thread anchored to a message. The thread is itself a channel
    /// and its representation is cached.
    pub async fn start_thread_with_message(
        &self,
        channel_id: &str,
        message_id: &str,
        options: &StartThreadOptions,
        reason: Option<&str>,
    ) -> Result<Channel, RestError> {
        let request = ApiRequest::post(format!(
            "/channels/{channel_id}/messages/{message_id}/threads"
        ))
        .json(options)?
        .audit(reason);
        let thread: Channel = self.transport.send(request).await?.json()?;
        self.cache.channels.set(thread.id.clone(), thread.clone());
        Ok(thread)
    }

    /// Start a thread that is not anchored to a message.
    pub async fn start_thread_without_message(
        &self,
        channel_id: &str,
        options: &StartThreadOptions,
        reason: Option<&str>,
    ) -> Result<Channel, RestError> {
        let request = ApiRequest::post(format!("/channels/{channel_id}/threads"))
            .json(options)?
            .audit(reason);
        let thread: Channel = self.transport.send(request).await?.json()?;
        self.cache.channels.set(thread.id.clone(), thread.clone());
        Ok(thread)
    }

    /// Join a thread as the current user.
    pub async fn join_thread(&self, channel_id: &str) -> Result<(), RestError> {
        let request = ApiRequest::put(format!("/channels/{channel_id}/thread-members/@me"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Add a user to a thread.
    pub async fn add_thread_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<(), RestError> {
        let request = ApiRequest::put(format!("/channels/{channel_id}/thread-members/{user_id}"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Leave a thread as the current user.
    pub async fn leave_thread(&self, channel_id: &str) -> Result<(), RestError> {
        let request = ApiRequest::delete(format!("/channels/{channel_id}/thread-members/@me"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Remove a user from a thread.
    pub async fn remove_thread_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<(), RestError> {
        let request =
            ApiRequest::delete(format!("/channels/{channel_id}/thread-members/{user_id}"));
        self.transport.send(request).await?;
        Ok(())
    }

    /// Get a single thread member.
    pub async fn get_thread_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ThreadMember, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/thread-members/{user_id}"));
        self.transport.send(request).await?.json()
    }

    /// List all members of a thread.
    pub async fn list_thread_members(
        &self,
        channel_id: &str,
    ) -> Result<Vec<ThreadMember>, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/thread-members"));
        self.transport.send(request).await?.json()
    }

    /// List archived public threads.
    pub async fn list_public_archived_threads(
        &self,
        channel_id: &str,
        query: &ArchivedThreadsQuery,
    ) -> Result<ArchivedThreads, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/threads/archived/public"))
            .query(query.to_pairs());
        self.transport.send(request).await?.json()
    }

    /// List archived private threads.
    pub async fn list_private_archived_threads(
        &self,
        channel_id: &str,
        query: &ArchivedThreadsQuery,
    ) -> Result<ArchivedThreads, RestError> {
        let request = ApiRequest::get(format!("/channels/{channel_id}/threads/archived/private"))
            .query(query.to_pairs());
        self.transport.send(request).await?.json()
    }

    /// List archived private threads the current user has joined.
    pub async fn list_joined_private_archived_threads(
        &self,
        channel_id: &str,
        query: &ArchivedThreadsQuery,
    ) -> Result<ArchivedThreads, RestError> {
        let request = ApiRequest::get(format!(
            "/channels/{channel_id}/users/@me/threads/archived/private"
        ))
        .query(query.to_pairs());
        self.transport.send(request).await?.json()
    }
}
