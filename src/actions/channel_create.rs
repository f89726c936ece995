//! Turns a raw channel-create payload into a cached channel.
//!
//! The store hands every successful API response to a [`ChannelCreateHandler`].
//! The default [`ChannelCreateAction`] caches the channel and announces it on a
//! broadcast channel so other parts of the client can react.

use tokio::sync::broadcast;
use tracing::debug;

use crate::error::Result;
use crate::model::Channel;
use crate::state::SharedChannelCache;

/// Result of handling a channel-create payload
#[derive(Debug, Clone)]
pub struct ChannelCreated {
    pub channel: Channel,
}

/// Post-processing applied to a freshly created channel payload
pub trait ChannelCreateHandler: Send + Sync {
    fn handle(&self, raw: serde_json::Value) -> Result<ChannelCreated>;
}

/// Event emitted when the cache learns about a new channel
#[derive(Debug, Clone)]
pub enum ChannelEvent {
    Created {
        channel: Channel,
        at: chrono::DateTime<chrono::Utc>,
    },
}

/// Default handler: cache the channel and broadcast a creation event
pub struct ChannelCreateAction {
    cache: SharedChannelCache,
    tx: broadcast::Sender<ChannelEvent>,
}

impl ChannelCreateAction {
    pub fn new(cache: SharedChannelCache) -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { cache, tx }
    }

    /// Subscribe to channel events
    pub fn subscribe(&self) -> broadcast::Receiver<ChannelEvent> {
        self.tx.subscribe()
    }
}

impl ChannelCreateHandler for ChannelCreateAction {
    fn handle(&self, raw: serde_json::Value) -> Result<ChannelCreated> {
        let channel: Channel = serde_json::from_value(raw)?;

        // The gateway may have delivered the same channel already
        if self.cache.contains(channel.guild_id, channel.id) {
            debug!("Channel {} already cached, skipping event", channel.id);
            self.cache.insert(channel.clone());
            return Ok(ChannelCreated { channel });
        }

        self.cache.insert(channel.clone());

        // Ignore if no receivers
        let _ = self.tx.send(ChannelEvent::Created {
            channel: channel.clone(),
            at: chrono::Utc::now(),
        });

        Ok(ChannelCreated { channel })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::state::create_shared_channel_cache;
    use serenity::model::id::{ChannelId, GuildId};

    fn payload() -> serde_json::Value {
        serde_json::json!({
            "id": "2001",
            "guild_id": "10",
            "name": "general",
            "type": 0,
            "parent_id": "500",
            "position": 1,
            "permission_overwrites": []
        })
    }

    #[test]
    fn test_handle_caches_and_notifies() {
        let cache = create_shared_channel_cache();
        let action = ChannelCreateAction::new(cache.clone());
        let mut rx = action.subscribe();

        let created = action.handle(payload()).unwrap();
        assert_eq!(created.channel.id, ChannelId::new(2001));
        assert_eq!(
            cache.get(GuildId::new(10), ChannelId::new(2001)),
            Some(created.channel.clone())
        );

        match rx.try_recv().unwrap() {
            ChannelEvent::Created { channel, .. } => assert_eq!(channel, created.channel),
        }
    }

    #[test]
    fn test_duplicate_payload_emits_once() {
        let cache = create_shared_channel_cache();
        let action = ChannelCreateAction::new(cache.clone());
        let mut rx = action.subscribe();

        action.handle(payload()).unwrap();
        action.handle(payload()).unwrap();

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_malformed_payload() {
        let action = ChannelCreateAction::new(create_shared_channel_cache());
        let err = action
            .handle(serde_json::json!({ "id": "1", "name": "no-guild" }))
            .unwrap_err();
        assert!(matches!(err, StoreError::MalformedPayload(_)));
    }
}
