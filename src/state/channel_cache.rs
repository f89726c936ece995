use dashmap::DashMap;
use serenity::model::id::{ChannelId, GuildId};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::Channel;

/// Client-wide registry of cached guild channels
///
/// Channels are grouped per guild and kept ordered by snowflake, which is
/// creation order.
#[derive(Debug, Default)]
pub struct ChannelCache {
    guilds: DashMap<GuildId, BTreeMap<ChannelId, Channel>>,
}

impl ChannelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<Channel> {
        self.guilds
            .get(&guild_id)
            .and_then(|channels| channels.get(&channel_id).cloned())
    }

    /// Insert or replace a channel, returning the previous entry
    pub fn insert(&self, channel: Channel) -> Option<Channel> {
        self.guilds
            .entry(channel.guild_id)
            .or_default()
            .insert(channel.id, channel)
    }

    pub fn remove(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<Channel> {
        self.guilds
            .get_mut(&guild_id)
            .and_then(|mut channels| channels.remove(&channel_id))
    }

    pub fn contains(&self, guild_id: GuildId, channel_id: ChannelId) -> bool {
        self.guilds
            .get(&guild_id)
            .map(|channels| channels.contains_key(&channel_id))
            .unwrap_or(false)
    }

    /// Ordered snapshot of a guild's channels
    pub fn channels_in(&self, guild_id: GuildId) -> Vec<Channel> {
        self.guilds
            .get(&guild_id)
            .map(|channels| channels.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Ordered snapshot of the channels under one category
    pub fn children_of(&self, guild_id: GuildId, parent_id: ChannelId) -> Vec<Channel> {
        self.guilds
            .get(&guild_id)
            .map(|channels| {
                channels
                    .values()
                    .filter(|c| c.parent_id == Some(parent_id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of channels cached across all guilds
    pub fn len(&self) -> usize {
        self.guilds.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shared channel cache type
pub type SharedChannelCache = Arc<ChannelCache>;

pub fn create_shared_channel_cache() -> SharedChannelCache {
    Arc::new(ChannelCache::new())
}
