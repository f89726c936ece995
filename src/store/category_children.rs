use parking_lot::RwLock;
use serenity::model::id::ChannelId;

use super::guild_channels::SharedGuildChannelStore;
use super::options::CreateChannelOptions;
use crate::error::Result;
use crate::model::{Channel, ChannelResolvable};

/// Guild channels that share one parent category
///
/// This is a filtered view over the guild's channel store. The parent is
/// resolved on every call, so a category that is replaced with
/// [`set_parent`](Self::set_parent) takes effect immediately.
pub struct CategoryChildrenStore {
    store: SharedGuildChannelStore,
    parent: RwLock<ChannelResolvable>,
}

impl CategoryChildrenStore {
    pub fn new(store: SharedGuildChannelStore, parent: impl Into<ChannelResolvable>) -> Self {
        Self {
            store,
            parent: RwLock::new(parent.into()),
        }
    }

    /// The parent category, preferring the cached copy
    pub fn parent(&self) -> Option<Channel> {
        let parent = self.parent.read();
        self.store
            .get(parent.resolve_id())
            .or_else(|| match &*parent {
                ChannelResolvable::Channel(channel) => Some((**channel).clone()),
                ChannelResolvable::Id(_) => None,
            })
    }

    pub fn parent_id(&self) -> ChannelId {
        self.store.resolve_id(&self.parent.read())
    }

    pub fn set_parent(&self, parent: impl Into<ChannelResolvable>) {
        *self.parent.write() = parent.into();
    }

    pub fn get(&self, id: ChannelId) -> Option<Channel> {
        let parent_id = self.parent_id();
        self.store
            .get(id)
            .filter(|c| c.parent_id == Some(parent_id))
    }

    pub fn list(&self) -> Vec<Channel> {
        self.store.children_of(self.parent_id())
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a new channel in the parent category
    ///
    /// `options.parent` is ignored; the channel always lands in this
    /// store's category.
    pub async fn create(&self, name: &str, options: CreateChannelOptions) -> Result<Channel> {
        let parent_id = self.parent_id();
        self.store
            .create_with_parent(name, options, Some(parent_id))
            .await
    }
}
