use crate::model::{ChannelResolvable, OverwriteResolvable};

/// Options for creating a guild channel
///
/// Every field is optional. Unset fields are left out of the request and
/// the API applies its own defaults.
#[derive(Debug, Clone, Default)]
pub struct CreateChannelOptions {
    /// Either "text" or "voice"; defaults to text
    pub kind: Option<String>,
    pub topic: Option<String>,
    pub nsfw: Option<bool>,
    /// Bitrate in bits (voice only)
    pub bitrate: Option<u32>,
    /// Maximum amount of users (voice only)
    pub user_limit: Option<u32>,
    pub permission_overwrites: Option<Vec<OverwriteResolvable>>,
    /// Ignored by category-scoped stores
    pub parent: Option<ChannelResolvable>,
    pub position: Option<u16>,
    pub rate_limit_per_user: Option<u16>,
    /// Audit log reason
    pub reason: Option<String>,
}

impl CreateChannelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = Some(nsfw);
        self
    }

    pub fn bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = Some(bitrate);
        self
    }

    pub fn user_limit(mut self, user_limit: u32) -> Self {
        self.user_limit = Some(user_limit);
        self
    }

    pub fn permission_overwrites<I, O>(mut self, overwrites: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: Into<OverwriteResolvable>,
    {
        self.permission_overwrites = Some(overwrites.into_iter().map(Into::into).collect());
        self
    }

    pub fn parent(mut self, parent: impl Into<ChannelResolvable>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn position(mut self, position: u16) -> Self {
        self.position = Some(position);
        self
    }

    pub fn rate_limit_per_user(mut self, seconds: u16) -> Self {
        self.rate_limit_per_user = Some(seconds);
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
