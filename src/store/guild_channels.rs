use serenity::model::id::ChannelId;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::options::CreateChannelOptions;
use crate::actions::ChannelCreateHandler;
use crate::error::Result;
use crate::guild::GuildContext;
use crate::http::{ChannelApi, CreateChannelBody, WireChannelType};
use crate::model::{resolve_overwrite, Channel, ChannelKind, ChannelResolvable};
use crate::state::SharedChannelCache;

pub type SharedGuildChannelStore = Arc<GuildChannelStore>;

/// Channels of one guild, backed by the client-wide cache
pub struct GuildChannelStore {
    /// Guild the channels belong to
    guild: GuildContext,

    /// Shared channel cache
    cache: SharedChannelCache,

    /// Transport for channel endpoints
    api: Arc<dyn ChannelApi>,

    /// Post-processing for created channels
    handler: Arc<dyn ChannelCreateHandler>,
}

impl GuildChannelStore {
    pub fn new(
        guild: GuildContext,
        cache: SharedChannelCache,
        api: Arc<dyn ChannelApi>,
        handler: Arc<dyn ChannelCreateHandler>,
    ) -> Self {
        Self {
            guild,
            cache,
            api,
            handler,
        }
    }

    pub fn guild(&self) -> &GuildContext {
        &self.guild
    }

    pub fn get(&self, id: ChannelId) -> Option<Channel> {
        self.cache.get(self.guild.id, id)
    }

    /// Cache a channel of this guild, returning the entry it replaced
    pub fn insert(&self, channel: Channel) -> Option<Channel> {
        if channel.guild_id != self.guild.id {
            warn!(
                "Refusing to cache channel {} from guild {} in store for guild {}",
                channel.id, channel.guild_id, self.guild.id
            );
            return None;
        }
        self.cache.insert(channel)
    }

    pub fn remove(&self, id: ChannelId) -> Option<Channel> {
        self.cache.remove(self.guild.id, id)
    }

    /// All cached channels of the guild, in creation order
    pub fn list(&self) -> Vec<Channel> {
        self.cache.channels_in(self.guild.id)
    }

    /// Cached channels whose parent is the given category
    pub fn children_of(&self, parent_id: ChannelId) -> Vec<Channel> {
        self.cache.children_of(self.guild.id, parent_id)
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn resolve_id(&self, channel: &ChannelResolvable) -> ChannelId {
        channel.resolve_id()
    }

    /// Create a new channel in the guild
    pub async fn create(&self, name: &str, options: CreateChannelOptions) -> Result<Channel> {
        let parent_id = options.parent.as_ref().map(|p| self.resolve_id(p));
        self.create_with_parent(name, options, parent_id).await
    }

    /// Create a channel with `parent_id` taking precedence over `options.parent`
    pub(crate) async fn create_with_parent(
        &self,
        name: &str,
        options: CreateChannelOptions,
        parent_id: Option<ChannelId>,
    ) -> Result<Channel> {
        // An empty type string counts as unset
        let kind = match options.kind.as_deref() {
            None | Some("") => None,
            Some(kind) => Some(kind.parse::<ChannelKind>()?),
        };

        let permission_overwrites = options
            .permission_overwrites
            .as_ref()
            .map(|overwrites| {
                overwrites
                    .iter()
                    .map(|o| resolve_overwrite(o, &self.guild))
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?;

        let body = CreateChannelBody {
            name: name.to_string(),
            topic: options.topic,
            kind: WireChannelType::from_kind(kind),
            nsfw: options.nsfw,
            bitrate: options.bitrate,
            user_limit: options.user_limit,
            parent_id,
            position: options.position,
            permission_overwrites,
            rate_limit_per_user: options.rate_limit_per_user,
        };

        debug!(
            "Creating channel '{}' in guild {} (parent: {:?})",
            name, self.guild.id, parent_id
        );

        let raw = self
            .api
            .create_guild_channel(self.guild.id, &body, options.reason.as_deref())
            .await?;
        let created = self.handler.handle(raw)?;

        info!("Created channel '{}' ({})", created.channel.name, created.channel.id);
        Ok(created.channel)
    }
}
