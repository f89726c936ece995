use async_trait::async_trait;
use serde::Serialize;
use serenity::http::Http;
use serenity::model::id::{ChannelId, GuildId};

use crate::error::Result;
use crate::model::{ChannelKind, ResolvedOverwrite};

/// Value of the `type` field in a create-channel body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WireChannelType {
    /// Numeric constant for an explicitly requested kind
    Code(u8),
    /// Sent verbatim when no kind was requested
    Unresolved(&'static str),
}

impl WireChannelType {
    /// The API has always accepted the bare "text" string here, so an
    /// unset kind is passed through as that literal rather than as 0.
    pub const DEFAULT: WireChannelType = WireChannelType::Unresolved("text");

    pub fn from_kind(kind: Option<ChannelKind>) -> Self {
        match kind {
            Some(kind) => WireChannelType::Code(kind.code()),
            None => Self::DEFAULT,
        }
    }
}

/// JSON body for POST /guilds/{guild.id}/channels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateChannelBody {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(rename = "type")]
    pub kind: WireChannelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsfw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ChannelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_overwrites: Option<Vec<ResolvedOverwrite>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,
}

/// Guild-scoped channel endpoints used by the stores
#[async_trait]
pub trait ChannelApi: Send + Sync {
    /// Create a channel, returning the raw channel payload.
    /// `reason` goes into the audit log header.
    async fn create_guild_channel(
        &self,
        guild_id: GuildId,
        body: &CreateChannelBody,
        reason: Option<&str>,
    ) -> Result<serde_json::Value>;
}

#[async_trait]
impl ChannelApi for Http {
    async fn create_guild_channel(
        &self,
        guild_id: GuildId,
        body: &CreateChannelBody,
        reason: Option<&str>,
    ) -> Result<serde_json::Value> {
        let channel = self.create_channel(guild_id, body, reason).await?;
        Ok(serde_json::to_value(channel)?)
    }
}
