use serde::{Deserialize, Serialize};
use serenity::model::channel::ChannelType;
use serenity::model::id::{ChannelId, GuildId};
use std::str::FromStr;

use super::overwrite::ResolvedOverwrite;
use crate::error::StoreError;

/// A guild channel as cached by the client, decoded from the API payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub guild_id: GuildId,
    pub name: String,

    /// Numeric channel type on the wire
    #[serde(rename = "type")]
    pub kind: ChannelType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ChannelId>,

    #[serde(default)]
    pub position: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default)]
    pub nsfw: bool,

    /// Voice only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,

    /// Voice only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_limit_per_user: Option<u16>,

    #[serde(default)]
    pub permission_overwrites: Vec<ResolvedOverwrite>,
}

impl Channel {
    pub fn is_category(&self) -> bool {
        self.kind == ChannelType::Category
    }
}

/// Channel kinds that can be requested when creating a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Text,
    Voice,
}

impl ChannelKind {
    /// Numeric type constant sent to the API
    pub fn code(self) -> u8 {
        match self {
            ChannelKind::Text => 0,
            ChannelKind::Voice => 2,
        }
    }

    /// Convert to serenity ChannelType
    pub fn to_serenity(self) -> ChannelType {
        match self {
            ChannelKind::Text => ChannelType::Text,
            ChannelKind::Voice => ChannelType::Voice,
        }
    }
}

impl FromStr for ChannelKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ChannelKind::Text),
            "voice" => Ok(ChannelKind::Voice),
            _ => Err(StoreError::invalid_argument(
                "Type must be either 'text' or 'voice'.",
            )),
        }
    }
}

/// Anything that identifies a channel: the channel itself or its id
#[derive(Debug, Clone, PartialEq)]
pub enum ChannelResolvable {
    Id(ChannelId),
    Channel(Box<Channel>),
}

impl ChannelResolvable {
    pub fn resolve_id(&self) -> ChannelId {
        match self {
            ChannelResolvable::Id(id) => *id,
            ChannelResolvable::Channel(channel) => channel.id,
        }
    }
}

impl From<ChannelId> for ChannelResolvable {
    fn from(id: ChannelId) -> Self {
        ChannelResolvable::Id(id)
    }
}

impl From<Channel> for ChannelResolvable {
    fn from(channel: Channel) -> Self {
        ChannelResolvable::Channel(Box::new(channel))
    }
}

impl From<&Channel> for ChannelResolvable {
    fn from(channel: &Channel) -> Self {
        ChannelResolvable::Channel(Box::new(channel.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_kind() {
        assert_eq!("text".parse::<ChannelKind>().unwrap(), ChannelKind::Text);
        assert_eq!("voice".parse::<ChannelKind>().unwrap(), ChannelKind::Voice);
        assert!(matches!(
            "Voice".parse::<ChannelKind>(),
            Err(StoreError::InvalidArgument { .. })
        ));
        assert!("category".parse::<ChannelKind>().is_err());
    }

    #[test]
    fn test_decode_voice_channel() {
        let json = r#"{
            "id": "1001",
            "guild_id": "10",
            "name": "lounge",
            "type": 2,
            "parent_id": "500",
            "position": 3,
            "bitrate": 64000,
            "user_limit": 5,
            "permission_overwrites": [
                { "id": "42", "type": 1, "allow": "0", "deny": "1024" }
            ]
        }"#;

        let channel: Channel = serde_json::from_str(json).unwrap();
        assert_eq!(channel.id, ChannelId::new(1001));
        assert_eq!(channel.kind, ChannelType::Voice);
        assert_eq!(channel.parent_id, Some(ChannelId::new(500)));
        assert_eq!(channel.bitrate, Some(64000));
        assert_eq!(channel.permission_overwrites.len(), 1);
        assert!(!channel.nsfw);
        assert!(!channel.is_category());
    }

    #[test]
    fn test_resolve_id() {
        let id = ChannelId::new(77);
        assert_eq!(ChannelResolvable::from(id).resolve_id(), id);
    }
}
