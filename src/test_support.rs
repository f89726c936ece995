//! Recording fakes for the store's collaborators.

use async_trait::async_trait;
use parking_lot::Mutex;
use serenity::model::channel::ChannelType;
use serenity::model::id::{ChannelId, GuildId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::actions::{ChannelCreateHandler, ChannelCreated};
use crate::error::Result;
use crate::http::{ChannelApi, CreateChannelBody, WireChannelType};
use crate::model::Channel;

type Responder = Box<dyn Fn(GuildId, &CreateChannelBody) -> Result<serde_json::Value> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub guild_id: GuildId,
    pub body: CreateChannelBody,
    pub reason: Option<String>,
}

/// Fake API that records requests and echoes the body back as a channel
pub struct MockChannelApi {
    requests: Mutex<Vec<RecordedRequest>>,
    responder: Responder,
}

impl MockChannelApi {
    pub fn echo() -> Arc<Self> {
        let next_id = AtomicU64::new(9000);
        Self::with_responder(move |guild_id, body| {
            let id = next_id.fetch_add(1, Ordering::SeqCst);
            Ok(echo_payload(id, guild_id, body))
        })
    }

    pub fn with_responder<F>(responder: F) -> Arc<Self>
    where
        F: Fn(GuildId, &CreateChannelBody) -> Result<serde_json::Value> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .last()
            .cloned()
            .expect("no request was made")
    }
}

#[async_trait]
impl ChannelApi for MockChannelApi {
    async fn create_guild_channel(
        &self,
        guild_id: GuildId,
        body: &CreateChannelBody,
        reason: Option<&str>,
    ) -> Result<serde_json::Value> {
        self.requests.lock().push(RecordedRequest {
            guild_id,
            body: body.clone(),
            reason: reason.map(String::from),
        });
        tokio::task::yield_now().await;
        (self.responder)(guild_id, body)
    }
}

pub fn echo_payload(id: u64, guild_id: GuildId, body: &CreateChannelBody) -> serde_json::Value {
    let kind = match body.kind {
        WireChannelType::Code(code) => code,
        WireChannelType::Unresolved(_) => 0,
    };
    serde_json::json!({
        "id": id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": body.name,
        "type": kind,
        "parent_id": body.parent_id.map(|p| p.to_string()),
        "position": body.position.unwrap_or(0),
        "topic": body.topic,
        "nsfw": body.nsfw.unwrap_or(false),
        "bitrate": body.bitrate,
        "user_limit": body.user_limit,
        "rate_limit_per_user": body.rate_limit_per_user,
        "permission_overwrites": body.permission_overwrites.clone().unwrap_or_default(),
    })
}

/// Handler that records payloads and always returns the same channel
pub struct FixedHandler {
    pub channel: Channel,
    pub seen: Mutex<Vec<serde_json::Value>>,
}

impl FixedHandler {
    pub fn new(channel: Channel) -> Arc<Self> {
        Arc::new(Self {
            channel,
            seen: Mutex::new(Vec::new()),
        })
    }
}

impl ChannelCreateHandler for FixedHandler {
    fn handle(&self, raw: serde_json::Value) -> Result<ChannelCreated> {
        self.seen.lock().push(raw);
        Ok(ChannelCreated {
            channel: self.channel.clone(),
        })
    }
}

pub fn category(id: u64, guild_id: u64) -> Channel {
    Channel {
        id: ChannelId::new(id),
        guild_id: GuildId::new(guild_id),
        name: format!("category-{}", id),
        kind: ChannelType::Category,
        parent_id: None,
        position: 0,
        topic: None,
        nsfw: false,
        bitrate: None,
        user_limit: None,
        rate_limit_per_user: None,
        permission_overwrites: vec![],
    }
}
