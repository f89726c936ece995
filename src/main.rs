use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use serenity::http::Http;
use serenity::model::id::{ChannelId, RoleId};
use std::sync::Arc;
use tracing::{info, warn};

use category_store::config::{parse_snowflake, StoreConfig};
use category_store::logging::init_tracing;
use category_store::{
    create_shared_channel_cache, CategoryChildrenStore, ChannelCreateAction, CreateChannelOptions,
    GuildChannelStore, GuildContext, OverwriteKind, OverwriteOptions, PermissionResolvable,
};

/// Create a channel in a guild, optionally inside a category
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the new channel
    name: String,

    /// Channel type, either "text" or "voice"
    #[arg(long = "type")]
    kind: Option<String>,

    /// Channel topic
    #[arg(long)]
    topic: Option<String>,

    /// Mark the channel as NSFW
    #[arg(long)]
    nsfw: bool,

    /// Bitrate in bits (voice only)
    #[arg(long)]
    bitrate: Option<u32>,

    /// Maximum amount of users (voice only)
    #[arg(long)]
    user_limit: Option<u32>,

    /// Position in the channel list
    #[arg(long)]
    position: Option<u16>,

    /// Slowmode in seconds
    #[arg(long)]
    rate_limit_per_user: Option<u16>,

    /// Audit log reason
    #[arg(long)]
    reason: Option<String>,

    /// Category to create the channel in (overrides DISCORD_CATEGORY_ID)
    #[arg(long)]
    category: Option<String>,

    /// Permission denied to @everyone, may be repeated (e.g. VIEW_CHANNEL)
    #[arg(long = "deny-everyone")]
    deny_everyone: Vec<String>,
}

impl Args {
    fn to_options(&self, everyone: RoleId) -> CreateChannelOptions {
        let mut options = CreateChannelOptions::new();
        options.kind = self.kind.clone();
        options.topic = self.topic.clone();
        options.nsfw = self.nsfw.then_some(true);
        options.bitrate = self.bitrate;
        options.user_limit = self.user_limit;
        options.position = self.position;
        options.rate_limit_per_user = self.rate_limit_per_user;
        options.reason = self.reason.clone();

        if !self.deny_everyone.is_empty() {
            options = options.permission_overwrites([OverwriteOptions::new(everyone)
                .kind(OverwriteKind::Role)
                .deny(PermissionResolvable::Names(self.deny_everyone.clone()))]);
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let config = StoreConfig::from_env()?;
    init_tracing(&config.log_level);

    let category_id = match &args.category {
        Some(raw) => Some(ChannelId::new(parse_snowflake("--category", raw)?)),
        None => config.category_id,
    };

    let http = Arc::new(Http::new(&config.token));

    let guild = match http.get_guild(config.guild_id).await {
        Ok(guild) => {
            info!("Loaded guild '{}' with {} roles", guild.name, guild.roles.len());
            GuildContext::from_partial_guild(&guild)
        }
        Err(e) => {
            warn!("Could not fetch guild {}: {}, role lookups limited to @everyone", config.guild_id, e);
            GuildContext::new(config.guild_id)
        }
    };

    let cache = create_shared_channel_cache();
    let action = Arc::new(ChannelCreateAction::new(cache.clone()));
    let store = Arc::new(GuildChannelStore::new(guild, cache, http, action));

    let everyone = RoleId::new(config.guild_id.get());
    let options = args.to_options(everyone);

    let channel = match category_id {
        Some(category_id) => {
            info!("Creating '{}' in category {}", args.name, category_id);
            CategoryChildrenStore::new(store, category_id)
                .create(&args.name, options)
                .await?
        }
        None => {
            info!("Creating '{}' at guild level", args.name);
            store.create(&args.name, options).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&channel)?);
    Ok(())
}
