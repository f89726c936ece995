//! Guild channel stores for a Discord client.
//!
//! [`GuildChannelStore`] is the per-guild view over the shared
//! [`ChannelCache`]; [`CategoryChildrenStore`] narrows it to the children of
//! one category and creates new channels inside that category.

pub mod actions;
pub mod config;
pub mod error;
pub mod guild;
pub mod http;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use actions::{ChannelCreateAction, ChannelCreateHandler, ChannelCreated, ChannelEvent};
pub use error::{Result, StoreError};
pub use guild::GuildContext;
pub use http::{ChannelApi, CreateChannelBody, WireChannelType};
pub use model::{
    Channel, ChannelKind, ChannelResolvable, OverwriteKind, OverwriteOptions,
    OverwriteResolvable, PermissionResolvable, ResolvedOverwrite,
};
pub use state::{create_shared_channel_cache, ChannelCache, SharedChannelCache};
pub use store::{CategoryChildrenStore, CreateChannelOptions, GuildChannelStore};
