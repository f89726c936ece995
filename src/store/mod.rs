pub mod category_children;
pub mod guild_channels;
pub mod options;

pub use category_children::CategoryChildrenStore;
pub use guild_channels::{GuildChannelStore, SharedGuildChannelStore};
pub use options::CreateChannelOptions;
