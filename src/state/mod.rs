pub mod channel_cache;

pub use channel_cache::{create_shared_channel_cache, ChannelCache, SharedChannelCache};
