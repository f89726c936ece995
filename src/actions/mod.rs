pub mod channel_create;

pub use channel_create::{ChannelCreateAction, ChannelCreateHandler, ChannelCreated, ChannelEvent};
