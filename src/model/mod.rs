pub mod channel;
pub mod overwrite;

pub use channel::{Channel, ChannelKind, ChannelResolvable};
pub use overwrite::{
    resolve_overwrite, OverwriteKind, OverwriteOptions, OverwriteResolvable, PermissionResolvable,
    ResolvedOverwrite,
};
