use serde::{Deserialize, Serialize};
use serenity::model::channel::{PermissionOverwrite, PermissionOverwriteType};
use serenity::model::permissions::Permissions;

use crate::error::{Result, StoreError};
use crate::guild::GuildContext;

/// Subject of a permission overwrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OverwriteKind {
    Role,
    Member,
}

impl From<OverwriteKind> for u8 {
    fn from(kind: OverwriteKind) -> Self {
        match kind {
            OverwriteKind::Role => 0,
            OverwriteKind::Member => 1,
        }
    }
}

impl TryFrom<u8> for OverwriteKind {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(OverwriteKind::Role),
            1 => Ok(OverwriteKind::Member),
            other => Err(format!("unknown overwrite type {}", other)),
        }
    }
}

/// Loosely typed permission input
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionResolvable {
    /// Flag names such as "VIEW_CHANNEL"
    Names(Vec<String>),
    /// Raw permission bits
    Bits(u64),
    Flags(Permissions),
}

impl PermissionResolvable {
    pub fn resolve(&self) -> Result<Permissions> {
        match self {
            PermissionResolvable::Names(names) => {
                let mut perms = Permissions::empty();
                for name in names {
                    perms |= permission_from_name(name)?;
                }
                Ok(perms)
            }
            PermissionResolvable::Bits(bits) => Ok(Permissions::from_bits_truncate(*bits)),
            PermissionResolvable::Flags(flags) => Ok(*flags),
        }
    }
}

impl From<Permissions> for PermissionResolvable {
    fn from(flags: Permissions) -> Self {
        PermissionResolvable::Flags(flags)
    }
}

impl From<u64> for PermissionResolvable {
    fn from(bits: u64) -> Self {
        PermissionResolvable::Bits(bits)
    }
}

impl From<Vec<&str>> for PermissionResolvable {
    fn from(names: Vec<&str>) -> Self {
        PermissionResolvable::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for PermissionResolvable {
    fn from(names: Vec<String>) -> Self {
        PermissionResolvable::Names(names)
    }
}

/// Parse a permission flag name, accepting the legacy emoji alias
fn permission_from_name(name: &str) -> Result<Permissions> {
    let upper = name.to_uppercase();
    let canonical = match upper.as_str() {
        "MANAGE_EMOJIS" | "MANAGE_EMOJIS_AND_STICKERS" => "MANAGE_GUILD_EXPRESSIONS",
        other => other,
    };
    Permissions::from_name(canonical).ok_or_else(|| StoreError::InvalidPermission {
        name: name.to_string(),
    })
}

/// Overwrite given as a plain literal
#[derive(Debug, Clone, PartialEq)]
pub struct OverwriteOptions {
    pub id: String,
    /// Inferred from the guild when absent
    pub kind: Option<OverwriteKind>,
    pub allow: Option<PermissionResolvable>,
    pub deny: Option<PermissionResolvable>,
}

impl OverwriteOptions {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            kind: None,
            allow: None,
            deny: None,
        }
    }

    pub fn kind(mut self, kind: OverwriteKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn allow(mut self, allow: impl Into<PermissionResolvable>) -> Self {
        self.allow = Some(allow.into());
        self
    }

    pub fn deny(mut self, deny: impl Into<PermissionResolvable>) -> Self {
        self.deny = Some(deny.into());
        self
    }
}

/// Anything that can be turned into a canonical overwrite
#[derive(Debug, Clone)]
pub enum OverwriteResolvable {
    Options(OverwriteOptions),
    Structured(PermissionOverwrite),
}

impl From<OverwriteOptions> for OverwriteResolvable {
    fn from(options: OverwriteOptions) -> Self {
        OverwriteResolvable::Options(options)
    }
}

impl From<PermissionOverwrite> for OverwriteResolvable {
    fn from(overwrite: PermissionOverwrite) -> Self {
        OverwriteResolvable::Structured(overwrite)
    }
}

/// Canonical overwrite record as sent to and received from the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedOverwrite {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OverwriteKind,
    #[serde(
        serialize_with = "serialize_permissions",
        deserialize_with = "deserialize_permissions"
    )]
    pub allow: Permissions,
    #[serde(
        serialize_with = "serialize_permissions",
        deserialize_with = "deserialize_permissions"
    )]
    pub deny: Permissions,
}

/// Normalize a single overwrite against the guild it will be applied in
pub fn resolve_overwrite(
    overwrite: &OverwriteResolvable,
    guild: &GuildContext,
) -> Result<ResolvedOverwrite> {
    match overwrite {
        OverwriteResolvable::Structured(ow) => {
            #[allow(unreachable_patterns)]
            let (id, kind) = match ow.kind {
                PermissionOverwriteType::Role(role_id) => (role_id.to_string(), OverwriteKind::Role),
                PermissionOverwriteType::Member(user_id) => {
                    (user_id.to_string(), OverwriteKind::Member)
                }
                _ => {
                    return Err(StoreError::InvalidOverwriteTarget {
                        id: "unknown".to_string(),
                    })
                }
            };
            Ok(ResolvedOverwrite {
                id,
                kind,
                allow: ow.allow,
                deny: ow.deny,
            })
        }
        OverwriteResolvable::Options(options) => {
            let kind = match options.kind {
                Some(kind) => kind,
                None => guild.overwrite_kind_of(&options.id).ok_or_else(|| {
                    StoreError::InvalidOverwriteTarget {
                        id: options.id.clone(),
                    }
                })?,
            };
            Ok(ResolvedOverwrite {
                id: options.id.clone(),
                kind,
                allow: resolve_optional(options.allow.as_ref())?,
                deny: resolve_optional(options.deny.as_ref())?,
            })
        }
    }
}

fn resolve_optional(perms: Option<&PermissionResolvable>) -> Result<Permissions> {
    perms
        .map(PermissionResolvable::resolve)
        .transpose()
        .map(|p| p.unwrap_or_else(Permissions::empty))
}

fn serialize_permissions<S>(value: &Permissions, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.bits().to_string())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn deserialize_permissions<'de, D>(deserializer: D) -> std::result::Result<Permissions, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    let bits = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s.parse::<u64>().map_err(D::Error::custom)?,
        StringOrNumber::Number(n) => n,
    };
    Ok(Permissions::from_bits_truncate(bits))
}

fn deserialize_string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}
