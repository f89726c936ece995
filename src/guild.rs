use serenity::model::guild::PartialGuild;
use serenity::model::id::{GuildId, RoleId, UserId};
use std::collections::HashSet;

use crate::model::OverwriteKind;

/// What the client knows about a guild when normalizing overwrites
#[derive(Debug, Clone)]
pub struct GuildContext {
    pub id: GuildId,
    roles: HashSet<RoleId>,
    members: HashSet<UserId>,
}

impl GuildContext {
    pub fn new(id: GuildId) -> Self {
        // @everyone shares the guild's id
        let mut roles = HashSet::new();
        roles.insert(RoleId::new(id.get()));
        Self {
            id,
            roles,
            members: HashSet::new(),
        }
    }

    /// Build from a fetched guild, taking its role list
    pub fn from_partial_guild(guild: &PartialGuild) -> Self {
        Self::new(guild.id).with_roles(guild.roles.keys().copied())
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles.extend(roles);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = UserId>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn add_member(&mut self, user_id: UserId) {
        self.members.insert(user_id);
    }

    /// Roles win over members when an id is somehow both
    pub fn overwrite_kind_of(&self, id: &str) -> Option<OverwriteKind> {
        let raw = id.parse::<u64>().ok().filter(|v| *v != 0)?;
        if self.roles.contains(&RoleId::new(raw)) {
            Some(OverwriteKind::Role)
        } else if self.members.contains(&UserId::new(raw)) {
            Some(OverwriteKind::Member)
        } else {
            None
        }
    }
}
