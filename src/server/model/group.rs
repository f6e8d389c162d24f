//! Group domain models and parameters.
//!
//! Groups describe the ranks and cosmetic tags a player can hold. A group whose
//! permissions start with `tag.` is a tag overlay, every other group is a rank.

use chrono::{DateTime, Utc};

use crate::model::group::{
    AvailableRankDto, CreateGroupDto, GroupDto, UpdateGroupDto, TAG_PERMISSION_PREFIX,
};

/// Rank or tag group as stored in the `groups` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    /// Unique name the game server stores in `account.rank`.
    pub internal_name: String,
    /// Name shown to players, usually carrying `§` formatting codes.
    pub display_name: String,
    pub prefix: Option<String>,
    pub visualization: Option<String>,
    pub permissions: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Group {
    /// Converts an entity model to a group domain model at the repository boundary.
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            internal_name: entity.internal_name,
            display_name: entity.display_name,
            prefix: entity.prefix,
            visualization: entity.visualization,
            permissions: entity.permissions,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Whether the group is a cosmetic tag overlay rather than a rank.
    pub fn is_tag(&self) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|permissions| permissions.starts_with(TAG_PERMISSION_PREFIX))
    }

    /// Label written to `account.tag` when this group is applied as a tag.
    ///
    /// Falls back to the internal name when the prefix is missing or empty.
    pub fn tag_label(&self) -> String {
        match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => prefix.to_string(),
            _ => self.internal_name.clone(),
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            internal_name: self.internal_name,
            display_name: self.display_name,
            prefix: self.prefix,
            visualization: self.visualization,
            permissions: self.permissions,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts the group to an entry of the rank picker.
    pub fn into_available_rank_dto(self) -> AvailableRankDto {
        AvailableRankDto {
            value: self.internal_name,
            label: self.display_name,
            prefix: self.prefix,
            visualization: self.visualization,
        }
    }
}

/// Parameters for creating a group.
///
/// Optional fields left out of the request are stored as empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateGroupParams {
    pub internal_name: String,
    pub display_name: String,
    pub prefix: String,
    pub visualization: String,
    pub permissions: String,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            internal_name: dto.internal_name,
            display_name: dto.display_name,
            prefix: dto.prefix.unwrap_or_default(),
            visualization: dto.visualization.unwrap_or_default(),
            permissions: dto.permissions.unwrap_or_default(),
        }
    }
}

/// Parameters for replacing every editable field of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub internal_name: String,
    pub display_name: String,
    pub prefix: String,
    pub visualization: String,
    pub permissions: String,
}

impl UpdateGroupParams {
    pub fn from_dto(id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            id,
            internal_name: dto.internal_name,
            display_name: dto.display_name,
            prefix: dto.prefix.unwrap_or_default(),
            visualization: dto.visualization.unwrap_or_default(),
            permissions: dto.permissions.unwrap_or_default(),
        }
    }
}

/// Fixed rank list inserted on boot when missing.
///
/// Columns: internal name, display name, prefix, visualization, permissions.
pub const DEFAULT_GROUPS: [(&str, &str, &str, &str, &str); 13] = [
    ("Admin", "§4Admin", "§4§lADMIN §4", "Admin", "rank.admin"),
    ("Mod+", "§5Mod+", "§5§lMOD+§5 ", "Mod+", "rank.mod+"),
    ("Mod", "§5Mod", "§5§lMOD§5 ", "Mod", "rank.mod"),
    ("Helper", "§9Helper", "§9§lHELPER§9 ", "Helper", "rank.helper"),
    ("Builder", "§2Builder", "§2§lBUILDER§2 ", "Builder", "rank.builder"),
    ("Beta", "§1Beta", "§1§lBETA§1 ", "Beta", "rank.beta"),
    ("Partner+", "§3Partner+", "§3§lPARTNER+§3 ", "Partner+", "rank.partner+"),
    ("Partner", "§bPartner", "§b§lPARTNER§b ", "Partner", "rank.partner"),
    ("Emerald", "§2Emerald", "§2§lEMERALD §2", "Emerald", "rank.emerald"),
    ("Gold", "§6Gold", "§6§lGOLD §6", "Gold", "rank.gold"),
    ("Iron", "§fIron", "§f§lIRON §f", "Iron", "rank.iron"),
    ("Apoiador", "§9Apoiador", "§9§lAPOIADOR §9", "Apoiador", "rank.apoiador"),
    ("Membro", "§7Membro", "§7", "Membro", ""),
];

/// Builds creation parameters for every default group.
pub fn default_groups() -> Vec<CreateGroupParams> {
    DEFAULT_GROUPS
        .iter()
        .map(
            |(internal_name, display_name, prefix, visualization, permissions)| {
                CreateGroupParams {
                    internal_name: internal_name.to_string(),
                    display_name: display_name.to_string(),
                    prefix: prefix.to_string(),
                    visualization: visualization.to_string(),
                    permissions: permissions.to_string(),
                }
            },
        )
        .collect()
}
