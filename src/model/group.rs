use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct GroupDto {
    pub id: i32,
    pub internal_name: String,
    pub display_name: String,
    pub prefix: Option<String>,
    pub visualization: Option<String>,
    pub permissions: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl GroupDto {
    /// Whether the group is a cosmetic tag rather than a rank.
    pub fn is_tag(&self) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|permissions| permissions.starts_with(TAG_PERMISSION_PREFIX))
    }
}

/// Permission prefix marking a group as a cosmetic tag overlay.
pub const TAG_PERMISSION_PREFIX: &str = "tag.";

/// Request body for creating a group.
///
/// Required fields default to empty so a missing field surfaces as a 400 validation error
/// rather than a deserialization rejection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateGroupDto {
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub visualization: Option<String>,
    #[serde(default)]
    pub permissions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateGroupDto {
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub visualization: Option<String>,
    #[serde(default)]
    pub permissions: Option<String>,
}

/// Entry of the rank picker offered to the players page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AvailableRankDto {
    /// Group internal name, sent back as the requested rank.
    pub value: String,
    /// Formatted display name.
    pub label: String,
    pub prefix: Option<String>,
    pub visualization: Option<String>,
}
