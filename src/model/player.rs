use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerDto {
    /// Identity key of the account (the `created` column).
    pub id: i64,
    pub name: String,
    pub rank: Option<String>,
    pub tag: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaginationDto {
    /// One-based page number.
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerListDto {
    pub players: Vec<PlayerDto>,
    pub pagination: PaginationDto,
    /// Distinct ranks currently held by at least one account.
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdatePlayerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdatePlayerRankDto {
    /// Hard rank or group internal name; missing or `null` is rejected.
    #[serde(default)]
    pub rank: Option<String>,
}

/// Rank and tag stored for a player after a rank update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PlayerRankDto {
    pub id: i64,
    pub rank: String,
    pub tag: String,
}

/// Largest page size served by the player list.
pub const MAX_PAGE_SIZE: u64 = 100;

/// A player counts as online when their last login is at most this old.
pub const ONLINE_WINDOW_MINUTES: i64 = 30;

/// Largest value treated as a timestamp in seconds; longer values are milliseconds.
const MAX_SECONDS_TIMESTAMP: i64 = 9_999_999_999;

/// Interprets a stored login timestamp, which the game server writes either in seconds
/// or in milliseconds.
pub fn login_time(timestamp: i64) -> Option<DateTime<Utc>> {
    if timestamp.abs() <= MAX_SECONDS_TIMESTAMP {
        Utc.timestamp_opt(timestamp, 0).single()
    } else {
        Utc.timestamp_millis_opt(timestamp).single()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerStatus {
    Online,
    Offline,
}

impl PlayerStatus {
    /// Derives presence from the last login timestamp relative to `now`.
    pub fn from_last_login(last_login: Option<i64>, now: DateTime<Utc>) -> Self {
        let Some(login) = last_login.and_then(login_time) else {
            return Self::Offline;
        };

        if (now - login).num_minutes() < ONLINE_WINDOW_MINUTES {
            Self::Online
        } else {
            Self::Offline
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online",
            Self::Offline => "Offline",
        }
    }
}

/// Human readable distance between the last login and `now`.
pub fn format_last_seen(last_login: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = last_login else {
        return "never".to_string();
    };
    let Some(login) = login_time(timestamp) else {
        return "invalid date".to_string();
    };

    let elapsed = now - login;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}min ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 30 {
        format!("{}d ago", days)
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, if years > 1 { "s" } else { "" })
    }
}

/// Avatar URL for a player head, falling back to the default skin for names the skin
/// service would reject.
pub fn head_url(name: &str, size: u32) -> String {
    let clean: String = name
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if (3..=16).contains(&clean.len()) {
        format!("https://mc-heads.net/avatar/{}/{}", clean, size)
    } else {
        format!("https://mc-heads.net/avatar/steve/{}", size)
    }
}
