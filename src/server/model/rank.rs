//! Rank and tag resolution for player rank updates.
//!
//! A requested rank name is classified once into a [`RankResolution`], then applied to
//! the player's current rank to obtain the `rank` and `tag` columns to store.

use crate::server::model::group::Group;

/// Ranks the game server recognises directly. Requesting one of these always stores
/// the same value in `rank` and `tag`, whatever the `groups` table says.
pub const HARD_RANKS: [&str; 12] = [
    "Iron", "Gold", "Emerald", "Beta", "Apoiador", "Partner", "Partner+", "Helper", "Builder",
    "Mod", "Mod+", "Admin",
];

/// Rank kept by players that had none when a tag overlay is applied.
pub const DEFAULT_RANK: &str = "Membro";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankResolution {
    /// Name is on the hard-rank list.
    HardRank(String),
    /// Group is a cosmetic tag; the player keeps their rank.
    TagOverlay { tag: String },
    /// Group is a regular rank.
    NamedRank(String),
    /// No group has this name; stored as requested.
    Unknown(String),
}

impl RankResolution {
    /// Classifies a requested rank name.
    ///
    /// # Arguments
    /// - `requested` - Rank name sent by the client
    /// - `group` - Group whose `internal_name` equals `requested`, if any
    pub fn resolve(requested: &str, group: Option<&Group>) -> Self {
        if HARD_RANKS.contains(&requested) {
            return Self::HardRank(requested.to_string());
        }

        match group {
            Some(group) if group.is_tag() => Self::TagOverlay {
                tag: group.tag_label(),
            },
            Some(group) => Self::NamedRank(group.internal_name.clone()),
            None => Self::Unknown(requested.to_string()),
        }
    }

    /// Whether applying this resolution depends on the player's current rank.
    pub fn needs_current_rank(&self) -> bool {
        matches!(self, Self::TagOverlay { .. })
    }

    /// Computes the `(rank, tag)` pair to store.
    pub fn apply(&self, current_rank: Option<&str>) -> (String, String) {
        match self {
            Self::HardRank(name) | Self::NamedRank(name) | Self::Unknown(name) => {
                (name.clone(), name.clone())
            }
            Self::TagOverlay { tag } => {
                let rank = current_rank
                    .filter(|rank| !rank.is_empty())
                    .unwrap_or(DEFAULT_RANK);
                (rank.to_string(), tag.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(internal_name: &str, prefix: Option<&str>, permissions: &str) -> Group {
        Group {
            id: 1,
            internal_name: internal_name.to_string(),
            display_name: internal_name.to_string(),
            prefix: prefix.map(str::to_string),
            visualization: None,
            permissions: Some(permissions.to_string()),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn hard_rank_wins_over_group_lookup() {
        let tag_group = group("Gold", Some("§6VIP"), "tag.gold");

        let resolution = RankResolution::resolve("Gold", Some(&tag_group));

        assert_eq!(resolution, RankResolution::HardRank("Gold".to_string()));
        assert_eq!(
            resolution.apply(Some("Membro")),
            ("Gold".to_string(), "Gold".to_string())
        );
    }

    #[test]
    fn tag_group_keeps_current_rank_and_uses_prefix() {
        let tag_group = group("Youtuber", Some("§c[YT]"), "tag.youtuber");

        let resolution = RankResolution::resolve("Youtuber", Some(&tag_group));

        assert!(resolution.needs_current_rank());
        assert_eq!(
            resolution.apply(Some("Gold")),
            ("Gold".to_string(), "§c[YT]".to_string())
        );
    }

    #[test]
    fn tag_group_without_prefix_uses_internal_name() {
        let tag_group = group("Streamer", Some(""), "tag.streamer");

        let resolution = RankResolution::resolve("Streamer", Some(&tag_group));

        assert_eq!(
            resolution.apply(None),
            (DEFAULT_RANK.to_string(), "Streamer".to_string())
        );
    }

    #[test]
    fn rank_group_sets_rank_and_tag_to_internal_name() {
        let rank_group = group("Vip", Some("§a[VIP]"), "rank.vip");

        let resolution = RankResolution::resolve("Vip", Some(&rank_group));

        assert_eq!(resolution, RankResolution::NamedRank("Vip".to_string()));
        assert_eq!(
            resolution.apply(Some("Membro")),
            ("Vip".to_string(), "Vip".to_string())
        );
    }

    #[test]
    fn unknown_name_passes_through() {
        let resolution = RankResolution::resolve("Legend", None);

        assert_eq!(resolution, RankResolution::Unknown("Legend".to_string()));
        assert_eq!(
            resolution.apply(Some("Gold")),
            ("Legend".to_string(), "Legend".to_string())
        );
    }

    #[test]
    fn hard_rank_match_is_case_sensitive() {
        assert_eq!(
            RankResolution::resolve("gold", None),
            RankResolution::Unknown("gold".to_string())
        );
    }
}
