use std::collections::HashMap;

/// One player slot of a match
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct MatchPlayer {
    /// Unique profile id; empty lobby slots omit it
    pub profile_id: Option<u64>,

    /// Display name
    pub name: Option<String>,

    pub clan: Option<String>,
    pub country: Option<String>,

    pub slot: Option<i64>,
    pub slot_type: Option<i64>,

    pub rating: Option<i64>,
    pub rating_change: Option<serde_json::Value>,

    pub color: Option<i64>,
    pub team: Option<i64>,
    pub civ: Option<i64>,

    /// Match outcome for this player; absent while the match is running
    pub won: Option<bool>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A single match: a history entry, an open lobby or a global match listing.
///
/// Only AoE2:DE and AoE4 populate the full metadata set;
/// the other games leave most of it out, so nearly every field is optional.
/// Whatever the schema does not know about lands in `unknown` instead of being dropped.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Match {
    /// Unique match id
    pub match_id: String,

    /// Match uuid, AoE2:DE only
    pub match_uuid: Option<String>,

    /// Game version the match was played on
    pub version: Option<String>,

    /// Lobby name
    pub name: String,

    pub num_players: Option<i64>,
    pub num_slots: Option<i64>,
    pub has_password: Option<bool>,

    pub map_size: Option<i64>,
    pub map_type: Option<i64>,

    pub ranked: Option<bool>,
    pub leaderboard_id: Option<u32>,
    pub event_leaderboard_id: Option<u32>,
    pub rating_type_id: Option<i64>,

    pub server: Option<String>,

    /// Epoch seconds, as sent by the api
    pub started: Option<i64>,
    /// Epoch seconds; absent while the match is running
    pub finished: Option<i64>,

    pub cheats: Option<bool>,
    pub full_tech_tree: Option<bool>,
    pub ending_age: Option<i64>,
    pub starting_age: Option<i64>,
    pub game_type: Option<i64>,
    pub lock_speed: Option<bool>,
    pub lock_teams: Option<bool>,
    pub pop: Option<i64>,
    pub resources: Option<i64>,
    pub shared_exploration: Option<bool>,
    pub speed: Option<i64>,
    pub team_together: Option<bool>,
    pub team_positions: Option<bool>,
    pub treaty_length: Option<i64>,
    pub turbo: Option<bool>,
    pub victory: Option<i64>,
    pub victory_time: Option<i64>,

    /// The player slots, in api order
    #[serde(default)]
    pub players: Vec<MatchPlayer>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// The most recent match of a player, with the identity the api resolved
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct LastMatch {
    pub profile_id: Option<u64>,
    pub steam_id: Option<String>,
    pub name: Option<String>,
    pub country: Option<String>,

    /// The match itself; still running if `finished` is absent
    pub last_match: Match,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = include_str!("../../test_data/match_history.json");
    const LAST_MATCH_SAMPLE: &str = include_str!("../../test_data/last_match.json");

    #[test]
    fn parse_sample() {
        let matches: Vec<Match> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(matches.len(), 1);

        let first = &matches[0];
        assert_eq!(first.match_id, "165344943");
        assert_eq!(first.name, "AUTOMATCH");
        assert_eq!(
            first.match_uuid.as_deref(),
            Some("4ce4b94b-6606-41e7-8b21-33e61793b1af")
        );
        assert_eq!(first.leaderboard_id, Some(3));
        assert_eq!(first.event_leaderboard_id, None);
        assert_eq!(first.ranked, Some(true));
        assert_eq!(first.players.len(), 2);

        let winner = &first.players[0];
        assert_eq!(winner.profile_id, Some(196240));
        assert_eq!(winner.name.as_deref(), Some("GL.TheViper"));
        assert_eq!(winner.civ, Some(36));
        assert_eq!(winner.won, Some(true));
    }

    #[test]
    fn unknown_fields_are_preserved() {
        let matches: Vec<Match> = serde_json::from_str(SAMPLE).unwrap();
        let first = &matches[0];

        // `lobby_id` is not part of the schema and must survive in the catch-all.
        assert_eq!(
            first.unknown.get("lobby_id"),
            Some(&serde_json::Value::String("109775241058725958".to_string()))
        );
    }

    #[test]
    fn parse_last_match_sample() {
        let last_match: LastMatch = serde_json::from_str(LAST_MATCH_SAMPLE).unwrap();

        assert_eq!(last_match.profile_id, Some(196240));
        assert_eq!(last_match.name.as_deref(), Some("GL.TheViper"));
        assert_eq!(last_match.last_match.match_id, "165344943");
        // The sample omits the AoE2-only metadata entirely.
        assert_eq!(last_match.last_match.pop, None);
        assert_eq!(last_match.last_match.finished, None);
    }
}
