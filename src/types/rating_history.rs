use crate::types::{
    game::Game,
    leaderboard_id::AnyLeaderboardId,
};
use std::collections::HashMap;

/// One rating snapshot, most recent first in api order
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct RatingHistoryEntry {
    /// Rating after the match that produced this snapshot
    pub rating: i64,

    /// Cumulative wins at this point
    pub num_wins: u64,

    /// Cumulative losses at this point
    pub num_losses: u64,

    pub streak: i64,
    pub drops: u64,

    /// Epoch seconds, as sent by the api
    pub timestamp: i64,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// A player's rating history on one ladder.
///
/// The api returns a bare snapshot array;
/// the ladder context is carried over from the request.
#[derive(Debug)]
pub struct RatingHistory {
    /// The game the ladder belongs to
    pub game: Game,

    /// The numeric ladder id that was queried
    pub leaderboard_id: u32,

    /// Whether the queried ladder is an event ladder
    pub is_event_leaderboard: bool,

    /// The snapshots, in api order (most recent first)
    pub ratings: Vec<RatingHistoryEntry>,
}

impl RatingHistory {
    pub(crate) fn new(ladder: AnyLeaderboardId, ratings: Vec<RatingHistoryEntry>) -> Self {
        Self {
            game: ladder.game(),
            leaderboard_id: ladder.id(),
            is_event_leaderboard: ladder.is_event(),
            ratings,
        }
    }
}
