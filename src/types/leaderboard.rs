use crate::types::{
    game::Game,
    leaderboard_id::AnyLeaderboardId,
};
use std::collections::HashMap;

/// One row of a leaderboard
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct LeaderboardPlayer {
    /// Unique profile id
    pub profile_id: u64,

    /// 1-based rank within the ladder
    pub rank: u64,

    /// Current rating
    pub rating: i64,

    /// steamID64, if the account is linked to steam
    pub steam_id: Option<String>,

    pub icon: Option<serde_json::Value>,

    /// Display name
    pub name: String,

    pub clan: Option<String>,
    pub country: Option<String>,

    pub previous_rating: Option<i64>,
    pub highest_rating: Option<i64>,

    pub streak: Option<i64>,
    pub lowest_streak: Option<i64>,
    pub highest_streak: Option<i64>,

    pub games: Option<u64>,
    pub wins: Option<u64>,
    pub losses: Option<u64>,
    pub drops: Option<u64>,

    /// Epoch seconds of the last match, as sent by the api
    pub last_match_time: Option<i64>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// One page of a leaderboard
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Leaderboard {
    /// Total number of entries in the ladder
    pub total: i64,

    /// The numeric ladder id echoed by the api.
    ///
    /// Event ladders echo it under `event_leaderboard_id` instead.
    #[serde(alias = "event_leaderboard_id")]
    pub leaderboard_id: Option<u32>,

    /// The requested start offset
    pub start: i64,

    /// The number of returned entries
    pub count: i64,

    /// The rows, in api order (rank ascending)
    #[serde(rename = "leaderboard")]
    pub players: Vec<LeaderboardPlayer>,

    /// The game the request was for.
    ///
    /// The body does not reliably echo this; it is filled in from the requested ladder.
    #[serde(skip)]
    pub game: Option<Game>,

    /// Whether the request was for an event ladder.
    ///
    /// Filled in from the requested ladder, like `game`.
    #[serde(skip)]
    pub is_event_leaderboard: bool,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Leaderboard {
    /// Fill in the request-derived fields from the ladder that was queried.
    pub(crate) fn with_ladder(mut self, ladder: AnyLeaderboardId) -> Self {
        self.game = Some(ladder.game());
        self.is_event_leaderboard = ladder.is_event();
        self
    }
}
