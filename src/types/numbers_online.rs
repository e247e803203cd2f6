use std::collections::HashMap;

/// Player-count gauges at one point in time
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct NumPlayers {
    pub steam: Option<u64>,
    pub multiplayer: Option<u64>,
    pub looking: Option<u64>,
    pub in_game: Option<u64>,
    pub multiplayer_1h: Option<u64>,
    pub multiplayer_24h: Option<u64>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// One snapshot of the player-count gauges
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct PlayerStats {
    pub num_players: NumPlayers,

    /// Epoch seconds, as sent by the api
    pub time: Option<i64>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

/// Current player numbers
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct NumbersOnline {
    /// The steam app id the numbers are for
    pub app_id: Option<u64>,

    #[serde(default)]
    pub player_stats: Vec<PlayerStats>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}
