mod client;
mod nightbot;
mod params;
mod transport;
pub mod types;

pub use crate::{
    client::Client,
    nightbot::Nightbot,
    types::{
        AnyLeaderboardId,
        EventLeaderboardId,
        Game,
        Leaderboard,
        LeaderboardId,
        Match,
        RatingHistory,
        Strings,
    },
};
pub use reqwest::StatusCode;
pub use url::Url;

/// Result type
pub type Aoe2NetResult<T> = Result<T, Error>;

/// The maximum `count` accepted by the leaderboard endpoint
pub const LEADERBOARD_COUNT_MAX: u64 = 10_000;
/// The maximum `count` accepted by the rating history endpoint
pub const RATING_HISTORY_COUNT_MAX: u64 = 10_000;
/// The maximum `count` accepted by the match history endpoint
pub const MATCH_HISTORY_COUNT_MAX: u64 = 1_000;
/// The maximum `count` accepted by the global matches endpoint
pub const MATCHES_COUNT_MAX: u64 = 1_000;

/// Library error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP error
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid HTTP status
    #[error("invalid http status {0}")]
    InvalidStatus(reqwest::StatusCode),

    /// Json error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Url parse error
    #[error("{0}")]
    Url(#[from] url::ParseError),

    /// A paging window where `start` or `count` is zero
    #[error("`start` and `count` must be 1 or greater")]
    InvalidWindow,

    /// A `count` over the endpoint's ceiling
    #[error("`count` must be {max} or less, got {count}")]
    CountTooLarge {
        /// The rejected count
        count: u64,
        /// The endpoint's ceiling
        max: u64,
    },

    /// Missing both of the player identity keys
    #[error("either `steam_id` or `profile_id` is required")]
    MissingPlayerId,

    /// Missing all ways of naming a player
    #[error("either `search`, `steam_id` or `profile_id` is required")]
    MissingPlayerQuery,

    /// A name search with no game to search in
    #[error("`game` is required when `search` is used")]
    MissingGame,

    /// Missing both of the match identity keys
    #[error("either `uuid` or `match_id` is required")]
    MissingMatchId,

    /// An optional parameter outside the endpoint's allow-list
    #[error("unexpected optional parameter(s) {unexpected:?}, available: {available:?}")]
    UnexpectedParameter {
        /// The keys that were not recognized
        unexpected: Vec<String>,
        /// The keys the endpoint accepts
        available: Vec<&'static str>,
    },
}
