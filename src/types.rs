pub mod game;
pub mod leaderboard;
pub mod leaderboard_id;
pub mod match_history;
pub mod numbers_online;
pub mod rating_history;
pub mod strings;

pub use self::{
    game::Game,
    leaderboard::{
        Leaderboard,
        LeaderboardPlayer,
    },
    leaderboard_id::{
        AnyLeaderboardId,
        EventLeaderboardId,
        LeaderboardId,
    },
    match_history::{
        LastMatch,
        Match,
        MatchPlayer,
    },
    numbers_online::NumbersOnline,
    rating_history::{
        RatingHistory,
        RatingHistoryEntry,
    },
    strings::{
        StringEntry,
        Strings,
    },
};
