use crate::{
    params::{
        is_absent,
        merge_optional_params,
    },
    transport,
    types::{
        AnyLeaderboardId,
        Game,
        LastMatch,
        Leaderboard,
        Match,
        NumbersOnline,
        RatingHistory,
        RatingHistoryEntry,
        Strings,
    },
    Aoe2NetResult,
    Error,
    LEADERBOARD_COUNT_MAX,
    MATCHES_COUNT_MAX,
    MATCH_HISTORY_COUNT_MAX,
    RATING_HISTORY_COUNT_MAX,
};

// Data api endpoints
const STRINGS_URL: &str = "https://aoe2.net/api/strings";
const LEADERBOARD_URL: &str = "https://aoe2.net/api/leaderboard";
const LOBBIES_URL: &str = "https://aoe2.net/api/lobbies";
const LAST_MATCH_URL: &str = "https://aoe2.net/api/player/lastmatch";
const MATCH_HISTORY_URL: &str = "https://aoe2.net/api/player/matches";
const RATING_HISTORY_URL: &str = "https://aoe2.net/api/player/ratinghistory";
const MATCHES_URL: &str = "https://aoe2.net/api/matches";
const MATCH_URL: &str = "https://aoe2.net/api/match";
const NUM_ONLINE_URL: &str = "https://aoe2.net/api/stats/players";

/// A client for the data api, which answers with json.
///
/// For the plain-text chat-bot endpoints see [`crate::Nightbot`].
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,
}

impl Client {
    /// Make a new [`Client`]
    pub fn new() -> Self {
        Client {
            client: transport::build_http_client(),
        }
    }

    /// Get the localized string tables for a game.
    pub async fn get_strings(&self, game: Game) -> Aoe2NetResult<Strings> {
        let params = [("game", game.as_str().to_string())];
        transport::get_json(&self.client, STRINGS_URL, &params).await
    }

    /// Get one page of a ladder.
    ///
    /// `start` is 1-based. `count` may not exceed [`LEADERBOARD_COUNT_MAX`].
    ///
    /// Available optional parameters: `search`, `steam_id`, `profile_id`.
    /// When one of them is given the api ignores `start`;
    /// `steam_id` takes precedence over `profile_id`, which takes precedence over `search`.
    pub async fn get_leaderboard(
        &self,
        leaderboard_id: impl Into<AnyLeaderboardId>,
        start: u64,
        count: u64,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<Leaderboard> {
        let ladder = leaderboard_id.into();
        let params = leaderboard_params(ladder, start, count, options)?;
        let leaderboard: Leaderboard =
            transport::get_json(&self.client, LEADERBOARD_URL, &params).await?;
        Ok(leaderboard.with_ladder(ladder))
    }

    /// Get all open lobbies for a game.
    pub async fn get_open_lobbies(&self, game: Game) -> Aoe2NetResult<Vec<Match>> {
        let params = [("game", game.as_str().to_string())];
        transport::get_json(&self.client, LOBBIES_URL, &params).await
    }

    /// Get the last match a player started.
    ///
    /// This is the current match if they are still in game.
    /// Either `steam_id` or `profile_id` is required; `steam_id` takes precedence.
    pub async fn get_last_match(
        &self,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
    ) -> Aoe2NetResult<LastMatch> {
        let params = player_id_params(steam_id, profile_id)?;
        transport::get_json(&self.client, LAST_MATCH_URL, &params).await
    }

    /// Get the match history of a player.
    ///
    /// `start` is 0-based (0 = most recent match).
    /// `count` may not exceed [`MATCH_HISTORY_COUNT_MAX`].
    /// Either `steam_id` or `profile_id` is required; `steam_id` takes precedence.
    pub async fn get_match_history(
        &self,
        game: Game,
        start: u64,
        count: u64,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
    ) -> Aoe2NetResult<Vec<Match>> {
        let params = match_history_params(game, start, count, steam_id, profile_id)?;
        transport::get_json(&self.client, MATCH_HISTORY_URL, &params).await
    }

    /// Get the rating history of a player on one ladder.
    ///
    /// `count` may not exceed [`RATING_HISTORY_COUNT_MAX`].
    /// Either `steam_id` or `profile_id` is required; `steam_id` takes precedence.
    pub async fn get_rating_history(
        &self,
        leaderboard_id: impl Into<AnyLeaderboardId>,
        start: u64,
        count: u64,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
    ) -> Aoe2NetResult<RatingHistory> {
        let ladder = leaderboard_id.into();
        let params = rating_history_params(ladder, start, count, steam_id, profile_id)?;
        let ratings: Vec<RatingHistoryEntry> =
            transport::get_json(&self.client, RATING_HISTORY_URL, &params).await?;
        Ok(RatingHistory::new(ladder, ratings))
    }

    /// Get recent matches across all players.
    ///
    /// `count` may not exceed [`MATCHES_COUNT_MAX`].
    ///
    /// Available optional parameters: `since` (epoch seconds; only matches after it).
    pub async fn get_matches(
        &self,
        count: u64,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<Vec<Match>> {
        let params = matches_params(count, options)?;
        transport::get_json(&self.client, MATCHES_URL, &params).await
    }

    /// Get a single match.
    ///
    /// Either `uuid` or `match_id` is required; `uuid` takes precedence.
    pub async fn get_match(
        &self,
        uuid: Option<&str>,
        match_id: Option<&str>,
    ) -> Aoe2NetResult<Match> {
        let params = match_params(uuid, match_id)?;
        transport::get_json(&self.client, MATCH_URL, &params).await
    }

    /// Get the current AoE2:DE player numbers.
    pub async fn get_num_online(&self) -> Aoe2NetResult<NumbersOnline> {
        transport::get_json(&self.client, NUM_ONLINE_URL, &[]).await
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

fn leaderboard_params(
    ladder: AnyLeaderboardId,
    start: u64,
    count: u64,
    options: &[(&str, &str)],
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if start == 0 || count == 0 {
        return Err(Error::InvalidWindow);
    }
    if count > LEADERBOARD_COUNT_MAX {
        return Err(Error::CountTooLarge {
            count,
            max: LEADERBOARD_COUNT_MAX,
        });
    }

    let optionals = merge_optional_params(
        options,
        &[("search", ""), ("steam_id", ""), ("profile_id", "")],
    )?;

    let mut params = vec![
        ("game", ladder.game().as_str().to_string()),
        (ladder.query_param(), ladder.id().to_string()),
        ("start", start.to_string()),
        ("count", count.to_string()),
    ];
    params.extend(optionals);
    Ok(params)
}

fn player_id_params(
    steam_id: Option<&str>,
    profile_id: Option<&str>,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if is_absent(steam_id) && is_absent(profile_id) {
        return Err(Error::MissingPlayerId);
    }

    Ok(vec![
        ("steam_id", steam_id.unwrap_or_default().to_string()),
        ("profile_id", profile_id.unwrap_or_default().to_string()),
    ])
}

fn match_history_params(
    game: Game,
    start: u64,
    count: u64,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if count > MATCH_HISTORY_COUNT_MAX {
        return Err(Error::CountTooLarge {
            count,
            max: MATCH_HISTORY_COUNT_MAX,
        });
    }

    let mut params = vec![
        ("game", game.as_str().to_string()),
        ("start", start.to_string()),
        ("count", count.to_string()),
    ];
    params.extend(player_id_params(steam_id, profile_id)?);
    Ok(params)
}

fn rating_history_params(
    ladder: AnyLeaderboardId,
    start: u64,
    count: u64,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if count > RATING_HISTORY_COUNT_MAX {
        return Err(Error::CountTooLarge {
            count,
            max: RATING_HISTORY_COUNT_MAX,
        });
    }

    let mut params = vec![
        ("game", ladder.game().as_str().to_string()),
        (ladder.query_param(), ladder.id().to_string()),
        ("start", start.to_string()),
        ("count", count.to_string()),
    ];
    params.extend(player_id_params(steam_id, profile_id)?);
    Ok(params)
}

fn matches_params(
    count: u64,
    options: &[(&str, &str)],
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if count > MATCHES_COUNT_MAX {
        return Err(Error::CountTooLarge {
            count,
            max: MATCHES_COUNT_MAX,
        });
    }

    let optionals = merge_optional_params(options, &[("since", "")])?;

    let mut params = vec![("count", count.to_string())];
    params.extend(optionals);
    Ok(params)
}

fn match_params(
    uuid: Option<&str>,
    match_id: Option<&str>,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    if is_absent(uuid) && is_absent(match_id) {
        return Err(Error::MissingMatchId);
    }

    Ok(vec![
        ("uuid", uuid.unwrap_or_default().to_string()),
        ("match_id", match_id.unwrap_or_default().to_string()),
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{
        EventLeaderboardId,
        LeaderboardId,
    };

    #[test]
    fn leaderboard_params_rejects_a_zero_window() {
        let err = leaderboard_params(LeaderboardId::AoeTwoRm.into(), 0, 10, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow));

        let err = leaderboard_params(LeaderboardId::AoeTwoRm.into(), 1, 0, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow));
    }

    #[test]
    fn leaderboard_params_enforces_the_ceiling() {
        let err = leaderboard_params(
            LeaderboardId::AoeTwoRm.into(),
            1,
            LEADERBOARD_COUNT_MAX + 1,
            &[],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::CountTooLarge {
                max: LEADERBOARD_COUNT_MAX,
                ..
            }
        ));

        leaderboard_params(LeaderboardId::AoeTwoRm.into(), 1, LEADERBOARD_COUNT_MAX, &[])
            .expect("the ceiling itself should be accepted");
    }

    #[test]
    fn leaderboard_params_selects_the_identifier_key() {
        let params = leaderboard_params(LeaderboardId::AoeTwoRm.into(), 1, 10, &[]).unwrap();
        assert!(params.contains(&("game", "aoe2de".to_string())));
        assert!(params.contains(&("leaderboard_id", "3".to_string())));

        let params =
            leaderboard_params(EventLeaderboardId::AoeFourSeasonOne.into(), 1, 10, &[]).unwrap();
        assert!(params.contains(&("game", "aoe4".to_string())));
        assert!(params.contains(&("event_leaderboard_id", "1".to_string())));
    }

    #[test]
    fn leaderboard_params_rejects_unknown_options() {
        let err = leaderboard_params(
            LeaderboardId::AoeTwoRm.into(),
            1,
            10,
            &[("steamid", "76561197984749679")],
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnexpectedParameter { .. }));
    }

    #[test]
    fn match_history_params_requires_a_player_id() {
        let err = match_history_params(Game::AoeTwoDe, 0, 5, None, None).unwrap_err();
        assert!(matches!(err, Error::MissingPlayerId));

        let err = match_history_params(Game::AoeTwoDe, 0, 5, Some(""), Some("")).unwrap_err();
        assert!(matches!(err, Error::MissingPlayerId));

        match_history_params(Game::AoeTwoDe, 0, 5, None, Some("196240"))
            .expect("a profile id alone should be enough");
    }

    #[test]
    fn match_history_params_enforces_the_ceiling() {
        let err = match_history_params(
            Game::AoeTwoDe,
            0,
            MATCH_HISTORY_COUNT_MAX + 1,
            Some("76561197984749679"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::CountTooLarge {
                max: MATCH_HISTORY_COUNT_MAX,
                ..
            }
        ));
    }

    #[test]
    fn rating_history_params_requires_a_player_and_a_sane_count() {
        let err = rating_history_params(
            LeaderboardId::AoeTwoRm.into(),
            0,
            RATING_HISTORY_COUNT_MAX + 1,
            Some("76561197984749679"),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::CountTooLarge {
                max: RATING_HISTORY_COUNT_MAX,
                ..
            }
        ));

        let err =
            rating_history_params(LeaderboardId::AoeTwoRm.into(), 0, 100, None, None).unwrap_err();
        assert!(matches!(err, Error::MissingPlayerId));

        let params = rating_history_params(
            EventLeaderboardId::AoeFourSeasonTwo.into(),
            0,
            100,
            None,
            Some("196240"),
        )
        .unwrap();
        assert!(params.contains(&("event_leaderboard_id", "2".to_string())));
    }

    #[test]
    fn matches_params_enforces_the_ceiling_and_allow_list() {
        let err = matches_params(MATCHES_COUNT_MAX + 1, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::CountTooLarge {
                max: MATCHES_COUNT_MAX,
                ..
            }
        ));

        let params = matches_params(5, &[("since", "1596775000")]).unwrap();
        assert!(params.contains(&("since", "1596775000".to_string())));

        let err = matches_params(5, &[("before", "1596775000")]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedParameter { .. }));
    }

    #[test]
    fn match_params_requires_an_identifier() {
        let err = match_params(None, None).unwrap_err();
        assert!(matches!(err, Error::MissingMatchId));

        match_params(Some("4ce4b94b-6606-41e7-8b21-33e61793b1af"), None)
            .expect("a uuid alone should be enough");
        match_params(None, Some("165344943")).expect("a match id alone should be enough");
    }

    #[tokio::test]
    #[ignore]
    async fn it_works() {
        let client = Client::new();

        let leaderboard = client
            .get_leaderboard(LeaderboardId::AoeTwoRm, 1, 10, &[])
            .await
            .expect("failed to get leaderboard");
        assert_eq!(leaderboard.game, Some(Game::AoeTwoDe));
        assert!(!leaderboard.is_event_leaderboard);
        dbg!(&leaderboard);

        let strings = client
            .get_strings(Game::AoeTwoDe)
            .await
            .expect("failed to get strings");
        assert_eq!(strings.language, "en");
        dbg!(&strings);
    }
}
