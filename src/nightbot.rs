use crate::{
    params::{
        is_absent,
        merge_optional_params,
    },
    transport,
    types::{
        AnyLeaderboardId,
        Game,
    },
    Aoe2NetResult,
    Error,
};

// Nightbot api endpoints
const RANK_DETAILS_URL: &str = "https://aoe2.net/api/nightbot/rank";
const CURRENT_MATCH_URL: &str = "https://aoe2.net/api/nightbot/match";
const RECENT_OPPONENT_URL: &str = "https://aoe2.net/api/nightbot/opponent";
const CURRENT_CIVS_URL: &str = "https://aoe2.net/api/nightbot/civs";
const CURRENT_MAP_URL: &str = "https://aoe2.net/api/nightbot/map";

/// A client for the nightbot api.
///
/// Every endpoint answers with preformatted plain text meant for a chat bot,
/// returned verbatim.
/// When no player matches, the text is the literal `Player not found` --
/// that is a payload, not an error, so callers must branch on it themselves.
#[derive(Debug, Clone)]
pub struct Nightbot {
    /// The inner http client
    pub client: reqwest::Client,
}

impl Nightbot {
    /// Make a new [`Nightbot`]
    pub fn new() -> Self {
        Nightbot {
            client: transport::build_http_client(),
        }
    }

    /// Get the rank details of a player on a ladder, as one line of text.
    ///
    /// One of `search`, `steam_id` or `profile_id` is required;
    /// `steam_id` takes precedence over `profile_id`, which takes precedence over `search`.
    /// `flag` controls whether the player's country flag is included.
    pub async fn get_rank_details(
        &self,
        leaderboard_id: impl Into<AnyLeaderboardId>,
        search: Option<&str>,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
        flag: bool,
    ) -> Aoe2NetResult<String> {
        let params = rank_details_params(leaderboard_id.into(), search, steam_id, profile_id, flag)?;
        transport::get_text(&self.client, RANK_DETAILS_URL, &params).await
    }

    /// Describe the current match of a player, or their last match if they are not in game.
    ///
    /// One of `search`, `steam_id` or `profile_id` is required,
    /// and `game` is required when `search` is used.
    ///
    /// Available optional parameters: `color`, `flag` (both `"true"` by default).
    pub async fn get_current_or_last_match(
        &self,
        search: Option<&str>,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
        game: Option<Game>,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<String> {
        let params = current_match_params(search, steam_id, profile_id, game, options)?;
        transport::get_text(&self.client, CURRENT_MATCH_URL, &params).await
    }

    /// Get the rank details of the most recent opponent of a player (1v1 only).
    ///
    /// One of `search`, `steam_id` or `profile_id` is required.
    ///
    /// Available optional parameters: `leaderboard_id` (numeric, `"3"` by default).
    pub async fn get_recent_opponent(
        &self,
        search: Option<&str>,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<String> {
        let params = player_lookup_params(search, steam_id, profile_id, options, true)?;
        transport::get_text(&self.client, RECENT_OPPONENT_URL, &params).await
    }

    /// Get the civilisations of the current (or last) match of a player.
    ///
    /// One of `search`, `steam_id` or `profile_id` is required.
    ///
    /// Available optional parameters: `leaderboard_id` (numeric, `"3"` by default).
    pub async fn get_current_civs(
        &self,
        search: Option<&str>,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<String> {
        let params = player_lookup_params(search, steam_id, profile_id, options, false)?;
        transport::get_text(&self.client, CURRENT_CIVS_URL, &params).await
    }

    /// Get the map name of the current (or last) match of a player.
    ///
    /// One of `search`, `steam_id` or `profile_id` is required.
    ///
    /// Available optional parameters: `leaderboard_id` (numeric, `"3"` by default).
    pub async fn get_current_map(
        &self,
        search: Option<&str>,
        steam_id: Option<&str>,
        profile_id: Option<&str>,
        options: &[(&str, &str)],
    ) -> Aoe2NetResult<String> {
        let params = player_lookup_params(search, steam_id, profile_id, options, false)?;
        transport::get_text(&self.client, CURRENT_MAP_URL, &params).await
    }
}

impl Default for Nightbot {
    fn default() -> Self {
        Self::new()
    }
}

fn require_player_query(
    search: Option<&str>,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
) -> Aoe2NetResult<()> {
    if is_absent(search) && is_absent(steam_id) && is_absent(profile_id) {
        return Err(Error::MissingPlayerQuery);
    }
    Ok(())
}

fn rank_details_params(
    ladder: AnyLeaderboardId,
    search: Option<&str>,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
    flag: bool,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    require_player_query(search, steam_id, profile_id)?;

    Ok(vec![
        ("flag", flag.to_string()),
        ("language", "en".to_string()),
        ("search", search.unwrap_or_default().to_string()),
        ("steam_id", steam_id.unwrap_or_default().to_string()),
        ("profile_id", profile_id.unwrap_or_default().to_string()),
        (ladder.query_param(), ladder.id().to_string()),
        ("game", ladder.game().as_str().to_string()),
    ])
}

fn current_match_params(
    search: Option<&str>,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
    game: Option<Game>,
    options: &[(&str, &str)],
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    require_player_query(search, steam_id, profile_id)?;
    if !is_absent(search) && game.is_none() {
        return Err(Error::MissingGame);
    }

    let optionals = merge_optional_params(options, &[("color", "true"), ("flag", "true")])?;

    let mut params = vec![
        ("search", search.unwrap_or_default().to_string()),
        ("steam_id", steam_id.unwrap_or_default().to_string()),
        ("profile_id", profile_id.unwrap_or_default().to_string()),
        ("civflag", "false".to_string()),
        (
            "game",
            game.map_or_else(String::new, |game| game.as_str().to_string()),
        ),
    ];
    params.extend(optionals);
    Ok(params)
}

fn player_lookup_params(
    search: Option<&str>,
    steam_id: Option<&str>,
    profile_id: Option<&str>,
    options: &[(&str, &str)],
    include_flag: bool,
) -> Aoe2NetResult<Vec<(&'static str, String)>> {
    require_player_query(search, steam_id, profile_id)?;

    let optionals = merge_optional_params(options, &[("leaderboard_id", "3")])?;

    let mut params = Vec::with_capacity(5);
    if include_flag {
        params.push(("flag", "false".to_string()));
    }
    params.push(("search", search.unwrap_or_default().to_string()));
    params.push(("steam_id", steam_id.unwrap_or_default().to_string()));
    params.push(("profile_id", profile_id.unwrap_or_default().to_string()));
    params.extend(optionals);
    Ok(params)
}
