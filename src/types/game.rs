/// Error when a string is not a recognized game code.
#[derive(Debug)]
pub struct InvalidGameCode(pub String);

impl std::error::Error for InvalidGameCode {}

impl std::fmt::Display for InvalidGameCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "the code \"{}\" is not a valid game", self.0)
    }
}

/// The games the api serves data for
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub enum Game {
    /// Age of Empires: Definitive Edition
    AoeOneDe,
    /// Age of Empires 2: HD Edition
    AoeTwoHd,
    /// Age of Empires 2: Definitive Edition
    AoeTwoDe,
    /// Age of Empires 3: Definitive Edition
    AoeThreeDe,
    /// Age of Empires 4
    AoeFour,
}

impl Game {
    /// The code the api uses for this game
    pub fn as_str(self) -> &'static str {
        match self {
            Game::AoeOneDe => "aoe1de",
            Game::AoeTwoHd => "aoe2hd",
            Game::AoeTwoDe => "aoe2de",
            Game::AoeThreeDe => "aoe3de",
            Game::AoeFour => "aoe4",
        }
    }
}

impl std::str::FromStr for Game {
    type Err = InvalidGameCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "aoe1de" => Ok(Game::AoeOneDe),
            "aoe2hd" => Ok(Game::AoeTwoHd),
            "aoe2de" => Ok(Game::AoeTwoDe),
            "aoe3de" => Ok(Game::AoeThreeDe),
            "aoe4" => Ok(Game::AoeFour),
            code => Err(InvalidGameCode(code.to_string())),
        }
    }
}

impl TryFrom<String> for Game {
    type Error = InvalidGameCode;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Game> for String {
    fn from(game: Game) -> Self {
        game.as_str().to_string()
    }
}
