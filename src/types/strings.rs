use std::collections::HashMap;

/// One localized id/text pair
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct StringEntry {
    /// The numeric id other payloads refer to
    pub id: i64,

    /// The localized text
    #[serde(rename = "string")]
    pub value: String,
}

/// The localized string tables used by the rest of the api.
///
/// Numeric fields elsewhere (civ, map type, speed, ...) index into these.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct Strings {
    /// The language the strings are in
    pub language: String,

    pub age: Vec<StringEntry>,
    pub civ: Vec<StringEntry>,
    pub game_type: Vec<StringEntry>,
    pub leaderboard: Vec<StringEntry>,
    pub map_size: Vec<StringEntry>,
    pub map_type: Vec<StringEntry>,
    pub rating_type: Vec<StringEntry>,
    pub resources: Vec<StringEntry>,
    pub speed: Vec<StringEntry>,
    pub victory: Vec<StringEntry>,
    pub visibility: Vec<StringEntry>,

    /// Unknown fields
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = include_str!("../../test_data/strings.json");

    #[test]
    fn parse_sample() {
        let strings: Strings = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(strings.language, "en");
        assert_eq!(strings.age.len(), 2);
        assert_eq!(strings.civ.len(), 2);
        assert_eq!(strings.game_type.len(), 1);
        assert_eq!(strings.leaderboard.len(), 2);
        assert_eq!(strings.map_size.len(), 1);
        assert_eq!(strings.map_type.len(), 1);
        assert_eq!(strings.rating_type.len(), 1);
        assert_eq!(strings.resources.len(), 1);
        assert_eq!(strings.speed.len(), 2);
        assert_eq!(strings.victory.len(), 1);
        assert_eq!(strings.visibility.len(), 1);

        let arabia = &strings.map_type[0];
        assert_eq!(arabia.id, 9);
        assert_eq!(arabia.value, "Arabia");
        assert!(strings.unknown.is_empty());
    }
}
