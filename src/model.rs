use serde::{Deserialize, Deserializer, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    pub opponent: String,
    pub date: String, // "YYYY-MM-DD"
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub is_home: bool,
    #[serde(default)]
    pub youtube_link: Option<String>,
    #[serde(default, rename = "wl")]
    pub result: Option<GameResult>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub pts: Option<i32>,
    #[serde(default, rename = "plus_minus")]
    pub plus_minus: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "L")]
    Loss,
}

impl GameResult {
    pub fn letter(&self) -> &'static str {
        match self {
            GameResult::Win => "W",
            GameResult::Loss => "L",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub name: String,
    pub ppg: f64,
    pub img: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub date: String,
    pub score: String,
    pub result: GameResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub record: String, // "W-L"
    pub scorers: Vec<Scorer>,
    pub h2h: Vec<Matchup>,
}

/// Body of `/api/game/{id}`, or a provisional stand-in built from a
/// navigation hint while that body is unavailable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameDetails {
    pub opponent: String,
    #[serde(default = "unknown_record")]
    pub record: String,
    #[serde(default)]
    pub scorers: Vec<Scorer>,
    #[serde(default)]
    pub h2h: Vec<Matchup>,
}

impl GameDetails {
    pub fn provisional(hint: &Game) -> Self {
        Self {
            opponent: hint.opponent.clone(),
            record: unknown_record(),
            scorers: Vec::new(),
            h2h: Vec::new(),
        }
    }

    pub fn from_profile(opponent: &str, profile: &OpponentProfile) -> Self {
        Self {
            opponent: opponent.to_string(),
            record: profile.record.clone(),
            scorers: profile.scorers.clone(),
            h2h: profile.h2h.clone(),
        }
    }
}

fn unknown_record() -> String {
    "N/A".to_string()
}

// The backend emits numeric ids; hand-written fixtures sometimes use strings.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_with_numeric_id_and_missing_optionals() {
        let json = r#"{"id": 22500123, "opponent": "Miami Heat", "date": "2025-11-05", "time": "7:00 PM PST", "isHome": true}"#;
        let game: Game = serde_json::from_str(json).expect("game should decode");
        assert_eq!(game.id, "22500123");
        assert!(game.is_home);
        assert_eq!(game.youtube_link, None);
        assert_eq!(game.result, None);
    }

    #[test]
    fn played_game_carries_result_fields() {
        let json = r#"{
            "id": "0022500050", "opponent": "Denver Nuggets", "date": "2025-11-05",
            "time": "", "isHome": false, "wl": "L", "score": "L 108-112",
            "pts": 108, "plus_minus": -4,
            "youtubeLink": "https://www.youtube.com/results?search_query=x"
        }"#;
        let game: Game = serde_json::from_str(json).expect("game should decode");
        assert_eq!(game.id, "0022500050");
        assert_eq!(game.result, Some(GameResult::Loss));
        assert_eq!(game.plus_minus, Some(-4));
        assert!(game.youtube_link.is_some());
    }

    #[test]
    fn null_result_is_none() {
        let json = r#"{"id": 1, "opponent": "Utah Jazz", "date": "2026-01-02", "wl": null}"#;
        let game: Game = serde_json::from_str(json).expect("game should decode");
        assert_eq!(game.result, None);
        assert_eq!(game.time, "");
    }

    #[test]
    fn details_fill_missing_fields() {
        let details: GameDetails =
            serde_json::from_str(r#"{"opponent": "Utah Jazz"}"#).expect("details should decode");
        assert_eq!(details.record, "N/A");
        assert!(details.scorers.is_empty());
        assert!(details.h2h.is_empty());
    }

    #[test]
    fn provisional_keeps_only_the_opponent() {
        let hint = Game {
            id: "7".into(),
            opponent: "Brooklyn Nets".into(),
            date: "2025-12-01".into(),
            ..Default::default()
        };
        let details = GameDetails::provisional(&hint);
        assert_eq!(details.opponent, "Brooklyn Nets");
        assert_eq!(details.record, "N/A");
        assert!(details.scorers.is_empty() && details.h2h.is_empty());
    }
}
