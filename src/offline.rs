use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::data::{ApiError, ApiResult, ScheduleApi};
use crate::logos::HOME_TEAM;
use crate::model::{Game, GameDetails, Matchup};
use crate::teams;

const BUNDLED_SCHEDULE: &str = include_str!("../assets/schedule.json");
const UPCOMING_LIMIT: usize = 10;

/// Serves the bundled season schedule and the static team reference data
/// in place of the backend. A game is considered played once it has a result.
pub struct OfflineSource {
    season: Vec<Game>,
}

impl OfflineSource {
    pub fn bundled() -> ApiResult<Self> {
        Self::from_json(BUNDLED_SCHEDULE)
    }

    pub fn from_json(json: &str) -> ApiResult<Self> {
        let season = serde_json::from_str(json).map_err(|e| ApiError::Decode {
            url: "bundled schedule".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { season })
    }

    fn head_to_head(&self, opponent: &str) -> Vec<Matchup> {
        self.season
            .iter()
            .filter(|g| g.opponent == opponent)
            .filter_map(|g| {
                g.result.map(|result| Matchup {
                    date: g.date.clone(),
                    score: g.score.clone().unwrap_or_default(),
                    result,
                })
            })
            .rev()
            .collect()
    }
}

fn highlights_link(game: &Game) -> Option<String> {
    let query = format!("{} vs {} {} highlights", HOME_TEAM, game.opponent, game.date);
    Url::parse_with_params("https://www.youtube.com/results", &[("search_query", query)])
        .ok()
        .map(String::from)
}

#[async_trait]
impl ScheduleApi for OfflineSource {
    async fn last_game(&self) -> ApiResult<Option<Game>> {
        Ok(self
            .season
            .iter()
            .rev()
            .find(|g| g.result.is_some())
            .map(|g| Game {
                youtube_link: g.youtube_link.clone().or_else(|| highlights_link(g)),
                ..g.clone()
            }))
    }

    async fn schedule(&self) -> ApiResult<Vec<Game>> {
        Ok(self
            .season
            .iter()
            .filter(|g| g.result.is_none())
            .take(UPCOMING_LIMIT)
            .cloned()
            .collect())
    }

    async fn game_details(&self, id: &str) -> ApiResult<GameDetails> {
        let game = self.season.iter().find(|g| g.id == id).ok_or_else(|| ApiError::Status {
            url: format!("offline:/api/game/{}", id),
            status: StatusCode::NOT_FOUND,
        })?;

        if !teams::is_listed(&game.opponent) {
            debug!(opponent = %game.opponent, "no reference profile, using default");
        }
        let mut details = GameDetails::from_profile(&game.opponent, &teams::opponent_profile(&game.opponent));
        let played = self.head_to_head(&game.opponent);
        if !played.is_empty() {
            details.h2h = played;
        }
        Ok(details)
    }
}
