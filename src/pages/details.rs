use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Rect},
    widgets::Paragraph,
    Frame,
};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{info, warn};

use crate::app::AppMessage;
use crate::data::ScheduleApi;
use crate::logos::LogoStore;
use crate::model::{Game, GameDetails};
use crate::views::{card, details::draw_game_details};

pub const NOT_FOUND: &str = "Game not found";
pub const LOADING: &str = "Loading game details...";

#[derive(Debug, Clone, PartialEq)]
enum Fetch {
    Pending,
    Loaded(GameDetails),
    Failed,
}

/// What the details page shows for its current state.
#[derive(Debug, PartialEq)]
pub enum DetailsView<'a> {
    Loading,
    NotFound,
    Ready(&'a GameDetails),
}

pub async fn load_details(api: &dyn ScheduleApi, id: &str) -> Option<GameDetails> {
    match api.game_details(id).await {
        Ok(details) => {
            info!(id, opponent = %details.opponent, "game details loaded");
            Some(details)
        }
        Err(e) => {
            warn!(id, error = %e, "Error fetching game details");
            None
        }
    }
}

#[derive(Debug)]
pub struct DetailsPage {
    id: String,
    provisional: Option<GameDetails>,
    fetch: Fetch,
    load: Option<JoinHandle<()>>,
}

impl DetailsPage {
    fn new(id: String, hint: Option<&Game>) -> Self {
        Self {
            id,
            provisional: hint.map(GameDetails::provisional),
            fetch: Fetch::Pending,
            load: None,
        }
    }

    pub fn mount(
        api: Arc<dyn ScheduleApi>,
        tx: mpsc::Sender<AppMessage>,
        generation: u64,
        id: String,
        hint: Option<&Game>,
    ) -> Self {
        let mut page = Self::new(id, hint);
        let id = page.id.clone();
        page.load = Some(tokio::spawn(async move {
            let details = load_details(api.as_ref(), &id).await;
            let _ = tx.send(AppMessage::DetailsLoaded { generation, details }).await;
        }));
        page
    }

    pub fn loaded(&mut self, details: Option<GameDetails>) {
        self.load = None;
        self.fetch = match details {
            Some(details) => Fetch::Loaded(details),
            None => Fetch::Failed,
        };
    }

    pub fn view(&self) -> DetailsView<'_> {
        match (&self.fetch, &self.provisional) {
            (Fetch::Loaded(details), _) => DetailsView::Ready(details),
            (_, Some(provisional)) => DetailsView::Ready(provisional),
            (Fetch::Pending, None) => DetailsView::Loading,
            (Fetch::Failed, None) => DetailsView::NotFound,
        }
    }

    pub fn opponent(&self) -> Option<&str> {
        match self.view() {
            DetailsView::Ready(details) => Some(details.opponent.as_str()),
            _ => None,
        }
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, logos: Option<&LogoStore>) {
        let message = match self.view() {
            DetailsView::Ready(details) => {
                draw_game_details(f, area, details, logos);
                return;
            }
            DetailsView::Loading => LOADING,
            DetailsView::NotFound => NOT_FOUND,
        };
        let p = Paragraph::new(message)
            .alignment(Alignment::Center)
            .block(card("Game", false));
        f.render_widget(p, Rect { height: area.height.min(3), ..area });
    }
}

impl Drop for DetailsPage {
    fn drop(&mut self) {
        if let Some(load) = self.load.take() {
            load.abort();
        }
    }
}
