use std::sync::Arc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{info, warn};

use crate::app::AppMessage;
use crate::data::ScheduleApi;
use crate::logos::LogoStore;
use crate::model::Game;
use crate::views::{card, last_game::draw_last_game, next_game::draw_next_game, schedule_list::draw_schedule_list};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeData {
    pub last_game: Option<Game>,
    pub next_game: Option<Game>,
    pub upcoming: Vec<Game>,
}

impl HomeData {
    /// Splits the schedule into the next game and the rest, keeping backend order.
    pub fn from_responses(last_game: Option<Game>, schedule: Vec<Game>) -> Self {
        let mut games = schedule.into_iter();
        let next_game = games.next();
        Self {
            last_game,
            next_game,
            upcoming: games.collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last_game.is_none() && self.next_game.is_none() && self.upcoming.is_empty()
    }

    /// Games the user can open: the next game, then every upcoming one.
    pub fn selectable(&self) -> impl Iterator<Item = &Game> {
        self.next_game.iter().chain(self.upcoming.iter())
    }

    pub fn opponents(&self) -> impl Iterator<Item = &str> {
        self.last_game
            .iter()
            .chain(self.selectable())
            .map(|g| g.opponent.as_str())
    }
}

/// Fetches the last game and the schedule together and waits for both.
/// A failed request leaves its section empty.
pub async fn load_home(api: &dyn ScheduleApi) -> HomeData {
    let (last_game, schedule) = tokio::join!(api.last_game(), api.schedule());

    let last_game = last_game.unwrap_or_else(|e| {
        warn!(error = %e, "Error fetching last game");
        None
    });
    let schedule = schedule.unwrap_or_else(|e| {
        warn!(error = %e, "Error fetching schedule");
        Vec::new()
    });

    info!(last_game = last_game.is_some(), scheduled = schedule.len(), "home data settled");
    HomeData::from_responses(last_game, schedule)
}

#[derive(Debug)]
pub struct HomePage {
    data: Option<HomeData>,
    selected: usize,
    load: Option<JoinHandle<()>>,
}

impl HomePage {
    pub fn mount(api: Arc<dyn ScheduleApi>, tx: mpsc::Sender<AppMessage>, generation: u64) -> Self {
        let load = tokio::spawn(async move {
            let data = load_home(api.as_ref()).await;
            let _ = tx.send(AppMessage::HomeLoaded { generation, data }).await;
        });
        Self {
            data: None,
            selected: 0,
            load: Some(load),
        }
    }

    pub fn loaded(&mut self, data: HomeData) {
        self.load = None;
        self.selected = 0;
        self.data = Some(data);
    }

    fn selectable_len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.selectable().count())
    }

    pub fn next(&mut self) {
        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected >= len - 1 { 0 } else { self.selected + 1 };
    }

    pub fn previous(&mut self) {
        let len = self.selectable_len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
    }

    pub fn selected_game(&self) -> Option<&Game> {
        self.data.as_ref()?.selectable().nth(self.selected)
    }

    pub fn draw(&self, f: &mut Frame, area: Rect, logos: Option<&LogoStore>) {
        let Some(data) = &self.data else {
            let p = Paragraph::new("Loading...").alignment(Alignment::Center);
            f.render_widget(p, centered_line(area));
            return;
        };

        if data.is_empty() {
            let lines = vec![
                Line::styled("No Schedule Data Available", Style::default().add_modifier(Modifier::BOLD)),
                Line::from(""),
                Line::styled(
                    "Unable to load game data. Please ensure the backend server is running.",
                    Style::default().fg(Color::Gray),
                ),
            ];
            let p = Paragraph::new(lines).alignment(Alignment::Center).block(card("Schedule", false));
            f.render_widget(p, area);
            return;
        }

        let mut constraints = Vec::new();
        if data.last_game.is_some() {
            constraints.push(Constraint::Length(6));
        }
        if data.next_game.is_some() {
            constraints.push(Constraint::Length(10));
        }
        if !data.upcoming.is_empty() {
            constraints.push(Constraint::Min(3));
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut slot = chunks.iter().copied();
        if let Some(last) = &data.last_game {
            if let Some(rect) = slot.next() {
                draw_last_game(f, rect, Some(last), logos);
            }
        }
        // Selection index 0 is the next-game card when there is one.
        let offset = usize::from(data.next_game.is_some());
        if let Some(next) = &data.next_game {
            if let Some(rect) = slot.next() {
                draw_next_game(f, rect, Some(next), self.selected == 0, logos);
            }
        }
        if !data.upcoming.is_empty() {
            if let Some(rect) = slot.next() {
                let selected = self.selected.checked_sub(offset);
                draw_schedule_list(f, rect, &data.upcoming, selected);
            }
        }
    }
}

impl Drop for HomePage {
    fn drop(&mut self) {
        if let Some(load) = self.load.take() {
            load.abort();
        }
    }
}

fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.bottom().saturating_sub(1)), area.width, area.height.min(1))
}
