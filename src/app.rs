use std::sync::Arc;

use crossterm::event::KeyCode;
use image::DynamicImage;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::data::{DataClient, ScheduleApi};
use crate::logos::{team_logo_url, LogoStore, HOME_TEAM, PLACEHOLDER_LOGO};
use crate::model::GameDetails;
use crate::pages::{details::DetailsPage, home::{HomeData, HomePage}};
use crate::router::Route;
use crate::views::{WARRIORS_BLUE, WARRIORS_GOLD};

#[derive(Debug)]
pub enum AppMessage {
    HomeLoaded { generation: u64, data: HomeData },
    DetailsLoaded { generation: u64, details: Option<GameDetails> },
    LogoLoaded { url: String, img: DynamicImage },
}

#[derive(Debug)]
enum Page {
    Home(HomePage),
    Details(DetailsPage),
}

pub struct App {
    pub should_quit: bool,
    route: Route,
    page: Page,
    /// Bumped on every navigation; messages from older pages are dropped.
    generation: u64,
    api: Arc<dyn ScheduleApi>,
    tx: mpsc::Sender<AppMessage>,
    logo_client: Option<Arc<DataClient>>,
    logos: LogoStore,
    show_logos: bool,
}

impl App {
    /// `logo_client` is `None` when logos are disabled.
    pub fn new(
        api: Arc<dyn ScheduleApi>,
        tx: mpsc::Sender<AppMessage>,
        logo_client: Option<Arc<DataClient>>,
        start: Route,
    ) -> Self {
        let show_logos = logo_client.is_some();
        let page = Page::Home(HomePage::mount(api.clone(), tx.clone(), 0));
        let mut app = Self {
            should_quit: false,
            route: Route::Home,
            page,
            generation: 0,
            api,
            tx,
            logo_client,
            logos: LogoStore::default(),
            show_logos,
        };
        if start != Route::Home {
            app.navigate(start);
        }
        app
    }

    /// Tears down the current page (aborting its load) and mounts the next one.
    pub fn navigate(&mut self, route: Route) {
        self.generation += 1;
        info!(path = %route.path(), generation = self.generation, "navigate");
        let page = match &route {
            Route::Home => Page::Home(HomePage::mount(self.api.clone(), self.tx.clone(), self.generation)),
            Route::Game { id, hint } => {
                if let Some(game) = hint {
                    self.request_logo(&game.opponent);
                }
                self.request_logo(HOME_TEAM);
                Page::Details(DetailsPage::mount(
                    self.api.clone(),
                    self.tx.clone(),
                    self.generation,
                    id.clone(),
                    hint.as_ref(),
                ))
            }
        };
        self.page = page;
        self.route = route;
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') if self.logo_client.is_some() => self.show_logos = !self.show_logos,
            KeyCode::Char('r') => self.navigate(self.route.clone()),
            KeyCode::Down | KeyCode::Char('j') => {
                if let Page::Home(home) = &mut self.page {
                    home.next();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Page::Home(home) = &mut self.page {
                    home.previous();
                }
            }
            KeyCode::Enter => {
                let target = match &self.page {
                    Page::Home(home) => home.selected_game().map(Route::game),
                    Page::Details(_) => None,
                };
                if let Some(route) = target {
                    self.navigate(route);
                }
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if matches!(self.page, Page::Details(_)) {
                    self.navigate(Route::Home);
                }
            }
            _ => {}
        }
    }

    pub fn on_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::LogoLoaded { url, img } => self.logos.insert(url, img),
            AppMessage::HomeLoaded { generation, data } if generation == self.generation => {
                let Page::Home(home) = &mut self.page else {
                    return;
                };
                let opponents: Vec<String> = data.opponents().map(str::to_string).collect();
                home.loaded(data);
                for opponent in opponents {
                    self.request_logo(&opponent);
                }
            }
            AppMessage::DetailsLoaded { generation, details } if generation == self.generation => {
                let Page::Details(page) = &mut self.page else {
                    return;
                };
                page.loaded(details);
                if let Some(opponent) = page.opponent().map(str::to_string) {
                    self.request_logo(&opponent);
                }
            }
            AppMessage::HomeLoaded { generation, .. } | AppMessage::DetailsLoaded { generation, .. } => {
                debug!(generation, current = self.generation, "dropping stale page load");
            }
        }
    }

    fn request_logo(&mut self, team: &str) {
        let Some(client) = self.logo_client.clone() else {
            return;
        };
        let url = team_logo_url(team);
        if url == PLACEHOLDER_LOGO || !self.logos.claim(&url) {
            return;
        }
        let tx = self.tx.clone();
        tokio::spawn(async move {
            match client.fetch_logo(&url).await {
                Ok(img) => {
                    let _ = tx.send(AppMessage::LogoLoaded { url, img }).await;
                }
                Err(e) => debug!(error = %e, "logo unavailable"),
            }
        });
    }

    fn logos(&self) -> Option<&LogoStore> {
        self.show_logos.then_some(&self.logos)
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    draw_header(f, app, chunks[0]);
    let body = chunks[1].inner(Margin::new(1, 0));
    match &app.page {
        Page::Home(home) => home.draw(f, body, app.logos()),
        Page::Details(details) => details.draw(f, body, app.logos()),
    }
    draw_footer(f, chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(WARRIORS_GOLD))
        .style(Style::default().bg(WARRIORS_BLUE));
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Warriors Schedule",
            Style::default().fg(WARRIORS_GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.route.path()), Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(block);
    f.render_widget(title, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled("Go Warriors!", Style::default().fg(WARRIORS_GOLD).add_modifier(Modifier::BOLD)),
        Span::styled(
            "   ↑/↓ select  enter open  esc back  r reload  l logos  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
}
