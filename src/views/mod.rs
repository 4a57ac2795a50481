pub mod details;
pub mod last_game;
pub mod next_game;
pub mod schedule_list;

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::logos::{team_logo_url, LogoStore, TeamLogo};

pub const WARRIORS_BLUE: Color = Color::Rgb(29, 66, 138);
pub const WARRIORS_GOLD: Color = Color::Rgb(255, 199, 44);

/// Builds the calendar date from its parts so "2025-11-05" stays the 5th
/// whatever the local offset.
pub fn parse_game_date(date: &str) -> Option<NaiveDate> {
    let mut parts = date.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn format_date(date: &str, fmt: &str) -> String {
    match parse_game_date(date) {
        Some(d) => d.format(fmt).to_string(),
        None => date.to_string(),
    }
}

/// "Nov 5"
pub fn short_date(date: &str) -> String {
    format_date(date, "%b %-d")
}

/// "Wednesday, November 5"
pub fn long_date(date: &str) -> String {
    format_date(date, "%A, %B %-d")
}

/// "Wed, Nov 5"
pub fn list_date(date: &str) -> String {
    format_date(date, "%a, %b %-d")
}

pub fn card(title: &str, highlighted: bool) -> Block<'_> {
    let border = if highlighted { WARRIORS_GOLD } else { Color::DarkGray };
    Block::default()
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(WARRIORS_GOLD).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(if highlighted { BorderType::Double } else { BorderType::Rounded })
        .border_style(Style::default().fg(border))
}

/// Draws the team's logo if it has been downloaded; otherwise leaves the area empty.
pub fn draw_logo(f: &mut Frame, area: Rect, team: &str, logos: Option<&LogoStore>) {
    if let Some(img) = logos.and_then(|l| l.get(&team_logo_url(team))) {
        f.render_widget(TeamLogo { img }, area);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

    pub fn render<F: FnOnce(&mut Frame)>(width: u16, height: u16, draw: F) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
        terminal.draw(draw).expect("draw");
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buf: &Buffer) -> String {
        let width = buf.area.width as usize;
        buf.content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
