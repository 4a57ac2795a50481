use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::logos::{team_abbreviation, LogoStore};
use crate::model::Game;

use super::{card, draw_logo, long_date, WARRIORS_GOLD};

pub const HOME_VENUE: &str = "Chase Center";

pub fn venue(game: &Game) -> &'static str {
    if game.is_home {
        HOME_VENUE
    } else {
        ""
    }
}

/// The next-game card. Selecting it opens the game's details page.
pub fn draw_next_game(
    f: &mut Frame,
    area: Rect,
    game: Option<&Game>,
    selected: bool,
    logos: Option<&LogoStore>,
) {
    let Some(game) = game else {
        return;
    };

    let block = card("Next Game", selected);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let logo_width = if logos.is_some() { 16 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(logo_width),
            Constraint::Percentage(50),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_logo(f, chunks[0], &game.opponent, logos);

    let team_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(chunks[1]);

    let abbr = team_abbreviation(&game.opponent)
        .map(str::to_uppercase)
        .unwrap_or_else(|| game.opponent.clone());
    if team_area[0].width < 25 || team_area[0].height < 4 {
        let p = Paragraph::new(abbr)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(p, team_area[0]);
    } else {
        let big = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(Style::default().fg(WARRIORS_GOLD))
            .lines(vec![abbr.into()])
            .alignment(Alignment::Center)
            .build();
        f.render_widget(big, team_area[0]);
    }
    let opponent = Paragraph::new(game.opponent.clone())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(opponent, team_area[1]);

    let when = vec![
        Line::from(""),
        Line::styled(long_date(&game.date), Style::default().add_modifier(Modifier::BOLD)),
        Line::from(game.time.clone()),
        Line::styled(venue(game), Style::default().fg(Color::Gray)),
    ];
    f.render_widget(Paragraph::new(when).alignment(Alignment::Center), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::render;

    fn upcoming(is_home: bool) -> Game {
        Game {
            id: "22500166".into(),
            opponent: "Indiana Pacers".into(),
            date: "2025-11-10".into(),
            time: "07:00 PM PST".into(),
            is_home,
            ..Default::default()
        }
    }

    fn draw(game: Option<&Game>) -> String {
        render(90, 10, |f| {
            let area = f.area();
            draw_next_game(f, area, game, false, None)
        })
    }

    #[test]
    fn renders_nothing_without_a_game() {
        assert!(draw(None).trim().is_empty());
    }

    #[test]
    fn home_game_shows_chase_center() {
        let screen = draw(Some(&upcoming(true)));
        assert!(screen.contains("Chase Center"), "{}", screen);
        assert!(screen.contains("Monday, November 10"), "{}", screen);
        assert!(screen.contains("07:00 PM PST"));
        assert!(screen.contains("Indiana Pacers"));
    }

    #[test]
    fn away_game_never_shows_chase_center() {
        let screen = draw(Some(&upcoming(false)));
        assert!(!screen.contains("Chase Center"), "{}", screen);
        assert_eq!(venue(&upcoming(false)), "");
    }

    #[test]
    fn date_does_not_shift_a_day() {
        let game = Game {
            date: "2026-01-01".into(),
            ..upcoming(true)
        };
        let screen = draw(Some(&game));
        assert!(screen.contains("Thursday, January 1"), "{}", screen);
    }
}
