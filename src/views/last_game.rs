use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::logos::LogoStore;
use crate::model::{Game, GameResult};

use super::{card, draw_logo, short_date};

fn result_line(game: &Game) -> Option<Line<'static>> {
    let result = game.result?;
    let color = match result {
        GameResult::Win => Color::Green,
        GameResult::Loss => Color::Red,
    };
    let mut spans = vec![Span::styled(
        format!(" {} ", result.letter()),
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD),
    )];
    match (&game.score, game.pts, game.plus_minus) {
        (Some(score), _, _) => spans.push(Span::raw(format!("  {}", score))),
        (None, Some(pts), Some(pm)) => spans.push(Span::raw(format!("  {} pts ({:+})", pts, pm))),
        _ => {}
    }
    Some(Line::from(spans))
}

pub fn draw_last_game(f: &mut Frame, area: Rect, game: Option<&Game>, logos: Option<&LogoStore>) {
    let Some(game) = game else {
        return;
    };

    let block = card("Last Game", false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let logo_width = if logos.is_some() { 8 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(logo_width), Constraint::Min(0)])
        .split(inner);
    draw_logo(f, chunks[0], &game.opponent, logos);

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("vs {} ", game.opponent), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("({})", short_date(&game.date)), Style::default().fg(Color::Gray)),
    ])];
    if let Some(line) = result_line(game) {
        lines.push(line);
    }
    if let Some(link) = &game.youtube_link {
        lines.push(Line::from(vec![
            Span::styled("Watch Highlights: ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::styled(link.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::render;

    fn played() -> Game {
        Game {
            id: "22500131".into(),
            opponent: "Denver Nuggets".into(),
            date: "2025-11-05".into(),
            time: "06:00 PM PST".into(),
            is_home: false,
            result: Some(GameResult::Loss),
            score: Some("L 108-112".into()),
            ..Default::default()
        }
    }

    #[test]
    fn renders_nothing_without_a_game() {
        let screen = render(60, 6, |f| {
            let area = f.area();
            draw_last_game(f, area, None, None)
        });
        assert!(screen.trim().is_empty());
    }

    #[test]
    fn shows_opponent_short_date_and_result() {
        let screen = render(60, 6, |f| {
            let area = f.area();
            draw_last_game(f, area, Some(&played()), None)
        });
        assert!(screen.contains("Last Game"));
        assert!(screen.contains("vs Denver Nuggets (Nov 5)"), "{}", screen);
        assert!(screen.contains("L 108-112"));
        assert!(!screen.contains("Watch Highlights"));
    }

    #[test]
    fn highlights_only_when_linked() {
        let game = Game {
            youtube_link: Some("https://youtu.be/x".into()),
            ..played()
        };
        let screen = render(80, 6, |f| {
            let area = f.area();
            draw_last_game(f, area, Some(&game), None)
        });
        assert!(screen.contains("Watch Highlights: https://youtu.be/x"), "{}", screen);
    }
}
