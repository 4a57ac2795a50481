use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::logos::{LogoStore, HOME_TEAM};
use crate::model::{GameDetails, GameResult};

use super::{card, draw_logo, WARRIORS_GOLD};

fn draw_matchup_header(f: &mut Frame, area: Rect, details: &GameDetails, logos: Option<&LogoStore>) {
    let block = card("Matchup", false);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(rows[0]);

    draw_logo(f, cols[0], HOME_TEAM, logos);
    draw_logo(f, cols[2], &details.opponent, logos);

    let names = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ])
        .split(rows[1]);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    f.render_widget(Paragraph::new("Warriors").style(bold).alignment(Alignment::Center), names[0]);
    f.render_widget(
        Paragraph::new("VS")
            .style(Style::default().fg(WARRIORS_GOLD).add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center),
        names[1],
    );
    f.render_widget(
        Paragraph::new(details.opponent.clone()).style(bold).alignment(Alignment::Center),
        names[2],
    );

    let record = Paragraph::new(format!("Opponent Record: {}", details.record))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(record, rows[2]);
}

fn draw_scorers(f: &mut Frame, area: Rect, details: &GameDetails) {
    let block = card("Top Scorers (Season)", false);
    if details.scorers.is_empty() {
        let p = Paragraph::new("Stats not available yet.")
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let items: Vec<ListItem> = details
        .scorers
        .iter()
        .enumerate()
        .map(|(i, player)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<24}", player.name), Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{} PPG", player.ppg), Style::default().fg(WARRIORS_GOLD)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(block), area);
}

fn draw_matchups(f: &mut Frame, area: Rect, details: &GameDetails) {
    let items: Vec<ListItem> = details
        .h2h
        .iter()
        .map(|m| {
            let color = match m.result {
                GameResult::Win => Color::Green,
                GameResult::Loss => Color::Red,
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<14}", m.date)),
                Span::raw(format!("{:<14}", m.score)),
                Span::styled(m.result.letter(), Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ]))
        })
        .collect();
    f.render_widget(List::new(items).block(card("Season Matchups", false)), area);
}

/// Rows for a bordered list of `len` entries.
fn list_height(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX).saturating_add(2)
}

pub fn draw_game_details(f: &mut Frame, area: Rect, details: &GameDetails, logos: Option<&LogoStore>) {
    let header_height = if logos.is_some() { 12 } else { 5 };
    let scorers_height = list_height(details.scorers.len().max(1));
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Length(header_height),
        Constraint::Length(scorers_height),
    ];
    if !details.h2h.is_empty() {
        constraints.push(Constraint::Length(list_height(details.h2h.len())));
    }
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    f.render_widget(
        Paragraph::new("← Back to Schedule (Esc)").style(Style::default().fg(Color::Cyan)),
        chunks[0],
    );
    draw_matchup_header(f, chunks[1], details, logos);
    draw_scorers(f, chunks[2], details);
    if !details.h2h.is_empty() {
        draw_matchups(f, chunks[3], details);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Matchup, Scorer};
    use crate::teams;
    use crate::views::test_support::render;

    fn draw(details: &GameDetails) -> String {
        render(80, 24, |f| {
            let area = f.area();
            draw_game_details(f, area, details, None)
        })
    }

    #[test]
    fn full_record() {
        let details = GameDetails {
            opponent: "Denver Nuggets".into(),
            record: "12-4".into(),
            scorers: vec![Scorer {
                name: "Nikola Jokic".into(),
                ppg: 28.9,
                img: String::new(),
            }],
            h2h: vec![Matchup {
                date: "Nov 5, 2025".into(),
                score: "108-112".into(),
                result: GameResult::Loss,
            }],
        };
        let screen = draw(&details);
        assert!(screen.contains("Opponent Record: 12-4"));
        assert!(screen.contains("Nikola Jokic"));
        assert!(screen.contains("28.9 PPG"));
        assert!(screen.contains("Season Matchups"));
        assert!(screen.contains("108-112"));
    }

    #[test]
    fn empty_lists_show_placeholder_and_hide_matchups() {
        let details = GameDetails {
            opponent: "Utah Jazz".into(),
            record: "N/A".into(),
            scorers: vec![],
            h2h: vec![],
        };
        let screen = draw(&details);
        assert!(screen.contains("Utah Jazz"));
        assert!(screen.contains("Opponent Record: N/A"));
        assert!(screen.contains("Stats not available yet."));
        assert!(!screen.contains("Season Matchups"));
    }

    #[test]
    fn list_height_saturates() {
        assert_eq!(list_height(3), 5);
        assert_eq!(list_height(70_000), u16::MAX);
    }

    #[test]
    fn default_profile_renders_without_error() {
        let profile = teams::opponent_profile("Phoenix Suns");
        let details = GameDetails::from_profile("Phoenix Suns", &profile);
        let screen = draw(&details);
        assert!(screen.contains("Opponent Record: 0-0"));
        assert!(screen.contains("Player One"));
        assert!(screen.contains("Player Three"));
        assert!(!screen.contains("Season Matchups"));
    }
}
