use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::model::Game;

use super::{card, list_date};

fn entry(game: &Game) -> ListItem<'static> {
    let side = if game.is_home { "vs" } else { "@" };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{:<12}", list_date(&game.date)), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("{:<14}", game.time), Style::default().fg(Color::Gray)),
        Span::raw(format!("{} {}", side, game.opponent)),
    ]))
}

/// Remaining games after the next one. `selected` indexes into `games`.
pub fn draw_schedule_list(f: &mut Frame, area: Rect, games: &[Game], selected: Option<usize>) {
    let items: Vec<ListItem> = games.iter().map(entry).collect();
    let list = List::new(items)
        .block(card("Upcoming Schedule", selected.is_some()))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray).fg(Color::White))
        .highlight_symbol("› ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
