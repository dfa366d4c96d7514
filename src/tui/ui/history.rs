//! Time-travel list rendering.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::{App, Focus};

/// Renders the list of earlier moves the player can jump back to.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let moves = app.engine().moves();
    let items: Vec<ListItem> = app
        .travel_list()
        .into_iter()
        .map(|index| match moves.get(index - 1) {
            Some(action) => ListItem::new(format!("Move {}: {}", index, action)),
            None => ListItem::new(format!("Move {}", index)),
        })
        .collect();

    let focused = *app.focus() == Focus::History;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Time Travel"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let selected = focused.then_some(*app.selected());
    let mut list_state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut list_state);
}
