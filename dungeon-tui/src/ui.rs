//! Render the dungeon TUI: room panel, status panel, event log, hotkey bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, app, rows[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[1]);
    render_room(frame, app, panels[0]);
    render_status(frame, app, panels[1]);

    render_log(frame, app, rows[2]);
    render_hotkeys(frame, rows[3]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let position = app.session.position();
    let title = if app.session.is_complete() {
        "Dungeon cleared!".to_string()
    } else {
        format!(
            "Floor {}/{}, room {}/{}",
            position.floor + 1,
            app.session.dungeon().total_floors(),
            position.room + 1,
            app.session.dungeon().rooms_per_floor(),
        )
    };
    let widget = Paragraph::new(title)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Dungeon"));
    frame.render_widget(widget, area);
}

fn render_room(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    match app.session.current_room() {
        Ok(view) => {
            lines.push(Line::from(view.description.clone()));
            match &view.monster {
                Some(m) => lines.push(Line::from(Span::styled(
                    format!("{} — {} damage, {} health", m.name, m.damage, m.health),
                    Style::default().fg(Color::Red),
                ))),
                None => lines.push(Line::from(Span::styled(
                    "All quiet.",
                    Style::default().fg(Color::DarkGray),
                ))),
            }
            if let Some(item) = &view.item {
                lines.push(Line::from(Span::styled(
                    format!("On the floor: {item}"),
                    Style::default().fg(Color::Yellow),
                )));
            }
        }
        Err(_) => {
            let text = if app.session.is_complete() {
                "You stand victorious at the bottom of the dungeon."
            } else {
                "Darkness."
            };
            lines.push(Line::from(text));
        }
    }
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Room"));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let player = app.session.player();
    let block = Block::default().borders(Borders::ALL).title("Status");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let health = Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(player.health.ratio() as f64)
        .label(format!("HP {}/{}", player.health.current.max(0), player.health.maximum));
    frame.render_widget(health, rows[0]);

    let summary = Paragraph::new(format!(
        "MP {}  level {}  XP {}",
        player.mana, player.level, player.experience
    ));
    frame.render_widget(summary, rows[1]);

    let items: Vec<ListItem> = if player.inventory.is_empty() {
        vec![ListItem::new("(empty pack)")]
    } else {
        player
            .inventory
            .iter()
            .enumerate()
            .map(|(i, item)| ListItem::new(format!("{}. {item}", i + 1)))
            .collect()
    };
    frame.render_widget(List::new(items), rows[2]);
}

fn render_log(frame: &mut Frame, app: &App, area: Rect) {
    // Show the tail that fits inside the bordered panel
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let lines: Vec<Line> = app.log[start..]
        .iter()
        .map(|entry| Line::from(entry.clone()))
        .collect();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Events"));
    frame.render_widget(widget, area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        " f forward | b back | i inspect | a attack | c cast | r flee | 1-9 drink | q quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(widget, area);
}
