//! Dashboard drawing.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use super::app::{App, Mode};
use crate::report::{
    chart::{bar_chart, bar_chart_height, trend_chart, trend_points},
    text::{render_facts, render_table},
    Panel, Section,
};

const SIDEBAR_WIDTH: u16 = 28;

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(2),
        ])
        .split(frame.size());

    let header = Paragraph::new(format!(" sports-dash | {} | {}", app.title, app.year))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);
    draw_sidebar(frame, body[0], app);
    draw_sections(frame, body[1], app);

    let footer = Paragraph::new(vec![Line::from(app.status.as_str()), Line::from(footer_text(app))])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[2]);
}

pub fn footer_text(app: &App) -> &'static str {
    match app.mode {
        Mode::Search => "Type a player name | Enter Search | Esc Cancel",
        Mode::Normal if app.supports_search => {
            "q Quit | ←/→ Year | ↑/↓ Team | Tab Section | / Search | r Refresh"
        }
        Mode::Normal => "q Quit | ←/→ Year | ↑/↓ Team | Tab Section | r Refresh",
    }
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(3)];
    if app.supports_search {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let year = Paragraph::new(format!("< {} >", app.year))
        .block(Block::default().borders(Borders::ALL).title("Year"));
    frame.render_widget(year, rows[0]);

    if app.supports_search {
        let (text, style) = match app.mode {
            Mode::Search => (
                format!("{}_", app.search_input),
                Style::default().fg(Color::Yellow),
            ),
            Mode::Normal => (app.search.clone().unwrap_or_default(), Style::default()),
        };
        let search = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title("Player search"));
        frame.render_widget(search, rows[1]);
    }

    let items: Vec<ListItem> = app
        .options
        .iter()
        .map(|o| ListItem::new(o.as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Teams"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, rows[rows.len() - 1], &mut state);
}

fn draw_sections(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let titles: Vec<Line> = app
        .sections
        .iter()
        .map(|s| Line::from(s.title.as_str()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, rows[0]);

    match app.current_section() {
        Some(section) => draw_section(frame, rows[1], section),
        None => frame.render_widget(
            Paragraph::new("Nothing loaded yet.").block(Block::default().borders(Borders::ALL)),
            rows[1],
        ),
    }
}

/// Rows a panel asks for; trends take what is left.
fn panel_constraint(panel: &Panel) -> Constraint {
    let h = |n: usize| Constraint::Length(n.min(u16::MAX as usize - 2) as u16 + 2);
    match panel {
        Panel::Table(table) => h(table.rows.len() + 2),
        Panel::Bars(series) => h(bar_chart_height(series) as usize),
        Panel::Trend(_) => Constraint::Min(10),
        Panel::Facts { items } => h(items.len()),
        Panel::Message(_) => h(1),
    }
}

fn draw_section(frame: &mut Frame, area: Rect, section: &Section) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(section.panels.iter().map(panel_constraint).collect::<Vec<_>>())
        .split(area);

    for (panel, area) in section.panels.iter().zip(areas.iter()) {
        let block = Block::default().borders(Borders::ALL);
        match panel {
            Panel::Table(table) => {
                let lines: Vec<Line> = render_table(table).into_iter().map(Line::from).collect();
                frame.render_widget(Paragraph::new(lines).block(block), *area);
            }
            Panel::Bars(series) => {
                frame.render_widget(bar_chart(series).block(block), *area);
            }
            Panel::Trend(series) => {
                let points = trend_points(series);
                frame.render_widget(trend_chart(series, &points).block(block), *area);
            }
            Panel::Facts { items } => {
                let lines: Vec<Line> = render_facts(items).into_iter().map(Line::from).collect();
                frame.render_widget(Paragraph::new(lines).block(block), *area);
            }
            Panel::Message(text) => {
                let message = Paragraph::new(text.as_str())
                    .wrap(Wrap { trim: true })
                    .style(Style::default().fg(Color::Yellow));
                frame.render_widget(message.block(block), *area);
            }
        }
    }
}
