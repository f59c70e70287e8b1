use crate::tui::app::{Action, App};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length((Action::ALL.len() + 3) as u16),
            Constraint::Min(5),
            Constraint::Length((app.removed().len() + 3).max(4) as u16),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_menu(), chunks[1]);
    frame.render_widget(build_history(app, chunks[2].height), chunks[2]);
    frame.render_widget(build_removed(app), chunks[3]);
    frame.render_widget(build_prompt(app), chunks[4]);
}

fn build_header(app: &'_ App) -> Block<'_> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Railflow ").style(Style::default().bold().cyan()),
            Span::raw("—").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(" Stations: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", app.network().station_count())).style(Style::default().bold()),
            Span::raw(" Segments: ").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!("{}", app.network().segment_count())).style(Style::default().bold()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_menu() -> Table<'static> {
    Table::new(
        Action::ALL.iter().enumerate().map(|(i, action)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().bold()),
                Cell::from(action.label()),
            ])
        }),
        [Constraint::Length(4), Constraint::Min(40)],
    )
    .header(
        Row::new([Cell::from("Key"), Cell::from("Query")])
            .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Menu ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_history(app: &'_ App, height: u16) -> Paragraph<'_> {
    let visible = height.saturating_sub(2) as usize;
    let start = app.history().len().saturating_sub(visible);
    let lines: Vec<Line> = app.history()[start..]
        .iter()
        .map(|entry| {
            if entry.starts_with("rejected") || entry.starts_with("restore failed") {
                Line::from(Span::raw(entry.as_str()).style(Style::default().light_red()))
            } else {
                Line::from(entry.as_str())
            }
        })
        .collect();

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Results ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_removed(app: &'_ App) -> Table<'_> {
    let net = app.network();
    Table::new(
        app.removed().iter().map(|undo| {
            let (a, b) = undo.endpoints();
            Row::new(vec![
                Cell::from(net.vertex(a).station().name()),
                Cell::from(net.vertex(b).station().name()),
            ])
        }),
        [Constraint::Length(25), Constraint::Length(25)],
    )
    .header(
        Row::new([Cell::from("From"), Cell::from("To")])
            .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Removed segments ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_prompt(app: &'_ App) -> Paragraph<'_> {
    let line = match app.prompt() {
        Some(prompt) => Line::from(vec![
            Span::raw(format!(" {prompt} ")).style(Style::default().bold().cyan()),
            Span::raw(app.input().to_string()),
            Span::raw("_").style(Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
        None => Line::from(
            Span::raw(" press 1-6 to run a query, q to quit ")
                .style(Style::default().add_modifier(Modifier::DIM)),
        ),
    };
    Paragraph::new(line)
}
