//! TUI rendering with ratatui
//!
//! Board, keyboard, and dialogs for the daily game interface.

use super::app::{App, MessageStyle};
use crate::core::{Verdict, WORD_LEN};
use crate::game::{RewardGate, SessionPhase};
use crate::storage::GameStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - board on the left, keyboard and messages right
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_stats {
        render_stats_dialog(f, app);
    }
}

fn render_header<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let title = format!(
        "📅 DAILY WORD - {} - {}",
        app.session.language().display_name(),
        app.session.date().format("%Y-%m-%d")
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn verdict_style(verdict: Verdict) -> Style {
    match verdict {
        Verdict::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_board<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let mut lines = vec![Line::from("")];

    // Submitted guesses
    for result in app.session.results() {
        let mut spans = vec![Span::raw("  ")];
        for (i, &verdict) in result.verdicts().iter().enumerate() {
            let letter = result.guess().letter_at(i) as char;
            spans.push(Span::styled(format!(" {letter} "), verdict_style(verdict)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Current input row
    if app.session.phase() == SessionPhase::Playing {
        let mut spans = vec![Span::raw("  ")];
        let input = app.session.input();
        for i in 0..WORD_LEN {
            let cell = input
                .chars()
                .nth(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(
                cell,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Remaining empty rows
    let used = app.session.results().len()
        + usize::from(app.session.phase() == SessionPhase::Playing);
    for _ in used..app.session.attempt_cap() {
        let mut spans = vec![Span::raw("  ")];
        for _ in 0..WORD_LEN {
            spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let keyboard = app.session.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let mut spans = vec![Span::raw(" ".repeat(row + 1))];
            for letter in letters.chars() {
                let verdict = keyboard.verdict(letter as u8);
                spans.push(Span::styled(format!("{letter} "), verdict_style(verdict)));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(widget, area);
}

fn render_messages<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let (title, content, color) = match app.session.phase() {
        SessionPhase::Playing => (
            " Your Guess | Enter to submit ",
            app.session.input().to_string(),
            Color::Yellow,
        ),
        SessionPhase::AwaitingBonus => (
            " 🎁 Out of tries! Watch for a bonus guess? (y/n) ",
            String::new(),
            Color::Magenta,
        ),
        SessionPhase::Finished => {
            if app.session.won() {
                (
                    " 🎉 CONGRATULATIONS! | 'q' to quit, TAB for stats ",
                    String::new(),
                    Color::Green,
                )
            } else {
                (
                    " Game over | 'q' to quit, TAB for stats ",
                    format!("The word was {}", app.session.target().text()),
                    Color::Red,
                )
            }
        }
        SessionPhase::Loading => (" Loading... ", String::new(), Color::DarkGray),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts: {}/{}",
        app.session.results().len(),
        app.session.attempt_cap()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Streak: {} | Win Rate: {}%",
        stats.current_streak,
        stats.win_rate()
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[1]);

    let help = Paragraph::new("ESC: Quit | TAB: Stats | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_stats_dialog<S: GameStore, G: RewardGate>(f: &mut Frame, app: &App<S, G>) {
    let area = centered_rect(40, 10, f.area());
    let stats = app.session.stats();

    let lines = vec![
        Line::from(""),
        Line::from(format!("  Played           {}", stats.total_played)),
        Line::from(format!("  Win rate         {}%", stats.win_rate())),
        Line::from(format!("  Current streak   {}", stats.current_streak)),
        Line::from(format!("  Max streak       {}", stats.max_streak)),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .title(format!(
                " 📊 Statistics - {} ",
                app.session.language().display_name()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// Center a fixed-size rect inside `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height),
    )
}
