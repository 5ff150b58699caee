//! TUI application state and logic

use crate::game::{BonusDecision, GameSession, RewardGate, SessionPhase, SubmitOutcome};
use crate::storage::GameStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<S: GameStore, G: RewardGate> {
    pub session: GameSession<S, G>,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: GameStore, G: RewardGate> App<S, G> {
    /// Wrap an initialized session for interactive play
    #[must_use]
    pub fn new(session: GameSession<S, G>) -> Self {
        let mut app = Self {
            show_stats: session.phase() == SessionPhase::Finished,
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Type a five-letter word and press Enter.",
            MessageStyle::Info,
        );
        if app.session.phase() == SessionPhase::AwaitingBonus {
            app.add_message("Out of tries! Bonus guess? (y/n)", MessageStyle::Info);
        }
        app
    }

    /// Submit the current input buffer
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated game fails.
    pub fn submit(&mut self) -> Result<()> {
        match self.session.submit_guess()? {
            SubmitOutcome::Rejected => {
                self.add_message("Not a valid five-letter word!", MessageStyle::Error);
            }
            SubmitOutcome::InProgress => {
                let remaining = self.session.remaining_attempts();
                self.add_message(
                    &format!("{remaining} attempts remaining"),
                    MessageStyle::Info,
                );
            }
            SubmitOutcome::Won => {
                let celebration = match self.session.results().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Saved by the bonus try! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.show_stats = true;
            }
            SubmitOutcome::AwaitingBonus => {
                self.add_message("Out of tries! Bonus guess? (y/n)", MessageStyle::Info);
            }
            SubmitOutcome::Lost => {
                let target = self.session.target().text().to_string();
                self.add_message(
                    &format!("The word was {target}. Better luck tomorrow!"),
                    MessageStyle::Error,
                );
                self.show_stats = true;
            }
        }
        Ok(())
    }

    /// Resolve the bonus prompt
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the updated game fails.
    pub fn decide(&mut self, accepted: bool) -> Result<()> {
        match self.session.decide_bonus(accepted)? {
            BonusDecision::ExtraTryGranted => {
                self.add_message("🎁 Bonus try unlocked!", MessageStyle::Success);
            }
            BonusDecision::FinishedLost => {
                let target = self.session.target().text().to_string();
                self.add_message(
                    &format!("The word was {target}. Better luck tomorrow!"),
                    MessageStyle::Error,
                );
                self.show_stats = true;
            }
            BonusDecision::Ignored => {}
        }
        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore, G: RewardGate>(app: App<S, G>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GameStore, G: RewardGate>(
    terminal: &mut Terminal<B>,
    mut app: App<S, G>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    if app.show_stats && app.session.phase() != SessionPhase::Finished {
                        app.show_stats = false;
                    } else {
                        app.should_quit = true;
                    }
                }
                KeyCode::Tab => {
                    app.show_stats = !app.show_stats;
                }
                _ => match app.session.phase() {
                    SessionPhase::Playing => match key.code {
                        KeyCode::Char(c) => {
                            app.session.push_letter(c);
                        }
                        KeyCode::Backspace => {
                            app.session.delete_letter();
                        }
                        KeyCode::Enter => {
                            app.submit()?;
                        }
                        _ => {}
                    },
                    SessionPhase::AwaitingBonus => match key.code {
                        // 'o' accepts too, for "oui" in French mode
                        KeyCode::Char('y' | 'Y' | 'o' | 'O') => {
                            app.decide(true)?;
                        }
                        KeyCode::Char('n' | 'N') => {
                            app.decide(false)?;
                        }
                        _ => {}
                    },
                    SessionPhase::Finished => match key.code {
                        KeyCode::Char('q' | 'Q') => {
                            app.should_quit = true;
                        }
                        _ => {
                            // Game is over, ignore other keys
                        }
                    },
                    SessionPhase::Loading => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
