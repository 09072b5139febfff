use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{config::AppConfig, state::simulation::SimulationState, ui};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the TUI: one training step per tick, redrawn every tick, until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails, or the session can't be built.
pub fn run(config: &AppConfig) -> Result<()> {
    let mut sim = SimulationState::new(config).context("cannot start the session")?;
    let tick = config.tick_interval();

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut running = true;

    while running {
        let started = Instant::now();
        sim.tick()?;
        terminal.draw(|f| ui::draw::draw(f, &sim.view()))?;

        // Wait out the rest of the tick, still answering keys.
        while running {
            let remaining = tick.saturating_sub(started.elapsed());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }

            let Event::Key(k) = event::read()? else {
                continue;
            };

            if k.kind != KeyEventKind::Press {
                continue;
            }

            match k.code {
                KeyCode::Char('q') | KeyCode::Esc => running = false,
                KeyCode::Char(' ') => {
                    sim.toggle_pause();
                    terminal.draw(|f| ui::draw::draw(f, &sim.view()))?;
                }
                _ => {}
            }
        }
    }

    info!("quit requested, stopping");
    terminal.show_cursor()?;
    Ok(())
}
