mod config;
mod enemy;
mod game;
mod input;
mod movement;
mod render;
mod tui;
mod world;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::mpsc::TryRecvError;
use std::thread;

use anyhow::{Context, Result, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{INPUT_QUEUE_CAPACITY, LOG_PATH_ENV, TICK_INTERVAL};
use game::Game;
use input::Command;
use tui::Tui;

fn main() -> Result<()> {
    init_logging()?;

    let mut tui = Tui::enter().context("terminal initialisation failed")?;
    let result = run(&mut tui);

    // Restore terminal
    drop(tui);

    if let Err(err) = &result {
        error!("{err:#}");
    }
    result
}

/// Logs go to the file named by `GRID_CHASE_LOG`, since the screen belongs to
/// the game. Without it nothing is recorded.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from) else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(tui: &mut Tui) -> Result<()> {
    let (width, height) = tui.grid_size()?;
    let mut game = Game::new(width, height);
    info!(width, height, "session started");

    let events = input::spawn_reader(INPUT_QUEUE_CAPACITY).context("failed to start input reader")?;

    loop {
        // Drain what is queued right now, never wait for more.
        loop {
            let event = match events.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => bail!("input reader stopped"),
            };

            match input::command_for(event.key, game.game_over) {
                Some(Command::Quit) => {
                    info!(score = game.player.score, "quit");
                    return Ok(());
                }
                Some(Command::Restart) => {
                    let (width, height) = tui.grid_size()?;
                    game = game.restart(width, height);
                    info!(width, height, "session restarted");
                }
                Some(Command::Move(direction)) => game.move_player(direction),
                None => {}
            }
        }

        game.tick();
        tui.draw(&game)?;

        thread::sleep(TICK_INTERVAL);
    }
}
