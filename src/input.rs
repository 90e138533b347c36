use std::io;
use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::thread;

use crossterm::event::{self as ct_event, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

use crate::movement::Direction;

/// A key press read off the terminal, handed from the reader thread to the
/// game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub key: KeyEvent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

/// Translate a key into a command for the current state. While playing the
/// arrows move, Ctrl-R restarts and Esc/Ctrl-C quit. After a game over only
/// `R` (restart) and `C` (quit) count, plus Esc so the game can always be
/// left.
pub fn command_for(key: KeyEvent, game_over: bool) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if game_over {
        return match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            KeyCode::Esc => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Char('r') if ctrl => Some(Command::Restart),
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        _ => None,
    }
}

/// Start the terminal reader thread. Presses land in a queue of `capacity`
/// slots; the reader blocks while the queue is full.
pub fn spawn_reader(capacity: usize) -> io::Result<Receiver<InputEvent>> {
    let (sender, receiver) = sync_channel(capacity);
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || forward_keys(std::iter::repeat_with(ct_event::read), &sender))?;
    Ok(receiver)
}

/// Pump key presses from `events` into `sender` until the source fails or
/// the game loop hangs up.
pub fn forward_keys<I>(events: I, sender: &SyncSender<InputEvent>)
where
    I: IntoIterator<Item = io::Result<CtEvent>>,
{
    for event in events {
        match event {
            Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                if sender.send(InputEvent { key }).is_err() {
                    debug!("game loop gone, input reader exiting");
                    return;
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "terminal read failed, input reader exiting");
                return;
            }
        }
    }
}
