//! Application loop: draw, read a key, apply the reported action.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::board::Board;
use crate::model::{Filter, MissionStatus};

use super::screens::{BoardScreen, next_filter, select_filter};

/// What a screen interaction asks the board to do.
///
/// The single upward channel from the widgets to the state owner.
pub enum BoardAction {
    /// Replace the active filter.
    SetFilter(Filter),

    /// Set one mission's status.
    SetStatus { id: u32, status: MissionStatus },
}

/// Runs the TUI event loop until the user quits.
pub fn run() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal) -> io::Result<()> {
    let mut board = Board::new();
    let mut screen = BoardScreen::new();

    loop {
        terminal.draw(|frame| screen.render(frame, &board))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => {
                    screen.move_up();
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    screen.move_down(board.visible().len());
                    None
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    screen.picker_left();
                    None
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    screen.picker_right();
                    None
                }
                KeyCode::Enter => screen.activate(&board.visible()),
                KeyCode::Tab => Some(BoardAction::SetFilter(next_filter(board.filter()))),
                KeyCode::Char(c @ '1'..='4') => {
                    select_filter((u32::from(c) - u32::from('1')) as usize)
                }
                _ => None,
            };

            if let Some(action) = action {
                apply(&mut board, &mut screen, action);
            }
        }
    }
}

/// Applies an action to the board, then re-clamps the screen's selection
/// against the freshly derived visible list.
fn apply(board: &mut Board, screen: &mut BoardScreen, action: BoardAction) {
    match action {
        BoardAction::SetFilter(filter) => board.set_filter(filter),
        BoardAction::SetStatus { id, status } => board.update_status(id, status),
    }
    screen.sync(board.visible().len());
}
