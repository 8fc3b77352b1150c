use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{DropOutcome, Game, GameOutcome, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::cell::Cell;
use std::io;
use std::rc::Rc;

pub struct App {
    game: Game,
    selected_column: usize,
    start_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// Set by the game's store subscriptions and by cursor/message changes
    needs_redraw: Rc<Cell<bool>>,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let mut game = Game::with_rules(config.rules);
        let needs_redraw = Rc::new(Cell::new(true));

        let flag = Rc::clone(&needs_redraw);
        game.subscribe_board(move |_| flag.set(true));
        let flag = Rc::clone(&needs_redraw);
        game.subscribe_current_player(move |_| flag.set(true));
        let flag = Rc::clone(&needs_redraw);
        game.subscribe_winner(move |_| flag.set(true));

        App {
            game,
            selected_column: config.ui.start_column,
            start_column: config.ui.start_column,
            should_quit: false,
            message: None,
            needs_redraw,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            if self.needs_redraw.replace(false) {
                terminal
                    .draw(|f| self.render(f))
                    .map_err(Into::<io::Error>::into)?;
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle terminal events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(..) => self.needs_redraw.set(true),
            _ => {}
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.set_message(None);

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                    self.needs_redraw.set(true);
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                    self.needs_redraw.set(true);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game.reset_game();
                self.selected_column = self.start_column;
                self.set_message(Some("New game started!".to_string()));
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        let message = match self.game.drop_piece(self.selected_column) {
            Ok(DropOutcome::Won { player, axis, .. }) => {
                Some(format!("{} wins with a {} line!", player.name(), axis.name()))
            }
            Ok(DropOutcome::Placed { .. }) => match self.game.outcome() {
                Some(GameOutcome::Draw) => Some("It's a draw!".to_string()),
                _ => None,
            },
            Ok(DropOutcome::Ignored { .. }) | Err(MoveError::ColumnFull { .. }) => {
                Some("Column is full!".to_string())
            }
            Err(MoveError::InvalidColumn { .. }) => Some("Invalid column!".to_string()),
            Err(MoveError::GameOver) => Some("Game over! Press 'r' to restart.".to_string()),
        };
        self.set_message(message);
    }

    fn set_message(&mut self, message: Option<String>) {
        if self.message != message {
            self.message = message;
            self.needs_redraw.set(true);
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
