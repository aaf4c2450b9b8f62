use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::GameEngine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    rng: StdRng,
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let mut rng = config.rng();
        let engine = config.new_game(&mut rng)?;
        let selected_column = middle_column(&engine);
        Ok(App {
            config,
            rng,
            engine,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Selected column, 1-based.
    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 1 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < self.engine.column_count() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '0' as usize;
                if column <= self.engine.column_count() {
                    self.selected_column = column;
                    self.drop_piece(column);
                }
            }
            KeyCode::Char('r') => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.config.new_game(&mut self.rng) {
            Ok(engine) => {
                self.engine = engine;
                self.selected_column = middle_column(&self.engine);
                self.message = Some("New game started!".to_string());
            }
            Err(err) => {
                log::error!("restart failed: {}", err);
                self.message = Some(format!("Could not restart: {err}"));
            }
        }
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: usize) {
        if self.engine.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        if let Err(err) = self.engine.try_drop(column) {
            self.message = Some(format!("Can't drop there: {err}"));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.engine, self.selected_column, self.message());
    }
}

fn middle_column(engine: &GameEngine) -> usize {
    engine.column_count().div_ceil(2)
}
