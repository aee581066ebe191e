use std::path::PathBuf;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};

use crate::{
    command::play::screens::{
        GameOverScreen, LeaderboardScreen, MenuScreen, QuizScreen, Screen, Transition,
    },
    leaderboard::LeaderboardStore,
};

/// Entries shown on the leaderboard screens.
const LEADERBOARD_LIMIT: usize = 10;

/// The play TUI: dispatches draw and input to the active screen and applies
/// the screen transitions, holding the leaderboard store across screens.
#[derive(Debug)]
pub struct PlayApp {
    store: LeaderboardStore,
    screen: Screen,
}

impl PlayApp {
    pub fn new(leaderboard_path: PathBuf) -> Self {
        Self {
            store: LeaderboardStore::new(leaderboard_path),
            screen: Screen::Menu(MenuScreen::default()),
        }
    }

    pub(crate) fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            let event = event::read()?;
            if let Event::Key(key) = &event
                && key.kind != KeyEventKind::Press
            {
                continue;
            }
            let transition = self.handle_event(&event);
            if !self.apply(transition)? {
                return Ok(());
            }
        }
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        match &self.screen {
            Screen::Menu(screen) => screen.draw(frame),
            Screen::Quiz(screen) => screen.draw(frame),
            Screen::Leaderboard(screen) => screen.draw(frame),
            Screen::GameOver(screen) => screen.draw(frame),
        }
    }

    fn handle_event(&mut self, event: &Event) -> Transition {
        match &mut self.screen {
            Screen::Menu(screen) => screen.handle_event(event),
            Screen::Quiz(screen) => screen.handle_event(event),
            Screen::Leaderboard(screen) => screen.handle_event(event),
            Screen::GameOver(screen) => screen.handle_event(event),
        }
    }

    /// Applies a screen transition, returning `false` when the app should
    /// exit.
    fn apply(&mut self, transition: Transition) -> anyhow::Result<bool> {
        match transition {
            Transition::None => {}
            Transition::StartGame(player_name) => {
                self.screen = Screen::Quiz(QuizScreen::new(player_name));
            }
            Transition::ShowLeaderboard => {
                self.screen = Screen::Leaderboard(LeaderboardScreen::new(
                    self.store.list(LEADERBOARD_LIMIT),
                ));
            }
            Transition::FinishGame { player_name, score } => {
                // Fetch the previous best before this game lands on the board.
                let best_score = self.store.best_score(&player_name);
                self.store.save(&player_name, score)?;
                self.screen = Screen::GameOver(GameOverScreen::new(
                    player_name,
                    score,
                    best_score,
                    self.store.list(LEADERBOARD_LIMIT),
                ));
            }
            Transition::BackToMenu => {
                self.screen = Screen::Menu(MenuScreen::default());
            }
            Transition::Exit => return Ok(false),
        }
        Ok(true)
    }
}
