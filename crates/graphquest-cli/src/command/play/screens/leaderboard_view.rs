use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    widgets::Paragraph,
};

use crate::{
    leaderboard::ScoreEntry,
    ui::widgets::{ScoreTable, style},
};

use super::Transition;

/// Read-only leaderboard view reachable from the main menu.
#[derive(Debug)]
pub struct LeaderboardScreen {
    entries: Vec<ScoreEntry>,
}

impl LeaderboardScreen {
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        Self { entries }
    }

    pub fn handle_event(&mut self, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::None;
        };
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Transition::BackToMenu,
            _ => Transition::None,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [area] = Layout::horizontal([Constraint::Length(60)])
            .flex(Flex::Center)
            .areas::<1>(frame.area());
        let [table_area, help_area] =
            Layout::vertical([Constraint::Length(14), Constraint::Length(1)])
                .flex(Flex::Center)
                .areas::<2>(area);

        frame.render_widget(ScoreTable::new(&self.entries), table_area);
        frame.render_widget(
            Paragraph::new("Esc (Back)").style(style::HELP).centered(),
            help_area,
        );
    }
}
