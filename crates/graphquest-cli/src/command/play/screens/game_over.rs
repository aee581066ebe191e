use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::Paragraph,
};

use crate::{
    leaderboard::ScoreEntry,
    ui::widgets::{ScoreTable, style},
};

use super::Transition;

/// End-of-game summary with the saved leaderboard standings.
#[derive(Debug)]
pub struct GameOverScreen {
    player_name: String,
    score: usize,
    best_score: Option<usize>,
    entries: Vec<ScoreEntry>,
}

impl GameOverScreen {
    pub fn new(
        player_name: String,
        score: usize,
        best_score: Option<usize>,
        entries: Vec<ScoreEntry>,
    ) -> Self {
        Self {
            player_name,
            score,
            best_score,
            entries,
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::None;
        };
        match key.code {
            KeyCode::Enter => Transition::BackToMenu,
            KeyCode::Esc | KeyCode::Char('q') => Transition::Exit,
            _ => Transition::None,
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [area] = Layout::horizontal([Constraint::Length(60)])
            .flex(Flex::Center)
            .areas::<1>(frame.area());
        let [summary_area, table_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(14),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas::<3>(area);

        let mut summary = vec![
            Line::from("GAME OVER").centered(),
            Line::from(format!("{}: {} points", self.player_name, self.score)).centered(),
        ];
        if let Some(best) = self.best_score {
            summary.push(Line::from(format!("Personal best: {best}")).centered());
        }
        frame.render_widget(
            Paragraph::new(Text::from(summary)).style(style::TITLE),
            summary_area,
        );

        frame.render_widget(ScoreTable::new(&self.entries), table_area);

        frame.render_widget(
            Paragraph::new("Enter (Menu) | Esc/q (Quit)")
                .style(style::HELP)
                .centered(),
            help_area,
        );
    }
}
