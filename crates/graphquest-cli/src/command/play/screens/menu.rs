use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph},
};

use crate::ui::widgets::{FieldDisplay, TextField, style};

use super::Transition;

const RULES: &str = "\
Identify the features of each rational function:
vertical and horizontal asymptotes, holes, and intercepts.

5 rounds of increasing difficulty
100 points per correct answer
-10 points per hint used";

/// Main menu: name entry plus entry points for the game and leaderboard.
#[derive(Debug, Default)]
pub struct MenuScreen {
    name: TextField,
    error: Option<&'static str>,
}

impl MenuScreen {
    pub fn handle_event(&mut self, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::None;
        };
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('l') => Transition::ShowLeaderboard,
                _ => Transition::None,
            };
        }
        match key.code {
            KeyCode::Esc => Transition::Exit,
            KeyCode::Enter => {
                let name = self.name.value().trim().to_owned();
                if name.is_empty() {
                    self.error = Some("Enter your name to start");
                    Transition::None
                } else {
                    Transition::StartGame(name)
                }
            }
            code => {
                self.error = None;
                self.name.handle_key(code);
                Transition::None
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [area] = Layout::horizontal([Constraint::Length(60)])
            .flex(Flex::Center)
            .areas::<1>(frame.area());
        let [title_area, rules_area, name_area, error_area, help_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas::<5>(area);

        let title = Text::from(vec![
            Line::from("GRAPH QUEST").centered(),
            Line::from("Rational Rampage").centered(),
        ])
        .style(style::TITLE);
        frame.render_widget(Paragraph::new(title), title_area);

        let rules = Paragraph::new(RULES)
            .style(style::DEFAULT)
            .block(
                Block::bordered()
                    .title("How to Play")
                    .padding(Padding::symmetric(2, 0))
                    .border_style(style::DEFAULT),
            )
            .centered();
        frame.render_widget(rules, rules_area);

        frame.render_widget(
            FieldDisplay::new("Your Name", &self.name, true),
            name_area,
        );

        if let Some(error) = self.error {
            frame.render_widget(
                Paragraph::new(error).style(style::INCORRECT).centered(),
                error_area,
            );
        }

        let help = Paragraph::new("Enter (Start) | Ctrl+L (Leaderboard) | Esc (Quit)")
            .style(style::HELP)
            .centered();
        frame.render_widget(help, help_area);
    }
}
