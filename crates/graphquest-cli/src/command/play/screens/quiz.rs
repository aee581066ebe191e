use crossterm::event::{Event, KeyCode};
use graphquest_engine::{AnswerSheet, QuizSession, SessionState, TOTAL_ROUNDS};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
    widgets::Paragraph,
};

use crate::ui::widgets::{FeedbackPanel, FieldDisplay, FunctionPanel, TextField, style};

use super::Transition;

const FIELD_LABELS: [&str; 5] = [
    "Vertical Asymptotes (x = ..., or none)",
    "Horizontal Asymptote (y = ..., or none)",
    "Holes (x = ..., or none)",
    "X-Intercepts (x = ..., or none)",
    "Y-Intercept (y = ..., or none)",
];

/// The quiz itself: one round's function, five answer fields, and the
/// feedback panel once the round is scored.
#[derive(Debug)]
pub struct QuizScreen {
    session: QuizSession,
    fields: [TextField; 5],
    focus: usize,
    hint: Option<&'static str>,
}

impl QuizScreen {
    pub fn new(player_name: String) -> Self {
        Self {
            session: QuizSession::new(player_name),
            fields: Default::default(),
            focus: 0,
            hint: None,
        }
    }

    fn answer_sheet(&self) -> AnswerSheet {
        AnswerSheet {
            vertical_asymptotes: self.fields[0].value().to_owned(),
            horizontal_asymptote: self.fields[1].value().to_owned(),
            holes: self.fields[2].value().to_owned(),
            x_intercepts: self.fields[3].value().to_owned(),
            y_intercept: self.fields[4].value().to_owned(),
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> Transition {
        let Some(key) = event.as_key_event() else {
            return Transition::None;
        };
        match self.session.session_state() {
            SessionState::AwaitingAnswers => match key.code {
                KeyCode::Esc => Transition::BackToMenu,
                KeyCode::Tab | KeyCode::Down => {
                    self.focus = (self.focus + 1) % self.fields.len();
                    Transition::None
                }
                KeyCode::BackTab | KeyCode::Up => {
                    self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
                    Transition::None
                }
                KeyCode::Enter => {
                    self.session.submit(&self.answer_sheet());
                    self.hint = None;
                    Transition::None
                }
                KeyCode::Char('?') => {
                    self.hint = Some(self.session.request_hint());
                    Transition::None
                }
                code => {
                    self.fields[self.focus].handle_key(code);
                    Transition::None
                }
            },
            SessionState::RoundComplete => match key.code {
                KeyCode::Enter => {
                    self.session.advance();
                    for field in &mut self.fields {
                        field.clear();
                    }
                    self.focus = 0;
                    Transition::None
                }
                KeyCode::Esc => Transition::BackToMenu,
                _ => Transition::None,
            },
            SessionState::Finished => match key.code {
                KeyCode::Enter | KeyCode::Esc => Transition::FinishGame {
                    player_name: self.session.player_name().to_owned(),
                    score: self.session.score(),
                },
                _ => Transition::None,
            },
        }
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let [header_area, main_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas::<3>(frame.area());

        self.draw_header(frame, header_area);

        let [function_area, answer_area] =
            Layout::horizontal([Constraint::Percentage(58), Constraint::Percentage(42)])
                .areas::<2>(main_area);
        frame.render_widget(FunctionPanel::new(self.session.current_round()), function_area);

        if let Some(feedback) = self.session.last_feedback() {
            frame.render_widget(
                FeedbackPanel::new(
                    feedback,
                    self.session.last_points(),
                    self.session.hints_used(),
                ),
                answer_area,
            );
        } else {
            self.draw_answer_form(frame, answer_area);
        }

        let help_text = match self.session.session_state() {
            SessionState::AwaitingAnswers => {
                "Tab/↓ ↑ (Move) | Enter (Submit) | ? (Hint) | Esc (Menu)"
            }
            SessionState::RoundComplete => "Enter (Next Round) | Esc (Menu)",
            SessionState::Finished => "Enter (Finish)",
        };
        frame.render_widget(
            Paragraph::new(help_text).style(style::HELP).centered(),
            help_area,
        );
    }

    fn draw_header(&self, frame: &mut Frame<'_>, area: ratatui::layout::Rect) {
        let [player_area, round_area, score_area] = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas::<3>(area);

        let player = Line::from(format!("Player: {}", self.session.player_name()));
        let round = Line::from(format!(
            "Round {}/{TOTAL_ROUNDS} ({:?})",
            self.session.round_number(),
            self.session.current_round().difficulty()
        ))
        .centered();
        let score = Line::from(format!("Score: {}", self.session.score())).right_aligned();

        frame.render_widget(Paragraph::new(player).style(style::TITLE), player_area);
        frame.render_widget(Paragraph::new(round).style(style::TITLE), round_area);
        frame.render_widget(Paragraph::new(score).style(style::TITLE), score_area);
    }

    fn draw_answer_form(&self, frame: &mut Frame<'_>, area: ratatui::layout::Rect) {
        let [fields_area, hint_area] =
            Layout::vertical([Constraint::Length(15), Constraint::Min(0)]).areas::<2>(area);

        let field_constraints = [Constraint::Length(3); 5];
        let field_areas = Layout::vertical(field_constraints).areas::<5>(fields_area);
        for (index, ((label, field), field_area)) in FIELD_LABELS
            .iter()
            .zip(&self.fields)
            .zip(field_areas.iter())
            .enumerate()
        {
            frame.render_widget(
                FieldDisplay::new(label, field, index == self.focus),
                *field_area,
            );
        }

        if let Some(hint) = self.hint {
            frame.render_widget(
                Paragraph::new(format!("Hint: {hint}"))
                    .style(style::HINT)
                    .wrap(ratatui::widgets::Wrap { trim: false }),
                hint_area,
            );
        }
    }
}
