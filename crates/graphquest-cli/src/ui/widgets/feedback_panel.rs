use graphquest_engine::RoundFeedback;
use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Text},
    widgets::{Block, Padding, Paragraph, Widget, Wrap},
};

use crate::ui::widgets::style;

/// Per-category verdicts and the points banked for a submitted round.
#[derive(Debug)]
pub struct FeedbackPanel<'a> {
    feedback: &'a RoundFeedback,
    points_earned: usize,
    hints_used: usize,
}

impl<'a> FeedbackPanel<'a> {
    pub fn new(feedback: &'a RoundFeedback, points_earned: usize, hints_used: usize) -> Self {
        Self {
            feedback,
            points_earned,
            hints_used,
        }
    }
}

impl Widget for FeedbackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &FeedbackPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let mut lines = Vec::new();
        for (label, category) in self.feedback.categories() {
            let (mark, line_style) = if category.is_correct {
                ("[ok]", style::CORRECT)
            } else {
                ("[x] ", style::INCORRECT)
            };
            lines.push(
                Line::from(format!("{mark} {label}: {}", category.message)).style(line_style),
            );
            lines.push(Line::default());
        }

        let mut summary = format!(
            "+{} points (raw {}",
            self.points_earned, self.feedback.raw_score
        );
        if self.hints_used > 0 {
            summary.push_str(&format!(", {} hint penalty", self.hints_used * 10));
        }
        summary.push(')');
        lines.push(Line::from(summary).style(style::TITLE));

        Paragraph::new(Text::from(lines))
            .style(style::DEFAULT)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title("Round Results")
                    .padding(Padding::symmetric(1, 0))
                    .border_style(style::DEFAULT),
            )
            .render(area, buf);
    }
}
