use ratatui::{
    layout::Constraint,
    prelude::{Buffer, Rect},
    widgets::{Block, Row, Table, Widget},
};

use crate::{leaderboard::ScoreEntry, ui::widgets::style};

/// Leaderboard entries rendered best-first.
#[derive(Debug)]
pub struct ScoreTable<'a> {
    entries: &'a [ScoreEntry],
}

impl<'a> ScoreTable<'a> {
    pub fn new(entries: &'a [ScoreEntry]) -> Self {
        Self { entries }
    }
}

impl Widget for ScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ScoreTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let rows = self.entries.iter().enumerate().map(|(rank, entry)| {
            Row::new([
                format!("{}", rank + 1),
                entry.player_name.clone(),
                format!("{}", entry.score),
                entry.played_at.format("%Y-%m-%d %H:%M").to_string(),
            ])
            .style(style::DEFAULT)
        });
        let widths = [
            Constraint::Length(4),
            Constraint::Min(12),
            Constraint::Length(7),
            Constraint::Length(16),
        ];
        Table::new(rows, widths)
            .header(Row::new(["#", "Player", "Score", "Played"]).style(style::TITLE))
            .block(
                Block::bordered()
                    .title("Leaderboard")
                    .border_style(style::DEFAULT),
            )
            .style(style::DEFAULT)
            .render(area, buf);
    }
}
