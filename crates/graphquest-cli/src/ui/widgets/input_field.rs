use crossterm::event::KeyCode;
use ratatui::{
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Editable single-line text buffer for one answer field.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    value: String,
}

impl TextField {
    /// Returns the current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Applies a key press: printable characters append, backspace
    /// deletes. Other keys are ignored.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if !c.is_control() => self.value.push(c),
            KeyCode::Backspace => {
                self.value.pop();
            }
            _ => {}
        }
    }
}

/// Renders a labelled answer field, highlighted while focused.
#[derive(Debug)]
pub struct FieldDisplay<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
}

impl<'a> FieldDisplay<'a> {
    pub fn new(label: &'a str, field: &'a TextField, focused: bool) -> Self {
        Self {
            label,
            value: field.value(),
            focused,
        }
    }
}

impl Widget for FieldDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &FieldDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            style::FOCUSED
        } else {
            style::DEFAULT
        };
        let text = if self.focused {
            format!("{}_", self.value)
        } else {
            self.value.to_owned()
        };
        Paragraph::new(Line::from(text))
            .style(style::DEFAULT)
            .block(
                Block::bordered()
                    .title(self.label)
                    .border_style(border_style),
            )
            .render(area, buf);
    }
}
