pub use self::{
    feedback_panel::*, function_panel::*, input_field::*, score_table::*,
};

mod feedback_panel;
mod function_panel;
mod input_field;
mod score_table;

mod color {
    use ratatui::style::Color;

    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const GREEN: Color = Color::Rgb(0, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use crate::ui::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const TITLE: Style = fg_bg(color::CYAN, color::BLACK).add_modifier(Modifier::BOLD);
    pub const HELP: Style = fg_bg(color::GRAY, color::BLACK);
    pub const FOCUSED: Style = fg_bg(color::YELLOW, color::BLACK);
    pub const CORRECT: Style = fg_bg(color::GREEN, color::BLACK);
    pub const INCORRECT: Style = fg_bg(color::RED, color::BLACK);
    pub const HINT: Style = fg_bg(color::MAGENTA, color::BLACK);
    pub const CURVE: Style = fg_bg(color::CYAN, color::BLACK);
}
