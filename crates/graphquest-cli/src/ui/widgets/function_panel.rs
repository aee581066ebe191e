use graphquest_engine::{RationalFunction, Round};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::{Buffer, Rect},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget},
};

use crate::ui::widgets::style;

/// Plotting window, matching the axis labels below.
const PLOT_X_BOUNDS: [f64; 2] = [-10.0, 10.0];
const PLOT_Y_BOUNDS: [f64; 2] = [-10.0, 10.0];

/// Samples with a larger magnitude are near a pole and are suppressed so
/// the blow-up doesn't dominate the plot.
const PLOT_MAGNITUDE_LIMIT: f64 = 50.0;

const PLOT_SAMPLES: usize = 400;

/// Samples the unreduced function on a dense grid across the plotting
/// window, dropping undefined points and near-pole blow-ups.
pub fn sample_curve(function: &RationalFunction) -> Vec<(f64, f64)> {
    let [x_min, x_max] = PLOT_X_BOUNDS;
    let step = (x_max - x_min) / PLOT_SAMPLES as f64;
    (0..=PLOT_SAMPLES)
        .filter_map(|i| {
            let x = step.mul_add(i as f64, x_min);
            let y = function.eval_f64(x)?;
            (y.is_finite() && y.abs() <= PLOT_MAGNITUDE_LIMIT).then_some((x, y))
        })
        .collect()
}

/// Shows the function to analyze: its unreduced display form above a
/// braille plot of the curve.
#[derive(Debug)]
pub struct FunctionPanel<'a> {
    round: &'a Round,
}

impl<'a> FunctionPanel<'a> {
    pub fn new(round: &'a Round) -> Self {
        Self { round }
    }
}

impl Widget for FunctionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &FunctionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let [formula_area, chart_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas::<2>(area);

        Paragraph::new(Line::from(self.round.display_form().to_owned()).centered())
            .style(style::TITLE)
            .block(Block::bordered().border_style(style::DEFAULT))
            .render(formula_area, buf);

        let points = sample_curve(self.round.function());
        let dataset = Dataset::default()
            .name("f(x)")
            .marker(Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(style::CURVE)
            .data(&points);
        Chart::new(vec![dataset])
            .style(style::DEFAULT)
            .x_axis(
                Axis::default()
                    .bounds(PLOT_X_BOUNDS)
                    .labels(["-10", "0", "10"])
                    .style(style::HELP),
            )
            .y_axis(
                Axis::default()
                    .bounds(PLOT_Y_BOUNDS)
                    .labels(["-10", "0", "10"])
                    .style(style::HELP),
            )
            .block(Block::bordered().title("Graph").border_style(style::DEFAULT))
            .render(chart_area, buf);
    }
}
