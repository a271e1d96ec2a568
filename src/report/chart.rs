//! Chart widgets built from report series.
//!
//! The same widgets are drawn onto the dashboard frame and, for plain
//! output, into an off-screen [`Buffer`] that is flattened into text lines.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Widget},
};

use super::{BarSeries, TrendSeries};

const LINE_COLORS: [Color; 4] = [Color::Cyan, Color::Yellow, Color::Magenta, Color::Green];

/// Horizontal bar chart, one row per bar, labels on the left.
pub fn bar_chart(series: &BarSeries) -> BarChart<'_> {
    let bars: Vec<Bar> = series
        .bars
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .label(Line::from(label.as_str()))
                .value(bar_value(*value))
                .text_value(format_value(*value))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
}

/// Rows a bar chart needs.
pub fn bar_chart_height(series: &BarSeries) -> u16 {
    series.bars.len().min(u16::MAX as usize) as u16
}

fn bar_value(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Integers without decimals, everything else to one decimal place.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}

/// `(x, y)` points per line, x being the position in the series.
pub fn trend_points(series: &TrendSeries) -> Vec<Vec<(f64, f64)>> {
    series
        .lines
        .iter()
        .map(|line| {
            line.values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect()
}

/// Line chart over precomputed `points` (see [`trend_points`]).
pub fn trend_chart<'a>(series: &'a TrendSeries, points: &'a [Vec<(f64, f64)>]) -> Chart<'a> {
    let datasets: Vec<Dataset<'a>> = series
        .lines
        .iter()
        .zip(points)
        .enumerate()
        .map(|(i, (line, data))| {
            Dataset::default()
                .name(line.name.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(LINE_COLORS[i % LINE_COLORS.len()]))
                .data(data)
        })
        .collect();

    let x_max = series.x_labels.len().saturating_sub(1).max(1) as f64;
    let (lo, hi) = padded_bounds(series.value_bounds());

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(x_axis_labels(&series.x_labels)),
        )
        .y_axis(Axis::default().bounds([lo, hi]).labels(vec![
            Span::raw(format_value(lo)),
            Span::raw(format_value((lo + hi) / 2.0)),
            Span::raw(format_value(hi)),
        ]))
}

fn padded_bounds(bounds: Option<(f64, f64)>) -> (f64, f64) {
    match bounds {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < f64::EPSILON => (lo - 1.0, hi + 1.0),
        Some((lo, hi)) => (lo.min(0.0), hi),
    }
}

fn x_axis_labels(labels: &[String]) -> Vec<Span<'_>> {
    match labels {
        [] => Vec::new(),
        // Axis labels need at least two entries to be drawn.
        [only] => vec![Span::raw(only.as_str()), Span::raw("")],
        [first, .., last] if labels.len() < 5 => {
            vec![Span::raw(first.as_str()), Span::raw(last.as_str())]
        }
        [first, .., last] => vec![
            Span::raw(first.as_str()),
            Span::raw(labels[labels.len() / 2].as_str()),
            Span::raw(last.as_str()),
        ],
    }
}

/// Draw a widget off-screen and return its rows as trimmed strings.
pub fn render_to_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buffer_to_lines(&buf)
}

pub fn buffer_to_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            let start = (y as usize) * (area.width as usize);
            let row = &buf.content[start..start + area.width as usize];
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}
