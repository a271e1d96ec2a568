//! Plain-text and JSON rendering of report sections.

use super::chart::{bar_chart, bar_chart_height, render_to_lines, trend_chart, trend_points};
use super::{CellValue, Panel, Section, TableData};
use crate::Result;

/// Height of a rendered trend chart in text output.
const TREND_HEIGHT: u16 = 14;

/// Render sections as human-readable text `width` columns wide.
pub fn render_sections(sections: &[Section], width: u16) -> String {
    let width = width.max(40);
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_section(section, width, &mut out);
    }
    out
}

/// Render sections as pretty JSON.
pub fn render_json(sections: &[Section]) -> Result<String> {
    Ok(serde_json::to_string_pretty(sections)?)
}

fn render_section(section: &Section, width: u16, out: &mut String) {
    out.push_str(&section.title);
    out.push('\n');
    out.push_str(&"=".repeat(section.title.chars().count()));
    out.push('\n');

    for panel in &section.panels {
        let lines = match panel {
            Panel::Table(table) => render_table(table),
            Panel::Bars(series) => {
                render_to_lines(bar_chart(series), width, bar_chart_height(series))
            }
            Panel::Trend(series) => {
                let points = trend_points(series);
                render_to_lines(trend_chart(series, &points), width, TREND_HEIGHT)
            }
            Panel::Facts { items } => render_facts(items),
            Panel::Message(text) => vec![format!("  {text}")],
        };
        for line in lines {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
    }
}

/// Left-aligned text columns, right-aligned numeric columns.
pub fn render_table(table: &TableData) -> Vec<String> {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|r| r.iter().map(CellValue::display).collect())
        .collect();

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let numeric: Vec<bool> = (0..table.columns.len())
        .map(|i| {
            let mut values = table.rows.iter().filter_map(|r| r.get(i));
            values.clone().any(CellValue::is_numeric)
                && values.all(|v| v.is_numeric() || *v == CellValue::Empty)
        })
        .collect();

    let format_row = |row: &[String]| -> String {
        row.iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                if numeric.get(i).copied().unwrap_or(false) {
                    format!("{cell:>w$}")
                } else {
                    format!("{cell:<w$}")
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_row(&table.columns));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(cells.iter().map(|r| format_row(r)));
    lines
}

pub fn render_facts(items: &[(String, String)]) -> Vec<String> {
    let key_width = items
        .iter()
        .map(|(k, _)| k.chars().count() + 1)
        .max()
        .unwrap_or(0);
    items
        .iter()
        .map(|(k, v)| format!("{:<key_width$}  {v}", format!("{k}:")).trim_end().to_string())
        .collect()
}
