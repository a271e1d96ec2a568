//! Presentation model shared by the text renderer, JSON output and the
//! interactive dashboard.
//!
//! Every report is a list of [`Section`]s, each holding one or more
//! [`Panel`]s. Data sources build sections; renderers only draw them.

pub mod chart;
pub mod text;


use serde::Serialize;
use tracing::{error, warn};

use crate::error::DashError;

/// Message shown in place of data that could not be loaded.
pub fn failure_message(what: &str, err: &DashError) -> String {
    if err.is_remote() {
        warn!(error = %err, "could not load {what}");
    } else {
        error!(error = %err, "could not load {what}");
    }
    format!("Could not load {what}: {err}")
}

/// A titled block of output, e.g. "Alabama Team Stats for 2023".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            panels: Vec::new(),
        }
    }

    pub fn with(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// A section whose only content is a user-facing message.
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(title).with(Panel::Message(text.into()))
    }

    /// True when the section carries no data, only messages.
    pub fn is_message_only(&self) -> bool {
        self.panels.iter().all(|p| matches!(p, Panel::Message(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Panel {
    Table(TableData),
    Bars(BarSeries),
    Trend(TrendSeries),
    Facts { items: Vec<(String, String)> },
    Message(String),
}

/// One cell of a table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Empty,
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Int(_) | CellValue::Float(_))
    }

    /// Display form: floats to one decimal, empty as blank.
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format!("{f:.1}"),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Int(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Int(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(f: f64) -> Self {
        CellValue::Float(f)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// A row type that knows how to lay itself out as a table row.
pub trait Tabular {
    fn columns() -> Vec<&'static str>;
    fn cells(&self) -> Vec<CellValue>;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn from_rows<'a, T, I>(rows: I) -> Self
    where
        T: Tabular + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            columns: T::columns().into_iter().map(String::from).collect(),
            rows: rows.into_iter().map(Tabular::cells).collect(),
        }
    }

    /// Keep only the named columns, in the given order. Unknown names are skipped.
    pub fn select(&self, names: &[&str]) -> Self {
        let idx: Vec<usize> = names
            .iter()
            .filter_map(|n| self.columns.iter().position(|c| c == n))
            .collect();
        Self {
            columns: idx.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|r| idx.iter().map(|&i| r.get(i).cloned().unwrap_or(CellValue::Empty)).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Labelled values drawn as a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub bars: Vec<(String, f64)>,
}

impl BarSeries {
    pub fn new(bars: Vec<(String, f64)>) -> Self {
        Self { bars }
    }
}

/// One time-ordered line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendLine {
    pub name: String,
    pub values: Vec<f64>,
}

/// Time-ordered lines sharing x labels (dates, weeks, matchdays).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub x_labels: Vec<String>,
    pub lines: Vec<TrendLine>,
}

impl TrendSeries {
    pub fn new(x_labels: Vec<String>) -> Self {
        Self {
            x_labels,
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.lines.push(TrendLine {
            name: name.into(),
            values,
        });
        self
    }

    /// Smallest and largest value across all lines, `None` when there are no points.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|l| l.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
