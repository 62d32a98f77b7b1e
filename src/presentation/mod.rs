//! Maps aggregated views into chart payloads. No business logic lives here.

pub mod page;

use earnings_domain::{MonthlyView, YearlyView};
use serde::Serialize;

pub use page::{render_chart, IndexTemplate};

const LABEL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Chart flavour understood by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
}

impl ChartType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartType::Line => "line",
            ChartType::Bar => "bar",
        }
    }
}

/// Summary numbers shown next to the chart. `month` is set for monthly charts, `min` for yearly ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSummary {
    pub year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    pub total: f64,
    pub max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    pub average: f64,
}

/// Everything the chart page needs: parallel label/value lists plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub chart_type: ChartType,
    pub legend: String,
    pub summary: ChartSummary,
}

impl ChartView {
    pub fn title(&self) -> String {
        match &self.summary.month {
            Some(month) => format!("{} {}", month, self.summary.year),
            None => self.summary.year.to_string(),
        }
    }
}

pub fn monthly_chart(view: &MonthlyView) -> ChartView {
    ChartView {
        labels: view
            .series
            .iter()
            .map(|entry| entry.date.format(LABEL_DATE_FORMAT).to_string())
            .collect(),
        values: view.series.iter().map(|entry| entry.amount).collect(),
        chart_type: ChartType::Line,
        legend: "Monthly Earnings".into(),
        summary: ChartSummary {
            year: view.year(),
            month: Some(view.month_name().to_string()),
            total: view.total,
            max: view.max,
            min: None,
            average: view.average,
        },
    }
}

pub fn yearly_chart(view: &YearlyView) -> ChartView {
    ChartView {
        labels: view
            .series
            .iter()
            .map(|entry| entry.name().to_string())
            .collect(),
        values: view.series.iter().map(|entry| entry.amount).collect(),
        chart_type: ChartType::Bar,
        legend: "Yearly Earnings".into(),
        summary: ChartSummary {
            year: view.year,
            month: None,
            total: view.total,
            max: view.max,
            min: Some(view.min),
            average: view.average,
        },
    }
}
