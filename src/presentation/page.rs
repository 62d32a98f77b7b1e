use askama::Template;

use super::ChartView;
use crate::errors::AppError;

/// One labelled figure in the summary panel.
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

/// The chart page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: String,
    pub legend: &'a str,
    pub chart_type: &'static str,
    pub nav_path: &'static str,
    pub labels_json: String,
    pub values_json: String,
    pub summary_items: Vec<SummaryItem>,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(chart: &'a ChartView) -> Result<Self, AppError> {
        let summary = &chart.summary;
        let mut summary_items = vec![
            SummaryItem {
                label: "Total",
                value: format!("{:.2}", summary.total),
            },
            SummaryItem {
                label: "Max",
                value: format!("{:.2}", summary.max),
            },
        ];
        if let Some(min) = summary.min {
            summary_items.push(SummaryItem {
                label: "Min",
                value: format!("{:.2}", min),
            });
        }
        summary_items.push(SummaryItem {
            label: "Average",
            value: format!("{:.2}", summary.average),
        });

        Ok(Self {
            title: chart.title(),
            legend: &chart.legend,
            chart_type: chart.chart_type.as_str(),
            nav_path: match chart.summary.month {
                Some(_) => "/monthly",
                None => "/yearly",
            },
            labels_json: serde_json::to_string(&chart.labels).map_err(json_error)?,
            values_json: serde_json::to_string(&chart.values).map_err(json_error)?,
            summary_items,
        })
    }
}

/// Renders the chart page to HTML.
pub fn render_chart(chart: &ChartView) -> Result<String, AppError> {
    Ok(IndexTemplate::new(chart)?.render()?)
}

fn json_error(err: serde_json::Error) -> AppError {
    AppError::Template(askama::Error::Custom(Box::new(err)))
}
