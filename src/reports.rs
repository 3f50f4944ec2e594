//! Report sections.
//!
//! Each section derives a frequency table from one dataset column and
//! renders it as a figure. `build_report` produces all four sections in
//! presentation order.

use polars::prelude::*;
use thiserror::Error;

use crate::charts::{BarChart, ChartError, Figure, PieChart, Theme};
use crate::data::FrequencyTable;

/// Fixed display order for service ranges. Categories outside this list
/// are dropped from the service range figure.
pub const SERVICE_RANGE_ORDER: [&str; 10] = [
    "UNSP", "< 1", "1-2", "3-4", "5-9", "10-14", "15-19", "20-24", "25-29", "30-34",
];

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to derive frequencies: {0}")]
    Frequency(#[from] PolarsError),

    #[error("Failed to render figure: {0}")]
    Render(#[from] ChartError),
}

/// Build the four report figures in presentation order.
pub fn build_report(df: &DataFrame, theme: Theme) -> Result<Vec<Figure>, ReportError> {
    let figures = vec![
        age_distribution(df, theme)?,
        pay_plan_distribution(df, theme)?,
        service_range_distribution(df, theme)?,
        component_distribution(df, theme)?,
    ];
    log::info!("Prepared {} report figures", figures.len());
    Ok(figures)
}

fn age_counts(df: &DataFrame) -> Result<FrequencyTable, PolarsError> {
    Ok(FrequencyTable::from_column(df, "AgeRange")?.sorted_by_label())
}

fn pay_plan_counts(df: &DataFrame) -> Result<FrequencyTable, PolarsError> {
    Ok(FrequencyTable::from_column(df, "PayPlan")?.sorted_by_count_reversed())
}

fn service_range_counts(df: &DataFrame) -> Result<FrequencyTable, PolarsError> {
    Ok(FrequencyTable::from_column(df, "ServiceRange")?.reindexed(&SERVICE_RANGE_ORDER))
}

fn component_counts(df: &DataFrame) -> Result<FrequencyTable, PolarsError> {
    Ok(FrequencyTable::from_column(df, "Component")?.ranked_by_count())
}

fn age_distribution(df: &DataFrame, theme: Theme) -> Result<Figure, ReportError> {
    let title = "Age Distribution";
    let counts = age_counts(df)?;
    let image = BarChart::new(&counts, title, "Count", "Age Range").render(theme)?;
    Ok(Figure {
        title: title.to_string(),
        image,
    })
}

fn pay_plan_distribution(df: &DataFrame, theme: Theme) -> Result<Figure, ReportError> {
    let title = "Pay Plan Distribution";
    let counts = pay_plan_counts(df)?;
    let image = BarChart::new(&counts, title, "Count", "Pay Plan")
        .label_size(6)
        .render(theme)?;
    Ok(Figure {
        title: title.to_string(),
        image,
    })
}

fn service_range_distribution(df: &DataFrame, theme: Theme) -> Result<Figure, ReportError> {
    let title = "Service Range Distribution";
    let counts = service_range_counts(df)?;
    let image = BarChart::new(&counts, title, "Count", "Service Range").render(theme)?;
    Ok(Figure {
        title: title.to_string(),
        image,
    })
}

fn component_distribution(df: &DataFrame, theme: Theme) -> Result<Figure, ReportError> {
    let title = "Component Distribution";
    let counts = component_counts(df)?;
    let image = PieChart::new(&counts, title).render(theme)?;
    Ok(Figure {
        title: title.to_string(),
        image,
    })
}
