#![forbid(unsafe_code)]

//! Declarative chart definitions for the dashboard pages.
//!
//! A [`ChartSpec`] serializes to the JSON configuration shape the
//! page's charting library consumes; the page script only has to look
//! up the target canvas by `elementId` and translate [`ValueFormat`]
//! into its tick/tooltip formatting callbacks (functions cannot cross
//! the JSON boundary). No rendering happens here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data;
use crate::palette;

/// Chart family, matching the charting library's `type` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Bar,
    Line,
    Radar,
}

/// How axis ticks and tooltip values are formatted on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueFormat {
    #[default]
    Plain,
    /// `55` → `55%`
    Percent,
    /// `2.5` → `$2.5T`
    TrillionUsd,
}

/// One background/border color for the whole dataset, or one per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

impl ColorSpec {
    fn per_point(colors: &[&str]) -> Self {
        Self::PerPoint(colors.iter().map(ToString::to_string).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_skipped: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Render segments from this point index on with a dashed border
    /// (projected data). The page script maps this onto the charting
    /// library's segment styling hook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dashed_from_index: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendSpec {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

/// Tooltip styling; identical on every dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub background_color: String,
    pub padding: f64,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub border_width: f64,
    pub format: ValueFormat,
}

impl TooltipSpec {
    fn with_format(format: ValueFormat) -> Self {
        Self {
            background_color: palette::TOOLTIP_SURFACE.to_string(),
            padding: 12.0,
            title_color: palette::TEXT.to_string(),
            body_color: palette::TEXT_SECONDARY.to_string(),
            border_color: palette::PRIMARY.to_string(),
            border_width: 1.0,
            format,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// `None` hides the grid for this axis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    pub tick_format: ValueFormat,
    pub tick_font_size: u8,
}

impl AxisSpec {
    fn value(max: f64, format: ValueFormat) -> Self {
        Self {
            begin_at_zero: Some(true),
            max: Some(max),
            grid_color: Some(palette::GRID.to_string()),
            tick_format: format,
            tick_font_size: 11,
        }
    }

    fn category() -> Self {
        Self {
            begin_at_zero: None,
            max: None,
            grid_color: None,
            tick_format: ValueFormat::Plain,
            tick_font_size: 11,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<String>,
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: LegendSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipSpec>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub scales: BTreeMap<String, AxisSpec>,
}

impl ChartOptions {
    fn base(format: ValueFormat) -> Self {
        Self {
            index_axis: None,
            responsive: true,
            maintain_aspect_ratio: false,
            legend: LegendSpec {
                display: false,
                position: None,
            },
            tooltip: Some(TooltipSpec::with_format(format)),
            scales: BTreeMap::new(),
        }
    }
}

/// One fully described dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    /// DOM id of the target canvas.
    pub element_id: String,
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Serialize to the JSON value handed to the page script.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        // Serialization of plain data cannot fail.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(ToString::to_string).collect()
}

/// Industry outlook doughnut.
#[must_use]
pub fn outlook_chart() -> ChartSpec {
    let mut options = ChartOptions::base(ValueFormat::Percent);
    options.legend = LegendSpec {
        display: true,
        position: Some("bottom".to_string()),
    };
    ChartSpec {
        element_id: "outlookChart".to_string(),
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: owned(data::OUTLOOK.labels),
            datasets: vec![Dataset {
                data: data::OUTLOOK.values.to_vec(),
                background_color: Some(ColorSpec::per_point(&[
                    palette::PRIMARY,
                    palette::SECONDARY,
                    palette::LIGHT,
                    palette::BORDER,
                ])),
                border_color: Some(palette::SURFACE.to_string()),
                border_width: Some(2.0),
                border_radius: Some(4.0),
                ..Dataset::default()
            }],
        },
        options,
    }
}

fn horizontal_bar(
    element_id: &str,
    label: &str,
    stat: data::SeriesStat,
    colors: &[&str],
    axis_max: f64,
) -> ChartSpec {
    let mut options = ChartOptions::base(ValueFormat::Percent);
    options.index_axis = Some("y".to_string());
    options.scales.insert(
        "x".to_string(),
        AxisSpec::value(axis_max, ValueFormat::Percent),
    );
    options.scales.insert("y".to_string(), AxisSpec::category());
    ChartSpec {
        element_id: element_id.to_string(),
        kind: ChartKind::Bar,
        data: ChartData {
            labels: owned(stat.labels),
            datasets: vec![Dataset {
                label: Some(label.to_string()),
                data: stat.values.to_vec(),
                background_color: Some(ColorSpec::per_point(colors)),
                border_radius: Some(6.0),
                border_skipped: Some(false),
                border_width: Some(0.0),
                ..Dataset::default()
            }],
        },
        options,
    }
}

/// Budget priorities horizontal bar.
#[must_use]
pub fn budget_priorities_chart() -> ChartSpec {
    horizontal_bar(
        "budgetChart",
        "Priority Level (%)",
        data::BUDGET_PRIORITIES,
        &[
            palette::PRIMARY,
            palette::SECONDARY,
            palette::TERTIARY,
            palette::LIGHT,
        ],
        60.0,
    )
}

/// AI use cases horizontal bar.
#[must_use]
pub fn ai_use_cases_chart() -> ChartSpec {
    horizontal_bar(
        "aiChart",
        "Adoption Rate (%)",
        data::AI_USE_CASES,
        palette::series_colors(data::AI_USE_CASES.values.len()),
        100.0,
    )
}

/// Industry challenges trend lines, one per challenge category.
#[must_use]
pub fn challenges_chart() -> ChartSpec {
    let datasets = data::CHALLENGES
        .iter()
        .enumerate()
        .map(|(index, trend)| {
            let color = palette::SERIES[index];
            Dataset {
                label: Some(trend.label.to_string()),
                data: trend.values.to_vec(),
                border_color: Some(color.to_string()),
                background_color: Some(ColorSpec::Single(palette::with_alpha(color, 0x10))),
                border_width: Some(3.0),
                point_background_color: Some(color.to_string()),
                point_border_color: Some(palette::SURFACE.to_string()),
                point_border_width: Some(2.0),
                point_radius: Some(5.0),
                point_hover_radius: Some(7.0),
                fill: Some(false),
                tension: Some(0.4),
                ..Dataset::default()
            }
        })
        .collect();

    let mut options = ChartOptions::base(ValueFormat::Percent);
    options.legend = LegendSpec {
        display: true,
        position: Some("bottom".to_string()),
    };
    options
        .scales
        .insert("y".to_string(), AxisSpec::value(35.0, ValueFormat::Percent));
    options.scales.insert("x".to_string(), AxisSpec::category());
    ChartSpec {
        element_id: "challengesChart".to_string(),
        kind: ChartKind::Line,
        data: ChartData {
            labels: data::CHALLENGE_YEARS.iter().map(ToString::to_string).collect(),
            datasets,
        },
        options,
    }
}

/// Workforce skills radar.
#[must_use]
pub fn workforce_skills_chart() -> ChartSpec {
    let mut options = ChartOptions::base(ValueFormat::Percent);
    let mut radial = AxisSpec::value(30.0, ValueFormat::Percent);
    radial.tick_font_size = 10;
    options.scales.insert("r".to_string(), radial);
    ChartSpec {
        element_id: "workforceChart".to_string(),
        kind: ChartKind::Radar,
        data: ChartData {
            labels: owned(data::WORKFORCE_SKILLS.labels),
            datasets: vec![Dataset {
                label: Some("Priority (%)".to_string()),
                data: data::WORKFORCE_SKILLS.values.to_vec(),
                border_color: Some(palette::PRIMARY.to_string()),
                background_color: Some(ColorSpec::Single(palette::with_alpha(
                    palette::PRIMARY,
                    0x20,
                ))),
                point_background_color: Some(palette::PRIMARY.to_string()),
                point_border_color: Some(palette::SURFACE.to_string()),
                point_border_width: Some(2.0),
                point_radius: Some(5.0),
                point_hover_radius: Some(7.0),
                border_width: Some(3.0),
                tension: Some(0.1),
                ..Dataset::default()
            }],
        },
        options,
    }
}

/// Global payments revenue line with a dashed projected segment.
#[must_use]
pub fn revenue_chart() -> ChartSpec {
    let revenue = data::GLOBAL_REVENUE;
    let actual_index = revenue
        .years
        .iter()
        .position(|&year| year == revenue.actual_through)
        .unwrap_or(revenue.years.len() - 1);

    let mut options = ChartOptions::base(ValueFormat::TrillionUsd);
    options.scales.insert(
        "y".to_string(),
        AxisSpec::value(3.2, ValueFormat::TrillionUsd),
    );
    options.scales.insert("x".to_string(), AxisSpec::category());
    ChartSpec {
        element_id: "revenueChart".to_string(),
        kind: ChartKind::Line,
        data: ChartData {
            labels: revenue.years.iter().map(ToString::to_string).collect(),
            datasets: vec![Dataset {
                label: Some("Revenue (Trillion USD)".to_string()),
                data: revenue.values.to_vec(),
                border_color: Some(palette::PRIMARY.to_string()),
                background_color: Some(ColorSpec::Single(palette::with_alpha(
                    palette::PRIMARY,
                    0x15,
                ))),
                point_background_color: Some(palette::PRIMARY.to_string()),
                point_border_color: Some(palette::SURFACE.to_string()),
                point_border_width: Some(2.0),
                point_radius: Some(6.0),
                point_hover_radius: Some(8.0),
                border_width: Some(3.0),
                fill: Some(true),
                tension: Some(0.4),
                dashed_from_index: Some(actual_index),
                ..Dataset::default()
            }],
        },
        options,
    }
}

/// Compliance spending vertical bar.
#[must_use]
pub fn compliance_chart() -> ChartSpec {
    let mut options = ChartOptions::base(ValueFormat::Percent);
    options
        .scales
        .insert("y".to_string(), AxisSpec::value(55.0, ValueFormat::Percent));
    options.scales.insert("x".to_string(), AxisSpec::category());
    ChartSpec {
        element_id: "complianceChart".to_string(),
        kind: ChartKind::Bar,
        data: ChartData {
            labels: owned(data::COMPLIANCE_COSTS.labels),
            datasets: vec![Dataset {
                label: Some("Spending Rate (%)".to_string()),
                data: data::COMPLIANCE_COSTS.values.to_vec(),
                background_color: Some(ColorSpec::per_point(&[
                    palette::PRIMARY,
                    palette::SECONDARY,
                    palette::TERTIARY,
                    palette::LIGHT,
                    palette::SECONDARY,
                ])),
                border_radius: Some(6.0),
                border_skipped: Some(false),
                border_width: Some(0.0),
                ..Dataset::default()
            }],
        },
        options,
    }
}

/// All seven dashboard charts, in page order.
#[must_use]
pub fn dashboard_charts() -> Vec<ChartSpec> {
    vec![
        outlook_chart(),
        budget_priorities_chart(),
        ai_use_cases_chart(),
        challenges_chart(),
        workforce_skills_chart(),
        revenue_chart(),
        compliance_chart(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_charts_have_aligned_labels_and_data() {
        for chart in dashboard_charts() {
            for dataset in &chart.data.datasets {
                assert_eq!(
                    dataset.data.len(),
                    chart.data.labels.len(),
                    "misaligned dataset in {}",
                    chart.element_id
                );
            }
        }
    }

    #[test]
    fn element_ids_are_unique() {
        let charts = dashboard_charts();
        let mut ids: Vec<&str> = charts.iter().map(|c| c.element_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), charts.len());
    }

    #[test]
    fn chart_kind_serializes_to_library_type_strings() {
        let json = outlook_chart().to_json();
        assert_eq!(json["type"], "doughnut");
        assert_eq!(json["elementId"], "outlookChart");
    }

    #[test]
    fn horizontal_bars_flip_the_index_axis() {
        let json = budget_priorities_chart().to_json();
        assert_eq!(json["options"]["indexAxis"], "y");
        assert_eq!(json["options"]["scales"]["x"]["max"], 60.0);
    }

    #[test]
    fn revenue_projection_segment_is_marked() {
        let chart = revenue_chart();
        // 2024 is the last actual year; the 2024→2030 segment is dashed.
        assert_eq!(chart.data.datasets[0].dashed_from_index, Some(6));
    }

    #[test]
    fn per_point_colors_serialize_as_arrays() {
        let json = compliance_chart().to_json();
        assert!(json["data"]["datasets"][0]["backgroundColor"].is_array());
        let single = workforce_skills_chart().to_json();
        assert!(single["data"]["datasets"][0]["backgroundColor"].is_string());
    }
}
