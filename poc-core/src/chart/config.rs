//! Typed chart configuration, serialized to the charting library's JSON shape.
//!
//! Field names follow the library's option keys (`maintainAspectRatio`,
//! `yAxisID`, ...). Tick label formatting is a JS callback in the library, so
//! it is carried as a plain suffix per axis (`tick_suffix`) and attached by the
//! bridge after the JSON is parsed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ChartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartConfig {
    pub fn to_json(&self) -> Result<String, ChartError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Axis id → tick label suffix, for axes that format their ticks.
    pub fn tick_suffixes(&self) -> BTreeMap<String, String> {
        self.options
            .scales
            .iter()
            .filter_map(|(axis, scale)| {
                scale
                    .tick_suffix
                    .as_ref()
                    .map(|suffix| (axis.clone(), suffix.clone()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: BTreeMap<String, Scale>,
    pub interaction: Interaction,
    pub animation: Animation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub title: Title,
    pub legend: Legend,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<AnnotationPlugin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub weight: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Left,
    Right,
    Start,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ScaleKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip)]
    pub tick_suffix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl AxisTitle {
    pub fn shown(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub draw_on_chart_area: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Index,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub intersect: bool,
    pub mode: InteractionMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    EaseInOutQuart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    pub duration: u32,
    pub easing: Easing,
}

/// Annotation plugin options (horizontal marker lines).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationPlugin {
    pub annotations: BTreeMap<String, LineAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAnnotation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(rename = "yScaleID")]
    pub y_scale_id: String,
    pub border_color: String,
    pub border_width: u32,
    pub border_dash: Vec<u32>,
    pub label: AnnotationLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationLabel {
    pub content: String,
    pub enabled: bool,
    pub position: Position,
}
