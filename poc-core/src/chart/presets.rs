//! The report's two fixed charts.

use std::collections::BTreeMap;

use super::config::*;

const RED: &str = "rgba(220, 53, 69, 1)";
const RED_BAR: &str = "rgba(220, 53, 69, 0.8)";
const RED_FILL: &str = "rgba(220, 53, 69, 0.1)";
const GREEN: &str = "rgba(40, 167, 69, 1)";
const GREEN_BAR: &str = "rgba(40, 167, 69, 0.8)";
const GREEN_FILL: &str = "rgba(40, 167, 69, 0.1)";
const BLUE: &str = "rgba(102, 126, 234, 1)";
const BLUE_FILL: &str = "rgba(102, 126, 234, 0.1)";
const AMBER: &str = "rgba(255, 193, 7, 1)";

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn report_title(text: &str) -> Title {
    Title {
        display: true,
        text: text.to_string(),
        font: Some(Font {
            size: 16,
            weight: "bold".to_string(),
        }),
    }
}

fn index_interaction() -> Interaction {
    Interaction {
        intersect: false,
        mode: InteractionMode::Index,
    }
}

/// Hours per article: traditional workflow vs AI-assisted, by stage.
pub fn time_comparison() -> ChartConfig {
    let bar = |label: &str, data: Vec<f64>, fill: &str, border: &str| Dataset {
        label: label.to_string(),
        data,
        background_color: fill.to_string(),
        border_color: border.to_string(),
        border_width: 2,
        ..Default::default()
    };

    let mut scales = BTreeMap::new();
    scales.insert(
        "y".to_string(),
        Scale {
            begin_at_zero: Some(true),
            title: Some(AxisTitle::shown("時間（時間）")),
            tick_suffix: Some("h".to_string()),
            ..Default::default()
        },
    );
    scales.insert(
        "x".to_string(),
        Scale {
            title: Some(AxisTitle::shown("作業工程")),
            ..Default::default()
        },
    );

    ChartConfig {
        kind: ChartKind::Bar,
        data: ChartData {
            labels: labels(&["リサーチ", "執筆", "校正・編集", "最終チェック"]),
            datasets: vec![
                bar("従来手法（時間）", vec![2.0, 1.5, 1.0, 0.5], RED_BAR, RED),
                bar("AI支援（時間）", vec![0.23, 0.5, 1.5, 0.37], GREEN_BAR, GREEN),
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                title: report_title("作業時間比較（1記事あたり）"),
                legend: Legend {
                    position: Position::Top,
                },
                annotation: None,
            },
            scales,
            interaction: index_interaction(),
            animation: Animation {
                duration: 2000,
                easing: Easing::EaseInOutQuart,
            },
        },
    }
}

/// Cumulative savings, investment and ROI over 24 months.
pub fn roi_projection() -> ChartConfig {
    let line = |label: &str, data: Vec<f64>, color: &str, fill_color: &str, filled: bool| Dataset {
        label: label.to_string(),
        data,
        background_color: fill_color.to_string(),
        border_color: color.to_string(),
        border_width: 3,
        fill: Some(filled),
        tension: Some(0.4),
        point_background_color: Some(color.to_string()),
        point_border_color: Some("#fff".to_string()),
        point_border_width: Some(2),
        point_radius: Some(6),
        y_axis_id: None,
    };

    let mut roi = line(
        "ROI（%）",
        vec![-100.0, -45.0, 8.0, 62.0, 114.0, 181.0, 233.0],
        BLUE,
        BLUE_FILL,
        false,
    );
    roi.y_axis_id = Some("y1".to_string());

    let mut scales = BTreeMap::new();
    scales.insert(
        "x".to_string(),
        Scale {
            title: Some(AxisTitle::shown("期間")),
            ..Default::default()
        },
    );
    scales.insert(
        "y".to_string(),
        Scale {
            kind: Some(ScaleKind::Linear),
            display: Some(true),
            position: Some(Position::Left),
            title: Some(AxisTitle::shown("金額（万円）")),
            grid: Some(Grid {
                draw_on_chart_area: true,
            }),
            ..Default::default()
        },
    );
    scales.insert(
        "y1".to_string(),
        Scale {
            kind: Some(ScaleKind::Linear),
            display: Some(true),
            position: Some(Position::Right),
            title: Some(AxisTitle::shown("ROI（%）")),
            grid: Some(Grid {
                draw_on_chart_area: false,
            }),
            tick_suffix: Some("%".to_string()),
            ..Default::default()
        },
    );

    let mut annotations = BTreeMap::new();
    annotations.insert(
        "breakEven".to_string(),
        LineAnnotation {
            kind: "line",
            y_min: 0.0,
            y_max: 0.0,
            y_scale_id: "y1".to_string(),
            border_color: AMBER.to_string(),
            border_width: 2,
            border_dash: vec![5, 5],
            label: AnnotationLabel {
                content: "損益分岐点".to_string(),
                enabled: true,
                position: Position::Start,
            },
        },
    );

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: labels(&["初期", "3ヶ月", "6ヶ月", "9ヶ月", "12ヶ月", "18ヶ月", "24ヶ月"]),
            datasets: vec![
                line(
                    "累積削減効果（万円）",
                    vec![0.0, 30.0, 65.0, 105.0, 150.0, 225.0, 300.0],
                    GREEN,
                    GREEN_FILL,
                    true,
                ),
                line(
                    "累積投資額（万円）",
                    vec![50.0, 55.0, 60.0, 65.0, 70.0, 80.0, 90.0],
                    RED,
                    RED_FILL,
                    true,
                ),
                roi,
            ],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                title: report_title("ROI予測（24ヶ月）"),
                legend: Legend {
                    position: Position::Top,
                },
                annotation: Some(AnnotationPlugin { annotations }),
            },
            scales,
            interaction: index_interaction(),
            animation: Animation {
                duration: 2500,
                easing: Easing::EaseInOutQuart,
            },
        },
    }
}
