//! Chart Components
//!
//! Profile visualizations on HTML5 Canvas: a bar chart for emotion scores
//! (0 to 1 scale) and a radar chart for the Big Five traits (0 to 100).

use leptos::*;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BAR_FILL: &str = "rgba(75, 192, 192, 0.6)";
const RADAR_FILL: &str = "rgba(255, 99, 132, 0.2)";
const RADAR_STROKE: &str = "rgba(255, 99, 132, 1)";

/// Bar chart of per-emotion scores
#[component]
pub fn EmotionBarChart(scores: BTreeMap<String, f64>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let scores = store_value(scores);

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            scores.with_value(|s| draw_bar_chart(&canvas, s));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="320"
            class="w-full rounded-lg"
        />
    }
}

/// Radar chart of the five trait axes
#[component]
pub fn TraitRadarChart(traits: BTreeMap<String, f64>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let traits = store_value(traits);

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            traits.with_value(|t| draw_radar_chart(&canvas, t));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="480"
            height="320"
            class="w-full rounded-lg"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Draw the emotion bar chart on canvas
fn draw_bar_chart(canvas: &HtmlCanvasElement, scores: &BTreeMap<String, f64>) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    if scores.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No emotion data", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    // Emotion scores live on a fixed 0..1 scale
    let max = 1.0;

    // Horizontal grid lines and y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let value = max * (i as f64 / 5.0);
        let y = y_for_value(value, max, margin_top, chart_height);

        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 5.0, y + 4.0);
    }

    // Bars with their labels
    let slot = chart_width / scores.len() as f64;
    let bar_width = slot * 0.6;

    for (i, (emotion, value)) in scores.iter().enumerate() {
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = y_for_value(*value, max, margin_top, chart_height);
        let bottom = margin_top + chart_height;

        ctx.set_fill_style(&BAR_FILL.into());
        ctx.fill_rect(x, y, bar_width, bottom - y);

        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(emotion, x, height - 10.0);
        let _ = ctx.fill_text(&format!("{:.2}", value), x, y - 4.0);
    }
}

/// Draw the Big Five radar chart on canvas
fn draw_radar_chart(canvas: &HtmlCanvasElement, traits: &BTreeMap<String, f64>) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    if traits.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No trait data", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 50.0;
    let count = traits.len();

    // Trait scores live on a fixed 0..100 scale
    let max = 100.0;

    // Concentric rings
    ctx.set_stroke_style(&"#374151".into());
    ctx.set_line_width(1.0);
    for ring in 1..=5 {
        let fraction = ring as f64 / 5.0;
        ctx.begin_path();
        for i in 0..=count {
            let (x, y) = radar_point(cx, cy, radius, i % count, count, fraction);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
    }

    // Spokes and axis labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("13px sans-serif");
    for (i, name) in traits.keys().enumerate() {
        let (x, y) = radar_point(cx, cy, radius, i, count, 1.0);
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.line_to(x, y);
        ctx.stroke();

        let (lx, ly) = radar_point(cx, cy, radius, i, count, 1.18);
        let _ = ctx.fill_text(name, lx - name.len() as f64 * 3.0, ly + 4.0);
    }

    // Filled polygon over the trait values
    ctx.begin_path();
    for (i, value) in traits.values().enumerate() {
        let fraction = (value / max).clamp(0.0, 1.0);
        let (x, y) = radar_point(cx, cy, radius, i, count, fraction);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.close_path();
    ctx.set_fill_style(&RADAR_FILL.into());
    ctx.fill();
    ctx.set_stroke_style(&RADAR_STROKE.into());
    ctx.set_line_width(2.0);
    ctx.stroke();
}

/// Map a value on a 0..max scale to a canvas y coordinate (canvas y grows
/// downward, so max lands at the top of the chart area).
fn y_for_value(value: f64, max: f64, top: f64, chart_height: f64) -> f64 {
    let fraction = (value / max).clamp(0.0, 1.0);
    top + (1.0 - fraction) * chart_height
}

/// Position of axis `index` of `count` at `fraction` of the radius. The
/// first axis points straight up; the rest follow clockwise.
fn radar_point(
    cx: f64,
    cy: f64,
    radius: f64,
    index: usize,
    count: usize,
    fraction: f64,
) -> (f64, f64) {
    let angle = -std::f64::consts::FRAC_PI_2
        + (index as f64 / count as f64) * std::f64::consts::TAU;
    (
        cx + radius * fraction * angle.cos(),
        cy + radius * fraction * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_for_value_spans_chart_area() {
        // Zero sits at the bottom, max at the top
        assert_eq!(y_for_value(0.0, 1.0, 20.0, 200.0), 220.0);
        assert_eq!(y_for_value(1.0, 1.0, 20.0, 200.0), 20.0);
        assert_eq!(y_for_value(0.5, 1.0, 20.0, 200.0), 120.0);
        // Out-of-range values clamp instead of escaping the chart
        assert_eq!(y_for_value(2.0, 1.0, 20.0, 200.0), 20.0);
        assert_eq!(y_for_value(-1.0, 1.0, 20.0, 200.0), 220.0);
    }

    #[test]
    fn test_radar_point_axes() {
        let (cx, cy, r) = (100.0, 100.0, 50.0);

        // First axis points straight up at full fraction
        let (x, y) = radar_point(cx, cy, r, 0, 4, 1.0);
        assert!((x - cx).abs() < 1e-9);
        assert!((y - (cy - r)).abs() < 1e-9);

        // Second of four axes points right
        let (x, y) = radar_point(cx, cy, r, 1, 4, 1.0);
        assert!((x - (cx + r)).abs() < 1e-9);
        assert!((y - cy).abs() < 1e-9);

        // Zero fraction collapses to the center
        let (x, y) = radar_point(cx, cy, r, 2, 5, 0.0);
        assert!((x - cx).abs() < 1e-9);
        assert!((y - cy).abs() < 1e-9);
    }
}
