//! Line Chart Component
//!
//! Multi-series line chart using HTML5 Canvas. Series values are aligned
//! with a fixed set of category labels on the x-axis.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::Series;

/// Line chart component
#[component]
pub fn LineChart(
    /// X-axis category labels
    labels: &'static [&'static str],
    /// Data series, each aligned with `labels`
    series: Vec<Series>,
    /// Y-axis caption drawn in the top-left corner
    #[prop(default = "Count")]
    y_label: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let legend: Vec<(&'static str, &'static str)> =
        series.iter().map(|s| (s.name, s.color)).collect();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, labels, &series, y_label);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="300"
                class="w-full h-64 rounded-lg"
            />

            <div class="text-center text-sm text-gray-500 mt-1">"Time"</div>

            // Legend (only shown for multi-series charts)
            {(legend.len() > 1).then(|| view! {
                <div class="flex justify-center flex-wrap gap-4 mt-2">
                    {legend.into_iter().map(|(name, color)| view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{name}</span>
                        </div>
                    }).collect_view()}
                </div>
            })}
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    labels: &[&str],
    series: &[Series],
    y_label: &str,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Find global min/max for the y-axis
    let mut global_min = f64::INFINITY;
    let mut global_max = f64::NEG_INFINITY;

    for s in series {
        for value in &s.values {
            global_min = global_min.min(*value);
            global_max = global_max.max(*value);
        }
    }

    if !global_min.is_finite() || !global_max.is_finite() {
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Add padding to the y range
    let y_range = global_max - global_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    global_min -= y_padding;
    global_max += y_padding;

    // Draw grid lines
    ctx.set_stroke_style(&"#e0e0e0".into());
    ctx.set_line_width(1.0);

    // Horizontal grid lines (5 lines)
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        // Y-axis labels
        let value = global_max - (i as f64 / 5.0) * (global_max - global_min);
        ctx.set_fill_style(&"#666666".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    // Y-axis caption
    ctx.set_fill_style(&"#666666".into());
    ctx.set_font("12px sans-serif");
    let _ = ctx.fill_text(y_label, 5.0, 12.0);

    let x_for = |i: usize| {
        if labels.len() > 1 {
            margin_left + (i as f64 / (labels.len() - 1) as f64) * chart_width
        } else {
            margin_left + chart_width / 2.0
        }
    };

    // Draw each data series
    for s in series {
        ctx.set_stroke_style(&s.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in s.values.iter().enumerate().take(labels.len()) {
            let x = x_for(i);

            // Scale y to the chart area (inverted because canvas y grows downward)
            let y = margin_top + ((global_max - value) / (global_max - global_min)) * chart_height;

            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }

        ctx.stroke();
    }

    // Draw x-axis labels
    ctx.set_fill_style(&"#666666".into());
    ctx.set_font("12px sans-serif");

    for (i, label) in labels.iter().enumerate() {
        let _ = ctx.fill_text(label, x_for(i) - 12.0, height - 10.0);
    }
}
