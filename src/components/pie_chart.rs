//! Donut Chart Component
//!
//! Proportional ring chart using HTML5 Canvas arcs, with a center label
//! and a legend.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::data::SplitSegment;

/// Donut chart component
#[component]
pub fn DonutChart(
    /// Chart segments; percentages are expected to sum to 100
    segments: Vec<SplitSegment>,
    /// Caption shown inside the ring
    #[prop(default = "Total Crowd")]
    center_label: &'static str,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let legend = segments.clone();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &segments);
        }
    });

    view! {
        <div>
            <div class="relative w-56 h-56 mx-auto">
                <canvas node_ref=canvas_ref width="224" height="224" class="w-full h-full" />

                // Center label overlay
                <div class="absolute inset-0 flex flex-col items-center justify-center pointer-events-none">
                    <span class="text-sm text-gray-500">{center_label}</span>
                    <span class="text-xl font-bold text-gray-800">"100%"</span>
                </div>
            </div>

            // Legend
            <div class="flex justify-center gap-6 mt-4">
                {legend.into_iter().map(|segment| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", segment.color)
                        />
                        <span class="text-sm text-gray-600">
                            {format!("{:.0}% {}", segment.percent, segment.label)}
                        </span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Draw the donut ring on canvas
fn draw_donut(canvas: &HtmlCanvasElement, segments: &[SplitSegment]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;

    // Ring geometry: outer radius fills the canvas, the stroke width is the
    // ring thickness
    let thickness = 30.0;
    let radius = width.min(height) / 2.0 - thickness / 2.0 - 2.0;

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(thickness);

    let total: f64 = segments.iter().map(|s| s.percent).sum();
    if total <= 0.0 {
        return;
    }

    // Segments start at twelve o'clock and run clockwise
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for segment in segments {
        let sweep = segment.percent / total * std::f64::consts::TAU;

        ctx.set_stroke_style(&segment.color.into());
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, angle, angle + sweep);
        ctx.stroke();

        angle += sweep;
    }
}
