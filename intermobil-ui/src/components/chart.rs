//! Chart Component
//!
//! Visitor chart drawn on an HTML5 canvas: unique visitors as bars and the
//! average session time as a filled line, with a hover tooltip.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use intermobil::chart::{ChartLayout, HEIGHT, MARGIN, POINT_RADIUS, WIDTH};
use intermobil::{ChartPoint, Theme};

use crate::state::use_global_state;

/// Colours for one theme
struct Palette {
    grid: &'static str,
    label: &'static str,
    /// Average time (line and area)
    primary: (u8, u8, u8),
    /// Unique visitors (bars)
    secondary: (u8, u8, u8),
    tooltip_bg: &'static str,
    tooltip_border: &'static str,
    tooltip_text: &'static str,
}

const LIGHT: Palette = Palette {
    grid: "#e5e7eb",
    label: "#6b7280",
    primary: (37, 99, 235),
    secondary: (16, 185, 129),
    tooltip_bg: "#ffffff",
    tooltip_border: "#d1d5db",
    tooltip_text: "#111827",
};

const DARK: Palette = Palette {
    grid: "#374151",
    label: "#9ca3af",
    primary: (96, 165, 250),
    secondary: (52, 211, 153),
    tooltip_bg: "#1f2937",
    tooltip_border: "#4b5563",
    tooltip_text: "#f9fafb",
};

fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Light => &LIGHT,
        Theme::Dark => &DARK,
    }
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Visitor chart component
#[component]
pub fn VisitorChart(#[prop(into)] points: Signal<Vec<ChartPoint>>) -> impl IntoView {
    let state = use_global_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let (hover, set_hover) = create_signal(None::<usize>);

    let layout = create_memo(move |_| points.with(|p| ChartLayout::new(p)));
    let is_empty = move || layout.with(Option::is_none);

    // Redraw when data, hover position or theme changes
    create_effect(move |_| {
        let hover = hover.get();
        let theme = state.theme();

        if let Some(canvas) = canvas_ref.get() {
            layout.with(|layout| {
                if let Some(layout) = layout {
                    draw_chart(&canvas, layout, hover, palette(theme));
                }
            });
        }
    });

    let on_mouse_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let client_width = canvas.client_width() as f64;
        if client_width <= 0.0 {
            return;
        }

        // Pointer position in viewport units
        let scale = WIDTH / client_width;
        let x = ev.offset_x() as f64 * scale;
        let y = ev.offset_y() as f64 * scale;

        let index = layout.with_untracked(|layout| {
            let layout = layout.as_ref()?;
            let inside = x >= MARGIN.left
                && x <= WIDTH - MARGIN.right
                && y >= MARGIN.top
                && y <= layout.baseline();
            inside.then(|| layout.index_at(x - MARGIN.left))
        });

        if hover.get_untracked() != index {
            set_hover.set(index);
        }
    };

    view! {
        <div class="chart-interaction-wrapper">
            <Show when=is_empty>
                <div class="chart-empty" style=format!("height: {}px", HEIGHT)>
                    "Nessun dato da visualizzare"
                </div>
            </Show>
            <canvas
                node_ref=canvas_ref
                width={WIDTH as u32}
                height={HEIGHT as u32}
                class="chart"
                style:display=move || if is_empty() { "none" } else { "block" }
                on:mousemove=on_mouse_move
                on:mouseleave=move |_| set_hover.set(None)
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(
    canvas: &HtmlCanvasElement,
    layout: &ChartLayout,
    hover: Option<usize>,
    palette: &Palette,
) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let baseline = layout.baseline();

    ctx.clear_rect(0.0, 0.0, WIDTH, HEIGHT);

    // Grid lines
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    for y in layout.grid_lines() {
        ctx.begin_path();
        ctx.move_to(MARGIN.left, y);
        ctx.line_to(WIDTH - MARGIN.right, y);
        ctx.stroke();
    }

    // Axis labels
    ctx.set_fill_style(&palette.label.into());
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    for (x, label) in layout.x_labels() {
        let _ = ctx.fill_text(label, x, HEIGHT - 5.0);
    }
    ctx.set_text_align("end");
    let _ = ctx.fill_text("UV", MARGIN.left - 10.0, MARGIN.top + 8.0);
    ctx.set_text_align("start");
    let _ = ctx.fill_text("Tempo (s)", WIDTH - MARGIN.right + 10.0, MARGIN.top + 8.0);

    // Visitor bars
    let bar_gradient = ctx.create_linear_gradient(0.0, MARGIN.top, 0.0, baseline);
    let _ = bar_gradient.add_color_stop(0.0, &rgba(palette.secondary, 0.8));
    let _ = bar_gradient.add_color_stop(1.0, &rgba(palette.secondary, 0.2));
    ctx.set_fill_style(&bar_gradient);
    for bar in layout.bars() {
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }

    // Average time area
    let area_gradient = ctx.create_linear_gradient(0.0, MARGIN.top, 0.0, baseline);
    let _ = area_gradient.add_color_stop(0.0, &rgba(palette.primary, 0.3));
    let _ = area_gradient.add_color_stop(1.0, &rgba(palette.primary, 0.0));
    ctx.set_fill_style(&area_gradient);
    trace_path(&ctx, &layout.time_area());
    ctx.close_path();
    ctx.fill();

    // Average time line and markers
    let time_points = layout.time_points();
    let primary = rgba(palette.primary, 1.0);
    ctx.set_stroke_style(&primary.as_str().into());
    ctx.set_line_width(2.0);
    trace_path(&ctx, &time_points);
    ctx.stroke();

    ctx.set_fill_style(&primary.as_str().into());
    for &(x, y) in &time_points {
        ctx.begin_path();
        let _ = ctx.arc(x, y, POINT_RADIUS, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    if let Some(tooltip) = hover.and_then(|i| layout.tooltip(i)) {
        // Guide line
        ctx.set_stroke_style(&palette.label.into());
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(tooltip.x, MARGIN.top);
        ctx.line_to(tooltip.x, baseline);
        ctx.stroke();

        // Box
        let bx = tooltip.x + tooltip.bg.x;
        let by = MARGIN.top + tooltip.bg.y;
        ctx.set_fill_style(&palette.tooltip_bg.into());
        ctx.fill_rect(bx, by, tooltip.bg.width, tooltip.bg.height);
        ctx.set_stroke_style(&palette.tooltip_border.into());
        ctx.stroke_rect(bx, by, tooltip.bg.width, tooltip.bg.height);

        // Text
        let tx = tooltip.x + tooltip.text_x;
        ctx.set_text_align("start");
        ctx.set_fill_style(&palette.tooltip_text.into());
        ctx.set_font("bold 12px sans-serif");
        let _ = ctx.fill_text(&tooltip.date, tx, MARGIN.top + 30.0);

        ctx.set_font("12px sans-serif");
        legend_dot(&ctx, tx + 3.0, MARGIN.top + 46.0, &rgba(palette.secondary, 1.0));
        legend_dot(&ctx, tx + 3.0, MARGIN.top + 61.0, &primary);
        ctx.set_fill_style(&palette.tooltip_text.into());
        let _ = ctx.fill_text(&tooltip.uv_line, tx + 10.0, MARGIN.top + 50.0);
        let _ = ctx.fill_text(&tooltip.time_line, tx + 10.0, MARGIN.top + 65.0);
    }
}

/// Start a new path through `points`
fn trace_path(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
    ctx.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
}

fn legend_dot(ctx: &CanvasRenderingContext2d, x: f64, y: f64, color: &str) {
    ctx.set_fill_style(&color.into());
    ctx.begin_path();
    let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}
