//! SVG visualization of layout passes.
//!
//! Draws each [`LayoutTrace`] as an annotated panel: the container bounds,
//! its usable area, every placed frame with its padding, and the occupied
//! bounds. Several traces (e.g. the sizing pass and the commit pass of the
//! same container) stack vertically with arrows between them.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use seqlayout::{Container, EdgeInsets, Item, Layoutable, Rect, Size, svg::render_trace_svg};
//!
//! struct Label;
//! impl Layoutable for Label {
//!     fn measure(&self, _fitting: Size) -> Size {
//!         Size::new(80.0, 20.0)
//!     }
//! }
//!
//! let mut container = Container::new();
//! container.add_item(Item::new(Rc::new(Label)));
//! let trace =
//!     container.layout_traced(Rect::new(0.0, 0.0, 300.0, 200.0), EdgeInsets::uniform(8.0), true);
//!
//! let svg = render_trace_svg(&trace);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::container::LayoutTrace;
use crate::geometry::{MAX_LAYOUT_DIMENSION, Rect};

/// Maximum pixel width for any panel in the SVG output.
const MAX_PANEL_W: f64 = 300.0;
/// Maximum pixel height for any panel in the SVG output.
const MAX_PANEL_H: f64 = 200.0;
/// Vertical gap between panels.
const PANEL_GAP: f64 = 50.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin for first panel.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above each panel.
const LABEL_H: f64 = 22.0;

/// Render one pass as a complete SVG document.
pub fn render_trace_svg(trace: &LayoutTrace) -> String {
    let label = if trace.sizing_only { "Sizing pass" } else { "Layout pass" };
    render_traces_svg(&[(label, trace)])
}

/// Render several labelled passes, top to bottom, as one SVG document.
pub fn render_traces_svg(traces: &[(&str, &LayoutTrace)]) -> String {
    if traces.is_empty() {
        return String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"/>"#);
    }

    let panels = traces.len() as f64;
    let total_h = 2.0 * MARGIN_TOP + panels * (LABEL_H + MAX_PANEL_H) + (panels - 1.0) * PANEL_GAP;
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;

    let mut svg = String::with_capacity(4096);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    // Style: light/dark mode via prefers-color-scheme
    svg.push_str(r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .index { font-size: 10px; fill: #fff; }
  .bounds { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .usable { fill: none; stroke: #999; stroke-width: 1; stroke-dasharray: 4,2; }
  .padding { fill: #b8d4ee; stroke: none; }
  .frame { fill: #6ba3d6; stroke: #2c6faa; stroke-width: 1.5; }
  .ignored { fill: none; stroke: #2c6faa; stroke-width: 1; stroke-dasharray: 2,2; }
  .occupied { fill: none; stroke: #d67a2c; stroke-width: 1.5; }
  .arrow { stroke: #666; stroke-width: 1.5; fill: none; marker-end: url(#arrowhead); }
  .arrowhead { fill: #666; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .bounds { fill: #2d2d2d; stroke: #555; }
    .usable { stroke: #777; }
    .padding { fill: #2a4a65; }
    .frame { fill: #3a72a4; stroke: #5a9fd4; }
    .ignored { stroke: #5a9fd4; }
    .occupied { stroke: #e89a55; }
    .arrow { stroke: #888; }
    .arrowhead { fill: #888; }
  }
</style>
"##);

    svg.push_str(r##"<defs>
  <marker id="arrowhead" markerWidth="8" markerHeight="6" refX="8" refY="3" orient="auto">
    <polygon points="0 0, 8 3, 0 6" class="arrowhead"/>
  </marker>
</defs>
"##);

    let center_x = total_w / 2.0;
    let mut y = MARGIN_TOP;

    for (i, (label, trace)) in traces.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
            center_x,
            y + 14.0,
            escape_xml(&format!(
                "{}  {}×{}",
                label,
                fmt_len(trace.occupied.width),
                fmt_len(trace.occupied.height)
            ))
        ));
        svg.push('\n');
        y += LABEL_H;

        render_panel(&mut svg, trace, center_x, y);
        y += MAX_PANEL_H;

        if i < traces.len() - 1 {
            svg.push_str(&format!(
                r#"<line x1="{}" y1="{:.1}" x2="{}" y2="{:.1}" class="arrow"/>"#,
                center_x,
                y + 8.0,
                center_x,
                y + PANEL_GAP - 8.0
            ));
            svg.push('\n');
            y += PANEL_GAP;
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Draw one trace with its view scaled into a MAX_PANEL_W × MAX_PANEL_H box.
fn render_panel(svg: &mut String, trace: &LayoutTrace, center_x: f64, top: f64) {
    let view = view_rect(trace).integral();
    let (panel_w, panel_h, scale) = scale_to_fit(view);
    let panel_x = center_x - panel_w / 2.0;
    // Map a layout rect into panel coordinates.
    let map = |r: Rect| {
        let local = Rect {
            x: r.x - view.x,
            y: r.y - view.y,
            ..r
        }
        .scaled(scale);
        Rect {
            x: panel_x + local.x,
            y: top + local.y,
            ..local
        }
    };

    if is_bounded(&trace.container.layout_bounds) {
        push_rect(svg, map(trace.container.layout_bounds), "bounds");
        push_rect(svg, map(trace.container.usable_rect()), "usable");
    } else {
        push_rect(svg, Rect::new(panel_x, top, panel_w, panel_h), "bounds");
    }

    let mut unfit = 0usize;
    for placement in &trace.placements {
        if placement.frame.is_empty() {
            unfit += 1;
            continue;
        }
        let frame = map(placement.frame);
        if placement.options.should_ignore_when_calculating_size {
            push_rect(svg, frame, "ignored");
        } else {
            push_rect(svg, map(placement.padded_frame()), "padding");
            push_rect(svg, frame, "frame");
        }
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" class="index">{}</text>"#,
            frame.x + 2.0,
            frame.y + 10.0,
            placement.index
        ));
        svg.push('\n');
    }

    if !trace.occupied.is_empty() {
        push_rect(svg, map(trace.occupied), "occupied");
    }

    let mut annotation = format!("{} placed", trace.placements.len());
    if unfit > 0 {
        annotation.push_str(&format!(", {unfit} did not fit"));
    }
    svg.push_str(&format!(
        r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
        center_x,
        top + panel_h + 14.0,
        escape_xml(&annotation)
    ));
    svg.push('\n');
}

/// Area worth showing: everything placed, plus the container when it is finite.
fn view_rect(trace: &LayoutTrace) -> Rect {
    let placed = trace
        .placements
        .iter()
        .filter(|p| !p.frame.is_empty())
        .fold(trace.occupied, |acc, p| acc.union(&p.padded_frame()));
    if is_bounded(&trace.container.layout_bounds) {
        placed.union(&trace.container.layout_bounds)
    } else {
        placed
    }
}

/// Sizing passes often run against clamped "infinite" bounds.
fn is_bounded(bounds: &Rect) -> bool {
    bounds.width < MAX_LAYOUT_DIMENSION && bounds.height < MAX_LAYOUT_DIMENSION
}

/// Scale a rect's size to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(view: Rect) -> (f64, f64, f64) {
    if view.width <= 0.0 || view.height <= 0.0 {
        return (1.0, 1.0, 1.0);
    }
    let scale = (MAX_PANEL_W / view.width).min(MAX_PANEL_H / view.height);
    (view.width * scale, view.height * scale, scale)
}

fn push_rect(svg: &mut String, r: Rect, class: &str) {
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="{}"/>"#,
        r.x, r.y, r.width, r.height, class
    ));
    svg.push('\n');
}

/// Whole numbers without a fraction, everything else to one decimal.
fn fmt_len(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
