use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{CanvasState, NODE_RADIUS};

const NODE_COLOR: &str = "#9333ea";
const PATH_COLOR: &str = "#f59e0b";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, dash, gap, arrow_size) = (1.5 / k, 8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(state.flow_time * 30.0) % (dash + gap);
	let t = ease_out_cubic(state.hover.highlight_t);

	for &(src, tgt) in &state.scene.links {
		let ((x1, y1), (x2, y2)) = (state.points[src], state.points[tgt]);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}

		let on_path = state.is_path_link(src, tgt);
		let is_highlighted = state.is_highlighted(src) && state.is_highlighted(tgt);

		// t=0: all edges at base (0.6), t=1: highlighted at 0.9, others at 0.15
		let (edge_alpha, width) = if is_highlighted {
			(0.6 + 0.3 * t, line_width * (1.0 + 0.3 * t))
		} else {
			(0.6 - 0.45 * t, line_width * (1.0 - 0.3 * t))
		};
		let color = if on_path {
			format!("rgba(245, 158, 11, {})", edge_alpha.max(0.8))
		} else {
			format!("rgba(136, 136, 136, {})", edge_alpha)
		};

		ctx.set_stroke_style_str(&color);
		ctx.set_line_width(if on_path { width * 2.0 } else { width });
		if on_path {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(dash),
				&JsValue::from_f64(gap),
			));
			ctx.set_line_dash_offset(dash_offset);
		}

		let (ux, uy) = (dx / dist, dy / dist);
		let tip_gap = if state.scene.directed {
			NODE_RADIUS + arrow_size
		} else {
			NODE_RADIUS
		};
		ctx.begin_path();
		ctx.move_to(x1 + ux * NODE_RADIUS, y1 + uy * NODE_RADIUS);
		ctx.line_to(x2 - ux * tip_gap, y2 - uy * tip_gap);
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if !state.scene.directed {
			continue;
		}
		ctx.set_fill_style_str(&color);
		let (tip_x, tip_y) = (x2 - ux * NODE_RADIUS, y2 - uy * NODE_RADIUS);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_nodes(state: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));

	for (idx, marker) in state.scene.nodes.iter().enumerate() {
		let (x, y) = state.points[idx];
		let dimmed = has_highlight && !state.is_highlighted(idx);
		let (alpha, radius) = if dimmed {
			(1.0 - 0.7 * t, NODE_RADIUS * (1.0 - 0.15 * t))
		} else if state.is_hovered(idx) {
			(1.0, NODE_RADIUS * (1.0 + 0.35 * t))
		} else {
			(1.0, NODE_RADIUS)
		};
		let fill = if state.path_nodes.contains(&idx) {
			PATH_COLOR
		} else {
			NODE_COLOR
		};

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();

		if state.is_hovered(idx) && t > 0.01 {
			ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		ctx.set_fill_style_str("#e5e7eb");
		let _ = ctx.fill_text(&marker.id, x - radius, y + radius + 12.0 / k.max(0.5));
		ctx.set_global_alpha(1.0);
	}
}
