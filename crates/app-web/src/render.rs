//! Canvas-2D scene painter. The engine hands over plain geometry; everything
//! view-shaped (colors, line widths, dot sizes) lives here.

use app_core::{Body, Bounds, SimEngine};
use wasm_bindgen::JsCast;
use web_sys as web;

const BACKDROP: &str = "#0b0e14";
const GHOST_DOT_RADIUS: f64 = 5.0;
const RING_LINE_WIDTH: f64 = 2.0;
const OBSERVER_OUTLINE: &str = "#e8f2ff";

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    pub fn paint(&self, engine: &SimEngine, bounds: Bounds) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKDROP);
        ctx.fill_rect(0.0, 0.0, bounds.width as f64, bounds.height as f64);

        // fading perception trail first, underneath everything
        let now = engine.clock_ms();
        let fade = engine.config().fade_duration_ms();
        for ghost in engine.ghosts() {
            let alpha = ghost.opacity(now, fade);
            ctx.set_fill_style_str(&format!(
                "hsla({:.0}, 80%, 60%, {:.3})",
                ghost.hue, alpha
            ));
            fill_circle(ctx, ghost.position.x as f64, ghost.position.y as f64, GHOST_DOT_RADIUS);
        }

        ctx.set_line_width(RING_LINE_WIDTH);
        for wavefront in engine.wavefronts() {
            ctx.set_stroke_style_str(&format!("hsl({:.0}, 80%, 60%)", wavefront.hue));
            stroke_circle(
                ctx,
                wavefront.origin.x as f64,
                wavefront.origin.y as f64,
                wavefront.radius as f64,
            );
        }

        if let Some(source) = engine.source() {
            self.paint_body(source, false);
        }
        if let Some(observer) = engine.observer() {
            self.paint_body(observer, true);
        }
    }

    fn paint_body(&self, body: &Body, outlined: bool) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(&css_rgb(body.color));
        fill_circle(ctx, body.position.x as f64, body.position.y as f64, body.radius as f64);
        if outlined {
            ctx.set_stroke_style_str(OBSERVER_OUTLINE);
            stroke_circle(
                ctx,
                body.position.x as f64,
                body.position.y as f64,
                body.radius as f64 + 2.0,
            );
        }
    }
}

fn css_rgb(color: [f32; 3]) -> String {
    format!(
        "rgb({}, {}, {})",
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8
    )
}

fn fill_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.fill();
}

fn stroke_circle(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, r: f64) {
    if r <= 0.0 {
        return;
    }
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.stroke();
}
