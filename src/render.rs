//! Rendering seam
//!
//! The simulation never draws; it hands a read-only `GameState` to whatever
//! implements `Render`. The Canvas 2D implementation below is the browser
//! presentation: grid lines, food, snake, and a dimmed game-over overlay.
//! Colors come from CSS custom properties so theme switches repaint without
//! touching Rust state.

use crate::sim::GameState;

/// Consumes simulation state, produces pixels. Must not mutate state.
pub trait Render {
    fn render(&mut self, state: &GameState, game_over: bool);
}

/// Renderer that discards everything; used headless and in tests
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Render for NullRenderer {
    fn render(&mut self, _state: &GameState, _game_over: bool) {}
}

#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2dRenderer;

#[cfg(target_arch = "wasm32")]
mod canvas {
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::Render;
    use crate::consts::GRID_SIZE;
    use crate::sim::GameState;

    /// Inset in pixels between a cell's bounds and its fill
    const CELL_PAD: f64 = 1.0;

    pub struct Canvas2dRenderer {
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        cell_size: f64,
    }

    impl Canvas2dRenderer {
        /// Attach to an existing `<canvas>` element
        pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
            let ctx = canvas
                .get_context("2d")
                .ok()??
                .dyn_into::<CanvasRenderingContext2d>()
                .ok()?;
            let cell_size = canvas.width() as f64 / GRID_SIZE as f64;
            Some(Self {
                canvas,
                ctx,
                cell_size,
            })
        }

        /// Resolve a CSS custom property from the body's computed style
        fn css_var(&self, name: &str) -> String {
            web_sys::window()
                .and_then(|w| {
                    let body = w.document()?.body()?;
                    w.get_computed_style(&body).ok()?
                })
                .and_then(|style| style.get_property_value(name).ok())
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|| "#888".to_string())
        }

        fn fill_cell(&self, x: i32, y: i32, color: &str) {
            self.ctx.set_fill_style_str(color);
            self.ctx.fill_rect(
                (x as f64 * self.cell_size).floor() + CELL_PAD,
                (y as f64 * self.cell_size).floor() + CELL_PAD,
                (self.cell_size - CELL_PAD * 2.0).floor(),
                (self.cell_size - CELL_PAD * 2.0).floor(),
            );
        }

        fn draw_grid_lines(&self) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            self.ctx.set_stroke_style_str(&self.css_var("--grid"));
            self.ctx.set_line_width(1.0);
            for i in 1..GRID_SIZE {
                // Half-pixel offset keeps 1px lines crisp
                let p = (i as f64 * self.cell_size).floor() + 0.5;
                self.ctx.begin_path();
                self.ctx.move_to(p, 0.0);
                self.ctx.line_to(p, h);
                self.ctx.stroke();
                self.ctx.begin_path();
                self.ctx.move_to(0.0, p);
                self.ctx.line_to(w, p);
                self.ctx.stroke();
            }
        }

        fn draw_game_over_overlay(&self) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            self.ctx.set_fill_style_str("rgba(0,0,0,0.4)");
            self.ctx.fill_rect(0.0, 0.0, w, h);
            self.ctx.set_fill_style_str("#fff");
            self.ctx
                .set_font("bold 28px system-ui, -apple-system, Segoe UI, Roboto");
            self.ctx.set_text_align("center");
            let _ = self
                .ctx
                .fill_text("Game over - press Start to play again", w / 2.0, h / 2.0);
        }
    }

    impl Render for Canvas2dRenderer {
        fn render(&mut self, state: &GameState, game_over: bool) {
            let w = self.canvas.width() as f64;
            let h = self.canvas.height() as f64;
            self.ctx.clear_rect(0.0, 0.0, w, h);

            self.draw_grid_lines();

            if let Some(food) = state.food {
                self.fill_cell(food.x, food.y, &self.css_var("--food"));
            }

            let head_color = self.css_var("--primary");
            let body_color = self.css_var("--snake");
            for (idx, seg) in state.snake.iter().enumerate() {
                let color = if idx == 0 { &head_color } else { &body_color };
                self.fill_cell(seg.x, seg.y, color);
            }

            if game_over {
                self.draw_game_over_overlay();
            }
        }
    }
}
