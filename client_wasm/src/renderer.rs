//! Canvas 2D renderer
//!
//! Draws one [`Frame`] per call: sky, pipes, bird, HUD, then whichever
//! overlay the current screen and session state call for.

use game_core::{Aabb, OptionStatus, QuizOverlay, SessionState, Snapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::fsm::Screen;
use crate::layout::{self, QuizLayout, LINE_HEIGHT};

const SKY: &str = "#70c5ce";
const PIPE_FILL: &str = "#3cb043";
const PIPE_EDGE: &str = "#1e5f22";
const BIRD_FILL: &str = "#f7d51d";
const BIRD_EDGE: &str = "#c79a00";
const SHADE: &str = "rgba(0, 0, 0, 0.5)";
const CARD: &str = "#fffaf0";
const INK: &str = "#222222";
const MUTED: &str = "#888888";
const BUTTON: &str = "#ff8c00";
const CORRECT: &str = "#4caf50";
const WRONG: &str = "#f44336";
const DIMMED: &str = "#e0e0e0";

const UI_FONT: &str = "16px sans-serif";

/// Everything drawn in one frame
pub struct Frame<'a> {
    pub screen: Screen,
    pub snapshot: &'a Snapshot,
    pub quiz: Option<&'a QuizOverlay>,
}

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the field size
    pub fn resize(&self, width: f32, height: f32) {
        self.canvas.set_width(width.round().max(1.0) as u32);
        self.canvas.set_height(height.round().max(1.0) as u32);
    }

    pub fn draw(&self, frame: &Frame) -> Result<(), JsValue> {
        let snap = frame.snapshot;
        let (w, h) = (snap.field.width, snap.field.height);

        self.ctx.set_fill_style_str(SKY);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);

        for pipe in &snap.pipes {
            self.draw_pipe(&pipe.top);
            self.draw_pipe(&pipe.bottom);
        }
        self.draw_bird(&snap.bird, snap.bird_rotation_deg)?;

        match frame.screen {
            Screen::Start => self.draw_start(w, h, snap.high_score),
            Screen::Playing => {
                self.draw_hud(w, snap.score, snap.high_score)?;
                match (snap.state, frame.quiz) {
                    (SessionState::Idle, _) => self.draw_idle_hint(w, h),
                    (SessionState::AwaitingAnswer, Some(quiz)) => self.draw_quiz(w, h, quiz),
                    _ => Ok(()),
                }
            }
            Screen::GameOver => self.draw_game_over(w, h, snap.score, snap.high_score),
        }
    }

    fn fill_box(&self, rect: &Aabb, color: &str) {
        let size = rect.size();
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(rect.min.x as f64, rect.min.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_box(&self, rect: &Aabb, color: &str, width: f64) {
        let size = rect.size();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx
            .stroke_rect(rect.min.x as f64, rect.min.y as f64, size.x as f64, size.y as f64);
    }

    fn text(&self, text: &str, x: f32, y: f32, font: &str, color: &str, align: &str) -> Result<(), JsValue> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline("top");
        self.ctx.fill_text(text, x as f64, y as f64)
    }

    fn draw_pipe(&self, rect: &Aabb) {
        if rect.size().y <= 0.0 {
            return;
        }
        self.fill_box(rect, PIPE_FILL);
        self.stroke_box(rect, PIPE_EDGE, 3.0);
    }

    fn draw_bird(&self, rect: &Aabb, rotation_deg: f32) -> Result<(), JsValue> {
        let size = rect.size();
        let centre = (rect.min + rect.max) / 2.0;
        let (half_w, half_h) = (size.x as f64 / 2.0, size.y as f64 / 2.0);

        self.ctx.save();
        self.ctx.translate(centre.x as f64, centre.y as f64)?;
        self.ctx.rotate((rotation_deg as f64).to_radians())?;

        self.ctx.set_fill_style_str(BIRD_FILL);
        self.ctx.fill_rect(-half_w, -half_h, size.x as f64, size.y as f64);
        self.ctx.set_stroke_style_str(BIRD_EDGE);
        self.ctx.set_line_width(2.0);
        self.ctx.stroke_rect(-half_w, -half_h, size.x as f64, size.y as f64);

        // Eye and beak face the direction of travel
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.fill_rect(half_w * 0.2, -half_h * 0.6, half_w * 0.5, half_h * 0.5);
        self.ctx.set_fill_style_str(INK);
        self.ctx.fill_rect(half_w * 0.45, -half_h * 0.45, half_w * 0.2, half_h * 0.2);
        self.ctx.set_fill_style_str("#ff6f00");
        self.ctx.fill_rect(half_w * 0.7, 0.0, half_w * 0.5, half_h * 0.3);

        self.ctx.restore();
        Ok(())
    }

    fn draw_hud(&self, width: f32, score: u32, high: u32) -> Result<(), JsValue> {
        self.text(&format!("Score: {score}"), 16.0, 14.0, "bold 24px sans-serif", "#ffffff", "left")?;
        self.text(
            &format!("High Score: {high}"),
            width - 16.0,
            14.0,
            "bold 24px sans-serif",
            "#ffffff",
            "right",
        )
    }

    fn draw_idle_hint(&self, width: f32, height: f32) -> Result<(), JsValue> {
        let hint = layout::idle_hint(width, height);
        self.fill_box(&hint, SHADE);
        let cx = (hint.min.x + hint.max.x) / 2.0;
        self.text("Click or tap to flap!", cx, hint.min.y + 20.0, "bold 22px sans-serif", "#ffffff", "center")?;
        self.text("Space works too", cx, hint.min.y + 54.0, UI_FONT, "#ffffff", "center")
    }

    fn draw_button(&self, rect: &Aabb, label: &str) -> Result<(), JsValue> {
        self.fill_box(rect, BUTTON);
        let cx = (rect.min.x + rect.max.x) / 2.0;
        let cy = (rect.min.y + rect.max.y) / 2.0;
        self.text(label, cx, cy - 11.0, "bold 22px sans-serif", "#ffffff", "center")
    }

    fn draw_start(&self, width: f32, height: f32, high: u32) -> Result<(), JsValue> {
        self.fill_box(&Aabb::from_min_size(glam::Vec2::ZERO, glam::Vec2::new(width, height)), SHADE);
        let (card, button) = layout::start_card(width, height);
        self.fill_box(&card, CARD);

        let cx = (card.min.x + card.max.x) / 2.0;
        let mut y = card.min.y + 24.0;
        self.text("Flappy Learn", cx, y, "bold 36px sans-serif", INK, "center")?;
        y += 60.0;

        let how_to = [
            "Click, tap or press Space to flap.",
            "Fly through the gaps between the pipes.",
            "Crash, and answer a question to keep going.",
            "Get it right for an extra life!",
        ];
        let max_chars = ((card.size().x - 40.0) / 8.5).max(8.0) as usize;
        for line in how_to.iter().flat_map(|l| layout::wrap_text(l, max_chars)) {
            self.text(&line, cx, y, UI_FONT, INK, "center")?;
            y += LINE_HEIGHT;
        }
        if high > 0 {
            y += 8.0;
            self.text(&format!("High Score: {high}"), cx, y, "bold 18px sans-serif", MUTED, "center")?;
        }

        self.draw_button(&button, "START")
    }

    fn draw_quiz(&self, width: f32, height: f32, quiz: &QuizOverlay) -> Result<(), JsValue> {
        self.fill_box(&Aabb::from_min_size(glam::Vec2::ZERO, glam::Vec2::new(width, height)), SHADE);
        let layout = QuizLayout::for_quiz(width, height, quiz);
        self.fill_box(&layout.panel, CARD);

        let topic = quiz.question().topic.label();
        self.text(topic, layout.topic_origin.x, layout.topic_origin.y, "bold 14px sans-serif", MUTED, "left")?;

        let mut y = layout.prompt_origin.y;
        for line in &layout.prompt_lines {
            self.text(line, layout.prompt_origin.x, y, "bold 17px sans-serif", INK, "left")?;
            y += LINE_HEIGHT;
        }

        for (i, option) in layout.options.iter().enumerate() {
            let (fill, ink) = match quiz.option_status(i) {
                OptionStatus::Open => ("#ffffff", INK),
                OptionStatus::Correct => (CORRECT, "#ffffff"),
                OptionStatus::Wrong => (WRONG, "#ffffff"),
                OptionStatus::Dimmed => (DIMMED, MUTED),
            };
            self.fill_box(&option.rect, fill);
            self.stroke_box(&option.rect, "#cccccc", 1.0);

            let mut y = option.rect.min.y + 12.0;
            for line in &option.lines {
                self.text(line, option.rect.min.x + 12.0, y, UI_FONT, ink, "left")?;
                y += LINE_HEIGHT;
            }
        }

        let feedback_color = match quiz.verdict() {
            Some(v) if v.correct => CORRECT,
            _ => WRONG,
        };
        let mut y = layout.feedback_origin.y;
        for line in &layout.feedback_lines {
            self.text(line, layout.feedback_origin.x, y, "bold 16px sans-serif", feedback_color, "left")?;
            y += LINE_HEIGHT;
        }
        Ok(())
    }

    fn draw_game_over(&self, width: f32, height: f32, score: u32, high: u32) -> Result<(), JsValue> {
        self.fill_box(&Aabb::from_min_size(glam::Vec2::ZERO, glam::Vec2::new(width, height)), SHADE);
        let (card, button) = layout::game_over_card(width, height);
        self.fill_box(&card, CARD);

        let cx = (card.min.x + card.max.x) / 2.0;
        self.text("Game Over", cx, card.min.y + 20.0, "bold 32px sans-serif", INK, "center")?;
        self.text(&format!("Score: {score}"), cx, card.min.y + 66.0, "bold 20px sans-serif", INK, "center")?;
        self.text(&format!("High Score: {high}"), cx, card.min.y + 94.0, UI_FONT, MUTED, "center")?;
        self.draw_button(&button, "RESTART")
    }
}
