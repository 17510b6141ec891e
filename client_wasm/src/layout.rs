//! Overlay layout in canvas pixels
//!
//! Everything here is plain geometry so pointer hit-testing and drawing
//! agree on where the buttons are.

use game_core::{Aabb, QuizOverlay};
use glam::Vec2;

const PANEL_MAX_WIDTH: f32 = 520.0;
const PANEL_MARGIN: f32 = 16.0;
const PADDING: f32 = 20.0;
const CHAR_WIDTH: f32 = 8.5; // rough average for the 16px UI font
pub const LINE_HEIGHT: f32 = 22.0;
const TOPIC_HEIGHT: f32 = 30.0;
const OPTION_GAP: f32 = 10.0;
const OPTION_PADDING: f32 = 12.0;

/// Greedy word wrap to at most `max_chars` per line
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn centered(width: f32, height: f32, size: Vec2) -> Aabb {
    let min = Vec2::new((width - size.x) / 2.0, (height - size.y) / 2.0);
    Aabb::from_min_size(min, size)
}

fn chars_for(width: f32) -> usize {
    ((width / CHAR_WIDTH).floor() as usize).max(8)
}

/// The start card and its button
pub fn start_card(width: f32, height: f32) -> (Aabb, Aabb) {
    let card = centered(width, height, Vec2::new((width - 2.0 * PANEL_MARGIN).min(420.0), 380.0));
    let button_size = Vec2::new(200.0, 52.0);
    let button = Aabb::from_min_size(
        Vec2::new(
            card.min.x + (card.size().x - button_size.x) / 2.0,
            card.max.y - PADDING - button_size.y,
        ),
        button_size,
    );
    (card, button)
}

/// The "click or tap to flap" hint while idle
pub fn idle_hint(width: f32, height: f32) -> Aabb {
    let size = Vec2::new((width - 2.0 * PANEL_MARGIN).min(320.0), 90.0);
    Aabb::from_min_size(Vec2::new((width - size.x) / 2.0, height / 3.0), size)
}

/// The game-over card and its restart button
pub fn game_over_card(width: f32, height: f32) -> (Aabb, Aabb) {
    let card = centered(width, height, Vec2::new((width - 2.0 * PANEL_MARGIN).min(320.0), 200.0));
    let button_size = Vec2::new(180.0, 48.0);
    let button = Aabb::from_min_size(
        Vec2::new(
            card.min.x + (card.size().x - button_size.x) / 2.0,
            card.max.y - PADDING - button_size.y,
        ),
        button_size,
    );
    (card, button)
}

/// One answer button
#[derive(Debug, Clone, PartialEq)]
pub struct OptionLayout {
    pub rect: Aabb,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizLayout {
    pub panel: Aabb,
    pub topic_origin: Vec2,
    pub prompt_origin: Vec2,
    pub prompt_lines: Vec<String>,
    pub options: Vec<OptionLayout>,
    pub feedback_origin: Vec2,
    pub feedback_lines: Vec<String>,
}

impl QuizLayout {
    pub fn new(
        width: f32,
        height: f32,
        prompt: &str,
        option_labels: &[String],
        feedback: Option<&str>,
    ) -> Self {
        let panel_width = (width - 2.0 * PANEL_MARGIN).min(PANEL_MAX_WIDTH);
        let inner_width = panel_width - 2.0 * PADDING;
        let text_chars = chars_for(inner_width);
        let option_chars = chars_for(inner_width - 2.0 * OPTION_PADDING);

        let prompt_lines = wrap_text(prompt, text_chars);
        let option_lines: Vec<Vec<String>> = option_labels
            .iter()
            .map(|label| wrap_text(label, option_chars))
            .collect();
        let feedback_lines = feedback
            .map(|text| wrap_text(text, text_chars))
            .unwrap_or_default();

        let options_height: f32 = option_lines
            .iter()
            .map(|lines| option_height(lines.len()) + OPTION_GAP)
            .sum();
        let panel_height = PADDING
            + TOPIC_HEIGHT
            + prompt_lines.len() as f32 * LINE_HEIGHT
            + OPTION_GAP
            + options_height
            + feedback_lines.len() as f32 * LINE_HEIGHT
            + PADDING;

        let top = ((height - panel_height) / 2.0).max(PANEL_MARGIN / 2.0);
        let left = (width - panel_width) / 2.0;
        let panel = Aabb::from_min_size(Vec2::new(left, top), Vec2::new(panel_width, panel_height));

        let text_left = left + PADDING;
        let topic_origin = Vec2::new(text_left, top + PADDING);
        let prompt_origin = Vec2::new(text_left, topic_origin.y + TOPIC_HEIGHT);

        let mut y = prompt_origin.y + prompt_lines.len() as f32 * LINE_HEIGHT + OPTION_GAP;
        let options = option_lines
            .into_iter()
            .map(|lines| {
                let size = Vec2::new(inner_width, option_height(lines.len()));
                let rect = Aabb::from_min_size(Vec2::new(text_left, y), size);
                y += size.y + OPTION_GAP;
                OptionLayout { rect, lines }
            })
            .collect();

        Self {
            panel,
            topic_origin,
            prompt_origin,
            prompt_lines,
            options,
            feedback_origin: Vec2::new(text_left, y),
            feedback_lines,
        }
    }

    /// Layout for the overlay as it currently stands
    pub fn for_quiz(width: f32, height: f32, quiz: &QuizOverlay) -> Self {
        let question = quiz.question();
        let labels: Vec<String> = (0..question.options.len())
            .filter_map(|i| quiz.option_label(i))
            .collect();
        let feedback = quiz.feedback();
        Self::new(width, height, question.prompt, &labels, feedback.as_deref())
    }

    /// Which option, if any, is under the pointer
    pub fn hit_option(&self, point: Vec2) -> Option<usize> {
        self.options.iter().position(|opt| opt.rect.contains(point))
    }
}

fn option_height(lines: usize) -> f32 {
    lines.max(1) as f32 * LINE_HEIGHT + 2.0 * OPTION_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("Balancing features, quality, and time-to-market", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Balancing features, quality, and time-to-market");
    }

    #[test]
    fn test_wrap_text_keeps_long_words() {
        assert_eq!(wrap_text("supercalifragilistic", 5), vec!["supercalifragilistic"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_start_button_inside_card() {
        let (card, button) = start_card(768.0, 600.0);
        assert!(card.contains(button.min) && card.contains(button.max));
    }

    #[test]
    fn test_game_over_button_inside_card() {
        let (card, button) = game_over_card(360.0, 600.0);
        assert!(card.contains(button.min) && card.contains(button.max));
        assert!(card.min.x >= 0.0);
    }

    #[test]
    fn test_quiz_options_stack_without_overlap() {
        let labels: Vec<String> = ["A. One", "B. Two", "C. Three", "D. Four"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let layout = QuizLayout::new(768.0, 600.0, "Which one?", &labels, None);

        assert_eq!(layout.options.len(), 4);
        for pair in layout.options.windows(2) {
            assert!(pair[0].rect.max.y < pair[1].rect.min.y);
        }
        for opt in &layout.options {
            assert!(layout.panel.contains(opt.rect.min) && layout.panel.contains(opt.rect.max));
        }
    }

    #[test]
    fn test_quiz_hit_option() {
        let labels = vec!["A. Yes".to_string(), "B. No".to_string()];
        let layout = QuizLayout::new(768.0, 600.0, "Ready?", &labels, None);
        let second = layout.options[1].rect;
        let centre = (second.min + second.max) / 2.0;

        assert_eq!(layout.hit_option(centre), Some(1));
        assert_eq!(layout.hit_option(Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_for_quiz_matches_question() {
        let question = &game_core::QUESTIONS[0];
        let mut quiz = QuizOverlay::new(question);
        let layout = QuizLayout::for_quiz(768.0, 600.0, &quiz);
        assert_eq!(layout.options.len(), question.options.len());
        assert!(layout.options[0].lines[0].starts_with("A."));
        assert!(layout.feedback_lines.is_empty());

        quiz.select(question.correct);
        let layout = QuizLayout::for_quiz(768.0, 600.0, &quiz);
        assert_eq!(layout.feedback_lines.join(" "), "Correct! You get an extra life!");
    }

    #[test]
    fn test_feedback_does_not_move_options() {
        let labels = vec!["A. Yes".to_string(), "B. No".to_string()];
        let before = QuizLayout::new(768.0, 600.0, "Ready?", &labels, None);
        let after = QuizLayout::new(768.0, 600.0, "Ready?", &labels, Some("Correct!"));
        assert_eq!(before.options.len(), after.options.len());
        assert_eq!(after.feedback_lines, vec!["Correct!"]);
        let shift = after.panel.min.y - before.panel.min.y;
        assert_eq!(
            after.options[0].rect.min.y - before.options[0].rect.min.y,
            shift,
            "Options only move with the panel"
        );
    }
}
