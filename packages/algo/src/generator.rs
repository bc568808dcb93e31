//! Question Generation
//!
//! Template-based questions: a topic is chosen (biased to the user's
//! weak topics), a template for that topic is filled with the current
//! difficulty, and the exact answer is computed alongside. Randomness
//! comes from a seedable ChaCha rng so tests can pin outcomes.

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::sanitize::{has_invalid_values, round2};
use crate::types::{Question, Topic, QUESTION_ID_LEN, STATE_VECTOR_LEN};

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The fixed question patterns. Only algebra and geometry carry
/// templates; other topics resolve through the algebra list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    LinearEquation,
    QuadraticEval,
    CircleArea,
}

struct Rendered {
    question_text: String,
    answer: f64,
    explanation: &'static str,
}

impl Template {
    fn render(self, difficulty: f64) -> Rendered {
        let d = round2(difficulty);
        match self {
            // The coefficients cancel: (5D - 2D) / D is 3 for every D.
            Template::LinearEquation => Rendered {
                question_text: format!(
                    "Solve for x: {}x + {} = {}",
                    d,
                    round2(difficulty * 2.0),
                    round2(difficulty * 5.0)
                ),
                answer: round2(difficulty * 3.0 / difficulty),
                explanation:
                    "Subtract the constant term from both sides, then divide by the coefficient of x.",
            },
            Template::QuadraticEval => Rendered {
                question_text: format!(
                    "If f(x) = {}x\u{b2} + {}x + 1, what is f(2)?",
                    d,
                    round2(difficulty * 2.0)
                ),
                answer: round2(difficulty * 4.0 + difficulty * 4.0 + 1.0),
                explanation: "Substitute x = 2 into the function and calculate.",
            },
            Template::CircleArea => Rendered {
                question_text: format!("What is the area of a circle with radius {}?", d),
                answer: round2(PI * difficulty * difficulty),
                explanation: "Use the formula A = \u{3c0}r\u{b2} where r is the radius.",
            },
        }
    }
}

fn templates_for(topic: Topic) -> &'static [Template] {
    match topic {
        Topic::Algebra => &[Template::LinearEquation, Template::QuadraticEval],
        Topic::Geometry => &[Template::CircleArea],
        // No templates yet; generation falls back to algebra.
        Topic::Calculus | Topic::Statistics | Topic::Trigonometry => &[],
    }
}

/// Question generator with an owned, seedable random source.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    rng: ChaCha8Rng,
}

impl QuestionGenerator {
    /// Entropy-seeded generator for production use.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic generator for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce a question for the given difficulty.
    ///
    /// Topic selection is uniform over `weak_topics` when any are set,
    /// otherwise uniform over the full enumeration. Any finite
    /// difficulty is accepted; out-of-range values simply produce
    /// unusual templates.
    pub fn generate(&mut self, difficulty: f64, weak_topics: &[Topic]) -> Question {
        let topic = if weak_topics.is_empty() {
            Topic::ALL[self.rng.gen_range(0..Topic::ALL.len())]
        } else {
            weak_topics[self.rng.gen_range(0..weak_topics.len())]
        };

        let mut templates = templates_for(topic);
        if templates.is_empty() {
            templates = templates_for(Topic::Algebra);
        }
        let template = templates[self.rng.gen_range(0..templates.len())];
        let rendered = template.render(difficulty);

        let state_vector: Vec<f64> = (0..STATE_VECTOR_LEN)
            .map(|_| self.rng.gen_range(-1.0..=1.0))
            .collect();
        debug_assert!(!has_invalid_values(&state_vector));

        Question {
            id: self.next_id(),
            topic,
            difficulty: round2(difficulty),
            question_text: rendered.question_text,
            answer: rendered.answer,
            explanation: rendered.explanation.to_string(),
            state_vector,
        }
    }

    /// 9-char base36 id, in the shape the web client used to mint.
    fn next_id(&mut self) -> String {
        (0..QUESTION_ID_LEN)
            .map(|_| ID_CHARSET[self.rng.gen_range(0..ID_CHARSET.len())] as char)
            .collect()
    }
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}
