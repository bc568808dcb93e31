//! Common Types and Constants
//!
//! Shared data structures used by the generator and the mastery updater.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Lower bound of the mastery scale
pub const MASTERY_MIN: f64 = 1.0;

/// Upper bound of the mastery scale
pub const MASTERY_MAX: f64 = 10.0;

/// Rolling accuracy below this marks topics as weak
pub const WEAK_ACCURACY_THRESHOLD: f64 = 0.6;

/// Rolling accuracy above this promotes topics to strong
pub const STRONG_ACCURACY_THRESHOLD: f64 = 0.8;

/// Response-time window for the speed bonus (milliseconds)
pub const TIME_BONUS_WINDOW_MS: f64 = 10_000.0;

/// Flat mastery gain for a correct answer
pub const BASE_MASTERY_GAIN: f64 = 0.1;

/// Scale applied to the speed bonus on top of the flat gain
pub const TIME_BONUS_SCALE: f64 = 0.05;

/// Mastery deduction for an incorrect answer
pub const MASTERY_PENALTY: f64 = 0.05;

/// Length of the decorative state vector attached to each question
pub const STATE_VECTOR_LEN: usize = 8;

/// Absolute tolerance for grading a numeric answer
pub const ANSWER_TOLERANCE: f64 = 0.01;

/// Length of a locally generated question id
pub const QUESTION_ID_LEN: usize = 9;

// ==================== Topics ====================

/// Question topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Algebra,
    Geometry,
    Calculus,
    Statistics,
    Trigonometry,
}

impl Topic {
    /// The fixed topic enumeration, in selection order.
    pub const ALL: [Topic; 5] = [
        Topic::Algebra,
        Topic::Geometry,
        Topic::Calculus,
        Topic::Statistics,
        Topic::Trigonometry,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "algebra" => Some(Topic::Algebra),
            "geometry" => Some(Topic::Geometry),
            "calculus" => Some(Topic::Calculus),
            "statistics" => Some(Topic::Statistics),
            "trigonometry" => Some(Topic::Trigonometry),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Algebra => "algebra",
            Topic::Geometry => "geometry",
            Topic::Calculus => "calculus",
            Topic::Statistics => "statistics",
            Topic::Trigonometry => "trigonometry",
        }
    }
}

// ==================== User State ====================

/// Per-user learning state
///
/// Replaced wholesale after every answered question; never mutated in
/// place by the core. Invariants: `mastery_level` stays in
/// `[MASTERY_MIN, MASTERY_MAX]` and `correct_answers <= total_questions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub mastery_level: f64,
    pub streak: u32,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub weak_topics: Vec<Topic>,
    pub strong_topics: Vec<Topic>,
}

impl Default for UserState {
    fn default() -> Self {
        Self {
            mastery_level: MASTERY_MIN,
            streak: 0,
            total_questions: 0,
            correct_answers: 0,
            weak_topics: Vec::new(),
            strong_topics: Vec::new(),
        }
    }
}

impl UserState {
    /// Rolling accuracy over all answered questions, 0.0 before the
    /// first answer.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.correct_answers as f64 / self.total_questions as f64
    }

    /// Insert with set semantics: duplicates are suppressed.
    pub fn add_weak_topic(&mut self, topic: Topic) {
        if !self.weak_topics.contains(&topic) {
            self.weak_topics.push(topic);
        }
    }

    /// Insert with set semantics: duplicates are suppressed.
    pub fn add_strong_topic(&mut self, topic: Topic) {
        if !self.strong_topics.contains(&topic) {
            self.strong_topics.push(topic);
        }
    }

    pub fn remove_weak_topic(&mut self, topic: Topic) {
        self.weak_topics.retain(|t| *t != topic);
    }
}

// ==================== Questions ====================

/// A generated question, immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Opaque identifier, locally generated
    pub id: String,
    pub topic: Topic,
    /// Rounded to two decimals
    pub difficulty: f64,
    pub question_text: String,
    /// Exact expected value, rounded to two decimals
    pub answer: f64,
    pub explanation: String,
    /// Eight values in [-1, 1]; drives a bar-chart visualization and
    /// nothing else
    pub state_vector: Vec<f64>,
}

/// A completed attempt, as handed to the persistence collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub question_id: String,
    pub user_answer: f64,
    pub is_correct: bool,
    pub time_taken_ms: f64,
}

/// Presentation-layer session flags, carried as plain data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub session_active: bool,
    pub loading: bool,
}

/// Grading contract: a numeric answer matches when it is within
/// [`ANSWER_TOLERANCE`] of the expected value.
pub fn is_answer_correct(expected: f64, given: f64) -> bool {
    (expected - given).abs() < ANSWER_TOLERANCE
}

// ==================== Tests ====================
