//! # tutor-algo - adaptive math tutor core
//!
//! Pure-Rust core logic for the adaptive quiz:
//!
//! - **Question generation** - template-based math questions picked by
//!   difficulty and per-user weak topics
//! - **Mastery tracking** - a functional state update that nudges a
//!   per-user mastery score from each (correctness, response time) pair
//!
//! Design goals:
//! - **Pure** - no I/O, no async, no hidden globals; state flows
//!   caller -> generator -> caller -> updater -> caller
//! - **Deterministic when seeded** - all randomness lives behind a
//!   seedable generator so tests can pin outcomes
//! - **Reusable** - the serving layer is a separate crate
//!
//! ## Modules
//!
//! - [`types`] - shared types and constants
//! - [`generator`] - question templates and topic selection
//! - [`mastery`] - the mastery state update rule
//! - [`sanitize`] - numeric hygiene (rounding, validation)
//!
//! ## Example
//!
//! ```rust
//! use tutor_algo::{update_state, QuestionGenerator, UserState};
//!
//! let mut generator = QuestionGenerator::with_seed(7);
//! let state = UserState::default();
//!
//! let question = generator.generate(state.mastery_level, &state.weak_topics);
//! // ... the caller collects an answer and grades it ...
//! let next = update_state(&state, true, 2000.0);
//! assert_eq!(next.total_questions, 1);
//! let _ = question;
//! ```

pub mod generator;
pub mod mastery;
pub mod sanitize;
pub mod types;

pub use generator::QuestionGenerator;
pub use mastery::update_state;
pub use types::*;
