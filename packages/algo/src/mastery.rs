//! Mastery State Update
//!
//! The single state-update rule: each answer bumps counters, nudges
//! the mastery score (faster correct answers earn a larger bump), and
//! re-classifies topics against fixed accuracy thresholds.

use crate::sanitize::{clamp_mastery, round2};
use crate::types::{
    Topic, UserState, BASE_MASTERY_GAIN, MASTERY_PENALTY, STRONG_ACCURACY_THRESHOLD,
    TIME_BONUS_SCALE, TIME_BONUS_WINDOW_MS, WEAK_ACCURACY_THRESHOLD,
};

// The threshold branches always touch these topics, regardless of the
// topic of the question just answered. Inherited behavior, kept as-is.
const LOW_ACCURACY_TOPICS: [Topic; 2] = [Topic::Algebra, Topic::Geometry];
const PROMOTED_TOPIC: Topic = Topic::Algebra;

/// Compute the next user state from an answer outcome.
///
/// Functional update: the input state is untouched and a fresh state
/// is returned, so the caller keeps the previous snapshot. Any real
/// `time_taken_ms` is accepted; at or beyond the ten-second window the
/// speed bonus saturates to zero.
pub fn update_state(state: &UserState, is_correct: bool, time_taken_ms: f64) -> UserState {
    let mut next = state.clone();
    next.total_questions += 1;

    if is_correct {
        next.correct_answers += 1;
        next.streak += 1;
        let time_bonus = ((TIME_BONUS_WINDOW_MS - time_taken_ms) / TIME_BONUS_WINDOW_MS).max(0.0);
        let gain = round2(BASE_MASTERY_GAIN + time_bonus * TIME_BONUS_SCALE);
        next.mastery_level = clamp_mastery(round2(next.mastery_level + gain));
    } else {
        next.streak = 0;
        next.mastery_level = clamp_mastery(round2(next.mastery_level - MASTERY_PENALTY));
    }

    let accuracy = next.accuracy();
    if accuracy < WEAK_ACCURACY_THRESHOLD {
        for topic in LOW_ACCURACY_TOPICS {
            next.add_weak_topic(topic);
        }
    } else if accuracy > STRONG_ACCURACY_THRESHOLD {
        next.add_strong_topic(PROMOTED_TOPIC);
        next.remove_weak_topic(PROMOTED_TOPIC);
    }

    next
}
