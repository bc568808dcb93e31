//! Property-Based Tests for the mastery update rule
//!
//! Tests the following invariants:
//! - Mastery stays inside [1, 10] for any reachable state
//! - Counters: total always +1, correct +1 only on a correct attempt
//! - Streak: +1 on correct, reset to 0 on incorrect
//! - Topic lists never accumulate duplicates
//! - The update is a pure function of its inputs

use proptest::prelude::*;

use tutor_algo::types::{Topic, UserState, MASTERY_MAX, MASTERY_MIN};
use tutor_algo::update_state;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_mastery() -> impl Strategy<Value = f64> {
    (100u64..=1000u64).prop_map(|v| v as f64 / 100.0)
}

fn arb_topic() -> impl Strategy<Value = Topic> {
    prop_oneof![
        Just(Topic::Algebra),
        Just(Topic::Geometry),
        Just(Topic::Calculus),
        Just(Topic::Statistics),
        Just(Topic::Trigonometry),
    ]
}

fn arb_topics() -> impl Strategy<Value = Vec<Topic>> {
    prop::collection::vec(arb_topic(), 0..5).prop_map(|mut topics| {
        topics.sort_by_key(|t| *t as u8);
        topics.dedup();
        topics
    })
}

fn arb_user_state() -> impl Strategy<Value = UserState> {
    (
        arb_mastery(),
        0u32..=50u32,   // streak
        0u32..=500u32,  // total
        0u32..=500u32,  // correct (capped at total below)
        arb_topics(),
        arb_topics(),
    )
        .prop_map(
            |(mastery_level, streak, total_questions, correct, weak_topics, strong_topics)| {
                UserState {
                    mastery_level,
                    streak,
                    total_questions,
                    correct_answers: correct.min(total_questions),
                    weak_topics,
                    strong_topics,
                }
            },
        )
}

fn arb_time_ms() -> impl Strategy<Value = f64> {
    (0u64..=60_000u64).prop_map(|v| v as f64)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn mastery_stays_in_range(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, is_correct, time_ms);
        prop_assert!(next.mastery_level >= MASTERY_MIN);
        prop_assert!(next.mastery_level <= MASTERY_MAX);
    }

    #[test]
    fn counters_advance_by_one_attempt(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, is_correct, time_ms);
        prop_assert_eq!(next.total_questions, state.total_questions + 1);
        prop_assert_eq!(
            next.correct_answers,
            state.correct_answers + u32::from(is_correct)
        );
        prop_assert!(next.correct_answers <= next.total_questions);
    }

    #[test]
    fn streak_tracks_correctness(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, is_correct, time_ms);
        if is_correct {
            prop_assert_eq!(next.streak, state.streak + 1);
        } else {
            prop_assert_eq!(next.streak, 0);
        }
    }

    #[test]
    fn correct_attempts_never_lower_mastery(
        state in arb_user_state(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, true, time_ms);
        prop_assert!(next.mastery_level >= state.mastery_level - 1e-9);
    }

    #[test]
    fn incorrect_attempts_never_raise_mastery(
        state in arb_user_state(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, false, time_ms);
        prop_assert!(next.mastery_level <= state.mastery_level + 1e-9);
    }

    #[test]
    fn topic_lists_stay_deduplicated(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let next = update_state(&state, is_correct, time_ms);

        let mut weak = next.weak_topics.clone();
        weak.sort_by_key(|t| *t as u8);
        weak.dedup();
        prop_assert_eq!(weak.len(), next.weak_topics.len());

        let mut strong = next.strong_topics.clone();
        strong.sort_by_key(|t| *t as u8);
        strong.dedup();
        prop_assert_eq!(strong.len(), next.strong_topics.len());
    }

    #[test]
    fn update_is_deterministic(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let a = update_state(&state, is_correct, time_ms);
        let b = update_state(&state, is_correct, time_ms);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn update_leaves_input_untouched(
        state in arb_user_state(),
        is_correct in any::<bool>(),
        time_ms in arb_time_ms(),
    ) {
        let before = state.clone();
        let _ = update_state(&state, is_correct, time_ms);
        prop_assert_eq!(before, state);
    }
}
