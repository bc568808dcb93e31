use tutor_algo::types::{AttemptRecord, Question, Topic};
use tutor_backend_rust::store::AttemptStore;

fn sample_question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        topic: Topic::Geometry,
        difficulty: 3.0,
        question_text: "What is the area of a circle with radius 3?".to_string(),
        answer: 28.27,
        explanation: "Use the formula A = \u{3c0}r\u{b2} where r is the radius.".to_string(),
        state_vector: vec![0.1, -0.2, 0.3, -0.4, 0.5, -0.6, 0.7, -0.8],
    }
}

async fn temp_store() -> (tempfile::TempDir, AttemptStore) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("tutor-test.db").display());
    let store = AttemptStore::connect(&url).await.unwrap();
    (dir, store)
}

#[tokio::test]
async fn test_connect_creates_schema() {
    let (_dir, store) = temp_store().await;

    // A fresh database answers queries against both tables.
    let count = store.attempt_count("anything").await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_save_question_is_idempotent() {
    let (_dir, store) = temp_store().await;
    let question = sample_question("q1abc2def");

    let first = store.save_question(&question).await.unwrap();
    let second = store.save_question(&question).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first, "q1abc2def");
}

#[tokio::test]
async fn test_save_attempt_counts_per_question() {
    let (_dir, store) = temp_store().await;
    let question = sample_question("q1abc2def");
    store.save_question(&question).await.unwrap();

    let attempt = AttemptRecord {
        question_id: question.id.clone(),
        user_answer: 28.27,
        is_correct: true,
        time_taken_ms: 3200.0,
    };

    let id_a = store.save_attempt(&attempt).await.unwrap();
    let id_b = store.save_attempt(&attempt).await.unwrap();
    assert_ne!(id_a, id_b);

    assert_eq!(store.attempt_count(&question.id).await.unwrap(), 2);
    assert_eq!(store.attempt_count("other").await.unwrap(), 0);
}

#[tokio::test]
async fn test_from_env_without_url_is_none() {
    std::env::remove_var("DATABASE_URL");
    let store = AttemptStore::from_env().await.unwrap();
    assert!(store.is_none());
}
