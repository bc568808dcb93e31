use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tutor_algo::sanitize::sanitize_difficulty;
use tutor_algo::types::{
    is_answer_correct, AttemptRecord, Question, SessionContext, Topic, UserState, MASTERY_MAX,
};
use tutor_algo::update_state;

use crate::response::AppError;
use crate::state::{AppState, Session};

#[derive(Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_session))
        .route("/:sessionId", get(get_session).delete(end_session))
        .route("/:sessionId/question", post(next_question))
        .route("/:sessionId/answer", post(submit_answer))
}

// ==================== Views ====================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionView {
    session_id: String,
    state: UserState,
    context: SessionContext,
}

/// The question as the client sees it. The expected answer and the
/// explanation stay server side until the attempt is graded.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuestionView {
    id: String,
    topic: Topic,
    difficulty: f64,
    question_text: String,
    state_vector: Vec<f64>,
}

impl QuestionView {
    fn from_question(question: &Question) -> Self {
        Self {
            id: question.id.clone(),
            topic: question.topic,
            difficulty: question.difficulty,
            question_text: question.question_text.clone(),
            state_vector: question.state_vector.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnswerRequest {
    answer: f64,
    time_taken_ms: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnswerResult {
    is_correct: bool,
    correct_answer: f64,
    explanation: String,
    state: UserState,
}

// ==================== Handlers ====================

async fn create_session(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = Uuid::new_v4().to_string();
    let session = Session::new();

    let view = SessionView {
        session_id: session_id.clone(),
        state: session.user_state.clone(),
        context: session.context,
    };

    state.sessions().write().await.insert(session_id, session);

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            success: true,
            data: view,
        }),
    ))
}

async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state.sessions().read().await;
    let session = sessions
        .get(&session_id)
        .ok_or_else(|| AppError::not_found("session not found"))?;

    Ok(Json(SuccessResponse {
        success: true,
        data: SessionView {
            session_id,
            state: session.user_state.clone(),
            context: session.context,
        },
    }))
}

async fn end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mut sessions = state.sessions().write().await;
    let mut session = sessions
        .remove(&session_id)
        .ok_or_else(|| AppError::not_found("session not found"))?;

    session.context.session_active = false;

    Ok(Json(SuccessResponse {
        success: true,
        data: SessionView {
            session_id,
            state: session.user_state.clone(),
            context: session.context,
        },
    }))
}

async fn next_question(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question = {
        let mut sessions = state.sessions().write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::not_found("session not found"))?;

        let jitter: f64 = rand::rng().random_range(-0.5..0.5);
        let difficulty =
            sanitize_difficulty(session.user_state.mastery_level + jitter).min(MASTERY_MAX);

        let question = session
            .generator
            .generate(difficulty, &session.user_state.weak_topics);
        session.current_question = Some(question.clone());
        question
    };

    if let Some(store) = state.store() {
        let persisted = question.clone();
        tokio::spawn(async move {
            if let Err(err) = store.save_question(&persisted).await {
                tracing::warn!(error = %err, "failed to persist question");
            }
        });
    }

    Ok(Json(SuccessResponse {
        success: true,
        data: QuestionView::from_question(&question),
    }))
}

async fn submit_answer(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !payload.answer.is_finite() {
        return Err(AppError::validation("answer must be a finite number"));
    }
    if !payload.time_taken_ms.is_finite() {
        return Err(AppError::validation("timeTakenMs must be a finite number"));
    }

    let (question, is_correct, next_state) = {
        let mut sessions = state.sessions().write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| AppError::not_found("session not found"))?;

        let question = session
            .current_question
            .take()
            .ok_or_else(|| AppError::bad_request("no outstanding question for this session"))?;

        let is_correct = is_answer_correct(question.answer, payload.answer);
        let next_state = update_state(&session.user_state, is_correct, payload.time_taken_ms);
        session.user_state = next_state.clone();

        (question, is_correct, next_state)
    };

    if let Some(store) = state.store() {
        let attempt = AttemptRecord {
            question_id: question.id.clone(),
            user_answer: payload.answer,
            is_correct,
            time_taken_ms: payload.time_taken_ms,
        };
        tokio::spawn(async move {
            if let Err(err) = store.save_attempt(&attempt).await {
                tracing::warn!(error = %err, "failed to persist attempt");
            }
        });
    }

    Ok(Json(SuccessResponse {
        success: true,
        data: AnswerResult {
            is_correct,
            correct_answer: question.answer,
            explanation: question.explanation,
            state: next_state,
        },
    }))
}
