//! Axum adapters: resolve the session, run its transition, respond.

use axum::{
    extract::{rejection::FormRejection, Extension, Path, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};

use crate::actions::{self, Outcome, LISTS_PATH};
use crate::models::*;

use super::middleware::SessionId;
use super::AppState;

/// Read a form body, treating a missing or unreadable body as empty so the
/// request still reaches its transition and fails validation there.
fn form_or_default<T: Default>(form: Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::debug!("Unreadable form body, using empty input: {}", rejection);
            T::default()
        }
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Lists
// ============================================================

pub async fn root() -> Redirect {
    Redirect::to(LISTS_PATH)
}

pub async fn view_all_lists(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Outcome {
    state.sessions.with_session(id, actions::view_all_lists)
}

pub async fn view_new_list_form(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
) -> Outcome {
    state.sessions.with_session(id, actions::view_new_list_form)
}

pub async fn view_list(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Outcome {
    state
        .sessions
        .with_session(id, |session| actions::view_list(session, &list_id))
}

pub async fn view_edit_list_form(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Outcome {
    state
        .sessions
        .with_session(id, |session| actions::view_edit_list_form(session, &list_id))
}

pub async fn create_list(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    form: Result<Form<ListNameInput>, FormRejection>,
) -> Outcome {
    let input = form_or_default(form);
    state
        .sessions
        .with_session(id, |session| actions::create_list(session, &input.list_name))
}

pub async fn rename_list(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
    form: Result<Form<ListNameInput>, FormRejection>,
) -> Outcome {
    let input = form_or_default(form);
    state.sessions.with_session(id, |session| {
        actions::rename_list(session, &list_id, &input.list_name)
    })
}

pub async fn delete_list(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Outcome {
    state
        .sessions
        .with_session(id, |session| actions::delete_list(session, &list_id))
}

// ============================================================
// Todos
// ============================================================

pub async fn add_todo(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
    form: Result<Form<TodoInput>, FormRejection>,
) -> Outcome {
    let input = form_or_default(form);
    state
        .sessions
        .with_session(id, |session| actions::add_todo(session, &list_id, &input.todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Outcome {
    state.sessions.with_session(id, |session| {
        actions::delete_todo(session, &list_id, &todo_id)
    })
}

pub async fn set_todo_completed(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path((list_id, todo_id)): Path<(String, String)>,
    form: Result<Form<CompletedInput>, FormRejection>,
) -> Outcome {
    let input = form_or_default(form);
    state.sessions.with_session(id, |session| {
        actions::set_todo_completed(session, &list_id, &todo_id, input.completed.as_deref())
    })
}

pub async fn complete_all_todos(
    State(state): State<AppState>,
    Extension(SessionId(id)): Extension<SessionId>,
    Path(list_id): Path<String>,
) -> Outcome {
    state
        .sessions
        .with_session(id, |session| actions::complete_all_todos(session, &list_id))
}
