//! One transition per route, run against a single session's state.
//!
//! A transition parses its identifiers, validates input, mutates the store
//! and returns what the client should see next. Addressing a list or todo
//! that does not exist always sends the client back to the overview.

use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::models::SessionState;
use crate::pages;
use crate::store::{ListStore, StoreError};
use crate::validation::{validate_item_name, validate_list_name, validate_list_rename};

pub const LISTS_PATH: &str = "/lists";

/// What a transition produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A rendered page, shown directly.
    Render(String),
    /// Send the client to another path with `303 See Other`.
    Redirect(String),
}

impl Outcome {
    fn to_lists() -> Self {
        Self::Redirect(LISTS_PATH.to_string())
    }

    fn to_list(list_id: usize) -> Self {
        Self::Redirect(format!("{LISTS_PATH}/{list_id}"))
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        match self {
            Self::Render(html) => Html(html).into_response(),
            Self::Redirect(path) => Redirect::to(&path).into_response(),
        }
    }
}

/// Parse a path identifier as a storage index.
///
/// Anything but a plain decimal number is rejected, which callers treat the
/// same as an index that does not exist.
pub fn parse_index(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Only the exact value `"true"` means completed. Anything else, including
/// an absent field, means not completed.
pub fn parse_completed(raw: Option<&str>) -> bool {
    raw == Some("true")
}

fn not_found(err: StoreError) -> Outcome {
    tracing::debug!("{}, redirecting to overview", err);
    Outcome::to_lists()
}

fn missing_id(raw: &str) -> Outcome {
    tracing::debug!(id = raw, "Unparseable id, redirecting to overview");
    Outcome::to_lists()
}

pub fn view_all_lists(session: &mut SessionState) -> Outcome {
    let flash = session.take_flash();
    Outcome::Render(pages::lists_page(&session.lists, &flash))
}

pub fn view_new_list_form(session: &mut SessionState) -> Outcome {
    let flash = session.take_flash();
    Outcome::Render(pages::new_list_page("", &flash))
}

pub fn view_list(session: &mut SessionState, list_id: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    if session.lists.list(index).is_none() {
        return not_found(StoreError::ListNotFound(index));
    }
    let flash = session.take_flash();
    Outcome::Render(pages::list_page(&session.lists[index], index, "", &flash))
}

pub fn view_edit_list_form(session: &mut SessionState, list_id: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    let Some(name) = session.lists.list(index).map(|list| list.name.clone()) else {
        return not_found(StoreError::ListNotFound(index));
    };
    let flash = session.take_flash();
    Outcome::Render(pages::edit_list_page(index, &name, &flash))
}

pub fn create_list(session: &mut SessionState, list_name: &str) -> Outcome {
    let name = list_name.trim();

    if let Err(err) = validate_list_name(name, session.lists.lists()) {
        tracing::warn!("Rejected list name: {}", err);
        session.set_error(err.to_string());
        let flash = session.take_flash();
        return Outcome::Render(pages::new_list_page(name, &flash));
    }

    let index = session.lists.create_list(name.to_string());
    tracing::debug!(list = index, "Created list");
    session.set_success("The list has been created.");
    Outcome::to_lists()
}

pub fn rename_list(session: &mut SessionState, list_id: &str, list_name: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    if session.lists.list(index).is_none() {
        return not_found(StoreError::ListNotFound(index));
    }
    let name = list_name.trim();

    if let Err(err) = validate_list_rename(name, session.lists.lists(), index) {
        tracing::warn!("Rejected list name: {}", err);
        session.set_error(err.to_string());
        let flash = session.take_flash();
        return Outcome::Render(pages::edit_list_page(index, name, &flash));
    }

    match session.lists.rename_list(index, name.to_string()) {
        Ok(()) => {
            session.set_success("The list has been updated.");
            Outcome::to_list(index)
        }
        Err(err) => not_found(err),
    }
}

pub fn delete_list(session: &mut SessionState, list_id: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    match session.lists.delete_list(index) {
        Ok(list) => {
            tracing::debug!(list = index, todos = list.todos.len(), "Deleted list");
            session.set_success("The list has been deleted.");
            Outcome::to_lists()
        }
        Err(err) => not_found(err),
    }
}

pub fn add_todo(session: &mut SessionState, list_id: &str, todo: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    if session.lists.list(index).is_none() {
        return not_found(StoreError::ListNotFound(index));
    }
    let name = todo.trim();

    if let Err(err) = validate_item_name(name) {
        tracing::warn!("Rejected todo: {}", err);
        session.set_error(err.to_string());
        let flash = session.take_flash();
        return Outcome::Render(pages::list_page(&session.lists[index], index, name, &flash));
    }

    match session.lists.add_item(index, name.to_string()) {
        Ok(_) => {
            session.set_success("The todo was added.");
            Outcome::to_list(index)
        }
        Err(err) => not_found(err),
    }
}

pub fn delete_todo(session: &mut SessionState, list_id: &str, todo_id: &str) -> Outcome {
    let (Some(list), Some(item)) = (parse_index(list_id), parse_index(todo_id)) else {
        return missing_id(&format!("{list_id}/{todo_id}"));
    };
    match session.lists.delete_item(list, item) {
        Ok(_) => {
            session.set_success("The todo has been deleted.");
            Outcome::to_list(list)
        }
        Err(err) => not_found(err),
    }
}

pub fn set_todo_completed(
    session: &mut SessionState,
    list_id: &str,
    todo_id: &str,
    completed: Option<&str>,
) -> Outcome {
    let (Some(list), Some(item)) = (parse_index(list_id), parse_index(todo_id)) else {
        return missing_id(&format!("{list_id}/{todo_id}"));
    };
    match session
        .lists
        .set_item_completed(list, item, parse_completed(completed))
    {
        Ok(()) => {
            session.set_success("The todo has been updated.");
            Outcome::to_list(list)
        }
        Err(err) => not_found(err),
    }
}

pub fn complete_all_todos(session: &mut SessionState, list_id: &str) -> Outcome {
    let Some(index) = parse_index(list_id) else {
        return missing_id(list_id);
    };
    match session.lists.toggle_all_items(index) {
        Ok(()) => {
            session.set_success("All todos have been updated.");
            Outcome::to_list(index)
        }
        Err(err) => not_found(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::is_list_complete;

    fn redirect(path: &str) -> Outcome {
        Outcome::Redirect(path.to_string())
    }

    fn rendered(outcome: Outcome) -> String {
        match outcome {
            Outcome::Render(html) => html,
            other => panic!("expected a rendered page, got {:?}", other),
        }
    }

    #[test]
    fn parse_index_rejects_non_numeric_input() {
        assert_eq!(parse_index("3"), Some(3));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("99999999999999999999999"), None);
    }

    #[test]
    fn parse_completed_accepts_only_true() {
        assert!(parse_completed(Some("true")));
        assert!(!parse_completed(Some("TRUE")));
        assert!(!parse_completed(Some("1")));
        assert!(!parse_completed(None));
    }

    #[test]
    fn groceries_scenario() {
        let mut session = SessionState::new();
        assert_eq!(create_list(&mut session, "Groceries"), redirect("/lists"));
        assert_eq!(add_todo(&mut session, "0", "Milk"), redirect("/lists/0"));
        assert_eq!(add_todo(&mut session, "0", "Eggs"), redirect("/lists/0"));

        set_todo_completed(&mut session, "0", "0", Some("true"));
        assert!(!is_list_complete(&session.lists[0]));

        set_todo_completed(&mut session, "0", "1", Some("true"));
        assert!(is_list_complete(&session.lists[0]));
    }

    #[test]
    fn duplicate_list_name_re_renders_form() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");
        session.take_flash();

        let html = rendered(create_list(&mut session, "Home"));
        assert!(html.contains("List name must be unique."));
        assert!(html.contains(r#"value="Home""#));
        assert_eq!(session.lists.len(), 1);
        assert!(session.error.is_none());
    }

    #[test]
    fn create_list_trims_whitespace() {
        let mut session = SessionState::new();
        create_list(&mut session, "  Work  ");
        assert_eq!(session.lists[0].name, "Work");

        let html = rendered(create_list(&mut session, "   "));
        assert!(html.contains("between 1 and 100 characters"));
        assert_eq!(session.lists.len(), 1);
    }

    #[test]
    fn rename_to_same_name_succeeds() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");
        assert_eq!(rename_list(&mut session, "0", "Home"), redirect("/lists/0"));
        assert_eq!(session.success.as_deref(), Some("The list has been updated."));
    }

    #[test]
    fn rename_to_other_lists_name_fails() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");
        create_list(&mut session, "Work");

        let html = rendered(rename_list(&mut session, "1", "Home"));
        assert!(html.contains("List name must be unique."));
        assert_eq!(session.lists[1].name, "Work");
    }

    #[test]
    fn delete_list_shifts_indices() {
        let mut session = SessionState::new();
        create_list(&mut session, "First");
        create_list(&mut session, "Second");

        assert_eq!(delete_list(&mut session, "0"), redirect("/lists"));
        assert_eq!(session.lists.len(), 1);
        assert_eq!(session.lists[0].name, "Second");
    }

    #[test]
    fn missing_targets_redirect_to_overview() {
        let mut session = SessionState::new();
        assert_eq!(view_list(&mut session, "0"), redirect("/lists"));
        assert_eq!(view_edit_list_form(&mut session, "5"), redirect("/lists"));
        assert_eq!(view_list(&mut session, "abc"), redirect("/lists"));
        assert_eq!(rename_list(&mut session, "0", "x"), redirect("/lists"));
        assert_eq!(delete_list(&mut session, "0"), redirect("/lists"));
        assert_eq!(add_todo(&mut session, "0", "x"), redirect("/lists"));

        create_list(&mut session, "Home");
        assert_eq!(delete_todo(&mut session, "0", "0"), redirect("/lists"));
        assert_eq!(
            set_todo_completed(&mut session, "0", "x", Some("true")),
            redirect("/lists")
        );
        assert_eq!(complete_all_todos(&mut session, "1"), redirect("/lists"));
    }

    #[test]
    fn invalid_todo_keeps_list_unchanged() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");

        let long = "x".repeat(101);
        let html = rendered(add_todo(&mut session, "0", &long));
        assert!(html.contains("Todo must be between 1 and 100 characters."));
        assert!(session.lists[0].todos.is_empty());
    }

    #[test]
    fn flash_is_shown_once() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");

        let first = rendered(view_all_lists(&mut session));
        assert!(first.contains("The list has been created."));

        let second = rendered(view_all_lists(&mut session));
        assert!(!second.contains("The list has been created."));
    }

    #[test]
    fn complete_all_toggles_whole_list() {
        let mut session = SessionState::new();
        create_list(&mut session, "Home");
        add_todo(&mut session, "0", "a");
        add_todo(&mut session, "0", "b");

        assert_eq!(complete_all_todos(&mut session, "0"), redirect("/lists/0"));
        assert!(is_list_complete(&session.lists[0]));

        complete_all_todos(&mut session, "0");
        assert!(session.lists[0].todos.iter().all(|t| !t.completed));
    }
}
