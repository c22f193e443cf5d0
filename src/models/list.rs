use serde::{Deserialize, Serialize};

/// A single checkable entry in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub name: String,
    pub completed: bool,
}

impl Todo {
    /// New todos always start incomplete.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            completed: false,
        }
    }
}

/// A named list of todos.
///
/// The list owns its todos exclusively: deleting the list deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub name: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            todos: Vec::new(),
        }
    }
}

/// Form body for creating or renaming a list.
///
/// A missing field deserializes to an empty string so it fails length
/// validation instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListNameInput {
    #[serde(default)]
    pub list_name: String,
}

/// Form body for adding a todo to a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub todo: String,
}

/// Form body for marking a todo complete or incomplete.
///
/// Only the exact string `"true"` marks the todo complete; see
/// [`crate::actions::parse_completed`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletedInput {
    pub completed: Option<String>,
}
