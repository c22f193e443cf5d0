//! Name validation for lists and todos.
//!
//! These checks are pure; callers decide how to surface a failure. The
//! error's `Display` text is the message shown to the user.

use crate::models::TodoList;

/// Inclusive bounds on list and todo name length, in characters.
pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;

/// What a name was being validated for. Selects the wording of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Todo,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "List name",
            Self::Todo => "Todo",
        }
    }
}

impl std::fmt::Display for NameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{kind} must be between 1 and 100 characters.")]
    InvalidLength { kind: NameKind },

    #[error("List name must be unique.")]
    DuplicateName,
}

fn check_length(name: &str, kind: NameKind) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength { kind })
    }
}

/// Validate a name for a new list against the lists that already exist.
pub fn validate_list_name(name: &str, lists: &[TodoList]) -> Result<(), ValidationError> {
    check_length(name, NameKind::List)?;
    if lists.iter().any(|list| list.name == name) {
        return Err(ValidationError::DuplicateName);
    }
    Ok(())
}

/// Validate a new name for the list at `index`.
///
/// The list being renamed is skipped in the duplicate check, so keeping the
/// current name is allowed.
pub fn validate_list_rename(
    name: &str,
    lists: &[TodoList],
    index: usize,
) -> Result<(), ValidationError> {
    check_length(name, NameKind::List)?;
    let collides = lists
        .iter()
        .enumerate()
        .any(|(i, list)| i != index && list.name == name);
    if collides {
        return Err(ValidationError::DuplicateName);
    }
    Ok(())
}

/// Validate a todo name. Todo names need not be unique.
pub fn validate_item_name(name: &str) -> Result<(), ValidationError> {
    check_length(name, NameKind::Todo)
}
