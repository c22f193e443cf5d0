//! Read-only presentation helpers.
//!
//! Display order puts unfinished work first. The helpers pair every entry
//! with its storage index because all mutations address lists and todos by
//! that index, not by where they appear on the page.

use crate::models::{Todo, TodoList};

pub fn todos_count(list: &TodoList) -> usize {
    list.todos.len()
}

pub fn todos_remaining_count(list: &TodoList) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// A list is complete when it has todos and none are left open.
/// An empty list is never complete.
pub fn is_list_complete(list: &TodoList) -> bool {
    todos_count(list) > 0 && todos_remaining_count(list) == 0
}

/// CSS class for a list on the overview page.
pub fn list_class(list: &TodoList) -> Option<&'static str> {
    is_list_complete(list).then_some("complete")
}

/// Stable partition: entries failing `done` first, then the rest, each
/// paired with its original index.
fn partition_indexed<T>(entries: &[T], done: impl Fn(&T) -> bool) -> Vec<(&T, usize)> {
    let (finished, open): (Vec<_>, Vec<_>) = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry, index))
        .partition(|(entry, _)| done(*entry));

    open.into_iter().chain(finished).collect()
}

pub fn sort_lists_for_display(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    partition_indexed(lists, is_list_complete)
}

pub fn sort_items_for_display(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    partition_indexed(todos, |todo| todo.completed)
}
