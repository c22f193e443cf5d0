//! The list store: CRUD over a session's lists and their todos.
//!
//! Lists and todos are addressed by position. Deleting shifts every later
//! index down by one, so an index issued before a delete may point at a
//! different entry afterwards.
//!
//! The store does not validate names; callers run [`crate::validation`]
//! first.

mod sessions;

pub use sessions::*;

use crate::models::{Todo, TodoList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("list {0} not found")]
    ListNotFound(usize),

    #[error("todo {item} not found in list {list}")]
    TodoNotFound { list: usize, item: usize },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Operations on an ordered collection of lists.
pub trait ListStore {
    fn lists(&self) -> &[TodoList];

    fn list(&self, index: usize) -> Option<&TodoList> {
        self.lists().get(index)
    }

    /// Append an empty list and return its index.
    fn create_list(&mut self, name: String) -> usize;

    fn rename_list(&mut self, index: usize, name: String) -> Result<()>;

    /// Remove the list and all of its todos.
    fn delete_list(&mut self, index: usize) -> Result<TodoList>;

    /// Append an incomplete todo and return its index within the list.
    fn add_item(&mut self, list: usize, name: String) -> Result<usize>;

    fn delete_item(&mut self, list: usize, item: usize) -> Result<Todo>;

    fn set_item_completed(&mut self, list: usize, item: usize, completed: bool) -> Result<()>;

    /// Complete every todo if any is incomplete, otherwise reopen them all.
    fn toggle_all_items(&mut self, list: usize) -> Result<()>;
}

fn list_mut(lists: &mut [TodoList], index: usize) -> Result<&mut TodoList> {
    lists.get_mut(index).ok_or(StoreError::ListNotFound(index))
}

fn todo_mut(lists: &mut [TodoList], list: usize, item: usize) -> Result<&mut Todo> {
    list_mut(lists, list)?
        .todos
        .get_mut(item)
        .ok_or(StoreError::TodoNotFound { list, item })
}

impl ListStore for Vec<TodoList> {
    fn lists(&self) -> &[TodoList] {
        self
    }

    fn create_list(&mut self, name: String) -> usize {
        self.push(TodoList::new(name));
        self.len() - 1
    }

    fn rename_list(&mut self, index: usize, name: String) -> Result<()> {
        list_mut(self, index)?.name = name;
        Ok(())
    }

    fn delete_list(&mut self, index: usize) -> Result<TodoList> {
        if index >= self.len() {
            return Err(StoreError::ListNotFound(index));
        }
        Ok(self.remove(index))
    }

    fn add_item(&mut self, list: usize, name: String) -> Result<usize> {
        let todos = &mut list_mut(self, list)?.todos;
        todos.push(Todo::new(name));
        Ok(todos.len() - 1)
    }

    fn delete_item(&mut self, list: usize, item: usize) -> Result<Todo> {
        let todos = &mut list_mut(self, list)?.todos;
        if item >= todos.len() {
            return Err(StoreError::TodoNotFound { list, item });
        }
        Ok(todos.remove(item))
    }

    fn set_item_completed(&mut self, list: usize, item: usize, completed: bool) -> Result<()> {
        todo_mut(self, list, item)?.completed = completed;
        Ok(())
    }

    fn toggle_all_items(&mut self, list: usize) -> Result<()> {
        let todos = &mut list_mut(self, list)?.todos;
        let target = todos.iter().any(|todo| !todo.completed);
        for todo in todos.iter_mut() {
            todo.completed = target;
        }
        Ok(())
    }
}
