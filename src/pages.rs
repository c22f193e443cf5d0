//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`], which shows the transient messages it
//! is handed. Callers take those messages out of the session first, so each
//! one appears on exactly one page. All user text is escaped.

use std::fmt::Write;

use crate::models::{Flash, TodoList};
use crate::views::{
    list_class, sort_items_for_display, sort_lists_for_display, todos_count,
    todos_remaining_count,
};

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn flash_html(flash: &Flash) -> String {
    let mut html = String::new();
    if let Some(error) = &flash.error {
        let _ = write!(
            html,
            r#"<div class="flash error"><p>{}</p></div>"#,
            escape_html(error)
        );
    }
    if let Some(success) = &flash.success {
        let _ = write!(
            html,
            r#"<div class="flash success"><p>{}</p></div>"#,
            escape_html(success)
        );
    }
    html
}

fn layout(title: &str, flash: &Flash, header_links: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>Todo Tracker</h1>
        <div class="actions">{header_links}</div>
    </header>
    <main>
        {flash}
        {content}
    </main>
</body>
</html>"#,
        title = escape_html(title),
        css = CSS,
        header_links = header_links,
        flash = flash_html(flash),
        content = content,
    )
}

/// Overview of every list, unfinished lists first.
pub fn lists_page(lists: &[TodoList], flash: &Flash) -> String {
    let mut items = String::new();
    for (list, index) in sort_lists_for_display(lists) {
        let class = list_class(list).unwrap_or("");
        let _ = write!(
            items,
            r#"
            <li class="{class}">
                <a href="/lists/{index}">
                    <h2>{name}</h2>
                    <p>{remaining} / {total}</p>
                </a>
            </li>"#,
            name = escape_html(&list.name),
            remaining = todos_remaining_count(list),
            total = todos_count(list),
        );
    }

    let content = if lists.is_empty() {
        r#"<p class="empty">You have no lists yet. <a href="/lists/new">Create one.</a></p>"#
            .to_string()
    } else {
        format!(r#"<ul id="lists">{items}
        </ul>"#)
    };

    layout(
        "Todo Lists",
        flash,
        r#"<a class="add" href="/lists/new">New List</a>"#,
        &content,
    )
}

/// Creation form. `list_name` refills the field after a failed submit.
pub fn new_list_page(list_name: &str, flash: &Flash) -> String {
    let content = format!(
        r#"<form action="/lists" method="post">
            <dl>
                <dt><label for="list_name">Enter the name for your new list:</label></dt>
                <dd><input name="list_name" id="list_name" placeholder="List Name" type="text" value="{value}"></dd>
            </dl>
            <fieldset class="actions">
                <input type="submit" value="Save">
                <a href="/lists">Cancel</a>
            </fieldset>
        </form>"#,
        value = escape_html(list_name),
    );

    layout(
        "New List",
        flash,
        r#"<a class="list" href="/lists">All Lists</a>"#,
        &content,
    )
}

/// One list with its todos, open todos first, and the add-todo form.
/// `todo` refills the add field after a failed submit.
pub fn list_page(list: &TodoList, list_id: usize, todo: &str, flash: &Flash) -> String {
    let mut todos = String::new();
    for (item, index) in sort_items_for_display(&list.todos) {
        let (class, next) = if item.completed {
            ("complete", "false")
        } else {
            ("", "true")
        };
        let _ = write!(
            todos,
            r#"
            <li class="{class}">
                <form action="/lists/{list_id}/todos/{index}/edit" method="post" class="check">
                    <input type="hidden" name="completed" value="{next}">
                    <button type="submit">Toggle</button>
                </form>
                <h3>{name}</h3>
                <form action="/lists/{list_id}/todos/{index}/destroy" method="post" class="delete">
                    <button type="submit">Delete</button>
                </form>
            </li>"#,
            name = escape_html(&item.name),
        );
    }

    let content = format!(
        r#"<section id="todos" class="{class}">
            <header>
                <h2>{name}</h2>
                <ul>
                    <li>
                        <form action="/lists/{list_id}/todos/complete_all" method="post">
                            <button class="check" type="submit">Complete All</button>
                        </form>
                    </li>
                    <li><a class="edit" href="/lists/{list_id}/edit">Edit List</a></li>
                </ul>
            </header>
            <ul>{todos}
            </ul>
        </section>
        <form action="/lists/{list_id}/todos" method="post">
            <dl>
                <dt><label for="todo">Enter a new todo item:</label></dt>
                <dd><input name="todo" id="todo" placeholder="Something to do" type="text" value="{value}"></dd>
            </dl>
            <fieldset class="actions">
                <input type="submit" value="Add">
            </fieldset>
        </form>"#,
        class = list_class(list).unwrap_or(""),
        name = escape_html(&list.name),
        value = escape_html(todo),
    );

    layout(
        &list.name,
        flash,
        r#"<a class="list" href="/lists">All Lists</a>"#,
        &content,
    )
}

/// Rename form, pre-filled with `list_name`, plus the delete button.
pub fn edit_list_page(list_id: usize, list_name: &str, flash: &Flash) -> String {
    let content = format!(
        r#"<form action="/lists/{list_id}/destroy" method="post" class="delete">
            <button type="submit">Delete List</button>
        </form>
        <form action="/lists/{list_id}" method="post">
            <dl>
                <dt><label for="list_name">Enter the new name for the list:</label></dt>
                <dd><input name="list_name" id="list_name" placeholder="List Name" type="text" value="{value}"></dd>
            </dl>
            <fieldset class="actions">
                <input type="submit" value="Save">
                <a href="/lists/{list_id}">Cancel</a>
            </fieldset>
        </form>"#,
        value = escape_html(list_name),
    );

    layout(
        "Edit List",
        flash,
        r#"<a class="list" href="/lists">All Lists</a>"#,
        &content,
    )
}

const CSS: &str = r#"
body { font-family: -apple-system, "Helvetica Neue", Arial, sans-serif; margin: 0; background: #f4f4f4; color: #333; }
header { display: flex; justify-content: space-between; align-items: center; padding: 1em 2em; background: #fff; border-bottom: 1px solid #ddd; }
main { max-width: 720px; margin: 2em auto; padding: 0 1em; }
.flash { padding: 0.5em 1em; margin-bottom: 1em; border-radius: 4px; }
.flash.error { background: #fbe3e4; color: #8a1f11; }
.flash.success { background: #e6efc2; color: #264409; }
ul { list-style: none; padding: 0; }
li { background: #fff; margin-bottom: 0.5em; padding: 0.75em 1em; border-radius: 4px; display: flex; align-items: center; gap: 1em; }
li.complete h2, li.complete h3 { text-decoration: line-through; color: #999; }
#lists a { display: flex; justify-content: space-between; width: 100%; color: inherit; text-decoration: none; }
#todos > header { padding: 0; background: none; border: none; }
#todos > header ul { display: flex; gap: 0.5em; }
.delete button { background: #c0392b; color: #fff; border: none; padding: 0.3em 0.8em; border-radius: 3px; }
.empty { color: #777; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn lists_page_links_by_storage_index() {
        let lists = vec![
            TodoList {
                name: "Done".into(),
                todos: vec![Todo {
                    name: "x".into(),
                    completed: true,
                }],
            },
            TodoList::new("Open"),
        ];
        let html = lists_page(&lists, &Flash::default());

        let open = html.find(r#"href="/lists/1""#).unwrap();
        let done = html.find(r#"href="/lists/0""#).unwrap();
        assert!(open < done);
        assert!(html.contains("0 / 1"));
    }

    #[test]
    fn layout_renders_flash_messages() {
        let flash = Flash {
            error: Some("List name must be unique.".into()),
            success: None,
        };
        let html = new_list_page("Work", &flash);
        assert!(html.contains(r#"class="flash error""#));
        assert!(html.contains("List name must be unique."));
        assert!(html.contains(r#"value="Work""#));
    }

    #[test]
    fn list_page_escapes_todo_names() {
        let mut list = TodoList::new("Home");
        list.todos.push(Todo::new("<script>"));
        let html = list_page(&list, 0, "", &Flash::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<h3><script>"));
    }
}
