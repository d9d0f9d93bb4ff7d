//! Plain-text rendering of one day.

use daytodo_core::{TodoItem, EMPTY_DAY_MESSAGE};

pub fn render_day(heading: &str, todos: &[TodoItem]) -> String {
    let mut out = format!("{heading}\n");
    if todos.is_empty() {
        out.push_str(EMPTY_DAY_MESSAGE);
        out.push('\n');
        return out;
    }

    for todo in todos {
        let mark = if todo.completed { 'x' } else { ' ' };
        out.push_str(&format!("[{mark}] {} {}\n", todo.id, todo.text));
    }
    out
}
