//! Output formatting module for tasklist
//!
//! Provides table formatting and display utilities for CLI output.

use tasklist_db::Task;

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 50;

/// Truncate a string to the specified maximum width, adding ellipsis if needed.
///
/// Width is counted in characters, not bytes.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Short status label for a task
pub fn status_label(task: &Task) -> &'static str {
    if task.deleted {
        "deleted"
    } else if task.is_completed {
        "done"
    } else {
        "open"
    }
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID            Status  Title
/// ------------  ------  ---------
/// 3f9a1c0b7d2e  open    Buy milk
/// ```
///
/// Rows are printed in the order given.
pub fn format_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = ["ID", "Status", "Title"];

    let id_width = tasks
        .iter()
        .map(|t| t.id.chars().count())
        .max()
        .unwrap_or(0)
        .max(headers[0].len());

    let status_width = tasks
        .iter()
        .map(|t| status_label(t).len())
        .max()
        .unwrap_or(0)
        .max(headers[1].len());

    let title_width = tasks
        .iter()
        .map(|t| t.title.chars().count().min(MAX_TITLE_WIDTH))
        .max()
        .unwrap_or(0)
        .max(headers[2].len());

    let mut output = String::new();

    output.push_str(&format!(
        "{:<id_w$}  {:<status_w$}  {}\n",
        headers[0],
        headers[1],
        headers[2],
        id_w = id_width,
        status_w = status_width,
    ));

    output.push_str(&format!(
        "{:->id_w$}  {:->status_w$}  {:->title_w$}\n",
        "",
        "",
        "",
        id_w = id_width,
        status_w = status_width,
        title_w = title_width,
    ));

    for task in tasks {
        output.push_str(&format!(
            "{:<id_w$}  {:<status_w$}  {}\n",
            task.id,
            status_label(task),
            truncate(&task.title, MAX_TITLE_WIDTH),
            id_w = id_width,
            status_w = status_width,
        ));
    }

    // Remove trailing newline
    output.pop();

    output
}
