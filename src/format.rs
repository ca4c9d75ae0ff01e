//! Dual-mode rendering of tool results.
//!
//! Every tool response is either pretty-printed JSON (the default) or a
//! Markdown document. Markdown collections go through a per-entity-kind
//! renderer lookup with a generic table fallback; single objects become
//! key/value bullet lists with nested values in fenced JSON blocks.

use rmcp::model::{CallToolResult, Content};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::Error;

/// Output mode for a tool response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Pretty-printed JSON (default).
    #[default]
    Json,
    /// Markdown document with tables for collections.
    Markdown,
}

/// Pagination metadata shown above Markdown tables.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Number of items on this page.
    pub count: usize,
    /// Continuation token, when more results exist.
    pub next_offset: Option<String>,
}

/// Column cap for tables derived from unrecognized shapes.
pub const GENERIC_TABLE_MAX_COLUMNS: usize = 5;

/// Marker appended when a response exceeds the configured character limit.
pub const TRUNCATION_MARKER: &str = "… [truncated]";

/// Render a successful payload in the requested mode.
///
/// `kind` tags known entity shapes ("task", "project", ...) for fixed-column
/// tables and headings; `page` adds the pagination prefix above collections.
pub fn render(
    value: &Value,
    kind: Option<&str>,
    page: Option<&PageMeta>,
    format: ResponseFormat,
    max_chars: usize,
) -> String {
    let rendered = match format {
        ResponseFormat::Json => pretty(value),
        ResponseFormat::Markdown => markdown(value, kind, page),
    };
    truncate(rendered, max_chars)
}

/// Convert a classified error into the uniform failure envelope.
///
/// The message carries a retryability annotation for classified rate-limit
/// and API errors; `details` is a structured breakdown the caller can branch
/// on.
pub fn error_envelope(context: &str, error: &Error) -> Value {
    let mut message = format!("{}: {}", context, error);
    match error {
        Error::RateLimited { retry_after_secs } => {
            message.push_str(&format!(" (retryable: wait {}s)", retry_after_secs));
        }
        Error::Api { .. } => message.push_str(" (not retryable)"),
        _ => {}
    }

    let details = match error {
        Error::InvalidToken => serde_json::json!({
            "kind": "authentication",
            "retryable": false,
            "message": "invalid token format",
        }),
        Error::Auth { message } => serde_json::json!({
            "kind": "authentication",
            "retryable": false,
            "message": message,
        }),
        Error::RateLimited { retry_after_secs } => serde_json::json!({
            "kind": "rate_limit",
            "retryable": true,
            "retry_after_secs": retry_after_secs,
        }),
        Error::NotFound { path, message } => serde_json::json!({
            "kind": "not_found",
            "retryable": false,
            "path": path,
            "message": message,
        }),
        Error::Api { status, message } => serde_json::json!({
            "kind": "api",
            "retryable": false,
            "status": status,
            "message": message,
        }),
        Error::Http(e) => serde_json::json!({
            "kind": "http",
            "retryable": false,
            "message": e.to_string(),
        }),
        Error::Parse(e) => serde_json::json!({
            "kind": "parse",
            "retryable": false,
            "message": e.to_string(),
        }),
    };

    serde_json::json!({"error": message, "details": details})
}

/// Build the error tool result for a failed operation.
pub fn error_response(context: &str, error: &Error) -> CallToolResult {
    let envelope = error_envelope(context, error);
    CallToolResult::error(vec![Content::text(pretty(&envelope))])
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn truncate(rendered: String, max_chars: usize) -> String {
    if rendered.chars().count() <= max_chars {
        return rendered;
    }
    let cut: String = rendered.chars().take(max_chars).collect();
    format!("{}\n{}", cut, TRUNCATION_MARKER)
}

// ============================================================================
// Markdown rendering
// ============================================================================

fn markdown(value: &Value, kind: Option<&str>, page: Option<&PageMeta>) -> String {
    match value {
        Value::Array(items) => markdown_collection(items, kind, page),
        Value::Object(_) => markdown_object(value, kind),
        other => format!("```json\n{}\n```\n", pretty(other)),
    }
}

fn markdown_collection(items: &[Value], kind: Option<&str>, page: Option<&PageMeta>) -> String {
    let mut out = format!("# {}\n\n", kind.map(plural_title).unwrap_or_else(|| "Results".into()));

    if let Some(meta) = page {
        out.push_str(&format!(
            "{} item{}.",
            meta.count,
            if meta.count == 1 { "" } else { "s" }
        ));
        if let Some(offset) = &meta.next_offset {
            out.push_str(&format!(" More available (offset: `{}`).", offset));
        }
        out.push_str("\n\n");
    }

    if items.is_empty() {
        out.push_str("_No results._\n");
        return out;
    }

    let renderer = kind.and_then(collection_renderer).unwrap_or(generic_table);
    out.push_str(&renderer(items));
    out
}

/// A fixed-column table renderer for one entity kind.
type TableRenderer = fn(&[Value]) -> String;

/// Look up the table renderer for a known entity kind.
///
/// Kinds without a dedicated renderer fall back to [`generic_table`].
fn collection_renderer(kind: &str) -> Option<TableRenderer> {
    match kind {
        "task" => Some(task_table),
        "project" => Some(project_table),
        "workspace" => Some(workspace_table),
        "user" => Some(user_table),
        "tag" => Some(tag_table),
        "section" => Some(section_table),
        _ => None,
    }
}

fn task_table(items: &[Value]) -> String {
    let mut out =
        String::from("| Name | GID | Assignee | Due | Completed |\n|---|---|---|---|---|\n");
    for item in items {
        let due = item
            .get("due_on")
            .filter(|v| !v.is_null())
            .or_else(|| item.get("due_at"));
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("assignee")),
            text_cell(due),
            text_cell(item.get("completed")),
        ));
    }
    out
}

fn project_table(items: &[Value]) -> String {
    let mut out = String::from("| Name | GID | Owner | Due | Archived |\n|---|---|---|---|---|\n");
    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("owner")),
            text_cell(item.get("due_on")),
            text_cell(item.get("archived")),
        ));
    }
    out
}

fn workspace_table(items: &[Value]) -> String {
    let mut out = String::from("| Name | GID | Organization |\n|---|---|---|\n");
    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("is_organization")),
        ));
    }
    out
}

fn user_table(items: &[Value]) -> String {
    let mut out = String::from("| Name | GID | Email |\n|---|---|---|\n");
    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("email")),
        ));
    }
    out
}

fn tag_table(items: &[Value]) -> String {
    let mut out = String::from("| Name | GID | Color |\n|---|---|---|\n");
    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("color")),
        ));
    }
    out
}

fn section_table(items: &[Value]) -> String {
    let mut out = String::from("| Name | GID | Project |\n|---|---|---|\n");
    for item in items {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            text_cell(item.get("name")),
            text_cell(item.get("gid")),
            text_cell(item.get("project")),
        ));
    }
    out
}

/// Table derived from the first item's keys, capped at
/// [`GENERIC_TABLE_MAX_COLUMNS`] columns.
fn generic_table(items: &[Value]) -> String {
    let columns: Vec<&String> = match items.first() {
        Some(Value::Object(map)) => map.keys().take(GENERIC_TABLE_MAX_COLUMNS).collect(),
        _ => Vec::new(),
    };

    if columns.is_empty() {
        return format!("```json\n{}\n```\n", pretty(&Value::Array(items.to_vec())));
    }

    let mut out = String::from("|");
    for column in &columns {
        out.push_str(&format!(" {} |", column));
    }
    out.push('\n');
    out.push('|');
    for _ in &columns {
        out.push_str("---|");
    }
    out.push('\n');

    for item in items {
        out.push('|');
        for column in &columns {
            out.push_str(&format!(" {} |", text_cell(item.get(column.as_str()))));
        }
        out.push('\n');
    }
    out
}

fn markdown_object(value: &Value, kind: Option<&str>) -> String {
    let mut out = format!("# {}\n\n", kind.map(title).unwrap_or_else(|| "Result".into()));

    if let Value::Object(map) = value {
        for (key, field) in map {
            match field {
                Value::Object(_) | Value::Array(_) => {
                    out.push_str(&format!("- **{}**:\n\n```json\n{}\n```\n", key, pretty(field)));
                }
                Value::Null => out.push_str(&format!("- **{}**: -\n", key)),
                Value::String(s) => {
                    out.push_str(&format!("- **{}**: {}\n", key, s.replace('\n', " ")));
                }
                other => out.push_str(&format!("- **{}**: {}\n", key, other)),
            }
        }
    }
    out
}

/// Render one table cell; missing and null values display as `-`, and
/// compact references display their embedded name.
fn text_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => escape_cell(s),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => match other.get("name").and_then(Value::as_str) {
            Some(name) => escape_cell(name),
            None => escape_cell(&other.to_string()),
        },
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('\n', " ").replace('|', "\\|")
}

fn title(kind: &str) -> String {
    let spaced = kind.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}

fn plural_title(kind: &str) -> String {
    match kind {
        "story" => "Stories".to_string(),
        other => format!("{}s", title(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NO_LIMIT: usize = usize::MAX;

    #[test]
    fn test_json_mode_is_pretty_printed_verbatim() {
        let value = json!({"gid": "1", "name": "Ship spec"});
        let out = render(&value, Some("task"), None, ResponseFormat::Json, NO_LIMIT);

        assert_eq!(out, serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_task_table_one_row_per_task_in_order() {
        let tasks = json!([
            {"gid": "1", "name": "First", "assignee": {"gid": "u1", "name": "Alice"}, "due_on": "2025-01-01", "completed": false},
            {"gid": "2", "name": "Second", "assignee": null, "completed": true},
            {"gid": "3", "name": "Third"}
        ]);
        let out = render(&tasks, Some("task"), None, ResponseFormat::Markdown, NO_LIMIT);

        let rows: Vec<&str> = out.lines().filter(|l| l.starts_with("| ")).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].contains("First") && rows[0].contains("Alice"));
        assert_eq!(rows[1], "| Second | 2 | - | - | true |");
        assert_eq!(rows[2], "| Third | 3 | - | - | - |");
    }

    #[test]
    fn test_task_table_falls_back_to_due_at() {
        let tasks = json!([
            {"gid": "1", "name": "Timed", "due_at": "2025-01-01T12:00:00Z"}
        ]);
        let out = render(&tasks, Some("task"), None, ResponseFormat::Markdown, NO_LIMIT);

        assert!(out.contains("2025-01-01T12:00:00Z"));
    }

    #[test]
    fn test_pagination_prefix_with_offset() {
        let items = json!([{"gid": "1", "name": "A"}]);
        let meta = PageMeta {
            count: 1,
            next_offset: Some("abc".to_string()),
        };
        let out = render(
            &items,
            Some("task"),
            Some(&meta),
            ResponseFormat::Markdown,
            NO_LIMIT,
        );

        assert!(out.contains("1 item."));
        assert!(out.contains("More available (offset: `abc`)."));
    }

    #[test]
    fn test_pagination_prefix_without_offset() {
        let items = json!([{"gid": "1", "name": "A"}, {"gid": "2", "name": "B"}]);
        let meta = PageMeta {
            count: 2,
            next_offset: None,
        };
        let out = render(
            &items,
            Some("task"),
            Some(&meta),
            ResponseFormat::Markdown,
            NO_LIMIT,
        );

        assert!(out.contains("2 items."));
        assert!(!out.contains("More available"));
    }

    #[test]
    fn test_unknown_kind_uses_generic_table_capped_at_five_columns() {
        let items = json!([
            {"a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6, "g": 7}
        ]);
        let out = render(
            &items,
            Some("goal_relationship"),
            None,
            ResponseFormat::Markdown,
            NO_LIMIT,
        );

        let header = out.lines().find(|l| l.starts_with('|')).unwrap();
        let columns = header.matches('|').count() - 1;
        assert_eq!(columns, GENERIC_TABLE_MAX_COLUMNS);
    }

    #[test]
    fn test_single_object_renders_bullets_with_nested_json() {
        let value = json!({
            "gid": "1",
            "name": "Ship spec",
            "memberships": [{"project": {"gid": "p1"}}]
        });
        let out = render(&value, Some("task"), None, ResponseFormat::Markdown, NO_LIMIT);

        assert!(out.starts_with("# Task\n"));
        assert!(out.contains("- **name**: Ship spec"));
        assert!(out.contains("- **memberships**:\n\n```json"));
    }

    #[test]
    fn test_empty_collection() {
        let items = json!([]);
        let out = render(&items, Some("task"), None, ResponseFormat::Markdown, NO_LIMIT);

        assert!(out.contains("_No results._"));
    }

    #[test]
    fn test_cell_escapes_pipes_and_newlines() {
        let items = json!([{"gid": "1", "name": "a|b\nc"}]);
        let out = render(&items, Some("tag"), None, ResponseFormat::Markdown, NO_LIMIT);

        assert!(out.contains("a\\|b c"));
    }

    #[test]
    fn test_truncation_appends_marker() {
        let value = json!({"text": "x".repeat(500)});
        let out = render(&value, None, None, ResponseFormat::Json, 100);

        assert!(out.ends_with(TRUNCATION_MARKER));
        assert!(out.chars().count() < 500);
    }

    #[test]
    fn test_error_envelope_rate_limited_is_annotated_retryable() {
        let error = Error::RateLimited {
            retry_after_secs: 30,
        };
        let envelope = error_envelope("Failed to list tasks", &error);

        let message = envelope["error"].as_str().unwrap();
        assert!(message.contains("Failed to list tasks"));
        assert!(message.contains("(retryable: wait 30s)"));
        assert_eq!(envelope["details"]["kind"], "rate_limit");
        assert_eq!(envelope["details"]["retry_after_secs"], 30);
        assert_eq!(envelope["details"]["retryable"], true);
    }

    #[test]
    fn test_error_envelope_api_error_is_annotated_not_retryable() {
        let error = Error::Api {
            status: 500,
            message: "boom".to_string(),
        };
        let envelope = error_envelope("Failed to get task", &error);

        assert!(envelope["error"].as_str().unwrap().contains("(not retryable)"));
        assert_eq!(envelope["details"]["status"], 500);
    }

    #[test]
    fn test_error_envelope_not_found_names_path() {
        let error = Error::NotFound {
            path: "/tasks/999".to_string(),
            message: "Unknown object".to_string(),
        };
        let envelope = error_envelope("Failed to get task", &error);

        assert_eq!(envelope["details"]["kind"], "not_found");
        assert_eq!(envelope["details"]["path"], "/tasks/999");
    }

    #[test]
    fn test_error_response_is_flagged_as_error() {
        let error = Error::Auth {
            message: "bad token".to_string(),
        };
        let result = error_response("Failed to get user", &error);

        assert_eq!(result.is_error, Some(true));
    }
}
