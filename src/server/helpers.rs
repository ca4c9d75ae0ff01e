//! Helper functions for the tool modules.

use rmcp::model::{CallToolResult, Content, ErrorCode, ErrorData as McpError};
use serde::Serialize;
use serde_json::Value;

use crate::format::{self, PageMeta, ResponseFormat};
use crate::types::Page;
use crate::Error;

use super::AsanaServer;

/// Resolve the `opt_fields` override against the curated defaults.
pub(crate) fn resolve_fields(opt_fields: &Option<Vec<String>>, default_fields: &'static str) -> String {
    match opt_fields.as_ref().filter(|fields| !fields.is_empty()) {
        Some(fields) => fields.join(","),
        None => default_fields.to_string(),
    }
}

/// Convert any Display error to an MCP error (for non-API failures).
pub(crate) fn to_mcp_error(context: &str, error: impl std::fmt::Display) -> McpError {
    McpError::new(
        ErrorCode::INTERNAL_ERROR,
        format!("{}: {}", context, error),
        None,
    )
}

/// Create a validation error with the given message.
pub(crate) fn validation_error(message: &str) -> McpError {
    McpError::new(ErrorCode::INVALID_PARAMS, message.to_string(), None)
}

pub(crate) fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn to_json_value<T: Serialize>(value: &T) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| to_mcp_error("Failed to serialize response", e))
}

impl AsanaServer {
    /// Effective page size for a list call.
    pub(crate) fn page_limit(&self, limit: Option<u32>) -> u32 {
        limit.unwrap_or(self.default_page_size).clamp(1, 100)
    }

    /// Render a single fetched resource, or the error envelope.
    pub(crate) fn respond_one<T: Serialize>(
        &self,
        context: &str,
        kind: &str,
        result: Result<T, Error>,
        format: Option<ResponseFormat>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(value) => text_result(format::render(
                &to_json_value(&value)?,
                Some(kind),
                None,
                format.unwrap_or_default(),
                self.max_response_chars,
            )),
            Err(error) => Ok(format::error_response(context, &error)),
        }
    }

    /// Render one page of a list result, preserving the pagination token.
    pub(crate) fn respond_page<T: Serialize>(
        &self,
        context: &str,
        kind: &str,
        result: Result<Page<T>, Error>,
        format: Option<ResponseFormat>,
    ) -> Result<CallToolResult, McpError> {
        let page = match result {
            Ok(page) => page,
            Err(error) => return Ok(format::error_response(context, &error)),
        };

        let format = format.unwrap_or_default();
        let meta = PageMeta {
            count: page.items.len(),
            next_offset: page.next_offset.clone(),
        };
        let value = to_json_value(&page)?;

        let text = match format {
            ResponseFormat::Json => {
                format::render(&value, Some(kind), None, format, self.max_response_chars)
            }
            ResponseFormat::Markdown => {
                let items = value
                    .get("items")
                    .cloned()
                    .unwrap_or_else(|| Value::Array(Vec::new()));
                format::render(&items, Some(kind), Some(&meta), format, self.max_response_chars)
            }
        };
        text_result(text)
    }

    /// Render an unpaginated collection (search, typeahead).
    pub(crate) fn respond_many<T: Serialize>(
        &self,
        context: &str,
        kind: &str,
        result: Result<Vec<T>, Error>,
        format: Option<ResponseFormat>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(items) => text_result(format::render(
                &to_json_value(&items)?,
                Some(kind),
                None,
                format.unwrap_or_default(),
                self.max_response_chars,
            )),
            Err(error) => Ok(format::error_response(context, &error)),
        }
    }

    /// Render the confirmation envelope for a mutation returning a resource:
    /// `{success: true, message, <key>: <resource>}`.
    pub(crate) fn respond_mutated<T: Serialize>(
        &self,
        context: &str,
        message: &str,
        key: &str,
        result: Result<T, Error>,
        format: Option<ResponseFormat>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(value) => {
                let mut envelope = serde_json::Map::new();
                envelope.insert("success".to_string(), Value::Bool(true));
                envelope.insert("message".to_string(), Value::String(message.to_string()));
                envelope.insert(key.to_string(), to_json_value(&value)?);
                text_result(format::render(
                    &Value::Object(envelope),
                    None,
                    None,
                    format.unwrap_or_default(),
                    self.max_response_chars,
                ))
            }
            Err(error) => Ok(format::error_response(context, &error)),
        }
    }

    /// Render the confirmation envelope for a mutation with no response body.
    pub(crate) fn respond_empty(
        &self,
        context: &str,
        message: &str,
        result: Result<(), Error>,
        format: Option<ResponseFormat>,
    ) -> Result<CallToolResult, McpError> {
        match result {
            Ok(()) => text_result(format::render(
                &serde_json::json!({"success": true, "message": message}),
                None,
                None,
                format.unwrap_or_default(),
                self.max_response_chars,
            )),
            Err(error) => Ok(format::error_response(context, &error)),
        }
    }
}
