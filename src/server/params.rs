//! Parameter types for MCP tool inputs.
//!
//! Recurring get/list/delete shapes share a struct; only the meaning of `gid`
//! varies and is documented per tool. Mutation tools carry their own structs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::format::ResponseFormat;

/// Arguments for fetching a single resource by GID.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetParams {
    /// The GID of the resource to fetch.
    pub gid: String,
    /// Override the default fields returned.
    /// Example: ["gid", "name", "permalink_url"]
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for deleting a resource by GID.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteParams {
    /// The GID of the resource to delete.
    pub gid: String,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing resources under a parent resource.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListParams {
    /// The GID of the parent resource; each tool documents which resource
    /// this is (workspace, project, task, ...).
    pub gid: String,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing the workspaces visible to the token.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListWorkspacesParams {
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for tools addressing the authenticated user.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MeParams {
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// The resource type to search with typeahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TypeaheadType {
    /// Search tasks by name
    Task,
    /// Search projects by name
    Project,
    /// Search users by name
    User,
    /// Search portfolios by name
    Portfolio,
    /// Search tags by name
    Tag,
    /// Search goals by name
    Goal,
    /// Search custom fields by name
    CustomField,
}

impl TypeaheadType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TypeaheadType::Task => "task",
            TypeaheadType::Project => "project",
            TypeaheadType::User => "user",
            TypeaheadType::Portfolio => "portfolio",
            TypeaheadType::Tag => "tag",
            TypeaheadType::Goal => "goal",
            TypeaheadType::CustomField => "custom_field",
        }
    }
}

/// Arguments for workspace typeahead search.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TypeaheadParams {
    /// The GID of the workspace to search in.
    pub workspace_gid: String,
    /// The type of resource to search for.
    pub resource_type: TypeaheadType,
    /// The search string.
    pub query: String,
    /// Number of results to return (1-100).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub count: Option<u32>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing the teams a user belongs to.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UserTeamsParams {
    /// The user GID, or "me" for the authenticated user (default).
    #[serde(default)]
    pub user_gid: Option<String>,
    /// The organization/workspace GID to scope the listing to.
    pub organization: String,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Projects
// ============================================================================

/// Arguments for creating a project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    /// Name of the project.
    pub name: String,
    /// Workspace GID to create the project in (required unless team is set).
    #[serde(default)]
    pub workspace: Option<String>,
    /// Team GID to share the project with.
    #[serde(default)]
    pub team: Option<String>,
    /// Plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// Color name (e.g., "light-green").
    #[serde(default)]
    pub color: Option<String>,
    /// Due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// Start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// Whether the project is public to its team.
    #[serde(default)]
    pub public: Option<bool>,
    /// Privacy setting: "public_to_workspace" or "private_to_team".
    #[serde(default)]
    pub privacy_setting: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a project. Provide only the fields to change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateProjectParams {
    /// The GID of the project to update.
    pub gid: String,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// New HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// New color.
    #[serde(default)]
    pub color: Option<String>,
    /// Archive or unarchive the project.
    #[serde(default)]
    pub archived: Option<bool>,
    /// New due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// New start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// New owner user GID.
    #[serde(default)]
    pub owner: Option<String>,
    /// Make public/private to the team.
    #[serde(default)]
    pub public: Option<bool>,
    /// New privacy setting.
    #[serde(default)]
    pub privacy_setting: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing projects with filters.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    /// Filter to projects in this workspace.
    #[serde(default)]
    pub workspace: Option<String>,
    /// Filter to projects shared with this team.
    #[serde(default)]
    pub team: Option<String>,
    /// Filter by archived state.
    #[serde(default)]
    pub archived: Option<bool>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for duplicating a project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DuplicateProjectParams {
    /// The GID of the project to duplicate.
    pub gid: String,
    /// Name for the new project.
    pub name: String,
    /// Team GID for the new project.
    #[serde(default)]
    pub team: Option<String>,
    /// Elements to include: members, notes, task_notes, task_assignee,
    /// task_subtasks, task_attachments, task_dates, task_dependencies,
    /// task_followers, task_tags, task_projects.
    #[serde(default)]
    pub include: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Status updates
// ============================================================================

/// Arguments for creating a status update on a project or portfolio.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateStatusUpdateParams {
    /// The GID of the parent project or portfolio.
    pub parent: String,
    /// Status type: "on_track", "at_risk", "off_track", "on_hold",
    /// "complete", "achieved", "partial", "missed" or "dropped".
    pub status_type: String,
    /// Title of the update.
    #[serde(default)]
    pub title: Option<String>,
    /// Plain text body of the update.
    #[serde(default)]
    pub text: Option<String>,
    /// HTML body of the update.
    #[serde(default)]
    pub html_text: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Sections
// ============================================================================

/// Arguments for creating a section in a project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateSectionParams {
    /// The GID of the project to add the section to.
    pub project: String,
    /// Name of the section.
    pub name: String,
    /// Insert before this section GID.
    #[serde(default)]
    pub insert_before: Option<String>,
    /// Insert after this section GID.
    #[serde(default)]
    pub insert_after: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for renaming a section.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateSectionParams {
    /// The GID of the section to update.
    pub gid: String,
    /// New name for the section.
    pub name: String,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for moving a task into a section.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddTaskToSectionParams {
    /// The GID of the target section.
    pub section_gid: String,
    /// The GID of the task to move.
    pub task: String,
    /// Place the task before this task GID within the section.
    #[serde(default)]
    pub insert_before: Option<String>,
    /// Place the task after this task GID within the section.
    #[serde(default)]
    pub insert_after: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Tasks
// ============================================================================

/// Arguments for creating a task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    /// Name of the task.
    pub name: String,
    /// Workspace GID (required unless projects or parent is given).
    #[serde(default)]
    pub workspace: Option<String>,
    /// Project GID(s) to add the task to.
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    /// Parent task GID, to create the task as a subtask.
    #[serde(default)]
    pub parent: Option<String>,
    /// Assignee user GID, or "me".
    #[serde(default)]
    pub assignee: Option<String>,
    /// Plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// Due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// Due date and time in ISO 8601 format (mutually exclusive with due_on).
    #[serde(default)]
    pub due_at: Option<String>,
    /// Start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// Create the task already completed.
    #[serde(default)]
    pub completed: Option<bool>,
    /// Tag GID(s) to apply.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Follower user GID(s).
    #[serde(default)]
    pub followers: Option<Vec<String>>,
    /// Custom field values as {field_gid: value}.
    #[serde(default)]
    pub custom_fields: Option<HashMap<String, serde_json::Value>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a task. Provide only the fields to change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    /// The GID of the task to update.
    pub gid: String,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New assignee user GID, or "me".
    #[serde(default)]
    pub assignee: Option<String>,
    /// Mark the task completed/incomplete.
    #[serde(default)]
    pub completed: Option<bool>,
    /// New due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// New due date and time in ISO 8601 format.
    #[serde(default)]
    pub due_at: Option<String>,
    /// New start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// New plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// New HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// Updated custom field values as {field_gid: value}.
    #[serde(default)]
    pub custom_fields: Option<HashMap<String, serde_json::Value>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for creating a subtask under a parent task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateSubtaskParams {
    /// The GID of the parent task.
    pub task_gid: String,
    /// Name of the subtask.
    pub name: String,
    /// Assignee user GID, or "me".
    #[serde(default)]
    pub assignee: Option<String>,
    /// Plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// Due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// Start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// Custom field values as {field_gid: value}.
    #[serde(default)]
    pub custom_fields: Option<HashMap<String, serde_json::Value>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for changing a task's parent.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetTaskParentParams {
    /// The GID of the task to re-parent.
    pub task_gid: String,
    /// The new parent task GID. Omit to remove the parent.
    #[serde(default)]
    pub parent: Option<String>,
    /// Place the task before this subtask GID.
    #[serde(default)]
    pub insert_before: Option<String>,
    /// Place the task after this subtask GID.
    #[serde(default)]
    pub insert_after: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for duplicating a task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DuplicateTaskParams {
    /// The GID of the task to duplicate.
    pub gid: String,
    /// Name for the new task.
    pub name: String,
    /// Elements to include: notes, assignee, subtasks, attachments, tags,
    /// followers, projects, dates, dependencies, parent.
    #[serde(default)]
    pub include: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding or removing task dependencies (blockers).
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskDependenciesParams {
    /// The GID of the task whose dependencies change.
    pub task_gid: String,
    /// GIDs of the tasks this task depends on.
    pub dependencies: Vec<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding or removing task dependents.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskDependentsParams {
    /// The GID of the task whose dependents change.
    pub task_gid: String,
    /// GIDs of the tasks that depend on this task.
    pub dependents: Vec<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding or removing task followers.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskFollowersParams {
    /// The GID of the task.
    pub task_gid: String,
    /// User GIDs to add or remove as followers.
    pub followers: Vec<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding a task to a project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddTaskToProjectParams {
    /// The GID of the task.
    pub task_gid: String,
    /// The GID of the project to add the task to.
    pub project: String,
    /// Section GID to place the task in.
    #[serde(default)]
    pub section: Option<String>,
    /// Place the task before this task GID.
    #[serde(default)]
    pub insert_before: Option<String>,
    /// Place the task after this task GID.
    #[serde(default)]
    pub insert_after: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for removing a task from a project.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveTaskFromProjectParams {
    /// The GID of the task.
    pub task_gid: String,
    /// The GID of the project to remove the task from.
    pub project: String,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding or removing a tag on a task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TaskTagParams {
    /// The GID of the task.
    pub task_gid: String,
    /// The GID of the tag.
    pub tag: String,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing tasks with filters.
///
/// Provide a project or section, or both assignee and workspace.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    /// Workspace GID (use together with assignee).
    #[serde(default)]
    pub workspace: Option<String>,
    /// Assignee user GID, or "me" (use together with workspace).
    #[serde(default)]
    pub assignee: Option<String>,
    /// Project GID to list tasks from.
    #[serde(default)]
    pub project: Option<String>,
    /// Section GID to list tasks from.
    #[serde(default)]
    pub section: Option<String>,
    /// Only tasks completed since this ISO 8601 time, or "now" for
    /// incomplete tasks.
    #[serde(default)]
    pub completed_since: Option<String>,
    /// Only tasks modified since this ISO 8601 time.
    #[serde(default)]
    pub modified_since: Option<String>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for task search in a workspace.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchTasksParams {
    /// Workspace GID to search in.
    pub workspace_gid: String,
    /// Search for tasks containing this text in name or notes.
    #[serde(default)]
    pub text: Option<String>,
    /// Filter by assignee user GID, "me" for the current user, or "null"
    /// for unassigned tasks.
    #[serde(default)]
    pub assignee: Option<String>,
    /// Filter by project GID(s).
    #[serde(default)]
    pub projects: Option<Vec<String>>,
    /// Filter by tag GID(s).
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Filter by section GID(s).
    #[serde(default)]
    pub sections: Option<Vec<String>>,
    /// Filter by portfolio GID(s).
    #[serde(default)]
    pub portfolios: Option<Vec<String>>,
    /// Filter by completion status.
    #[serde(default)]
    pub completed: Option<bool>,
    /// Filter by tasks due on this date (YYYY-MM-DD).
    #[serde(default)]
    pub due_on: Option<String>,
    /// Filter by tasks due on or before this date.
    #[serde(default)]
    pub due_on_before: Option<String>,
    /// Filter by tasks due on or after this date.
    #[serde(default)]
    pub due_on_after: Option<String>,
    /// Filter by tasks starting on this date.
    #[serde(default)]
    pub start_on: Option<String>,
    /// Filter by tasks starting on or before this date.
    #[serde(default)]
    pub start_on_before: Option<String>,
    /// Filter by tasks starting on or after this date.
    #[serde(default)]
    pub start_on_after: Option<String>,
    /// Filter by tasks modified on or after this datetime (ISO 8601).
    #[serde(default)]
    pub modified_at_after: Option<String>,
    /// Filter by tasks modified on or before this datetime (ISO 8601).
    #[serde(default)]
    pub modified_at_before: Option<String>,
    /// Sort by: due_date, created_at, completed_at, likes, modified_at.
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Sort ascending instead of descending.
    #[serde(default)]
    pub sort_ascending: Option<bool>,
    /// Number of results to return (1-100).
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Tags
// ============================================================================

/// Arguments for creating a tag.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTagParams {
    /// Workspace GID to create the tag in.
    pub workspace: String,
    /// Name of the tag.
    pub name: String,
    /// Color name (e.g., "light-blue").
    #[serde(default)]
    pub color: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a tag. Provide only the fields to change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTagParams {
    /// The GID of the tag to update.
    pub gid: String,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New color.
    #[serde(default)]
    pub color: Option<String>,
    /// New notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Stories
// ============================================================================

/// Arguments for commenting on a task.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCommentParams {
    /// The GID of the task to comment on.
    pub task_gid: String,
    /// Plain text of the comment.
    #[serde(default)]
    pub text: Option<String>,
    /// HTML text of the comment (mutually exclusive with text).
    #[serde(default)]
    pub html_text: Option<String>,
    /// Pin the comment on the task.
    #[serde(default)]
    pub is_pinned: Option<bool>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a story/comment.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateStoryParams {
    /// The GID of the story to update.
    pub gid: String,
    /// New plain text.
    #[serde(default)]
    pub text: Option<String>,
    /// New HTML text.
    #[serde(default)]
    pub html_text: Option<String>,
    /// Pin or unpin the story.
    #[serde(default)]
    pub is_pinned: Option<bool>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Portfolios
// ============================================================================

/// Arguments for creating a portfolio.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreatePortfolioParams {
    /// Workspace GID to create the portfolio in.
    pub workspace: String,
    /// Name of the portfolio.
    pub name: String,
    /// Color name.
    #[serde(default)]
    pub color: Option<String>,
    /// Whether the portfolio is public to its workspace.
    #[serde(default)]
    pub public: Option<bool>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a portfolio. Provide only the fields to change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdatePortfolioParams {
    /// The GID of the portfolio to update.
    pub gid: String,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New color.
    #[serde(default)]
    pub color: Option<String>,
    /// Make public/private to the workspace.
    #[serde(default)]
    pub public: Option<bool>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing portfolios in a workspace.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListPortfoliosParams {
    /// Workspace GID to list portfolios from.
    pub workspace: String,
    /// Owner user GID; defaults to "me" (the API only returns portfolios
    /// owned by a single user per call).
    #[serde(default)]
    pub owner: Option<String>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding or removing a portfolio item.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct PortfolioItemParams {
    /// The GID of the portfolio.
    pub portfolio_gid: String,
    /// The GID of the project to add or remove.
    pub item: String,
    /// Insert before this item GID (add only).
    #[serde(default)]
    pub insert_before: Option<String>,
    /// Insert after this item GID (add only).
    #[serde(default)]
    pub insert_after: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Goals
// ============================================================================

/// Arguments for creating a goal.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateGoalParams {
    /// Name of the goal.
    pub name: String,
    /// Workspace GID (required unless team is given).
    #[serde(default)]
    pub workspace: Option<String>,
    /// Team GID to own the goal.
    #[serde(default)]
    pub team: Option<String>,
    /// Owner user GID.
    #[serde(default)]
    pub owner: Option<String>,
    /// Due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// Start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// Plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// Time period GID the goal belongs to.
    #[serde(default)]
    pub time_period: Option<String>,
    /// Whether the goal is workspace-level rather than team-level.
    #[serde(default)]
    pub is_workspace_level: Option<bool>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a goal. Provide only the fields to change.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateGoalParams {
    /// The GID of the goal to update.
    pub gid: String,
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New owner user GID.
    #[serde(default)]
    pub owner: Option<String>,
    /// New due date in YYYY-MM-DD format.
    #[serde(default)]
    pub due_on: Option<String>,
    /// New start date in YYYY-MM-DD format.
    #[serde(default)]
    pub start_on: Option<String>,
    /// New plain text description.
    #[serde(default)]
    pub notes: Option<String>,
    /// New HTML description.
    #[serde(default)]
    pub html_notes: Option<String>,
    /// New status: "green", "yellow", "red", "achieved", "partial",
    /// "missed" or "dropped".
    #[serde(default)]
    pub status: Option<String>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing goals with filters.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListGoalsParams {
    /// Filter to goals in this workspace.
    #[serde(default)]
    pub workspace: Option<String>,
    /// Filter to goals owned by this team.
    #[serde(default)]
    pub team: Option<String>,
    /// Filter to goals in this portfolio.
    #[serde(default)]
    pub portfolio: Option<String>,
    /// Filter to goals supported by this project.
    #[serde(default)]
    pub project: Option<String>,
    /// Filter by workspace-level flag.
    #[serde(default)]
    pub is_workspace_level: Option<bool>,
    /// Filter to goals in these time period GIDs.
    #[serde(default)]
    pub time_periods: Option<Vec<String>>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for updating a goal's metric value.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetGoalMetricParams {
    /// The GID of the goal.
    pub gid: String,
    /// The new current value of the goal metric.
    pub current_number_value: f64,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing goal relationships of a supported goal.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListGoalRelationshipsParams {
    /// The GID of the supported (parent) goal.
    pub supported_goal: String,
    /// Filter by relationship subtype (e.g., "subgoal", "supporting_work").
    #[serde(default)]
    pub resource_subtype: Option<String>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for adding a supporting relationship to a goal.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddSupportingRelationshipParams {
    /// The GID of the goal being supported.
    pub goal_gid: String,
    /// The GID of the supporting resource (goal, project, or portfolio).
    pub supporting_resource: String,
    /// Weight of the contribution toward the goal (0.0 to 1.0).
    #[serde(default)]
    pub contribution_weight: Option<f64>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for removing a supporting relationship from a goal.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RemoveSupportingRelationshipParams {
    /// The GID of the goal being supported.
    pub goal_gid: String,
    /// The GID of the supporting resource to detach.
    pub supporting_resource: String,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

// ============================================================================
// Webhooks
// ============================================================================

/// A webhook event filter.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WebhookFilterParam {
    /// Resource type the filter applies to (e.g., "task").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Resource subtype the filter applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_subtype: Option<String>,
    /// Action to deliver: "added", "removed", "changed", "deleted",
    /// "undeleted".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Fields whose changes should be delivered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Arguments for registering a webhook.
///
/// Only registration is proxied; delivery handling happens entirely between
/// Asana and the target URL.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateWebhookParams {
    /// The GID of the resource to watch.
    pub resource: String,
    /// The HTTPS URL Asana should deliver events to.
    pub target: String,
    /// Event filters to limit deliveries.
    #[serde(default)]
    pub filters: Option<Vec<WebhookFilterParam>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}

/// Arguments for listing webhooks in a workspace.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListWebhooksParams {
    /// Workspace GID to list webhooks from.
    pub workspace: String,
    /// Filter to webhooks on this resource GID.
    #[serde(default)]
    pub resource: Option<String>,
    /// Results per page (1-100). Defaults to the configured page size.
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub limit: Option<u32>,
    /// Pagination offset token from a previous response.
    #[serde(default)]
    pub offset: Option<String>,
    /// Override the default fields returned.
    #[serde(default)]
    pub opt_fields: Option<Vec<String>>,
    /// Output format: "json" (default) or "markdown".
    #[serde(default)]
    pub response_format: Option<ResponseFormat>,
}
