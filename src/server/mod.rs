//! MCP tool registry for the Asana gateway.
//!
//! The server is request-scoped: a factory takes one tenant's credentials and
//! returns the fully wired tool set. Nothing here is shared across requests.
//! Each tool builds one Asana URL/body/query, delegates to the client
//! adapter, and pipes the outcome through the response formatter or the
//! uniform error envelope.

mod fields;
mod helpers;
pub mod params;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, ErrorData as McpError, Implementation, ProtocolVersion, ServerCapabilities,
    ServerInfo,
};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use serde_json::Value;

use crate::client::AsanaClient;
use crate::config::GatewayConfig;
use crate::types::{Page, Resource, ResourceCompact};

use fields::*;
use helpers::*;
pub use params::*;

/// Per-request MCP server bound to one tenant's credentials.
#[derive(Debug, Clone)]
pub struct AsanaServer {
    client: AsanaClient,
    default_page_size: u32,
    max_response_chars: usize,
    tool_router: ToolRouter<AsanaServer>,
}

impl AsanaServer {
    /// Build a server wired to the given tenant token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot form an authorization header.
    pub fn new(token: &str, config: &GatewayConfig) -> Result<Self, crate::Error> {
        let client = AsanaClient::new(token)?.with_base_url(&config.base_url);
        Ok(Self::with_parts(
            client,
            config.default_page_size,
            config.max_response_chars,
        ))
    }

    fn with_parts(client: AsanaClient, default_page_size: u32, max_response_chars: usize) -> Self {
        Self {
            client,
            default_page_size,
            max_response_chars,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server with a custom client (for testing).
    #[cfg(test)]
    pub(crate) fn with_client(client: AsanaClient) -> Self {
        Self::with_parts(client, 50, 100_000)
    }

    /// Names of every registered tool, for the capability document.
    pub fn tool_catalog() -> Vec<String> {
        Self::tool_router()
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[tool_router]
impl AsanaServer {
    // ========================================================================
    // Workspaces
    // ========================================================================

    /// List all workspaces accessible to the authenticated user.
    #[tool(description = "List all Asana workspaces accessible to the token")]
    async fn asana_list_workspaces(
        &self,
        params: Parameters<ListWorkspacesParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, WORKSPACE_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/workspaces",
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list workspaces",
            "workspace",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a workspace by GID")]
    async fn asana_get_workspace(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, WORKSPACE_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/workspaces/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get workspace",
            "workspace",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Search a workspace by name prefix (typeahead) for tasks, projects, \
            users, portfolios, tags, goals, or custom fields")]
    async fn asana_typeahead_search(
        &self,
        params: Parameters<TypeaheadParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let count = p.count.unwrap_or(20).clamp(1, 100).to_string();
        let result: Result<Vec<ResourceCompact>, _> = self
            .client
            .get(
                &format!("/workspaces/{}/typeahead", p.workspace_gid),
                &[
                    ("resource_type", p.resource_type.as_str()),
                    ("query", p.query.as_str()),
                    ("count", count.as_str()),
                    ("opt_fields", TYPEAHEAD_FIELDS),
                ],
            )
            .await;
        self.respond_many(
            "Failed to search workspace",
            p.resource_type.as_str(),
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Users & teams
    // ========================================================================

    #[tool(description = "Get the authenticated user")]
    async fn asana_get_me(&self, params: Parameters<MeParams>) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, USER_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get("/users/me", &[("opt_fields", fields.as_str())])
            .await;
        self.respond_one(
            "Failed to get current user",
            "user",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a user by GID")]
    async fn asana_get_user(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, USER_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/users/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get user", "user", result, p.response_format)
    }

    #[tool(description = "List users in a workspace (gid = workspace GID)")]
    async fn asana_list_workspace_users(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, USER_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/workspaces/{}/users", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page("Failed to list users", "user", result, p.response_format)
    }

    #[tool(description = "Get a team by GID")]
    async fn asana_get_team(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TEAM_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/teams/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get team", "team", result, p.response_format)
    }

    #[tool(description = "List teams in a workspace/organization (gid = workspace GID)")]
    async fn asana_list_workspace_teams(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TEAM_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/workspaces/{}/teams", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page("Failed to list teams", "team", result, p.response_format)
    }

    #[tool(description = "List users in a team (gid = team GID)")]
    async fn asana_list_team_users(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, USER_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/teams/{}/users", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list team users",
            "user",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List the teams a user belongs to within an organization")]
    async fn asana_list_user_teams(
        &self,
        params: Parameters<UserTeamsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let user = p.user_gid.as_deref().unwrap_or("me");
        let fields = resolve_fields(&p.opt_fields, TEAM_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/users/{}/teams", user),
                &[
                    ("organization", p.organization.as_str()),
                    ("opt_fields", fields.as_str()),
                ],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list user teams",
            "team",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Projects
    // ========================================================================

    #[tool(description = "Create a project in a workspace or team")]
    async fn asana_create_project(
        &self,
        params: Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.workspace.is_none() && p.team.is_none() {
            return Err(validation_error(
                "workspace or team is required to create a project",
            ));
        }

        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(workspace) = p.workspace {
            data.insert("workspace".to_string(), serde_json::json!(workspace));
        }
        if let Some(team) = p.team {
            data.insert("team".to_string(), serde_json::json!(team));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(public) = p.public {
            data.insert("public".to_string(), serde_json::json!(public));
        }
        if let Some(privacy) = p.privacy_setting {
            data.insert("privacy_setting".to_string(), serde_json::json!(privacy));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/projects", &body).await;
        self.respond_mutated(
            "Failed to create project",
            "Project created",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a project by GID")]
    async fn asana_get_project(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PROJECT_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/projects/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get project",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Update a project. Provide gid and only the fields to change")]
    async fn asana_update_project(
        &self,
        params: Parameters<UpdateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(name) = p.name {
            data.insert("name".to_string(), serde_json::json!(name));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(archived) = p.archived {
            data.insert("archived".to_string(), serde_json::json!(archived));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(owner) = p.owner {
            data.insert("owner".to_string(), serde_json::json!(owner));
        }
        if let Some(public) = p.public {
            data.insert("public".to_string(), serde_json::json!(public));
        }
        if let Some(privacy) = p.privacy_setting {
            data.insert("privacy_setting".to_string(), serde_json::json!(privacy));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .put(&format!("/projects/{}", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to update project",
            "Project updated",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a project by GID")]
    async fn asana_delete_project(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/projects/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete project",
            "Project deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List projects, optionally filtered by workspace, team, and \
            archived state")]
    async fn asana_list_projects(
        &self,
        params: Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PROJECT_FIELDS);
        let archived = p.archived.map(|a| a.to_string());

        let mut query: Vec<(&str, &str)> = vec![("opt_fields", fields.as_str())];
        if let Some(workspace) = p.workspace.as_deref() {
            query.push(("workspace", workspace));
        }
        if let Some(team) = p.team.as_deref() {
            query.push(("team", team));
        }
        if let Some(archived) = archived.as_deref() {
            query.push(("archived", archived));
        }

        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/projects",
                &query,
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list projects",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List all projects in a workspace (gid = workspace GID)")]
    async fn asana_list_workspace_projects(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PROJECT_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/workspaces/{}/projects", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list workspace projects",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Duplicate a project. Returns the async job performing the copy")]
    async fn asana_duplicate_project(
        &self,
        params: Parameters<DuplicateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(team) = p.team {
            data.insert("team".to_string(), serde_json::json!(team));
        }
        if let Some(include) = p.include {
            data.insert("include".to_string(), serde_json::json!(include));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/projects/{}/duplicate", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to duplicate project",
            "Project duplication started",
            "job",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get task counts for a project (gid = project GID)")]
    async fn asana_get_project_task_counts(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_COUNT_FIELDS);
        let result: Result<Value, _> = self
            .client
            .get(
                &format!("/projects/{}/task_counts", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get task counts",
            "task_counts",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Status updates
    // ========================================================================

    #[tool(description = "Create a status update on a project or portfolio")]
    async fn asana_create_status_update(
        &self,
        params: Parameters<CreateStatusUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("parent".to_string(), serde_json::json!(p.parent));
        data.insert("status_type".to_string(), serde_json::json!(p.status_type));
        if let Some(title) = p.title {
            data.insert("title".to_string(), serde_json::json!(title));
        }
        if let Some(text) = p.text {
            data.insert("text".to_string(), serde_json::json!(text));
        }
        if let Some(html_text) = p.html_text {
            data.insert("html_text".to_string(), serde_json::json!(html_text));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/status_updates", &body).await;
        self.respond_mutated(
            "Failed to create status update",
            "Status update created",
            "status_update",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a status update by GID")]
    async fn asana_get_status_update(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, STATUS_UPDATE_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/status_updates/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get status update",
            "status_update",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List status updates for a project or portfolio (gid = parent GID)")]
    async fn asana_list_status_updates(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, STATUS_UPDATE_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/status_updates",
                &[("parent", p.gid.as_str()), ("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list status updates",
            "status_update",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a status update by GID")]
    async fn asana_delete_status_update(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self
            .client
            .delete(&format!("/status_updates/{}", p.gid))
            .await;
        self.respond_empty(
            "Failed to delete status update",
            "Status update deleted",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Sections
    // ========================================================================

    #[tool(description = "Create a section in a project")]
    async fn asana_create_section(
        &self,
        params: Parameters<CreateSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(before) = p.insert_before {
            data.insert("insert_before".to_string(), serde_json::json!(before));
        }
        if let Some(after) = p.insert_after {
            data.insert("insert_after".to_string(), serde_json::json!(after));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/projects/{}/sections", p.project), &body)
            .await;
        self.respond_mutated(
            "Failed to create section",
            "Section created",
            "section",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a section by GID")]
    async fn asana_get_section(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, SECTION_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/sections/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get section",
            "section",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Rename a section")]
    async fn asana_update_section(
        &self,
        params: Parameters<UpdateSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({"data": {"name": p.name}});
        let result: Result<Resource, _> = self
            .client
            .put(&format!("/sections/{}", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to update section",
            "Section updated",
            "section",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a section by GID (must be empty)")]
    async fn asana_delete_section(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/sections/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete section",
            "Section deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List sections in a project (gid = project GID)")]
    async fn asana_list_project_sections(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, SECTION_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/projects/{}/sections", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list sections",
            "section",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Move a task into a section")]
    async fn asana_add_task_to_section(
        &self,
        params: Parameters<AddTaskToSectionParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("task".to_string(), serde_json::json!(p.task));
        if let Some(before) = p.insert_before {
            data.insert("insert_before".to_string(), serde_json::json!(before));
        }
        if let Some(after) = p.insert_after {
            data.insert("insert_after".to_string(), serde_json::json!(after));
        }

        let body = serde_json::json!({"data": data});
        let result = self
            .client
            .post_empty(&format!("/sections/{}/addTask", p.section_gid), &body)
            .await;
        self.respond_empty(
            "Failed to move task to section",
            "Task moved to section",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    #[tool(description = "Create a task. Provide workspace, projects, or parent to anchor it")]
    async fn asana_create_task(
        &self,
        params: Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.workspace.is_none() && p.projects.is_none() && p.parent.is_none() {
            return Err(validation_error(
                "workspace, projects, or parent is required to create a task",
            ));
        }

        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(workspace) = p.workspace {
            data.insert("workspace".to_string(), serde_json::json!(workspace));
        }
        if let Some(projects) = p.projects {
            data.insert("projects".to_string(), serde_json::json!(projects));
        }
        if let Some(parent) = p.parent {
            data.insert("parent".to_string(), serde_json::json!(parent));
        }
        if let Some(assignee) = p.assignee {
            data.insert("assignee".to_string(), serde_json::json!(assignee));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(due_at) = p.due_at {
            data.insert("due_at".to_string(), serde_json::json!(due_at));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(completed) = p.completed {
            data.insert("completed".to_string(), serde_json::json!(completed));
        }
        if let Some(tags) = p.tags {
            data.insert("tags".to_string(), serde_json::json!(tags));
        }
        if let Some(followers) = p.followers {
            data.insert("followers".to_string(), serde_json::json!(followers));
        }
        if let Some(custom_fields) = p.custom_fields {
            data.insert("custom_fields".to_string(), serde_json::json!(custom_fields));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/tasks", &body).await;
        self.respond_mutated(
            "Failed to create task",
            "Task created",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a task by GID, including assignee, dates, memberships, and tags")]
    async fn asana_get_task(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/tasks/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get task", "task", result, p.response_format)
    }

    #[tool(description = "Update a task. Provide gid and only the fields to change")]
    async fn asana_update_task(
        &self,
        params: Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(name) = p.name {
            data.insert("name".to_string(), serde_json::json!(name));
        }
        if let Some(assignee) = p.assignee {
            data.insert("assignee".to_string(), serde_json::json!(assignee));
        }
        if let Some(completed) = p.completed {
            data.insert("completed".to_string(), serde_json::json!(completed));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(due_at) = p.due_at {
            data.insert("due_at".to_string(), serde_json::json!(due_at));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(custom_fields) = p.custom_fields {
            data.insert("custom_fields".to_string(), serde_json::json!(custom_fields));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> =
            self.client.put(&format!("/tasks/{}", p.gid), &body).await;
        self.respond_mutated(
            "Failed to update task",
            "Task updated",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a task by GID")]
    async fn asana_delete_task(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/tasks/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete task",
            "Task deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List tasks. Provide a project or section, or both workspace \
            and assignee")]
    async fn asana_list_tasks(
        &self,
        params: Parameters<ListTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let scoped_by_parent = p.project.is_some() || p.section.is_some();
        let scoped_by_assignee = p.workspace.is_some() && p.assignee.is_some();
        if !scoped_by_parent && !scoped_by_assignee {
            return Err(validation_error(
                "provide a project or section, or both workspace and assignee",
            ));
        }

        let fields = resolve_fields(&p.opt_fields, TASK_LIST_FIELDS);
        let mut query: Vec<(&str, &str)> = vec![("opt_fields", fields.as_str())];
        if let Some(workspace) = p.workspace.as_deref() {
            query.push(("workspace", workspace));
        }
        if let Some(assignee) = p.assignee.as_deref() {
            query.push(("assignee", assignee));
        }
        if let Some(project) = p.project.as_deref() {
            query.push(("project", project));
        }
        if let Some(section) = p.section.as_deref() {
            query.push(("section", section));
        }
        if let Some(completed_since) = p.completed_since.as_deref() {
            query.push(("completed_since", completed_since));
        }
        if let Some(modified_since) = p.modified_since.as_deref() {
            query.push(("modified_since", modified_since));
        }

        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/tasks",
                &query,
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page("Failed to list tasks", "task", result, p.response_format)
    }

    #[tool(description = "List tasks in a project (gid = project GID)")]
    async fn asana_list_project_tasks(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_LIST_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/projects/{}/tasks", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list project tasks",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List tasks in a section (gid = section GID)")]
    async fn asana_list_section_tasks(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_LIST_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/sections/{}/tasks", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list section tasks",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Create a subtask under a parent task")]
    async fn asana_create_subtask(
        &self,
        params: Parameters<CreateSubtaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(assignee) = p.assignee {
            data.insert("assignee".to_string(), serde_json::json!(assignee));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(custom_fields) = p.custom_fields {
            data.insert("custom_fields".to_string(), serde_json::json!(custom_fields));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/tasks/{}/subtasks", p.task_gid), &body)
            .await;
        self.respond_mutated(
            "Failed to create subtask",
            "Subtask created",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List subtasks of a task (gid = parent task GID)")]
    async fn asana_list_subtasks(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_LIST_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/tasks/{}/subtasks", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list subtasks",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Set or clear a task's parent. Omit parent to detach the subtask")]
    async fn asana_set_task_parent(
        &self,
        params: Parameters<SetTaskParentParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert(
            "parent".to_string(),
            match p.parent {
                Some(parent) => serde_json::json!(parent),
                None => Value::Null,
            },
        );
        if let Some(before) = p.insert_before {
            data.insert("insert_before".to_string(), serde_json::json!(before));
        }
        if let Some(after) = p.insert_after {
            data.insert("insert_after".to_string(), serde_json::json!(after));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/tasks/{}/setParent", p.task_gid), &body)
            .await;
        self.respond_mutated(
            "Failed to set task parent",
            "Task parent updated",
            "task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Duplicate a task. Returns the async job performing the copy")]
    async fn asana_duplicate_task(
        &self,
        params: Parameters<DuplicateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(include) = p.include {
            data.insert("include".to_string(), serde_json::json!(include));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/tasks/{}/duplicate", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to duplicate task",
            "Task duplication started",
            "job",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add dependencies (blocking tasks) to a task")]
    async fn asana_add_task_dependencies(
        &self,
        params: Parameters<TaskDependenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.dependencies.is_empty() {
            return Err(validation_error("dependencies cannot be empty"));
        }
        let body = serde_json::json!({"data": {"dependencies": p.dependencies}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/addDependencies", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add dependencies",
            "Dependencies added",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove dependencies from a task")]
    async fn asana_remove_task_dependencies(
        &self,
        params: Parameters<TaskDependenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.dependencies.is_empty() {
            return Err(validation_error("dependencies cannot be empty"));
        }
        let body = serde_json::json!({"data": {"dependencies": p.dependencies}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/removeDependencies", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to remove dependencies",
            "Dependencies removed",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add dependents (blocked tasks) to a task")]
    async fn asana_add_task_dependents(
        &self,
        params: Parameters<TaskDependentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.dependents.is_empty() {
            return Err(validation_error("dependents cannot be empty"));
        }
        let body = serde_json::json!({"data": {"dependents": p.dependents}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/addDependents", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add dependents",
            "Dependents added",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove dependents from a task")]
    async fn asana_remove_task_dependents(
        &self,
        params: Parameters<TaskDependentsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.dependents.is_empty() {
            return Err(validation_error("dependents cannot be empty"));
        }
        let body = serde_json::json!({"data": {"dependents": p.dependents}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/removeDependents", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to remove dependents",
            "Dependents removed",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add follower users to a task")]
    async fn asana_add_task_followers(
        &self,
        params: Parameters<TaskFollowersParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.followers.is_empty() {
            return Err(validation_error("followers cannot be empty"));
        }
        let body = serde_json::json!({"data": {"followers": p.followers}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/addFollowers", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add followers",
            "Followers added",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove follower users from a task")]
    async fn asana_remove_task_followers(
        &self,
        params: Parameters<TaskFollowersParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.followers.is_empty() {
            return Err(validation_error("followers cannot be empty"));
        }
        let body = serde_json::json!({"data": {"followers": p.followers}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/removeFollowers", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to remove followers",
            "Followers removed",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add a task to a project, optionally into a section")]
    async fn asana_add_task_to_project(
        &self,
        params: Parameters<AddTaskToProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("project".to_string(), serde_json::json!(p.project));
        if let Some(section) = p.section {
            data.insert("section".to_string(), serde_json::json!(section));
        }
        if let Some(before) = p.insert_before {
            data.insert("insert_before".to_string(), serde_json::json!(before));
        }
        if let Some(after) = p.insert_after {
            data.insert("insert_after".to_string(), serde_json::json!(after));
        }

        let body = serde_json::json!({"data": data});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/addProject", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add task to project",
            "Task added to project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove a task from a project")]
    async fn asana_remove_task_from_project(
        &self,
        params: Parameters<RemoveTaskFromProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({"data": {"project": p.project}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/removeProject", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to remove task from project",
            "Task removed from project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add a tag to a task")]
    async fn asana_add_tag_to_task(
        &self,
        params: Parameters<TaskTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({"data": {"tag": p.tag}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/addTag", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add tag to task",
            "Tag added to task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove a tag from a task")]
    async fn asana_remove_tag_from_task(
        &self,
        params: Parameters<TaskTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({"data": {"tag": p.tag}});
        let result = self
            .client
            .post_empty(&format!("/tasks/{}/removeTag", p.task_gid), &body)
            .await;
        self.respond_empty(
            "Failed to remove tag from task",
            "Tag removed from task",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Search for tasks in a workspace with filters on text, assignee, \
            projects, tags, sections, portfolios, completion, and dates")]
    async fn asana_search_tasks(
        &self,
        params: Parameters<SearchTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, SEARCH_FIELDS);
        let limit = self.page_limit(p.limit).to_string();

        let mut query: Vec<(String, String)> = vec![
            ("opt_fields".to_string(), fields),
            ("limit".to_string(), limit),
        ];
        if let Some(text) = p.text {
            query.push(("text".to_string(), text));
        }
        if let Some(assignee) = p.assignee {
            query.push(("assignee.any".to_string(), assignee));
        }
        if let Some(projects) = p.projects {
            query.push(("projects.any".to_string(), projects.join(",")));
        }
        if let Some(tags) = p.tags {
            query.push(("tags.any".to_string(), tags.join(",")));
        }
        if let Some(sections) = p.sections {
            query.push(("sections.any".to_string(), sections.join(",")));
        }
        if let Some(portfolios) = p.portfolios {
            query.push(("portfolios.any".to_string(), portfolios.join(",")));
        }
        if let Some(completed) = p.completed {
            query.push(("completed".to_string(), completed.to_string()));
        }
        if let Some(due_on) = p.due_on {
            query.push(("due_on".to_string(), due_on));
        }
        if let Some(due_on_before) = p.due_on_before {
            query.push(("due_on.before".to_string(), due_on_before));
        }
        if let Some(due_on_after) = p.due_on_after {
            query.push(("due_on.after".to_string(), due_on_after));
        }
        if let Some(start_on) = p.start_on {
            query.push(("start_on".to_string(), start_on));
        }
        if let Some(start_on_before) = p.start_on_before {
            query.push(("start_on.before".to_string(), start_on_before));
        }
        if let Some(start_on_after) = p.start_on_after {
            query.push(("start_on.after".to_string(), start_on_after));
        }
        if let Some(modified_at_after) = p.modified_at_after {
            query.push(("modified_at.after".to_string(), modified_at_after));
        }
        if let Some(modified_at_before) = p.modified_at_before {
            query.push(("modified_at.before".to_string(), modified_at_before));
        }
        if let Some(sort_by) = p.sort_by {
            query.push(("sort_by".to_string(), sort_by));
        }
        if let Some(sort_ascending) = p.sort_ascending {
            query.push(("sort_ascending".to_string(), sort_ascending.to_string()));
        }

        let query_refs: Vec<(&str, &str)> = query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let result: Result<Vec<Resource>, _> = self
            .client
            .get(
                &format!("/workspaces/{}/tasks/search", p.workspace_gid),
                &query_refs,
            )
            .await;
        self.respond_many("Failed to search tasks", "task", result, p.response_format)
    }

    // ========================================================================
    // Tags
    // ========================================================================

    #[tool(description = "Create a tag in a workspace")]
    async fn asana_create_tag(
        &self,
        params: Parameters<CreateTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        data.insert("workspace".to_string(), serde_json::json!(p.workspace));
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/tags", &body).await;
        self.respond_mutated(
            "Failed to create tag",
            "Tag created",
            "tag",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a tag by GID")]
    async fn asana_get_tag(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TAG_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/tags/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get tag", "tag", result, p.response_format)
    }

    #[tool(description = "Update a tag. Provide gid and only the fields to change")]
    async fn asana_update_tag(
        &self,
        params: Parameters<UpdateTagParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(name) = p.name {
            data.insert("name".to_string(), serde_json::json!(name));
        }
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> =
            self.client.put(&format!("/tags/{}", p.gid), &body).await;
        self.respond_mutated(
            "Failed to update tag",
            "Tag updated",
            "tag",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a tag by GID")]
    async fn asana_delete_tag(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/tags/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete tag",
            "Tag deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List tags in a workspace (gid = workspace GID)")]
    async fn asana_list_workspace_tags(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TAG_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/workspaces/{}/tags", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page("Failed to list tags", "tag", result, p.response_format)
    }

    #[tool(description = "List tasks carrying a tag (gid = tag GID)")]
    async fn asana_list_tag_tasks(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, TASK_LIST_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/tags/{}/tasks", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list tag tasks",
            "task",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Stories (comments)
    // ========================================================================

    #[tool(description = "Add a comment to a task. Provide text or html_text")]
    async fn asana_create_task_comment(
        &self,
        params: Parameters<CreateCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.text.is_none() && p.html_text.is_none() {
            return Err(validation_error("text or html_text is required"));
        }

        let mut data = serde_json::Map::new();
        if let Some(text) = p.text {
            data.insert("text".to_string(), serde_json::json!(text));
        }
        if let Some(html_text) = p.html_text {
            data.insert("html_text".to_string(), serde_json::json!(html_text));
        }
        if let Some(is_pinned) = p.is_pinned {
            data.insert("is_pinned".to_string(), serde_json::json!(is_pinned));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/tasks/{}/stories", p.task_gid), &body)
            .await;
        self.respond_mutated(
            "Failed to create comment",
            "Comment added",
            "story",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a story (comment or activity entry) by GID")]
    async fn asana_get_story(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, STORY_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/stories/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get story", "story", result, p.response_format)
    }

    #[tool(description = "Update a story/comment. Provide gid and only the fields to change")]
    async fn asana_update_story(
        &self,
        params: Parameters<UpdateStoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(text) = p.text {
            data.insert("text".to_string(), serde_json::json!(text));
        }
        if let Some(html_text) = p.html_text {
            data.insert("html_text".to_string(), serde_json::json!(html_text));
        }
        if let Some(is_pinned) = p.is_pinned {
            data.insert("is_pinned".to_string(), serde_json::json!(is_pinned));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .put(&format!("/stories/{}", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to update story",
            "Story updated",
            "story",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a story/comment by GID")]
    async fn asana_delete_story(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/stories/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete story",
            "Story deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List stories on a task, comments included (gid = task GID)")]
    async fn asana_list_task_stories(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, STORY_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/tasks/{}/stories", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list task stories",
            "story",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Attachments
    // ========================================================================

    #[tool(description = "Get an attachment by GID")]
    async fn asana_get_attachment(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, ATTACHMENT_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/attachments/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get attachment",
            "attachment",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete an attachment by GID")]
    async fn asana_delete_attachment(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/attachments/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete attachment",
            "Attachment deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List attachments on a task (gid = task GID)")]
    async fn asana_list_task_attachments(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, ATTACHMENT_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/attachments",
                &[("parent", p.gid.as_str()), ("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list attachments",
            "attachment",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Custom fields
    // ========================================================================

    #[tool(description = "Get a custom field definition by GID")]
    async fn asana_get_custom_field(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, CUSTOM_FIELD_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/custom_fields/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get custom field",
            "custom_field",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List custom field definitions in a workspace (gid = workspace GID)")]
    async fn asana_list_workspace_custom_fields(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, CUSTOM_FIELD_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/workspaces/{}/custom_fields", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list custom fields",
            "custom_field",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List custom field settings on a project (gid = project GID)")]
    async fn asana_list_project_custom_field_settings(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, CUSTOM_FIELD_SETTINGS_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/projects/{}/custom_field_settings", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list custom field settings",
            "custom_field_setting",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Portfolios
    // ========================================================================

    #[tool(description = "Create a portfolio in a workspace")]
    async fn asana_create_portfolio(
        &self,
        params: Parameters<CreatePortfolioParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        data.insert("workspace".to_string(), serde_json::json!(p.workspace));
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(public) = p.public {
            data.insert("public".to_string(), serde_json::json!(public));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/portfolios", &body).await;
        self.respond_mutated(
            "Failed to create portfolio",
            "Portfolio created",
            "portfolio",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a portfolio by GID")]
    async fn asana_get_portfolio(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PORTFOLIO_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/portfolios/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get portfolio",
            "portfolio",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Update a portfolio. Provide gid and only the fields to change")]
    async fn asana_update_portfolio(
        &self,
        params: Parameters<UpdatePortfolioParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(name) = p.name {
            data.insert("name".to_string(), serde_json::json!(name));
        }
        if let Some(color) = p.color {
            data.insert("color".to_string(), serde_json::json!(color));
        }
        if let Some(public) = p.public {
            data.insert("public".to_string(), serde_json::json!(public));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .put(&format!("/portfolios/{}", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to update portfolio",
            "Portfolio updated",
            "portfolio",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a portfolio by GID")]
    async fn asana_delete_portfolio(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/portfolios/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete portfolio",
            "Portfolio deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List portfolios in a workspace owned by a user (default: me)")]
    async fn asana_list_portfolios(
        &self,
        params: Parameters<ListPortfoliosParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PORTFOLIO_FIELDS);
        let owner = p.owner.as_deref().unwrap_or("me");
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/portfolios",
                &[
                    ("workspace", p.workspace.as_str()),
                    ("owner", owner),
                    ("opt_fields", fields.as_str()),
                ],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list portfolios",
            "portfolio",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List items (projects) in a portfolio (gid = portfolio GID)")]
    async fn asana_list_portfolio_items(
        &self,
        params: Parameters<ListParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, PROJECT_FIELDS);
        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                &format!("/portfolios/{}/items", p.gid),
                &[("opt_fields", fields.as_str())],
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list portfolio items",
            "project",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Add a project to a portfolio")]
    async fn asana_add_portfolio_item(
        &self,
        params: Parameters<PortfolioItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("item".to_string(), serde_json::json!(p.item));
        if let Some(before) = p.insert_before {
            data.insert("insert_before".to_string(), serde_json::json!(before));
        }
        if let Some(after) = p.insert_after {
            data.insert("insert_after".to_string(), serde_json::json!(after));
        }

        let body = serde_json::json!({"data": data});
        let result = self
            .client
            .post_empty(&format!("/portfolios/{}/addItem", p.portfolio_gid), &body)
            .await;
        self.respond_empty(
            "Failed to add item to portfolio",
            "Item added to portfolio",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Remove a project from a portfolio")]
    async fn asana_remove_portfolio_item(
        &self,
        params: Parameters<PortfolioItemParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({"data": {"item": p.item}});
        let result = self
            .client
            .post_empty(
                &format!("/portfolios/{}/removeItem", p.portfolio_gid),
                &body,
            )
            .await;
        self.respond_empty(
            "Failed to remove item from portfolio",
            "Item removed from portfolio",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Goals
    // ========================================================================

    #[tool(description = "Create a goal in a workspace or team")]
    async fn asana_create_goal(
        &self,
        params: Parameters<CreateGoalParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.workspace.is_none() && p.team.is_none() {
            return Err(validation_error(
                "workspace or team is required to create a goal",
            ));
        }

        let mut data = serde_json::Map::new();
        data.insert("name".to_string(), serde_json::json!(p.name));
        if let Some(workspace) = p.workspace {
            data.insert("workspace".to_string(), serde_json::json!(workspace));
        }
        if let Some(team) = p.team {
            data.insert("team".to_string(), serde_json::json!(team));
        }
        if let Some(owner) = p.owner {
            data.insert("owner".to_string(), serde_json::json!(owner));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(time_period) = p.time_period {
            data.insert("time_period".to_string(), serde_json::json!(time_period));
        }
        if let Some(is_workspace_level) = p.is_workspace_level {
            data.insert(
                "is_workspace_level".to_string(),
                serde_json::json!(is_workspace_level),
            );
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/goals", &body).await;
        self.respond_mutated(
            "Failed to create goal",
            "Goal created",
            "goal",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a goal by GID, including its metric")]
    async fn asana_get_goal(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, GOAL_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/goals/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one("Failed to get goal", "goal", result, p.response_format)
    }

    #[tool(description = "Update a goal. Provide gid and only the fields to change")]
    async fn asana_update_goal(
        &self,
        params: Parameters<UpdateGoalParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        if let Some(name) = p.name {
            data.insert("name".to_string(), serde_json::json!(name));
        }
        if let Some(owner) = p.owner {
            data.insert("owner".to_string(), serde_json::json!(owner));
        }
        if let Some(due_on) = p.due_on {
            data.insert("due_on".to_string(), serde_json::json!(due_on));
        }
        if let Some(start_on) = p.start_on {
            data.insert("start_on".to_string(), serde_json::json!(start_on));
        }
        if let Some(notes) = p.notes {
            data.insert("notes".to_string(), serde_json::json!(notes));
        }
        if let Some(html_notes) = p.html_notes {
            data.insert("html_notes".to_string(), serde_json::json!(html_notes));
        }
        if let Some(status) = p.status {
            data.insert("status".to_string(), serde_json::json!(status));
        }
        if data.is_empty() {
            return Err(validation_error("at least one field to update is required"));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> =
            self.client.put(&format!("/goals/{}", p.gid), &body).await;
        self.respond_mutated(
            "Failed to update goal",
            "Goal updated",
            "goal",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete a goal by GID")]
    async fn asana_delete_goal(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/goals/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete goal",
            "Goal deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List goals filtered by workspace, team, portfolio, or project")]
    async fn asana_list_goals(
        &self,
        params: Parameters<ListGoalsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        if p.workspace.is_none() && p.team.is_none() && p.portfolio.is_none() && p.project.is_none()
        {
            return Err(validation_error(
                "provide at least one of workspace, team, portfolio, or project",
            ));
        }

        let fields = resolve_fields(&p.opt_fields, GOAL_FIELDS);
        let is_workspace_level = p.is_workspace_level.map(|b| b.to_string());
        let time_periods = p.time_periods.map(|periods| periods.join(","));

        let mut query: Vec<(&str, &str)> = vec![("opt_fields", fields.as_str())];
        if let Some(workspace) = p.workspace.as_deref() {
            query.push(("workspace", workspace));
        }
        if let Some(team) = p.team.as_deref() {
            query.push(("team", team));
        }
        if let Some(portfolio) = p.portfolio.as_deref() {
            query.push(("portfolio", portfolio));
        }
        if let Some(project) = p.project.as_deref() {
            query.push(("project", project));
        }
        if let Some(is_workspace_level) = is_workspace_level.as_deref() {
            query.push(("is_workspace_level", is_workspace_level));
        }
        if let Some(time_periods) = time_periods.as_deref() {
            query.push(("time_periods", time_periods));
        }

        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/goals",
                &query,
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page("Failed to list goals", "goal", result, p.response_format)
    }

    #[tool(description = "Set the current value of a goal's metric")]
    async fn asana_set_goal_metric(
        &self,
        params: Parameters<SetGoalMetricParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({
            "data": {"current_number_value": p.current_number_value}
        });
        let result: Result<Resource, _> = self
            .client
            .post(&format!("/goals/{}/setMetricCurrentValue", p.gid), &body)
            .await;
        self.respond_mutated(
            "Failed to set goal metric",
            "Goal metric updated",
            "goal",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a goal relationship by GID")]
    async fn asana_get_goal_relationship(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, GOAL_RELATIONSHIP_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/goal_relationships/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get goal relationship",
            "goal_relationship",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List relationships supporting a goal")]
    async fn asana_list_goal_relationships(
        &self,
        params: Parameters<ListGoalRelationshipsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, GOAL_RELATIONSHIP_FIELDS);

        let mut query: Vec<(&str, &str)> = vec![
            ("supported_goal", p.supported_goal.as_str()),
            ("opt_fields", fields.as_str()),
        ];
        if let Some(subtype) = p.resource_subtype.as_deref() {
            query.push(("resource_subtype", subtype));
        }

        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/goal_relationships",
                &query,
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list goal relationships",
            "goal_relationship",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Attach a supporting resource (goal, project, or portfolio) to a goal")]
    async fn asana_add_supporting_relationship(
        &self,
        params: Parameters<AddSupportingRelationshipParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert(
            "supporting_resource".to_string(),
            serde_json::json!(p.supporting_resource),
        );
        if let Some(weight) = p.contribution_weight {
            data.insert("contribution_weight".to_string(), serde_json::json!(weight));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self
            .client
            .post(
                &format!("/goals/{}/addSupportingRelationship", p.goal_gid),
                &body,
            )
            .await;
        self.respond_mutated(
            "Failed to add supporting relationship",
            "Supporting relationship added",
            "goal_relationship",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Detach a supporting resource from a goal")]
    async fn asana_remove_supporting_relationship(
        &self,
        params: Parameters<RemoveSupportingRelationshipParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let body = serde_json::json!({
            "data": {"supporting_resource": p.supporting_resource}
        });
        let result = self
            .client
            .post_empty(
                &format!("/goals/{}/removeSupportingRelationship", p.goal_gid),
                &body,
            )
            .await;
        self.respond_empty(
            "Failed to remove supporting relationship",
            "Supporting relationship removed",
            result,
            p.response_format,
        )
    }

    // ========================================================================
    // Webhooks (registration only; delivery stays between Asana and the
    // target URL)
    // ========================================================================

    #[tool(description = "Register a webhook on a resource. Asana performs the handshake \
            with the target URL directly")]
    async fn asana_create_webhook(
        &self,
        params: Parameters<CreateWebhookParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let mut data = serde_json::Map::new();
        data.insert("resource".to_string(), serde_json::json!(p.resource));
        data.insert("target".to_string(), serde_json::json!(p.target));
        if let Some(filters) = p.filters {
            data.insert("filters".to_string(), serde_json::json!(filters));
        }

        let body = serde_json::json!({"data": data});
        let result: Result<Resource, _> = self.client.post("/webhooks", &body).await;
        self.respond_mutated(
            "Failed to register webhook",
            "Webhook registered",
            "webhook",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Get a webhook by GID")]
    async fn asana_get_webhook(
        &self,
        params: Parameters<GetParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, WEBHOOK_FIELDS);
        let result: Result<Resource, _> = self
            .client
            .get(
                &format!("/webhooks/{}", p.gid),
                &[("opt_fields", fields.as_str())],
            )
            .await;
        self.respond_one(
            "Failed to get webhook",
            "webhook",
            result,
            p.response_format,
        )
    }

    #[tool(description = "Delete (unregister) a webhook by GID")]
    async fn asana_delete_webhook(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let result = self.client.delete(&format!("/webhooks/{}", p.gid)).await;
        self.respond_empty(
            "Failed to delete webhook",
            "Webhook deleted",
            result,
            p.response_format,
        )
    }

    #[tool(description = "List webhooks registered in a workspace")]
    async fn asana_list_webhooks(
        &self,
        params: Parameters<ListWebhooksParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let fields = resolve_fields(&p.opt_fields, WEBHOOK_FIELDS);

        let mut query: Vec<(&str, &str)> = vec![
            ("workspace", p.workspace.as_str()),
            ("opt_fields", fields.as_str()),
        ];
        if let Some(resource) = p.resource.as_deref() {
            query.push(("resource", resource));
        }

        let result: Result<Page<Resource>, _> = self
            .client
            .get_page(
                "/webhooks",
                &query,
                self.page_limit(p.limit),
                p.offset.as_deref(),
            )
            .await;
        self.respond_page(
            "Failed to list webhooks",
            "webhook",
            result,
            p.response_format,
        )
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for AsanaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "asana-gateway".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Multi-tenant gateway exposing the Asana API as MCP tools. Every request \
                 is authenticated with the X-Asana-Access-Token header; nothing is shared \
                 between requests. List tools return one page plus a next_offset token."
                    .to_string(),
            ),
        }
    }
}
