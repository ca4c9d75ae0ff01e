//! Opt fields constants for Asana API requests.
//!
//! These constants define which fields to request from the Asana API
//! for each resource type. Including specific fields reduces response
//! size and improves performance.

/// Fields to request for project resources.
pub const PROJECT_FIELDS: &str = "gid,name,color,archived,public,owner,owner.name,\
    team,team.name,workspace,workspace.name,current_status_update,\
    current_status_update.gid,current_status_update.status_type,\
    current_status_update.title,notes,created_at,modified_at,due_on,start_on,permalink_url";

/// Fields to request for portfolio resources.
pub const PORTFOLIO_FIELDS: &str = "gid,name,color,owner,owner.name,workspace,\
    current_status_update,current_status_update.gid,current_status_update.status_type,\
    current_status_update.title,created_at,created_by,permalink_url,public";

/// Fields to request for a single task.
pub const TASK_FIELDS: &str = "gid,name,resource_type,completed,completed_at,\
    completed_by,completed_by.name,assignee,assignee.name,assignee.email,\
    due_on,due_at,start_on,start_at,notes,html_notes,created_at,created_by,\
    created_by.name,modified_at,permalink_url,parent,parent.name,num_likes,\
    num_subtasks,liked,projects,projects.name,workspace,workspace.name,\
    tags,tags.name,memberships,memberships.project,memberships.project.name,\
    memberships.section,memberships.section.name";

/// Compact fields to request for task collections.
pub const TASK_LIST_FIELDS: &str = "gid,name,completed,assignee,assignee.name,\
    due_on,due_at,start_on,num_subtasks,permalink_url";

/// Fields to request for project task counts.
pub const TASK_COUNT_FIELDS: &str = "num_tasks,num_incomplete_tasks,num_completed_tasks,\
    num_milestones,num_incomplete_milestones,num_completed_milestones";

/// Fields to request for stories/comments.
pub const STORY_FIELDS: &str = "gid,created_at,created_by,created_by.name,\
    resource_subtype,text,html_text,is_pinned,is_edited,num_likes,liked";

/// Fields to request for status updates.
pub const STATUS_UPDATE_FIELDS: &str = "gid,title,text,html_text,status_type,\
    created_at,created_by,created_by.name,modified_at,parent,parent.name";

/// Fields to request for workspaces.
pub const WORKSPACE_FIELDS: &str = "gid,name,is_organization";

/// Fields to request for sections.
pub const SECTION_FIELDS: &str = "gid,name,project,project.name,created_at";

/// Fields to request for tags.
pub const TAG_FIELDS: &str =
    "gid,name,color,notes,workspace,workspace.name,created_at,permalink_url";

/// Fields to request for users.
pub const USER_FIELDS: &str = "gid,name,email,photo,workspaces,workspaces.name";

/// Fields to request for teams.
pub const TEAM_FIELDS: &str = "gid,name,description,html_description,organization,permalink_url";

/// Fields to request for attachments.
pub const ATTACHMENT_FIELDS: &str = "gid,name,resource_subtype,download_url,view_url,\
    host,parent,parent.name,created_at,size";

/// Fields to request for custom field definitions.
pub const CUSTOM_FIELD_FIELDS: &str = "gid,name,type,enum_options,enum_options.gid,\
    enum_options.name,enum_options.color,precision,currency_code,description,\
    is_global_to_workspace";

/// Fields to request for custom field settings.
pub const CUSTOM_FIELD_SETTINGS_FIELDS: &str = "gid,custom_field,custom_field.gid,\
    custom_field.name,custom_field.type,custom_field.enum_options,\
    custom_field.enum_options.gid,custom_field.enum_options.name,\
    custom_field.enum_options.color,custom_field.precision,\
    custom_field.currency_code,is_important,project";

/// Fields to request for goals.
pub const GOAL_FIELDS: &str = "gid,name,owner,owner.name,due_on,start_on,notes,html_notes,\
    status,is_workspace_level,liked,num_likes,team,team.name,workspace,workspace.name,\
    time_period,time_period.display_name,metric,metric.unit,metric.currency_code,\
    metric.initial_number_value,metric.target_number_value,metric.current_number_value";

/// Fields to request for goal relationships.
pub const GOAL_RELATIONSHIP_FIELDS: &str = "gid,resource_subtype,contribution_weight,\
    supported_goal,supported_goal.name,supporting_resource,supporting_resource.name";

/// Fields to request for webhooks.
pub const WEBHOOK_FIELDS: &str = "gid,active,resource,resource.name,target,\
    created_at,last_failure_at,last_failure_content,last_success_at,filters,\
    filters.resource_type,filters.resource_subtype,filters.action,filters.fields";

/// Fields to request for search results.
pub const SEARCH_FIELDS: &str = "gid,name,completed,assignee,assignee.name,\
    due_on,start_on,projects,projects.name,tags,tags.name,permalink_url";

/// Fields to request for typeahead results.
pub const TYPEAHEAD_FIELDS: &str = "gid,resource_type,name";
