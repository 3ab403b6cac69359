//! GitHub issues category.

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub fn catalog() -> VeneerResult<Catalog> {
    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            "/issues",
            "issues_list",
            "List issues assigned to the authenticated user",
        )
        .optional("filter", ParamType::String, "Which issues to show: assigned, created, mentioned, subscribed, repos, all")
        .optional("state", ParamType::String, "Issue state: open, closed, all")
        .optional("labels", ParamType::String, "Comma-separated list of label names")
        .optional("sort", ParamType::String, "Sort by: created, updated, comments")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/orgs/{org}/issues",
            "issues_list_for_org",
            "List organization issues assigned to the authenticated user",
        )
        .optional("filter", ParamType::String, "Which issues to show: assigned, created, mentioned, subscribed, repos, all")
        .optional("state", ParamType::String, "Issue state: open, closed, all")
        .optional("type", ParamType::String, "Issue type to filter by")
        .optional("sort", ParamType::String, "Sort by: created, updated, comments")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/user/issues",
            "issues_list_for_authenticated_user",
            "List issues assigned to the authenticated user across owned and member repositories",
        )
        .optional("filter", ParamType::String, "Which issues to show: assigned, created, mentioned, subscribed, repos, all")
        .optional("state", ParamType::String, "Issue state: open, closed, all")
        .optional("sort", ParamType::String, "Sort by: created, updated, comments")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues",
            "issues_list_for_repo",
            "List repository issues",
        )
        .optional("milestone", ParamType::String, "Milestone number, or * for any milestone")
        .optional("state", ParamType::String, "Issue state: open, closed, all")
        .optional("assignee", ParamType::String, "Username, or * for any assigned issue")
        .optional("creator", ParamType::String, "The user that created the issue")
        .optional("mentioned", ParamType::String, "A user that's mentioned in the issue")
        .optional("labels", ParamType::String, "Comma-separated list of label names")
        .optional("sort", ParamType::String, "Sort by: created, updated, comments")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues",
            "issues_create",
            "Create an issue",
        )
        .required("title", ParamType::String, "The title of the issue")
        .optional("body", ParamType::String, "The contents of the issue")
        .optional("assignee", ParamType::String, "Login for the user to assign the issue to")
        .optional("milestone", ParamType::Number, "Milestone number to associate with the issue")
        .optional("labels", ParamType::Array, "Labels to associate with the issue")
        .optional("assignees", ParamType::Array, "Logins for users to assign the issue to"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}",
            "issues_get",
            "Get an issue",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/issues/{issue_number}",
            "issues_update",
            "Update an issue",
        )
        .optional("title", ParamType::String, "The title of the issue")
        .optional("body", ParamType::String, "The contents of the issue")
        .optional("state", ParamType::String, "State of the issue: open or closed")
        .optional("state_reason", ParamType::String, "Reason for the state change")
        .optional("milestone", ParamType::Number, "Milestone number to associate with the issue")
        .optional("labels", ParamType::Array, "Labels to associate with the issue")
        .optional("assignees", ParamType::Array, "Logins for users to assign the issue to"),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/issues/{issue_number}/lock",
            "issues_lock",
            "Lock an issue",
        )
        .optional("lock_reason", ParamType::String, "Reason for locking: off-topic, too heated, resolved, spam"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/lock",
            "issues_unlock",
            "Unlock an issue",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/assignees",
            "issues_list_assignees",
            "List assignees",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/assignees/{assignee}",
            "issues_check_user_can_be_assigned",
            "Check if a user can be assigned",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/assignees/{assignee}",
            "issues_check_user_can_be_assigned_to_issue",
            "Check if a user can be assigned to an issue",
        ),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
            "issues_add_assignees",
            "Add assignees to an issue",
        )
        .optional("assignees", ParamType::Array, "Usernames to assign to the issue"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/assignees",
            "issues_remove_assignees",
            "Remove assignees from an issue",
        )
        .optional("assignees", ParamType::Array, "Usernames to remove from the issue"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/comments",
            "issues_list_comments",
            "List issue comments",
        )
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues/{issue_number}/comments",
            "issues_create_comment",
            "Create an issue comment",
        )
        .required("body", ParamType::String, "The contents of the comment"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/comments/{comment_id}",
            "issues_get_comment",
            "Get an issue comment",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/issues/comments/{comment_id}",
            "issues_update_comment",
            "Update an issue comment",
        )
        .required("body", ParamType::String, "The contents of the comment"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/comments/{comment_id}",
            "issues_delete_comment",
            "Delete an issue comment",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/comments",
            "issues_list_comments_for_repo",
            "List issue comments for a repository",
        )
        .optional("sort", ParamType::String, "Sort by: created or updated")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/events",
            "issues_list_events_for_repo",
            "List issue events for a repository",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/events/{event_id}",
            "issues_get_event",
            "Get an issue event",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/events",
            "issues_list_events",
            "List events for an issue",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/timeline",
            "issues_list_events_for_timeline",
            "List timeline events for an issue",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/labels",
            "issues_list_labels_on_issue",
            "List labels for an issue",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues/{issue_number}/labels",
            "issues_add_labels",
            "Add labels to an issue",
        )
        .optional("labels", ParamType::Array, "Names of the labels to add"),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/issues/{issue_number}/labels",
            "issues_set_labels",
            "Set labels for an issue",
        )
        .optional("labels", ParamType::Array, "Names of the labels to set; an empty array removes all labels"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/labels",
            "issues_remove_all_labels",
            "Remove all labels from an issue",
        ),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/labels/{name}",
            "issues_remove_label",
            "Remove a label from an issue",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/parent",
            "issues_get_parent",
            "Get the parent of a sub-issue",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/sub_issues",
            "issues_list_sub_issues",
            "List sub-issues of an issue",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues/{issue_number}/sub_issues",
            "issues_add_sub_issue",
            "Add a sub-issue to an issue",
        )
        .required("sub_issue_id", ParamType::Number, "ID of the issue to add as a sub-issue")
        .optional("replace_parent", ParamType::Boolean, "Whether to replace the sub-issue's current parent"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/sub_issue",
            "issues_remove_sub_issue",
            "Remove a sub-issue from an issue",
        )
        .required("sub_issue_id", ParamType::Number, "ID of the sub-issue to remove"),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/issues/{issue_number}/sub_issues/priority",
            "issues_reprioritize_sub_issue",
            "Reprioritize a sub-issue within its parent's list",
        )
        .required("sub_issue_id", ParamType::Number, "ID of the sub-issue to move")
        .optional("after_id", ParamType::Number, "Place the sub-issue after this sub-issue ID")
        .optional("before_id", ParamType::Number, "Place the sub-issue before this sub-issue ID"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/dependencies/blocked_by",
            "issues_list_dependencies_blocked_by",
            "List issues this issue is blocked by",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/issues/{issue_number}/dependencies/blocked_by",
            "issues_add_blocked_by_dependency",
            "Add a blocked-by dependency to an issue",
        )
        .required("issue_id", ParamType::Number, "ID of the issue that blocks this one"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/issues/{issue_number}/dependencies/blocked_by/{issue_id}",
            "issues_remove_dependency_blocked_by",
            "Remove a blocked-by dependency from an issue",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/issues/{issue_number}/dependencies/blocking",
            "issues_list_dependencies_blocking",
            "List issues this issue is blocking",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/labels",
            "issues_list_labels_for_repo",
            "List labels for a repository",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/labels",
            "issues_create_label",
            "Create a label",
        )
        .required("name", ParamType::String, "The name of the label")
        .optional("color", ParamType::String, "Hexadecimal color code without the leading #")
        .optional("description", ParamType::String, "Short description of the label"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/labels/{name}",
            "issues_get_label",
            "Get a label",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/labels/{name}",
            "issues_update_label",
            "Update a label",
        )
        .optional("new_name", ParamType::String, "The new name of the label")
        .optional("color", ParamType::String, "Hexadecimal color code without the leading #")
        .optional("description", ParamType::String, "Short description of the label"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/labels/{name}",
            "issues_delete_label",
            "Delete a label",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/milestones",
            "issues_list_milestones",
            "List milestones",
        )
        .optional("state", ParamType::String, "Milestone state: open, closed, all")
        .optional("sort", ParamType::String, "Sort by: due_on or completeness")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/milestones",
            "issues_create_milestone",
            "Create a milestone",
        )
        .required("title", ParamType::String, "The title of the milestone")
        .optional("state", ParamType::String, "Milestone state: open or closed")
        .optional("description", ParamType::String, "Description of the milestone")
        .optional("due_on", ParamType::String, "Due date as an ISO 8601 timestamp"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/milestones/{milestone_number}",
            "issues_get_milestone",
            "Get a milestone",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/milestones/{milestone_number}",
            "issues_update_milestone",
            "Update a milestone",
        )
        .optional("title", ParamType::String, "The title of the milestone")
        .optional("state", ParamType::String, "Milestone state: open or closed")
        .optional("description", ParamType::String, "Description of the milestone")
        .optional("due_on", ParamType::String, "Due date as an ISO 8601 timestamp"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/milestones/{milestone_number}",
            "issues_delete_milestone",
            "Delete a milestone",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/milestones/{milestone_number}/labels",
            "issues_list_labels_for_milestone",
            "List labels for issues in a milestone",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
    ])
}
