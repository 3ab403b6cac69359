//! GitHub pulls category.

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub fn catalog() -> VeneerResult<Catalog> {
    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls",
            "pulls_list",
            "List pull requests",
        )
        .optional("state", ParamType::String, "Pull request state: open, closed, all")
        .optional("head", ParamType::String, "Filter by head user/org and branch name (user:ref-name)")
        .optional("base", ParamType::String, "Filter by base branch name")
        .optional("sort", ParamType::String, "Sort by: created, updated, popularity, long-running")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls",
            "pulls_create",
            "Create a pull request",
        )
        .required("head", ParamType::String, "The name of the branch where the changes are implemented")
        .required("base", ParamType::String, "The name of the branch to pull the changes into")
        .optional("title", ParamType::String, "The title of the pull request")
        .optional("body", ParamType::String, "The contents of the pull request")
        .optional("maintainer_can_modify", ParamType::Boolean, "Whether maintainers can modify the pull request")
        .optional("draft", ParamType::Boolean, "Whether to create the pull request as a draft")
        .optional("issue", ParamType::Number, "Issue number to convert into a pull request"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}",
            "pulls_get",
            "Get a pull request",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/pulls/{pull_number}",
            "pulls_update",
            "Update a pull request",
        )
        .optional("title", ParamType::String, "The title of the pull request")
        .optional("body", ParamType::String, "The contents of the pull request")
        .optional("state", ParamType::String, "State of the pull request: open or closed")
        .optional("base", ParamType::String, "The name of the branch to pull the changes into")
        .optional("maintainer_can_modify", ParamType::Boolean, "Whether maintainers can modify the pull request"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/comments",
            "pulls_list_review_comments_for_repo",
            "List review comments in a repository",
        )
        .optional("sort", ParamType::String, "Sort by: created or updated")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
            "pulls_get_review_comment",
            "Get a review comment",
        ),
        Endpoint::new(
            Method::PATCH,
            "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
            "pulls_update_review_comment",
            "Update a review comment",
        )
        .required("body", ParamType::String, "The text of the comment"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/pulls/comments/{comment_id}",
            "pulls_delete_review_comment",
            "Delete a review comment",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
            "pulls_list_review_comments",
            "List review comments on a pull request",
        )
        .optional("sort", ParamType::String, "Sort by: created or updated")
        .optional("direction", ParamType::String, "Sort direction: asc or desc")
        .optional("since", ParamType::String, "Only show results updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls/{pull_number}/comments",
            "pulls_create_review_comment",
            "Create a review comment",
        )
        .required("body", ParamType::String, "The text of the comment")
        .required("commit_id", ParamType::String, "SHA of the commit to comment on")
        .required("path", ParamType::String, "Relative path of the file to comment on")
        .optional("line", ParamType::Number, "Line of the blob the comment applies to")
        .optional("side", ParamType::String, "Diff side the comment applies to: LEFT or RIGHT")
        .optional("start_line", ParamType::Number, "First line of a multi-line comment range")
        .optional("start_side", ParamType::String, "Diff side the start line belongs to")
        .optional("in_reply_to", ParamType::Number, "Comment ID to reply to"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls/{pull_number}/comments/{comment_id}/replies",
            "pulls_create_reply_for_review_comment",
            "Create a reply for a review comment",
        )
        .required("body", ParamType::String, "The text of the reply"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/commits",
            "pulls_list_commits",
            "List commits on a pull request",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/files",
            "pulls_list_files",
            "List pull request files",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
            "pulls_check_if_merged",
            "Check if a pull request has been merged",
        ),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/pulls/{pull_number}/merge",
            "pulls_merge",
            "Merge a pull request",
        )
        .optional("commit_title", ParamType::String, "Title for the automatic commit message")
        .optional("commit_message", ParamType::String, "Extra detail to append to the automatic commit message")
        .optional("sha", ParamType::String, "SHA that the pull request head must match to allow merge")
        .optional("merge_method", ParamType::String, "Merge method: merge, squash, rebase"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
            "pulls_list_requested_reviewers",
            "Get all requested reviewers for a pull request",
        ),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
            "pulls_request_reviewers",
            "Request reviewers for a pull request",
        )
        .optional("reviewers", ParamType::Array, "Usernames of people to request a review from")
        .optional("team_reviewers", ParamType::Array, "Team slugs to request a review from"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/pulls/{pull_number}/requested_reviewers",
            "pulls_remove_requested_reviewers",
            "Remove requested reviewers from a pull request",
        )
        .required("reviewers", ParamType::Array, "Usernames of people to remove from the review request"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
            "pulls_list_reviews",
            "List reviews for a pull request",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews",
            "pulls_create_review",
            "Create a review for a pull request",
        )
        .optional("commit_id", ParamType::String, "SHA of the commit that needs a review")
        .optional("body", ParamType::String, "Body text of the review")
        .optional("event", ParamType::String, "Review action: APPROVE, REQUEST_CHANGES, COMMENT")
        .optional("comments", ParamType::Array, "Draft review comments"),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
            "pulls_get_review",
            "Get a review for a pull request",
        ),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
            "pulls_update_review",
            "Update a review for a pull request",
        )
        .required("body", ParamType::String, "Body text of the review"),
        Endpoint::new(
            Method::DELETE,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}",
            "pulls_delete_pending_review",
            "Delete a pending review",
        ),
        Endpoint::new(
            Method::GET,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/comments",
            "pulls_list_comments_for_review",
            "List comments for a review",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/dismissals",
            "pulls_dismiss_review",
            "Dismiss a review",
        )
        .required("message", ParamType::String, "Reason for dismissing the review"),
        Endpoint::new(
            Method::POST,
            "/repos/{owner}/{repo}/pulls/{pull_number}/reviews/{review_id}/events",
            "pulls_submit_review",
            "Submit a review",
        )
        .required("event", ParamType::String, "Review action: APPROVE, REQUEST_CHANGES, COMMENT")
        .optional("body", ParamType::String, "Body text of the review"),
        Endpoint::new(
            Method::PUT,
            "/repos/{owner}/{repo}/pulls/{pull_number}/update-branch",
            "pulls_update_branch",
            "Update a pull request branch",
        )
        .optional("expected_head_sha", ParamType::String, "Expected SHA of the pull request's head ref"),
    ])
}
