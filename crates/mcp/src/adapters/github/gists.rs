//! GitHub gists category.

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub fn catalog() -> VeneerResult<Catalog> {
    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            "/gists",
            "gists_list",
            "List gists for the authenticated user",
        )
        .optional("since", ParamType::String, "Only show gists updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(Method::POST, "/gists", "gists_create", "Create a gist")
            .required("files", ParamType::Object, "Names and content for the files that make up the gist")
            .optional("description", ParamType::String, "Description of the gist")
            .optional("public", ParamType::Boolean, "Flag indicating whether the gist is public"),
        Endpoint::new(
            Method::GET,
            "/gists/public",
            "gists_list_public",
            "List public gists",
        )
        .optional("since", ParamType::String, "Only show gists updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/gists/starred",
            "gists_list_starred",
            "List starred gists",
        )
        .optional("since", ParamType::String, "Only show gists updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(Method::GET, "/gists/{gist_id}", "gists_get", "Get a gist"),
        Endpoint::new(Method::PATCH, "/gists/{gist_id}", "gists_update", "Update a gist")
            .optional("description", ParamType::String, "Description of the gist")
            .optional("files", ParamType::Object, "Files to update, rename, or delete"),
        Endpoint::new(Method::DELETE, "/gists/{gist_id}", "gists_delete", "Delete a gist"),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/comments",
            "gists_list_comments",
            "List gist comments",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/gists/{gist_id}/comments",
            "gists_create_comment",
            "Create a gist comment",
        )
        .required("body", ParamType::String, "The comment text"),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/comments/{comment_id}",
            "gists_get_comment",
            "Get a gist comment",
        ),
        Endpoint::new(
            Method::PATCH,
            "/gists/{gist_id}/comments/{comment_id}",
            "gists_update_comment",
            "Update a gist comment",
        )
        .required("body", ParamType::String, "The comment text"),
        Endpoint::new(
            Method::DELETE,
            "/gists/{gist_id}/comments/{comment_id}",
            "gists_delete_comment",
            "Delete a gist comment",
        ),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/commits",
            "gists_list_commits",
            "List gist commits",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/forks",
            "gists_list_forks",
            "List gist forks",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(Method::POST, "/gists/{gist_id}/forks", "gists_fork", "Fork a gist"),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/star",
            "gists_check_is_starred",
            "Check if a gist is starred",
        ),
        Endpoint::new(Method::PUT, "/gists/{gist_id}/star", "gists_star", "Star a gist"),
        Endpoint::new(Method::DELETE, "/gists/{gist_id}/star", "gists_unstar", "Unstar a gist"),
        Endpoint::new(
            Method::GET,
            "/gists/{gist_id}/{sha}",
            "gists_get_revision",
            "Get a gist revision",
        ),
        Endpoint::new(
            Method::GET,
            "/users/{username}/gists",
            "gists_list_for_user",
            "List gists for a user",
        )
        .optional("since", ParamType::String, "Only show gists updated after the given ISO 8601 timestamp")
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
    ])
}
