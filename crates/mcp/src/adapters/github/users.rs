//! GitHub users category.

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub fn catalog() -> VeneerResult<Catalog> {
    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            "/user",
            "users_get_authenticated",
            "Get the authenticated user",
        ),
        Endpoint::new(
            Method::PATCH,
            "/user",
            "users_update_authenticated",
            "Update the authenticated user",
        )
        .optional("name", ParamType::String, "The new name of the user")
        .optional("email", ParamType::String, "The publicly visible email address of the user")
        .optional("blog", ParamType::String, "The new blog URL of the user")
        .optional("company", ParamType::String, "The new company of the user")
        .optional("location", ParamType::String, "The new location of the user")
        .optional("hireable", ParamType::Boolean, "The new hiring availability of the user")
        .optional("bio", ParamType::String, "The new short biography of the user"),
        Endpoint::new(Method::GET, "/users", "users_list", "List users")
            .optional("since", ParamType::Number, "User ID to start listing from")
            .optional("per_page", ParamType::Number, "Results per page (max 100)"),
        Endpoint::new(
            Method::GET,
            "/user/{account_id}",
            "users_get_by_id",
            "Get a user by account ID",
        ),
        Endpoint::new(
            Method::GET,
            "/users/{username}",
            "users_get_by_username",
            "Get a user",
        ),
        Endpoint::new(
            Method::GET,
            "/user/blocks",
            "users_list_blocked_by_authenticated_user",
            "List users blocked by the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/user/blocks/{username}",
            "users_check_blocked",
            "Check if a user is blocked by the authenticated user",
        ),
        Endpoint::new(Method::PUT, "/user/blocks/{username}", "users_block", "Block a user"),
        Endpoint::new(
            Method::DELETE,
            "/user/blocks/{username}",
            "users_unblock",
            "Unblock a user",
        ),
        Endpoint::new(
            Method::GET,
            "/user/emails",
            "users_list_emails_for_authenticated_user",
            "List email addresses for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/user/emails",
            "users_add_email_for_authenticated_user",
            "Add an email address for the authenticated user",
        )
        .required("emails", ParamType::Array, "Email addresses to add"),
        Endpoint::new(
            Method::DELETE,
            "/user/emails",
            "users_delete_email_for_authenticated_user",
            "Delete an email address for the authenticated user",
        )
        .required("emails", ParamType::Array, "Email addresses to delete"),
        Endpoint::new(
            Method::GET,
            "/user/public_emails",
            "users_list_public_emails_for_authenticated_user",
            "List public email addresses for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::PATCH,
            "/user/email/visibility",
            "users_set_primary_email_visibility_for_authenticated_user",
            "Set the visibility of the authenticated user's primary email",
        )
        .required("visibility", ParamType::String, "Email visibility: public or private"),
        Endpoint::new(
            Method::GET,
            "/user/followers",
            "users_list_followers_for_authenticated_user",
            "List followers of the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/user/following",
            "users_list_followed_by_authenticated_user",
            "List the people the authenticated user follows",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/user/following/{username}",
            "users_check_person_is_followed_by_authenticated",
            "Check if a person is followed by the authenticated user",
        ),
        Endpoint::new(Method::PUT, "/user/following/{username}", "users_follow", "Follow a user"),
        Endpoint::new(
            Method::DELETE,
            "/user/following/{username}",
            "users_unfollow",
            "Unfollow a user",
        ),
        Endpoint::new(
            Method::GET,
            "/user/gpg_keys",
            "users_list_gpg_keys_for_authenticated_user",
            "List GPG keys for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/user/gpg_keys",
            "users_create_gpg_key_for_authenticated_user",
            "Create a GPG key for the authenticated user",
        )
        .required("armored_public_key", ParamType::String, "A GPG key in ASCII-armored format")
        .optional("name", ParamType::String, "A descriptive name for the new key"),
        Endpoint::new(
            Method::GET,
            "/user/gpg_keys/{gpg_key_id}",
            "users_get_gpg_key_for_authenticated_user",
            "Get a GPG key for the authenticated user",
        ),
        Endpoint::new(
            Method::DELETE,
            "/user/gpg_keys/{gpg_key_id}",
            "users_delete_gpg_key_for_authenticated_user",
            "Delete a GPG key for the authenticated user",
        ),
        Endpoint::new(
            Method::GET,
            "/user/keys",
            "users_list_public_ssh_keys_for_authenticated_user",
            "List public SSH keys for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/user/keys",
            "users_create_public_ssh_key_for_authenticated_user",
            "Create a public SSH key for the authenticated user",
        )
        .required("key", ParamType::String, "The public SSH key to add")
        .optional("title", ParamType::String, "A descriptive name for the new key"),
        Endpoint::new(
            Method::GET,
            "/user/keys/{key_id}",
            "users_get_public_ssh_key_for_authenticated_user",
            "Get a public SSH key for the authenticated user",
        ),
        Endpoint::new(
            Method::DELETE,
            "/user/keys/{key_id}",
            "users_delete_public_ssh_key_for_authenticated_user",
            "Delete a public SSH key for the authenticated user",
        ),
        Endpoint::new(
            Method::GET,
            "/user/social_accounts",
            "users_list_social_accounts_for_authenticated_user",
            "List social accounts for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/user/social_accounts",
            "users_add_social_account_for_authenticated_user",
            "Add social accounts for the authenticated user",
        )
        .required("account_urls", ParamType::Array, "Full URLs of the social accounts to add"),
        Endpoint::new(
            Method::DELETE,
            "/user/social_accounts",
            "users_delete_social_account_for_authenticated_user",
            "Delete social accounts for the authenticated user",
        )
        .required("account_urls", ParamType::Array, "Full URLs of the social accounts to delete"),
        Endpoint::new(
            Method::GET,
            "/user/ssh_signing_keys",
            "users_list_ssh_signing_keys_for_authenticated_user",
            "List SSH signing keys for the authenticated user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::POST,
            "/user/ssh_signing_keys",
            "users_create_ssh_signing_key_for_authenticated_user",
            "Create an SSH signing key for the authenticated user",
        )
        .required("key", ParamType::String, "The public SSH key to add")
        .optional("title", ParamType::String, "A descriptive name for the new key"),
        Endpoint::new(
            Method::GET,
            "/user/ssh_signing_keys/{ssh_signing_key_id}",
            "users_get_ssh_signing_key_for_authenticated_user",
            "Get an SSH signing key for the authenticated user",
        ),
        Endpoint::new(
            Method::DELETE,
            "/user/ssh_signing_keys/{ssh_signing_key_id}",
            "users_delete_ssh_signing_key_for_authenticated_user",
            "Delete an SSH signing key for the authenticated user",
        ),
        Endpoint::new(
            Method::GET,
            "/users/{username}/followers",
            "users_list_followers_for_user",
            "List followers of a user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/following",
            "users_list_following_for_user",
            "List the people a user follows",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/following/{target_user}",
            "users_check_following_for_user",
            "Check if a user follows another user",
        ),
        Endpoint::new(
            Method::GET,
            "/users/{username}/gpg_keys",
            "users_list_gpg_keys_for_user",
            "List GPG keys for a user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/keys",
            "users_list_public_keys_for_user",
            "List public keys for a user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/hovercard",
            "users_get_context_for_user",
            "Get contextual information for a user",
        )
        .optional("subject_type", ParamType::String, "Context subject type: organization, repository, issue, pull_request")
        .optional("subject_id", ParamType::String, "ID for the subject_type"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/social_accounts",
            "users_list_social_accounts_for_user",
            "List social accounts for a user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/ssh_signing_keys",
            "users_list_ssh_signing_keys_for_user",
            "List SSH signing keys for a user",
        )
        .optional("per_page", ParamType::Number, "Results per page (max 100)")
        .optional("page", ParamType::Number, "Page number of the results to fetch"),
        Endpoint::new(
            Method::GET,
            "/users/{username}/attestations/{subject_digest}",
            "users_list_attestations",
            "List attestations for an artifact digest",
        )
        .optional("predicate_type", ParamType::String, "Filter attestations by predicate type"),
        Endpoint::new(
            Method::POST,
            "/users/{username}/attestations/bulk-list",
            "users_list_attestations_bulk",
            "List attestations for a batch of artifact digests",
        )
        .required("subject_digests", ParamType::Array, "Artifact digests to list attestations for")
        .optional("predicate_type", ParamType::String, "Filter attestations by predicate type"),
        Endpoint::new(
            Method::POST,
            "/users/{username}/attestations/delete-request",
            "users_delete_attestations_bulk",
            "Request deletion of attestations for a batch of artifact digests",
        )
        .optional("subject_digests", ParamType::Array, "Artifact digests whose attestations should be deleted"),
        Endpoint::new(
            Method::DELETE,
            "/users/{username}/attestations/digest/{subject_digest}",
            "users_delete_attestations_by_subject_digest",
            "Delete attestations for an artifact digest",
        ),
        Endpoint::new(
            Method::DELETE,
            "/users/{username}/attestations/{attestation_id}",
            "users_delete_attestations_by_id",
            "Delete an attestation by ID",
        ),
    ])
}
