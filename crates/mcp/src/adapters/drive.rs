//! Google Drive file operations adapter (Drive API v3).

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub const API_BASE_URL: &str = "https://www.googleapis.com";

pub fn catalog() -> VeneerResult<Catalog> {
    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            "/drive/v3/files",
            "drive_list_files",
            "Search for files and folders using Drive query syntax",
        )
        .optional("q", ParamType::String, "Query string for filtering results (Drive API query syntax)")
        .optional("pageSize", ParamType::Number, "Maximum number of files to return per page")
        .optional("pageToken", ParamType::String, "Token for continuing a previous list request")
        .optional("orderBy", ParamType::String, "Comma-separated list of sort keys")
        .optional("fields", ParamType::String, "Selector specifying which fields to include in the response")
        .optional("driveId", ParamType::String, "ID of the shared drive to search")
        .optional("corpora", ParamType::String, "Bodies of items to query: user, domain, drive, allDrives")
        .optional("includeItemsFromAllDrives", ParamType::Boolean, "Whether shared drive items appear in results")
        .optional("supportsAllDrives", ParamType::Boolean, "Whether the requesting application supports shared drives"),
        Endpoint::new(
            Method::GET,
            "/drive/v3/files/generateIds",
            "drive_generate_ids",
            "Generate a set of file IDs for create or copy requests",
        )
        .optional("count", ParamType::Number, "Number of IDs to return")
        .optional("space", ParamType::String, "Space in which the IDs can be used: drive or appDataFolder"),
        Endpoint::new(
            Method::GET,
            "/drive/v3/files/{fileId}",
            "drive_get_file",
            "Get a file's metadata by ID",
        )
        .optional("fields", ParamType::String, "Selector specifying which fields to include in the response")
        .optional("acknowledgeAbuse", ParamType::Boolean, "Whether to acknowledge the risk of downloading known malware")
        .optional("supportsAllDrives", ParamType::Boolean, "Whether the requesting application supports shared drives"),
        Endpoint::new(
            Method::GET,
            "/drive/v3/files/{fileId}/export",
            "drive_export_file",
            "Export a Google Workspace document to the requested MIME type",
        )
        .required("mimeType", ParamType::String, "The MIME type of the format to export to"),
        Endpoint::new(
            Method::POST,
            "/drive/v3/files",
            "drive_create_file",
            "Create a new file or folder (metadata only)",
        )
        .optional("name", ParamType::String, "Name of the file")
        .optional("mimeType", ParamType::String, "MIME type of the file (folders use application/vnd.google-apps.folder)")
        .optional("parents", ParamType::Array, "IDs of the parent folders")
        .optional("description", ParamType::String, "Short description of the file"),
        Endpoint::new(
            Method::PATCH,
            "/drive/v3/files/{fileId}",
            "drive_update_file",
            "Update a file's metadata",
        )
        .optional("name", ParamType::String, "New name of the file")
        .optional("description", ParamType::String, "Short description of the file")
        .optional("trashed", ParamType::Boolean, "Whether the file is in the trash")
        .optional("starred", ParamType::Boolean, "Whether the user has starred the file"),
        Endpoint::new(
            Method::DELETE,
            "/drive/v3/files/{fileId}",
            "drive_delete_file",
            "Permanently delete a file without moving it to the trash",
        )
        .optional("supportsAllDrives", ParamType::Boolean, "Whether the requesting application supports shared drives"),
        Endpoint::new(
            Method::POST,
            "/drive/v3/files/{fileId}/copy",
            "drive_copy_file",
            "Create a copy of a file",
        )
        .optional("name", ParamType::String, "Name of the copy")
        .optional("parents", ParamType::Array, "IDs of the parent folders for the copy"),
        Endpoint::new(
            Method::DELETE,
            "/drive/v3/files/trash",
            "drive_empty_trash",
            "Permanently delete all of the user's trashed files",
        ),
        Endpoint::new(
            Method::GET,
            "/drive/v3/files/{fileId}/permissions",
            "drive_list_permissions",
            "List a file's permissions",
        )
        .optional("pageSize", ParamType::Number, "Maximum number of permissions to return per page")
        .optional("pageToken", ParamType::String, "Token for continuing a previous list request")
        .optional("supportsAllDrives", ParamType::Boolean, "Whether the requesting application supports shared drives"),
        Endpoint::new(
            Method::POST,
            "/drive/v3/files/{fileId}/permissions",
            "drive_create_permission",
            "Grant a permission on a file or shared drive",
        )
        .required("role", ParamType::String, "Role granted: owner, organizer, fileOrganizer, writer, commenter, reader")
        .required("type", ParamType::String, "Grantee type: user, group, domain, anyone")
        .optional("emailAddress", ParamType::String, "Email address of the user or group the permission refers to")
        .optional("domain", ParamType::String, "Domain the permission refers to"),
        Endpoint::new(
            Method::DELETE,
            "/drive/v3/files/{fileId}/permissions/{permissionId}",
            "drive_delete_permission",
            "Delete a permission from a file",
        ),
        Endpoint::new(
            Method::GET,
            "/drive/v3/files/{fileId}/comments",
            "drive_list_comments",
            "List a file's comments",
        )
        .optional("pageSize", ParamType::Number, "Maximum number of comments to return per page")
        .optional("pageToken", ParamType::String, "Token for continuing a previous list request")
        .optional("includeDeleted", ParamType::Boolean, "Whether to include deleted comments"),
        Endpoint::new(
            Method::POST,
            "/drive/v3/files/{fileId}/comments",
            "drive_create_comment",
            "Create a comment on a file",
        )
        .required("content", ParamType::String, "Plain-text content of the comment"),
    ])
}
