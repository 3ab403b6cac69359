//! Gmail settings adapter (Gmail API v1, authenticated user's mailbox).

use veneer_core::{Catalog, Endpoint, Method, ParamType, VeneerResult};

pub const API_BASE_URL: &str = "https://gmail.googleapis.com";

const SETTINGS: &str = "/gmail/v1/users/me/settings";

pub fn catalog() -> VeneerResult<Catalog> {
    let p = |suffix: &str| format!("{}{}", SETTINGS, suffix);

    Catalog::build(vec![
        Endpoint::new(
            Method::GET,
            &p("/autoForwarding"),
            "gmail_get_auto_forwarding",
            "Get the auto-forwarding setting",
        ),
        Endpoint::new(
            Method::PUT,
            &p("/autoForwarding"),
            "gmail_update_auto_forwarding",
            "Update the auto-forwarding setting",
        )
        .required("enabled", ParamType::Boolean, "Whether all incoming mail is automatically forwarded")
        .optional("emailAddress", ParamType::String, "Email address to which messages are forwarded")
        .optional("disposition", ParamType::String, "State of a forwarded message: leaveInInbox, archive, trash, markRead"),
        Endpoint::new(Method::GET, &p("/imap"), "gmail_get_imap", "Get IMAP settings"),
        Endpoint::new(Method::PUT, &p("/imap"), "gmail_update_imap", "Update IMAP settings")
            .required("enabled", ParamType::Boolean, "Whether IMAP is enabled for the account")
            .optional("autoExpunge", ParamType::Boolean, "Whether Gmail immediately expunges deleted messages")
            .optional("expungeBehavior", ParamType::String, "Action on expunged messages: archive, trash, deleteForever")
            .optional("maxFolderSize", ParamType::Number, "Maximum number of messages accessible per IMAP folder"),
        Endpoint::new(Method::GET, &p("/language"), "gmail_get_language", "Get language settings"),
        Endpoint::new(
            Method::PUT,
            &p("/language"),
            "gmail_update_language",
            "Update language settings",
        )
        .required("displayLanguage", ParamType::String, "Display language as an RFC 3066 language tag"),
        Endpoint::new(Method::GET, &p("/pop"), "gmail_get_pop", "Get POP settings"),
        Endpoint::new(Method::PUT, &p("/pop"), "gmail_update_pop", "Update POP settings")
            .optional("accessWindow", ParamType::String, "Range of messages accessible via POP: disabled, fromNowOn, allMail")
            .optional("disposition", ParamType::String, "Action on messages after POP access: leaveInInbox, archive, trash, markRead"),
        Endpoint::new(
            Method::GET,
            &p("/vacation"),
            "gmail_get_vacation",
            "Get vacation responder settings",
        ),
        Endpoint::new(
            Method::PUT,
            &p("/vacation"),
            "gmail_update_vacation",
            "Update vacation responder settings",
        )
        .required("enableAutoReply", ParamType::Boolean, "Whether the vacation responder is enabled")
        .optional("responseSubject", ParamType::String, "Subject line of the vacation response")
        .optional("responseBodyPlainText", ParamType::String, "Plain-text body of the vacation response")
        .optional("responseBodyHtml", ParamType::String, "HTML body of the vacation response")
        .optional("restrictToContacts", ParamType::Boolean, "Only send responses to contacts")
        .optional("restrictToDomain", ParamType::Boolean, "Only send responses to users in the same domain")
        .optional("startTime", ParamType::String, "Start time in epoch milliseconds")
        .optional("endTime", ParamType::String, "End time in epoch milliseconds"),
        Endpoint::new(
            Method::GET,
            &p("/delegates"),
            "gmail_list_delegates",
            "List delegates for the account",
        ),
        Endpoint::new(Method::POST, &p("/delegates"), "gmail_add_delegate", "Add a delegate")
            .required("delegateEmail", ParamType::String, "Email address of the delegate to add"),
        Endpoint::new(
            Method::GET,
            &p("/delegates/{delegateEmail}"),
            "gmail_get_delegate",
            "Get a delegate",
        ),
        Endpoint::new(
            Method::DELETE,
            &p("/delegates/{delegateEmail}"),
            "gmail_remove_delegate",
            "Remove a delegate",
        ),
        Endpoint::new(Method::GET, &p("/filters"), "gmail_list_filters", "List mail filters"),
        Endpoint::new(Method::POST, &p("/filters"), "gmail_create_filter", "Create a mail filter")
            .required("criteria", ParamType::Object, "Matching criteria (from, to, subject, query, hasAttachment, size)")
            .required("action", ParamType::Object, "Actions to perform (addLabelIds, removeLabelIds, forward)"),
        Endpoint::new(Method::GET, &p("/filters/{id}"), "gmail_get_filter", "Get a mail filter"),
        Endpoint::new(
            Method::DELETE,
            &p("/filters/{id}"),
            "gmail_delete_filter",
            "Delete a mail filter",
        ),
        Endpoint::new(
            Method::GET,
            &p("/forwardingAddresses"),
            "gmail_list_forwarding_addresses",
            "List forwarding addresses",
        ),
        Endpoint::new(
            Method::POST,
            &p("/forwardingAddresses"),
            "gmail_create_forwarding_address",
            "Create a forwarding address",
        )
        .required("forwardingEmail", ParamType::String, "Email address to forward to"),
        Endpoint::new(
            Method::GET,
            &p("/forwardingAddresses/{forwardingEmail}"),
            "gmail_get_forwarding_address",
            "Get a forwarding address",
        ),
        Endpoint::new(
            Method::DELETE,
            &p("/forwardingAddresses/{forwardingEmail}"),
            "gmail_delete_forwarding_address",
            "Delete a forwarding address",
        ),
        Endpoint::new(
            Method::GET,
            &p("/sendAs"),
            "gmail_list_send_as",
            "List send-as aliases",
        ),
        Endpoint::new(
            Method::POST,
            &p("/sendAs"),
            "gmail_create_send_as",
            "Create a send-as alias",
        )
        .required("sendAsEmail", ParamType::String, "The send-as email address")
        .optional("displayName", ParamType::String, "Display name used for the alias")
        .optional("replyToAddress", ParamType::String, "Reply-to address for messages sent with the alias")
        .optional("signature", ParamType::String, "HTML signature appended to outgoing messages")
        .optional("isDefault", ParamType::Boolean, "Whether the alias is the default send-as address")
        .optional("treatAsAlias", ParamType::Boolean, "Whether Gmail treats the address as an alias"),
        Endpoint::new(
            Method::GET,
            &p("/sendAs/{sendAsEmail}"),
            "gmail_get_send_as",
            "Get a send-as alias",
        ),
        Endpoint::new(
            Method::PUT,
            &p("/sendAs/{sendAsEmail}"),
            "gmail_update_send_as",
            "Update a send-as alias",
        )
        .optional("displayName", ParamType::String, "Display name used for the alias")
        .optional("replyToAddress", ParamType::String, "Reply-to address for messages sent with the alias")
        .optional("signature", ParamType::String, "HTML signature appended to outgoing messages")
        .optional("isDefault", ParamType::Boolean, "Whether the alias is the default send-as address")
        .optional("treatAsAlias", ParamType::Boolean, "Whether Gmail treats the address as an alias"),
        Endpoint::new(
            Method::DELETE,
            &p("/sendAs/{sendAsEmail}"),
            "gmail_delete_send_as",
            "Delete a send-as alias",
        ),
        Endpoint::new(
            Method::POST,
            &p("/sendAs/{sendAsEmail}/verify"),
            "gmail_verify_send_as",
            "Send a verification email for a send-as alias",
        ),
    ])
}
