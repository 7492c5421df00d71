//! Central registry for all user-facing message templates.
//!
//! Organized by command domain:
//! - `setup` - project creation messages
//! - `remove` - project teardown messages
//! - `patch` - config-file patching messages
//! - `common` - shared/reusable messages
//!
//! Messages are accessed through the `MESSAGES` constant:
//!
//! ```rust
//! use tracadm_messages::MESSAGES;
//!
//! let template = MESSAGES.setup.success;
//! ```

/// Project setup messages
pub struct SetupMessages {
    pub header: &'static str,
    pub init_project: &'static str,
    pub strip_permissions: &'static str,
    pub user_created: &'static str,
    pub restarting: &'static str,
    pub separator: &'static str,
    pub success: &'static str,
}

pub const SETUP_MESSAGES: SetupMessages = SetupMessages {
    header: "Setting up the `{name}` {vcs} project on {host}...",
    init_project: "Initializing the Trac project...",
    strip_permissions: "Removing default authenticated/anonymous permissions...",
    user_created: "Finished adding user, creating group, and setting permissions for the `{name}` project.",
    restarting: "Restarting the web server...",
    separator: "---------------",
    success: "Trac project setup is complete. Have fun!",
};

/// Project removal messages
pub struct RemoveMessages {
    pub confirm: &'static str,
    pub cancelled: &'static str,
    pub deleting_dir: &'static str,
    pub dir_not_found: &'static str,
    pub deleting_file: &'static str,
    pub file_not_found: &'static str,
    pub confirm_user: &'static str,
    pub user_delete_failed: &'static str,
    pub group_delete_failed: &'static str,
    pub done: &'static str,
}

pub const REMOVE_MESSAGES: RemoveMessages = RemoveMessages {
    confirm: "This will delete the `{name}` {vcs} project. Are you REALLY sure? (y/N): ",
    cancelled: "Nothing was removed.",
    deleting_dir: "Deleting directory: {path}...",
    dir_not_found: "Could not locate directory: {path}",
    deleting_file: "Deleting file: {path}...",
    file_not_found: "Could not locate file: {path}",
    confirm_user: "Do you wish to also delete the user and group? (y/N): ",
    user_delete_failed: "Could not delete user `{name}`: {error}",
    group_delete_failed: "Could not delete group `{group}`: {error}",
    done: "Done deleting the `{name}` project.",
};

/// Config patching messages
pub struct PatchMessages {
    pub hook_updating: &'static str,
    pub hook_updated: &'static str,
    pub hook_already_updated: &'static str,
    pub hook_not_found: &'static str,
    pub ini_updating: &'static str,
    pub ini_not_found: &'static str,
    pub components_updated: &'static str,
    pub account_manager_exists: &'static str,
    pub account_manager_updated: &'static str,
    pub ini_uploaded: &'static str,
    pub all_files_done: &'static str,
}

pub const PATCH_MESSAGES: PatchMessages = PatchMessages {
    hook_updating: "Updating the .git/config file...",
    hook_updated: "Finished updating the .git/config file.",
    hook_already_updated: ".git/config file already appears to be updated.",
    hook_not_found: "Could not locate the .git/config file.",
    ini_updating: "Updating the trac.ini file...",
    ini_not_found: "Could not locate the trac.ini file: {path}",
    components_updated: "... Updated the [components] block...",
    account_manager_exists: "You will have to update the trac.ini [account-manager] block manually, it already exists.",
    account_manager_updated: "... Updated the [account-manager] block...",
    ini_uploaded: "Finished updating & uploading the trac.ini file.",
    all_files_done: "Finished updating all files.",
};

/// Common/shared messages across commands
pub struct CommonMessages {
    pub error_generic: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    error_generic: "❌ Error: {error}",
};

/// Unified messages struct containing all domain-specific message modules
pub struct Messages {
    pub setup: SetupMessages,
    pub remove: RemoveMessages,
    pub patch: PatchMessages,
    pub common: CommonMessages,
}

/// Global messages constant - main entry point for all message templates
pub const MESSAGES: Messages = Messages {
    setup: SETUP_MESSAGES,
    remove: REMOVE_MESSAGES,
    patch: PATCH_MESSAGES,
    common: COMMON_MESSAGES,
};
