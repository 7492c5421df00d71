// Command handlers for Trac appliance operations

use tracing::debug;

use crate::cli::{Args, Command, FilesSubcommand, UsersSubcommand};
use tracadm_config::Settings;
use tracadm_core::error::Result;
use tracadm_core::ProjectDescriptor;
use tracadm_remote::{Remote, SshRemote};

// Individual command modules
pub mod files;
pub mod interaction;
pub mod remove;
pub mod setup;
pub mod users;

use interaction::{AutoConfirm, TerminalConfirm};

/// Main command dispatcher.
#[must_use = "command execution results should be handled"]
pub fn execute_command(args: Args) -> Result<()> {
    let settings = Settings::load(args.config.as_deref())?;
    let host = settings.resolve_host(args.host.as_deref())?;
    let remote = SshRemote::new(host)?;
    dispatch(&remote, &settings, args.command)
}

/// Routes a parsed command to its handler.
///
/// Input validation happens before the handler runs, so an invalid
/// project name or type never issues a remote command.
fn dispatch(remote: &dyn Remote, settings: &Settings, command: Command) -> Result<()> {
    match command {
        Command::Setup {
            project_name,
            project_type,
        } => {
            debug!("Handling setup command");
            let project = ProjectDescriptor::new(&project_name, &project_type)?;
            setup::handle_setup(remote, settings, &project)
        }
        Command::Remove {
            project_name,
            project_type,
            yes,
        } => {
            debug!("Handling remove command");
            let project = ProjectDescriptor::new(&project_name, &project_type)?;
            if yes {
                remove::handle_remove(remote, &mut AutoConfirm, &project)
            } else {
                remove::handle_remove(remote, &mut TerminalConfirm, &project)
            }
        }
        Command::Users { command } => match command {
            UsersSubcommand::Remove {
                username,
                project_name,
            } => {
                debug!("Handling users remove helper");
                users::handle_remove_user_and_group(remote, &username, &project_name)
            }
        },
        Command::Files { command } => match command {
            FilesSubcommand::Update {
                project_name,
                project_type,
            } => {
                debug!("Handling files update helper");
                let project = ProjectDescriptor::new(&project_name, &project_type)?;
                files::handle_update_files(remote, settings, &project)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::path::PathBuf;
    use tracadm_core::error::TracError;
    use tracadm_remote::mock::MockRemote;

    fn test_settings() -> Settings {
        let mut hosts = IndexMap::new();
        hosts.insert("prod".to_string(), "appliance".to_string());
        Settings {
            hosts,
            collateral_dir: PathBuf::from("/nonexistent/collateral"),
            tmp_dir: PathBuf::from("/tmp"),
        }
    }

    #[test]
    fn test_setup_with_invalid_name_issues_no_remote_commands() {
        let remote = MockRemote::new();
        let err = dispatch(
            &remote,
            &test_settings(),
            Command::Setup {
                project_name: "bad name;reboot".to_string(),
                project_type: "git".to_string(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, TracError::Validation(_)));
        assert!(remote.commands().is_empty());
        assert!(remote.transfers().is_empty());
    }

    #[test]
    fn test_setup_with_invalid_type_issues_no_remote_commands() {
        let remote = MockRemote::new();
        let err = dispatch(
            &remote,
            &test_settings(),
            Command::Setup {
                project_name: "website".to_string(),
                project_type: "cvs".to_string(),
            },
        )
        .unwrap_err();

        assert!(matches!(err, TracError::Validation(_)));
        assert!(remote.commands().is_empty());
    }

    #[test]
    fn test_remove_with_invalid_name_issues_no_remote_commands() {
        let remote = MockRemote::new();
        let err = dispatch(
            &remote,
            &test_settings(),
            Command::Remove {
                project_name: "-leading".to_string(),
                project_type: "git".to_string(),
                yes: true,
            },
        )
        .unwrap_err();

        assert!(matches!(err, TracError::Validation(_)));
        assert!(remote.commands().is_empty());
    }

    #[test]
    fn test_files_update_with_invalid_type_issues_no_remote_commands() {
        let remote = MockRemote::new();
        let err = dispatch(
            &remote,
            &test_settings(),
            Command::Files {
                command: FilesSubcommand::Update {
                    project_name: "website".to_string(),
                    project_type: "gitx".to_string(),
                },
            },
        )
        .unwrap_err();

        assert!(matches!(err, TracError::Validation(_)));
        assert!(remote.commands().is_empty());
        assert!(remote.transfers().is_empty());
    }
}
