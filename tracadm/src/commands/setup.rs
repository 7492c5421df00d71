//! Project creation on the Trac appliance.

use tracing::debug;

use tracadm_config::Settings;
use tracadm_core::error::Result;
use tracadm_core::{trac_println, trac_progress, trac_success, ProjectDescriptor};
use tracadm_messages::{msg, MESSAGES};
use tracadm_remote::{Remote, RemoteCommand};

use super::{files, users};

/// Runs the full creation sequence.
///
/// Any remote failure aborts the remaining steps. There is no rollback:
/// a partially-created project has to be cleaned up with `remove`.
pub fn handle_setup(
    remote: &dyn Remote,
    settings: &Settings,
    project: &ProjectDescriptor,
) -> Result<()> {
    trac_println!(
        "{}",
        msg!(
            MESSAGES.setup.header,
            name = project.name(),
            vcs = project.vcs().as_str(),
            host = remote.host()
        )
    );
    debug!(project = %project.name(), vcs = %project.vcs(), "starting project setup");

    trac_progress!("{}", MESSAGES.setup.init_project);
    remote.run(
        &RemoteCommand::new("trac-initproject")
            .arg(project.vcs().as_str())
            .arg(project.name()),
    )?;

    // New Trac projects grant authenticated/anonymous users broad access;
    // strip both so the project group is the only way in.
    trac_progress!("{}", MESSAGES.setup.strip_permissions);
    let trac_dir = format!("{}/", project.trac_dir());
    for role in ["authenticated", "anonymous"] {
        remote.run(
            &RemoteCommand::new("trac-admin")
                .arg(&trac_dir)
                .arg("permission")
                .arg("remove")
                .arg(role)
                .arg("*"),
        )?;
    }

    users::add_project_user(remote, project)?;
    trac_println!(
        "{}",
        msg!(MESSAGES.setup.user_created, name = project.name())
    );

    files::handle_update_files(remote, settings, project)?;

    trac_progress!("{}", MESSAGES.setup.restarting);
    remote.run(&RemoteCommand::new("service").arg("apache2").arg("restart"))?;

    trac_println!("{}", MESSAGES.setup.separator);
    trac_success!("{}", MESSAGES.setup.success);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::fs;
    use tracadm_remote::mock::MockRemote;

    fn test_settings(collateral: &tempfile::TempDir, tmp: &tempfile::TempDir) -> Settings {
        fs::write(
            collateral.path().join(files::COMPONENTS_CHUNK),
            "tracopt.versioncontrol.git.* = enabled\n",
        )
        .unwrap();
        fs::write(
            collateral.path().join(files::ACCOUNT_MANAGER_CHUNK),
            "password_store = SessionStore\n",
        )
        .unwrap();

        let mut hosts = IndexMap::new();
        hosts.insert("prod".to_string(), "appliance".to_string());
        Settings {
            hosts,
            collateral_dir: collateral.path().to_path_buf(),
            tmp_dir: tmp.path().to_path_buf(),
        }
    }

    #[test]
    fn test_setup_issues_ordered_command_sequence() {
        let collateral = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let settings = test_settings(&collateral, &tmp);

        let project = ProjectDescriptor::new("website", "git").unwrap();
        let remote = MockRemote::new()
            .with_file(
                "/var/local/lib/trac/git-website/conf/trac.ini",
                "[components]\nx = 1\n",
            )
            .with_file(
                "/srv/repos/git/website/.git/config",
                "[core]\n\tbare = false\n",
            );

        handle_setup(&remote, &settings, &project).unwrap();

        assert_eq!(
            remote.commands(),
            vec![
                "trac-initproject git website",
                "trac-admin /var/local/lib/trac/git-website/ permission remove authenticated '*'",
                "trac-admin /var/local/lib/trac/git-website/ permission remove anonymous '*'",
                "adduser website",
                "groupadd project-website",
                "usermod -a -G project-website website",
                "chown -R www-data:project-website /srv/repos/git/website/.git",
                "chmod -R 771 /srv/repos/git/website/.git",
                "service apache2 restart",
            ]
        );

        // The hook config got its marker appended exactly once.
        let hook = remote.file("/srv/repos/git/website/.git/config").unwrap();
        assert!(hook.contains("[receive]\ndenyCurrentBranch = false"));
    }

    #[test]
    fn test_setup_aborts_on_first_failure() {
        let collateral = tempfile::tempdir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        let settings = test_settings(&collateral, &tmp);

        let project = ProjectDescriptor::new("website", "git").unwrap();
        let remote = MockRemote::new().failing_program("trac-initproject");

        assert!(handle_setup(&remote, &settings, &project).is_err());
        // Nothing after the failed step runs.
        assert_eq!(remote.commands(), vec!["trac-initproject git website"]);
    }
}
