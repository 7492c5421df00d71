//! Project teardown on the Trac appliance.
//!
//! Remove is safe to re-run: artifacts that are already gone are reported
//! and skipped, and user/group deletion failures are warnings.

use tracing::debug;

use tracadm_core::error::Result;
use tracadm_core::{trac_println, ProjectDescriptor};
use tracadm_messages::{msg, MESSAGES};
use tracadm_remote::{Confirm, Remote, RemoteCommand};

use super::users;

enum Artifact {
    Directory,
    File,
}

/// Runs the removal sequence behind two confirmation gates.
pub fn handle_remove(
    remote: &dyn Remote,
    confirm: &mut dyn Confirm,
    project: &ProjectDescriptor,
) -> Result<()> {
    let prompt = msg!(
        MESSAGES.remove.confirm,
        name = project.name(),
        vcs = project.vcs().as_str()
    );
    if !confirm.confirm(&prompt)? {
        trac_println!("{}", MESSAGES.remove.cancelled);
        return Ok(());
    }

    debug!(project = %project.name(), "removing project artifacts");

    remove_artifact(remote, Artifact::Directory, &project.trac_dir())?;
    remove_artifact(remote, Artifact::File, &project.etc_ini())?;
    remove_artifact(remote, Artifact::Directory, &project.repo_dir())?;

    if confirm.confirm(MESSAGES.remove.confirm_user)? {
        users::handle_remove_user_and_group(remote, project.name(), project.name())?;
    }

    trac_println!("{}", msg!(MESSAGES.remove.done, name = project.name()));
    Ok(())
}

/// Deletes one remote artifact if it exists; a missing artifact is a
/// notice, never an error.
fn remove_artifact(remote: &dyn Remote, kind: Artifact, path: &str) -> Result<()> {
    let (deleting, not_found) = match kind {
        Artifact::Directory => (MESSAGES.remove.deleting_dir, MESSAGES.remove.dir_not_found),
        Artifact::File => (MESSAGES.remove.deleting_file, MESSAGES.remove.file_not_found),
    };

    if remote.exists(path)? {
        trac_println!("{}", msg!(deleting, path = path));
        remote.run(&RemoteCommand::new("rm").arg("-rf").arg(path))?;
    } else {
        trac_println!("{}", msg!(not_found, path = path));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracadm_remote::mock::{MockRemote, ScriptedConfirm};

    fn git_project() -> ProjectDescriptor {
        ProjectDescriptor::new("website", "git").unwrap()
    }

    #[test]
    fn test_declined_confirmation_issues_no_commands() {
        let remote = MockRemote::new().with_dir("/var/local/lib/trac/git-website");
        let mut confirm = ScriptedConfirm::new([false]);

        handle_remove(&remote, &mut confirm, &git_project()).unwrap();

        assert!(remote.commands().is_empty());
        assert!(confirm.prompts()[0].contains("website"));
    }

    #[test]
    fn test_remove_deletes_existing_artifacts_in_order() {
        let remote = MockRemote::new()
            .with_dir("/var/local/lib/trac/git-website")
            .with_file("/etc/trac/git-website.ini", "[project]\n")
            .with_dir("/srv/repos/git/website");
        let mut confirm = ScriptedConfirm::new([true, false]);

        handle_remove(&remote, &mut confirm, &git_project()).unwrap();

        assert_eq!(
            remote.commands(),
            vec![
                "rm -rf /var/local/lib/trac/git-website",
                "rm -rf /etc/trac/git-website.ini",
                "rm -rf /srv/repos/git/website",
            ]
        );
    }

    #[test]
    fn test_remove_with_nothing_present_is_not_an_error() {
        let remote = MockRemote::new();
        let mut confirm = ScriptedConfirm::new([true, false]);

        handle_remove(&remote, &mut confirm, &git_project()).unwrap();

        // Three "not found" notices, no deletions, no error.
        assert!(remote.commands().is_empty());
    }

    #[test]
    fn test_user_deletion_failure_does_not_fail_remove() {
        let remote = MockRemote::new().failing_program("deluser");
        let mut confirm = ScriptedConfirm::new([true, true]);

        handle_remove(&remote, &mut confirm, &git_project()).unwrap();

        // Group deletion is still attempted after the user failure.
        assert_eq!(
            remote.commands(),
            vec!["deluser website", "groupdel project-website"]
        );
    }

    #[test]
    fn test_user_removal_skipped_when_declined() {
        let remote = MockRemote::new().with_dir("/srv/repos/git/website");
        let mut confirm = ScriptedConfirm::new([true, false]);

        handle_remove(&remote, &mut confirm, &git_project()).unwrap();

        assert_eq!(remote.commands(), vec!["rm -rf /srv/repos/git/website"]);
    }
}
