//! OS user and group management on the appliance.

use tracing::debug;

use tracadm_core::error::Result;
use tracadm_core::{trac_warning, ProjectDescriptor, ProjectType};
use tracadm_messages::{msg, MESSAGES};
use tracadm_remote::{Remote, RemoteCommand};

/// Creates the project user and group and hands the repository metadata
/// to the web server.
///
/// The ownership/permission fix is limited to git projects; how the other
/// backends store their metadata is not something we make assumptions
/// about.
pub(crate) fn add_project_user(remote: &dyn Remote, project: &ProjectDescriptor) -> Result<()> {
    debug!(project = %project.name(), "creating project user and group");

    remote.run(&RemoteCommand::new("adduser").arg(project.name()))?;
    remote.run(&RemoteCommand::new("groupadd").arg(project.group()))?;
    remote.run(
        &RemoteCommand::new("usermod")
            .arg("-a")
            .arg("-G")
            .arg(project.group())
            .arg(project.name()),
    )?;

    if project.vcs() == ProjectType::Git {
        remote.run(
            &RemoteCommand::new("chown")
                .arg("-R")
                .arg(format!("www-data:{}", project.group()))
                .arg(project.vcs_meta_dir()),
        )?;
        remote.run(
            &RemoteCommand::new("chmod")
                .arg("-R")
                .arg("771")
                .arg(project.vcs_meta_dir()),
        )?;
    }

    Ok(())
}

/// Deletes the project user and group.
///
/// Failures are downgraded to warnings: a delete-intent operation must not
/// block on an already-gone user or group.
pub fn handle_remove_user_and_group(
    remote: &dyn Remote,
    username: &str,
    project_name: &str,
) -> Result<()> {
    debug!(user = %username, project = %project_name, "removing project user and group");

    if let Err(e) = remote.run(&RemoteCommand::new("deluser").arg(username)) {
        trac_warning!(
            "{}",
            msg!(
                MESSAGES.remove.user_delete_failed,
                name = username,
                error = e.to_string()
            )
        );
    }

    let group = format!("project-{}", project_name);
    if let Err(e) = remote.run(&RemoteCommand::new("groupdel").arg(&group)) {
        trac_warning!(
            "{}",
            msg!(
                MESSAGES.remove.group_delete_failed,
                group = &group,
                error = e.to_string()
            )
        );
    }

    Ok(())
}
