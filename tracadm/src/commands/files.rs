//! Config-file patching: the git hook config and the project's trac.ini.

use std::fs;

use tracing::debug;

use tracadm_config::{ini, Settings};
use tracadm_core::error::{Result, TracError};
use tracadm_core::temp_dir::create_temp_file_in;
use tracadm_core::{trac_println, ProjectDescriptor, ProjectType};
use tracadm_messages::{msg, MESSAGES};
use tracadm_remote::Remote;

/// Collateral fragment spliced into the `[components]` section.
pub const COMPONENTS_CHUNK: &str = "trac.ini.components-chunk.txt";

/// Collateral fragment appended as the `[account-manager]` section.
pub const ACCOUNT_MANAGER_CHUNK: &str = "trac.ini.account-manager-chunk.txt";

/// Two-line marker that allows pushing to the checked-out branch.
const HOOK_MARKER: &str = "[receive]\ndenyCurrentBranch = false";

/// Applies both config edits for a project.
pub fn handle_update_files(
    remote: &dyn Remote,
    settings: &Settings,
    project: &ProjectDescriptor,
) -> Result<()> {
    if project.vcs() == ProjectType::Git {
        update_hook_config(remote, project)?;
    }

    update_trac_ini(remote, settings, project)?;

    trac_println!("{}", MESSAGES.patch.all_files_done);
    Ok(())
}

/// Enables pushing to the checked-out branch in the repository's
/// `.git/config`. Idempotent: an already-patched file is left untouched.
fn update_hook_config(remote: &dyn Remote, project: &ProjectDescriptor) -> Result<()> {
    let target = project.hook_config();

    if !remote.exists(&target)? {
        trac_println!("{}", MESSAGES.patch.hook_not_found);
        return Ok(());
    }

    trac_println!("{}", MESSAGES.patch.hook_updating);
    if remote.contains(&target, HOOK_MARKER)? {
        trac_println!("{}", MESSAGES.patch.hook_already_updated);
    } else {
        remote.append(&target, "[receive]\ndenyCurrentBranch = false\n")?;
        trac_println!("{}", MESSAGES.patch.hook_updated);
    }

    Ok(())
}

/// Fetch -> rewrite -> push round trip for the project's trac.ini.
///
/// The pre-rewrite content is pushed back as `<target>.bak` alongside the
/// rewritten file.
fn update_trac_ini(
    remote: &dyn Remote,
    settings: &Settings,
    project: &ProjectDescriptor,
) -> Result<()> {
    let target = project.trac_ini();

    if !remote.exists(&target)? {
        trac_println!("{}", msg!(MESSAGES.patch.ini_not_found, path = &target));
        return Ok(());
    }

    trac_println!("{}", MESSAGES.patch.ini_updating);

    let components_fragment = read_collateral(settings, COMPONENTS_CHUNK)?;
    let account_manager_fragment = read_collateral(settings, ACCOUNT_MANAGER_CHUNK)?;

    let local = create_temp_file_in(&settings.tmp_dir, "trac.ini.", ".tmp")?;
    remote.get(&target, local.path())?;
    let original = fs::read_to_string(local.path())?;

    let backup = create_temp_file_in(&settings.tmp_dir, "trac.ini.", ".bak")?;
    fs::write(backup.path(), &original)?;

    let outcome = ini::patch_trac_ini(&original, &components_fragment, &account_manager_fragment);
    debug!(
        components_inserted = outcome.components_inserted,
        account_manager_added = outcome.account_manager_added,
        "rewrote trac.ini working copy"
    );

    if outcome.components_inserted {
        trac_println!("{}", MESSAGES.patch.components_updated);
    }
    if outcome.account_manager_added {
        trac_println!("{}", MESSAGES.patch.account_manager_updated);
    } else {
        trac_println!("{}", MESSAGES.patch.account_manager_exists);
    }

    fs::write(local.path(), &outcome.rewritten)?;
    remote.put(local.path(), &target)?;
    remote.put(backup.path(), &format!("{}.bak", target))?;

    trac_println!("{}", MESSAGES.patch.ini_uploaded);
    Ok(())
}

fn read_collateral(settings: &Settings, file_name: &str) -> Result<String> {
    let path = settings.collateral_path(file_name);
    fs::read_to_string(&path).map_err(|e| {
        TracError::Filesystem(format!(
            "unable to read collateral file {}: {}",
            path.display(),
            e
        ))
    })
}
