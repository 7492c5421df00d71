//! Project identity and remote path layout.
//!
//! A `ProjectDescriptor` is the validated (name, backend type) pair that
//! identifies one Trac project on the appliance. Every remote path the
//! lifecycle commands touch is derived here, so the layout lives in one
//! place.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TracError};
use crate::validation::{validate_project_name, PROJECT_TYPES};

/// The version-control backend behind a project.
///
/// Only `git` receives hook-file patching; the other backends are
/// initialized and torn down but their repository internals are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectType {
    Git,
    Svn,
    Bzr,
    Hg,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Git => "git",
            ProjectType::Svn => "svn",
            ProjectType::Bzr => "bzr",
            ProjectType::Hg => "hg",
        }
    }
}

impl FromStr for ProjectType {
    type Err = TracError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git" => Ok(ProjectType::Git),
            "svn" => Ok(ProjectType::Svn),
            "bzr" => Ok(ProjectType::Bzr),
            "hg" => Ok(ProjectType::Hg),
            _ => Err(TracError::Validation(format!(
                "Valid project types are: {}",
                PROJECT_TYPES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated (name, type) pair plus the appliance path layout derived from it.
#[derive(Debug, Clone)]
pub struct ProjectDescriptor {
    name: String,
    vcs: ProjectType,
}

impl ProjectDescriptor {
    /// Validates the raw name and type strings and builds the descriptor.
    pub fn new(name: &str, project_type: &str) -> Result<Self> {
        validate_project_name(name)?;
        let vcs = ProjectType::from_str(project_type)?;
        Ok(Self {
            name: name.to_string(),
            vcs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vcs(&self) -> ProjectType {
        self.vcs
    }

    /// The `<type>-<name>` slug used by the Trac appliance layout.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.vcs, self.name)
    }

    /// OS group owning the repository: `project-<name>`.
    pub fn group(&self) -> String {
        format!("project-{}", self.name)
    }

    /// Project data directory: `/var/local/lib/trac/<type>-<name>`.
    pub fn trac_dir(&self) -> String {
        format!("/var/local/lib/trac/{}", self.slug())
    }

    /// Main application config: `<trac_dir>/conf/trac.ini`.
    pub fn trac_ini(&self) -> String {
        format!("{}/conf/trac.ini", self.trac_dir())
    }

    /// Per-project config file: `/etc/trac/<type>-<name>.ini`.
    pub fn etc_ini(&self) -> String {
        format!("/etc/trac/{}.ini", self.slug())
    }

    /// Source repository directory: `/srv/repos/<type>/<name>`.
    pub fn repo_dir(&self) -> String {
        format!("/srv/repos/{}/{}", self.vcs, self.name)
    }

    /// Version-control metadata directory inside the repository (`.git`, ...).
    pub fn vcs_meta_dir(&self) -> String {
        format!("{}/.{}", self.repo_dir(), self.vcs)
    }

    /// The git hook config file, meaningful for git projects only.
    pub fn hook_config(&self) -> String {
        format!("{}/.git/config", self.repo_dir())
    }
}
