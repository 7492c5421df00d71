//! ssh/scp-backed `Remote` implementation.
//!
//! Shells out to the operator's `ssh` and `scp` binaries so `.ssh/config`
//! aliases, agents and jump hosts all work unchanged. Every call is
//! blocking; a non-zero exit aborts the calling operation.

use std::io::{BufRead, BufReader};
use std::path::Path;

use duct::cmd;
use tracing::{debug, info};
use which::which;

use tracadm_core::error::{Result, TracError};

use crate::command::{quote, RemoteCommand};
use crate::Remote;

pub struct SshRemote {
    host: String,
}

impl SshRemote {
    /// Binds a remote to one ssh destination, checking up front that the
    /// ssh/scp binaries are on PATH.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        for tool in ["ssh", "scp"] {
            which(tool)
                .map_err(|_| TracError::Dependency(format!("`{}` not found in PATH", tool)))?;
        }
        Ok(Self { host: host.into() })
    }

    fn run_line(&self, line: &str) -> Result<()> {
        debug!(host = %self.host, command = %line, "running remote command");
        let reader = cmd("ssh", [self.host.as_str(), line])
            .stderr_to_stdout()
            .reader()?;

        for output_line in BufReader::new(reader).lines() {
            let output_line = output_line.map_err(|e| {
                TracError::Command(format!("`{}` on {}: {}", line, self.host, e))
            })?;
            info!("{}", output_line);
        }
        Ok(())
    }
}

impl Remote for SshRemote {
    fn host(&self) -> &str {
        &self.host
    }

    fn run(&self, command: &RemoteCommand) -> Result<()> {
        self.run_line(&command.rendered())
    }

    fn exists(&self, path: &str) -> Result<bool> {
        let check = format!("test -e {}", quote(path));
        let output = cmd("ssh", [self.host.as_str(), check.as_str()])
            .unchecked()
            .run()
            .map_err(|e| TracError::Remote(format!("existence check on {}: {}", self.host, e)))?;
        Ok(output.status.success())
    }

    fn append(&self, path: &str, text: &str) -> Result<()> {
        let sink = format!("cat >> {}", quote(path));
        cmd("ssh", [self.host.as_str(), sink.as_str()])
            .stdin_bytes(text.as_bytes().to_vec())
            .run()
            .map_err(|e| {
                TracError::Remote(format!("append to {} on {}: {}", path, self.host, e))
            })?;
        Ok(())
    }

    fn contains(&self, path: &str, needle: &str) -> Result<bool> {
        let dump = format!("cat {}", quote(path));
        let content = cmd("ssh", [self.host.as_str(), dump.as_str()])
            .read()
            .map_err(|e| TracError::Remote(format!("read of {} on {}: {}", path, self.host, e)))?;
        Ok(content.contains(needle))
    }

    fn get(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        debug!(host = %self.host, remote = %remote_path, "fetching remote file");
        cmd(
            "scp",
            [
                format!("{}:{}", self.host, remote_path),
                local_path.to_string_lossy().into_owned(),
            ],
        )
        .run()
        .map_err(|e| TracError::Remote(format!("fetch of {}: {}", remote_path, e)))?;
        Ok(())
    }

    fn put(&self, local_path: &Path, remote_path: &str) -> Result<()> {
        debug!(host = %self.host, remote = %remote_path, "pushing local file");
        cmd(
            "scp",
            [
                local_path.to_string_lossy().into_owned(),
                format!("{}:{}", self.host, remote_path),
            ],
        )
        .run()
        .map_err(|e| TracError::Remote(format!("push to {}: {}", remote_path, e)))?;
        Ok(())
    }
}
