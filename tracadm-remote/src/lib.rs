//! Remote execution and file transfer for the tracadm CLI.
//!
//! The `Remote` trait is the seam between the lifecycle commands and the
//! appliance: everything a command does remotely goes through it, so
//! tests can swap in `MockRemote` and assert on the issued sequence.

use std::path::Path;

use tracadm_core::error::Result;

pub mod command;
pub mod ssh;

// When the `test-helpers` feature is enabled, include the mock remote.
#[cfg(feature = "test-helpers")]
pub mod mock;

pub use command::RemoteCommand;
pub use ssh::SshRemote;

/// The contract the lifecycle commands consume.
///
/// One fixed host per instance; every call is a blocking request/response
/// round trip with no retries. A failed call surfaces whatever diagnostic
/// the transport provides.
pub trait Remote {
    /// The ssh destination this remote is bound to.
    fn host(&self) -> &str;

    /// Run a command on the remote host, streaming its output to the log.
    fn run(&self, command: &RemoteCommand) -> Result<()>;

    /// Whether a remote path exists (file or directory).
    fn exists(&self, path: &str) -> Result<bool>;

    /// Append text verbatim to a remote file.
    fn append(&self, path: &str, text: &str) -> Result<()>;

    /// Whether a remote file contains the given literal text.
    fn contains(&self, path: &str, needle: &str) -> Result<bool>;

    /// Fetch a remote file to a local path.
    fn get(&self, remote_path: &str, local_path: &Path) -> Result<()>;

    /// Push a local file to a remote path, overwriting it.
    fn put(&self, local_path: &Path, remote_path: &str) -> Result<()>;
}

/// Injected confirmation capability gating destructive actions.
///
/// The terminal implementation prompts on stdin; tests supply scripted
/// answers so no terminal needs simulating.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}
