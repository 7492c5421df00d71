//! In-memory `Remote` and `Confirm` doubles for command-sequence tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tracadm_core::error::{Result, TracError};

use crate::{Confirm, Remote, RemoteCommand};

/// Records every call and serves scripted filesystem answers.
#[derive(Debug, Default)]
pub struct MockRemote {
    commands: Mutex<Vec<String>>,
    transfers: Mutex<Vec<String>>,
    files: Mutex<HashMap<String, String>>,
    dirs: Mutex<HashSet<String>>,
    failing_programs: Mutex<HashSet<String>>,
}

impl MockRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a remote file with the given content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
        self
    }

    /// Scripts a remote directory as existing.
    pub fn with_dir(self, path: &str) -> Self {
        self.dirs.lock().unwrap().insert(path.to_string());
        self
    }

    /// Scripts every `run` of the given program to fail.
    pub fn failing_program(self, program: &str) -> Self {
        self.failing_programs
            .lock()
            .unwrap()
            .insert(program.to_string());
        self
    }

    /// Rendered command lines issued through `run`, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    /// `get`/`put` transfers, rendered as `get remote` / `put remote`.
    pub fn transfers(&self) -> Vec<String> {
        self.transfers.lock().unwrap().clone()
    }

    /// Current content of a scripted remote file.
    pub fn file(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }
}

impl Remote for MockRemote {
    fn host(&self) -> &str {
        "mock"
    }

    fn run(&self, command: &RemoteCommand) -> Result<()> {
        self.commands.lock().unwrap().push(command.rendered());
        if self
            .failing_programs
            .lock()
            .unwrap()
            .contains(command.program())
        {
            return Err(TracError::Command(format!(
                "mock failure: {}",
                command.rendered()
            )));
        }
        Ok(())
    }

    fn exists(&self, path: &str) -> Result<bool> {
        Ok(self.files.lock().unwrap().contains_key(path)
            || self.dirs.lock().unwrap().contains(path))
    }

    fn append(&self, path: &str, text: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_str(text);
        Ok(())
    }

    fn contains(&self, path: &str, needle: &str) -> Result<bool> {
        match self.files.lock().unwrap().get(path) {
            Some(content) => Ok(content.contains(needle)),
            None => Err(TracError::Remote(format!("mock: no such file {}", path))),
        }
    }

    fn get(&self, remote_path: &str, local_path: &Path) -> Result<()> {
        self.transfers
            .lock()
            .unwrap()
            .push(format!("get {}", remote_path));
        let files = self.files.lock().unwrap();
        let content = files
            .get(remote_path)
            .ok_or_else(|| TracError::Remote(format!("mock: no such file {}", remote_path)))?;
        fs::write(local_path, content)?;
        Ok(())
    }

    fn put(&self, local_path: &Path, remote_path: &str) -> Result<()> {
        self.transfers
            .lock()
            .unwrap()
            .push(format!("put {}", remote_path));
        let content = fs::read_to_string(local_path)?;
        self.files
            .lock()
            .unwrap()
            .insert(remote_path.to_string(), content);
        Ok(())
    }
}

/// `Confirm` double serving a fixed queue of answers.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts seen so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| {
            TracError::Cancelled("scripted confirmation ran out of answers".to_string())
        })
    }
}
