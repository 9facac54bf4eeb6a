//! The API facade: the single entry point the CLI talks to.
//!
//! Holds what the commands need from the outside world (the project location
//! and a snapshot of the process environment) so the commands themselves
//! never read globals.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::fragment::{FragmentReplacer, RegexFragmentReplacer};
use crate::paths::ProjectLocation;
use std::collections::HashMap;

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct WhitelabelApi<R: FragmentReplacer = RegexFragmentReplacer> {
    project: ProjectLocation,
    process_env: HashMap<String, String>,
    replacer: R,
}

impl WhitelabelApi<RegexFragmentReplacer> {
    pub fn new(project: ProjectLocation, process_env: HashMap<String, String>) -> Self {
        Self::with_replacer(project, process_env, RegexFragmentReplacer)
    }
}

impl<R: FragmentReplacer> WhitelabelApi<R> {
    pub fn with_replacer(
        project: ProjectLocation,
        process_env: HashMap<String, String>,
        replacer: R,
    ) -> Self {
        Self {
            project,
            process_env,
            replacer,
        }
    }

    /// Messages gathered before a failure stay in `result`.
    pub fn whitelabel(&self, result: &mut CmdResult) -> Result<()> {
        commands::whitelabel::run(&self.project, &self.process_env, &self.replacer, result)
    }
}
