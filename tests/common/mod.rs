#![allow(dead_code)]

mod workspace;

pub use workspace::TestWorkspace;

use std::path::Path;
use std::process::{Command, Output};

/// Run the `markdown2html` binary with `args`, isolated from the user's config.
pub fn run_cli<I, S>(workspace: &TestWorkspace, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_markdown2html"))
        .args(args)
        .current_dir(workspace.root_path())
        .env("XDG_CONFIG_HOME", workspace.root_path().join("config"))
        .env_remove("HOME")
        .output()
        .expect("Failed to run markdown2html")
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
