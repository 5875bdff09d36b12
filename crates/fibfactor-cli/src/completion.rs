//! Shell completion scripts.

use std::io;

use clap::Command;
use clap_complete::{generate, Shell};

/// Write the completion script for `shell`, named after the command's
/// binary (or the command itself when no binary name is set).
pub fn write_completion(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let name = cmd.get_bin_name().unwrap_or(cmd.get_name()).to_owned();
    generate(shell, cmd, name, out);
}
