//! Build script for relink-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("relink")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize paths and create relocatable relative symlinks")
        .long_about(
            "Path normalization across / and \\ conventions, shortest relative paths, \
             relative symlinks that survive relocation, and directory purging",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Canonical separator for printed paths (/, \\, slash, backslash, native)")
                .value_name("SEP")
                .global(true)
                .env("RELINK_SEPARATOR"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the normalized form of one or more paths")
                .long_about("Convert separators, drop empty and . segments, and collapse .."),
            Command::new("is-absolute")
                .about("Exit 0 if a path is absolute, 1 otherwise")
                .long_about("A drive or scheme prefix alone does not make a path absolute"),
            Command::new("shortest-path")
                .about("Print the shortest relative path between two absolute paths")
                .long_about("Express TO relative to the directory of FROM"),
            Command::new("link")
                .about("Create a symlink that stores a relative path to its target")
                .long_about("The link keeps working when a common ancestor is moved"),
            Command::new("empty")
                .about("Remove everything inside a directory")
                .long_about("Children are removed before parents; symlinks are never followed"),
            Command::new("ensure-dir")
                .about("Create a directory and its parents if missing")
                .long_about("Fails when a non-directory occupies the path"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a relink configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("relink.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
