//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print normalized paths
//! - `is_absolute`: Test whether a path is absolute
//! - `shortest_path`: Shortest relative path between two paths
//! - `link`: Create a relative symlink
//! - `empty`: Empty a directory
//! - `ensure_dir`: Create a directory if missing
//! - `validate`: Validate configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod empty;
pub mod ensure_dir;
pub mod is_absolute;
pub mod link;
pub mod normalize;
pub mod shortest_path;
pub mod validate;

pub use completions::CompletionsCommand;
pub use empty::EmptyCommand;
pub use ensure_dir::EnsureDirCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use link::LinkCommand;
pub use normalize::NormalizeCommand;
pub use shortest_path::ShortestPathCommand;
pub use validate::ValidateCommand;
