mod display_change;
mod find_source_files;
mod get_mcmigrate_config;
mod get_relative_path;
mod resolve_root;

pub use display_change::{display_change, display_occurrence};
pub use find_source_files::find_source_files;
pub use get_mcmigrate_config::{get_mcmigrate_config, get_mcmigrate_dir};
pub use get_relative_path::get_relative_path;
pub use resolve_root::{find_git_work_dir, resolve_root};
