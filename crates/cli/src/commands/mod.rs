mod check;
mod config;
mod migrate;

pub use check::CheckArgs;
pub use check::handle_check;
pub use config::ConfigArgs;
pub use config::handle_config;
pub use migrate::MigrateArgs;
pub use migrate::handle_migrate;
pub use migrate::handle_migrate_with_prompter;
