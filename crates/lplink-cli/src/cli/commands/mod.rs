//! CLI command handlers. Each command is in its own file.

mod init_config;
mod list;
mod run;

pub use init_config::run_init_config;
pub use list::run_list;
pub use run::run_replace;
