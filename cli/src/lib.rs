pub mod args;
pub mod codec;
pub mod commands;
pub mod error;

pub use args::{DhkeArgs, InfoFlags, RsaArgs};
pub use commands::{run_dhke, run_rsa, DhkeOutput, RsaOutput};
pub use error::CliError;

/// Logs `RUST_LOG` at `warn` unless overridden.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
