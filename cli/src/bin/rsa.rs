use std::process::ExitCode;

use clap::Parser;
use crypto_cli::{init_logging, run_rsa, RsaArgs};

fn main() -> ExitCode {
    init_logging();
    let args = RsaArgs::parse();

    match run_rsa(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("rsa: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
