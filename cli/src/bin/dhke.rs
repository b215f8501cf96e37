use std::process::ExitCode;

use clap::Parser;
use crypto_cli::{init_logging, run_dhke, DhkeArgs};

fn main() -> ExitCode {
    init_logging();
    let args = DhkeArgs::parse();

    match run_dhke(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("dhke: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
