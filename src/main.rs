use std::process::ExitCode;

use acctstore::shell::ShellConfig;
use acctstore::{AccountStore, AppConfig, Shell, init_logging};
use anyhow::Result;

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(dir) => AppConfig::with_data_dir(dir),
        None => AppConfig::default_location()?,
    };
    config.ensure_data_dir()?;
    init_logging(&config.log)?;

    let mut store = AccountStore::new(config.storage());
    store.load_accounts()?;

    let shell = Shell::with_config(ShellConfig {
        history: config.history.clone(),
        show_welcome: true,
    });
    shell.run(&mut store)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
