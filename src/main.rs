use anyhow::{Result, anyhow};
use app_utils::cli::{Cli, Command};
use app_utils::config::Settings;
use app_utils::constants::SECRET_KEY_ENV;
use app_utils::{logging, magic, math, secret};
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging_with(cli.verbose);
    debug!("running {:?}", cli.command);

    match cli.command {
        Command::Sum { a, b } => {
            let total = math::checked_sum(a, b)
                .ok_or_else(|| anyhow!("{a} + {b} overflows a 64-bit integer"))?;
            println!("{total}");
        }
        Command::MagicNumbers { decode } => {
            let numbers = magic::get_magic_numbers();
            if decode {
                let text = magic::decode_codes(numbers)
                    .ok_or_else(|| anyhow!("magic numbers are not printable ASCII"))?;
                println!("{text}");
            } else {
                let joined = numbers
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                println!("{joined}");
            }
        }
        Command::SecretKey { reveal } => {
            let key = secret::get_secret_key()
                .ok_or_else(|| anyhow!("{SECRET_KEY_ENV} is not set"))?;
            if reveal {
                println!("{key}");
            } else {
                println!("set");
            }
        }
        Command::Settings => {
            println!("{}", Settings::from_env());
        }
    }

    Ok(())
}
