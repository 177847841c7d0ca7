use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "app-utils")]
#[command(about = "Small application utilities: sums, secret lookup, magic numbers and settings.")]
pub struct Cli {
    /// Log this crate at DEBUG instead of INFO.
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the sum of two integers.
    Sum {
        #[arg(allow_hyphen_values = true)]
        a: i64,
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },

    /// Print the magic numbers.
    MagicNumbers {
        /// Print the numbers decoded as ASCII text.
        #[arg(short = 'd', long = "decode")]
        decode: bool,
    },

    /// Report whether SECRET_KEY is set; fails when it is not.
    SecretKey {
        /// Print the value instead of just "set".
        #[arg(long = "reveal")]
        reveal: bool,
    },

    /// Print the application settings with the secret masked.
    Settings,
}
