pub mod cli;
pub mod config;
pub mod constants;
pub mod logging;
pub mod magic;
pub mod math;
pub mod secret;

pub use logging::setup_logging;
pub use magic::get_magic_numbers;
pub use math::calculate_sum;
pub use secret::get_secret_key;
