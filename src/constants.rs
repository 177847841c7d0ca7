// Centralized magic numbers & default values
pub const MAGIC_NUMBERS: [u32; 4] = [83, 67, 65, 78];
pub const VALIDATION_CODES: [u32; 4] = [68, 65, 84, 65];

pub const SECRET_KEY_ENV: &str = "SECRET_KEY";
pub const RUST_LOG_ENV: &str = "RUST_LOG";

pub const DEFAULT_APP_NAME: &str = "DataProcessor";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_PORT: u16 = 8080;
