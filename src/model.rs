mod claims;
pub use self::claims::*;
mod config;
pub use self::config::*;
