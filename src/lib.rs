pub mod config;
pub mod version;

pub use config::CheckerConfig;
pub use version::checker::{ProviderKind, UpdateCheck, VersionChecker};
pub use version::error::CheckError;
