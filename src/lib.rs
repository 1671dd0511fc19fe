pub mod archive;
pub mod cli;
mod error;
pub mod target;

pub use archive::{ensure_destination, package, package_prefix};
pub use error::PackageError;
pub use target::Target;
