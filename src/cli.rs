use crate::archive;
use crate::error::PackageError;
use crate::target::Target;
use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "zip-release")]
#[command(about = "Package built binaries into versioned, platform-qualified zip archives")]
pub struct Cli {
    /// Binary names to package, looked up as <BUILD_DIR>/<PREFIX>_<GOOS>_<GOARCH>
    #[arg(long, required = true, num_args = 1.., value_parser = NonEmptyStringValueParser::new())]
    pub prefix: Vec<String>,

    /// Destination folder for archives
    #[arg(long, default_value = "release")]
    pub destination: PathBuf,

    /// Folder holding the built binaries
    #[arg(long, default_value = "build")]
    pub build_dir: PathBuf,

    /// Version number for the archives, e.g.: v1.0.0
    #[arg(long, env = "VERSION", value_parser = NonEmptyStringValueParser::new())]
    pub version: String,

    /// Target operating system (GOOS)
    #[arg(long, env = "GOOS", value_parser = NonEmptyStringValueParser::new())]
    pub goos: String,

    /// Target architecture (GOARCH)
    #[arg(long, env = "GOARCH", value_parser = NonEmptyStringValueParser::new())]
    pub goarch: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn target(&self) -> Target {
        Target::new(&self.version, &self.goos, &self.goarch)
    }

    /// Package every prefix in order, printing each archive path as it is written.
    ///
    /// Stops at the first failure.
    pub fn run(&self) -> Result<Vec<PathBuf>, PackageError> {
        let target = self.target();
        let mut outputs = Vec::with_capacity(self.prefix.len());

        for prefix in &self.prefix {
            let output =
                archive::package_prefix(&self.build_dir, &self.destination, prefix, &target)?;
            println!("{}", output.display());
            outputs.push(output);
        }

        Ok(outputs)
    }
}
