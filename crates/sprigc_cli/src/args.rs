//! the args for running sprigc

use sprig_cli_common::LoggingArgs;
use std::path::PathBuf;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Compiles a sprig definition into javascript")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The sprig source file to compile
    #[clap(default_value = "example", value_name = "SOURCE", value_hint = clap::ValueHint::FilePath)]
    pub source: PathBuf,
    /// Write the javascript program to this file instead of stdout
    #[clap(short = 'o', long = "output", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}
