use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("GIT_COMMIT_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "mautic-whitelabel")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Whitelabels a Mautic instance", long_about = None)]
pub struct Cli {
    /// Run as if started in this directory instead of the current one
    #[arg(short = 'd', long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}
