mod collectors;
mod models;
mod util;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// Exit status when no path argument is supplied.
const EXIT_USAGE: i32 = 1;
/// Exit status when the open or the metadata query fails.
const EXIT_FAILURE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "stat", about = "Report filesystem metadata for a single file", version = "0.1")]
struct Cli {
    /// Path of the filesystem entry to inspect
    path: Option<PathBuf>,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let Some(path) = cli.path else {
        println!("Enter at pathname");
        std::process::exit(EXIT_USAGE);
    };

    if let Err(err) = run(&path) {
        eprintln!("stat: {:#}", err);
        std::process::exit(EXIT_FAILURE);
    }
}

fn run(path: &Path) -> Result<()> {
    let handle = collectors::file_status::open_entry(path)?;
    let status = collectors::file_status::query_status(&handle)?;
    print!("{}", util::report::generate(&status));
    Ok(())
}
