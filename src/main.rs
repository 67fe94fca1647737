use anyhow::Result;
use clap::Parser;
use console::style;
use std::process;

use sphinx_autoindex::cli::{run_check, run_generate, run_list, run_watch, Args, Command};

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{} {:#}", style("error:").red().bold(), err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate { project, quiet } => run_generate(&project, quiet),
        Command::Check { project } => {
            if !run_check(&project)? {
                process::exit(1);
            }
            Ok(())
        }
        Command::List { project, format } => run_list(&project, format),
        Command::Watch { project, quiet } => run_watch(&project, quiet),
    }
}
