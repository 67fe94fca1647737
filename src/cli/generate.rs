use anyhow::Result;
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::ProjectOpts;
use crate::indexer::RunSummary;

static SCANNING: Emoji<'_, '_> = Emoji("🔍 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

pub fn run_generate(project: &ProjectOpts, quiet: bool) -> Result<()> {
    let indexer = project.indexer()?;

    let pb = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(format!(
            "{}Scanning {}...",
            SCANNING,
            indexer.project_root().display()
        ));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    };

    let summary = indexer.run()?;
    pb.finish_and_clear();

    if !quiet {
        print_summary(&indexer, &summary);
    }

    Ok(())
}

fn print_summary(indexer: &crate::indexer::Autoindexer, summary: &RunSummary) {
    println!(
        "{}Updated {}",
        SUCCESS,
        style(indexer.index_path().display()).bold()
    );
    println!("  Modules: {}", style(summary.modules).green());
    println!("  Classes: {}", style(summary.classes).cyan());
    if !summary.changed {
        println!("  {}", style("Already up to date, nothing written").dim());
    }
}
