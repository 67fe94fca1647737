use anyhow::{Context, Result};
use console::{style, Emoji};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::sync::mpsc;
use std::time::Duration;

use crate::cli::ProjectOpts;

static WATCHING: Emoji<'_, '_> = Emoji("👀 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Regenerate the index once, then again on every batch of source changes.
pub fn run_watch(project: &ProjectOpts, quiet: bool) -> Result<()> {
    let indexer = project.indexer()?;

    let summary = indexer.run()?;
    if !quiet {
        println!(
            "{}Updated {} ({} modules, {} classes)",
            SUCCESS,
            style(indexer.index_path().display()).bold(),
            summary.modules,
            summary.classes
        );
        println!(
            "{}Watching {} for changes, Ctrl-C to stop",
            WATCHING,
            style(indexer.project_root().display()).bold()
        );
    }

    let (tx, rx) = mpsc::channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx).context("failed to create file watcher")?;
    debouncer
        .watcher()
        .watch(indexer.project_root(), RecursiveMode::Recursive)
        .with_context(|| {
            format!("failed to watch {}", indexer.project_root().display())
        })?;

    for batch in rx {
        let events = batch.context("file watcher failed")?;

        // Only Python source affects the generated region; writing the
        // index file itself must not retrigger a run.
        let relevant = events
            .iter()
            .any(|event| event.path.extension().and_then(|e| e.to_str()) == Some("py"));
        if !relevant {
            continue;
        }

        match indexer.run() {
            Ok(summary) if summary.changed => {
                if !quiet {
                    println!(
                        "{}Regenerated {} ({} modules, {} classes)",
                        SUCCESS,
                        style(indexer.index_path().display()).bold(),
                        summary.modules,
                        summary.classes
                    );
                }
            }
            Ok(_) => {}
            Err(err) => {
                eprintln!("{} {:#}", style("error:").red().bold(), err);
            }
        }
    }

    Ok(())
}
