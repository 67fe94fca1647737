use anyhow::Result;
use console::{style, Emoji};

use crate::cli::ProjectOpts;

static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static STALE: Emoji<'_, '_> = Emoji("⚠️  ", "");

/// Returns true when the index file matches what generation would produce.
pub fn run_check(project: &ProjectOpts) -> Result<bool> {
    let indexer = project.indexer()?;
    let status = indexer.check()?;

    if status.up_to_date {
        println!(
            "{}{} is up to date ({} modules, {} classes)",
            SUCCESS,
            style(indexer.index_path().display()).bold(),
            status.modules,
            status.classes
        );
    } else {
        println!(
            "{}{} is out of date, run `sphinx-autoindex generate` to refresh it",
            STALE,
            style(indexer.index_path().display()).bold()
        );
    }

    Ok(status.up_to_date)
}
