use anyhow::Result;
use console::style;

use crate::cli::{ListFormat, ProjectOpts};
use crate::emit::JsonOutput;

pub fn run_list(project: &ProjectOpts, format: ListFormat) -> Result<()> {
    let indexer = project.indexer()?;
    let map = indexer.module_map()?;

    match format {
        ListFormat::Json => {
            let output =
                JsonOutput::from_module_map(&indexer.project_root().display().to_string(), &map);
            println!("{}", output.to_json());
        }
        ListFormat::Text => {
            if map.is_empty() {
                println!("{}", style("No importable modules found").dim());
                return Ok(());
            }
            for (module, classes) in &map {
                if classes.is_empty() {
                    println!("{}", style(module).bold());
                } else {
                    let names: Vec<&str> = classes.iter().map(String::as_str).collect();
                    println!(
                        "{}  {}",
                        style(module).bold(),
                        style(names.join(", ")).cyan()
                    );
                }
            }
        }
    }

    Ok(())
}
