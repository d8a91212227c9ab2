//! `deckdown build` — transform a directory of outline documents.
//!
//! Walks the decks directory for `.md` files, splits and renders each one,
//! and writes an `.html` sibling under the output directory, mirroring the
//! input tree. A render failure for any deck aborts the build.

use anyhow::Result;
use colored::Colorize;
use deck_parse::{CmarkRenderer, DeckOptions};
use std::path::Path;
use walkdir::WalkDir;

pub async fn handle_build(dir: &str, out_dir: &str, options: &DeckOptions, quiet: bool) -> Result<()> {
    let root = Path::new(dir);
    if !root.is_dir() {
        anyhow::bail!("'{}' is not a directory", dir);
    }

    let out_root = Path::new(out_dir);
    let mut built_count = 0;

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.path().extension().is_none_or(|e| e != "md") {
            continue;
        }

        let in_path = entry.path();
        let content = std::fs::read_to_string(in_path)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", in_path.display(), e))?;

        let result = deck_parse::split(&content, options);
        for diag in &result.diagnostics {
            let line_info = match diag.line {
                Some(line) => format!("{}:{}", in_path.display(), line),
                None => in_path.display().to_string(),
            };
            eprintln!("{}: {}", line_info, diag.message);
        }

        let markup = result
            .deck
            .to_markup(&CmarkRenderer, options)
            .await
            .map_err(|e| anyhow::anyhow!("{}: {}", in_path.display(), e))?;

        let relative = in_path.strip_prefix(root).expect("entry is under root");
        let out_path = out_root.join(relative).with_extension("html");

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("Failed to create '{}': {}", parent.display(), e))?;
        }
        std::fs::write(&out_path, &markup)
            .map_err(|e| anyhow::anyhow!("Failed to write '{}': {}", out_path.display(), e))?;

        built_count += 1;
        if !quiet {
            println!(
                "  {} {} → {}",
                "deck".dimmed(),
                in_path.display(),
                out_path.display()
            );
        }
    }

    if !quiet {
        println!("{} {} deck(s) built", "done:".green().bold(), built_count);
    }
    Ok(())
}
