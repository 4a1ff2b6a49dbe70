use anyhow::{Context, Result};

use mneme::indexer::index_vault;

use crate::app::App;

pub fn run(app: &App, quiet: bool) -> Result<()> {
    let summary = index_vault(&app.storage, &app.vault_dir)
        .with_context(|| format!("Failed to index {}", app.vault_dir.display()))?;

    if !quiet {
        println!(
            "Indexed {} cards ({} new) from {} documents",
            summary.total_cards, summary.new_cards, summary.files_scanned
        );
        if summary.files_failed > 0 {
            println!("{} documents could not be read", summary.files_failed);
        }
    }

    Ok(())
}
