use anyhow::Result;
use console::style;
use decomment_core::ReplaceConfirmer;
use dialoguer::Confirm;
use std::path::Path;

/// Terminal prompt; an empty answer counts as yes.
pub struct PromptConfirmer;

impl ReplaceConfirmer for PromptConfirmer {
    fn confirm_replace(&mut self, original: &Path, stripped: &Path) -> Result<bool> {
        let prompt = format!(
            "Replace {} with {}?",
            style(original.display()).cyan(),
            style(stripped.display()).dim()
        );

        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()?;

        if !confirmed {
            println!("Keeping the original file.");
        }

        Ok(confirmed)
    }
}
