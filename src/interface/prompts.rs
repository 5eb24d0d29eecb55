use dialoguer::{Confirm, Input, Select};

use crate::catalog::FeedCatalog;
use crate::error::Result;
use crate::models::{BodyWeight, FeedEntry};

/// Number of fuzzy suggestions offered for a mistyped feed.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for the horse's body weight until a valid one is entered.
pub fn prompt_weight() -> Result<BodyWeight> {
    loop {
        let input: String = Input::new()
            .with_prompt("Horse body weight (lbs)")
            .interact_text()?;

        match input.parse::<BodyWeight>() {
            Ok(weight) => return Ok(weight),
            Err(e) => {
                tracing::debug!("Rejected weight input: {}", e);
                println!("Please enter a valid weight.");
            }
        }
    }
}

/// Prompt for a feed identifier with fuzzy matching against the catalog.
///
/// Returns `None` when the user presses Enter on an empty line.
pub fn prompt_feed_identifier(catalog: &FeedCatalog) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Feed (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if catalog.contains(input) {
            return Ok(Some(input.to_string()));
        }

        let candidates = catalog.suggest(input, MAX_SUGGESTIONS);

        if candidates.is_empty() {
            println!("No matching feed found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let feed = candidates[0];
            let confirm = Confirm::new()
                .with_prompt(format!(
                    "Did you mean '{}' ({})?",
                    feed.identifier,
                    feed.display_name()
                ))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(feed.identifier.clone()));
            }
            continue;
        }

        let mut options: Vec<String> = candidates
            .iter()
            .map(|f| format!("{} ({})", f.identifier, f.display_name()))
            .collect();
        options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        if let Some(feed) = candidates.get(selection) {
            return Ok(Some(feed.identifier.clone()));
        }
    }
}

/// Prompt for a daily amount. The raw text is kept so the aggregator decides validity.
pub fn prompt_amount(identifier: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(format!("Amount of {} (lbs/day)", identifier))
        .interact_text()?;
    Ok(input)
}

/// Collect feed rows until the user finishes.
pub fn collect_feed_entries(catalog: &FeedCatalog) -> Result<Vec<FeedEntry>> {
    let mut entries = Vec::new();

    while let Some(identifier) = prompt_feed_identifier(catalog)? {
        let amount = prompt_amount(&identifier)?;
        let entry = FeedEntry::from_raw(&identifier, &amount);
        if !entry.has_valid_amount() {
            println!(
                "'{}' is not a valid amount; this row will be skipped.",
                amount.trim()
            );
        }
        entries.push(entry);

        let more = prompt_yes_no("Add another feed?", true)?;
        if !more {
            break;
        }
    }

    Ok(entries)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the weight and feed rows for one evaluation.
pub fn collect_diet_inputs(catalog: &FeedCatalog) -> Result<(BodyWeight, Vec<FeedEntry>)> {
    let weight = prompt_weight()?;
    let entries = collect_feed_entries(catalog)?;
    Ok((weight, entries))
}
