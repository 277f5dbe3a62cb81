//! Assertions over `--format json` output and the persisted slot.

use anyhow::{Context, Result};
use serde_json::Value;

/// Sample IDs of the cards in a `list`/`search` result, in display order
pub fn card_ids(json: &Value) -> Result<Vec<String>> {
    let cards = match json["content"]["kind"].as_str() {
        Some("empty") => return Ok(Vec::new()),
        Some("cards") => json["content"]["cards"]
            .as_array()
            .context("Expected 'content.cards' array in JSON")?,
        other => anyhow::bail!("Unexpected grid kind {:?}", other),
    };

    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["sample_id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Card {} missing sample_id", i))
        })
        .collect()
}

/// Assert the grid shows exactly these cards, in this order.
pub fn assert_card_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = card_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected cards {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

/// Sample IDs stored in a slot payload, in stored order
pub fn slot_ids(slot: &Value) -> Result<Vec<String>> {
    slot.as_array()
        .context("Expected the slot to hold a JSON array")?
        .iter()
        .enumerate()
        .map(|(i, record)| {
            record["sample_id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Record {} missing sample_id", i))
        })
        .collect()
}
