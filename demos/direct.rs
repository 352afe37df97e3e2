//! Imperative wiring: tap, project, tap as three sequential calls.
//!
//! Run with:
//! ```bash
//! cargo run --example direct
//! ```

use anyhow::Result;
use fieldtap::{project, tap, Record};
use serde_json::json;

fn extract_name(input: Record) -> Record {
    let input = tap(input);
    let picked = project(&["first", "last"], &input);
    tap(picked)
}

fn main() -> Result<()> {
    let input = Record::from_value(json!({
        "first": "John",
        "middle": "M",
        "last": "Doe",
    }))?;

    extract_name(input);
    Ok(())
}
