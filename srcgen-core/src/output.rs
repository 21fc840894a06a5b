//! Structured output helpers for source listings

use std::io::Write;

use anyhow::Result;

use crate::listing::SourceListing;

/// Write the listing entries as a prettified JSON array.
pub fn write_json_pretty(listing: &SourceListing, mut w: impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(&listing.entries)?;
    w.write_all(json.as_bytes())?;
    Ok(())
}

/// Write the listing entries as newline-delimited JSON (NDJSON).
pub fn write_ndjson(listing: &SourceListing, mut w: impl Write) -> Result<()> {
    for entry in &listing.entries {
        let line = serde_json::to_string(entry)?;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{SourceEntry, SourceListing};

    fn sample_listing() -> SourceListing {
        SourceListing {
            entries: vec![
                SourceEntry {
                    path: "Source/PluginProcessor.cpp".to_string(),
                },
                SourceEntry {
                    path: "Source/PluginProcessor.h".to_string(),
                },
            ],
        }
    }

    #[test]
    fn ndjson_writes_one_line_per_entry() {
        let mut buf = Vec::new();

        write_ndjson(&sample_listing(), &mut buf).expect("write ndjson");

        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: SourceEntry = serde_json::from_str(lines[0]).expect("parse");
        assert_eq!(parsed.path, "Source/PluginProcessor.cpp");
    }

    #[test]
    fn pretty_json_is_a_single_array() {
        let mut buf = Vec::new();

        write_json_pretty(&sample_listing(), &mut buf).expect("write json");

        let text = String::from_utf8(buf).expect("utf8");
        let parsed: Vec<SourceEntry> = serde_json::from_str(&text).expect("parse");
        assert_eq!(parsed.len(), 2);
    }
}
