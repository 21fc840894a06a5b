//! Placeholder substitution for build-file templates

use anyhow::Result;
use regex::{NoExpand, Regex};

use crate::listing::SourceListing;

/// Pattern a template placeholder must match: `%<IDENT>`.
pub const PLACEHOLDER_PATTERN: &str = r"%<\w+>";

/// Result of substituting placeholders into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub replaced: usize,
}

/// Serialize the listing into the block that stands in for a placeholder.
///
/// Each entry sits on its own line prefixed by `indent`, and the whole
/// block opens with one newline+indent so the first entry lines up with
/// the rest. An empty listing renders as exactly that opening pair.
pub fn render_block(listing: &SourceListing, indent: &str) -> String {
    let separator = format!("\n{indent}");
    let joined: Vec<&str> = listing.paths().collect();
    format!("{separator}{}", joined.join(&separator))
}

/// Replace every placeholder occurrence in `template` with `block`.
///
/// All placeholders receive the identical block, whatever identifier they
/// carry. The block is inserted literally, so `$` in a path never turns
/// into a capture-group reference. Zero matches is not an error; the
/// template passes through unchanged.
pub fn render_template(template: &str, block: &str) -> Result<Rendered> {
    let re = Regex::new(PLACEHOLDER_PATTERN)?;
    let replaced = re.find_iter(template).count();

    let text = if replaced == 0 {
        template.to_string()
    } else {
        re.replace_all(template, NoExpand(block)).into_owned()
    };

    Ok(Rendered { text, replaced })
}
