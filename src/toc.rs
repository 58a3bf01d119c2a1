//! Regeneration of the `## API` section of the docs table of contents.
//!
//! The table of contents is a GitBook-style summary document. Only the
//! `## API` section belongs to this pipeline; everything else in the file is
//! maintained by hand and must survive a run untouched. The section body is
//! replaced wholesale with one list parent per endpoint category and one
//! nested reference entry per method, each pointing at the remote spec slug.

use crate::error::{Error, Result};
use crate::openapi::SpecMap;
use log::debug;

/// Header line of the regenerated section.
pub const API_SECTION_HEADER: &str = "## API";

/// Replaces the `## API` section body with a freshly generated block.
///
/// The section ends at the next `## `-prefixed line, or at the end of the
/// document when none follows. Trailing whitespace is trimmed and the
/// result ends with exactly one newline. Running the update twice over its
/// own output yields the same document.
pub fn update_api_section(content: &str, specs: &SpecMap) -> Result<String> {
    let lines: Vec<&str> = content.lines().collect();

    let header_idx = lines
        .iter()
        .position(|line| line.trim_end() == API_SECTION_HEADER)
        .ok_or_else(|| Error::SectionNotFound(API_SECTION_HEADER.to_string()))?;

    let next_header_idx = lines[header_idx + 1..]
        .iter()
        .position(|line| line.starts_with("## "))
        .map(|offset| header_idx + 1 + offset);

    debug!(
        "Splicing API section at line {} (section ends at {:?})",
        header_idx + 1,
        next_header_idx.map(|i| i + 1)
    );

    let mut out = String::new();
    for line in &lines[..=header_idx] {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&render_api_block(specs));
    if let Some(next_idx) = next_header_idx {
        out.push('\n');
        for line in &lines[next_idx..] {
            out.push_str(line);
            out.push('\n');
        }
    }

    let mut result = out.trim_end().to_string();
    result.push('\n');
    Ok(result)
}

/// Renders the section body: one parent entry per non-empty category
/// (sorted), one nested reference per method (sorted).
pub fn render_api_block(specs: &SpecMap) -> String {
    let mut block = String::new();

    for (endpoint, methods) in specs {
        if methods.is_empty() {
            continue;
        }
        block.push_str(&format!("* {}\n", endpoint.as_str()));
        for method in methods.keys() {
            block.push_str(&format!(
                "  * [{}](openapi/{})\n",
                method,
                endpoint.slug(method)
            ));
        }
    }

    block
}
