use anyhow::Context;
use regex::{Regex, RegexBuilder};

/// Regular expressions of the legacy inline metadata convention.
///
/// `title`, `author`, `published` and `tags` run over the whole document and
/// capture the value in group 1. `heading_line` and `label_line` are tested
/// against single lines while rebuilding the body.
#[derive(Debug)]
pub(crate) struct Patterns {
    pub title: Regex,
    pub author: Regex,
    pub published: Regex,
    pub tags: Regex,
    pub heading_line: Regex,
    pub label_line: Regex,
}

fn document_pattern(pattern: &str) -> anyhow::Result<Regex> {
    // crlf: a trailing \r never ends up in a captured value
    RegexBuilder::new(pattern)
        .multi_line(true)
        .crlf(true)
        .build()
        .with_context(|| format!("invalid pattern {pattern:?}"))
}

impl Patterns {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            title: document_pattern(r"^#\s+(.+)$")?,
            author: document_pattern(r"\*\*Author:\*\*\s+(.+)$")?,
            published: document_pattern(r"\*\*Published:\*\*\s+(.+)$")?,
            tags: document_pattern(r"\*\*Tags:\*\*\s+(.+)$")?,
            heading_line: Regex::new(r"^#\s+")?,
            label_line: Regex::new(r"^\*\*(Author|Published|Reading Time|Tags):\*\*")?,
        })
    }
}
