use std::path::{Path, PathBuf};

use anyhow::Context;
use handlebars::Handlebars;
use log::{debug, info};
use regex::Regex;

use crate::{
    metadata::{PostMetadata, DEFAULT_AUTHOR, DEFAULT_PUBLISHED},
    renderer::{generate_renderer, PostPageData},
};

use self::{
    patterns::Patterns,
    utils::{split_tags, title_from_stem},
};

pub(crate) mod patterns;
pub(crate) mod utils;

const FRONTMATTER_DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Converted,
    Skipped,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Report {
    pub converted: usize,
    pub skipped: usize,
}

#[derive(Debug)]
pub(crate) struct Converter {
    article_dir: PathBuf,
    patterns: Patterns,
    handlebars: Handlebars<'static>,
}

impl Converter {
    pub fn new(article_dir: PathBuf) -> anyhow::Result<Self> {
        Ok(Self {
            article_dir,
            patterns: Patterns::new()?,
            handlebars: generate_renderer()?,
        })
    }

    /// Converts every markdown file directly inside `article_dir`.
    /// The first failing file aborts the whole run.
    pub fn run(&self) -> anyhow::Result<Report> {
        let mut report = Report::default();
        for path in self.markdown_files()? {
            let outcome = self
                .convert_file(&path)
                .with_context(|| format!("while converting {:?}", path))?;
            match outcome {
                Outcome::Converted => report.converted += 1,
                Outcome::Skipped => report.skipped += 1,
            }
        }
        info!(
            "{} converted, {} skipped in {:?}",
            report.converted, report.skipped, self.article_dir
        );

        Ok(report)
    }

    fn markdown_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let mut files = vec![];
        for entry in std::fs::read_dir(&self.article_dir)
            .with_context(|| format!("while reading {:?}", self.article_dir))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }
        files.sort();
        debug!("{} markdown file(s) found in {:?}", files.len(), self.article_dir);

        Ok(files)
    }

    fn convert_file(&self, path: &Path) -> anyhow::Result<Outcome> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        println!("Processing {name}...");

        let content = std::fs::read_to_string(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        match self.convert_post(&content, &stem)? {
            Some(converted) => {
                std::fs::write(path, converted)?;
                println!("  [OK] Converted {name}");
                Ok(Outcome::Converted)
            }
            None => {
                println!("  Skipping {name} - already has frontmatter");
                Ok(Outcome::Skipped)
            }
        }
    }

    /// Returns the converted document, or `None` when `content` already
    /// starts with a frontmatter delimiter.
    pub fn convert_post(&self, content: &str, stem: &str) -> anyhow::Result<Option<String>> {
        if content.starts_with(FRONTMATTER_DELIMITER) {
            return Ok(None);
        }

        let meta = self.extract_metadata(content, stem);
        debug!("{stem}: {meta:?}");

        let data = PostPageData {
            tags: meta.tags_literal(),
            meta: &meta,
            body: self.strip_legacy_metadata(content),
        };
        let converted = self
            .handlebars
            .render("frontmatter", &data)
            .with_context(|| format!("while rendering frontmatter of {stem:?}"))?;

        Ok(Some(converted))
    }

    fn extract_metadata(&self, content: &str, stem: &str) -> PostMetadata {
        let first_match = |re: &Regex| {
            re.captures(content)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };
        let p = &self.patterns;

        PostMetadata {
            title: first_match(&p.title).unwrap_or_else(|| title_from_stem(stem)),
            author: first_match(&p.author).unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            published: first_match(&p.published)
                .unwrap_or_else(|| DEFAULT_PUBLISHED.to_string()),
            tags: first_match(&p.tags)
                .map(|value| split_tags(&value))
                .unwrap_or_default(),
        }
    }

    fn strip_legacy_metadata(&self, content: &str) -> String {
        let p = &self.patterns;
        let mut kept: Vec<&str> = vec![];
        let mut title_dropped = false;
        let mut after_label = false;

        for line in content.split('\n') {
            // only the line right after a label may be its separator
            let follows_label = std::mem::take(&mut after_label);

            if !title_dropped && kept.is_empty() && p.heading_line.is_match(line) {
                title_dropped = true;
                continue;
            }
            if p.label_line.is_match(line) {
                after_label = true;
                continue;
            }
            if follows_label && line.trim() == FRONTMATTER_DELIMITER {
                continue;
            }
            kept.push(line);
        }

        let body: Vec<&str> = kept
            .into_iter()
            .skip_while(|line| line.trim().is_empty())
            .collect();
        body.join("\n")
    }
}
