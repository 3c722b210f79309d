use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{command, Arg};
use converter::Converter;

mod converter;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Moves inline post metadata into YAML frontmatter, rewriting files in place")
        .arg(
            Arg::new("article_dir")
                .help("Directory of markdown posts. Subdirectories are not visited.")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("content/blog"),
        )
        .get_matches();

    let article_dir: &PathBuf = matches
        .get_one("article_dir")
        .context("article_dir is missing")?;
    if !article_dir.exists() || !article_dir.is_dir() {
        bail!("article_dir must be a directory.");
    }

    let report = Converter::new(article_dir.to_owned())?.run()?;
    log::info!("{report:?}");

    println!("\n[OK] All blog posts converted to YAML frontmatter!");

    Ok(())
}
