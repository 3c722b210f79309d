//! Runs the real binary over a temporary blog directory.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const LEGACY_POST: &str = concat!(
    "# My First Post\n",
    "**Author:** Jane Doe\n",
    "**Published:** 2024-01-01\n",
    "**Reading Time:** 2 min\n",
    "**Tags:** go, rust, systems\n",
    "---\n",
    "\n",
    "Hello world.\n",
);

const CONVERTED_POST: &str = concat!(
    "---\n",
    "title: \"My First Post\"\n",
    "author: \"Jane Doe\"\n",
    "published: \"2024-01-01\"\n",
    "tags: ['go', 'rust', 'systems']\n",
    "---\n",
    "\n",
    "Hello world.\n",
);

#[allow(deprecated)]
fn converter_cmd() -> Command {
    Command::cargo_bin("blog-frontmatter").unwrap()
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn converts_posts_in_place() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "my-first-post.md", LEGACY_POST);
    write(temp.path(), "untitled-draft.md", "Some words.\n");

    converter_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing my-first-post.md..."))
        .stdout(predicate::str::contains("  [OK] Converted untitled-draft.md"))
        .stdout(predicate::str::contains(
            "[OK] All blog posts converted to YAML frontmatter!",
        ));

    assert_eq!(read(temp.path(), "my-first-post.md"), CONVERTED_POST);
    assert_eq!(
        read(temp.path(), "untitled-draft.md"),
        concat!(
            "---\n",
            "title: \"Untitled Draft\"\n",
            "author: \"Neo & Zejzl\"\n",
            "published: \"2026-02-06\"\n",
            "tags: []\n",
            "---\n",
            "\n",
            "Some words.\n",
        )
    );
}

#[test]
fn second_run_changes_nothing() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "my-first-post.md", LEGACY_POST);

    converter_cmd().arg(temp.path()).assert().success();
    converter_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  Skipping my-first-post.md - already has frontmatter",
        ));

    assert_eq!(read(temp.path(), "my-first-post.md"), CONVERTED_POST);
}

#[test]
fn only_markdown_files_at_top_level_are_touched() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "notes.txt", LEGACY_POST);
    fs::create_dir(temp.path().join("nested")).unwrap();
    write(&temp.path().join("nested"), "inner.md", LEGACY_POST);
    fs::create_dir(temp.path().join("folder.md")).unwrap();

    converter_cmd().arg(temp.path()).assert().success();

    assert_eq!(read(temp.path(), "notes.txt"), LEGACY_POST);
    assert_eq!(read(&temp.path().join("nested"), "inner.md"), LEGACY_POST);
}

#[test]
fn missing_directory_fails() {
    let temp = TempDir::new().unwrap();

    converter_cmd()
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("article_dir must be a directory."));
}

#[test]
fn invalid_utf8_aborts_the_run() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("broken.md"), [0xff, 0xfe, 0x00]).unwrap();

    converter_cmd()
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("while converting"));
}
