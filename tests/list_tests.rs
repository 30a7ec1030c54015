//! Integration tests for list and featured commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{blog_cmd, init_blog, write_post};

fn seeded_blog() -> TempDir {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    write_post(
        temp.path(),
        "rust-intro",
        "Intro to Rust",
        "2025-01-10",
        "Ownership and borrowing.",
        "tags = [\"rust\", \"beginner\"]\nauthor = \"Ana\"\nfeatured = true",
    );
    write_post(
        temp.path(),
        "async-deep-dive",
        "Async deep dive",
        "2025-01-20",
        "Futures all the way down.",
        "tags = [\"rust\", \"async\"]\nauthor = \"Bo\"\nexcerpt = \"Foo bar about executors\"",
    );
    write_post(
        temp.path(),
        "go-notes",
        "Go notes",
        "2025-01-15",
        "Goroutines.",
        "tags = [\"go\"]\nauthor = \"Ana\"\nfeatured = true",
    );
    write_post(
        temp.path(),
        "unfinished",
        "Unfinished rust draft",
        "2025-01-25",
        "Draft body.",
        "tags = [\"secret\"]\nstatus = \"draft\"",
    );
    temp
}

fn list_lines(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let output = blog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_list_no_articles() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    blog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found"));
}

#[test]
fn test_list_newest_first_without_drafts() {
    let temp = seeded_blog();
    let lines = list_lines(&temp, &[]);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("async-deep-dive"));
    assert!(lines[1].contains("go-notes"));
    assert!(lines[2].contains("rust-intro"));
    assert!(lines.iter().all(|l| !l.starts_with("Found")));
}

#[test]
fn test_list_line_format() {
    let temp = seeded_blog();
    let lines = list_lines(&temp, &["--sort", "title", "--asc", "-n", "1"]);

    assert_eq!(
        lines[0],
        "20-01-2025  async-deep-dive  Async deep dive by Bo (1 min read)  #rust #async"
    );
}

#[test]
fn test_list_search_is_case_insensitive_across_fields() {
    let temp = seeded_blog();

    // Matches the excerpt of one article.
    let lines = list_lines(&temp, &["--search", "Foo"]);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("async-deep-dive"));
    assert_eq!(lines[1], "Found 1 articles (total 3)");

    // Matches content.
    let lines = list_lines(&temp, &["-s", "OWNERSHIP"]);
    assert!(lines[0].contains("rust-intro"));
}

#[test]
fn test_list_show_search_off_hides_count() {
    let temp = seeded_blog();

    blog_cmd()
        .current_dir(temp.path())
        .args(["config", "ui.show_search", "false"])
        .assert()
        .success();

    let lines = list_lines(&temp, &["--search", "Foo"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("async-deep-dive"));
}

#[test]
fn test_list_tags_are_any_of() {
    let temp = seeded_blog();
    let lines = list_lines(&temp, &["-t", "async", "-t", "go"]);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("async-deep-dive"));
    assert!(lines[1].contains("go-notes"));
}

#[test]
fn test_list_search_and_tags_combined() {
    let temp = seeded_blog();
    let lines = list_lines(&temp, &["-s", "intro", "-t", "rust"]);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("rust-intro"));
}

#[test]
fn test_list_drafts_never_match() {
    let temp = seeded_blog();

    blog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("-t")
        .arg("secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found"));
}

#[test]
fn test_list_author_and_featured() {
    let temp = seeded_blog();

    let lines = list_lines(&temp, &["--author", "Ana"]);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("go-notes"));
    assert!(lines[1].contains("rust-intro"));

    let lines = list_lines(&temp, &["--featured", "--author", "Bo"]);
    assert_eq!(lines, vec!["No articles found"]);
}

#[test]
fn test_list_offset_and_limit() {
    let temp = seeded_blog();
    let lines = list_lines(&temp, &["--offset", "1", "-n", "1"]);

    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("go-notes"));
}

#[test]
fn test_list_page_uses_config() {
    let temp = seeded_blog();

    blog_cmd()
        .current_dir(temp.path())
        .args(["config", "ui.posts_per_page", "2"])
        .assert()
        .success();

    let lines = list_lines(&temp, &["--page", "2"]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("rust-intro"));

    let lines = list_lines(&temp, &["--page", "18446744073709551615"]);
    assert_eq!(lines, vec!["No articles found"]);
}

#[test]
fn test_list_invalid_sort() {
    let temp = seeded_blog();

    blog_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "views"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort field"));
}

#[test]
fn test_list_respects_ui_flags() {
    let temp = seeded_blog();

    for key in ["ui.show_author", "ui.show_reading_time", "ui.show_tags"] {
        blog_cmd()
            .current_dir(temp.path())
            .args(["config", key, "false"])
            .assert()
            .success();
    }

    let lines = list_lines(&temp, &["-n", "1"]);
    assert_eq!(lines[0], "20-01-2025  async-deep-dive  Async deep dive");
}

#[test]
fn test_list_skips_broken_article_files() {
    let temp = seeded_blog();
    fs::write(temp.path().join("posts").join("broken.toml"), "title = ").unwrap();

    blog_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rust-intro"))
        .stderr(predicate::str::contains("skipping article file"));
}

#[test]
fn test_featured_newest_first() {
    let temp = seeded_blog();

    let output = blog_cmd()
        .current_dir(temp.path())
        .arg("featured")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("go-notes"));
    assert!(lines[1].contains("rust-intro"));
}

#[test]
fn test_featured_limit() {
    let temp = seeded_blog();

    blog_cmd()
        .current_dir(temp.path())
        .args(["featured", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("go-notes"))
        .stdout(predicate::str::contains("rust-intro").not());
}

#[test]
fn test_featured_none() {
    let temp = TempDir::new().unwrap();
    init_blog(temp.path());

    blog_cmd()
        .current_dir(temp.path())
        .arg("featured")
        .assert()
        .success()
        .stdout(predicate::str::contains("No featured articles"));
}
