//! Integration tests for search, show, related, archives and board

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::journal_cmd;

#[test]
fn test_search_matches_keyword_case_insensitively() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("search")
        .arg("CYBER")
        .assert()
        .success()
        .stdout(predicate::str::contains("dsp-2023-045"))
        .stdout(predicate::str::contains("dsp-2024-001").not())
        .stdout(predicate::str::contains("dsp-2024-002").not());
}

#[test]
fn test_search_without_query_lists_everything() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("search")
        .assert()
        .success()
        .stdout(predicate::str::contains("dsp-2024-001"))
        .stdout(predicate::str::contains("dsp-2024-002"))
        .stdout(predicate::str::contains("dsp-2023-045"));
}

#[test]
fn test_search_no_match() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("search")
        .arg("quantum chromodynamics")
        .assert()
        .success()
        .stdout(predicate::str::contains("No articles found"));
}

#[test]
fn test_show_article_with_citation() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("dsp-2024-001")
        .assert()
        .success()
        .stdout(predicate::str::contains("Volume 12, Issue 1"))
        .stdout(predicate::str::contains("APA Citation"))
        .stdout(predicate::str::contains("(2024)."))
        .stdout(predicate::str::contains("References").not());
}

#[test]
fn test_show_with_references() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("dsp-2024-001")
        .arg("--references")
        .assert()
        .success()
        .stdout(predicate::str::contains("References"))
        .stdout(predicate::str::contains("[1]"));
}

#[test]
fn test_show_unknown_article() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("show")
        .arg("dsp-1999-999")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Article not found: 'dsp-1999-999'"));
}

#[test]
fn test_related_articles_from_custom_catalog() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("catalog.toml");
    fs::write(
        &catalog,
        r#"
[journal]
name = "Test Journal"
acronym = "TJ"

[[articles]]
id = "a1"
title = "Solar Panels"
abstract = "On panels."
authors = ["A. One"]
publication_date = "2024-01-10"
volume = 3
issue = 1
keywords = ["Energy", "Solar"]
doi = "10.1/a1"

[[articles]]
id = "a2"
title = "Wind Farms"
abstract = "On turbines."
authors = ["B. Two"]
publication_date = "2023-06-01"
volume = 2
issue = 2
keywords = ["energy"]
doi = "10.1/a2"

[[articles]]
id = "a3"
title = "Poetry"
abstract = "On verse."
authors = ["C. Three"]
publication_date = "2023-02-01"
volume = 2
issue = 1
keywords = ["Literature"]
doi = "10.1/a3"
"#,
    )
    .unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("related")
        .arg("a1")
        .assert()
        .success()
        .stdout(predicate::str::contains("a2  01-06-2023  Wind Farms"))
        .stdout(predicate::str::contains("a1").not())
        .stdout(predicate::str::contains("a3").not());

    journal_cmd()
        .current_dir(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("archives")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2024 Issues\n  Volume 3, Issue 1\n    a1  Solar Panels\n2023 Issues\n  Volume 2, Issue 2\n    a2  Wind Farms\n  Volume 2, Issue 1\n    a3  Poetry",
        ));
}

#[test]
fn test_duplicate_catalog_ids_rejected() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("catalog.toml");
    let entry = r#"
[[articles]]
id = "a1"
title = "Same"
abstract = "Same."
authors = ["A. One"]
publication_date = "2024-01-10"
volume = 1
issue = 1
keywords = []
doi = "10.1/a1"
"#;
    fs::write(
        &catalog,
        format!("[journal]\nname = \"T\"\nacronym = \"T\"\n{}{}", entry, entry),
    )
    .unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("--catalog")
        .arg(&catalog)
        .arg("search")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate article id"));
}

#[test]
fn test_board_lists_editors() {
    let temp = TempDir::new().unwrap();

    journal_cmd()
        .current_dir(temp.path())
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("Editorial Board"))
        .stdout(predicate::str::contains("Editor-in-Chief"))
        .stdout(predicate::str::contains("Indexed in: Google Scholar"));
}
