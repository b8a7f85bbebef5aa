#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn journal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dspg-journal").unwrap();
    cmd.env_remove("DSPG_JOURNAL_ROOT");
    cmd.env_remove("DSPG_JOURNAL_CONFIG");
    cmd.env_remove("GEMINI_API_KEY");
    cmd.env_remove("API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a manuscript form into `dir` and return its path
pub fn write_manuscript(dir: &Path, file: &str, title: &str, email: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(
        &path,
        format!(
            "title = \"{}\"\n\
             abstract = \"A study of something worth reading.\"\n\
             keywords = \"AI, Education, \"\n\
             author_name = \"Dr. Jane Roe\"\n\
             email = \"{}\"\n\
             institution = \"DSPG\"\n",
            title, email
        ),
    )
    .unwrap();
    path
}
