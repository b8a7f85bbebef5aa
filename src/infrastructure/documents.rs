//! Reading manuscripts and analysis text from disk

use crate::domain::Manuscript;
use crate::error::{JournalError, Result};
use pulldown_cmark::{Event, Parser, TagEnd};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand files and directories into manuscript form files.
///
/// Directories are walked recursively for `*.toml`; results are sorted by path
/// within each directory argument. Plain file arguments are taken as given.
pub fn collect_manuscript_paths(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("toml"))
                .collect();
            found.sort();
            paths.extend(found);
        } else if input.is_file() {
            paths.push(input.clone());
        } else {
            return Err(JournalError::InvalidManuscript(format!(
                "no such file or directory: {}",
                input.display()
            )));
        }
    }

    Ok(paths)
}

/// Parse a manuscript form from a TOML file
pub fn load_manuscript(path: &Path) -> Result<Manuscript> {
    let contents = fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| {
        JournalError::InvalidManuscript(format!("{}: {}", path.display(), e))
    })
}

/// Read text to analyze from a file, or stdin when `path` is `None` or `-`.
/// Markdown files are reduced to plain text.
pub fn read_analysis_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            let contents = fs::read_to_string(p)?;
            if is_markdown(p) {
                Ok(markdown_to_text(&contents))
            } else {
                Ok(contents)
            }
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md") | Some("markdown")
    )
}

/// Strip Markdown markup, keeping text with paragraph breaks.
pub fn markdown_to_text(markdown: &str) -> String {
    let mut output = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => output.push_str(&text),
            Event::SoftBreak | Event::HardBreak => output.push(' '),
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock) => output.push_str("\n\n"),
            _ => {}
        }
    }

    output.trim().to_string()
}
