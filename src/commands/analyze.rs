use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::analyzer::{analyze, Suggestion};
use crate::extraction::TextExtractor;

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub source: String,
    pub suggestions: Vec<Suggestion>,
}

/// Read a PDF or text file and return its text
pub fn extract_file(extractor: &TextExtractor, path: &Path) -> Result<String> {
    let data = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let filename = path.to_string_lossy();
    let result = extractor
        .extract(&filename, &data)
        .with_context(|| format!("Could not extract text from {}", path.display()))?;
    Ok(result.text)
}

/// Analyze files, or stdin when no files are given, writing one JSON report
/// per input to `out`.
///
/// Every input is attempted; the first failure is returned after the rest
/// have been reported.
pub fn run_analyze<W: Write>(extractor: &TextExtractor, files: &[PathBuf], out: &mut W) -> Result<()> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return write_report(out, "-", &input);
    }

    let mut first_error = None;
    for path in files {
        match extract_file(extractor, path) {
            Ok(text) => write_report(out, &path.display().to_string(), &text)?,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Print the extracted text of a single file
pub fn run_extract<W: Write>(extractor: &TextExtractor, path: &Path, out: &mut W) -> Result<()> {
    let text = extract_file(extractor, path)?;
    writeln!(out, "{}", text.trim())?;
    Ok(())
}

fn write_report<W: Write>(out: &mut W, source: &str, text: &str) -> Result<()> {
    let report = FileReport {
        source: source.to_string(),
        suggestions: analyze(text),
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
