//! Validate command implementation
//!
//! Checks a style file without rendering anything.

use anyhow::{Context, Result};
use colored::Colorize;
use dominoes_spec::validate_style;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{JsonError, ValidateOutput};
use crate::input::load_style;

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(style_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(style_path)
    } else {
        run_human(style_path)
    }
}

fn run_human(style_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), style_path);

    let loaded = load_style(Some(Path::new(style_path)))
        .with_context(|| format!("Failed to load style file: {}", style_path))?;
    println!("{} {}", "Style hash:".dimmed(), &loaded.hash[..16]);

    match validate_style(&loaded.style) {
        Ok(()) => {
            println!("{} style is valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            println!(
                "{} {} error(s)",
                "FAILED".red().bold(),
                errors.len()
            );
            for error in &errors {
                println!("  {} {}", "x".red(), error);
            }
            Ok(ExitCode::from(1))
        }
    }
}

/// Validate and build the JSON report.
pub fn validate_output(style_path: &str) -> ValidateOutput {
    match load_style(Some(Path::new(style_path))) {
        Err(e) => ValidateOutput {
            success: false,
            style_hash: None,
            errors: vec![JsonError::new(e.code(), e.to_string())],
        },
        Ok(loaded) => {
            let errors = match validate_style(&loaded.style) {
                Ok(()) => Vec::new(),
                Err(errors) => errors.iter().map(JsonError::from).collect(),
            };
            ValidateOutput {
                success: errors.is_empty(),
                style_hash: Some(loaded.hash),
                errors,
            }
        }
    }
}

fn run_json(style_path: &str) -> Result<ExitCode> {
    let output = validate_output(style_path);
    let json =
        serde_json::to_string_pretty(&output).context("Failed to serialize validate output")?;
    println!("{}", json);

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::json_output::error_codes;

    fn write_style(json: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("style.json");
        std::fs::write(&path, json).unwrap();
        let path = path.to_string_lossy().to_string();
        (dir, path)
    }

    #[test]
    fn valid_style_passes() {
        let (_dir, path) = write_style("{}");
        let output = validate_output(&path);
        assert!(output.success);
        assert!(output.errors.is_empty());
        assert!(output.style_hash.is_some());
    }

    #[test]
    fn every_problem_is_reported() {
        let (_dir, path) = write_style(r#"{ "dot_radius": 0, "dpi": 0 }"#);
        let output = validate_output(&path);
        assert!(!output.success);

        let codes: Vec<_> = output.errors.iter().map(|e| e.code.as_str()).collect();
        assert!(codes.contains(&"E004"));
        assert!(codes.contains(&"E008"));
    }

    #[test]
    fn extreme_values_are_reported_not_fatal() {
        let (_dir, path) = write_style(
            r#"{ "corner_radius": 4294967295, "drop_shadow": { "offset": [2147483647, 0], "blur": 100000.0 } }"#,
        );
        let output = validate_output(&path);
        assert!(!output.success);

        let found: Vec<_> = output
            .errors
            .iter()
            .map(|e| (e.code.as_str(), e.path.as_deref()))
            .collect();
        assert_eq!(
            found,
            vec![
                ("E003", Some("corner_radius")),
                ("E007", Some("drop_shadow.blur")),
                ("E009", Some("drop_shadow.offset[0]")),
            ]
        );

        let (_dir, path) = write_style(r#"{ "margin": 2147483648 }"#);
        let output = validate_output(&path);
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].code, "E002");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let (_dir, path) = write_style("{ not json");
        let output = validate_output(&path);
        assert!(!output.success);
        assert_eq!(output.errors[0].code, error_codes::JSON_PARSE);
    }
}
