//! Generate-all command implementation
//!
//! Renders every built-in variant into one directory and prints a summary.

use anyhow::{Context, Result};
use clicksynth_audio::{generate_variant, Variant};
use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::reporting::{self, FailedSound, GenerateReport, GeneratedSound};

/// Run the generate-all command
///
/// # Arguments
/// * `out_dir` - Directory the WAV files are written to
/// * `json_output` - Whether to print a JSON report instead of colored text
///
/// # Returns
/// Exit code: 0 success, 1 if any variant failed
pub fn run(out_dir: &Path, json_output: bool) -> Result<ExitCode> {
    let start = Instant::now();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    if !json_output {
        println!("{} {}", "Output directory:".blue().bold(), out_dir.display());
        println!(
            "{} Generating {} variants",
            "INFO".blue().bold(),
            Variant::ALL.len()
        );
        println!();
    }

    let mut generated = Vec::new();
    let mut failed = Vec::new();

    for variant in Variant::ALL {
        let outcome = generate_variant(variant).and_then(|result| {
            let path = result.write_to_dir(out_dir)?;
            Ok(GeneratedSound::new(&result, &path))
        });

        match outcome {
            Ok(sound) => {
                if !json_output {
                    reporting::print_generated(&sound);
                }
                generated.push(sound);
            }
            Err(e) => {
                if !json_output {
                    reporting::print_failed(variant, &e.to_string());
                }
                failed.push(FailedSound {
                    variant: variant.name().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    let success = failed.is_empty();

    if json_output {
        reporting::print_json(
            &GenerateReport {
                success,
                out_dir: out_dir.display().to_string(),
                generated,
                failed,
            },
            false,
        )?;
    } else {
        println!();
        println!(
            "{} {} generated, {} failed in {:.2}s",
            if success {
                "SUCCESS".green().bold()
            } else {
                "FAILED".red().bold()
            },
            generated.len(),
            failed.len(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_every_variant() {
        let dir = tempfile::tempdir().unwrap();

        run(dir.path(), true).unwrap();

        for variant in Variant::ALL {
            assert!(dir.path().join(variant.file_name()).is_file(), "{}", variant);
        }
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), Variant::ALL.len());
    }

    #[test]
    fn test_output_dir_that_is_a_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("sounds");
        fs::write(&blocker, b"not a directory").unwrap();

        assert!(run(&blocker, true).is_err());
    }
}
