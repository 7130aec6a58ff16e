//! Generate command implementation
//!
//! Renders the named variants and writes `<variant>.wav` files.

use anyhow::{Context, Result};
use clicksynth_audio::{generate, Variant};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use super::reporting::{self, GenerateReport, GeneratedSound};

/// Parses variant names, dropping repeats but keeping first-seen order.
pub fn parse_variants(names: &[String]) -> Result<Vec<Variant>> {
    let mut variants = Vec::with_capacity(names.len());
    for name in names {
        let variant = name
            .parse::<Variant>()
            .with_context(|| format!("Invalid variant '{}' (see `clicksynth list`)", name))?;
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    Ok(variants)
}

/// Run the generate command
///
/// # Arguments
/// * `names` - Variant names to render
/// * `out_dir` - Directory the WAV files are written to
/// * `seed` - Optional seed overriding every preset's own seed
/// * `json_output` - Whether to print a JSON report instead of colored text
///
/// # Returns
/// Exit code 0 on success; any failure is returned as an error
pub fn run(
    names: &[String],
    out_dir: &Path,
    seed: Option<u32>,
    json_output: bool,
) -> Result<ExitCode> {
    let variants = parse_variants(names)?;

    if !json_output {
        println!("{} {}", "Output directory:".cyan().bold(), out_dir.display());
        if let Some(seed) = seed {
            println!("{} {}", "Seed override:".cyan().bold(), seed);
        }
    }

    let mut generated = Vec::with_capacity(variants.len());
    for variant in variants {
        let mut preset = variant.preset();
        if let Some(seed) = seed {
            preset = preset.with_seed(seed);
        }

        let result = generate(&preset).with_context(|| format!("Failed to render {}", variant))?;
        let path = result
            .write_to_dir(out_dir)
            .with_context(|| format!("Failed to write {}", variant.file_name()))?;
        info!(variant = %variant, path = %path.display(), "wrote sound");

        let sound = GeneratedSound::new(&result, &path);
        if !json_output {
            reporting::print_generated(&sound);
        }
        generated.push(sound);
    }

    if json_output {
        reporting::print_json(
            &GenerateReport {
                success: true,
                out_dir: out_dir.display().to_string(),
                generated,
                failed: Vec::new(),
            },
            false,
        )?;
    } else {
        println!("{} Generated {} sound(s)", "DONE".green().bold(), generated.len());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_variants_dedups_in_order() {
        let variants = parse_variants(&names(&["thock", "Click", "THOCK"])).unwrap();
        assert_eq!(variants, vec![Variant::Thock, Variant::Click]);
    }

    #[test]
    fn test_parse_variants_rejects_unknown() {
        let err = parse_variants(&names(&["click", "kazoo"])).unwrap_err();
        assert!(err.to_string().contains("kazoo"));
    }

    #[test]
    fn test_run_writes_requested_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sounds");

        run(&names(&["mech", "bell"]), &out, None, true).unwrap();

        assert!(out.join("mech.wav").is_file());
        assert!(out.join("bell.wav").is_file());
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 2);
    }

    #[test]
    fn test_run_with_seed_override() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");

        run(&names(&["thock"]), &a, None, true).unwrap();
        run(&names(&["thock"]), &b, Some(7), true).unwrap();

        let default = std::fs::read(a.join("thock.wav")).unwrap();
        let reseeded = std::fs::read(b.join("thock.wav")).unwrap();
        assert_eq!(default.len(), reseeded.len());
        assert_ne!(default, reseeded);
    }

    #[test]
    fn test_run_unknown_variant_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sounds");

        assert!(run(&names(&["click", "nope"]), &out, None, true).is_err());
        assert!(!out.exists());
    }
}
