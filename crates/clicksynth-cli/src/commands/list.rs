//! List command implementation

use anyhow::Result;
use clicksynth_audio::Variant;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::reporting;

/// Summary of one variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantInfo {
    pub name: &'static str,
    pub file_name: String,
    pub description: &'static str,
    pub volume: f64,
    pub seed: u32,
    pub num_events: usize,
}

impl VariantInfo {
    pub fn new(variant: Variant) -> Self {
        let preset = variant.preset();
        Self {
            name: variant.name(),
            file_name: variant.file_name(),
            description: variant.description(),
            volume: preset.volume,
            seed: preset.seed,
            num_events: preset.composition.event_count(),
        }
    }
}

/// All variants in listing order.
pub fn variants() -> Vec<VariantInfo> {
    Variant::ALL.into_iter().map(VariantInfo::new).collect()
}

/// Run the list command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let infos = variants();

    if json_output {
        reporting::print_json(&infos, false)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Available variants:".cyan().bold());
    for info in &infos {
        println!(
            "  {:<10} {:<14} {}",
            info.name.green(),
            info.file_name.dimmed(),
            info.description
        );
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lists_every_variant() {
        let infos = variants();
        assert_eq!(infos.len(), 10);
        assert_eq!(infos[0].name, "bell");
        assert_eq!(infos[9].file_name, "thocks.wav");
        assert_eq!(infos[7].seed, 44);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(VariantInfo::new(Variant::Clicks)).unwrap();
        assert_eq!(json["name"], "clicks");
        assert_eq!(json["seed"], 43);
        assert_eq!(json["num_events"], 6);
    }
}
