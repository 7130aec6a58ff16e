//! Clicksynth CLI - Command-line generator for notification and keyboard sounds
//!
//! This binary renders the built-in sound variants to WAV files and prints
//! their parameters.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use clicksynth_cli::commands::{self, DEFAULT_OUT_DIR};
use clicksynth_cli::logging;

/// Clicksynth - Deterministic click, thock and chime generator
#[derive(Parser)]
#[command(name = "clicksynth")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate WAV files for one or more variants
    Generate {
        /// Variant names (see `clicksynth list`)
        #[arg(required = true)]
        variants: Vec<String>,

        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Override the preset seed for every variant
        #[arg(long)]
        seed: Option<u32>,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate WAV files for every variant
    GenerateAll {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Output a machine-readable JSON report (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List available variants
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a variant's preset as JSON
    Inspect {
        /// Variant name
        variant: String,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            variants,
            out_dir,
            seed,
            json,
        } => commands::generate::run(&variants, &out_dir, seed, json),
        Commands::GenerateAll { out_dir, json } => commands::generate_all::run(&out_dir, json),
        Commands::List { json } => commands::list::run(json),
        Commands::Inspect { variant, pretty } => commands::inspect::run(&variant, pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_generate() {
        let cli = Cli::try_parse_from(["clicksynth", "generate", "thock", "mechs"]).unwrap();
        match cli.command {
            Commands::Generate {
                variants,
                out_dir,
                seed,
                json,
            } => {
                assert_eq!(variants, vec!["thock", "mechs"]);
                assert_eq!(out_dir, PathBuf::from("./sounds"));
                assert_eq!(seed, None);
                assert!(!json);
            }
            _ => panic!("expected generate command"),
        }
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parses_generate_with_options() {
        let cli = Cli::try_parse_from([
            "clicksynth",
            "-vv",
            "generate",
            "click",
            "--out-dir",
            "out",
            "--seed",
            "7",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Generate {
                variants,
                out_dir,
                seed,
                json,
            } => {
                assert_eq!(variants, vec!["click"]);
                assert_eq!(out_dir, PathBuf::from("out"));
                assert_eq!(seed, Some(7));
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_generate_requires_variant() {
        assert!(Cli::try_parse_from(["clicksynth", "generate"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_seed() {
        assert!(Cli::try_parse_from(["clicksynth", "generate", "thock", "--seed", "-1"]).is_err());
    }

    #[test]
    fn test_cli_parses_generate_all() {
        let cli =
            Cli::try_parse_from(["clicksynth", "generate-all", "-o", "sfx", "--verbose"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::GenerateAll { out_dir, json } => {
                assert_eq!(out_dir, PathBuf::from("sfx"));
                assert!(!json);
            }
            _ => panic!("expected generate-all command"),
        }
    }

    #[test]
    fn test_cli_parses_list_and_inspect() {
        let cli = Cli::try_parse_from(["clicksynth", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));

        let cli = Cli::try_parse_from(["clicksynth", "inspect", "thocks", "--pretty"]).unwrap();
        match cli.command {
            Commands::Inspect { variant, pretty } => {
                assert_eq!(variant, "thocks");
                assert!(pretty);
            }
            _ => panic!("expected inspect command"),
        }
    }

    #[test]
    fn test_cli_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
