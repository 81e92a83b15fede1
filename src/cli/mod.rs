// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::{CliCommand, GenerateArgs, ThemeChoice};

use crate::core::settings::open_store;
use crate::core::Config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Use JSON for output
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file holding the theme preference
    #[arg(long, env = "SETTINGS_FILE")]
    pub settings: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

pub fn run(args: Args, config: &Config) -> anyhow::Result<()> {
    let settings_path = args.settings.clone().or_else(|| config.settings_file.clone());
    let mut store = open_store(settings_path.as_deref());

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            handlers::handle_generate(config, &generate, args.json, store.as_ref())
        }
        Some(CliCommand::Analyze { password, pool_size }) => {
            handlers::handle_analyze(&password, pool_size, args.json, store.as_ref())
        }
        Some(CliCommand::Theme { choice }) => handlers::handle_theme(store.as_mut(), choice, args.json),
        Some(CliCommand::Interactive) | None => menu::run_cli_menu(config, store.as_mut()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CharacterClass;

    #[test]
    fn parses_generate_flags() {
        let args = Args::try_parse_from([
            "rust_passgen",
            "generate",
            "--length",
            "20",
            "--classes",
            "upper,numbers",
            "--no-numbers",
            "-n",
            "3",
            "--json",
        ])
        .unwrap();

        assert!(args.json);
        match args.command {
            Some(CliCommand::Generate(generate)) => {
                assert_eq!(generate.length, Some(20));
                assert_eq!(generate.classes, vec![CharacterClass::Uppercase, CharacterClass::Numeric]);
                assert!(generate.no_numbers);
                assert_eq!(generate.count, 3);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_theme_and_analyze() {
        let args = Args::try_parse_from(["rust_passgen", "theme", "toggle"]).unwrap();
        assert!(matches!(
            args.command,
            Some(CliCommand::Theme { choice: Some(ThemeChoice::Toggle) })
        ));

        let args =
            Args::try_parse_from(["rust_passgen", "analyze", "hunter22", "--pool-size", "36"]).unwrap();
        assert!(matches!(
            args.command,
            Some(CliCommand::Analyze { pool_size: Some(36), .. })
        ));
    }

    #[test]
    fn parses_theme_show() {
        let args = Args::try_parse_from(["rust_passgen", "theme", "show"]).unwrap();
        assert!(matches!(
            args.command,
            Some(CliCommand::Theme { choice: Some(ThemeChoice::Show) })
        ));

        let args = Args::try_parse_from(["rust_passgen", "theme"]).unwrap();
        assert!(matches!(args.command, Some(CliCommand::Theme { choice: None })));
    }

    #[test]
    fn rejects_unknown_class() {
        assert!(Args::try_parse_from(["rust_passgen", "generate", "--classes", "emoji"]).is_err());
    }

    #[test]
    fn no_subcommand_means_menu() {
        let args = Args::try_parse_from(["rust_passgen"]).unwrap();
        assert!(args.command.is_none());
    }
}
