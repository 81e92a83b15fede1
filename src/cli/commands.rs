// src/cli/commands.rs
use clap::{Args as ClapArgs, Subcommand, ValueEnum};

use crate::models::CharacterClass;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Estimate the strength of an existing password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,

        /// Pool size to assume instead of inferring it from the password
        #[arg(long)]
        pool_size: Option<usize>,
    },

    /// Show or change the color theme
    Theme {
        /// New theme, or `show` to print the current one (the default)
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },

    /// Interactive generator menu
    Interactive,
}

#[derive(ClapArgs, Debug, Default, Clone)]
pub struct GenerateArgs {
    /// Password length (8-64)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Character classes to use, e.g. `upper,lower,numbers,special`
    #[arg(long, short, value_delimiter = ',')]
    pub classes: Vec<CharacterClass>,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out numbers
    #[arg(long)]
    pub no_numbers: bool,

    /// Leave out special characters
    #[arg(long)]
    pub no_special: bool,

    /// Number of passwords to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Show,
    Light,
    Dark,
    Toggle,
}
