// src/cli/menu.rs
use inquire::{InquireError, MultiSelect, Select, Text};

use crate::core::{Config, GeneratorState, SettingsStore};
use crate::models::{CharacterClass, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{format_classes, render_strength};

const GENERATE: &str = "🔐  Generate password";
const LENGTH: &str = "📏  Change length";
const CLASSES: &str = "🔤  Choose character types";
const THEME: &str = "🎨  Toggle theme";
const EXIT: &str = "🚪  Exit";

pub fn run_cli_menu(config: &Config, store: &mut dyn SettingsStore) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD GENERATOR     ║");
    println!("╚══════════════════════════════════════╝");

    let mut settings = store.load().unwrap_or_else(|e| {
        log::warn!("Failed to load settings, using defaults: {}", e);
        Default::default()
    });
    let mut state = GeneratorState::new(&config.default_configuration());

    loop {
        println!(
            "\nLength: {}  Types: {}  Theme: {}",
            state.length(),
            format_classes(&state.configuration().classes()),
            settings.theme
        );

        let label = if state.last_result().is_some() {
            "🔁  Regenerate password"
        } else {
            GENERATE
        };
        let choice = match Select::new("What would you like to do?", vec![label, LENGTH, CLASSES, THEME, EXIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            LENGTH => {
                let prompt = Text::new(&format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH))
                    .with_default(&state.length().to_string())
                    .prompt();
                let Some(answer) = answered(prompt)? else {
                    continue;
                };
                match answer.trim().parse::<usize>() {
                    Ok(length) => {
                        let applied = state.set_length(length);
                        if applied != length {
                            println!("❗ Length adjusted to {}", applied);
                        }
                    }
                    Err(_) => println!("❌ '{}' is not a number", answer.trim()),
                }
            }
            CLASSES => {
                let labels: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.label()).collect();
                let defaults: Vec<usize> = CharacterClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|&(_, &class)| state.is_enabled(class))
                    .map(|(i, _)| i)
                    .collect();

                let prompt = MultiSelect::new("Include:", labels)
                    .with_default(&defaults)
                    .prompt();
                let Some(selected) = answered(prompt)? else {
                    continue;
                };

                for class in CharacterClass::ALL {
                    state.set_enabled(class, selected.contains(&class.label()));
                }
                if selected.is_empty() {
                    println!("❗ Select at least one character type before generating.");
                }
            }
            THEME => {
                settings.theme = settings.theme.toggled();
                match store.save(&settings) {
                    Ok(()) => println!("✅ Theme set to {}", settings.theme),
                    Err(e) => println!("❌ Failed to save theme: {}", e),
                }
            }
            EXIT => break,
            _ => match state.regenerate() {
                Ok(report) => {
                    println!("\nGenerated Password: {}", report.password);
                    println!("Strength: {}", render_strength(&report.strength, settings.theme));
                }
                Err(e) => println!("❌ {}", e),
            },
        }
    }

    println!("\n👋 Goodbye!");
    Ok(())
}

// Esc or Ctrl+C inside a sub-prompt returns to the menu
fn answered<T>(result: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
