// src/cli/handlers.rs
use serde::Serialize;

use super::commands::{GenerateArgs, ThemeChoice};
use crate::core::{Config, Settings, SettingsStore, Theme};
use crate::generators::{self, assess_strength, entropy, PasswordGenerator};
use crate::models::{pool_size_for, CharacterClass, Configuration, GenerationReport, StrengthReport};
use crate::utils::{format_classes, render_strength};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub length: usize,
    pub pool_size: usize,
    pub classes: Vec<CharacterClass>,
    pub strength: StrengthReport,
}

// Turn command line flags into a generation request
pub fn build_configuration(config: &Config, args: &GenerateArgs) -> Configuration {
    let mut configuration = config.default_configuration();

    if let Some(length) = args.length {
        configuration.length = length;
    }

    if !args.classes.is_empty() {
        configuration.enabled_classes = args.classes.iter().copied().collect();
    }

    let excluded = [
        (args.no_upper, CharacterClass::Uppercase),
        (args.no_lower, CharacterClass::Lowercase),
        (args.no_numbers, CharacterClass::Numeric),
        (args.no_special, CharacterClass::Special),
    ];
    for (skip, class) in excluded {
        if skip {
            configuration.enabled_classes.remove(&class);
        }
    }

    configuration
}

pub fn generate_reports(configuration: &Configuration, count: usize) -> generators::Result<Vec<GenerationReport>> {
    let mut generator = PasswordGenerator::new();
    (0..count)
        .map(|_| generator.generate_password(configuration).map(GenerationReport::from))
        .collect()
}

/// JSON array of reports, whatever the count.
pub fn reports_json(reports: &[GenerationReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

pub fn analyze(password: &str, pool_size: Option<usize>) -> AnalysisReport {
    let classes: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|class| password.chars().any(|c| CharacterClass::classify(c) == *class))
        .collect();
    let pool_size = pool_size.unwrap_or_else(|| pool_size_for(password));

    AnalysisReport {
        length: password.chars().count(),
        pool_size,
        classes,
        strength: assess_strength(entropy(password, pool_size)),
    }
}

fn current_theme(store: &dyn SettingsStore) -> Theme {
    match store.load() {
        Ok(settings) => settings.theme,
        Err(e) => {
            log::warn!("Failed to load settings, using default theme: {}", e);
            Theme::default()
        }
    }
}

pub fn handle_generate(
    config: &Config,
    args: &GenerateArgs,
    json: bool,
    store: &dyn SettingsStore,
) -> anyhow::Result<()> {
    let configuration = build_configuration(config, args);
    let reports = generate_reports(&configuration, args.count)?;

    if json {
        println!("{}", reports_json(&reports)?);
        return Ok(());
    }

    let theme = current_theme(store);
    for report in &reports {
        println!("{}", report.password);
        println!("  {}", render_strength(&report.strength, theme));
    }

    Ok(())
}

pub fn handle_analyze(
    password: &str,
    pool_size: Option<usize>,
    json: bool,
    store: &dyn SettingsStore,
) -> anyhow::Result<()> {
    let report = analyze(password, pool_size);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Length:  {}", report.length);
    println!("Classes: {}", format_classes(&report.classes));
    println!("Pool:    {}", report.pool_size);
    println!("Strength: {}", render_strength(&report.strength, current_theme(store)));

    Ok(())
}

pub fn apply_theme(store: &mut dyn SettingsStore, choice: Option<ThemeChoice>) -> anyhow::Result<Theme> {
    let mut settings = store.load()?;

    let theme = match choice {
        None | Some(ThemeChoice::Show) => return Ok(settings.theme),
        Some(ThemeChoice::Light) => Theme::Light,
        Some(ThemeChoice::Dark) => Theme::Dark,
        Some(ThemeChoice::Toggle) => settings.theme.toggled(),
    };

    if theme != settings.theme {
        settings.theme = theme;
        store.save(&settings)?;
        log::info!("Theme set to {}", theme);
    }

    Ok(theme)
}

pub fn handle_theme(store: &mut dyn SettingsStore, choice: Option<ThemeChoice>, json: bool) -> anyhow::Result<()> {
    let theme = apply_theme(store, choice)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&Settings { theme })?);
    } else {
        println!("Theme: {}", theme);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemorySettingsStore;
    use crate::generators::ConfigurationError;
    use crate::models::StrengthTier;

    #[test]
    fn flags_narrow_the_default_configuration() {
        let config = Config::default();

        let args = GenerateArgs {
            length: Some(24),
            no_special: true,
            ..GenerateArgs::default()
        };
        let configuration = build_configuration(&config, &args);
        assert_eq!(configuration.length, 24);
        assert_eq!(
            configuration.classes(),
            vec![CharacterClass::Uppercase, CharacterClass::Lowercase, CharacterClass::Numeric]
        );

        let args = GenerateArgs {
            classes: vec![CharacterClass::Lowercase],
            no_lower: true,
            ..GenerateArgs::default()
        };
        assert!(build_configuration(&config, &args).enabled_classes.is_empty());
    }

    #[test]
    fn batch_generation() {
        let configuration = Configuration::new(12, [CharacterClass::Numeric]);
        let reports = generate_reports(&configuration, 5).unwrap();
        assert_eq!(reports.len(), 5);
        for report in &reports {
            assert_eq!(report.password.len(), 12);
            assert!(report.password.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(report.pool_size, 10);
        }

        assert!(generate_reports(&configuration, 0).unwrap().is_empty());
    }

    #[test]
    fn json_output_is_always_an_array() {
        let configuration = Configuration::new(10, [CharacterClass::Lowercase]);

        for count in [0, 1, 3] {
            let reports = generate_reports(&configuration, count).unwrap();
            let value: serde_json::Value = serde_json::from_str(&reports_json(&reports).unwrap()).unwrap();
            let items = value.as_array().expect("array output");
            assert_eq!(items.len(), count);
            for item in items {
                assert_eq!(item["pool_size"], 26);
                assert_eq!(item["strength"]["tier"], "weak");
            }
        }
    }

    #[test]
    fn batch_generation_surfaces_configuration_errors() {
        let configuration = Configuration::new(16, []);
        assert_eq!(
            generate_reports(&configuration, 2),
            Err(ConfigurationError::NoClassEnabled)
        );
    }

    #[test]
    fn analyze_infers_pool() {
        let report = analyze("correcthorse", None);
        assert_eq!(report.length, 12);
        assert_eq!(report.pool_size, 26);
        assert_eq!(report.classes, vec![CharacterClass::Lowercase]);
        assert_eq!(report.strength.tier, StrengthTier::Medium);

        let report = analyze("Tr0ub4dor&3xyzw!", None);
        assert_eq!(report.pool_size, 94);
        assert_eq!(report.strength.tier, StrengthTier::Strong);

        let report = analyze("abcdefgh", Some(0));
        assert_eq!(report.strength.entropy_bits, 0.0);
    }

    #[test]
    fn theme_choices_persist() {
        let mut store = MemorySettingsStore::default();
        assert_eq!(apply_theme(&mut store, None).unwrap(), Theme::Light);
        assert_eq!(apply_theme(&mut store, Some(ThemeChoice::Show)).unwrap(), Theme::Light);
        assert_eq!(apply_theme(&mut store, Some(ThemeChoice::Toggle)).unwrap(), Theme::Dark);
        assert_eq!(store.load().unwrap().theme, Theme::Dark);
        assert_eq!(apply_theme(&mut store, Some(ThemeChoice::Show)).unwrap(), Theme::Dark);
        assert_eq!(apply_theme(&mut store, Some(ThemeChoice::Light)).unwrap(), Theme::Light);
        assert_eq!(apply_theme(&mut store, Some(ThemeChoice::Dark)).unwrap(), Theme::Dark);
    }
}
