// src/core/state.rs
use std::collections::BTreeSet;

use rand::{CryptoRng, RngCore};

use crate::generators::{self, PasswordGenerator};
use crate::models::{
    CharacterClass, Configuration, GenerationReport, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};

/// Widget state of the generator screen: a length slider, one toggle per
/// character class and whatever was generated last.
#[derive(Debug, Clone)]
pub struct GeneratorState {
    length: usize,
    enabled: BTreeSet<CharacterClass>,
    last: Option<GenerationReport>,
}

impl GeneratorState {
    pub fn new(initial: &Configuration) -> Self {
        Self {
            length: initial.length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH),
            enabled: initial.enabled_classes.clone(),
            last: None,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Slider semantics: values outside the supported range snap to the
    /// nearest end.
    pub fn set_length(&mut self, length: usize) -> usize {
        self.length = length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
        self.length
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        self.enabled.contains(&class)
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.enabled.insert(class);
        } else {
            self.enabled.remove(&class);
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.is_enabled(class);
        self.set_enabled(class, enabled);
        enabled
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.length, self.enabled.iter().copied())
    }

    pub fn last_result(&self) -> Option<&GenerationReport> {
        self.last.as_ref()
    }

    pub fn regenerate(&mut self) -> generators::Result<&GenerationReport> {
        self.regenerate_with(&mut PasswordGenerator::new())
    }

    /// Generate from the current widget state. On a configuration error the
    /// previous result stays on display.
    pub fn regenerate_with<R: RngCore + CryptoRng>(
        &mut self,
        generator: &mut PasswordGenerator<R>,
    ) -> generators::Result<&GenerationReport> {
        let generated = generator.generate_password(&self.configuration())?;
        Ok(&*self.last.insert(generated.into()))
    }
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::new(&Configuration::default())
    }
}
