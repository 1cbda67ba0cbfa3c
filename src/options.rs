//! Generator Options
//!
//! Named on/off switches captured once when the plugin manager is built. Each option
//! independently disables one default behaviour; options never interact and are not
//! cross-validated. A legacy integer bitmask converts into the named form, ignoring
//! unknown bits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single option, identified by its legacy bit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionFlag {
    /// Skip registration of the default constructor plugin
    DisableDefaultConstructors,
    /// Skip registration of the interface-implements plugin
    DisableImplementsHandling,
    /// Skip registration of the model method copying plugin
    DisableMethodHandling,
    /// Skip registration of the constant copying plugin
    DisableConstantCopying,
    /// Field plugins omit the in-memory default values block
    DisableDefaultContentValues,
    /// Field plugins omit convenience getters and setters
    DisableGettersAndSetters,
}

impl OptionFlag {
    /// All flags in bit order.
    pub const ALL: [OptionFlag; 6] = [
        OptionFlag::DisableDefaultConstructors,
        OptionFlag::DisableImplementsHandling,
        OptionFlag::DisableMethodHandling,
        OptionFlag::DisableConstantCopying,
        OptionFlag::DisableDefaultContentValues,
        OptionFlag::DisableGettersAndSetters,
    ];

    /// Bit this flag occupies in the legacy bitmask.
    pub const fn bit(self) -> u32 {
        match self {
            OptionFlag::DisableDefaultConstructors => 1,
            OptionFlag::DisableImplementsHandling => 1 << 1,
            OptionFlag::DisableMethodHandling => 1 << 2,
            OptionFlag::DisableConstantCopying => 1 << 3,
            OptionFlag::DisableDefaultContentValues => 1 << 4,
            OptionFlag::DisableGettersAndSetters => 1 << 5,
        }
    }

    /// Name used in configuration files.
    pub const fn key(self) -> &'static str {
        match self {
            OptionFlag::DisableDefaultConstructors => "disable_default_constructors",
            OptionFlag::DisableImplementsHandling => "disable_implements_handling",
            OptionFlag::DisableMethodHandling => "disable_method_handling",
            OptionFlag::DisableConstantCopying => "disable_constant_copying",
            OptionFlag::DisableDefaultContentValues => "disable_default_content_values",
            OptionFlag::DisableGettersAndSetters => "disable_getters_and_setters",
        }
    }
}

impl fmt::Display for OptionFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Generator options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub disable_default_constructors: bool,
    pub disable_implements_handling: bool,
    pub disable_method_handling: bool,
    pub disable_constant_copying: bool,
    pub disable_default_content_values: bool,
    pub disable_getters_and_setters: bool,
}

impl GeneratorOptions {
    /// Build options from a legacy bitmask. Bits with no named option are ignored.
    pub fn from_bits(bits: u32) -> Self {
        let mut options = Self::default();
        for flag in OptionFlag::ALL {
            if bits & flag.bit() != 0 {
                options.set(flag, true);
            }
        }
        options
    }

    /// Legacy bitmask equivalent of these options.
    pub fn bits(&self) -> u32 {
        OptionFlag::ALL
            .iter()
            .filter(|flag| self.is_set(**flag))
            .fold(0, |acc, flag| acc | flag.bit())
    }

    /// Whether `flag` is set.
    pub fn is_set(&self, flag: OptionFlag) -> bool {
        match flag {
            OptionFlag::DisableDefaultConstructors => self.disable_default_constructors,
            OptionFlag::DisableImplementsHandling => self.disable_implements_handling,
            OptionFlag::DisableMethodHandling => self.disable_method_handling,
            OptionFlag::DisableConstantCopying => self.disable_constant_copying,
            OptionFlag::DisableDefaultContentValues => self.disable_default_content_values,
            OptionFlag::DisableGettersAndSetters => self.disable_getters_and_setters,
        }
    }

    pub fn set(&mut self, flag: OptionFlag, value: bool) {
        let slot = match flag {
            OptionFlag::DisableDefaultConstructors => &mut self.disable_default_constructors,
            OptionFlag::DisableImplementsHandling => &mut self.disable_implements_handling,
            OptionFlag::DisableMethodHandling => &mut self.disable_method_handling,
            OptionFlag::DisableConstantCopying => &mut self.disable_constant_copying,
            OptionFlag::DisableDefaultContentValues => &mut self.disable_default_content_values,
            OptionFlag::DisableGettersAndSetters => &mut self.disable_getters_and_setters,
        };
        *slot = value;
    }

    /// Builder-style variant of [`GeneratorOptions::set`] that turns `flag` on.
    pub fn with(mut self, flag: OptionFlag) -> Self {
        self.set(flag, true);
        self
    }

    /// Union of both option sets.
    pub fn union(self, other: GeneratorOptions) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }

    /// Flags currently set, in bit order.
    pub fn enabled_flags(&self) -> Vec<OptionFlag> {
        OptionFlag::ALL
            .into_iter()
            .filter(|flag| self.is_set(*flag))
            .collect()
    }
}

impl From<u32> for GeneratorOptions {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}
