//! Options presentation.

use crate::error::ApiError;
use crate::options::{GeneratorOptions, OptionFlag};
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct OptionsView {
    pub option_flags: u32,
    pub options: GeneratorOptions,
}

impl OptionsView {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            option_flags: options.bits(),
            options,
        }
    }
}

pub fn format_options_toml(view: &OptionsView) -> Result<String, ApiError> {
    toml::to_string_pretty(view).map_err(|e| ApiError::Serialization(e.to_string()))
}

pub fn format_options_json(view: &OptionsView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(view).map_err(|e| ApiError::Serialization(e.to_string()))
}

pub fn format_options_text(view: &OptionsView) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Option", "Bit", "Set"]);
    for flag in OptionFlag::ALL {
        table.add_row(vec![
            flag.key().to_string(),
            format!("{:#04x}", flag.bit()),
            if view.options.is_set(flag) { "yes" } else { "no" }.to_string(),
        ]);
    }
    table.to_string()
}
