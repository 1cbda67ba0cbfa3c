//! CLI presentation: text and json formatters per command family.

mod options;
mod plan;

pub use options::{format_options_json, format_options_text, format_options_toml, OptionsView};
pub use plan::{format_plan_json, format_plan_text, PlanView};
