//! CLI domain: parse, route, help, output, and presentation only.
//! Model resolution and emission live in the library; the route table only wires them up.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{parse_constant, parse_property, Cli, Commands, ModelArgs};
pub use presentation::{
    format_options_json, format_options_text, format_options_toml, format_plan_json,
    format_plan_text, OptionsView, PlanView,
};
pub use route::RunContext;
