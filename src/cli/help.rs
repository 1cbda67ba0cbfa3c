//! Command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Command name string, e.g. "plan".
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Plan { .. } => "plan",
        Commands::Render { .. } => "render",
        Commands::Options { .. } => "options",
    }
}
