//! Plan presentation: resolved bundle as a table or JSON.

use crate::diagnostics::Diagnostic;
use crate::error::ApiError;
use crate::model::ModelKind;
use crate::plugin::{PluginBundle, PluginManager, PluginPriority};
use comfy_table::Table;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PlanEntry {
    pub position: usize,
    pub name: String,
    pub priority: PluginPriority,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanView {
    pub model: String,
    pub kind: ModelKind,
    pub option_bits: u32,
    /// Providers registered on the manager, in resolution order
    pub registered: Vec<PlanEntry>,
    /// Plugins actually instantiated for the model
    pub bundle: Vec<PlanEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PlanView {
    pub fn new(manager: &PluginManager, bundle: &PluginBundle, diagnostics: Vec<Diagnostic>) -> Self {
        let registered = manager
            .registered_all()
            .into_iter()
            .enumerate()
            .map(|(i, (priority, name))| PlanEntry {
                position: i + 1,
                name: name.to_string(),
                priority,
            })
            .collect();
        let entries = bundle
            .entries()
            .iter()
            .enumerate()
            .map(|(i, entry)| PlanEntry {
                position: i + 1,
                name: entry.name().to_string(),
                priority: entry.priority(),
            })
            .collect();
        Self {
            model: bundle.spec().generated_type().qualified_name().to_string(),
            kind: bundle.spec().kind,
            option_bits: manager.options().bits(),
            registered,
            bundle: entries,
            diagnostics,
        }
    }
}

pub fn format_plan_text(view: &PlanView) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["#", "Plugin", "Priority"]);
    for entry in &view.bundle {
        table.add_row(vec![
            entry.position.to_string(),
            entry.name.clone(),
            entry.priority.to_string(),
        ]);
    }

    let mut out = format!(
        "Plugin bundle for {} ({}, options {:#04x}):\n{}",
        view.model, view.kind, view.option_bits, table
    );
    let skipped: Vec<&str> = view
        .registered
        .iter()
        .filter(|r| !view.bundle.iter().any(|b| b.name == r.name))
        .map(|r| r.name.as_str())
        .collect();
    if !skipped.is_empty() {
        out.push_str(&format!("\n\nNot instantiated: {}", skipped.join(", ")));
    }
    if !view.diagnostics.is_empty() {
        out.push_str(&format!("\n\nDiagnostics ({}):", view.diagnostics.len()));
        for diagnostic in &view.diagnostics {
            out.push_str(&format!("\n  - {}", diagnostic));
        }
    }
    out
}

pub fn format_plan_json(view: &PlanView) -> Result<String, ApiError> {
    serde_json::to_string_pretty(view).map_err(|e| ApiError::Serialization(e.to_string()))
}
