//! Interfaces declared on the spec become interfaces of the generated model.

use crate::error::PluginError;
use crate::model::{ModelSpec, TypeName};
use crate::plugin::defaults::names;
use crate::plugin::{BuildPlugin, Plugin, PluginEnv};
use std::collections::BTreeSet;
use std::sync::Arc;

pub struct ImplementsPlugin {
    interfaces: Vec<TypeName>,
}

impl BuildPlugin for ImplementsPlugin {
    const NAME: &'static str = names::IMPLEMENTS;

    fn build(spec: &Arc<ModelSpec>, _env: &PluginEnv) -> Result<Self, PluginError> {
        Ok(Self {
            interfaces: spec.implements.clone(),
        })
    }
}

impl Plugin for ImplementsPlugin {
    fn add_required_imports(&self, imports: &mut BTreeSet<TypeName>) {
        for interface in &self.interfaces {
            imports.insert(interface.erased());
            for arg in interface.type_args() {
                imports.insert(arg.erased());
            }
        }
    }

    fn add_interfaces_to_implement(&self, interfaces: &mut Vec<TypeName>) {
        interfaces.extend(self.interfaces.iter().cloned());
    }
}
