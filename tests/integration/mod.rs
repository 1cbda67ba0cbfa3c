//! Integration tests for plugin resolution, emission, and configuration

mod bundle_ordering;
mod config_loading;
mod construction_failure;
mod default_registration;
mod end_to_end;
pub mod test_utils;
