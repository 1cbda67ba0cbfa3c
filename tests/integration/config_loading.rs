//! Layered configuration loading

use super::test_utils::EnvGuard;
use modelgen::config::{ConfigLoader, WORKSPACE_CONFIG_FILE};
use modelgen::OptionFlag;
use tempfile::TempDir;

#[test]
fn test_workspace_file_is_loaded() {
    let mut env = EnvGuard::lock();
    let _home = env.isolate_config_home();

    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[options]\ndisable_constant_copying = true\n",
    )
    .unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert!(config.effective_options().is_set(OptionFlag::DisableConstantCopying));
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_missing_workspace_file_uses_defaults() {
    let mut env = EnvGuard::lock();
    let _home = env.isolate_config_home();

    let workspace = TempDir::new().unwrap();
    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.effective_options().bits(), 0);
}

#[test]
fn test_environment_overrides_workspace_file() {
    let mut env = EnvGuard::lock();
    let _home = env.isolate_config_home();
    env.set("MODELGEN_LOGGING__LEVEL", "debug");
    env.set("MODELGEN_OPTION_FLAGS", "2");

    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "option_flags = 1\n[logging]\nlevel = \"error\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.option_flags, 2);
    assert!(config.effective_options().is_set(OptionFlag::DisableImplementsHandling));
}

#[cfg(target_os = "linux")]
#[test]
fn test_user_file_sits_below_workspace_file() {
    let mut env = EnvGuard::lock();
    let home = env.isolate_config_home();
    let user_dir = home.path().join("modelgen");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[options]\ndisable_method_handling = true\n[logging]\nformat = \"json\"\nlevel = \"info\"\n",
    )
    .unwrap();

    let workspace = TempDir::new().unwrap();
    std::fs::write(
        workspace.path().join(WORKSPACE_CONFIG_FILE),
        "[logging]\nlevel = \"trace\"\n",
    )
    .unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert!(config.effective_options().is_set(OptionFlag::DisableMethodHandling));
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut env = EnvGuard::lock();
    let _home = env.isolate_config_home();
    env.remove("MODELGEN_OPTION_FLAGS");

    let workspace = TempDir::new().unwrap();
    let path = workspace.path().join("broken.toml");
    std::fs::write(&path, "[options\ndisable = ").unwrap();
    assert!(ConfigLoader::load_from_file(&path).is_err());
}
