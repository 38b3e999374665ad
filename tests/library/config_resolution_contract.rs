use serial_test::serial;
use std::fs;
use std::path::Path;
use tailwind_cli::{AppError, Invocation, load_config_at};
use tempfile::TempDir;

fn project(settings: &str) -> TempDir {
    let dir = TempDir::new().expect("temp project");
    fs::write(dir.path().join("tailwind.toml"), settings).expect("write settings");
    dir
}

#[test]
#[serial]
fn missing_staticfiles_dirs_is_rejected() {
    let dir = project("cli_path = \"bin\"\n");

    let err = load_config_at(dir.path(), None).expect_err("config should fail");

    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}

#[test]
#[serial]
fn resolution_is_deterministic_and_anchored_at_project() {
    let dir = project("staticfiles_dirs = [\"assets\"]\ncli_path = \"bin\"\n");

    let first = load_config_at(dir.path(), None).unwrap();
    let second = load_config_at(dir.path(), None).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.base_dir(), dir.path());
    assert!(first.full_cli_path().starts_with(dir.path().join("bin")));
    assert_eq!(first.full_config_file_path(), dir.path().join("tailwind.config.js"));
}

#[test]
#[serial]
fn explicit_settings_file_is_honored() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("conf")).unwrap();
    fs::write(
        dir.path().join("conf/site.toml"),
        "base_dir = \"..\"\nstaticfiles_dirs = [\"static\"]\nsrc_css = \"src.css\"\n",
    )
    .unwrap();

    let config = load_config_at(dir.path(), Some(Path::new("conf/site.toml"))).unwrap();

    assert!(Invocation::tailwind_build(&config).args().contains(&"--input".to_string()));
    assert!(Invocation::tailwind_watch(&config).args().contains(&"--input".to_string()));
}

#[test]
#[serial]
fn environment_overrides_settings_file() {
    let dir = project("staticfiles_dirs = [\"assets\"]\ncli_version = \"3.3.2\"\n");

    unsafe {
        std::env::set_var("TAILWIND_CLI_VERSION", "3.4.1");
    }
    let result = load_config_at(dir.path(), None);
    unsafe {
        std::env::remove_var("TAILWIND_CLI_VERSION");
    }

    let config = result.unwrap();
    assert_eq!(config.version(), "3.4.1");
    let filename = config.cli_filename();
    assert!(filename.ends_with("-3.4.1") || filename.ends_with("-3.4.1.exe"));
}
