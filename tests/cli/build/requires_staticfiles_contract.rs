use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn build_without_staticfiles_dirs_is_a_configuration_error() {
    let ctx = TestContext::new();
    ctx.write_settings("cli_path = \"bin\"\n");

    ctx.cli()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn build_with_empty_staticfiles_dirs_is_a_configuration_error() {
    let ctx = TestContext::new();
    ctx.write_settings("staticfiles_dirs = []\n");

    ctx.cli()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));

    assert!(ctx.downloaded_binaries().is_empty());
}

#[test]
fn build_without_settings_file_is_a_configuration_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
