use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn interrupted_build_reports_cancellation() {
    let mut ctx = TestContext::new();
    ctx.write_default_settings();
    let _release = ctx.releases().serve_release(1);

    ctx.cli()
        .arg("build")
        .env("FAKE_TAILWIND_EXIT", "130")
        .assert()
        .success()
        .stdout(predicate::str::contains("Canceled building production stylesheet."))
        .stdout(predicate::str::contains("Built production stylesheet").not());
}

#[test]
fn failing_build_exits_non_zero() {
    let mut ctx = TestContext::new();
    ctx.write_default_settings();
    let _release = ctx.releases().serve_release(1);

    ctx.cli()
        .arg("build")
        .env("FAKE_TAILWIND_EXIT", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("build exited with exit code 1"));
}
