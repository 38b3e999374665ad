use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn interrupted_watch_reports_stop() {
    let mut ctx = TestContext::new();
    ctx.write_default_settings();
    let _release = ctx.releases().serve_release(1);

    ctx.cli()
        .arg("watch")
        .env("FAKE_TAILWIND_EXIT", "130")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stopped watching for changes."));
}
