use crate::harness::TestContext;
use predicates::prelude::*;

fn seed_templates(ctx: &TestContext) {
    ctx.write_file("templates/tests/base.html", "<html></html>");
    ctx.write_file("apps/tailwind_cli/templates/tailwind_cli/base.html", "");
    ctx.write_file("apps/tailwind_cli/templates/tailwind_cli/tailwind_css.html", "");
    ctx.write_file("apps/admin/templates/admin/index.html", "");
}

#[test]
fn list_templates_shows_project_and_installed_app_templates() {
    let ctx = TestContext::new();
    seed_templates(&ctx);
    ctx.write_settings(
        r#"
template_dirs = ["templates"]

[apps]
tailwind_cli = "apps/tailwind_cli"
"#,
    );

    ctx.cli()
        .arg("list_templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("templates/tailwind_cli/base.html"))
        .stdout(predicate::str::contains("templates/tailwind_cli/tailwind_css.html"))
        .stdout(predicate::str::contains("templates/tests/base.html"))
        .stdout(predicate::str::contains("templates/admin").not());
}

#[test]
fn list_templates_includes_every_installed_app() {
    let ctx = TestContext::new();
    seed_templates(&ctx);
    ctx.write_settings(
        r#"
template_dirs = ["templates"]

[apps]
admin = "apps/admin"
tailwind_cli = "apps/tailwind_cli"
"#,
    );

    ctx.cli()
        .arg("list_templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("templates/tailwind_cli/base.html"))
        .stdout(predicate::str::contains("templates/tests/base.html"))
        .stdout(predicate::str::contains("templates/admin"));
}

#[test]
fn list_templates_does_not_need_static_configuration() {
    let ctx = TestContext::new();
    seed_templates(&ctx);
    ctx.write_settings("template_dirs = [\"templates\"]\n");

    ctx.cli().arg("list_templates").assert().success();
}
