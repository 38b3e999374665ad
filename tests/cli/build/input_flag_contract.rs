use crate::harness::TestContext;

#[test]
fn build_omits_input_without_source_css() {
    let mut ctx = TestContext::new();
    ctx.write_default_settings();
    let _release = ctx.releases().serve_release(1);

    ctx.cli().arg("build").assert().success();

    let args = ctx.last_invocation();
    assert!(args.contains(&"--minify".to_string()));
    assert!(!args.contains(&"--input".to_string()));
}

#[test]
fn build_passes_input_with_source_css_setting() {
    let mut ctx = TestContext::new();
    ctx.write_settings(
        "staticfiles_dirs = [\"assets\"]\ncli_path = \"bin\"\nsrc_css = \"css/source.css\"\n",
    );
    let _release = ctx.releases().serve_release(1);

    ctx.cli().arg("build").assert().success();

    let args = ctx.last_invocation();
    let pos = args.iter().position(|a| a == "--input").expect("--input should be passed");
    assert!(args[pos + 1].ends_with("assets/css/source.css"));
}

#[test]
fn source_css_can_come_from_environment() {
    let mut ctx = TestContext::new();
    ctx.write_default_settings();
    let _release = ctx.releases().serve_release(1);

    ctx.cli().arg("build").env("TAILWIND_CLI_SRC_CSS", "css/env.css").assert().success();

    assert!(ctx.last_invocation().iter().any(|a| a.ends_with("assets/css/env.css")));
}
