use crate::harness::TestContext;
use mockito::Matcher;
use predicates::prelude::*;

#[test]
fn account_lists_user_packages_and_named_package() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _user = server
        .mock("GET", "/user")
        .with_status(200)
        .with_body(r#"{"login": "octo", "id": 583231}"#)
        .create();
    let _list = server
        .mock("GET", "/user/packages")
        .match_query(Matcher::UrlEncoded("package_type".into(), "pypi".into()))
        .with_status(200)
        .with_body(r#"[{"name": "widget", "visibility": "public"}]"#)
        .create();
    let _pkg = server.mock("GET", "/user/packages/pypi/gadget").with_status(404).create();
    let config = ctx.write_probe_config(&server.url(), &[]);

    ctx.cli()
        .args(["account", "--package", "gadget", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ User: octo"))
        .stdout(predicate::str::contains("✅ ID: 583231"))
        .stdout(predicate::str::contains("   - widget (visibility: public)"))
        .stdout(predicate::str::contains("❌ Package 'gadget' does not exist (404)"));
}

#[test]
fn account_reports_failed_lookups_without_aborting() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _user = server.mock("GET", "/user").with_status(401).with_body("Bad credentials").create();
    let _list = server
        .mock("GET", "/user/packages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create();
    let config = ctx.write_probe_config(&server.url(), &[]);

    ctx.cli()
        .args(["account", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ User lookup failed"))
        .stdout(predicate::str::contains("No Python packages found"));
}
