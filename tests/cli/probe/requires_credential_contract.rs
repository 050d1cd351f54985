use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn probe_fails_before_any_request_without_token() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/a").with_status(200).expect(0).create();

    ctx.cli_without_token()
        .args(["probe", "-e", &format!("{}/a", server.url())])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing credential"))
        .stdout(predicate::str::is_empty());

    mock.assert();
}

#[test]
fn probe_treats_blank_token_as_missing() {
    let ctx = TestContext::new();

    ctx.cli_without_token()
        .env("GITHUB_TOKEN", "   ")
        .args(["probe", "-e", "https://example.test/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn probe_rejects_token_with_trailing_newline() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/a").with_status(200).expect(0).create();

    ctx.cli_without_token()
        .env("GITHUB_TOKEN", "ghp_abc\n")
        .args(["probe", "-e", &format!("{}/a", server.url())])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid credential"))
        .stdout(predicate::str::is_empty());

    mock.assert();
}

#[test]
fn validate_yaml_does_not_need_a_token() {
    let ctx = TestContext::new();
    let file = ctx.write_file("ok.yml", "a: 1\n");

    ctx.cli_without_token().arg("validate-yaml").arg(&file).assert().success();
}
