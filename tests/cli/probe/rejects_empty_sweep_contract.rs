use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn probe_without_endpoints_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("probe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No endpoints to probe"));
}

#[test]
fn probe_rejects_unknown_method() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["probe", "-e", "DELETE https://example.test/a"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid HTTP method 'DELETE'"));
}

#[test]
fn probe_owner_requires_package() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["probe", "--owner", "octo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--package"));
}

#[test]
fn probe_reports_missing_config_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["probe", "--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: absent.toml"));
}
