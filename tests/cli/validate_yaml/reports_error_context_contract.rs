use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn validate_yaml_marks_offending_line() {
    let ctx = TestContext::new();
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("broken.yml");
    file.write_str("name: widget\nversion: 1\nsummary: a: b\nlicense: MIT\n").unwrap();

    ctx.cli()
        .arg("validate-yaml")
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ YAML syntax error"))
        .stdout(predicate::str::contains("Error at line 3"))
        .stdout(predicate::str::contains(">>> 3: summary: a: b"));
}

#[test]
fn validate_yaml_reports_unreadable_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["validate-yaml", "missing.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ Could not read missing.yml"));
}
