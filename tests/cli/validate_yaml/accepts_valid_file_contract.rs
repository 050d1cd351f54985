use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn validate_yaml_accepts_well_formed_file() {
    let ctx = TestContext::new();
    let file = ctx.write_file(
        ".github/workflows/publish.yml",
        "name: publish\non:\n  push:\n    tags: ['v*']\njobs:\n  build:\n    runs-on: ubuntu-latest\n",
    );

    ctx.cli()
        .arg("validate-yaml")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ YAML is valid"));
}

#[test]
fn validate_yaml_requires_file_argument() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("validate-yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required arguments were not provided"));
}
