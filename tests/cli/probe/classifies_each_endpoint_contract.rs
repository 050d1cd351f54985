use crate::harness::{TEST_TOKEN, TestContext};
use predicates::prelude::*;
use std::net::TcpListener;

#[test]
fn probe_reports_one_line_per_endpoint_in_input_order() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let auth = format!("token {}", TEST_TOKEN);
    let _a =
        server.mock("GET", "/a").match_header("authorization", auth.as_str()).with_status(404).create();
    let _b =
        server.mock("HEAD", "/b").match_header("authorization", auth.as_str()).with_status(200).create();
    let _p = server.mock("GET", "/private").with_status(403).create();
    let base = server.url();

    let output = ctx
        .cli()
        .args(["probe", "-e", &format!("{base}/a"), "-e", &format!("HEAD {base}/b")])
        .args(["-e", &format!("{base}/private")])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines[0], format!("❌ {base}/a [GET] -> NotFound (404)"));
    assert_eq!(lines[1], format!("✅ {base}/b [HEAD] -> Success (200)"));
    assert_eq!(lines[2], format!("⚠️ {base}/private [GET] -> Forbidden (403)"));
    assert!(stdout.contains("Probed 3 endpoint(s): 1 Success, 1 NotFound, 1 Forbidden"));
}

#[test]
fn unreachable_endpoint_does_not_fail_the_sweep() {
    let ctx = TestContext::new();
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut server = mockito::Server::new();
    let _ok = server.mock("GET", "/user").with_status(200).create();

    let base = server.url();

    ctx.cli()
        .args(["probe", "-e", &format!("http://{addr}/gone"), "-e", &format!("{base}/user")])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("❌ http://{addr}/gone [GET] -> TransportError: ")))
        .stdout(predicate::str::contains(format!("✅ {base}/user [GET] -> Success (200)")));
}

#[test]
fn config_endpoints_and_headers_are_rendered() {
    let ctx = TestContext::new();
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/simple")
        .with_status(200)
        .with_header("x-github-request-id", "ABC:123")
        .create();
    let base = server.url();
    let config = ctx.write_probe_config(&base, &[&format!("{base}/simple")]);

    ctx.cli()
        .args(["probe", "--config"])
        .arg(&config)
        .arg("--show-headers")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("✅ {base}/simple [GET] -> Success (200)")))
        .stdout(predicate::str::contains("    x-github-request-id: ABC:123"));
}
