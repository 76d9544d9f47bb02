//! Config file discovery and validation

mod common;

use common::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[test]
fn local_config_file_is_used() {
    let mut server = Server::new();
    let port = port_of(&server);
    let node = server
        .mock("PUT", "/v1/kv/nodes/node1/billing")
        .match_body(Matcher::Json(json!({"cluster": "staging"})))
        .with_status(200)
        .create();
    let versions = server
        .mock("PUT", "/v1/kv/clusters/staging/versions")
        .match_body(Matcher::Json(json!({"abc123": "v2"})))
        .with_status(200)
        .create();
    let deploy = server
        .mock("PUT", "/v1/kv/clusters/staging/deploy_config")
        .match_body(Matcher::Json(json!({"basedir": "/srv/billing", "runas": "deploy"})))
        .with_status(200)
        .create();

    let env = TestEnv::new();
    env.write_file(
        "kvseed.toml",
        &format!(
            r#"
app = "billing"
hostname = "node1"

[store]
host = "127.0.0.1"
port = {port}

[node]
cluster = "staging"

[versions]
abc123 = "v2"

[deploy]
basedir = "/srv/billing"
runas = "deploy"
"#
        ),
    );

    let result = env.run(&["publish"]);

    assert!(result.success, "stderr: {}", result.stderr);
    node.assert();
    versions.assert();
    deploy.assert();
}

#[test]
fn explicit_config_path() {
    let env = TestEnv::new();
    let path = env.write_file("conf/seed.toml", "app = \"billing\"\n");
    let path = path.to_string_lossy().to_string();

    let result = env.run(&["--config", &path, "--hostname", "node1", "publish", "--dry-run"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.contains("/v1/kv/nodes/node1/billing"));
}

#[test]
fn unknown_key_warns_with_suggestion() {
    let env = TestEnv::new();
    env.write_file("kvseed.toml", "[store]\nprot = 9500\n");

    let result = env.run(&["--hostname", "node1", "publish", "--dry-run"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("unknown config key"));
    assert!(result.stderr.contains("did you mean 'port'?"));
}

#[test]
fn relative_basedir_is_rejected_before_sending() {
    let env = TestEnv::new();
    env.write_file("kvseed.toml", "[deploy]\nbasedir = \"tmp/slug\"\n");

    let result = env.run(&["--hostname", "node1", "publish", "--dry-run"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stdout.is_empty());
    assert!(result.stderr.contains("basedir"));
}

#[test]
fn hostname_with_slash_is_rejected() {
    let env = TestEnv::new();

    let result = env.run(&["--hostname", "a/b", "publish", "--dry-run"]);

    assert_eq!(result.exit_code, 1);
    assert!(!result.stdout.contains("PUT "));
}
