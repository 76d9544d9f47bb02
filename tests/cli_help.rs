//! Help and version output

mod common;

use common::*;

#[test]
fn help_lists_commands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);

    assert!(result.success);
    for command in ["publish", "verify", "clear"] {
        assert!(result.stdout.contains(command), "missing {command}");
    }
    assert!(result.stdout.contains("--store-host"));
}

#[test]
fn version_flag() {
    let env = TestEnv::new();
    let result = env.run(&["--version"]);

    assert!(result.success);
    assert!(result.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_command_fails() {
    let env = TestEnv::new();
    let result = env.run(&["frobnicate"]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 2);
}
