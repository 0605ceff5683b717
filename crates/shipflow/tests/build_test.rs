//! build コマンドの検証
//!
//! エンジンに `true` / `false` / `sh` を使い、コンテナデーモンなしで動かす
#![cfg(unix)]

mod common;

use common::TestProject;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_build_twice_leaves_single_recipe() {
    let project = TestProject::new();

    for _ in 0..2 {
        project
            .ship()
            .args(["build", "--engine", "true"])
            .assert()
            .success()
            .stdout(predicate::str::contains("mcp-azure-devops:latest"));
    }

    let entries: Vec<_> = fs::read_dir(project.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|name| name != ".config")
        .collect();
    assert_eq!(entries, vec!["Dockerfile".to_string()]);

    let rendered = project.ship().arg("recipe").output().unwrap().stdout;
    assert_eq!(project.read("Dockerfile").into_bytes(), rendered);
}

#[test]
fn test_build_overwrites_hand_edited_recipe() {
    let project = TestProject::new();
    project.write("Dockerfile", "FROM scratch\n");

    project
        .ship()
        .args(["build", "--engine", "true"])
        .assert()
        .success();

    assert!(project.read("Dockerfile").contains("FROM python:3.12-slim"));
}

#[test]
fn test_build_passes_engine_arguments() {
    let project = TestProject::new();
    project.write_step_script("build", "");

    project
        .ship()
        .args(["build", "--engine", "sh", "--tag", "dev"])
        .assert()
        .success()
        // 実行するコマンドラインを表示する
        .stdout(predicate::str::contains("→ sh build -t mcp-azure-devops:dev"));

    let calls = project.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("build -t mcp-azure-devops:dev -f "));
    assert!(calls[0].contains("Dockerfile"));
}

#[test]
fn test_build_failure_passes_exit_code_through() {
    let project = TestProject::new();
    project.write_step_script("build", "exit 7");

    project
        .ship()
        .args(["build", "--engine", "sh"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("build failed"));
}

#[test]
fn test_build_with_failing_engine() {
    let project = TestProject::new();
    project
        .ship()
        .args(["build", "--engine", "false"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_build_with_missing_engine() {
    let project = TestProject::new();
    project
        .ship()
        .args(["build", "--engine", "shipflow-no-such-engine"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("shipflow-no-such-engine"));
}

#[test]
fn test_build_provided_recipe_missing() {
    let project = TestProject::new();
    project.write_ship_kdl(r#"recipe mode="provided""#);
    project.write_step_script("build", "");

    project
        .ship()
        .args(["build", "--engine", "sh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dockerfile"));

    assert!(project.calls().is_empty());
    assert!(!project.exists("Dockerfile"));
}
