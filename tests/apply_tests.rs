//! Integration tests for the apply command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{fntag_cmd, read_store, workspace_with, BILLING_ARN, ORDERS_ARN, STORE};

#[test]
fn test_apply_sets_tags_on_batch() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);

    fntag_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .arg("--arn")
        .arg(ORDERS_ARN)
        .arg("--arn")
        .arg(BILLING_ARN)
        .arg("--tag")
        .arg("owner=payments")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("applied  {}", ORDERS_ARN)))
        .stdout(predicate::str::contains(format!("applied  {}", BILLING_ARN)))
        .stdout(predicate::str::contains("Applied tags to 2 of 2 resource(s)."));

    fntag_cmd()
        .current_dir(temp.path())
        .arg("filter")
        .arg("--key1")
        .arg("owner")
        .arg("--value1")
        .arg("payments")
        .assert()
        .success()
        .stdout(predicate::str::contains("orders-api"))
        .stdout(predicate::str::contains("billing-worker"))
        .stdout(predicate::str::contains("audit-hook").not());
}

#[test]
fn test_apply_last_write_wins() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);

    fntag_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .arg("--arn")
        .arg(BILLING_ARN)
        .arg("--tag")
        .arg("k=a")
        .arg("--tag")
        .arg("k=b")
        .assert()
        .success();

    fntag_cmd()
        .current_dir(temp.path())
        .arg("inventory")
        .assert()
        .success()
        .stdout(predicate::str::contains("billing-worker\n  env = dev\n  k = b"));
}

#[test]
fn test_apply_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);

    let apply = || {
        fntag_cmd()
            .current_dir(temp.path())
            .arg("apply")
            .arg("--arn")
            .arg(ORDERS_ARN)
            .arg("--tag")
            .arg("env=staging")
            .output()
            .unwrap()
    };

    let first = apply();
    let after_first = read_store(temp.path());
    let second = apply();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(read_store(temp.path()), after_first);
}

#[test]
fn test_apply_records_failure_and_continues() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);
    let ghost = "arn:aws:lambda:us-east-1:123456789012:function:ghost";

    fntag_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .arg("--arn")
        .arg(ghost)
        .arg("--arn")
        .arg(ORDERS_ARN)
        .arg("--tag")
        .arg("team=platform")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "failed   {}: Resource not found",
            ghost
        )))
        .stdout(predicate::str::contains(format!("applied  {}", ORDERS_ARN)))
        .stdout(predicate::str::contains("Applied tags to 1 of 2 resource(s)."));

    assert!(read_store(temp.path()).contains("team = \"platform\""));
}

#[test]
fn test_apply_rejects_reserved_key() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);
    let before = read_store(temp.path());

    fntag_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .arg("--arn")
        .arg(ORDERS_ARN)
        .arg("--tag")
        .arg("aws:owner=me")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("reserved"));

    assert_eq!(read_store(temp.path()), before);
}

#[test]
fn test_apply_requires_tag() {
    let temp = TempDir::new().unwrap();
    workspace_with(temp.path(), STORE);

    fntag_cmd()
        .current_dir(temp.path())
        .arg("apply")
        .arg("--arn")
        .arg(ORDERS_ARN)
        .assert()
        .failure();
}
