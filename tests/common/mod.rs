#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub const STORE: &str = r#"
[[resource]]
id = "orders-api"
arn = "arn:aws:lambda:us-east-1:123456789012:function:orders-api"
name = "orders-api"
resource_type = "lambda"
region = "us-east-1"

[resource.tags]
env = "prod"
team = "x"
"aws:cloudformation:stack-name" = "core"

[[resource]]
id = "billing-worker"
arn = "arn:aws:lambda:us-east-1:123456789012:function:billing-worker"
name = "billing-worker"
resource_type = "lambda"
region = "us-east-1"

[resource.tags]
env = "dev"

[[resource]]
id = "audit-hook"
arn = "arn:aws:lambda:us-east-1:123456789012:function:audit-hook"
name = "audit-hook"
resource_type = "lambda"
region = "us-east-1"

[[resource]]
id = "eu-reporter"
arn = "arn:aws:lambda:eu-west-1:123456789012:function:eu-reporter"
name = "eu-reporter"
resource_type = "lambda"
region = "eu-west-1"

[resource.tags]
env = "prod"
"#;

pub const ORDERS_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:orders-api";
pub const BILLING_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:billing-worker";
pub const AUDIT_ARN: &str = "arn:aws:lambda:us-east-1:123456789012:function:audit-hook";

pub fn fntag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fntag").unwrap();
    cmd.env_remove("FNTAG_ROOT");
    cmd.env_remove("FNTAG_REGION");
    cmd.env_remove("FNTAG_RESOURCE_TYPE");
    cmd.env_remove("FNTAG_LOG");
    cmd
}

/// Initialize a workspace and replace its resource store with `store`.
pub fn workspace_with(root: &Path, store: &str) {
    fntag_cmd().arg("init").arg(root).assert().success();
    fs::write(root.join(".fntag").join("resources.toml"), store).unwrap();
}

pub fn read_store(root: &Path) -> String {
    fs::read_to_string(root.join(".fntag").join("resources.toml")).unwrap()
}
