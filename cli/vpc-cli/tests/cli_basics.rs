// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, argument errors

// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(deprecated, clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn vpc_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vpc").expect("Failed to find vpc binary");
    for var in [
        "VPC_URL",
        "VPC_REGION",
        "VPC_BEARER_TOKEN",
        "VPC_AUTH_TYPE",
        "VPC_USERNAME",
        "VPC_PASSWORD",
        "VPC_DISABLE_SSL",
        "VPC_API_VERSION",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_vpc_version() {
    vpc_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vpc"));
}

#[test]
fn test_vpc_help() {
    vpc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("instance"))
        .stdout(predicate::str::contains("security-group"))
        .stdout(predicate::str::contains("load-balancer"));
}

#[test]
fn test_subcommand_help() {
    for sub in [
        "vpc",
        "subnet",
        "instance",
        "volume",
        "image",
        "key",
        "floating-ip",
        "security-group",
        "load-balancer",
        "public-gateway",
        "region",
        "zone",
    ] {
        vpc_cmd()
            .args([sub, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("list"));
    }
}

#[test]
fn test_instance_help_lists_actions() {
    vpc_cmd()
        .args(["instance", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("stop"))
        .stdout(predicate::str::contains("reboot"));
}

// Test aliases
#[test]
fn test_aliases() {
    for alias in ["inst", "sg", "lb", "fip", "pgw"] {
        vpc_cmd()
            .args([alias, "ls", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }
}

#[test]
fn test_invalid_subcommand() {
    vpc_cmd()
        .arg("nonexistent-subcommand")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_delete_requires_id() {
    vpc_cmd()
        .args(["subnet", "delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_image_visibility() {
    vpc_cmd()
        .args(["--token", "t", "image", "list", "--visibility", "shared"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--visibility"));
}

#[test]
fn test_missing_credentials() {
    vpc_cmd()
        .args(["vpc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no credentials"));
}

#[test]
fn test_bad_service_url() {
    vpc_cmd()
        .args(["--token", "t", "--url", "ftp://example.com/v1", "vpc", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to configure VPC client"));
}
