// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use assert_cmd::Command;
use eyre::Result;

const PRIVATE_KEY: &str = "0xb6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";

/// Nothing listens on the discard port, so every RPC request fails.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/artifacts")
}

fn deploy_mw() -> Result<Command> {
    let mut cmd = Command::cargo_bin("deploy-mw")?;
    cmd.env_remove("PRIVATE_KEY").env_remove("ETH_RPC_URL");
    Ok(cmd)
}

#[test]
fn unknown_contract_fails_without_output() -> Result<()> {
    let output = deploy_mw()?
        .arg("--artifacts")
        .arg(fixtures())
        .args(["--contract-name", "NotCompiled"])
        .args(["--private-key", PRIVATE_KEY, "--endpoint", DEAD_ENDPOINT])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("artifact for NotCompiled not found"), "{stderr}");
    assert!(!stderr.contains("rpc error"), "{stderr}");
    Ok(())
}

#[test]
fn rejected_transport_prints_no_success_line() -> Result<()> {
    let output = deploy_mw()?
        .arg("--artifacts")
        .arg(fixtures())
        .args(["--private-key", PRIVATE_KEY, "--endpoint", DEAD_ENDPOINT])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("rpc error"), "{stderr}");
    Ok(())
}

#[test]
fn missing_signer_fails() -> Result<()> {
    let output = deploy_mw()?
        .arg("--artifacts")
        .arg(fixtures())
        .args(["--endpoint", DEAD_ENDPOINT])
        .assert()
        .code(1)
        .stdout("")
        .get_output()
        .clone();

    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("no signer configured"), "{stderr}");
    Ok(())
}

#[test]
fn malformed_treasury_fails() -> Result<()> {
    deploy_mw()?
        .args(["--treasury", "0x1234", "--private-key", PRIVATE_KEY])
        .assert()
        .code(1)
        .stdout("");
    Ok(())
}
