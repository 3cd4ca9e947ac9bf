// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.

use std::io::Write;

use crate::{
    core::deployment::{self, ContractFactoryProvider, DeployedContract, DeploymentRequest},
    Result,
};

/// Deploys the requested contract and writes `<name> deployed to <address>` to `out`.
///
/// `<name>` is the lowercased contract name without its source path. Nothing is
/// written unless the deployment is confirmed.
pub async fn deploy(
    request: &DeploymentRequest,
    factories: &impl ContractFactoryProvider,
    mut out: impl Write,
) -> Result<DeployedContract> {
    let deployed = deployment::deploy(request, factories).await?;
    writeln!(
        out,
        "{} deployed to {}",
        display_name(request.contract_name()),
        deployed.address,
    )?;
    out.flush()?;
    Ok(deployed)
}

fn display_name(contract_name: &str) -> String {
    let name = contract_name
        .rsplit_once(':')
        .map_or(contract_name, |(_, name)| name);
    name.to_lowercase()
}
