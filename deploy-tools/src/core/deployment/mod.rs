// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract deployment.
//!
//! A deployment resolves a [`ContractFactory`] by name, submits the creation transaction with the
//! constructor arguments, and waits for the network to confirm it. The factories are supplied by
//! the caller through a [`ContractFactoryProvider`], so the same flow runs against a live node
//! ([`rpc::RpcContractFactories`]) or a stub.

use alloy::{
    primitives::{Address, TxHash},
    providers::PendingTransactionError,
    transports::{RpcError, TransportErrorKind},
};

use crate::{core::artifact::ArtifactError, utils::color::DebugColor};

pub mod calldata;
pub mod rpc;
pub mod tx;

/// What to deploy: a contract template and its constructor arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentRequest {
    contract_name: String,
    constructor_args: Vec<String>,
}

impl DeploymentRequest {
    pub fn new(contract_name: impl Into<String>, constructor_args: Vec<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            constructor_args,
        }
    }

    pub fn contract_name(&self) -> &str {
        &self.contract_name
    }

    pub fn constructor_args(&self) -> &[String] {
        &self.constructor_args
    }
}

/// A contract whose creation has been confirmed on-chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContract {
    pub address: Address,
    pub transaction_hash: TxHash,
}

#[derive(Debug, thiserror::Error)]
pub enum DeploymentError {
    #[error("{0}")]
    Artifact(#[from] ArtifactError),
    #[error("invalid constructor: {0}")]
    InvalidConstructor(String),
    #[error("rpc error: {0}")]
    Rpc(#[from] RpcError<TransportErrorKind>),
    #[error("deploy tx failed to confirm: {0}")]
    Confirmation(#[from] PendingTransactionError),
    #[error("deploy tx reverted {}", .tx_hash.debug_red())]
    Reverted { tx_hash: TxHash },
    #[error("missing contract address in receipt of {}", .tx_hash.debug_red())]
    NoContractAddress { tx_hash: TxHash },
}

/// Resolves contract templates by name.
pub trait ContractFactoryProvider {
    type Factory: ContractFactory;

    /// Looks up the named template. Implementations must not touch the network here.
    fn get_contract_factory(&self, name: &str) -> Result<Self::Factory, DeploymentError>;
}

/// A deployable contract template.
#[allow(async_fn_in_trait)]
pub trait ContractFactory {
    type Pending: PendingContract;

    /// Submits a creation transaction with the given constructor arguments.
    async fn deploy(&self, constructor_args: &[String]) -> Result<Self::Pending, DeploymentError>;
}

/// A submitted creation transaction awaiting confirmation.
#[allow(async_fn_in_trait)]
pub trait PendingContract {
    /// Blocks until the creation is confirmed.
    async fn deployed(self) -> Result<DeployedContract, DeploymentError>;
}

/// Deploys the requested contract and waits for it to be confirmed.
///
/// Every call is a fresh deployment. Nothing is cached or retried.
pub async fn deploy(
    request: &DeploymentRequest,
    factories: &impl ContractFactoryProvider,
) -> Result<DeployedContract, DeploymentError> {
    let factory = factories.get_contract_factory(request.contract_name())?;
    debug!(@grey, "resolved contract: {}", request.contract_name().lavender());

    let pending = factory.deploy(request.constructor_args()).await?;
    let deployed = pending.deployed().await?;

    info!(@grey, "deployed code at address: {}", deployed.address.debug_lavender());
    info!(@grey, "deployment tx hash: {}", deployed.transaction_hash.debug_lavender());
    Ok(deployed)
}
