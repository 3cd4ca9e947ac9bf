// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract factories backed by compiled artifacts and a JSON-RPC provider.

use std::fmt;

use alloy::{
    network::Ethereum,
    primitives::TxHash,
    providers::{PendingTransactionBuilder, Provider, WalletProvider},
};

use super::{
    calldata,
    tx::{self, DeploymentTx, TxOptions},
    ContractFactory, ContractFactoryProvider, DeployedContract, DeploymentError, PendingContract,
};
use crate::{
    core::artifact::{ArtifactStore, ContractArtifact},
    utils::color::DebugColor,
};

/// Resolves templates from an [`ArtifactStore`] and deploys them through `provider`.
#[derive(Clone, Debug)]
pub struct RpcContractFactories<P> {
    artifacts: ArtifactStore,
    provider: P,
    options: TxOptions,
}

impl<P> RpcContractFactories<P> {
    pub fn new(artifacts: ArtifactStore, provider: P, options: TxOptions) -> Self {
        Self {
            artifacts,
            provider,
            options,
        }
    }
}

impl<P> ContractFactoryProvider for RpcContractFactories<P>
where
    P: Provider + WalletProvider + Clone,
{
    type Factory = RpcContractFactory<P>;

    fn get_contract_factory(&self, name: &str) -> Result<Self::Factory, DeploymentError> {
        let artifact = self.artifacts.resolve(name)?;
        Ok(RpcContractFactory {
            artifact,
            provider: self.provider.clone(),
            options: self.options.clone(),
        })
    }
}

/// A resolved artifact bound to a signing provider.
#[derive(Debug)]
pub struct RpcContractFactory<P> {
    artifact: ContractArtifact,
    provider: P,
    options: TxOptions,
}

impl<P> RpcContractFactory<P> {
    pub fn artifact(&self) -> &ContractArtifact {
        &self.artifact
    }
}

impl<P> ContractFactory for RpcContractFactory<P>
where
    P: Provider + WalletProvider,
{
    type Pending = RpcPendingContract;

    async fn deploy(&self, constructor_args: &[String]) -> Result<Self::Pending, DeploymentError> {
        let init_code = calldata::init_code(&self.artifact, constructor_args)?;
        let sender = self.provider.default_signer_address();
        debug!(@grey, "sender address: {}", sender.debug_lavender());

        let pending = DeploymentTx::new(sender, init_code, self.options.clone())
            .send(&self.provider)
            .await?;
        Ok(RpcPendingContract { pending })
    }
}

/// A creation transaction in the mempool.
pub struct RpcPendingContract {
    pending: PendingTransactionBuilder<Ethereum>,
}

impl RpcPendingContract {
    pub fn tx_hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }
}

impl fmt::Debug for RpcPendingContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcPendingContract")
            .field("tx_hash", self.pending.tx_hash())
            .finish()
    }
}

impl PendingContract for RpcPendingContract {
    async fn deployed(self) -> Result<DeployedContract, DeploymentError> {
        tx::confirm(self.pending).await
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use alloy::{
        network::EthereumWallet,
        primitives::{b256, U128, U64},
        providers::ProviderBuilder,
        signers::local::PrivateKeySigner,
        transports::mock::Asserter,
    };

    use super::*;
    use crate::core::artifact::{tests::hardhat_artifact, ArtifactError};

    const PRIVATE_KEY: &str = "b6b15c8cb491557369f3c7d2c287b053eb229daa9c22138887752191c9520659";
    const TREASURY: &str = "0x07865c6e87b9f70255377e024ace6630c1eaa37f";

    fn factories(
        artifacts: &std::path::Path,
    ) -> RpcContractFactories<impl Provider + WalletProvider + Clone> {
        let signer: PrivateKeySigner = PRIVATE_KEY.parse().unwrap();
        // Nothing listens here; any request would fail.
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http("http://127.0.0.1:9".parse().unwrap());
        RpcContractFactories::new(
            ArtifactStore::new(artifacts),
            provider,
            TxOptions::default(),
        )
    }

    /// Signs locally with a fixed chain id, so the node only answers the queued calls.
    fn mocked_factories(
        artifacts: &std::path::Path,
        asserter: Asserter,
        options: TxOptions,
    ) -> RpcContractFactories<impl Provider + WalletProvider + Clone> {
        let signer: PrivateKeySigner = PRIVATE_KEY.parse().unwrap();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .with_simple_nonce_management()
            .with_chain_id(31337)
            .wallet(EthereumWallet::from(signer))
            .connect_mocked_client(asserter);
        RpcContractFactories::new(ArtifactStore::new(artifacts), provider, options)
    }

    fn mw_artifacts() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Mw.json"),
            hardhat_artifact("Mw", "contracts/Mw.sol", "0x6080"),
        )
        .unwrap();
        dir
    }

    #[test]
    fn resolves_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contracts/Mw.sol");
        fs::create_dir_all(&path).unwrap();
        fs::write(
            path.join("Mw.json"),
            hardhat_artifact("Mw", "contracts/Mw.sol", "0x6080"),
        )
        .unwrap();

        let factory = factories(dir.path()).get_contract_factory("Mw").unwrap();
        assert_eq!(factory.artifact().qualified_name(), "contracts/Mw.sol:Mw");

        let Err(err) = factories(dir.path()).get_contract_factory("Other") else {
            panic!("resolved a contract that has no artifact");
        };
        assert!(matches!(
            err,
            DeploymentError::Artifact(ArtifactError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn argument_mismatch_fails_before_sending() {
        let dir = mw_artifacts();
        let factory = factories(dir.path()).get_contract_factory("Mw").unwrap();
        let Err(err) = factory.deploy(&[]).await else {
            panic!("sent a deployment without constructor arguments");
        };
        assert!(matches!(err, DeploymentError::InvalidConstructor(_)));
    }

    #[tokio::test]
    async fn unreachable_node_is_an_rpc_error() {
        let dir = mw_artifacts();
        let factory = factories(dir.path()).get_contract_factory("Mw").unwrap();
        let Err(err) = factory.deploy(&[TREASURY.to_owned()]).await else {
            panic!("deployment sent to an unreachable node");
        };
        assert!(matches!(err, DeploymentError::Rpc(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn signs_and_submits_creation() {
        let tx_hash = b256!("0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060");
        let asserter = Asserter::new();
        // eth_estimateGas, eth_maxPriorityFeePerGas, eth_getTransactionCount, eth_sendRawTransaction
        asserter.push_success(&U64::from(150_000));
        asserter.push_success(&U128::from(100_000_000u64));
        asserter.push_success(&U64::from(0));
        asserter.push_success(&tx_hash);

        let dir = mw_artifacts();
        let options = TxOptions::builder()
            .max_fee_per_gas_wei(1_000_000_000u128)
            .build();
        let factory = mocked_factories(dir.path(), asserter, options)
            .get_contract_factory("Mw")
            .unwrap();

        let pending = factory.deploy(&[TREASURY.to_owned()]).await.unwrap();
        assert_eq!(pending.tx_hash(), tx_hash);
    }

    #[tokio::test]
    async fn node_rejection_is_an_rpc_error() {
        let asserter = Asserter::new();
        asserter.push_success(&U64::from(150_000));
        asserter.push_success(&U128::from(100_000_000u64));
        asserter.push_success(&U64::from(0));
        asserter.push_failure_msg("insufficient funds for gas * price + value");

        let dir = mw_artifacts();
        let options = TxOptions::builder()
            .max_fee_per_gas_wei(1_000_000_000u128)
            .build();
        let factory = mocked_factories(dir.path(), asserter, options)
            .get_contract_factory("Mw")
            .unwrap();

        let err = factory.deploy(&[TREASURY.to_owned()]).await.unwrap_err();
        assert!(matches!(err, DeploymentError::Rpc(_)), "unexpected error: {err}");
    }
}
