// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf, time::Duration};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::{LocalSigner, PrivateKeySigner},
};
use deploy_tools::core::{
    artifact::ArtifactStore,
    deployment::{tx::TxOptions, DeploymentRequest},
};
use eyre::{eyre, Context};

use crate::{
    constants::{DEFAULT_ARTIFACTS_DIR, DEFAULT_CONTRACT_NAME, DEFAULT_ENDPOINT, DEFAULT_TREASURY},
    utils::{convert_gwei_to_wei, decode0x, parse_address},
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: passing it as a flag exposes your key to shell history
    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
}

impl AuthArgs {
    fn build_wallet(&self) -> eyre::Result<EthereumWallet> {
        if let Some(key) = &self.private_key {
            if key.is_empty() {
                return Err(eyre!("empty private key"));
            }
            return private_key_wallet(key);
        }

        if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            return private_key_wallet(&key);
        }

        let keystore = self.keystore_path.as_ref().ok_or(eyre!(
            "no signer configured, pass --private-key, --private-key-path or --keystore-path"
        ))?;
        let password = self
            .keystore_password_path
            .as_ref()
            .map(fs::read_to_string)
            .unwrap_or(Ok("".into()))
            .wrap_err("could not open keystore password file")?;

        let signer = LocalSigner::decrypt_keystore(keystore, password.trim_end())?;
        Ok(EthereumWallet::new(signer))
    }
}

fn private_key_wallet(key: &str) -> eyre::Result<EthereumWallet> {
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        return Err(eyre!("private key must be 32 bytes, got {}", bytes.len()));
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    let signer = PrivateKeySigner::from_bytes(&priv_key_bytes)?;
    Ok(EthereumWallet::new(signer))
}

#[derive(Debug, clap::Args)]
pub struct ContractArgs {
    /// Directory of compiled artifacts (Hardhat `artifacts/` or Foundry `out/`)
    #[arg(long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
    /// Contract to deploy, optionally fully qualified (`contracts/Foo.sol:Foo`)
    #[arg(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract_name: String,
    /// Treasury address passed to the constructor
    #[arg(long, default_value = DEFAULT_TREASURY, value_parser = parse_address)]
    pub treasury: String,
}

impl ContractArgs {
    pub fn artifact_store(&self) -> ArtifactStore {
        ArtifactStore::new(&self.artifacts)
    }

    pub fn request(&self) -> DeploymentRequest {
        DeploymentRequest::new(self.contract_name.clone(), vec![self.treasury.clone()])
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint of the target network
    #[arg(short, long, env = "ETH_RPC_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl ProviderArgs {
    /// Connects a signing provider. HTTP endpoints are not contacted until the first request.
    pub async fn build_provider_with_wallet(
        &self,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider + Clone> {
        let wallet = auth.build_wallet()?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(&self.endpoint)
            .await
            .wrap_err_with(|| format!("could not connect to {}", self.endpoint))?;
        Ok(provider)
    }
}

#[derive(Debug, clap::Args)]
pub struct TxArgs {
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
    /// Blocks to wait for after the deployment is included
    #[arg(long, default_value_t = 1)]
    confirmations: u64,
    /// Seconds to wait for the deployment receipt before giving up
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl TxArgs {
    pub fn options(&self) -> eyre::Result<TxOptions> {
        let max_fee_per_gas_wei = self
            .max_fee_per_gas_gwei
            .as_deref()
            .map(convert_gwei_to_wei)
            .transpose()?;
        Ok(TxOptions::builder()
            .max_fee_per_gas_wei(max_fee_per_gas_wei)
            .required_confirmations(self.confirmations)
            .timeout(self.timeout_secs.map(Duration::from_secs))
            .build())
    }
}
