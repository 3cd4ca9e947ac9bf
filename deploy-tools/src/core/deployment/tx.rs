// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Contract creation transactions.

use std::time::Duration;

use alloy::{
    network::{Ethereum, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{PendingTransactionBuilder, Provider},
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use typed_builder::TypedBuilder;

use super::{DeployedContract, DeploymentError};
use crate::utils::{color::DebugColor, format_gas, format_gwei};

/// Fee and confirmation settings for a creation transaction.
#[derive(Clone, Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct TxOptions {
    /// Overrides the node's gas price as the max fee per gas.
    pub max_fee_per_gas_wei: Option<u128>,
    /// Blocks to wait for after inclusion before reporting success.
    #[builder(default = 1)]
    pub required_confirmations: u64,
    /// Give up waiting for the receipt after this long.
    pub timeout: Option<Duration>,
}

impl Default for TxOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A contract creation transaction, not yet sent.
#[derive(Debug)]
pub struct DeploymentTx {
    tx: TransactionRequest,
    options: TxOptions,
}

impl DeploymentTx {
    pub fn new(sender: Address, init_code: impl Into<Bytes>, options: TxOptions) -> Self {
        Self {
            tx: TransactionRequest::default()
                .with_from(sender)
                .with_deploy_code(init_code),
            options,
        }
    }

    #[cfg(test)]
    pub(crate) fn request(&self) -> &TransactionRequest {
        &self.tx
    }

    pub async fn estimate_gas(&self, provider: &impl Provider) -> Result<u64, DeploymentError> {
        Ok(provider.estimate_gas(self.tx.clone()).await?)
    }

    /// Fills gas and fees, then submits the transaction.
    ///
    /// The returned builder waits for the configured confirmations and timeout.
    pub async fn send(
        self,
        provider: &impl Provider,
    ) -> Result<PendingTransactionBuilder<Ethereum>, DeploymentError> {
        let gas = self.estimate_gas(provider).await?;
        let max_fee_per_gas = self.fee_per_gas(provider).await?;
        let suggested_priority_fee = provider.get_max_priority_fee_per_gas().await?;
        debug!(@grey, "estimated deployment gas: {}", format_gas(gas.into()));
        debug!(@grey, "max fee per gas: {}", format_gwei(max_fee_per_gas));

        let tx = with_fees(self.tx, gas, max_fee_per_gas, suggested_priority_fee);
        let pending = provider.send_transaction(tx).await?;
        debug!(@grey, "sent deploy tx: {}", pending.tx_hash().debug_lavender());

        Ok(pending
            .with_required_confirmations(self.options.required_confirmations)
            .with_timeout(self.options.timeout))
    }

    async fn fee_per_gas(&self, provider: &impl Provider) -> Result<u128, DeploymentError> {
        match self.options.max_fee_per_gas_wei {
            Some(wei) => Ok(wei),
            None => Ok(provider.get_gas_price().await?),
        }
    }
}

/// Sets the gas limit and fees. The priority fee never exceeds the max fee.
fn with_fees(
    mut tx: TransactionRequest,
    gas: u64,
    max_fee_per_gas: u128,
    suggested_priority_fee: u128,
) -> TransactionRequest {
    tx.gas = Some(gas);
    tx.max_fee_per_gas = Some(max_fee_per_gas);
    tx.max_priority_fee_per_gas = Some(suggested_priority_fee.min(max_fee_per_gas));
    tx
}

/// Waits for a creation transaction and extracts the created contract from its receipt.
pub async fn confirm(
    pending: PendingTransactionBuilder<Ethereum>,
) -> Result<DeployedContract, DeploymentError> {
    let tx_hash = *pending.tx_hash();
    let receipt = pending.get_receipt().await?;
    deployed_from_receipt(tx_hash, &receipt)
}

/// Reads the created contract out of a creation receipt.
pub fn deployed_from_receipt(
    tx_hash: TxHash,
    receipt: &TransactionReceipt,
) -> Result<DeployedContract, DeploymentError> {
    if !receipt.status() {
        return Err(DeploymentError::Reverted { tx_hash });
    }
    debug!(@grey, "gas used: {}", format_gas(receipt.gas_used.into()));

    let address = receipt
        .contract_address
        .ok_or(DeploymentError::NoContractAddress { tx_hash })?;
    Ok(DeployedContract {
        address,
        transaction_hash: receipt.transaction_hash,
    })
}
