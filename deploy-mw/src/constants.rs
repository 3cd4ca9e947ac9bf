// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// The default endpoint, a local Hardhat or Anvil node.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8545";

/// Where Hardhat writes compiled artifacts.
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

pub const DEFAULT_CONTRACT_NAME: &str = "SubscribePaidMonthlyMw";

/// Treasury that receives subscription payments.
pub const DEFAULT_TREASURY: &str = "0x07865c6e87b9f70255377e024ace6630c1eaa37f";
