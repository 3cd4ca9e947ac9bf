// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fmt::Display, str::FromStr};

use alloy::primitives::Address;
use eyre::bail;

use style::{BOLD, ERROR};

mod style;

pub fn convert_gwei_to_wei(fee_str: &str) -> eyre::Result<u128> {
    let gwei = match fee_str.parse::<f64>() {
        Ok(fee) if fee >= 0.0 => fee,
        Ok(_) => bail!("Max fee per gas must be non-negative"),
        Err(_) => bail!("Invalid max fee per gas value: {}", fee_str),
    };

    if !gwei.is_finite() {
        bail!("Invalid gwei value: must be finite");
    }

    let wei = gwei * 1e9;
    if !wei.is_finite() || wei >= u128::MAX as f64 {
        bail!("Max fee per gas is outside the valid range for wei");
    }

    Ok(wei as u128)
}

pub fn decode0x(text: impl AsRef<str>) -> eyre::Result<Vec<u8>> {
    let text = text.as_ref();
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    Ok(hex::decode(text)?)
}

/// Checks that `text` is an address while keeping it exactly as written.
pub fn parse_address(text: &str) -> Result<String, <Address as FromStr>::Err> {
    text.parse::<Address>()?;
    Ok(text.to_owned())
}

pub fn print_error(err: impl Display) {
    eprintln!("{ERROR}error{ERROR:#}{BOLD}:{BOLD:#} {err}");
}
