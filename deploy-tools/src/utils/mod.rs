// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.

use color::Color;

pub mod color;

/// Pretty-prints an amount of gas, colored by how expensive it is.
pub fn format_gas(gas: u128) -> String {
    let text = format!("{} gas", group_thousands(gas));
    if gas <= 3_000_000 {
        text.mint()
    } else if gas <= 7_000_000 {
        text.yellow()
    } else {
        text.pink()
    }
}

fn group_thousands(gas: u128) -> String {
    let digits = gas.to_string();
    let mut text = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            text.push(',');
        }
        text.push(c);
    }
    text
}

/// Pretty-prints a fee per gas in gwei.
pub fn format_gwei(wei: u128) -> String {
    const WEI_PER_GWEI: u128 = 1_000_000_000;
    format!("{}.{:09} gwei", wei / WEI_PER_GWEI, wei % WEI_PER_GWEI)
}
