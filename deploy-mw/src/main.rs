// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `deploy-mw`.

use std::{io, process::ExitCode};

use clap::Parser;
use deploy_tools::{core::deployment::rpc::RpcContractFactories, ops};

use crate::{
    common_args::{AuthArgs, ContractArgs, ProviderArgs, TxArgs},
    error::CliResult,
};

mod common_args;
mod constants;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "deploy-mw")]
#[command(about = "Deploy the SubscribePaidMonthlyMw contract and print its address", long_about = None)]
#[command(version)]
struct Args {
    #[command(flatten)]
    contract: ContractArgs,
    #[command(flatten)]
    auth: AuthArgs,
    #[command(flatten)]
    provider: ProviderArgs,
    #[command(flatten)]
    tx: TxArgs,

    /// Whether to print debug info.
    #[arg(long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // One deployment at a time, so a single thread is enough
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Into::into)
        .and_then(|rt| rt.block_on(exec(args)));

    // Report any error and return proper exit code
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}

async fn exec(args: Args) -> CliResult {
    let request = args.contract.request();
    let provider = args.provider.build_provider_with_wallet(&args.auth).await?;
    let factories =
        RpcContractFactories::new(args.contract.artifact_store(), provider, args.tx.options()?);
    ops::deploy(&request, &factories, io::stdout().lock()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::constants::DEFAULT_TREASURY;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_deploy_treasury_literal() {
        let args = Args::try_parse_from(["deploy-mw"]).unwrap();
        let request = args.contract.request();
        assert_eq!(request.contract_name(), "SubscribePaidMonthlyMw");
        assert_eq!(request.constructor_args(), [DEFAULT_TREASURY.to_owned()]);
        assert_eq!(
            request.constructor_args()[0],
            "0x07865c6e87b9f70255377e024ace6630c1eaa37f"
        );
    }

    #[test]
    fn overrides_are_passed_through() {
        let treasury = "0x3f1Eae7D46d88F08fc2F8ed27FCb2AB183EB2d0E";
        let args = Args::try_parse_from([
            "deploy-mw",
            "--contract-name",
            "contracts/Mw.sol:Mw",
            "--treasury",
            treasury,
            "--confirmations",
            "3",
            "--timeout-secs",
            "60",
            "--max-fee-per-gas-gwei",
            "0.5",
        ])
        .unwrap();

        let request = args.contract.request();
        assert_eq!(request.contract_name(), "contracts/Mw.sol:Mw");
        assert_eq!(request.constructor_args(), [treasury.to_owned()]);

        let options = args.tx.options().unwrap();
        assert_eq!(options.required_confirmations, 3);
        assert_eq!(options.timeout, Some(std::time::Duration::from_secs(60)));
        assert_eq!(options.max_fee_per_gas_wei, Some(500_000_000));
    }

    #[test]
    fn rejects_malformed_treasury() {
        let err = Args::try_parse_from(["deploy-mw", "--treasury", "0xnope"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}
