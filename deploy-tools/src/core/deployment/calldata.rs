// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Creation calldata: the contract bytecode followed by its ABI-encoded constructor arguments.

use alloy::{
    dyn_abi::{DynSolValue, JsonAbiExt, Specifier},
    json_abi::Constructor,
    primitives::Bytes,
};

use super::DeploymentError::{self, InvalidConstructor};
use crate::core::artifact::ContractArtifact;

/// Builds the init code that creates `artifact` with the given constructor arguments.
pub fn init_code(
    artifact: &ContractArtifact,
    constructor_args: &[String],
) -> Result<Bytes, DeploymentError> {
    let mut code = artifact.bytecode.to_vec();
    match artifact.abi.constructor() {
        Some(constructor) => code.extend(encode_constructor_args(constructor, constructor_args)?),
        None if constructor_args.is_empty() => {}
        None => {
            return Err(InvalidConstructor(format!(
                "{} has no constructor (got {} arguments)",
                artifact.contract_name,
                constructor_args.len(),
            )))
        }
    }
    Ok(code.into())
}

/// Coerces each argument to the type of its constructor input and encodes them.
pub fn encode_constructor_args(
    constructor: &Constructor,
    constructor_args: &[String],
) -> Result<Vec<u8>, DeploymentError> {
    if constructor_args.len() != constructor.inputs.len() {
        let types: Vec<&str> = constructor.inputs.iter().map(|p| p.ty.as_str()).collect();
        return Err(InvalidConstructor(format!(
            "mismatch number of constructor arguments (want constructor({}) ({}); got {})",
            types.join(","),
            constructor.inputs.len(),
            constructor_args.len(),
        )));
    }

    let mut values = Vec::<DynSolValue>::with_capacity(constructor_args.len());
    for (arg, param) in constructor_args.iter().zip(constructor.inputs.iter()) {
        let ty = param.resolve().map_err(|err| {
            InvalidConstructor(format!("could not resolve constructor arg {param}: {err}"))
        })?;
        let value = ty.coerce_str(arg).map_err(|err| {
            InvalidConstructor(format!("could not parse constructor arg {param}: {err}"))
        })?;
        values.push(value);
    }

    constructor
        .abi_encode_input(&values)
        .map_err(|err| InvalidConstructor(err.to_string()))
}
