// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! An artifact is the JSON file a Solidity toolchain writes for every compiled contract. Both the
//! Hardhat layout (`artifacts/contracts/Foo.sol/Foo.json`, bytecode as a hex string) and the
//! Foundry layout (`out/Foo.sol/Foo.json`, bytecode under `bytecode.object`) are understood.

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use glob::Pattern;
use serde::Deserialize;

/// Hardhat keeps compiler inputs and outputs here; they are never contract artifacts.
const BUILD_INFO_DIR: &str = "build-info";

/// A compiled contract template, ready to be deployed.
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    pub contract_name: String,
    pub source_name: Option<String>,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Name in `source:Contract` form when the source is known.
    pub fn qualified_name(&self) -> String {
        match &self.source_name {
            Some(source) => format!("{source}:{}", self.contract_name),
            None => self.contract_name.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    source_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

impl From<RawBytecode> for Bytes {
    fn from(raw: RawBytecode) -> Self {
        match raw {
            RawBytecode::Hex(bytes) | RawBytecode::Object { object: bytes } => bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifacts directory {} does not exist, compile the contracts first", .0.display())]
    MissingDir(PathBuf),
    #[error("artifact for {0} not found")]
    NotFound(String),
    #[error(
        "multiple artifacts for {name}, use a fully qualified name: {}",
        .candidates.join(", ")
    )]
    Ambiguous {
        name: String,
        candidates: Vec<String>,
    },
    #[error("failed to read artifact {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse artifact {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{0} has no deployable bytecode (is it abstract or an interface?)")]
    NotDeployable(String),
    #[error("invalid artifact search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Directory of compiled artifacts, searched by contract name.
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a contract by plain name (`Foo`) or fully qualified name
    /// (`contracts/Foo.sol:Foo`).
    pub fn resolve(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        if !self.root.is_dir() {
            return Err(ArtifactError::MissingDir(self.root.clone()));
        }

        let (path, contract_name) = match name.rsplit_once(':') {
            Some((source, contract)) => {
                let path = self.root.join(source).join(format!("{contract}.json"));
                if !path.is_file() {
                    return Err(ArtifactError::NotFound(name.to_owned()));
                }
                (path, contract)
            }
            None => (self.find(name)?, name),
        };
        debug!(@grey, "reading artifact: {}", path.display());

        let raw = read_artifact(&path)?;
        if raw
            .contract_name
            .as_deref()
            .is_some_and(|found| found != contract_name)
        {
            return Err(ArtifactError::NotFound(name.to_owned()));
        }

        let bytecode = Bytes::from(raw.bytecode);
        if bytecode.is_empty() {
            return Err(ArtifactError::NotDeployable(name.to_owned()));
        }

        Ok(ContractArtifact {
            contract_name: contract_name.to_owned(),
            source_name: raw.source_name.or_else(|| self.source_of(&path)),
            abi: raw.abi,
            bytecode,
        })
    }

    fn find(&self, name: &str) -> Result<PathBuf, ArtifactError> {
        let pattern = format!(
            "{}/**/{}.json",
            Pattern::escape(&self.root.to_string_lossy()),
            Pattern::escape(name),
        );
        let mut candidates: Vec<PathBuf> = glob::glob(&pattern)?
            .filter_map(Result::ok)
            .filter(|path| !self.is_build_info(path))
            .collect();

        match candidates.len() {
            0 => Err(ArtifactError::NotFound(name.to_owned())),
            1 => Ok(candidates.remove(0)),
            _ => Err(ArtifactError::Ambiguous {
                name: name.to_owned(),
                candidates: candidates
                    .iter()
                    .map(|path| match self.source_of(path) {
                        Some(source) => format!("{source}:{name}"),
                        None => path.display().to_string(),
                    })
                    .collect(),
            }),
        }
    }

    fn is_build_info(&self, path: &Path) -> bool {
        path.strip_prefix(&self.root)
            .map(|rel| rel.starts_with(BUILD_INFO_DIR))
            .unwrap_or(false)
    }

    /// Source path an artifact was compiled from, derived from its directory.
    fn source_of(&self, path: &Path) -> Option<String> {
        let dir = path.parent()?.strip_prefix(&self.root).ok()?;
        if dir.as_os_str().is_empty() {
            return None;
        }
        Some(dir.to_string_lossy().replace('\\', "/"))
    }
}

fn read_artifact(path: &Path) -> Result<RawArtifact, ArtifactError> {
    let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.to_owned(),
        source,
    })
}
