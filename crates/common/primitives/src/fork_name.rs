use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{
        ALTAIR_FORK_VERSION, BELLATRIX_FORK_VERSION, CAPELLA_FORK_VERSION, DENEB_FORK_VERSION,
        GENESIS_FORK_VERSION,
    },
    primitives::Version,
};

/// Mainnet forks whose version can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkName {
    Phase0,
    Altair,
    Bellatrix,
    Capella,
    Deneb,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown fork name: {0}")]
pub struct UnknownForkName(pub String);

impl ForkName {
    pub fn version(&self) -> Version {
        match self {
            ForkName::Phase0 => GENESIS_FORK_VERSION,
            ForkName::Altair => ALTAIR_FORK_VERSION,
            ForkName::Bellatrix => BELLATRIX_FORK_VERSION,
            ForkName::Capella => CAPELLA_FORK_VERSION,
            ForkName::Deneb => DENEB_FORK_VERSION,
        }
    }
}

impl FromStr for ForkName {
    type Err = UnknownForkName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "phase0" => Ok(ForkName::Phase0),
            "altair" => Ok(ForkName::Altair),
            "bellatrix" => Ok(ForkName::Bellatrix),
            "capella" => Ok(ForkName::Capella),
            "deneb" => Ok(ForkName::Deneb),
            _ => Err(UnknownForkName(s.to_string())),
        }
    }
}

impl fmt::Display for ForkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ForkName::Phase0 => "phase0",
            ForkName::Altair => "altair",
            ForkName::Bellatrix => "bellatrix",
            ForkName::Capella => "capella",
            ForkName::Deneb => "deneb",
        };
        f.write_str(name)
    }
}
