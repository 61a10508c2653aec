use alloy_primitives::{Bytes, B256};
use quorum_primitives::primitives::{CommitteeIndex, Slot, ValidatorIndex};
use serde::{Deserialize, Serialize};

use crate::{attestation::Attestation, error::ConsensusError};

/// Response of `/eth/v2/beacon/blocks/{block_id}`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BlockResponse {
    pub version: String,
    pub execution_optimistic: bool,
    pub finalized: bool,
    pub data: SignedBeaconBlock,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Bytes>,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SignedBeaconBlock {
    pub message: BeaconBlock,
    pub signature: Bytes,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct BeaconBlock {
    #[serde(with = "serde_utils::quoted_u64")]
    pub slot: Slot,
    #[serde(with = "serde_utils::quoted_u64")]
    pub proposer_index: ValidatorIndex,
    pub parent_root: B256,
    pub state_root: B256,
    pub body: BeaconBlockBody,
}

/// The parts of the block body the attestation pipeline reads; every other
/// body field is ignored on deserialization.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct BeaconBlockBody {
    #[serde(default)]
    pub randao_reveal: Bytes,
    #[serde(default)]
    pub graffiti: B256,
    pub attestations: Vec<Attestation>,
}

impl BeaconBlockBody {
    /// All attestations for committee ``index``, in block order.
    pub fn attestations_by_index(&self, index: CommitteeIndex) -> Vec<&Attestation> {
        self.attestations
            .iter()
            .filter(|attestation| attestation.data.index == index)
            .collect()
    }
}

impl BlockResponse {
    pub fn slot(&self) -> Slot {
        self.data.message.slot
    }

    pub fn attestations(&self) -> &[Attestation] {
        &self.data.message.body.attestations
    }

    /// The ``position``-th attestation for committee ``index``.
    pub fn attestation(
        &self,
        index: CommitteeIndex,
        position: usize,
    ) -> Result<&Attestation, ConsensusError> {
        let attestations = self.data.message.body.attestations_by_index(index);
        let available = attestations.len();
        attestations
            .into_iter()
            .nth(position)
            .ok_or(ConsensusError::AttestationNotFound {
                index,
                position,
                available,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = r#"
    {
        "version": "capella",
        "execution_optimistic": false,
        "finalized": true,
        "data": {
            "message": {
                "slot": "8165556",
                "proposer_index": "1010",
                "parent_root": "0xfec8b4772b0d37f873bc01e74944b92a4c3918e5624391fb2aa229cedf9fac54",
                "state_root": "0x0000000000000000000000000000000000000000000000000000000000000001",
                "body": {
                    "randao_reveal": "0x00",
                    "graffiti": "0x0000000000000000000000000000000000000000000000000000000000000000",
                    "eth1_data": {
                        "deposit_root": "0x0000000000000000000000000000000000000000000000000000000000000000",
                        "deposit_count": "0",
                        "block_hash": "0x0000000000000000000000000000000000000000000000000000000000000000"
                    },
                    "attestations": [
                        {
                            "aggregation_bits": "0x0d06",
                            "signature": "0xaa",
                            "data": {
                                "slot": "8165555",
                                "index": "18",
                                "beacon_block_root": "0xfec8b4772b0d37f873bc01e74944b92a4c3918e5624391fb2aa229cedf9fac54",
                                "source": {"epoch": "255172", "root": "0xf0463186e051a4e04b0172d73237b94c85dcfbbd0038fd1f135fc48e14361bdd"},
                                "target": {"epoch": "255173", "root": "0x37e7914708c50792554195b4e41e2ba1b0a19d1578138364b9584b97c299d663"}
                            }
                        },
                        {
                            "aggregation_bits": "0x01",
                            "signature": "0xbb",
                            "data": {
                                "slot": "8165555",
                                "index": "3",
                                "beacon_block_root": "0xfec8b4772b0d37f873bc01e74944b92a4c3918e5624391fb2aa229cedf9fac54",
                                "source": {"epoch": "255172", "root": "0xf0463186e051a4e04b0172d73237b94c85dcfbbd0038fd1f135fc48e14361bdd"},
                                "target": {"epoch": "255173", "root": "0x37e7914708c50792554195b4e41e2ba1b0a19d1578138364b9584b97c299d663"}
                            }
                        },
                        {
                            "aggregation_bits": "0x02",
                            "signature": "0xcc",
                            "data": {
                                "slot": "8165555",
                                "index": "18",
                                "beacon_block_root": "0xfec8b4772b0d37f873bc01e74944b92a4c3918e5624391fb2aa229cedf9fac54",
                                "source": {"epoch": "255172", "root": "0xf0463186e051a4e04b0172d73237b94c85dcfbbd0038fd1f135fc48e14361bdd"},
                                "target": {"epoch": "255173", "root": "0x37e7914708c50792554195b4e41e2ba1b0a19d1578138364b9584b97c299d663"}
                            }
                        }
                    ]
                }
            },
            "signature": "0x00"
        }
    }
    "#;

    #[test]
    fn test_parse_block() {
        let block: BlockResponse = serde_json::from_str(BLOCK).unwrap();

        assert_eq!(block.version, "capella");
        assert!(!block.execution_optimistic);
        assert!(block.finalized);
        assert_eq!(block.slot(), 8165556);
        assert_eq!(block.data.message.proposer_index, 1010);
        assert_eq!(block.attestations().len(), 3);
        assert_eq!(block.signature, None);
    }

    #[test]
    fn test_attestations_by_index_keeps_block_order() {
        let block: BlockResponse = serde_json::from_str(BLOCK).unwrap();
        let attestations = block.data.message.body.attestations_by_index(18);

        assert_eq!(attestations.len(), 2);
        assert!(attestations.iter().all(|attestation| attestation.data.index == 18));
        assert_eq!(&attestations[0].signature[..], &[0xaa]);
        assert_eq!(&attestations[1].signature[..], &[0xcc]);
        assert!(block.data.message.body.attestations_by_index(7).is_empty());
    }

    #[test]
    fn test_select_attestation_by_position() {
        let block: BlockResponse = serde_json::from_str(BLOCK).unwrap();

        let second = block.attestation(18, 1).unwrap();
        assert_eq!(second.aggregation_bits.participants(), vec![1]);

        assert!(matches!(
            block.attestation(18, 2),
            Err(ConsensusError::AttestationNotFound {
                index: 18,
                position: 2,
                available: 2
            })
        ));
    }
}
