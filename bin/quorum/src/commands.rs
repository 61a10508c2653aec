use std::{
    collections::{hash_map::Entry, HashMap},
    fs,
    sync::Arc,
};

use alloy_primitives::B256;
use anyhow::{anyhow, Context};
use itertools::Itertools;
use quorum_consensus::{
    attestation::Attestation,
    attestation_data::AttestationData,
    attester::{AttestationOutcome, AttestationVerifier},
    beacon_block::BlockResponse,
    committee::CommitteeResponse,
    container::FixedContainer,
    validator::ValidatorRegistry,
};
use quorum_executor::VerificationExecutor;
use quorum_primitives::primitives::Slot;
use tracing::{info, warn};

use crate::{
    cli::{Commands, SigningRootCommand, VerifyBlockCommand, VerifyCommand},
    fixtures::FixtureDir,
};

/// Runs ``command`` and reports whether every checked signature was valid.
pub fn run(command: Commands) -> anyhow::Result<bool> {
    match command {
        Commands::Verify(cmd) => verify(&cmd),
        Commands::VerifyBlock(cmd) => verify_block(&cmd),
        Commands::SigningRoot(cmd) => {
            let root = signing_root(&cmd)?;
            println!("{root}");
            Ok(true)
        }
    }
}

pub fn verify(cmd: &VerifyCommand) -> anyhow::Result<bool> {
    let verifier = AttestationVerifier::new(cmd.network.resolve()?);
    let fixtures = FixtureDir::new(&cmd.fixtures);

    let block = fixtures.block(cmd.slot)?;
    let attestation = block
        .attestation(cmd.committee_index, cmd.position)
        .with_context(|| format!("Block {} has no matching attestation", cmd.slot))?;
    let inputs = BlockInputs::load(&fixtures, std::slice::from_ref(attestation))?;

    let committees = inputs.committees_at(attestation)?;
    let outcome = verifier.verify(attestation, committees, &inputs.validators)?;
    print_outcome(attestation, &outcome);

    Ok(outcome.valid)
}

pub fn verify_block(cmd: &VerifyBlockCommand) -> anyhow::Result<bool> {
    let verifier = Arc::new(AttestationVerifier::new(cmd.network.resolve()?));
    let fixtures = FixtureDir::new(&cmd.fixtures);

    let block = fixtures.block(cmd.slot)?;
    let inputs = Arc::new(BlockInputs::load(&fixtures, block.attestations())?);
    let attestations = block.attestations().to_vec();

    info!(
        slot = block.slot(),
        attestations = attestations.len(),
        validators = inputs.validators.len(),
        "Verifying block"
    );

    let executor = VerificationExecutor::new().context("Failed to start executor")?;
    let tasks = attestations.iter().cloned().map(|attestation| {
        let verifier = verifier.clone();
        let inputs = inputs.clone();
        move || {
            let committees = inputs.committees_at(&attestation)?;
            let outcome = verifier.verify(&attestation, committees, &inputs.validators)?;
            anyhow::Ok(outcome)
        }
    });

    let mut invalid = 0;
    for (attestation, result) in attestations.iter().zip(executor.run_blocking(tasks)) {
        let outcome = result.map_err(|err| anyhow!("Verification task failed: {err}"))??;
        print_outcome(attestation, &outcome);
        if !outcome.valid {
            invalid += 1;
        }
    }

    if invalid > 0 {
        warn!(slot = block.slot(), invalid, "Block carries invalid attestations");
    }
    println!(
        "block {}: {} of {} attestations valid",
        block.slot(),
        attestations.len() - invalid,
        attestations.len()
    );

    Ok(invalid == 0)
}

pub fn signing_root(cmd: &SigningRootCommand) -> anyhow::Result<B256> {
    let verifier = AttestationVerifier::new(cmd.network.resolve()?);
    let path = &cmd.attestation_data;
    let contents = fs::read(path)
        .with_context(|| format!("Failed to read attestation data {}", path.display()))?;
    let data = if cmd.ssz {
        AttestationData::from_ssz(&contents)?
    } else {
        serde_json::from_slice(&contents)
            .with_context(|| format!("Failed to parse attestation data {}", path.display()))?
    };

    Ok(verifier.signing_root(&data))
}

fn print_outcome(attestation: &Attestation, outcome: &AttestationOutcome) {
    println!(
        "slot={} index={} signers=[{}] signing_root={} valid={}",
        attestation.data.slot,
        attestation.data.index,
        outcome.signers.iter().join(","),
        outcome.signing_root,
        outcome.valid
    );
}

/// Committees and validators needed to check a set of attestations, keyed by
/// the attestation slot.
struct BlockInputs {
    committees: HashMap<Slot, CommitteeResponse>,
    validators: ValidatorRegistry,
}

impl BlockInputs {
    fn load(fixtures: &FixtureDir, attestations: &[Attestation]) -> anyhow::Result<Self> {
        let mut committees = HashMap::new();
        let mut validators = ValidatorRegistry::new();

        for attestation in attestations {
            let data = &attestation.data;
            let response = match committees.entry(data.slot) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => entry.insert(fixtures.committees(data.slot)?),
            };

            let committee = response.find_committee(data.slot, data.index)?;
            let signers = committee.members_at(&attestation.aggregation_bits.participants());
            fixtures.load_validators(&mut validators, data.slot, &signers)?;
        }

        Ok(Self {
            committees,
            validators,
        })
    }

    fn committees_at(&self, attestation: &Attestation) -> anyhow::Result<&CommitteeResponse> {
        self.committees
            .get(&attestation.data.slot)
            .ok_or_else(|| anyhow!("No committees loaded for slot {}", attestation.data.slot))
    }
}
