//! Per-patient append-only record log.
//!
//! Records are immutable once appended; the log never shrinks or
//! reorders, so an index always refers to the same entry. There is no
//! deletion or update API.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::extend_ttl_address_key;

/// A single record reference in a patient's log.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordEntry {
    /// Opaque content-addressed reference (e.g. an IPFS CID). The
    /// contract records who attested to which hash and when; it does not
    /// verify the hash resolves to real content.
    pub content_hash: String,
    /// Provider that appended the record.
    pub added_by: Address,
    /// Ledger time at append.
    pub timestamp: u64,
}

pub fn records_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("RECORDS"), patient.clone())
}

/// Loads a patient's record log, empty if nothing was ever appended.
pub fn load(env: &Env, patient: &Address) -> Vec<RecordEntry> {
    env.storage()
        .persistent()
        .get(&records_key(patient))
        .unwrap_or(Vec::new(env))
}

/// Appends an entry to a patient's log and returns its index.
pub fn append(env: &Env, patient: &Address, entry: RecordEntry) -> u32 {
    let key = records_key(patient);
    let mut log = load(env, patient);
    let index = log.len();
    log.push_back(entry);
    env.storage().persistent().set(&key, &log);
    extend_ttl_address_key(env, &key);
    index
}
