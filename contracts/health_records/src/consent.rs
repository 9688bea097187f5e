//! Patient-controlled consent set and the shared authorization predicate.
//!
//! Consent is a per-(patient, provider) flag mutated only by the patient.
//! Revocation writes `false` rather than deleting the entry. Consent is
//! not synchronized with the global provider set: revoking a provider
//! globally leaves standing grants in place, which keeps read access
//! alive for that provider while `add_record`'s active-provider gate
//! blocks new writes.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::{extend_ttl_pair_key, patient};

pub fn consent_key(patient: &Address, provider: &Address) -> (Symbol, Address, Address) {
    (symbol_short!("CONSENT"), patient.clone(), provider.clone())
}

/// Returns true iff the patient has a standing grant for the provider.
pub fn is_granted(env: &Env, patient: &Address, provider: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&consent_key(patient, provider))
        .unwrap_or(false)
}

pub fn set_granted(env: &Env, patient: &Address, provider: &Address, granted: bool) {
    let key = consent_key(patient, provider);
    env.storage().persistent().set(&key, &granted);
    extend_ttl_pair_key(env, &key);
}

/// Evaluates the authorization predicate for record operations: a caller
/// is authorized for a patient iff it is the patient itself or holds a
/// standing consent grant from that patient.
///
/// Fails closed with `PatientNotFound` when the patient has never
/// registered, before the predicate is consulted. Callers that need the
/// active-provider gate (`add_record`) layer it separately.
pub fn require_authorized(
    env: &Env,
    caller: &Address,
    patient: &Address,
) -> Result<(), ContractError> {
    if !patient::is_registered(env, patient) {
        return Err(ContractError::PatientNotFound);
    }

    if caller == patient || is_granted(env, patient, caller) {
        return Ok(());
    }

    Err(ContractError::Unauthorized)
}
