//! Patient registry.
//!
//! A patient entry is created exactly once by self-registration and the
//! registered flag is never reset afterwards.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::extend_ttl_address_key;

pub fn patient_key(patient: &Address) -> (Symbol, Address) {
    (symbol_short!("PATIENT"), patient.clone())
}

/// Returns true iff the address has completed self-registration.
pub fn is_registered(env: &Env, patient: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&patient_key(patient))
        .unwrap_or(false)
}

pub fn set_registered(env: &Env, patient: &Address) {
    let key = patient_key(patient);
    env.storage().persistent().set(&key, &true);
    extend_ttl_address_key(env, &key);
}
