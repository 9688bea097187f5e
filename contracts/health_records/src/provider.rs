//! Admin-gated provider set.
//!
//! Membership is a reassignable flag: registration writes `true`,
//! revocation writes `false`, entries are never removed. Toggling between
//! active and revoked is supported across the provider's lifetime.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::extend_ttl_address_key;

pub fn provider_key(provider: &Address) -> (Symbol, Address) {
    (symbol_short!("PROVIDER"), provider.clone())
}

/// Returns true iff the address is a currently-active provider.
pub fn is_active(env: &Env, provider: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&provider_key(provider))
        .unwrap_or(false)
}

pub fn set_active(env: &Env, provider: &Address, active: bool) {
    let key = provider_key(provider);
    env.storage().persistent().set(&key, &active);
    extend_ttl_address_key(env, &key);
}
