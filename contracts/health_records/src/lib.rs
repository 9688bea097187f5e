#![no_std]

pub mod consent;
pub mod errors;
pub mod events;
pub mod patient;
pub mod provider;
pub mod records;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};
pub use records::RecordEntry;

/// Instance storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Extends the time-to-live (TTL) for a persistent storage key composed of
/// a symbol and a single address, ensuring the entry stays live.
pub(crate) fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live (TTL) for a persistent storage key composed of
/// a symbol and an address pair (consent entries).
pub(crate) fn extend_ttl_pair_key(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

#[contract]
pub struct HealthRecordsContract;

#[contractimpl]
impl HealthRecordsContract {
    /// Initialize the contract, binding the admin for its lifetime.
    /// There is no admin rotation; the admin is fixed at creation.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Register a healthcare provider. Admin only.
    ///
    /// Re-registering an address whose flag was cleared by a revoke is
    /// allowed; registering an already-active provider fails.
    pub fn register_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if provider::is_active(&env, &provider) {
            return Err(ContractError::ProviderAlreadyRegistered);
        }

        provider::set_active(&env, &provider, true);
        events::publish_provider_registered(&env, provider);

        Ok(())
    }

    /// Revoke a healthcare provider. Admin only.
    ///
    /// Clears the active flag; it does not touch any standing patient
    /// consent, so a revoked provider keeps read access wherever a grant
    /// is still in place but can no longer append records.
    pub fn revoke_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if !provider::is_active(&env, &provider) {
            return Err(ContractError::ProviderNotFound);
        }

        provider::set_active(&env, &provider, false);
        events::publish_provider_revoked(&env, provider);

        Ok(())
    }

    /// Check whether an address is a currently-active provider.
    /// Public lookup, no authorization required.
    pub fn is_provider(env: Env, provider: Address) -> bool {
        provider::is_active(&env, &provider)
    }

    /// Register the caller as a patient. A second registration for the
    /// same address is rejected, never silently accepted.
    pub fn register_patient(env: Env, patient: Address) -> Result<(), ContractError> {
        patient.require_auth();
        Self::require_initialized(&env)?;

        if patient::is_registered(&env, &patient) {
            return Err(ContractError::PatientAlreadyRegistered);
        }

        patient::set_registered(&env, &patient);
        events::publish_patient_registered(&env, patient);

        Ok(())
    }

    /// Grant a provider access to the caller's records.
    ///
    /// The caller manages only their own consent set. The grantee must be
    /// an active provider at grant time. Re-authorizing an already
    /// authorized provider is a no-op success.
    pub fn authorize_provider(
        env: Env,
        patient: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        patient.require_auth();
        Self::require_initialized(&env)?;

        if !patient::is_registered(&env, &patient) {
            return Err(ContractError::PatientNotFound);
        }
        if !provider::is_active(&env, &provider) {
            return Err(ContractError::NotAProvider);
        }

        consent::set_granted(&env, &patient, &provider, true);
        events::publish_provider_authorized(&env, patient, provider);

        Ok(())
    }

    /// Revoke a provider's access to the caller's records.
    ///
    /// No active-provider check: revoking a since-revoked or never-valid
    /// provider is allowed and harmless. Idempotent.
    pub fn revoke_provider_access(
        env: Env,
        patient: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        patient.require_auth();
        Self::require_initialized(&env)?;

        if !patient::is_registered(&env, &patient) {
            return Err(ContractError::PatientNotFound);
        }

        consent::set_granted(&env, &patient, &provider, false);
        events::publish_provider_access_revoked(&env, patient, provider);

        Ok(())
    }

    /// Append a record reference to a patient's log.
    ///
    /// The caller must be a currently-active provider and must hold
    /// access to the patient (self or granted consent). The content hash
    /// is opaque; format and uniqueness are not validated. Returns the
    /// index of the new record.
    pub fn add_record(
        env: Env,
        provider: Address,
        patient: Address,
        content_hash: String,
    ) -> Result<u32, ContractError> {
        provider.require_auth();
        Self::require_initialized(&env)?;

        if !provider::is_active(&env, &provider) {
            return Err(ContractError::Unauthorized);
        }
        consent::require_authorized(&env, &provider, &patient)?;

        let entry = RecordEntry {
            content_hash: content_hash.clone(),
            added_by: provider.clone(),
            timestamp: env.ledger().timestamp(),
        };
        let index = records::append(&env, &patient, entry);

        events::publish_record_added(&env, patient, provider, content_hash, index);

        Ok(index)
    }

    /// Get the number of records in a patient's log.
    ///
    /// Requires access to the patient (self or granted consent). Unlike
    /// `add_record`, reads carry no active-provider gate.
    pub fn get_record_count(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<u32, ContractError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        consent::require_authorized(&env, &caller, &patient)?;

        Ok(records::load(&env, &patient).len())
    }

    /// Get a record by its index in a patient's log.
    ///
    /// Requires access to the patient (self or granted consent).
    pub fn get_record(
        env: Env,
        caller: Address,
        patient: Address,
        index: u32,
    ) -> Result<RecordEntry, ContractError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        consent::require_authorized(&env, &caller, &patient)?;

        records::load(&env, &patient)
            .get(index)
            .ok_or(ContractError::RecordIndexOutOfRange)
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin = Self::get_admin(env.clone())?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }
}
