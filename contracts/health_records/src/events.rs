use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the admin registers a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRegisteredEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when the admin revokes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderRevokedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when an address registers itself as a patient.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient: Address,
    pub timestamp: u64,
}

/// Event published when a patient grants a provider access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub patient: Address,
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a patient revokes a provider's access.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAccessRevokedEvent {
    pub patient: Address,
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a record reference is appended to a patient's log.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub patient: Address,
    pub provider: Address,
    pub content_hash: String,
    pub index: u32,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is registered by the admin.
pub fn publish_provider_registered(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_REG"), provider.clone());
    let data = ProviderRegisteredEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is revoked by the admin.
pub fn publish_provider_revoked(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_REV"), provider.clone());
    let data = ProviderRevokedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient self-registers.
pub fn publish_patient_registered(env: &Env, patient: Address) {
    let topics = (symbol_short!("PAT_REG"), patient.clone());
    let data = PatientRegisteredEvent {
        patient,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient grants a provider access.
pub fn publish_provider_authorized(env: &Env, patient: Address, provider: Address) {
    let topics = (symbol_short!("CST_GRT"), patient.clone(), provider.clone());
    let data = ProviderAuthorizedEvent {
        patient,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient revokes a provider's access.
pub fn publish_provider_access_revoked(env: &Env, patient: Address, provider: Address) {
    let topics = (symbol_short!("CST_REV"), patient.clone(), provider.clone());
    let data = ProviderAccessRevokedEvent {
        patient,
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record reference is appended.
pub fn publish_record_added(
    env: &Env,
    patient: Address,
    provider: Address,
    content_hash: String,
    index: u32,
) {
    let topics = (symbol_short!("REC_ADD"), patient.clone(), provider.clone());
    let data = RecordAddedEvent {
        patient,
        provider,
        content_hash,
        index,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
