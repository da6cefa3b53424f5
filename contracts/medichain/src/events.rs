use crate::config::RegistryConfig;
use crate::profile::Role;
use soroban_sdk::{symbol_short, Address, Env};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when an identity registers. Consumed by off-chain
/// indexers; the registry never reads it back.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegisteredEvent {
    pub identity: Address,
    pub role: Role,
    pub timestamp: u64,
}

/// Event published when the admin replaces the validation bounds.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigUpdatedEvent {
    pub admin: Address,
    pub config: RegistryConfig,
    pub timestamp: u64,
}

/// Event published when registrations are paused or resumed.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseEvent {
    pub admin: Address,
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

/// Publishes an event when a new identity is registered.
/// Topics carry the identity so indexers can filter on it.
pub fn publish_registered(env: &Env, identity: Address, role: Role) {
    let topics = (symbol_short!("REGISTER"), identity.clone());
    let data = RegisteredEvent {
        identity,
        role,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_config_updated(env: &Env, admin: Address, config: RegistryConfig) {
    let topics = (symbol_short!("CFG_UPD"),);
    let data = ConfigUpdatedEvent {
        admin,
        config,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_paused(env: &Env, admin: Address) {
    let topics = (symbol_short!("PAUSED"),);
    let data = PauseEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_resumed(env: &Env, admin: Address) {
    let topics = (symbol_short!("RESUMED"),);
    let data = PauseEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
