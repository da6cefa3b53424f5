use crate::{events, ContractError};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────

const REGISTER_PAUSED: Symbol = symbol_short!("P_REG");

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&REGISTER_PAUSED)
        .unwrap_or(false)
}

/// Fails with `Paused` while registrations are halted. Reads are never gated.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Halts new registrations. The caller must already be checked as admin.
pub fn pause(env: &Env, admin: &Address) {
    env.storage().instance().set(&REGISTER_PAUSED, &true);
    events::publish_paused(env, admin.clone());
}

/// Re-opens registrations. The caller must already be checked as admin.
pub fn resume(env: &Env, admin: &Address) {
    env.storage().instance().set(&REGISTER_PAUSED, &false);
    events::publish_resumed(env, admin.clone());
}
