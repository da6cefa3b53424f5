#![no_std]

pub mod circuit_breaker;
pub mod config;
pub mod errors;
pub mod events;
pub mod profile;
pub mod validation;

use soroban_sdk::{contract, contractimpl, log, symbol_short, Address, Env, String, Symbol};

pub use config::RegistryConfig;
pub use errors::{create_error_context, ContractError, ErrorCategory, ErrorSeverity, ProfileField};
pub use profile::{PatientProfile, Profile, ProfileInfo, ProviderProfile, Role};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const PROFILE: Symbol = symbol_short!("PROFILE");
const REG_COUNTER: Symbol = symbol_short!("REG_CTR");

/// Label identifying this registry deployment.
pub const REGISTRY_NAME: &str = "mediChain";

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

fn profile_key(identity: &Address) -> (Symbol, Address) {
    (PROFILE, identity.clone())
}

/// Extends the time-to-live (TTL) for a profile entry so the record stays
/// readable for the extended period.
fn extend_ttl_profile_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Reports a rejected call through diagnostic logging. Contract events are
/// discarded when the call fails, diagnostics are not.
fn log_rejection(env: &Env, error: ContractError, user: Option<Address>) {
    let code = error as u32;
    let context = create_error_context(env, error, user);
    log!(env, "request rejected", code, context);
}

#[contract]
pub struct MediChainContract;

#[contractimpl]
impl MediChainContract {
    /// Initialize the contract with an admin address
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

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

    /// The fixed label of this registry.
    pub fn name(env: Env) -> String {
        String::from_str(&env, REGISTRY_NAME)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    /// Registers the calling identity.
    ///
    /// The caller is the key: nobody can register on another identity's
    /// behalf. Every check runs before the first write, so a rejected call
    /// leaves no trace in storage. `role` is the wire code (1 = Patient,
    /// 2 = Doctor, 3 = Insurer).
    pub fn register(
        env: Env,
        caller: Address,
        name: String,
        age: u32,
        role: u32,
        email: String,
        record_pointer: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        if let Err(err) = circuit_breaker::require_not_paused(&env) {
            log_rejection(&env, err, Some(caller));
            return Err(err);
        }

        let key = profile_key(&caller);
        if env.storage().persistent().has(&key) {
            log_rejection(&env, ContractError::AlreadyRegistered, Some(caller));
            return Err(ContractError::AlreadyRegistered);
        }

        let config = config::get_config(&env);
        let role = match validation::validate_registration(
            &name,
            age,
            role,
            &email,
            &record_pointer,
            &config,
        ) {
            Ok(role) => role,
            Err(err) => {
                log_rejection(&env, err, Some(caller));
                return Err(err);
            }
        };

        let registered_at = env.ledger().timestamp();
        let profile = match role {
            Role::Patient => Profile::Patient(PatientProfile {
                name,
                age,
                email,
                record_pointer,
                registered_at,
            }),
            Role::Doctor => Profile::Doctor(ProviderProfile {
                name,
                age,
                email,
                registered_at,
            }),
            Role::Insurer => Profile::Insurer(ProviderProfile {
                name,
                age,
                email,
                registered_at,
            }),
        };

        env.storage().persistent().set(&key, &profile);
        extend_ttl_profile_key(&env, &key);

        let count: u64 = env.storage().instance().get(&REG_COUNTER).unwrap_or(0);
        env.storage()
            .instance()
            .set(&REG_COUNTER, &count.saturating_add(1));

        events::publish_registered(&env, caller, role);

        Ok(())
    }

    /// Flat profile view. Unregistered identities get the zero value
    /// (empty strings, age 0, role 0) instead of an error.
    pub fn patient_info(env: Env, identity: Address) -> ProfileInfo {
        match Self::profile_of(env.clone(), identity) {
            Some(profile) => profile.to_info(&env),
            None => ProfileInfo::empty(&env),
        }
    }

    /// Typed profile for `identity`, if it has registered.
    pub fn profile_of(env: Env, identity: Address) -> Option<Profile> {
        env.storage().persistent().get(&profile_key(&identity))
    }

    /// True once `identity` has a profile.
    pub fn is_registered(env: Env, identity: Address) -> bool {
        env.storage().persistent().has(&profile_key(&identity))
    }

    /// Role the identity registered under, if any.
    pub fn get_role(env: Env, identity: Address) -> Option<Role> {
        Self::profile_of(env, identity).map(|profile| profile.role())
    }

    /// Number of successful registrations so far.
    pub fn get_registration_count(env: Env) -> u64 {
        env.storage().instance().get(&REG_COUNTER).unwrap_or(0)
    }

    // ======================== Admin Endpoints ========================

    /// Current validation bounds (defaults until the admin sets them).
    pub fn get_config(env: Env) -> RegistryConfig {
        config::get_config(&env)
    }

    /// Replaces the validation bounds. Existing profiles are not re-checked.
    pub fn set_config(
        env: Env,
        caller: Address,
        config: RegistryConfig,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        config::set_config(&env, &config)?;
        events::publish_config_updated(&env, caller, config);

        Ok(())
    }

    /// Halts new registrations. Reads stay available.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        circuit_breaker::pause(&env, &caller);
        Ok(())
    }

    /// Re-opens registrations after a pause.
    pub fn resume(env: Env, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        circuit_breaker::resume(&env, &caller);
        Ok(())
    }

    /// Whether registrations are currently halted.
    pub fn is_paused(env: Env) -> bool {
        circuit_breaker::is_paused(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            log_rejection(env, ContractError::Unauthorized, Some(caller.clone()));
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }
}
