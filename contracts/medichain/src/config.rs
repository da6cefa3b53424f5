use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::errors::ContractError;

const CONFIG: Symbol = symbol_short!("CONFIG");

/// Upper bound for any configurable text length, in bytes.
pub const MAX_TEXT_CAPACITY: u32 = 256;

pub const DEFAULT_MAX_AGE: u32 = 150;
pub const DEFAULT_MAX_NAME_LEN: u32 = 64;
pub const DEFAULT_MAX_EMAIL_LEN: u32 = 128;
pub const DEFAULT_MAX_POINTER_LEN: u32 = 128;

/// Validation bounds applied by `register`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RegistryConfig {
    pub max_age: u32,
    pub max_name_len: u32,
    pub max_email_len: u32,
    pub max_pointer_len: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            max_age: DEFAULT_MAX_AGE,
            max_name_len: DEFAULT_MAX_NAME_LEN,
            max_email_len: DEFAULT_MAX_EMAIL_LEN,
            max_pointer_len: DEFAULT_MAX_POINTER_LEN,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        if self.max_age == 0 {
            return Err(ContractError::InvalidConfig);
        }
        for len in [self.max_name_len, self.max_email_len, self.max_pointer_len] {
            if len == 0 || len > MAX_TEXT_CAPACITY {
                return Err(ContractError::InvalidConfig);
            }
        }
        Ok(())
    }
}

pub fn get_config(env: &Env) -> RegistryConfig {
    env.storage().instance().get(&CONFIG).unwrap_or_default()
}

pub fn set_config(env: &Env, config: &RegistryConfig) -> Result<(), ContractError> {
    config.validate()?;
    env.storage().instance().set(&CONFIG, config);
    Ok(())
}
