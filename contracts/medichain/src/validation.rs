//! Field validation for `register`.
//!
//! Every check here runs before the registry touches storage. Values are
//! never normalized: a field either passes and is stored byte-for-byte, or
//! the whole registration is rejected with the error naming that field.

use soroban_sdk::String;

use crate::config::{RegistryConfig, MAX_TEXT_CAPACITY};
use crate::errors::ContractError;
use crate::profile::Role;

/// True when `value` is empty or consists only of whitespace, Unicode
/// whitespace included. Bytes that are not UTF-8 fall back to an ASCII check.
///
/// `value` must already be known to fit in `MAX_TEXT_CAPACITY` bytes.
fn is_blank(value: &String) -> bool {
    let len = value.len() as usize;
    if len == 0 {
        return true;
    }
    let mut buf = [0u8; MAX_TEXT_CAPACITY as usize];
    value.copy_into_slice(&mut buf[..len]);
    match core::str::from_utf8(&buf[..len]) {
        Ok(text) => text.trim().is_empty(),
        Err(_) => buf[..len].iter().all(|b| b.is_ascii_whitespace()),
    }
}

fn validate_text(value: &String, max_len: u32, error: ContractError) -> Result<(), ContractError> {
    if value.len() > max_len || value.len() > MAX_TEXT_CAPACITY {
        return Err(error);
    }
    if is_blank(value) {
        return Err(error);
    }
    Ok(())
}

pub fn validate_name(name: &String, config: &RegistryConfig) -> Result<(), ContractError> {
    validate_text(name, config.max_name_len, ContractError::InvalidName)
}

pub fn validate_age(age: u32, config: &RegistryConfig) -> Result<(), ContractError> {
    if age > config.max_age {
        return Err(ContractError::InvalidAge);
    }
    Ok(())
}

/// The address format is not checked beyond presence and length.
pub fn validate_email(email: &String, config: &RegistryConfig) -> Result<(), ContractError> {
    validate_text(email, config.max_email_len, ContractError::InvalidEmail)
}

/// Patients must supply a pointer; doctors and insurers must not.
pub fn validate_record_pointer(
    role: Role,
    record_pointer: &String,
    config: &RegistryConfig,
) -> Result<(), ContractError> {
    match role {
        Role::Patient => validate_text(
            record_pointer,
            config.max_pointer_len,
            ContractError::InvalidRecordPointer,
        ),
        Role::Doctor | Role::Insurer => {
            if record_pointer.len() == 0 {
                Ok(())
            } else {
                Err(ContractError::InvalidRecordPointer)
            }
        }
    }
}

/// Runs every field check in order and returns the decoded role.
pub fn validate_registration(
    name: &String,
    age: u32,
    role: u32,
    email: &String,
    record_pointer: &String,
    config: &RegistryConfig,
) -> Result<Role, ContractError> {
    let role = Role::from_code(role)?;
    validate_name(name, config)?;
    validate_age(age, config)?;
    validate_email(email, config)?;
    validate_record_pointer(role, record_pointer, config)?;
    Ok(role)
}
