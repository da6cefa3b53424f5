use soroban_sdk::{contracttype, Env, String};

use crate::errors::ContractError;

/// Role an identity registers under. Fixed at registration.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Patient = 1,
    Doctor = 2,
    Insurer = 3,
}

impl Role {
    /// Decodes the wire role code accepted by `register`.
    pub fn from_code(code: u32) -> Result<Role, ContractError> {
        match code {
            1 => Ok(Role::Patient),
            2 => Ok(Role::Doctor),
            3 => Ok(Role::Insurer),
            _ => Err(ContractError::InvalidRole),
        }
    }

    pub fn code(&self) -> u32 {
        *self as u32
    }
}

/// Patient profile. `record_pointer` is an opaque content address
/// (e.g. an IPFS CID) for the off-chain medical record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub record_pointer: String,
    pub registered_at: u64,
}

/// Profile shared by doctors and insurers; they carry no record pointer.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderProfile {
    pub name: String,
    pub age: u32,
    pub email: String,
    pub registered_at: u64,
}

/// Stored profile, tagged by role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Profile {
    Patient(PatientProfile),
    Doctor(ProviderProfile),
    Insurer(ProviderProfile),
}

impl Profile {
    pub fn role(&self) -> Role {
        match self {
            Profile::Patient(_) => Role::Patient,
            Profile::Doctor(_) => Role::Doctor,
            Profile::Insurer(_) => Role::Insurer,
        }
    }

    pub fn registered_at(&self) -> u64 {
        match self {
            Profile::Patient(p) => p.registered_at,
            Profile::Doctor(p) | Profile::Insurer(p) => p.registered_at,
        }
    }

    /// Flattens the profile into the five-field boundary view.
    pub fn to_info(&self, env: &Env) -> ProfileInfo {
        match self {
            Profile::Patient(p) => ProfileInfo {
                name: p.name.clone(),
                age: p.age,
                role: Role::Patient.code(),
                email: p.email.clone(),
                record_pointer: p.record_pointer.clone(),
            },
            Profile::Doctor(p) | Profile::Insurer(p) => ProfileInfo {
                name: p.name.clone(),
                age: p.age,
                role: self.role().code(),
                email: p.email.clone(),
                record_pointer: String::from_str(env, ""),
            },
        }
    }
}

/// Flat view returned by `patient_info`.
///
/// `role` is the raw role code so that the zero value (`role == 0`) can
/// stand for "never registered". Valid profiles never have an empty name or
/// email, so the zero value cannot be confused with a registered identity.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileInfo {
    pub name: String,
    pub age: u32,
    pub role: u32,
    pub email: String,
    pub record_pointer: String,
}

impl ProfileInfo {
    pub fn empty(env: &Env) -> ProfileInfo {
        ProfileInfo {
            name: String::from_str(env, ""),
            age: 0,
            role: 0,
            email: String::from_str(env, ""),
            record_pointer: String::from_str(env, ""),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.role == 0
    }
}
