use soroban_sdk::{contracttype, Address, Env, String};

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Validation errors: a profile field or config bound was rejected
    Validation = 1,
    /// Authorization errors: caller is not the registry admin
    Authorization = 2,
    /// State conflict errors: duplicate registration or initialization
    StateConflict = 3,
    /// System errors: contract-level issues like pausing
    System = 4,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    /// Low severity: caller can correct the input and resubmit
    Low = 1,
    /// Medium severity: rejected because of existing state
    Medium = 2,
    /// High severity: operator action is needed
    High = 3,
}

/// Profile field named by an `InvalidField`-class error.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ProfileField {
    Name = 1,
    Age = 2,
    Role = 3,
    Email = 4,
    RecordPointer = 5,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub user: Option<Address>,
    pub timestamp: u64,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    AlreadyRegistered = 4,
    InvalidName = 5,
    InvalidAge = 6,
    InvalidRole = 7,
    InvalidEmail = 8,
    InvalidRecordPointer = 9,
    InvalidConfig = 10,
    Paused = 11,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidName
            | ContractError::InvalidAge
            | ContractError::InvalidRole
            | ContractError::InvalidEmail
            | ContractError::InvalidRecordPointer
            | ContractError::InvalidConfig => ErrorCategory::Validation,
            ContractError::NotInitialized | ContractError::Unauthorized => {
                ErrorCategory::Authorization
            }
            ContractError::AlreadyInitialized | ContractError::AlreadyRegistered => {
                ErrorCategory::StateConflict
            }
            ContractError::Paused => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidName
            | ContractError::InvalidAge
            | ContractError::InvalidRole
            | ContractError::InvalidEmail
            | ContractError::InvalidRecordPointer
            | ContractError::InvalidConfig => ErrorSeverity::Low,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::Unauthorized
            | ContractError::AlreadyRegistered => ErrorSeverity::Medium,
            ContractError::Paused => ErrorSeverity::High,
        }
    }

    /// The profile field that failed validation, for `InvalidField`-class errors.
    pub fn field(&self) -> Option<ProfileField> {
        match self {
            ContractError::InvalidName => Some(ProfileField::Name),
            ContractError::InvalidAge => Some(ProfileField::Age),
            ContractError::InvalidRole => Some(ProfileField::Role),
            ContractError::InvalidEmail => Some(ProfileField::Email),
            ContractError::InvalidRecordPointer => Some(ProfileField::RecordPointer),
            _ => None,
        }
    }

    pub fn is_invalid_field(&self) -> bool {
        self.field().is_some()
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::AlreadyRegistered => "Identity is already registered",
            ContractError::InvalidName => "Name must be non-empty and within the length bound",
            ContractError::InvalidAge => "Age exceeds the configured maximum",
            ContractError::InvalidRole => "Role code is not a defined role",
            ContractError::InvalidEmail => "Email must be non-empty and within the length bound",
            ContractError::InvalidRecordPointer => {
                "Record pointer is required for patients and not accepted for other roles"
            }
            ContractError::InvalidConfig => "Registry configuration bound is out of range",
            ContractError::Paused => "Registrations are currently paused",
        }
    }
}

/// Creates an ErrorContext from an error and the identity it concerns.
pub fn create_error_context(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        user,
        timestamp: env.ledger().timestamp(),
    }
}
