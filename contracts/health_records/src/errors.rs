use soroban_sdk::contracterror;

/// Error categories for classifying contract failures
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    /// Validation errors: a referenced identity fails a precondition
    Validation,
    /// Authorization errors: the caller lacks the required role or grant
    Authorization,
    /// Not found errors: the referenced entity does not exist
    NotFound,
    /// State conflict errors: creating an already-present entity
    StateConflict,
    /// System errors: contract lifecycle issues
    System,
}

/// Error severity levels indicating the impact of a failure
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorSeverity {
    /// Low severity: non-critical, caller can correct and resubmit
    Low,
    /// Medium severity: access-control rejections worth monitoring
    Medium,
    /// High severity: lifecycle misuse
    High,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ProviderAlreadyRegistered = 4,
    PatientAlreadyRegistered = 5,
    ProviderNotFound = 6,
    PatientNotFound = 7,
    NotAProvider = 8,
    RecordIndexOutOfRange = 9,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::System
            }
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::ProviderAlreadyRegistered | ContractError::PatientAlreadyRegistered => {
                ErrorCategory::StateConflict
            }
            ContractError::ProviderNotFound | ContractError::PatientNotFound => {
                ErrorCategory::NotFound
            }
            ContractError::NotAProvider | ContractError::RecordIndexOutOfRange => {
                ErrorCategory::Validation
            }
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorSeverity::High
            }
            ContractError::Unauthorized => ErrorSeverity::Medium,
            ContractError::ProviderAlreadyRegistered
            | ContractError::PatientAlreadyRegistered
            | ContractError::ProviderNotFound
            | ContractError::PatientNotFound
            | ContractError::NotAProvider
            | ContractError::RecordIndexOutOfRange => ErrorSeverity::Low,
        }
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::ProviderAlreadyRegistered => "Provider is already registered",
            ContractError::PatientAlreadyRegistered => "Patient is already registered",
            ContractError::ProviderNotFound => "Provider is not currently active",
            ContractError::PatientNotFound => "Patient not found in the registry",
            ContractError::NotAProvider => "Referenced identity is not an active provider",
            ContractError::RecordIndexOutOfRange => "Record index is beyond the log length",
        }
    }
}
