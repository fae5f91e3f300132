use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

/// Error types for the Treasure Ledger Program.
///
/// Every rejected operation surfaces exactly one of these, and no rejected
/// operation leaves a partial state change behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller is not the ledger administrator
    #[error("Unauthorized: caller is not the ledger administrator")]
    Unauthorized,

    /// The null (all-zero) identity was supplied where a real identity is required
    #[error("Invalid recipient: the null identity is not allowed")]
    InvalidRecipient,

    /// Zero amount supplied where a positive amount is required
    #[error("Invalid amount: must be greater than zero")]
    InvalidAmount,

    /// Requested amount exceeds the current pool total
    #[error("Insufficient pool: requested {requested}, available {available}")]
    InsufficientPool {
        requested: u64,
        available: u64,
    },

    /// Operation requires a positive allowance that is absent
    #[error("No allowance")]
    NoAllowance,

    /// Withdrawal amount exceeds the caller's allowance
    #[error("Amount exceeds allowance: requested {requested}, allowance {allowance}")]
    AmountExceedsAllowance {
        requested: u64,
        allowance: u64,
    },

    /// Caller already claimed in the current epoch
    #[error("Already withdrawn: claim is taken until the administrator resets it")]
    AlreadyWithdrawn,

    /// Arithmetic would exceed the representable range
    #[error("Arithmetic overflow")]
    Overflow,

    /// Ledger state account already holds an initialized ledger
    #[error("Ledger already initialized")]
    AlreadyInitialized,

    /// Ledger state account has not been initialized
    #[error("Ledger not initialized")]
    NotInitialized,

    /// Provided ledger state account is not the derived PDA
    #[error("Invalid ledger state PDA")]
    InvalidLedgerStatePda,

    /// Provided recipient record account is not the derived PDA for the recipient
    #[error("Invalid recipient record PDA")]
    InvalidRecipientRecordPda,
}

/// Stable, fieldless error codes.
///
/// Clients receive `ProgramError::Custom(code)` and map it back with
/// [`LedgerErrorKind::from_code`].
#[derive(FromPrimitive, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum LedgerErrorKind {
    Unauthorized = 6000,
    InvalidRecipient = 6001,
    InvalidAmount = 6002,
    InsufficientPool = 6003,
    NoAllowance = 6004,
    AmountExceedsAllowance = 6005,
    AlreadyWithdrawn = 6006,
    Overflow = 6007,
    AlreadyInitialized = 6008,
    NotInitialized = 6009,
    InvalidLedgerStatePda = 6010,
    InvalidRecipientRecordPda = 6011,
}

impl LedgerErrorKind {
    /// Decodes a `ProgramError::Custom` code. Returns `None` for codes this
    /// program never produces.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    pub fn code(self) -> u32 {
        self as u32
    }
}

impl LedgerError {
    pub fn kind(&self) -> LedgerErrorKind {
        match self {
            LedgerError::Unauthorized => LedgerErrorKind::Unauthorized,
            LedgerError::InvalidRecipient => LedgerErrorKind::InvalidRecipient,
            LedgerError::InvalidAmount => LedgerErrorKind::InvalidAmount,
            LedgerError::InsufficientPool { .. } => LedgerErrorKind::InsufficientPool,
            LedgerError::NoAllowance => LedgerErrorKind::NoAllowance,
            LedgerError::AmountExceedsAllowance { .. } => LedgerErrorKind::AmountExceedsAllowance,
            LedgerError::AlreadyWithdrawn => LedgerErrorKind::AlreadyWithdrawn,
            LedgerError::Overflow => LedgerErrorKind::Overflow,
            LedgerError::AlreadyInitialized => LedgerErrorKind::AlreadyInitialized,
            LedgerError::NotInitialized => LedgerErrorKind::NotInitialized,
            LedgerError::InvalidLedgerStatePda => LedgerErrorKind::InvalidLedgerStatePda,
            LedgerError::InvalidRecipientRecordPda => LedgerErrorKind::InvalidRecipientRecordPda,
        }
    }

    /// Returns the unique error code for this variant.
    ///
    /// Error codes are a stable interface for client applications.
    pub fn error_code(&self) -> u32 {
        self.kind().code()
    }
}

impl From<LedgerError> for ProgramError {
    fn from(e: LedgerError) -> Self {
        ProgramError::Custom(e.error_code())
    }
}
