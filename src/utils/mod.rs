//! Utility Functions
//!
//! Shared helpers used by the processors and the client SDK: validation,
//! PDA derivation, upgrade authority checks, account creation and
//! serialization.

pub mod account_builders;
pub mod admin_validation;
pub mod pda;
pub mod program_authority;
pub mod serialization;
pub mod validation;

// Re-export commonly used items for convenience
pub use account_builders::*;
pub use admin_validation::*;
pub use pda::*;
pub use program_authority::*;
pub use serialization::*;
pub use validation::*;
