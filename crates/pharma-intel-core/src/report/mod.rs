//! Rendered text reports for clinical and reimbursement lookups.

mod clinical;
mod schemes;

pub use clinical::*;
pub use schemes::*;
