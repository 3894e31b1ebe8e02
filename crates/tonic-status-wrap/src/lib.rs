//! Attach a [`tonic::Status`] to an error without losing its cause chain.
//!
//! Responding to an RPC failure with `Status::new(code, err.to_string())`
//! flattens the original error into a string, cutting off everything
//! reachable through it (deeper causes, captured backtraces). A
//! [`StatusWrapError`] keeps both views alive: `source()` still walks to the
//! original error, while [`to_status`] recovers the attached code and message
//! at the response boundary.

mod chain;
mod extract;
mod wrap;

pub type Result<T, E = StatusWrapError> = std::result::Result<T, E>;

pub use chain::{chain, chain_contains, find_in_chain, Chain};
pub use extract::{find_status, to_status, GrpcStatus};
pub use tonic::{Code, Status};
pub use wrap::{wrap_code, wrap_status, BoxError, StatusWrapError, WrapExt};
