use std::error::Error;

use tonic::Status;

use crate::chain::chain;
use crate::wrap::StatusWrapError;

/// Marks an error as bearing a [`Status`] for the response boundary.
pub trait GrpcStatus {
    fn grpc_status(&self) -> &Status;
}

impl GrpcStatus for Status {
    fn grpc_status(&self) -> &Status {
        self
    }
}

/// Returns the status borne by the first error in the chain that carries
/// one, `err` itself included.
pub fn find_status<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Status> {
    chain(err).find_map(status_of)
}

fn status_of<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Status> {
    if let Some(wrapped) = err.downcast_ref::<StatusWrapError>() {
        return Some(wrapped.grpc_status());
    }
    err.downcast_ref::<Status>()
}

/// Converts an arbitrary error into the [`Status`] to respond with: the
/// status found in its chain, or `UNKNOWN` with the error's display text.
pub fn to_status(err: &(dyn Error + 'static)) -> Status {
    match find_status(err) {
        Some(status) => status.clone(),
        None => {
            log::debug!("no status attached to error, responding UNKNOWN: {err}");
            Status::unknown(err.to_string())
        }
    }
}
