use thiserror::Error;
use tonic::{Code, Status};

use crate::extract::GrpcStatus;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An error carrying a [`Status`] for the response boundary while keeping
/// its cause intact.
///
/// Displays as the cause, never as the status message. `source()` returns
/// the cause unchanged, so chain traversal behaves as if the wrapper were
/// not there.
#[derive(Debug, Error)]
#[error("{cause}")]
pub struct StatusWrapError {
    #[source]
    cause: BoxError,
    status: Status,
}

impl StatusWrapError {
    /// Wraps `cause` with `status` attached verbatim. The status message is
    /// independent of the cause's display text.
    pub fn new(cause: impl Into<BoxError>, status: Status) -> Self {
        Self {
            cause: cause.into(),
            status,
        }
    }

    /// Wraps `cause` with a status formed from `code` and the cause's
    /// display text.
    pub fn with_code(cause: impl Into<BoxError>, code: Code) -> Self {
        let cause = cause.into();
        let status = Status::new(code, cause.to_string());
        Self { cause, status }
    }

    pub fn cause(&self) -> &(dyn std::error::Error + 'static) {
        &*self.cause
    }

    pub fn into_cause(self) -> BoxError {
        self.cause
    }
}

impl GrpcStatus for StatusWrapError {
    fn grpc_status(&self) -> &Status {
        &self.status
    }
}

impl From<StatusWrapError> for Status {
    fn from(err: StatusWrapError) -> Self {
        err.status
    }
}

#[cfg(feature = "anyhow")]
impl From<anyhow::Error> for StatusWrapError {
    fn from(err: anyhow::Error) -> Self {
        Self::with_code(err, Code::Internal)
    }
}

/// Wraps `err` with a status formed from `code` and the error's display
/// text. Returns `None` if `err` is `None`, so the call is safe to make
/// unconditionally in an error branch.
pub fn wrap_code<E: Into<BoxError>>(err: Option<E>, code: Code) -> Option<StatusWrapError> {
    err.map(|err| StatusWrapError::with_code(err, code))
}

/// Wraps `err` with `status` attached verbatim. Returns `None` if `err` is
/// `None`.
pub fn wrap_status<E: Into<BoxError>>(err: Option<E>, status: Status) -> Option<StatusWrapError> {
    err.map(|err| StatusWrapError::new(err, status))
}

pub trait WrapExt {
    type Output;
    fn or_wrap(self, code: Code) -> Result<Self::Output, StatusWrapError>;
    fn or_wrap_status(self, status: Status) -> Result<Self::Output, StatusWrapError>;
}

impl<T, E: Into<BoxError>> WrapExt for Result<T, E> {
    type Output = T;
    fn or_wrap(self, code: Code) -> Result<T, StatusWrapError> {
        self.map_err(|err| StatusWrapError::with_code(err, code))
    }
    fn or_wrap_status(self, status: Status) -> Result<T, StatusWrapError> {
        self.map_err(|err| StatusWrapError::new(err, status))
    }
}
