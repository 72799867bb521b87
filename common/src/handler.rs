//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler of an operation described by `Args`.
///
/// Both the domain service and its infrastructure are expressed as sets of
/// [`Handler`] implementations, one per supported operation.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
