use thiserror_no_std::Error;

/// Failure of a collaborator during a tick
///
/// Every variant is fatal to the loop, there is no retry.
#[derive(Debug, Error)]
pub enum ControlError<L, T, O> {
    #[error("ambient light sensor read failed: {0:?}")]
    Light(L),
    #[error("tilt sensor read failed: {0:?}")]
    Tilt(T),
    #[error("LED strip write failed: {0:?}")]
    Output(O),
}
