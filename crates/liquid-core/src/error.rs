use thiserror::Error;

/// Reasons the effect declines to start. None of these are fatal to the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("reduced motion is preferred")]
    ReducedMotion,
    #[error("missing visual anchor `{0}`")]
    MissingAnchor(&'static str),
    #[error("frame scheduler refused the first tick")]
    SchedulerUnavailable,
    #[error("effect is already mounted")]
    AlreadyMounted,
}
