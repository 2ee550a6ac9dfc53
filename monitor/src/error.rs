// Error types. Nothing is retried: a failed pass is reported to the
// caller, which logs it and moves on to the halt (or the next period).

use thiserror::Error;

use crate::mode::Mode;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("sample count must be at least 1")]
    NoSamples,
    #[error("adc full scale must be non-zero")]
    ZeroFullScale,
    #[error("reference voltage must be positive")]
    BadReference,
    #[error("divider ratio must be at least 1")]
    BadDivider,
    #[error("full charge voltage for {0} must be positive")]
    BadFullCharge(Mode),
    #[error("refresh interval must be non-zero")]
    ZeroRefreshInterval,
}

/// Failure of one pass, tagged by the peripheral that reported it.
///
/// `AE`, `PE` and `DE` are the error types of the ADC channel, the mode
/// switch pin and the panel respectively.
#[derive(Error, Debug)]
pub enum MonitorError<AE, PE, DE> {
    #[error("mode switch read failed: {0:?}")]
    ModePin(PE),
    #[error("adc read failed: {0:?}")]
    Adc(AE),
    #[error("display write failed: {0:?}")]
    Display(DE),
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
