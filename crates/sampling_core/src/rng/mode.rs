//! Random mode selection and the process-wide default.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::error::SamplingError;

/// Process-wide default used by [`RandomSource::new`](super::RandomSource::new).
static STRONG_BY_DEFAULT: AtomicBool = AtomicBool::new(false);

/// Which generator backs a random source.
///
/// # Examples
///
/// ```rust
/// use sampling_core::rng::RandomMode;
///
/// assert_eq!(RandomMode::default(), RandomMode::Standard);
/// assert_eq!("crypto".parse::<RandomMode>().unwrap(), RandomMode::Cryptographic);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RandomMode {
    /// Fast pseudo-random generator, not suitable for security-sensitive use.
    #[default]
    Standard,

    /// Cryptographically secure generator backed by the operating system.
    Cryptographic,
}

impl RandomMode {
    /// Returns the mode new providers currently start in.
    pub fn process_default() -> Self {
        if strong_randomness_enabled() {
            Self::Cryptographic
        } else {
            Self::Standard
        }
    }

    /// Returns `true` for [`RandomMode::Cryptographic`].
    #[inline]
    pub fn is_strong(self) -> bool {
        matches!(self, Self::Cryptographic)
    }
}

impl fmt::Display for RandomMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Cryptographic => write!(f, "cryptographic"),
        }
    }
}

impl FromStr for RandomMode {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" | "std" => Ok(Self::Standard),
            "cryptographic" | "crypto" | "strong" => Ok(Self::Cryptographic),
            other => Err(SamplingError::invalid_argument(
                "mode",
                format!("unknown random mode '{}'", other),
            )),
        }
    }
}

/// Makes cryptographic randomness the default for newly built providers.
///
/// Idempotent. Providers that already exist keep their own mode.
pub fn enable_strong_randomness() {
    STRONG_BY_DEFAULT.store(true, Ordering::SeqCst);
    debug!("Enabled OsRng as the default random source");
}

/// Restores the standard generator as the default for newly built providers.
///
/// Idempotent. Providers that already exist keep their own mode.
pub fn disable_strong_randomness() {
    STRONG_BY_DEFAULT.store(false, Ordering::SeqCst);
    debug!("Disabled OsRng as the default random source");
}

/// Returns whether newly built providers start in cryptographic mode.
pub fn strong_randomness_enabled() -> bool {
    STRONG_BY_DEFAULT.load(Ordering::SeqCst)
}
