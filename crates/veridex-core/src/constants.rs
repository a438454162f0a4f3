/// Veridex system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Credibility score at or above which a source is banded Trusted.
pub const BAND_TRUSTED_MIN: f64 = 80.0;

/// Credibility score at or above which a source is banded Mostly Reliable.
pub const BAND_MOSTLY_RELIABLE_MIN: f64 = 60.0;

/// Credibility score at or above which a source is banded Questionable.
pub const BAND_QUESTIONABLE_MIN: f64 = 40.0;

/// Minimum credibility score for an article to be admitted downstream.
pub const ADMISSION_MIN_SCORE: f64 = 60.0;

/// Score and label assigned when no source profile matches a domain.
pub const NEUTRAL_FALLBACK_SCORE: f64 = 50.0;
pub const NEUTRAL_FALLBACK_LABEL: &str = "N/A";

/// Weighted-stance bound above which the verdict is True.
pub const VERDICT_TRUE_MIN: f64 = 0.3;

/// Weighted-stance bound below which the verdict is False.
pub const VERDICT_FALSE_MAX: f64 = -0.3;
