use serde::{Deserialize, Serialize};

/// Editorial-quality reference record for one source, as stored in the
/// credibility dataset.
///
/// The dataset ships with human-edited column names ("Source URL", "Bias",
/// and so on); serde aliases map them onto the snake_case fields. Records
/// are loaded once per session and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceProfile {
    /// The source's URL as stored in the dataset (matched by substring).
    #[serde(alias = "Source URL")]
    pub source_url: String,

    /// Editorial bias label, e.g. "least biased", "right-center".
    #[serde(alias = "Bias", default)]
    pub bias: Option<String>,

    /// Factual-reporting track record, e.g. "high", "mixed".
    #[serde(alias = "Factual Reporting", default)]
    pub factual_reporting: Option<String>,

    /// Third-party credibility label, e.g. "high", "medium", "low".
    #[serde(alias = "Credibility", default)]
    pub credibility: Option<String>,

    /// Outlet medium, e.g. "newspaper", "tv station", "website".
    #[serde(alias = "Media Type", default)]
    pub media_type: Option<String>,
}

impl SourceProfile {
    /// Build a profile from owned label strings. Test and fixture helper.
    pub fn new(
        source_url: impl Into<String>,
        bias: Option<&str>,
        factual_reporting: Option<&str>,
        credibility: Option<&str>,
        media_type: Option<&str>,
    ) -> Self {
        Self {
            source_url: source_url.into(),
            bias: bias.map(str::to_string),
            factual_reporting: factual_reporting.map(str::to_string),
            credibility: credibility.map(str::to_string),
            media_type: media_type.map(str::to_string),
        }
    }
}
