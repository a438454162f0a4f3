//! Lexical cue scan used to resolve neutral NLI labels.
//!
//! News summaries often state their verdict in plain words ("officials
//! denied", "the agency confirmed") that a sentence-pair classifier
//! reads as neutral. Scanning for these phrases recovers that signal.

/// Phrases signalling the summary denies or debunks the claim.
pub const NEGATIVE_CUES: [&str; 9] = [
    "fake",
    "false",
    "denied",
    "refuted",
    "clarified",
    "no such",
    "fabricated",
    "not true",
    "incorrect",
];

/// Phrases signalling the summary confirms the claim.
pub const POSITIVE_CUES: [&str; 7] = [
    "confirmed",
    "agreed",
    "verified",
    "approved",
    "affirmed",
    "announced",
    "declared",
];

/// Outcome of scanning a text for verdict cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueMatch {
    /// At least one denial phrase, no confirmation phrase.
    Negative,
    /// At least one confirmation phrase, no denial phrase.
    Positive,
    /// Both kinds present; the signal is contradictory and unusable.
    Both,
    /// Neither kind present.
    None,
}

/// Scan `text` for verdict cues. Matching is case-insensitive substring
/// search over the whole text.
pub fn evaluate(text: &str) -> CueMatch {
    let lowered = text.to_lowercase();
    let negative = NEGATIVE_CUES.iter().any(|cue| lowered.contains(cue));
    let positive = POSITIVE_CUES.iter().any(|cue| lowered.contains(cue));
    match (negative, positive) {
        (true, true) => CueMatch::Both,
        (true, false) => CueMatch::Negative,
        (false, true) => CueMatch::Positive,
        (false, false) => CueMatch::None,
    }
}
