//! Built-in detector definitions
//!
//! Social Security Numbers are accepted in any of these shapes:
//! - `ddddddddd`
//! - `ddd-dd-dddd`
//! - `ddd dd dddd`
//!
//! The two separators are not required to agree, so `123-45 6789` is also a
//! candidate. SSNs carry no checksum; related keywords only raise the
//! context rank.
//!
//! IBANs are a two-letter country code, two check digits, an optional space,
//! one to seven groups of four alphanumerics (each optionally followed by a
//! space) and an optional tail of one to three alphanumerics. Candidates must
//! pass the mod-97 check. IBANs have no context keywords.

use super::detector::PatternDetector;
use super::models::SensitiveDataType;
use super::validator::MatchValidator;
use crate::domain::Result;

/// Display name of the SSN detector, used to key errors
pub const SSN_DETECTOR_NAME: &str = "Social Security Number Scanner";

/// Candidate pattern for Social Security Numbers
pub const SSN_PATTERN: &str = r"\d{3}[ -]\d{2}[ -]\d{4}|\d{9}";

/// Keywords that suggest an SSN is nearby
///
/// Earlier entries win when alternatives overlap at the same position, which
/// changes which keyword is reported but not how many are counted.
pub const SSN_CONTEXT_KEYWORDS: &[&str] = &[
    "SSNS",
    "SS#",
    "SSN#",
    "SSN",
    "SSID",
    "Soc Sec",
    "Social Security",
    "Social Security#",
];

/// Display name of the IBAN detector, used to key errors
pub const IBAN_DETECTOR_NAME: &str = "IBAN scanner";

/// Candidate pattern for IBANs; group 1 holds the whole candidate
///
/// The `(:?...)` groups are capturing groups that start with an optional
/// literal colon.
pub const IBAN_PATTERN: &str = r"([a-zA-Z]{2}\d{2} ?(:?\w{4} ?){1,7} ?(:?\w{1,3})?)";

/// Build the Social Security Number detector
pub fn ssn_detector() -> Result<PatternDetector> {
    PatternDetector::builder(SensitiveDataType::Ssn, SSN_DETECTOR_NAME)
        .pattern(SSN_PATTERN)
        .context_keywords(SSN_CONTEXT_KEYWORDS.iter().copied())
        .validator(MatchValidator::AlwaysValid)
        .build()
}

/// Build the IBAN detector
pub fn iban_detector() -> Result<PatternDetector> {
    PatternDetector::builder(SensitiveDataType::Iban, IBAN_DETECTOR_NAME)
        .pattern(IBAN_PATTERN)
        .case_insensitive(true)
        .validator(MatchValidator::Mod97 { group: 1 })
        .build()
}
