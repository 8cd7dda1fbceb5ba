//! Per-candidate match validators

use crate::domain::DetectorError;
use regex::Captures;

/// Decides whether a candidate match counts as a finding
///
/// Validators are plain data so detectors stay immutable and shareable
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchValidator {
    /// Every candidate counts
    AlwaysValid,
    /// ISO 7064 mod-97 check over the given capture group
    Mod97 {
        /// Capture group holding the candidate account number
        group: usize,
    },
}

impl MatchValidator {
    /// Validate a single candidate match
    ///
    /// # Errors
    ///
    /// Returns [`DetectorError::MissingCaptureGroup`] if the validator needs a
    /// capture group that did not participate in the match.
    pub fn validate(&self, captures: &Captures<'_>) -> Result<bool, DetectorError> {
        match self {
            Self::AlwaysValid => Ok(true),
            Self::Mod97 { group } => {
                let candidate = captures
                    .get(*group)
                    .ok_or(DetectorError::MissingCaptureGroup { group: *group })?;
                Ok(verify_mod97(candidate.as_str()))
            }
        }
    }
}

/// Verifies IBAN check digits with the ISO 7064 mod-97 procedure
///
/// ASCII spaces are ignored. The first four characters are rotated to the
/// end, letters become two-digit numbers (`A` = 10 .. `Z` = 35, any case) and
/// the resulting number must be congruent to 1 modulo 97. The remainder is
/// accumulated digit by digit so no large integer is ever built.
///
/// Anything other than ASCII letters, digits and spaces fails the check.
///
/// # Examples
///
/// ```
/// use dlp_engine::scanner::validator::verify_mod97;
///
/// assert!(verify_mod97("GB29 NWBK 6016 1331 9268 19"));
/// assert!(!verify_mod97("GB28 NWBK 6016 1331 9268 19"));
/// ```
pub fn verify_mod97(candidate: &str) -> bool {
    let compact: Vec<u8> = candidate.bytes().filter(|b| *b != b' ').collect();
    if compact.len() < 4 {
        return false;
    }

    let (head, tail) = compact.split_at(4);
    let mut remainder: u32 = 0;
    for &byte in tail.iter().chain(head) {
        remainder = match byte {
            b'0'..=b'9' => (remainder * 10 + u32::from(byte - b'0')) % 97,
            b'A'..=b'Z' => (remainder * 100 + u32::from(byte - b'A') + 10) % 97,
            b'a'..=b'z' => (remainder * 100 + u32::from(byte - b'a') + 10) % 97,
            _ => return false,
        };
    }

    remainder == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use test_case::test_case;

    #[test_case("GB29 NWBK 6016 1331 9268 19" ; "gb spaced")]
    #[test_case("GB29NWBK60161331926819" ; "gb compact")]
    #[test_case("gb29 nwbk 6016 1331 9268 19" ; "gb lowercase")]
    #[test_case("DE89 3704 0044 0532 0130 00" ; "de")]
    #[test_case("FR14 2004 1010 0505 0001 3M02 606" ; "fr with letter in bban")]
    #[test_case("NL91ABNA0417164300" ; "nl")]
    #[test_case("SA0380000000608010167519" ; "sa")]
    fn test_valid_ibans(candidate: &str) {
        assert!(verify_mod97(candidate));
    }

    #[test_case("GB28 NWBK 6016 1331 9268 19" ; "wrong check digits")]
    #[test_case("GB29 NWBK 6016 1331 9268 18" ; "altered bban")]
    #[test_case("UE44 5001 0517 5407 3249 0517 0517 0517 313" ; "pattern shaped but invalid")]
    #[test_case("GB2" ; "too short")]
    #[test_case("" ; "empty")]
    #[test_case("GB29_NWBK_6016_1331_9268_19" ; "underscores")]
    #[test_case("GB29 :NWBK 6016 1331 9268 19" ; "colon")]
    fn test_invalid_ibans(candidate: &str) {
        assert!(!verify_mod97(candidate));
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        // 200 nines after a plausible header, far beyond any native integer width
        let candidate = format!("ZZ99{}", "9".repeat(200));
        let _ = verify_mod97(&candidate);
    }

    #[test]
    fn test_always_valid_accepts_any_match() {
        let re = Regex::new(r"\d+").unwrap();
        let caps = re.captures("123").unwrap();
        assert_eq!(MatchValidator::AlwaysValid.validate(&caps), Ok(true));
    }

    #[test]
    fn test_mod97_reads_capture_group() {
        let re = Regex::new(r"iban: (\S+)").unwrap();
        let caps = re.captures("iban: NL91ABNA0417164300").unwrap();
        assert_eq!(MatchValidator::Mod97 { group: 1 }.validate(&caps), Ok(true));
    }

    #[test]
    fn test_mod97_missing_group_is_an_error() {
        let re = Regex::new(r"(a)|(b)").unwrap();
        let caps = re.captures("b").unwrap();
        assert_eq!(
            MatchValidator::Mod97 { group: 1 }.validate(&caps),
            Err(DetectorError::MissingCaptureGroup { group: 1 })
        );
    }
}
