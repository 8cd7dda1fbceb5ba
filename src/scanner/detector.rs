//! Regex-based sensitive data detector

use super::models::{CategoryResult, SensitiveDataType};
use super::validator::MatchValidator;
use super::SensitiveDataDetector;
use crate::domain::{DetectorError, DlpError, Result};
use regex::{Regex, RegexBuilder};

/// Detector built from a candidate pattern, a validator and optional context keywords
///
/// Patterns are compiled with Unicode mode off, so `\d` and `\w` are the
/// ASCII classes and case folding is ASCII-only. A `PatternDetector` is
/// immutable after construction and safe to share between threads.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    name: String,
    data_type: SensitiveDataType,
    pattern: Regex,
    context_keywords: Option<Regex>,
    validator: MatchValidator,
}

impl PatternDetector {
    /// Start building a detector for `data_type`
    pub fn builder(
        data_type: SensitiveDataType,
        name: impl Into<String>,
    ) -> PatternDetectorBuilder {
        PatternDetectorBuilder {
            name: name.into(),
            data_type,
            pattern: None,
            case_insensitive: false,
            keywords: Vec::new(),
            validator: MatchValidator::AlwaysValid,
        }
    }

    /// Count validated candidates, scanning non-overlapping matches left to right
    fn count_matches(&self, input: &str) -> std::result::Result<usize, DetectorError> {
        let mut count = 0;
        for captures in self.pattern.captures_iter(input) {
            if self.validator.validate(&captures)? {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Number of keyword occurrences anywhere in the input
    fn context_rank(&self, input: &str) -> usize {
        self.context_keywords
            .as_ref()
            .map_or(0, |keywords| keywords.find_iter(input).count())
    }
}

impl SensitiveDataDetector for PatternDetector {
    fn name(&self) -> &str {
        &self.name
    }

    fn data_type(&self) -> SensitiveDataType {
        self.data_type
    }

    fn scan(&self, input: &str) -> std::result::Result<CategoryResult, DetectorError> {
        let count = self.count_matches(input)?;
        let context_rank = self.context_rank(input);
        Ok(CategoryResult::new(self.data_type, count, context_rank))
    }
}

/// Builder for [`PatternDetector`]
#[derive(Debug)]
pub struct PatternDetectorBuilder {
    name: String,
    data_type: SensitiveDataType,
    pattern: Option<String>,
    case_insensitive: bool,
    keywords: Vec<String>,
    validator: MatchValidator,
}

impl PatternDetectorBuilder {
    /// Set the candidate pattern
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Match the candidate pattern case-insensitively
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Context keywords; matched literally and always case-insensitively
    pub fn context_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the per-candidate validator
    pub fn validator(mut self, validator: MatchValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Compile the patterns and build the detector
    ///
    /// # Errors
    ///
    /// Returns [`DlpError::Pattern`] if no pattern was set or a pattern fails to compile.
    pub fn build(self) -> Result<PatternDetector> {
        let pattern_str = self
            .pattern
            .ok_or_else(|| DlpError::Pattern(format!("Detector '{}' has no pattern", self.name)))?;

        let pattern = RegexBuilder::new(&pattern_str)
            .unicode(false)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|e| {
                DlpError::Pattern(format!("Invalid pattern in detector '{}': {e}", self.name))
            })?;

        let context_keywords = if self.keywords.is_empty() {
            None
        } else {
            let alternation = self
                .keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = RegexBuilder::new(&alternation)
                .unicode(false)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    DlpError::Pattern(format!(
                        "Invalid context keywords in detector '{}': {e}",
                        self.name
                    ))
                })?;
            Some(compiled)
        };

        Ok(PatternDetector {
            name: self.name,
            data_type: self.data_type,
            pattern,
            context_keywords,
            validator: self.validator,
        })
    }
}
