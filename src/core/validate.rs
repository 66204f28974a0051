//! Client-side upload validation.
//!
//! A candidate file is checked against the static policy before the form
//! is allowed to submit. The checks are advisory (the server revalidates);
//! their only job is immediate feedback.

use crate::models::CandidateFile;

/// Static size and extension rules a candidate file must satisfy.
#[derive(Clone, Copy, Debug)]
pub struct ValidationPolicy {
    /// Maximum accepted size in bytes.
    pub max_size_bytes: u64,
    /// Accepted extensions, matched case-insensitively.
    pub allowed_extensions: &'static [&'static str],
}

/// Why a candidate file was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Size exceeds the policy maximum.
    TooLarge,
    /// Extension is missing or not in the allowed set.
    DisallowedType,
}

impl RejectReason {
    /// User-facing message for the rejection notification.
    pub fn message(self) -> &'static str {
        match self {
            Self::TooLarge => "File size exceeds 16MB limit. Please choose a smaller file.",
            Self::DisallowedType => "File type not allowed. Please choose an allowed file type.",
        }
    }
}

/// Outcome of validating a candidate file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectReason),
}

impl ValidationResult {
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Validate a candidate file against the policy.
///
/// Size is checked before the extension, so an oversized file of a
/// disallowed type reports [`RejectReason::TooLarge`]. A name without an
/// extension is always rejected as a disallowed type. Pure and
/// deterministic; the caller surfaces the result as a notification.
pub fn validate(file: &CandidateFile, policy: &ValidationPolicy) -> ValidationResult {
    if file.size_bytes > policy.max_size_bytes {
        return ValidationResult::Rejected(RejectReason::TooLarge);
    }

    let allowed = file.extension().is_some_and(|ext| {
        policy
            .allowed_extensions
            .iter()
            .any(|a| a.eq_ignore_ascii_case(&ext))
    });

    if allowed {
        ValidationResult::Accepted
    } else {
        ValidationResult::Rejected(RejectReason::DisallowedType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UPLOAD_POLICY;

    fn candidate(name: &str, size_bytes: u64) -> CandidateFile {
        CandidateFile {
            name: name.to_string(),
            size_bytes,
            mime_type: String::new(),
        }
    }

    #[test]
    fn test_accepts_allowed_file() {
        let file = candidate("report.pdf", 1024);
        assert_eq!(validate(&file, &UPLOAD_POLICY), ValidationResult::Accepted);
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let file = candidate("PHOTO.JPG", 1024);
        assert_eq!(validate(&file, &UPLOAD_POLICY), ValidationResult::Accepted);
    }

    #[test]
    fn test_rejects_oversized_file() {
        let file = candidate("big.pdf", UPLOAD_POLICY.max_size_bytes + 1);
        assert_eq!(
            validate(&file, &UPLOAD_POLICY),
            ValidationResult::Rejected(RejectReason::TooLarge)
        );
    }

    #[test]
    fn test_size_at_limit_is_accepted() {
        let file = candidate("exact.zip", UPLOAD_POLICY.max_size_bytes);
        assert_eq!(validate(&file, &UPLOAD_POLICY), ValidationResult::Accepted);
    }

    #[test]
    fn test_rejects_disallowed_extension() {
        let file = candidate("script.exe", 1024);
        assert_eq!(
            validate(&file, &UPLOAD_POLICY),
            ValidationResult::Rejected(RejectReason::DisallowedType)
        );
    }

    #[test]
    fn test_rejects_missing_extension() {
        let file = candidate("Makefile", 1024);
        assert_eq!(
            validate(&file, &UPLOAD_POLICY),
            ValidationResult::Rejected(RejectReason::DisallowedType)
        );
    }

    #[test]
    fn test_size_rejection_takes_priority() {
        // Oversized and disallowed: the size check runs first.
        let file = candidate("huge.exe", UPLOAD_POLICY.max_size_bytes * 2);
        assert_eq!(
            validate(&file, &UPLOAD_POLICY),
            ValidationResult::Rejected(RejectReason::TooLarge)
        );
    }
}
