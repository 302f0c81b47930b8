//! # Document Numbering
//!
//! Formats a sequence number into the company's chosen textual scheme,
//! and derives the next sequence from the existing collection.
//!
//! ## Schemes
//! ```text
//! seq-mmyy   7-1225        sequence, 2-digit month, 2-digit year
//! seq/yyyy   7/2025        sequence, 4-digit year
//! yyyy-seq   2025-7        4-digit year, sequence
//! seq        7             sequence only, no date component
//! ```
//! A configured prefix (e.g. "FAC-") is prepended verbatim to every
//! scheme. Unknown scheme strings fall back to plain `seq` rather than
//! failing - a profile written by a newer version still numbers
//! documents.
//!
//! ## Sequence Derivation Is Pluggable
//! The two shipped strategies disagree on purpose: the app's two
//! evolutions implemented different policies, and picking one silently
//! would change users' numbers. [`SequenceStrategy`] keeps the choice
//! with the caller:
//! - [`DocumentCount`]: count of existing documents + 1.
//! - [`PeriodScan`]: highest `{seq}-{MMYY}` number within the current
//!   month/year, + 1 (restarts every month).
//!
//! Formatting itself takes the clock as an argument; there is no hidden
//! `now` anywhere in this module.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::{CompanyProfile, Document};

// =============================================================================
// Number Scheme
// =============================================================================

/// Textual numbering scheme for document numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberScheme {
    /// `{seq}-{MM}{YY}`, e.g. `7-1225`.
    SeqMonthYear,
    /// `{seq}/{YYYY}`, e.g. `7/2025`.
    SeqSlashYear,
    /// `{YYYY}-{seq}`, e.g. `2025-7`.
    YearSeq,
    /// `{seq}`, no date component.
    Seq,
}

impl NumberScheme {
    /// The scheme's wire/storage name.
    pub const fn wire_name(&self) -> &'static str {
        match self {
            NumberScheme::SeqMonthYear => "seq-mmyy",
            NumberScheme::SeqSlashYear => "seq/yyyy",
            NumberScheme::YearSeq => "yyyy-seq",
            NumberScheme::Seq => "seq",
        }
    }

    /// Parses a wire name. Anything unrecognized is the plain `seq`
    /// scheme - most specific match wins, no match is not a failure.
    pub fn parse(s: &str) -> NumberScheme {
        match s {
            "seq-mmyy" => NumberScheme::SeqMonthYear,
            "seq/yyyy" => NumberScheme::SeqSlashYear,
            "yyyy-seq" => NumberScheme::YearSeq,
            _ => NumberScheme::Seq,
        }
    }
}

impl Default for NumberScheme {
    fn default() -> Self {
        NumberScheme::SeqMonthYear
    }
}

/// Serialized as the wire name, so stored profiles read naturally.
impl Serialize for NumberScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.wire_name())
    }
}

/// Deserializes any string; unknown schemes fall back to `Seq`.
impl<'de> Deserialize<'de> for NumberScheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(NumberScheme::parse(&s))
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats a sequence number under a scheme.
///
/// Pure function of its four inputs; the caller supplies the clock.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use facturio_core::numbering::{format_document_number, NumberScheme};
///
/// let dec = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// assert_eq!(
///     format_document_number(7, NumberScheme::SeqMonthYear, "", dec),
///     "7-1225"
/// );
/// ```
pub fn format_document_number(
    sequence: u32,
    scheme: NumberScheme,
    prefix: &str,
    now: NaiveDate,
) -> String {
    let body = match scheme {
        NumberScheme::SeqMonthYear => {
            format!("{}-{:02}{:02}", sequence, now.month(), now.year() % 100)
        }
        NumberScheme::SeqSlashYear => format!("{}/{}", sequence, now.year()),
        NumberScheme::YearSeq => format!("{}-{}", now.year(), sequence),
        NumberScheme::Seq => sequence.to_string(),
    };
    format!("{}{}", prefix, body)
}

// =============================================================================
// Sequence Strategies
// =============================================================================

/// Policy for deriving the next sequence number from the existing
/// document collection.
pub trait SequenceStrategy {
    fn next_sequence(&self, documents: &[Document], now: NaiveDate) -> u32;
}

/// Count of existing documents, plus one.
///
/// Simple and monotonic as long as documents are never deleted;
/// deleting one makes the next number collide with the last.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCount;

impl SequenceStrategy for DocumentCount {
    fn next_sequence(&self, documents: &[Document], _now: NaiveDate) -> u32 {
        documents.len() as u32 + 1
    }
}

/// Highest sequence among `{seq}-{MMYY}` numbers in the current
/// month/year, plus one.
///
/// Restarts at 1 every month. Only numbers exactly matching the
/// current period's pattern participate; prefixed or differently
/// formatted numbers are skipped, exactly as the original matcher did.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodScan;

impl SequenceStrategy for PeriodScan {
    fn next_sequence(&self, documents: &[Document], now: NaiveDate) -> u32 {
        let period = format!("{:02}{:02}", now.month(), now.year() % 100);
        documents
            .iter()
            .filter_map(|d| sequence_in_period(&d.number, &period))
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Extracts `seq` from a number of the exact form `{seq}-{period}`.
fn sequence_in_period(number: &str, period: &str) -> Option<u32> {
    let (seq, suffix) = number.split_once('-')?;
    if suffix != period || seq.is_empty() || !seq.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    seq.parse().ok()
}

/// Derives and formats the next document number in one step, using the
/// company's configured scheme and prefix.
pub fn next_document_number(
    documents: &[Document],
    profile: &CompanyProfile,
    strategy: &dyn SequenceStrategy,
    now: NaiveDate,
) -> String {
    let sequence = strategy.next_sequence(documents, now);
    format_document_number(
        sequence,
        profile.doc_number_format,
        &profile.doc_number_prefix,
        now,
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
