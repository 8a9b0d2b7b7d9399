//! # Discount Code Module
//!
//! Generation of human-readable discount codes and the record stored for each
//! user once a code has been issued.

use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Themed words a discount code starts with
pub const CODE_PREFIXES: [&str; 8] = [
    "ASU", "TEMPLE", "INITIÉ", "SAGESSE", "ÉCLAT", "LUMIÈRE", "HARMONIE", "ARCANE",
];

/// Characters the random suffix is drawn from
pub const SUFFIX_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in the random suffix
pub const SUFFIX_LENGTH: usize = 4;

/// How long an issued code stays valid
pub const VALIDITY_DAYS: i64 = 30;

/// Format used when showing an expiration date to users
pub const DISPLAY_DATE_FORMAT: &str = "%d %B %Y";

/// Generate a discount code using the thread-local random source
pub fn generate_code() -> String {
    generate_code_with(&mut rand::thread_rng())
}

/// Generate a discount code of the form `PREFIX-XXXX`
///
/// The prefix is picked uniformly from [`CODE_PREFIXES`] and each suffix
/// character uniformly, with replacement, from [`SUFFIX_ALPHABET`]. Codes are
/// not guaranteed to be unique.
pub fn generate_code_with<R: Rng>(rng: &mut R) -> String {
    let prefix = CODE_PREFIXES.choose(rng).copied().unwrap_or(CODE_PREFIXES[0]);
    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| char::from(SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())]))
        .collect();
    format!("{prefix}-{suffix}")
}

/// A discount code issued to one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRecord {
    pub code: String,
    pub expiration: Expiry,
}

impl DiscountRecord {
    /// Issue a fresh record at `now`, valid for [`VALIDITY_DAYS`]
    pub fn issue_at(now: DateTime<Utc>) -> Self {
        Self {
            code: generate_code(),
            expiration: Expiry::At(now + Duration::days(VALIDITY_DAYS)),
        }
    }

    /// Issue a fresh record at the current instant
    pub fn issue() -> Self {
        Self::issue_at(Utc::now())
    }

    /// Expiration date as shown to users, e.g. `16 November 2026`
    pub fn display_expiration(&self) -> String {
        self.expiration.display()
    }
}

/// Expiration of a discount record as persisted
///
/// Records issued by this bot carry an RFC 3339 timestamp. Anything else
/// found in storage, such as the display dates written by the earlier
/// deployment or a hand edit, is kept verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    At(DateTime<Utc>),
    Legacy(String),
}

impl Expiry {
    /// Read a stored expiration value; never fails
    pub fn parse(raw: &str) -> Self {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(timestamp) => {
                let at = timestamp.with_timezone(&Utc);
                // Only canonical timestamps are normalised, so re-saving is byte-stable
                if Self::At(at).stored() == raw {
                    Self::At(at)
                } else {
                    Self::Legacy(raw.to_string())
                }
            }
            Err(_) => Self::Legacy(raw.to_string()),
        }
    }

    /// Value written back to storage
    pub fn stored(&self) -> String {
        match self {
            Self::At(at) => at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            Self::Legacy(raw) => raw.clone(),
        }
    }

    /// Best-effort instant; legacy display dates are read as midnight UTC
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Legacy(raw) => parse_instant(raw),
        }
    }

    /// Date shown to users; unreadable values are shown as stored
    pub fn display(&self) -> String {
        match self.instant() {
            Some(at) => at.format(DISPLAY_DATE_FORMAT).to_string(),
            None => self.stored().trim().to_string(),
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw.trim(), DISPLAY_DATE_FORMAT).ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

impl Serialize for Expiry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.stored())
    }
}

impl<'de> Deserialize<'de> for Expiry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_code_shape(code: &str) {
        let (prefix, suffix) = code.rsplit_once('-').expect("code has a dash");
        assert!(CODE_PREFIXES.contains(&prefix), "unexpected prefix in {code}");
        assert_eq!(suffix.len(), SUFFIX_LENGTH);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_codes_have_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert_code_shape(&generate_code_with(&mut rng));
        }
        assert_code_shape(&generate_code());
    }

    #[test]
    fn test_every_prefix_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: std::collections::HashSet<String> = (0..2000)
            .map(|_| {
                let code = generate_code_with(&mut rng);
                code.rsplit_once('-').unwrap().0.to_string()
            })
            .collect();
        assert_eq!(seen.len(), CODE_PREFIXES.len());
    }

    #[test]
    fn test_expiry_is_thirty_days_after_issuance() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 9, 30, 0).unwrap();
        let record = DiscountRecord::issue_at(now);
        assert_eq!(record.expiration, Expiry::At(now + Duration::days(30)));
        assert_eq!(record.display_expiration(), "15 November 2026");
    }

    #[test]
    fn test_legacy_expiration_is_kept_verbatim() {
        let legacy = Expiry::parse("16 November 2026");
        assert_eq!(legacy, Expiry::Legacy("16 November 2026".to_string()));
        assert_eq!(legacy.stored(), "16 November 2026");
        assert_eq!(
            legacy.instant(),
            Some(Utc.with_ymd_and_hms(2026, 11, 16, 0, 0, 0).unwrap())
        );

        let unreadable = Expiry::parse("16 novembre 2026");
        assert_eq!(unreadable.stored(), "16 novembre 2026");
        assert_eq!(unreadable.display(), "16 novembre 2026");
        assert_eq!(unreadable.instant(), None);
    }

    #[test]
    fn test_non_canonical_timestamp_is_not_rewritten() {
        let offset = Expiry::parse("2026-11-15T10:30:00+01:00");
        assert_eq!(offset.stored(), "2026-11-15T10:30:00+01:00");
        assert_eq!(
            offset.instant(),
            Some(Utc.with_ymd_and_hms(2026, 11, 15, 9, 30, 0).unwrap())
        );

        let canonical = Expiry::parse("2026-11-15T09:30:00Z");
        assert!(matches!(canonical, Expiry::At(_)));
    }

    #[test]
    fn test_record_json_shape() {
        let record = DiscountRecord {
            code: "ASU-K3Q1".to_string(),
            expiration: Expiry::At(Utc.with_ymd_and_hms(2026, 11, 15, 9, 30, 0).unwrap()),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["code"], "ASU-K3Q1");
        assert_eq!(json["expiration"], "2026-11-15T09:30:00Z");
    }
}
