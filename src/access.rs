use std::error::Error;
use std::fmt::{self, Display};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

mod store;

pub use store::{AccessStore, MemoryStore, StoreError, StoreStack};

/// Milliseconds per day, for the remaining-days ceiling.
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

struct KnownCode {
    code: &'static str,
    label: &'static str,
    grant: Grant,
}

#[derive(Clone, Copy)]
enum Grant {
    Unlimited,
    Trial { days: u32 },
}

/// The codes the gate accepts. Input is uppercased before lookup.
const ACCESS_CODES: [KnownCode; 2] = [
    KnownCode {
        code: "MIP-7K3F-R9X2",
        label: "MIP",
        grant: Grant::Unlimited,
    },
    KnownCode {
        code: "MASTER-V4HP",
        label: "Masterclass",
        grant: Grant::Trial { days: 7 },
    },
];

/// A successfully redeemed access code, in the form it is persisted in.
///
/// The `kind` tag makes records self-describing, so that whatever a store
/// hands back is either reconstructed in full or rejected at the parse
/// boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AccessRecord {
    Unlimited {
        code: String,
        label: String,
        activated_at: DateTime<Utc>,
    },
    Trial {
        code: String,
        label: String,
        activated_at: DateTime<Utc>,
        days: u32,
    },
}
impl AccessRecord {
    /// The code this record was redeemed with.
    pub fn code(&self) -> &str {
        match self {
            AccessRecord::Unlimited { code, .. } => code,
            AccessRecord::Trial { code, .. } => code,
        }
    }

    /// The display label of the code's cohort.
    pub fn label(&self) -> &str {
        match self {
            AccessRecord::Unlimited { label, .. } => label,
            AccessRecord::Trial { label, .. } => label,
        }
    }

    /// What this record grants at the given point in time.
    ///
    /// A trial runs for whole days from its activation instant and expires
    /// exactly at the end of the last one. The remaining count is a ceiling,
    /// so it stays at least 1 for as long as the trial is valid.
    pub fn status(&self, now: DateTime<Utc>) -> Access {
        match self {
            AccessRecord::Unlimited { .. } => Access::Unlimited,
            AccessRecord::Trial {
                activated_at, days, ..
            } => match activated_at.checked_add_signed(Duration::days(*days as i64)) {
                Some(expires_at) if now < expires_at => {
                    let left_ms = (expires_at - now).num_milliseconds();
                    let days_remaining = ((left_ms + DAY_MS - 1) / DAY_MS) as u32;
                    Access::Trial { days_remaining }
                }
                Some(_) => Access::Expired,
                // The expiry does not fit in the calendar, so it cannot be hit
                None => Access::Trial {
                    days_remaining: *days,
                },
            },
        }
    }

    /// Like [`AccessRecord::status()`], but against the current time.
    pub fn status_now(&self) -> Access {
        self.status(Utc::now())
    }

    /// Serializes the record to the string form stores hold.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("AccessRecord should always serialize")
    }

    /// Reconstructs a record from the string form stores hold.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// The verdict of checking an [`AccessRecord`] against a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Unlimited,
    Trial { days_remaining: u32 },
    Expired,
}

/// Redeems an access code, producing the record to persist.
///
/// Matching ignores case and surrounding whitespace.
pub fn redeem(code: &str, now: DateTime<Utc>) -> Result<AccessRecord, InvalidCodeError> {
    let normalized = code.trim().to_uppercase();
    let known = match ACCESS_CODES.iter().find(|known| known.code == normalized) {
        Some(known) => known,
        None => return Err(InvalidCodeError { code: normalized }),
    };

    Ok(match known.grant {
        Grant::Unlimited => AccessRecord::Unlimited {
            code: known.code.to_string(),
            label: known.label.to_string(),
            activated_at: now,
        },
        Grant::Trial { days } => AccessRecord::Trial {
            code: known.code.to_string(),
            label: known.label.to_string(),
            activated_at: now,
            days,
        },
    })
}

/// Like [`redeem()`], but activates against the current time.
pub fn redeem_now(code: &str) -> Result<AccessRecord, InvalidCodeError> {
    redeem(code, Utc::now())
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidCodeError {
    /// The rejected code, as it was looked up.
    pub code: String,
}
impl Display for InvalidCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = &self.code;
        write!(f, "Access code not recognized: {code:?}")
    }
}
impl Error for InvalidCodeError {}
