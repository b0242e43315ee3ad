//! Email verification record entity.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// Number of random bytes in a verification token (128 bits)
pub const TOKEN_BYTES: usize = 16;

/// Stored lifecycle state of a verification record
///
/// Only the two persisted states exist here. "Expired" and "invalid" are
/// derived at read time from `status` and `created_at`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Link has not been followed successfully yet
    Pending,
    /// Terminal success state; permanent
    Verified,
}

impl VerificationStatus {
    /// Database/string representation of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VerificationStatus::Pending),
            "verified" => Ok(VerificationStatus::Verified),
            _ => Err(format!("Invalid verification status: {}", s)),
        }
    }
}

/// Email verification record
///
/// One record per issued token. The token is the primary key; the email
/// address is payload and never used for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailVerification {
    /// Opaque unguessable identifier, minted server-side
    pub token: String,

    /// The address being verified
    pub email: String,

    /// Current lifecycle state
    pub status: VerificationStatus,

    /// Creation timestamp (UTC), immutable after creation
    pub created_at: DateTime<Utc>,
}

impl EmailVerification {
    /// Creates a new pending verification record with a freshly minted token
    ///
    /// # Arguments
    ///
    /// * `email` - The address the verification link will be sent to
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            token: Self::generate_token(),
            email: email.into(),
            status: VerificationStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Generates a cryptographically secure random verification token
    ///
    /// Uses OsRng (OS-provided CSPRNG) to draw 128 bits of entropy,
    /// hex-encoded to 32 characters. Collision probability is negligible
    /// at this size; the store does not defend against it.
    ///
    /// # Returns
    ///
    /// A 32-character lowercase hex string
    pub fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Checks whether the record is still pending
    pub fn is_pending(&self) -> bool {
        self.status == VerificationStatus::Pending
    }

    /// Checks whether the record has reached the terminal verified state
    pub fn is_verified(&self) -> bool {
        self.status == VerificationStatus::Verified
    }

    /// Checks whether the record has outlived the validity window
    ///
    /// The boundary instant itself is still honored: a record expires only
    /// once `created_at + window` lies strictly in the past.
    ///
    /// # Arguments
    ///
    /// * `window` - The configured validity window
    /// * `now` - The instant to evaluate against
    pub fn is_expired(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.created_at + window < now
    }

    /// Transitions the record to the terminal verified state
    ///
    /// The transition never reverts; calling this on an already verified
    /// record is a no-op.
    pub fn mark_verified(&mut self) {
        self.status = VerificationStatus::Verified;
    }
}
