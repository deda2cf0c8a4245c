use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

pub const OTP_TTL_MINUTES: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneTimePassword {
    code: String,
    expires_at: DateTime<Utc>,
}

impl OneTimePassword {
    /// Six digit code (100000..=999999) valid for `OTP_TTL_MINUTES`.
    pub fn generate(now: DateTime<Utc>) -> Self {
        let code = rand::thread_rng().gen_range(100_000..=999_999u32);

        Self {
            code: code.to_string(),
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OtpRejection {
    #[error("No verification code on record")]
    Missing,

    #[error("Verification code has expired")]
    Expired,

    #[error("Verification code does not match")]
    Mismatch,
}

pub fn is_valid_otp_format(otp: &str) -> bool {
    static OTP_FORMAT: OnceLock<Regex> = OnceLock::new();
    OTP_FORMAT
        .get_or_init(|| Regex::new(r"^\d{6}$").expect("static regex"))
        .is_match(otp)
}

/// The stored code is expired at its expiry instant, not only after it.
pub fn check_otp(
    stored_code: Option<&str>,
    expires_at: Option<DateTime<Utc>>,
    submitted: &str,
    now: DateTime<Utc>,
) -> Result<(), OtpRejection> {
    let (code, expires_at) = match (stored_code, expires_at) {
        (Some(code), Some(expires_at)) => (code, expires_at),
        _ => return Err(OtpRejection::Missing),
    };

    if now >= expires_at {
        return Err(OtpRejection::Expired);
    }

    if code != submitted {
        return Err(OtpRejection::Mismatch);
    }

    Ok(())
}
