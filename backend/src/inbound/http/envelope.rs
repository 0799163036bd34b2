//! Success envelope wrapping every successful query response.
//!
//! ```text
//! { "resultCode": "S0001", "res": <payload> }
//! ```

use serde::{Deserialize, Serialize};

/// Result code carried by every successful response.
pub const SUCCESS_RESULT_CODE: &str = "S0001";

/// Response body pairing a result code with its payload.
///
/// Only [`ResponseEnvelope::success`] constructs envelopes, so a serialised
/// envelope always carries [`SUCCESS_RESULT_CODE`].
///
/// # Examples
/// ```
/// use luckygenome::inbound::http::envelope::ResponseEnvelope;
///
/// let envelope = ResponseEnvelope::success(Vec::<u8>::new());
/// let json = serde_json::to_string(&envelope).expect("serialise");
/// assert_eq!(json, r#"{"resultCode":"S0001","res":[]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    result_code: String,
    res: T,
}

impl<T> ResponseEnvelope<T> {
    /// Wrap `res` with the success code.
    pub fn success(res: T) -> Self {
        Self {
            result_code: SUCCESS_RESULT_CODE.to_owned(),
            res,
        }
    }

    /// Result code, always [`SUCCESS_RESULT_CODE`].
    pub fn result_code(&self) -> &str {
        self.result_code.as_str()
    }

    /// Borrow the wrapped payload.
    pub fn res(&self) -> &T {
        &self.res
    }

    /// Unwrap the payload.
    pub fn into_res(self) -> T {
        self.res
    }
}
