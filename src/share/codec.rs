//! Share-token encoding and verification.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::digest::Key;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use url::Url;

use crate::scoring::Answer;

use super::error::TokenError;

type HmacSha256 = Hmac<Sha256>;

/// Validity window: tokens older than 24 hours are rejected.
pub const MAX_TOKEN_AGE_MS: i64 = 24 * 60 * 60 * 1000;

/// Separates the serialized answers from the timestamp in the signed payload.
const PAYLOAD_DELIMITER: char = '|';

/// Environment variable holding the signing secret.
const SECRET_ENV: &str = "TOMO_SHARE_SECRET";

/// Fallback secret so development builds work without configuration.
/// Unsafe anywhere else; see the module docs on the security posture.
const DEV_FALLBACK_SECRET: &str = "dev-insecure-secret";

/// Encodes answer sets into signed share URLs and verifies them back.
#[derive(Clone)]
pub struct ShareCodec {
    secret: Vec<u8>,
}

impl ShareCodec {
    /// Create a codec with an explicit signing secret.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Create a codec from `TOMO_SHARE_SECRET`, falling back to the
    /// development secret when unset or empty.
    pub fn from_env() -> Self {
        let secret = std::env::var(SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEV_FALLBACK_SECRET.to_string());
        Self::new(secret)
    }

    /// Encode answers into a share URL with `data`, `ts` and `sig` query
    /// parameters, stamped with the current time.
    pub fn encode(&self, base_url: &str, answers: &[Answer]) -> Result<String, TokenError> {
        self.encode_at(base_url, answers, now_millis())
    }

    /// Encode with an explicit timestamp (epoch milliseconds).
    pub fn encode_at(
        &self,
        base_url: &str,
        answers: &[Answer],
        ts_millis: i64,
    ) -> Result<String, TokenError> {
        let json = serialize_answers(answers)?;
        let ts = ts_millis.to_string();

        let payload = format!("{json}{PAYLOAD_DELIMITER}{ts}");
        let sig = URL_SAFE_NO_PAD.encode(self.sign(payload.as_bytes()));
        let data = URL_SAFE_NO_PAD.encode(json.as_bytes());

        let mut url =
            Url::parse(base_url).map_err(|e| TokenError::InvalidBaseUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("data", &data)
            .append_pair("ts", &ts)
            .append_pair("sig", &sig);

        Ok(url.to_string())
    }

    /// Verify a token and reconstruct its answers, against the current time.
    pub fn decode(&self, data: &str, ts: &str, sig: &str) -> Result<Vec<Answer>, TokenError> {
        self.decode_at(data, ts, sig, now_millis())
    }

    /// Verify with an explicit "now" (epoch milliseconds).
    ///
    /// A timestamp in the future (negative age) is accepted: the window only
    /// bounds how old a token may be, and clients with skewed clocks would
    /// otherwise mint links that nobody can open.
    pub fn decode_at(
        &self,
        data: &str,
        ts: &str,
        sig: &str,
        now_ms: i64,
    ) -> Result<Vec<Answer>, TokenError> {
        if data.is_empty() || ts.is_empty() || sig.is_empty() {
            return Err(TokenError::MissingParameter);
        }

        let ts_num: i64 = ts
            .parse()
            .map_err(|_| TokenError::MalformedTimestamp(ts.to_string()))?;
        if now_ms - ts_num > MAX_TOKEN_AGE_MS {
            return Err(TokenError::Expired);
        }

        let raw = URL_SAFE_NO_PAD
            .decode(data)
            .map_err(|_| TokenError::MalformedPayload)?;
        let json = String::from_utf8(raw).map_err(|_| TokenError::MalformedPayload)?;

        // A sig parameter that is not even base64url cannot match anything.
        let sig_bytes = URL_SAFE_NO_PAD
            .decode(sig)
            .map_err(|_| TokenError::SignatureMismatch)?;

        // Verify before parsing: unauthenticated bytes never reach the JSON
        // parser.
        let payload = format!("{json}{PAYLOAD_DELIMITER}{ts}");
        if !self.verify(payload.as_bytes(), &sig_bytes) {
            return Err(TokenError::SignatureMismatch);
        }

        let pairs: Vec<(u32, u8)> =
            serde_json::from_str(&json).map_err(|_| TokenError::MalformedPayload)?;
        Ok(pairs
            .into_iter()
            .map(|(question_id, value)| Answer::new(question_id, value))
            .collect())
    }

    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = self.keyed_mac();
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    /// Constant-representation comparison via the MAC library; a naive byte
    /// compare would leak the mismatch position through timing.
    fn verify(&self, payload: &[u8], sig: &[u8]) -> bool {
        let mut mac = self.keyed_mac();
        mac.update(payload);
        mac.verify_slice(sig).is_ok()
    }

    fn keyed_mac(&self) -> HmacSha256 {
        // HMAC takes keys of any length, so new_from_slice cannot fail for
        // this algorithm.
        HmacSha256::new_from_slice(&self.secret)
            .unwrap_or_else(|_| HmacSha256::new(&Key::<HmacSha256>::default()))
    }
}

/// Compact ordered representation: a JSON sequence of `[id, value]` pairs,
/// preserving input order.
fn serialize_answers(answers: &[Answer]) -> Result<String, TokenError> {
    let pairs: Vec<(u32, u8)> = answers.iter().map(|a| (a.question_id, a.value)).collect();
    serde_json::to_string(&pairs).map_err(|_| TokenError::MalformedPayload)
}

fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
