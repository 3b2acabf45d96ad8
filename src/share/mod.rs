//! Signed, expiring share tokens for completed answer sets.
//!
//! A share URL carries three query parameters: `data` (base64url of the
//! compact answer pairs), `ts` (epoch milliseconds) and `sig` (base64url of
//! an HMAC-SHA256 over `data`'s decoded text plus `ts`). Decoding verifies
//! the signature and a 24-hour validity window, then reconstructs the
//! answers without touching any store.
//!
//! # Security posture
//!
//! The signing secret ships in client-distributed configuration, so this is
//! best-effort integrity, not confidentiality or strong tamper-proofing: it
//! defends against casual parameter editing and replay after expiry, not
//! against an adversary who can read the client configuration. If a trusted
//! backend ever comes into scope, signing belongs server-side.

mod codec;
mod error;

pub use codec::{ShareCodec, MAX_TOKEN_AGE_MS};
pub use error::TokenError;
