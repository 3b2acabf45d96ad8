//! Property-based tests for share-token roundtrip and tamper rejection.
//!
//! These tests verify that decode(encode(x)) == x for random valid answer
//! sets, and that no single-character edit of a token parameter survives
//! verification.

use proptest::prelude::*;
use tomo_index::{Answer, ShareCodec, TokenError};
use url::Url;

const TS: i64 = 1_700_000_000_000;

/// Strategy for valid answer sets: up to six distinct questions, ratings in
/// the 0-7 form domain (0 is the unanswered sentinel).
fn answers_strategy() -> impl Strategy<Value = Vec<Answer>> {
    prop::collection::vec((1u32..=6u32, 0u8..=7u8), 0..=6).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, value)| Answer::new(id, value))
            .collect()
    })
}

/// Pull the three token parameters back out of an encoded URL.
fn params(url: &str) -> (String, String, String) {
    let parsed = Url::parse(url).unwrap();
    let get = |name: &str| {
        parsed
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default()
    };
    (get("data"), get("ts"), get("sig"))
}

/// Replace the character at `index` with a different base64url character.
fn flip_char(s: &str, index: usize) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == index {
                if c == 'A' { 'B' } else { 'A' }
            } else {
                c
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn roundtrip_any_valid_answers(answers in answers_strategy()) {
        let codec = ShareCodec::new("prop-secret");
        let url = codec.encode_at("https://example.com/results", &answers, TS).unwrap();
        let (data, ts, sig) = params(&url);

        let decoded = codec.decode_at(&data, &ts, &sig, TS + 60_000).unwrap();
        prop_assert_eq!(decoded, answers);
    }

    #[test]
    fn tampered_data_never_verifies(
        answers in answers_strategy(),
        index in 0usize..64,
    ) {
        let codec = ShareCodec::new("prop-secret");
        let url = codec.encode_at("https://example.com/results", &answers, TS).unwrap();
        let (data, ts, sig) = params(&url);

        let index = index % data.len();
        let tampered = flip_char(&data, index);
        prop_assume!(tampered != data);

        let outcome = codec.decode_at(&tampered, &ts, &sig, TS);
        prop_assert!(matches!(
            outcome,
            Err(TokenError::SignatureMismatch) | Err(TokenError::MalformedPayload)
        ));
    }

    #[test]
    fn tampered_signature_never_verifies(
        answers in answers_strategy(),
        index in 0usize..43,
    ) {
        let codec = ShareCodec::new("prop-secret");
        let url = codec.encode_at("https://example.com/results", &answers, TS).unwrap();
        let (data, ts, sig) = params(&url);

        let index = index % sig.len();
        let tampered = flip_char(&sig, index);
        prop_assume!(tampered != sig);

        prop_assert_eq!(
            codec.decode_at(&data, &ts, &tampered, TS),
            Err(TokenError::SignatureMismatch)
        );
    }
}
