//! Behavioural properties of issued tokens

use chrono::Duration;
use proptest::prelude::*;
use std::sync::Arc;
use storefront_token::{ManualClock, Payload, Scalar, TokenCodec, TokenError};

const SECRET: &[u8; 32] = b"k3y-for-integration-tests-000001";
const OTHER_SECRET: &[u8; 32] = b"k3y-for-integration-tests-000002";
const START: i64 = 1_700_000_000;

fn codec_with_clock() -> (TokenCodec, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(START));
    let codec = TokenCodec::new(*SECRET, Duration::seconds(3600))
        .expect("32 byte secret should be accepted")
        .with_clock(clock.clone());
    (codec, clock)
}

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<i64>().prop_map(Scalar::Int),
        ".{0,24}".prop_map(Scalar::Str),
    ]
}

fn payload() -> impl Strategy<Value = Payload> {
    prop::collection::btree_map("[a-z_]{1,12}", scalar(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn issued_tokens_verify_immediately(payload in payload(), ttl in 1i64..1_000_000) {
        let (codec, _clock) = codec_with_clock();
        let token = codec
            .issue_with_ttl(&payload, Duration::seconds(ttl))
            .expect("issue should succeed");
        prop_assert_eq!(codec.verify(token.as_str()), Ok(payload));
    }

    #[test]
    fn any_single_bit_flip_is_rejected(
        payload in payload(),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let (codec, _clock) = codec_with_clock();
        let token = codec.issue(&payload).expect("issue should succeed");

        let mut bytes = token.into_string().into_bytes();
        let index = position.index(bytes.len());
        bytes[index] ^= 1 << bit;

        // A flip that breaks UTF-8 cannot even be presented as a token
        if let Ok(tampered) = String::from_utf8(bytes) {
            prop_assert_eq!(codec.verify(&tampered), Err(TokenError::Invalid));
        }
    }

    #[test]
    fn arbitrary_strings_never_verify(input in ".{0,200}") {
        let (codec, _clock) = codec_with_clock();
        prop_assert_eq!(codec.verify(&input), Err(TokenError::Invalid));
    }
}

#[test]
fn test_token_expires_after_ttl() {
    let (codec, clock) = codec_with_clock();
    let token = codec
        .issue_with_ttl(&Payload::new().with("confirm", 5), Duration::seconds(1))
        .expect("issue should succeed");

    clock.advance(2);
    assert_eq!(codec.verify(token.as_str()), Err(TokenError::Expired));
}

#[test]
fn test_default_ttl_is_applied() {
    let (codec, clock) = codec_with_clock();
    let verified = codec
        .issue(&Payload::new().with("confirm", 5))
        .and_then(|token| codec.verify_detailed(token.as_str()))
        .expect("fresh token should verify");

    assert_eq!(verified.issued_at, START);
    assert_eq!(verified.expires_at, START + 3600);
    assert_eq!(verified.ttl_seconds(), 3600);

    let token = codec
        .issue(&Payload::new().with("confirm", 5))
        .expect("issue should succeed");
    clock.advance(3601);
    assert_eq!(codec.verify(token.as_str()), Err(TokenError::Expired));
}

#[test]
fn test_different_timestamps_give_different_tokens() {
    let (codec, clock) = codec_with_clock();
    let payload = Payload::new().with("confirm", 11);

    let first = codec.issue(&payload).expect("issue should succeed");
    clock.advance(1);
    let second = codec.issue(&payload).expect("issue should succeed");

    assert_ne!(first, second);
    assert_eq!(codec.verify(first.as_str()), Ok(payload.clone()));
    assert_eq!(codec.verify(second.as_str()), Ok(payload));
}

#[test]
fn test_wrong_key_is_invalid_not_expired() {
    let (codec, clock) = codec_with_clock();
    let other = TokenCodec::new(*OTHER_SECRET, Duration::seconds(3600))
        .expect("valid codec")
        .with_clock(clock.clone());

    let token = other
        .issue(&Payload::new().with("confirm", 1))
        .expect("issue should succeed");
    assert_eq!(codec.verify(token.as_str()), Err(TokenError::Invalid));

    // Forgery stays Invalid even once it would have expired
    clock.advance(10_000);
    assert_eq!(codec.verify(token.as_str()), Err(TokenError::Invalid));
}

#[test]
fn test_swapping_payload_between_tokens_is_invalid() {
    let (codec, _clock) = codec_with_clock();
    let mine = codec.issue(&Payload::new().with("confirm", 1)).expect("issue");
    let theirs = codec.issue(&Payload::new().with("confirm", 2)).expect("issue");

    let mine: Vec<&str> = mine.as_str().split('.').collect();
    let theirs: Vec<&str> = theirs.as_str().split('.').collect();
    let spliced = format!("{}.{}.{}", mine[0], theirs[1], mine[2]);

    assert_eq!(codec.verify(&spliced), Err(TokenError::Invalid));
}

#[test]
fn test_extending_expiry_is_invalid() {
    let (codec, clock) = codec_with_clock();
    let short = codec
        .issue_with_ttl(&Payload::new().with("confirm", 1), Duration::seconds(1))
        .expect("issue");
    let long = codec
        .issue_with_ttl(&Payload::new().with("confirm", 1), Duration::seconds(100_000))
        .expect("issue");

    clock.advance(5);
    let short: Vec<&str> = short.as_str().split('.').collect();
    let long: Vec<&str> = long.as_str().split('.').collect();
    let extended = format!("{}.{}.{}", long[0], short[1], short[2]);

    assert_eq!(codec.verify(&extended), Err(TokenError::Invalid));
}

#[test]
fn test_malformed_structures_are_invalid() {
    let (codec, _clock) = codec_with_clock();
    let token = codec.issue(&Payload::new().with("confirm", 1)).expect("issue");
    let text = token.as_str();

    for candidate in [
        String::new(),
        ".".to_string(),
        "..".to_string(),
        format!("{text}."),
        format!(".{text}"),
        format!("{text}.AAAA"),
        text.replacen('.', "", 1),
        text.replace('-', "+"),
        format!("{text}="),
    ] {
        if candidate == text {
            continue;
        }
        assert_eq!(codec.verify(&candidate), Err(TokenError::Invalid), "{candidate}");
    }
}

#[test]
fn test_fallback_key_accepts_tokens_from_retired_secret() {
    let clock = Arc::new(ManualClock::new(START));
    let retired = TokenCodec::new(*OTHER_SECRET, Duration::seconds(60))
        .expect("valid codec")
        .with_clock(clock.clone());
    let rotated = TokenCodec::new(*SECRET, Duration::seconds(60))
        .and_then(|codec| codec.with_fallback_key(*OTHER_SECRET))
        .expect("valid codec")
        .with_clock(clock.clone());

    let old_token = retired.issue(&Payload::new().with("confirm", 3)).expect("issue");
    assert_eq!(
        rotated.verify(old_token.as_str()).map(|p| p.get_int("confirm")),
        Ok(Some(3))
    );

    // Newly issued tokens use the primary secret only
    let new_token = rotated.issue(&Payload::new().with("confirm", 4)).expect("issue");
    assert_eq!(retired.verify(new_token.as_str()), Err(TokenError::Invalid));

    clock.advance(61);
    assert_eq!(rotated.verify(old_token.as_str()), Err(TokenError::Expired));
}

#[test]
fn test_short_secrets_are_rejected() {
    assert!(matches!(
        TokenCodec::new(b"short".to_vec(), Duration::seconds(60)),
        Err(TokenError::InvalidKey(_))
    ));

    let codec = TokenCodec::new(*SECRET, Duration::seconds(60)).expect("valid codec");
    assert!(matches!(
        codec.with_fallback_key(b"also short".to_vec()),
        Err(TokenError::InvalidKey(_))
    ));
}

#[test]
fn test_codec_is_shareable_across_threads() {
    let (codec, _clock) = codec_with_clock();
    let codec = Arc::new(codec);

    let handles: Vec<_> = (0..8)
        .map(|user_id| {
            let codec = Arc::clone(&codec);
            std::thread::spawn(move || {
                let payload = Payload::new().with("confirm", user_id);
                let token = codec.issue(&payload).expect("issue should succeed");
                codec.verify(token.as_str()) == Ok(payload)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap_or(false));
    }
}
