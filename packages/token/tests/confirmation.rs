//! Registration confirmation round trips

use chrono::Duration;
use std::sync::Arc;
use storefront_token::confirmation::CONFIRM_KEY;
use storefront_token::{
    ManualClock, Payload, TokenCodec, TokenConfig, TokenError, confirm_user_id,
    issue_confirmation,
};

fn codec(clock: &Arc<ManualClock>) -> TokenCodec {
    TokenCodec::new(b"confirmation-secret-0123456789ab".to_vec(), Duration::seconds(3600))
        .expect("valid codec")
        .with_clock(clock.clone())
}

#[test]
fn test_confirmation_round_trip() {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let codec = codec(&clock);

    let token = issue_confirmation(&codec, 1234).expect("issue should succeed");
    assert_eq!(confirm_user_id(&codec, token.as_str()), Ok(1234));
}

#[test]
fn test_confirmation_expires_after_an_hour() {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let codec = codec(&clock);
    let token = issue_confirmation(&codec, 99).expect("issue should succeed");

    clock.advance(3600);
    assert_eq!(confirm_user_id(&codec, token.as_str()), Ok(99));

    clock.advance(1);
    assert_eq!(confirm_user_id(&codec, token.as_str()), Err(TokenError::Expired));
}

#[test]
fn test_token_without_confirm_key_is_invalid() {
    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let codec = codec(&clock);

    let other_purpose = codec
        .issue(&Payload::new().with("reset", 99))
        .expect("issue should succeed");
    assert_eq!(
        confirm_user_id(&codec, other_purpose.as_str()),
        Err(TokenError::Invalid)
    );

    let string_id = codec
        .issue(&Payload::new().with(CONFIRM_KEY, "99"))
        .expect("issue should succeed");
    assert_eq!(
        confirm_user_id(&codec, string_id.as_str()),
        Err(TokenError::Invalid)
    );
}

#[test]
fn test_codec_from_config_reads_environment_once() {
    let config = TokenConfig {
        secret_env: "STOREFRONT_TOKEN_TEST_PRIMARY".to_string(),
        default_ttl_seconds: 120,
        fallback_secret_envs: vec!["STOREFRONT_TOKEN_TEST_RETIRED".to_string()],
    };
    // Variable names are unique to this test
    std::env::set_var("STOREFRONT_TOKEN_TEST_PRIMARY", "p".repeat(40));
    std::env::set_var("STOREFRONT_TOKEN_TEST_RETIRED", "r".repeat(40));

    let clock = Arc::new(ManualClock::new(1_700_000_000));
    let codec = TokenCodec::from_config(&config)
        .expect("configured secrets should resolve")
        .with_clock(clock.clone());
    assert_eq!(codec.default_ttl(), Duration::seconds(120));

    // Later changes to the environment do not affect the built codec
    std::env::remove_var("STOREFRONT_TOKEN_TEST_PRIMARY");
    let token = issue_confirmation(&codec, 5).expect("issue should succeed");
    assert_eq!(confirm_user_id(&codec, token.as_str()), Ok(5));

    let retired = TokenCodec::new("r".repeat(40).into_bytes(), Duration::seconds(60))
        .expect("valid codec")
        .with_clock(clock);
    let old = issue_confirmation(&retired, 6).expect("issue should succeed");
    assert_eq!(confirm_user_id(&codec, old.as_str()), Ok(6));
}

#[test]
fn test_codec_from_config_missing_secret() {
    let config = TokenConfig {
        secret_env: "STOREFRONT_TOKEN_TEST_UNSET_VARIABLE".to_string(),
        ..TokenConfig::default()
    };
    assert!(matches!(
        TokenCodec::from_config(&config),
        Err(TokenError::InvalidKey(_))
    ));
}
