use anchor_client::solana_sdk::pubkey::Pubkey;
use paystream::utils::errors::ErrorCode;

use crate::{
    helpers::{assert_custom_error, instructions::tick_ix, StreamFixture},
    invariants::{check_conservation, check_session_invariants},
};

#[tokio::test]
async fn test_tick_accrues_the_rate() {
    let mut fx = StreamFixture::new(1_000).await;
    fx.open_stream(10, 1_000).await;

    for expected in (10..=50).step_by(10) {
        fx.tick().await.unwrap();
        assert_eq!(fx.session_account().await.accumulated_amount, expected);
    }
    fx.tick_times(5).await;

    assert_eq!(fx.accrued_amount_of().await, 100);
    assert_eq!(fx.refundable_amount_of().await, 900);
    // Ticks are bookkeeping only.
    assert_eq!(fx.host_balance().await, 0);
    assert_eq!(fx.vault_balance().await, 1_000);
    check_session_invariants(&mut fx).await;
}

#[tokio::test]
async fn test_tick_up_to_the_deposit() {
    let mut fx = StreamFixture::new(1_000).await;
    fx.open_stream(100, 1_000).await;

    fx.tick_times(10).await;
    assert_eq!(fx.accrued_amount_of().await, 1_000);

    assert_custom_error(fx.tick().await, ErrorCode::InsufficientFunds);
    assert_eq!(fx.accrued_amount_of().await, 1_000);
    check_session_invariants(&mut fx).await;
}

#[tokio::test]
async fn test_tick_never_overshoots_the_deposit() {
    let mut fx = StreamFixture::new(1_000).await;
    fx.open_stream(101, 1_000).await;

    fx.tick_times(9).await;
    assert_eq!(fx.accrued_amount_of().await, 909);

    assert_custom_error(fx.tick().await, ErrorCode::InsufficientFunds);
    assert_eq!(fx.accrued_amount_of().await, 909);
    check_session_invariants(&mut fx).await;
}

#[tokio::test]
async fn test_tick_rate_above_the_deposit_fails() {
    let mut fx = StreamFixture::new(100).await;
    fx.open_stream(u64::MAX, 100).await;

    assert_custom_error(fx.tick().await, ErrorCode::InsufficientFunds);
    assert_eq!(fx.accrued_amount_of().await, 0);
}

#[tokio::test]
async fn test_tick_unknown_session_fails() {
    let mut fx = StreamFixture::new(0).await;

    assert_custom_error(
        fx.ctx.send(&[tick_ix(&Pubkey::new_unique())], &[]).await,
        anchor_lang::error::ErrorCode::AccountNotInitialized,
    );
}

#[tokio::test]
async fn test_tick_after_close_fails() {
    let mut fx = StreamFixture::new(1_000).await;
    fx.open_stream(10, 1_000).await;
    fx.tick_times(3).await;
    fx.close().await.unwrap();

    assert_custom_error(fx.tick().await, anchor_lang::error::ErrorCode::AccountNotInitialized);
    assert_eq!(fx.host_balance().await, 30);
    let accounts = [fx.payer_ata, fx.host_ata];
    check_conservation(&mut fx, &accounts).await;
}

#[tokio::test]
async fn test_tick_boundary_at_one_hundred_ticks() {
    let mut fx = StreamFixture::new(1_000).await;
    fx.open_stream(10, 1_000).await;

    fx.tick_times(100).await;
    assert_eq!(fx.accrued_amount_of().await, 1_000);
    assert_eq!(fx.refundable_amount_of().await, 0);

    assert_custom_error(fx.tick().await, ErrorCode::InsufficientFunds);

    let session = fx.session_account().await;
    assert_eq!(session.accumulated_amount, 1_000);
    assert!(session.is_active);
    check_session_invariants(&mut fx).await;
}
