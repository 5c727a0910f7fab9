use anchor_client::solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use paystream::{
    state::BountyPool,
    utils::{
        errors::ErrorCode,
        pda::{find_bounty_address, find_bounty_vault_address},
        validations::hash_secret,
    },
};
use solana_program_test::BanksClientError;

use crate::helpers::{
    assert_custom_error,
    instructions::{bounty_view_ix, claim_bounty_ix, initialize_bounty_ix},
    TestContext,
};

struct BountyFixture {
    ctx: TestContext,
    mint: Pubkey,
    token_program: Pubkey,
    authority: Keypair,
    authority_ata: Pubkey,
    claimer: Keypair,
    claimer_ata: Pubkey,
    bounty: Pubkey,
}

impl BountyFixture {
    async fn new(authority_funds: u64) -> Self {
        let mut ctx = TestContext::new().await;
        let token_program = anchor_spl::token::ID;
        let mint = ctx.create_mint(&token_program).await;
        let authority = ctx.create_actor().await;
        let claimer = ctx.create_actor().await;
        let authority_ata = ctx.create_ata(&authority.pubkey(), &mint).await;
        ctx.mint_to(&mint, &authority_ata, authority_funds).await;

        let claimer_ata = get_associated_token_address_with_program_id(&claimer.pubkey(), &mint, &token_program);
        let bounty = find_bounty_address(&authority.pubkey()).0;

        Self { ctx, mint, token_program, authority, authority_ata, claimer, claimer_ata, bounty }
    }

    fn bounty_vault(&self) -> Pubkey {
        find_bounty_vault_address(&self.bounty).0
    }

    async fn initialize(&mut self, secret: &[u8], amount: u64) -> Result<(), BanksClientError> {
        let ix = initialize_bounty_ix(
            &self.authority.pubkey(),
            &self.mint,
            &self.token_program,
            hash_secret(secret),
            amount,
        );
        self.ctx.send(&[ix], &[&self.authority]).await
    }

    async fn claim(&mut self, secret: &[u8]) -> Result<(), BanksClientError> {
        let ix =
            claim_bounty_ix(&self.claimer.pubkey(), &self.authority.pubkey(), &self.mint, &self.token_program, secret);
        self.ctx.send(&[ix], &[&self.claimer]).await
    }

    async fn balance_of(&mut self, address: Pubkey) -> u64 {
        self.ctx.token_balance(&address).await
    }
}

#[tokio::test]
async fn test_claim_bounty() {
    let mut fx = BountyFixture::new(500).await;
    fx.initialize(b"supersecret", 500).await.unwrap();
    assert_eq!(fx.balance_of(fx.authority_ata).await, 0);
    assert_eq!(fx.balance_of(fx.bounty_vault()).await, 500);

    let authority = fx.authority.pubkey();
    let pool: BountyPool = fx.ctx.view(bounty_view_ix(&authority)).await;
    assert_eq!(pool.authority, authority);
    assert_eq!(pool.mint, fx.mint);
    assert_eq!(pool.target_hash, hash_secret(b"supersecret"));

    fx.claim(b"supersecret").await.unwrap();

    assert_eq!(fx.balance_of(fx.claimer_ata).await, 500);
    let (bounty, vault) = (fx.bounty, fx.bounty_vault());
    assert!(!fx.ctx.account_exists(&bounty).await);
    assert!(!fx.ctx.account_exists(&vault).await);

    let mint = fx.mint;
    let total = fx.balance_of(fx.authority_ata).await + fx.balance_of(fx.claimer_ata).await;
    assert_eq!(total, fx.ctx.mint_supply(&mint).await);
}

#[tokio::test]
async fn test_claim_bounty_twice_fails() {
    let mut fx = BountyFixture::new(500).await;
    fx.initialize(b"supersecret", 500).await.unwrap();
    fx.claim(b"supersecret").await.unwrap();

    assert_custom_error(fx.claim(b"supersecret").await, anchor_lang::error::ErrorCode::AccountNotInitialized);
    assert_eq!(fx.balance_of(fx.claimer_ata).await, 500);
}

#[tokio::test]
async fn test_claim_bounty_with_wrong_secret_fails() {
    let mut fx = BountyFixture::new(500).await;
    fx.initialize(b"supersecret", 500).await.unwrap();

    assert_custom_error(fx.claim(b"notthesecret").await, ErrorCode::InvalidSecret);
    assert_custom_error(fx.claim(b"").await, ErrorCode::InvalidSecret);

    assert_eq!(fx.balance_of(fx.claimer_ata).await, 0);
    assert_eq!(fx.balance_of(fx.bounty_vault()).await, 500);
}

#[tokio::test]
async fn test_initialize_bounty_rejects_invalid_parameters() {
    let mut fx = BountyFixture::new(500).await;

    assert_custom_error(fx.initialize(b"supersecret", 0).await, ErrorCode::DepositAmountZero);
    assert_custom_error(fx.initialize(b"supersecret", 501).await, ErrorCode::InsufficientFunds);

    let bounty = fx.bounty;
    assert!(!fx.ctx.account_exists(&bounty).await);
}

#[tokio::test]
async fn test_initialize_bounty_twice_fails() {
    let mut fx = BountyFixture::new(1_000).await;
    fx.initialize(b"supersecret", 500).await.unwrap();

    assert_custom_error(fx.initialize(b"another", 500).await, ErrorCode::AlreadyInitialized);

    let bounty = fx.bounty;
    let pool: BountyPool = fx.ctx.fetch(&bounty).await;
    assert_eq!(pool.target_hash, hash_secret(b"supersecret"));
    assert_eq!(fx.balance_of(fx.authority_ata).await, 500);
}

#[tokio::test]
async fn test_initialize_bounty_after_claim() {
    let mut fx = BountyFixture::new(1_000).await;
    fx.initialize(b"supersecret", 500).await.unwrap();
    fx.claim(b"supersecret").await.unwrap();

    fx.initialize(b"another", 300).await.unwrap();
    fx.claim(b"another").await.unwrap();

    assert_eq!(fx.balance_of(fx.claimer_ata).await, 800);
    assert_eq!(fx.balance_of(fx.authority_ata).await, 200);
}

#[tokio::test]
async fn test_initialize_bounty_with_transfer_fee_mint_fails() {
    let mut ctx = TestContext::new().await;
    let mint = ctx.create_transfer_fee_mint(100).await;
    let authority = ctx.create_actor().await;
    let authority_ata = ctx.create_ata(&authority.pubkey(), &mint).await;
    ctx.mint_to(&mint, &authority_ata, 500).await;

    let ix = initialize_bounty_ix(&authority.pubkey(), &mint, &anchor_spl::token_2022::ID, hash_secret(b"s"), 500);
    assert_custom_error(ctx.send(&[ix], &[&authority]).await, ErrorCode::TransferFeeMint);

    assert!(!ctx.account_exists(&find_bounty_address(&authority.pubkey()).0).await);
    assert_eq!(ctx.token_balance(&authority_ata).await, 500);
}
