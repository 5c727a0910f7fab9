use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    state::stream_session::StreamSession,
    utils::{
        constants::{misc::ANCHOR_DISCRIMINATOR_SIZE, seeds::*},
        events::StreamInitialized,
        transfer_helper::transfer_tokens,
        validations::{check_initialize_stream, check_mint_extensions},
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct InitializeStream<'info> {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the payer funding the stream and paying for the new accounts.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Write account: the payer's ATA funding the deposit.
    #[account(
      mut,
      associated_token::mint = mint,
      associated_token::authority = payer,
      associated_token::token_program = token_program,
    )]
    pub payer_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the host entitled to the accrued amount.
    /// CHECK: The host may be any account and never signs.
    pub host: UncheckedAccount<'info>,

    // -------------------------------------------------------------------------- //
    //                              SESSION ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Create account: the session record of the `(payer, host)` pair.
    #[account(
      init_if_needed,
      payer = payer,
      space = ANCHOR_DISCRIMINATOR_SIZE + StreamSession::INIT_SPACE,
      seeds = [SESSION, payer.key().as_ref(), host.key().as_ref()],
      bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Create account: the escrow vault owned by the session.
    #[account(
      init_if_needed,
      payer = payer,
      token::mint = mint,
      token::authority = session,
      token::token_program = token_program,
      seeds = [VAULT, session.key().as_ref()],
      bump,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the mint of the streamed token.
    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Associated Token program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Program account: the Token program of the streamed token.
    pub token_program: Interface<'info, TokenInterface>,

    // -------------------------------------------------------------------------- //
    //                               SYSTEM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the System program.
    pub system_program: Program<'info, System>,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::paystream::initialize_stream`].
pub fn handler(ctx: Context<InitializeStream>, rate: u64, amount: u64) -> Result<()> {
    // Check: the mint delivers the whole amount to the vault.
    check_mint_extensions(&ctx.accounts.mint.to_account_info())?;

    // Check: validate the stream initialization.
    check_initialize_stream(ctx.accounts.session.is_active, rate, amount, ctx.accounts.payer_ata.amount)?;

    // Effect: initialize the session account.
    ctx.accounts.session.initialize(
        ctx.bumps.session,
        ctx.accounts.payer.key(),
        ctx.accounts.host.key(),
        ctx.accounts.mint.key(),
        rate,
        amount,
    )?;

    // Interaction: deposit the funds into the vault.
    transfer_tokens(
        ctx.accounts.payer_ata.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        &ctx.accounts.mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        &[],
    )?;

    // Log the stream initialization.
    msg!("{} opened a stream to {} at {} per tick", ctx.accounts.payer.key(), ctx.accounts.host.key(), rate);
    emit!(StreamInitialized {
        session: ctx.accounts.session.key(),
        payer: ctx.accounts.payer.key(),
        host: ctx.accounts.host.key(),
        mint: ctx.accounts.mint.key(),
        rate,
        total_deposited: amount,
    });

    Ok(())
}
