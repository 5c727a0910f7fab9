use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    state::stream_session::StreamSession,
    utils::{
        constants::seeds::*,
        errors::ErrorCode,
        events::StreamClosed,
        transfer_helper::{close_token_account, transfer_tokens},
        validations::check_close_stream,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct CloseStream<'info> {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the payer closing the stream, receiving the remainder and the rent.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Write account: the payer's ATA receiving the unaccrued remainder.
    #[account(
      mut,
      associated_token::mint = mint,
      associated_token::authority = payer,
      associated_token::token_program = token_program,
    )]
    pub payer_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the host receiving the accrued amount.
    /// CHECK: Validated through the constraint `address = session.host`.
    #[account(address = session.host)]
    pub host: UncheckedAccount<'info>,

    /// Create-if-needed account: the host's ATA receiving the accrued amount.
    #[account(
      init_if_needed,
      payer = payer,
      associated_token::mint = mint,
      associated_token::authority = host,
      associated_token::token_program = token_program,
    )]
    pub host_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    // -------------------------------------------------------------------------- //
    //                              SESSION ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Close account: the session being settled.
    #[account(
      mut,
      close = payer,
      has_one = payer @ ErrorCode::Unauthorized,
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Close account: the escrow vault of the session.
    #[account(
      mut,
      token::mint = mint,
      token::authority = session,
      token::token_program = token_program,
      seeds = [VAULT, session.key().as_ref()],
      bump,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the mint of the streamed token.
    #[account(address = session.mint)]
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

/// See the documentation for [`fn@crate::paystream::close_stream`].
pub fn handler(ctx: Context<CloseStream>) -> Result<()> {
    // Check: validate the close.
    check_close_stream(&ctx.accounts.session, ctx.accounts.vault.amount)?;

    // Effect: deactivate the session and split the vault between the host and the payer.
    let vault_balance = ctx.accounts.vault.amount;
    let settlement = ctx.accounts.session.settle(vault_balance)?;

    let payer_key = ctx.accounts.session.payer;
    let host_key = ctx.accounts.session.host;
    let signer_seeds: &[&[&[u8]]] = &[&[SESSION, payer_key.as_ref(), host_key.as_ref(), &[ctx.accounts.session.bump]]];

    // Interaction: pay the accrued amount to the host.
    if settlement.host_amount > 0 {
        transfer_tokens(
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.host_ata.to_account_info(),
            ctx.accounts.session.to_account_info(),
            &ctx.accounts.mint,
            ctx.accounts.token_program.to_account_info(),
            settlement.host_amount,
            signer_seeds,
        )?;
    }

    // Interaction: refund the remainder to the payer.
    if settlement.payer_amount > 0 {
        transfer_tokens(
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.payer_ata.to_account_info(),
            ctx.accounts.session.to_account_info(),
            &ctx.accounts.mint,
            ctx.accounts.token_program.to_account_info(),
            settlement.payer_amount,
            signer_seeds,
        )?;
    }

    // Interaction: deallocate the emptied vault. The session itself is closed on exit.
    close_token_account(
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.payer.to_account_info(),
        ctx.accounts.session.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    // Log the settlement.
    msg!(
        "Stream {} settled: {} to host, {} to payer",
        ctx.accounts.session.key(),
        settlement.host_amount,
        settlement.payer_amount
    );
    emit!(StreamClosed {
        session: ctx.accounts.session.key(),
        host_amount: settlement.host_amount,
        payer_amount: settlement.payer_amount,
    });

    Ok(())
}
