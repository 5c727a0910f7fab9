use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    state::bounty_pool::BountyPool,
    utils::{
        constants::seeds::*,
        events::BountyClaimed,
        transfer_helper::{close_token_account, transfer_tokens},
        validations::check_claim_bounty,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct ClaimBounty<'info> {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the claimer revealing the secret.
    #[account(mut)]
    pub claimer: Signer<'info>,

    /// Create-if-needed account: the claimer's ATA receiving the bounty.
    #[account(
      init_if_needed,
      payer = claimer,
      associated_token::mint = mint,
      associated_token::authority = claimer,
      associated_token::token_program = token_program,
    )]
    pub claimer_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Write account: the bounty authority receiving the rent of the closed accounts.
    /// CHECK: Validated through the constraint `address = bounty.authority`.
    #[account(mut, address = bounty.authority)]
    pub authority: UncheckedAccount<'info>,

    // -------------------------------------------------------------------------- //
    //                               BOUNTY ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Close account: the bounty pool being claimed.
    #[account(
      mut,
      close = authority,
      seeds = [BOUNTY, bounty.authority.as_ref()],
      bump = bounty.bump,
    )]
    pub bounty: Box<Account<'info, BountyPool>>,

    /// Close account: the vault holding the bounty.
    #[account(
      mut,
      token::mint = mint,
      token::authority = bounty,
      token::token_program = token_program,
      seeds = [BOUNTY_VAULT, bounty.key().as_ref()],
      bump,
    )]
    pub bounty_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the mint of the bounty token.
    #[account(address = bounty.mint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    // -------------------------------------------------------------------------- //
    //                              PROGRAM ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Program account: the Associated Token program.
    pub associated_token_program: Program<'info, AssociatedToken>,

    /// Program account: the Token program of the bounty token.
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

/// See the documentation for [`fn@crate::paystream::claim_bounty`].
pub fn handler(ctx: Context<ClaimBounty>, secret: Vec<u8>) -> Result<()> {
    // Check: validate the claim.
    check_claim_bounty(&secret, &ctx.accounts.bounty.target_hash)?;

    let amount = ctx.accounts.bounty_vault.amount;
    let authority_key = ctx.accounts.bounty.authority;
    let signer_seeds: &[&[&[u8]]] = &[&[BOUNTY, authority_key.as_ref(), &[ctx.accounts.bounty.bump]]];

    // Interaction: release the whole vault to the claimer.
    transfer_tokens(
        ctx.accounts.bounty_vault.to_account_info(),
        ctx.accounts.claimer_ata.to_account_info(),
        ctx.accounts.bounty.to_account_info(),
        &ctx.accounts.mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        signer_seeds,
    )?;

    // Interaction: deallocate the emptied vault. The bounty pool itself is closed on exit.
    close_token_account(
        ctx.accounts.bounty_vault.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.bounty.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    // Log the claim.
    emit!(BountyClaimed {
        bounty: ctx.accounts.bounty.key(),
        claimer: ctx.accounts.claimer.key(),
        amount,
    });

    Ok(())
}
