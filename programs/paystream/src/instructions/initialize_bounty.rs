use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    state::bounty_pool::BountyPool,
    utils::{
        constants::{misc::ANCHOR_DISCRIMINATOR_SIZE, seeds::*},
        events::BountyInitialized,
        transfer_helper::transfer_tokens,
        validations::{check_initialize_bounty, check_mint_extensions},
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct InitializeBounty<'info> {
    // -------------------------------------------------------------------------- //
    //                               USER ACCOUNTS                                //
    // -------------------------------------------------------------------------- //
    /// Write account: the authority committing the hash and funding the bounty.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Write account: the authority's ATA funding the bounty.
    #[account(
      mut,
      associated_token::mint = mint,
      associated_token::authority = authority,
      associated_token::token_program = token_program,
    )]
    pub authority_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    // -------------------------------------------------------------------------- //
    //                               BOUNTY ACCOUNTS                              //
    // -------------------------------------------------------------------------- //
    /// Create account: the bounty pool of the authority.
    #[account(
      init_if_needed,
      payer = authority,
      space = ANCHOR_DISCRIMINATOR_SIZE + BountyPool::INIT_SPACE,
      seeds = [BOUNTY, authority.key().as_ref()],
      bump,
    )]
    pub bounty: Box<Account<'info, BountyPool>>,

    /// Create account: the vault holding the bounty, owned by the bounty pool.
    #[account(
      init_if_needed,
      payer = authority,
      token::mint = mint,
      token::authority = bounty,
      token::token_program = token_program,
      seeds = [BOUNTY_VAULT, bounty.key().as_ref()],
      bump,
    )]
    pub bounty_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Read account: the mint of the bounty token.
    #[account(mint::token_program = token_program)]
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

/// See the documentation for [`fn@crate::paystream::initialize_bounty`].
pub fn handler(ctx: Context<InitializeBounty>, target_hash: [u8; 32], amount: u64) -> Result<()> {
    // Check: the mint delivers the whole amount to the vault.
    check_mint_extensions(&ctx.accounts.mint.to_account_info())?;

    // Check: validate the bounty initialization.
    check_initialize_bounty(ctx.accounts.bounty.is_initialized(), amount, ctx.accounts.authority_ata.amount)?;

    // Effect: initialize the bounty pool account.
    ctx.accounts.bounty.initialize(
        ctx.bumps.bounty,
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
        target_hash,
    )?;

    // Interaction: fund the bounty vault.
    transfer_tokens(
        ctx.accounts.authority_ata.to_account_info(),
        ctx.accounts.bounty_vault.to_account_info(),
        ctx.accounts.authority.to_account_info(),
        &ctx.accounts.mint,
        ctx.accounts.token_program.to_account_info(),
        amount,
        &[],
    )?;

    // Log the bounty initialization.
    emit!(BountyInitialized {
        bounty: ctx.accounts.bounty.key(),
        authority: ctx.accounts.authority.key(),
        mint: ctx.accounts.mint.key(),
        target_hash,
        amount,
    });

    Ok(())
}
