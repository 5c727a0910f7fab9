use anchor_lang::prelude::*;

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::{constants::seeds::*, events::SessionUndelegated, validations::check_process_undelegation},
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct ProcessUndelegation<'info> {
    /// Read account: the executor handing the session back.
    pub executor: Signer<'info>,

    /// Write account: the payer receiving the delegation record's rent.
    /// CHECK: Validated through the constraint `address = session.payer`.
    #[account(mut, address = session.payer)]
    pub payer: UncheckedAccount<'info>,

    /// Write account: the session restored to the primary ledger.
    #[account(mut)]
    pub session: Box<Account<'info, StreamSession>>,

    /// Close account: the delegation record holding the final working copy.
    #[account(
      mut,
      close = payer,
      seeds = [DELEGATION_RECORD, session.key().as_ref()],
      bump = delegation_record.bump,
    )]
    pub delegation_record: Box<Account<'info, DelegationRecord>>,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::paystream::process_undelegation`].
pub fn handler(ctx: Context<ProcessUndelegation>, account_seeds: Vec<Vec<u8>>) -> Result<()> {
    // Check: validate the undelegation.
    check_process_undelegation(
        &ctx.accounts.session,
        &ctx.accounts.session.key(),
        &ctx.accounts.delegation_record,
        &ctx.accounts.executor.key(),
        &account_seeds,
        &crate::ID,
    )?;

    // Effect: restore the final accrual to the primary copy.
    let accumulated_amount = ctx.accounts.delegation_record.accumulated_amount;
    ctx.accounts.session.undelegate(accumulated_amount)?;

    // Log the undelegation.
    msg!("Session {} undelegated at {}", ctx.accounts.session.key(), accumulated_amount);
    emit!(SessionUndelegated {
        session: ctx.accounts.session.key(),
        executor: ctx.accounts.executor.key(),
        accumulated_amount,
    });

    Ok(())
}
