use anchor_lang::prelude::*;

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::{
        constants::{misc::ANCHOR_DISCRIMINATOR_SIZE, seeds::*},
        errors::ErrorCode,
        events::SessionDelegated,
        time::get_current_time,
        validations::check_delegate,
    },
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct Delegate<'info> {
    /// Write account: the payer handing the session over, paying for the delegation record.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Read account: the low-latency executor receiving write authority.
    /// CHECK: The executor may be any account; it signs ticks and the undelegation.
    pub executor: UncheckedAccount<'info>,

    /// Write account: the session being delegated.
    #[account(
      mut,
      has_one = payer @ ErrorCode::Unauthorized,
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Create account: the delegation commitment and the executor's working copy.
    #[account(
      init_if_needed,
      payer = payer,
      space = ANCHOR_DISCRIMINATOR_SIZE + DelegationRecord::INIT_SPACE,
      seeds = [DELEGATION_RECORD, session.key().as_ref()],
      bump,
    )]
    pub delegation_record: Box<Account<'info, DelegationRecord>>,

    /// Program account: the System program.
    pub system_program: Program<'info, System>,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::paystream::delegate`].
pub fn handler(ctx: Context<Delegate>) -> Result<()> {
    // Check: validate the delegation.
    check_delegate(&ctx.accounts.session)?;

    // Effect: record the commitment, snapshotting the accrual into the working copy.
    ctx.accounts.delegation_record.initialize(
        ctx.bumps.delegation_record,
        ctx.accounts.session.key(),
        crate::ID,
        ctx.accounts.executor.key(),
        ctx.accounts.session.accumulated_amount,
        get_current_time()?,
    )?;

    // Effect: freeze the primary copy.
    ctx.accounts.session.delegate()?;

    // Log the delegation.
    msg!("Session {} delegated to {}", ctx.accounts.session.key(), ctx.accounts.executor.key());
    emit!(SessionDelegated {
        session: ctx.accounts.session.key(),
        executor: ctx.accounts.executor.key(),
        accumulated_amount: ctx.accounts.session.accumulated_amount,
    });

    Ok(())
}
