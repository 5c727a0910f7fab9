use anchor_lang::prelude::*;

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::{constants::seeds::*, events::StreamTicked, validations::check_tick_delegated},
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct TickDelegated<'info> {
    /// Read account: the executor holding the session.
    pub executor: Signer<'info>,

    /// Read account: the delegated session. The primary copy stays frozen.
    #[account(
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Write account: the executor's working copy of the accrual.
    #[account(
      mut,
      seeds = [DELEGATION_RECORD, session.key().as_ref()],
      bump = delegation_record.bump,
    )]
    pub delegation_record: Account<'info, DelegationRecord>,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::paystream::tick_delegated`].
pub fn handler(ctx: Context<TickDelegated>) -> Result<()> {
    let session = &ctx.accounts.session;
    let record = &mut ctx.accounts.delegation_record;

    // Check: validate the tick against the working copy.
    check_tick_delegated(session, record, &ctx.accounts.executor.key())?;

    // Effect: accrue one tick on the working copy.
    record.tick(session.rate, session.total_deposited)?;

    // Log the tick.
    emit!(StreamTicked {
        session: session.key(),
        accumulated_amount: record.accumulated_amount,
        is_delegated: true,
    });

    Ok(())
}
