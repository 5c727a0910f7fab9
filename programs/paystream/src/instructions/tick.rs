use anchor_lang::prelude::*;

use crate::{
    state::stream_session::StreamSession,
    utils::{constants::seeds::*, events::StreamTicked, validations::check_tick},
};

// -------------------------------------------------------------------------- //
//                                IX ACCOUNTS                                 //
// -------------------------------------------------------------------------- //

#[derive(Accounts)]
pub struct Tick<'info> {
    /// Write account: the session being ticked on the primary copy.
    #[account(
      mut,
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,
}

// -------------------------------------------------------------------------- //
//                                 IX HANDLER                                 //
// -------------------------------------------------------------------------- //

/// See the documentation for [`fn@crate::paystream::tick`].
pub fn handler(ctx: Context<Tick>) -> Result<()> {
    let session = &mut ctx.accounts.session;

    // Check: validate the tick.
    check_tick(session)?;

    // Effect: accrue one tick.
    session.tick()?;

    // Log the tick.
    emit!(StreamTicked {
        session: session.key(),
        accumulated_amount: session.accumulated_amount,
        is_delegated: false,
    });

    Ok(())
}
