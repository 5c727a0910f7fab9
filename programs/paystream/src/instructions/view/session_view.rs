use anchor_lang::prelude::*;

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::constants::seeds::*,
};

// Common context that is used by multiple view instructions
#[derive(Accounts)]
pub struct SessionView<'info> {
    /// Read account: the account storing the session details.
    #[account(
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Read account: the delegation record, present while the session is delegated.
    #[account(
      seeds = [DELEGATION_RECORD, session.key().as_ref()],
      bump = delegation_record.bump,
    )]
    pub delegation_record: Option<Account<'info, DelegationRecord>>,
}

/// See the documentation for [`fn@crate::paystream::session_view`].
pub fn handler(ctx: Context<SessionView>) -> Result<StreamSession> {
    Ok(StreamSession::clone(&ctx.accounts.session))
}
