use anchor_lang::prelude::*;

use crate::{
    state::{delegation_record::DelegationRecord, stream_session::StreamSession},
    utils::constants::seeds::*,
};

#[derive(Accounts)]
pub struct DelegationView<'info> {
    /// Read account: the delegated session.
    #[account(
      seeds = [SESSION, session.payer.as_ref(), session.host.as_ref()],
      bump = session.bump,
    )]
    pub session: Box<Account<'info, StreamSession>>,

    /// Read account: the delegation record of the session.
    #[account(
      seeds = [DELEGATION_RECORD, session.key().as_ref()],
      bump = delegation_record.bump,
    )]
    pub delegation_record: Account<'info, DelegationRecord>,
}

/// See the documentation for [`fn@crate::paystream::delegation_view`].
pub fn handler(ctx: Context<DelegationView>) -> Result<DelegationRecord> {
    Ok(DelegationRecord::clone(&ctx.accounts.delegation_record))
}
