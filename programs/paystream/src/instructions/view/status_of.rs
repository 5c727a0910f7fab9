use anchor_lang::prelude::*;

use super::SessionView;

/// See the documentation for [`fn@crate::paystream::status_of`].
pub fn handler(ctx: Context<SessionView>) -> Result<SessionStatus> {
    if ctx.accounts.session.is_delegated() {
        return Ok(SessionStatus::Delegated);
    }

    Ok(SessionStatus::Active)
}

/// The lifecycle state of a live session. Closed sessions are deallocated and can't be queried.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Delegated,
}
