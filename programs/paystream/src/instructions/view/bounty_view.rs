use anchor_lang::prelude::*;

use crate::{state::bounty_pool::BountyPool, utils::constants::seeds::BOUNTY};

#[derive(Accounts)]
pub struct BountyView<'info> {
    /// Read account: the account storing the bounty pool details.
    #[account(
      seeds = [BOUNTY, bounty.authority.as_ref()],
      bump = bounty.bump,
    )]
    pub bounty: Box<Account<'info, BountyPool>>,
}

/// See the documentation for [`fn@crate::paystream::bounty_view`].
pub fn handler(ctx: Context<BountyView>) -> Result<BountyPool> {
    Ok(BountyPool::clone(&ctx.accounts.bounty))
}
