use anchor_lang::prelude::*;

use crate::utils::{accrual_math::accrue, errors::ErrorCode};

/// The delegation commitment of a session, and the executor's working copy of its accrual while delegated.
#[account]
#[derive(Default, InitSpace)]
pub struct DelegationRecord {
    pub bump: u8,
    pub session: Pubkey,
    pub owner_program: Pubkey,
    pub executor: Pubkey,
    pub accumulated_amount: u64,
    pub delegated_at: u64,
}

impl DelegationRecord {
    /// State update for the [`crate::paystream::delegate`] instruction.
    pub fn initialize(
        &mut self,
        bump: u8,
        session: Pubkey,
        owner_program: Pubkey,
        executor: Pubkey,
        accumulated_amount: u64,
        delegated_at: u64,
    ) -> Result<()> {
        self.bump = bump;
        self.session = session;
        self.owner_program = owner_program;
        self.executor = executor;
        self.accumulated_amount = accumulated_amount;
        self.delegated_at = delegated_at;

        Ok(())
    }

    /// State update for the [`crate::paystream::tick_delegated`] instruction.
    pub fn tick(&mut self, rate: u64, total_deposited: u64) -> Result<()> {
        self.accumulated_amount =
            accrue(self.accumulated_amount, rate, total_deposited).ok_or(ErrorCode::InsufficientFunds)?;

        Ok(())
    }
}
