use anchor_lang::prelude::*;

use crate::utils::{
    accrual_math::{accrue, get_settlement, Settlement},
    constants::seeds::SESSION,
    errors::ErrorCode,
};

/// Which venue holds write authority over a session.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum DelegationStatus {
    /// The primary ledger copy is authoritative.
    #[default]
    Local,
    /// The low-latency executor holds the session; the primary copy is frozen.
    Delegated,
}

#[account]
#[derive(Default, InitSpace)]
pub struct StreamSession {
    pub bump: u8,
    pub payer: Pubkey,
    pub host: Pubkey,
    pub mint: Pubkey,
    pub rate: u64,
    pub is_active: bool,
    pub accumulated_amount: u64,
    pub total_deposited: u64,
    pub delegation: DelegationStatus,
}

impl StreamSession {
    /// State update for the [`crate::paystream::initialize_stream`] instruction.
    pub fn initialize(
        &mut self,
        bump: u8,
        payer: Pubkey,
        host: Pubkey,
        mint: Pubkey,
        rate: u64,
        total_deposited: u64,
    ) -> Result<()> {
        self.bump = bump;
        self.payer = payer;
        self.host = host;
        self.mint = mint;
        self.rate = rate;
        self.is_active = true;
        self.accumulated_amount = 0;
        self.total_deposited = total_deposited;
        self.delegation = DelegationStatus::Local;

        Ok(())
    }

    /// State update for the [`crate::paystream::tick`] instruction, applied on the primary copy.
    pub fn tick(&mut self) -> Result<()> {
        self.accumulated_amount =
            accrue(self.accumulated_amount, self.rate, self.total_deposited).ok_or(ErrorCode::InsufficientFunds)?;

        Ok(())
    }

    /// State update for the [`crate::paystream::close_stream`] instruction.
    ///
    /// Returns the payout legs computed from the final accrual and the vault balance.
    pub fn settle(&mut self, vault_balance: u64) -> Result<Settlement> {
        let settlement = get_settlement(self, vault_balance).ok_or(ErrorCode::VaultBalanceMismatch)?;
        self.is_active = false;

        Ok(settlement)
    }

    /// State update for the [`crate::paystream::delegate`] instruction.
    pub fn delegate(&mut self) -> Result<()> {
        self.delegation = DelegationStatus::Delegated;

        Ok(())
    }

    /// State update for the [`crate::paystream::process_undelegation`] instruction.
    pub fn undelegate(&mut self, accumulated_amount: u64) -> Result<()> {
        self.accumulated_amount = accumulated_amount;
        self.delegation = DelegationStatus::Local;

        Ok(())
    }

    pub fn is_delegated(&self) -> bool {
        self.delegation == DelegationStatus::Delegated
    }

    /// The seeds of the session address, without the bump.
    pub fn seeds(&self) -> Vec<Vec<u8>> {
        vec![SESSION.to_vec(), self.payer.to_bytes().to_vec(), self.host.to_bytes().to_vec()]
    }
}
