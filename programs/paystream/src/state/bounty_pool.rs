use anchor_lang::prelude::*;

#[account]
#[derive(Default, InitSpace)]
pub struct BountyPool {
    pub bump: u8,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub target_hash: [u8; 32],
}

impl BountyPool {
    /// State update for the [`crate::paystream::initialize_bounty`] instruction.
    pub fn initialize(&mut self, bump: u8, authority: Pubkey, mint: Pubkey, target_hash: [u8; 32]) -> Result<()> {
        self.bump = bump;
        self.authority = authority;
        self.mint = mint;
        self.target_hash = target_hash;

        Ok(())
    }

    /// A freshly allocated pool is zeroed, so a set authority marks an existing one.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}
