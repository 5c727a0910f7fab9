use anchor_lang::prelude::*;

#[event]
pub struct BountyClaimed {
    pub bounty: Pubkey,
    pub claimer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BountyInitialized {
    pub bounty: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub target_hash: [u8; 32],
    pub amount: u64,
}

#[event]
pub struct SessionDelegated {
    pub session: Pubkey,
    pub executor: Pubkey,
    pub accumulated_amount: u64,
}

#[event]
pub struct SessionUndelegated {
    pub session: Pubkey,
    pub executor: Pubkey,
    pub accumulated_amount: u64,
}

#[event]
pub struct StreamClosed {
    pub session: Pubkey,
    pub host_amount: u64,
    pub payer_amount: u64,
}

#[event]
pub struct StreamInitialized {
    pub session: Pubkey,
    pub payer: Pubkey,
    pub host: Pubkey,
    pub mint: Pubkey,
    pub rate: u64,
    pub total_deposited: u64,
}

#[event]
pub struct StreamTicked {
    pub session: Pubkey,
    pub accumulated_amount: u64,
    pub is_delegated: bool,
}
