// Account Seeds
pub mod seeds {
    pub const BOUNTY: &[u8] = b"bounty";
    pub const BOUNTY_VAULT: &[u8] = b"bounty_vault";
    pub const DELEGATION_RECORD: &[u8] = b"delegation";
    pub const SESSION: &[u8] = b"session";
    pub const VAULT: &[u8] = b"vault";
}

// Miscellaneous
pub mod misc {
    pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;
}
