use anchor_lang::prelude::*;
use anchor_spl::token_interface::{close_account, transfer_checked, CloseAccount, Mint, TransferChecked};

/// Moves `amount` tokens of `mint` between two token accounts, checked against the mint's decimals.
///
/// Program-owned sources (session and bounty vaults) pass their PDA `signer_seeds`; user-owned sources pass `&[]`.
pub fn transfer_tokens<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    token_program: AccountInfo<'info>,
    amount: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let accounts = TransferChecked { from, mint: mint.to_account_info(), to, authority };

    transfer_checked(CpiContext::new_with_signer(token_program, accounts, signer_seeds), amount, mint.decimals)
}

/// Deallocates an emptied vault, sending its rent to `destination`.
pub fn close_token_account<'info>(
    account: AccountInfo<'info>,
    destination: AccountInfo<'info>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let accounts = CloseAccount { account, destination, authority };

    close_account(CpiContext::new_with_signer(token_program, accounts, signer_seeds))
}
