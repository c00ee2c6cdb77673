#![allow(deprecated)]

use crate::error::CustomErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable::{self, UpgradeableLoaderState};

/// Address of the ProgramData account the upgradeable loader keeps for
/// `program_id`.
pub fn get_program_data_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[program_id.as_ref()], &bpf_loader_upgradeable::id()).0
}

/// Reads the upgrade authority out of a ProgramData account.
pub fn program_upgrade_authority(program_data: &AccountInfo) -> Result<Option<Pubkey>> {
    require_keys_eq!(
        *program_data.owner,
        bpf_loader_upgradeable::id(),
        CustomErrorCode::InvalidProgramData
    );

    let data = program_data.try_borrow_data()?;
    match bincode::deserialize::<UpgradeableLoaderState>(&data[..]) {
        Ok(UpgradeableLoaderState::ProgramData {
            upgrade_authority_address,
            ..
        }) => Ok(upgrade_authority_address),
        _ => err!(CustomErrorCode::InvalidProgramData),
    }
}

/// Fails unless `signer` is the recorded upgrade authority.
pub fn check_upgrade_authority(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
    let authority = upgrade_authority.ok_or(CustomErrorCode::NoUpgradeAuthority)?;
    require_keys_eq!(authority, *signer, CustomErrorCode::InvalidUpgradeAuthority);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn program_data_bytes(state: &UpgradeableLoaderState) -> Vec<u8> {
        let mut data = bincode::serialize(state).unwrap();
        // deployed bytecode follows the header
        data.extend_from_slice(&[0xAB; 16]);
        data
    }

    fn read_authority(owner: Pubkey, mut data: Vec<u8>) -> Result<Option<Pubkey>> {
        let key = get_program_data_address(&crate::ID);
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);
        program_upgrade_authority(&info)
    }

    #[test]
    fn test_program_data_address_is_loader_pda() {
        let expected =
            Pubkey::find_program_address(&[crate::ID.as_ref()], &bpf_loader_upgradeable::id()).0;
        assert_eq!(get_program_data_address(&crate::ID), expected);
        assert_ne!(get_program_data_address(&crate::ID), get_program_data_address(&Pubkey::new_unique()));
    }

    #[test]
    fn test_reads_upgrade_authority() {
        let admin = Pubkey::new_unique();
        let data = program_data_bytes(&UpgradeableLoaderState::ProgramData {
            slot: 7,
            upgrade_authority_address: Some(admin),
        });

        let authority = read_authority(bpf_loader_upgradeable::id(), data).unwrap();

        assert_eq!(authority, Some(admin));
    }

    #[test]
    fn test_reads_missing_upgrade_authority() {
        let data = program_data_bytes(&UpgradeableLoaderState::ProgramData {
            slot: 7,
            upgrade_authority_address: None,
        });

        assert_eq!(read_authority(bpf_loader_upgradeable::id(), data).unwrap(), None);
    }

    #[test]
    fn test_rejects_account_not_owned_by_loader() {
        let data = program_data_bytes(&UpgradeableLoaderState::ProgramData {
            slot: 7,
            upgrade_authority_address: Some(Pubkey::new_unique()),
        });

        let err = read_authority(Pubkey::new_unique(), data).unwrap_err();

        assert_eq!(err, Error::from(CustomErrorCode::InvalidProgramData));
    }

    #[test]
    fn test_rejects_other_loader_state() {
        let data = program_data_bytes(&UpgradeableLoaderState::Program {
            programdata_address: Pubkey::new_unique(),
        });

        let err = read_authority(bpf_loader_upgradeable::id(), data).unwrap_err();

        assert_eq!(err, Error::from(CustomErrorCode::InvalidProgramData));
    }

    #[test]
    fn test_check_upgrade_authority() {
        let admin = Pubkey::new_unique();

        assert!(check_upgrade_authority(Some(admin), &admin).is_ok());
        assert_eq!(
            check_upgrade_authority(Some(admin), &Pubkey::new_unique()).unwrap_err(),
            Error::from(CustomErrorCode::InvalidUpgradeAuthority)
        );
        assert_eq!(
            check_upgrade_authority(None, &admin).unwrap_err(),
            Error::from(CustomErrorCode::NoUpgradeAuthority)
        );
    }
}
