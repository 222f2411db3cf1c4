//! Collection membership boundary
//!
//! The program never mints or authors metadata. It consumes a single
//! predicate from the token-metadata program: "does this NFT carry a valid,
//! verified membership record for the pair's collection". Account
//! authenticity (owner program and PDA derivation) is enforced by the
//! `Accounts` constraints at each call site; this module only inspects the
//! deserialized record.

use {
    crate::error::AmmError,
    anchor_lang::prelude::*,
    anchor_spl::metadata::{mpl_token_metadata::types::Collection, MetadataAccount},
};

/// Require that `metadata` proves membership of `collection_mint`.
pub fn assert_verified_member(
    metadata: &MetadataAccount,
    collection_mint: &Pubkey,
) -> Result<()> {
    check_membership(metadata.collection.as_ref(), collection_mint)
}

/// Require that `metadata` describes the collection parent itself: no
/// collection pointer of its own, and a sized `collection_details` record.
pub fn assert_sized_collection(metadata: &MetadataAccount) -> Result<()> {
    require!(
        metadata.collection.is_none(),
        AmmError::InvalidCollectionMetadata
    );
    require!(
        metadata.collection_details.is_some(),
        AmmError::InvalidCollectionMetadata
    );
    Ok(())
}

fn check_membership(collection: Option<&Collection>, collection_mint: &Pubkey) -> Result<()> {
    let collection = collection.ok_or_else(|| error!(AmmError::CollectionMismatch))?;
    require_keys_eq!(collection.key, *collection_mint, AmmError::CollectionMismatch);
    require!(collection.verified, AmmError::CollectionNotVerified);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(key: Pubkey, verified: bool) -> Collection {
        Collection { verified, key }
    }

    #[test]
    fn member_of_expected_collection_passes() {
        let mint = Pubkey::new_unique();
        assert!(check_membership(Some(&record(mint, true)), &mint).is_ok());
    }

    #[test]
    fn missing_record_is_a_mismatch() {
        let mint = Pubkey::new_unique();
        assert!(check_membership(None, &mint).is_err());
    }

    #[test]
    fn wrong_collection_is_a_mismatch() {
        let mint = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert!(check_membership(Some(&record(other, true)), &mint).is_err());
    }

    #[test]
    fn unverified_membership_is_rejected() {
        let mint = Pubkey::new_unique();
        assert!(check_membership(Some(&record(mint, false)), &mint).is_err());
    }
}
