use super::{Address, ParseError, Uint256};

/// One airdrop claim as read from a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Claim {
    /// Grant the claim belongs to. Only committed by v2 leaves.
    pub grant_id: Option<Uint256>,
    /// Address receiving the grant.
    pub receiver: Address,
    /// Per-claim nullifier, unique within a valid batch.
    pub nullifier_hash: Uint256,
}

impl Claim {
    /// The canonical empty claim used to fill unused batch capacity.
    pub const PADDING: Self = Self {
        grant_id: Some(Uint256::ZERO),
        receiver: Address::ZERO,
        nullifier_hash: Uint256::ZERO,
    };

    /// Create a claim from already validated fields.
    #[must_use]
    pub const fn new(grant_id: Option<Uint256>, receiver: Address, nullifier_hash: Uint256) -> Self {
        Self {
            grant_id,
            receiver,
            nullifier_hash,
        }
    }

    /// Parse a claim from its textual fields.
    ///
    /// # Errors
    /// Returns an error if the receiver is not a 20-byte hex address or if an integer field is
    /// malformed or wider than 256 bits.
    pub fn parse(
        grant_id: Option<&str>,
        receiver: &str,
        nullifier_hash: &str,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            grant_id: grant_id.map(str::parse).transpose()?,
            receiver: receiver.parse()?,
            nullifier_hash: nullifier_hash.parse()?,
        })
    }
}
