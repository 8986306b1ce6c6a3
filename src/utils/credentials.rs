//! Display credential generation
//!
//! Produces a random access key and a random hex string shaped like a
//! SHA-256 digest. The hex string is a cosmetic placeholder: it is not
//! derived from the key or from anything else, and must never be treated as
//! real credential material. Neither value is cryptographically strong.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Characters used in access keys
const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Characters used in the mock hash
const HEX_ALPHABET: &[u8] = b"0123456789abcdef";

/// Number of hyphen-separated groups in an access key
pub const KEY_GROUPS: usize = 4;

/// Characters per access key group
pub const KEY_GROUP_LEN: usize = 4;

/// Length of the mock hash
pub const MOCK_HASH_LEN: usize = 64;

/// Randomly generated display credential pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessCredential {
    /// Key in `XXXX-XXXX-XXXX-XXXX` form
    pub access_key: String,
    /// Placeholder digest, 64 lowercase hex characters, unrelated to the key
    pub key_hash: String,
}

impl AccessCredential {
    /// Check that both fields have the expected shape
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let groups: Vec<&str> = self.access_key.split('-').collect();
        let key_ok = groups.len() == KEY_GROUPS
            && groups.iter().all(|group| {
                group.len() == KEY_GROUP_LEN && group.bytes().all(|b| KEY_ALPHABET.contains(&b))
            });

        let hash_ok = self.key_hash.len() == MOCK_HASH_LEN
            && self.key_hash.bytes().all(|b| HEX_ALPHABET.contains(&b));

        key_ok && hash_ok
    }
}

fn random_string<R: Rng>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Generate a random `XXXX-XXXX-XXXX-XXXX` access key
pub fn random_access_key<R: Rng>(rng: &mut R) -> String {
    (0..KEY_GROUPS)
        .map(|_| random_string(rng, KEY_ALPHABET, KEY_GROUP_LEN))
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate a placeholder that looks like a hex SHA-256 digest
///
/// Not a hash of anything.
pub fn mock_key_hash<R: Rng>(rng: &mut R) -> String {
    random_string(rng, HEX_ALPHABET, MOCK_HASH_LEN)
}

/// Generate a credential pair from the given random source
pub fn generate_access_key_with<R: Rng>(rng: &mut R) -> AccessCredential {
    AccessCredential {
        access_key: random_access_key(rng),
        key_hash: mock_key_hash(rng),
    }
}

/// Generate a fresh credential pair from the thread-local random source
#[must_use]
pub fn generate_access_key() -> AccessCredential {
    generate_access_key_with(&mut rand::rng())
}
