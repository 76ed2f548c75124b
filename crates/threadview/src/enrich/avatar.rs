//! Avatar URL derivation (URL construction only, nothing is fetched)

use super::address::bare_email;
use crate::config::AVATAR_HASH_PLACEHOLDER;

/// Hash the normalized sender address into the avatar URL template
pub fn avatar_url(template: &str, email: &str) -> String {
    let normalized = bare_email(email).trim().to_lowercase();
    let hash = format!("{:x}", md5::compute(normalized.as_bytes()));
    template.replace(AVATAR_HASH_PLACEHOLDER, &hash)
}
