//! Deterministic logical identifier derivation.
//!
//! Declared resources are named from their kind and scope so that re-running
//! an assembly with identical input produces identical identifiers. No
//! randomness and no time-dependent values are involved.

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in the identifier suffix.
const SUFFIX_BYTES: usize = 4;

/// Derives a stable logical id of the form `{prefix}-{hex}` where the hex
/// suffix is the truncated SHA-256 of `prefix` and `scope`.
///
/// # Examples
///
/// ```
/// use static_website::utils::logical_id::logical_id;
///
/// let a = logical_id("websitebucket", "www.example.com");
/// let b = logical_id("websitebucket", "www.example.com");
/// assert_eq!(a, b);
/// assert!(a.starts_with("websitebucket-"));
/// ```
pub fn logical_id(prefix: &str, scope: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(prefix.as_bytes());
    hasher.update(b":");
    hasher.update(scope.as_bytes());
    let digest = hasher.finalize();

    format!("{}-{}", prefix, hex::encode(&digest[..SUFFIX_BYTES]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_id_is_deterministic() {
        assert_eq!(
            logical_id("distribution", "www.example.com"),
            logical_id("distribution", "www.example.com")
        );
    }

    #[test]
    fn test_logical_id_varies_with_scope() {
        assert_ne!(
            logical_id("distribution", "www.example.com"),
            logical_id("distribution", "blog.example.com")
        );
    }

    #[test]
    fn test_logical_id_varies_with_prefix() {
        assert_ne!(
            logical_id("bucket", "www.example.com"),
            logical_id("distribution", "www.example.com")
        );
    }

    #[test]
    fn test_logical_id_shape() {
        let id = logical_id("websitebucket", "www.example.com");
        let (prefix, suffix) = id.split_once('-').unwrap();
        assert_eq!(prefix, "websitebucket");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
