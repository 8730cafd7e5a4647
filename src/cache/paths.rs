// Cache path utilities.
// Maps request keys (URLs) to entry files inside the cache directory.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Subdirectory holding one JSON file per cached request.
const RESPONSES_DIR: &str = "responses";

/// Directory holding cached responses under a cache root.
pub fn responses_dir(root: &Path) -> PathBuf {
    root.join(RESPONSES_DIR)
}

/// Bytes of the key digest appended to each entry file name.
const DIGEST_BYTES: usize = 6;

/// Path to the entry file for a request key.
///
/// The readable part is lossy, so a digest of the full key keeps distinct
/// keys in distinct files.
pub fn entry_path(root: &Path, key: &str) -> PathBuf {
    responses_dir(root).join(format!("{}-{}.json", sanitize_key(key), key_digest(key)))
}

/// Short hex digest of a request key.
fn key_digest(key: &str) -> String {
    Sha256::digest(key.as_bytes())
        .iter()
        .take(DIGEST_BYTES)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Sanitize a request key for use as a file name.
/// Drops the URL scheme and replaces problematic characters with underscores.
fn sanitize_key(key: &str) -> String {
    let trimmed = key
        .strip_prefix("https://")
        .or_else(|| key.strip_prefix("http://"))
        .unwrap_or(key);

    trimmed
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '&' | '=' => '_',
            c if c.is_whitespace() => '_',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("simple"), "simple");
        assert_eq!(
            sanitize_key("https://www.thesportsdb.com/api/v1/json/3/all_leagues.php"),
            "www.thesportsdb.com_api_v1_json_3_all_leagues.php"
        );
        assert_eq!(
            sanitize_key("http://host/search.php?badge=1&id=4328"),
            "host_search.php_badge_1_id_4328"
        );
    }

    #[test]
    fn test_entry_path() {
        let root = Path::new("/cache/leaguedex");
        let key = "https://example.com/all_leagues.php";
        let path = entry_path(root, key);
        let expected = format!("example.com_all_leagues.php-{}.json", key_digest(key));
        assert!(path.starts_with("/cache/leaguedex/responses"));
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), expected);
    }

    #[test]
    fn test_keys_that_sanitize_alike_stay_apart() {
        let root = Path::new("/cache");
        assert_eq!(sanitize_key("a/b?x"), sanitize_key("a_b_x"));
        assert_ne!(entry_path(root, "a/b?x"), entry_path(root, "a_b_x"));
    }

    #[test]
    fn test_key_digest_is_stable() {
        assert_eq!(key_digest("abc"), key_digest("abc"));
        assert_eq!(key_digest("abc").len(), DIGEST_BYTES * 2);
        // SHA-256("abc") begins ba7816bf8f01
        assert_eq!(key_digest("abc"), "ba7816bf8f01");
    }

    #[test]
    fn test_distinct_keys_get_distinct_paths() {
        let root = Path::new("/cache");
        assert_ne!(
            entry_path(root, "https://a.test/x?id=1"),
            entry_path(root, "https://a.test/x?id=2")
        );
    }
}
