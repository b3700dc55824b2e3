//! Regex compilation cache
//!
//! Override-block removal builds one location pattern per target name;
//! this cache avoids recompiling a pattern when the same name is removed
//! again within a process.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

static REGEX_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Get or compile a regex pattern from the cache.
pub fn get_cached_regex(pattern: &str) -> Result<Regex, regex::Error> {
    if let Ok(cache) = REGEX_CACHE.lock()
        && let Some(regex) = cache.get(pattern)
    {
        return Ok(regex.clone());
    }

    let regex = Regex::new(pattern)?;

    // Store in cache (ignore lock poisoning)
    if let Ok(mut cache) = REGEX_CACHE.lock() {
        cache.insert(pattern.to_string(), regex.clone());
    }

    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_compilation() {
        let regex = get_cached_regex(r"\d+").unwrap();
        assert!(regex.is_match("123"));
        assert!(!regex.is_match("abc"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(get_cached_regex(r"[invalid(").is_err());
    }

    #[test]
    fn test_cached_pattern_is_reusable() {
        let first = get_cached_regex(r"test_reuse_\w+").unwrap();
        let second = get_cached_regex(r"test_reuse_\w+").unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }
}
