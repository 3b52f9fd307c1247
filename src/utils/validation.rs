use crate::project::NeedTag;

const MIN_KEY_CHARS: usize = 20;
const MAX_KEY_CHARS: usize = 100;

/// Shallow sanity check on an API key: strictly between 20 and 100
/// characters. Says nothing about whether the key works.
pub fn is_plausible_api_key(key: &str) -> bool {
    let len = key.chars().count();
    len > MIN_KEY_CHARS && len < MAX_KEY_CHARS
}

/// Parses a comma-separated need list, e.g. `database, user_auth`.
///
/// Blank entries are dropped and repeated tags keep their first position.
pub fn parse_needs(raw: &str) -> Vec<NeedTag> {
    let mut needs = Vec::new();

    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let need = NeedTag::parse(tag);
        if !needs.contains(&need) {
            needs.push(need);
        }
    }

    needs
}

/// Shows the first and last four characters of a key.
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_length_bounds_are_exclusive() {
        for (len, expected) in [(0, false), (20, false), (21, true), (99, true), (100, false)] {
            assert_eq!(
                is_plausible_api_key(&"k".repeat(len)),
                expected,
                "length {len}"
            );
        }
    }

    #[test]
    fn key_length_counts_characters() {
        // 21 characters, more than 21 bytes.
        let key = "é".repeat(21);
        assert!(is_plausible_api_key(&key));
        assert!(!is_plausible_api_key(&"é".repeat(15)));
    }

    #[test]
    fn needs_are_trimmed_and_deduplicated() {
        assert_eq!(
            parse_needs(" files, database,,files , crm "),
            vec![
                NeedTag::Files,
                NeedTag::Database,
                NeedTag::Other("crm".to_string())
            ]
        );
        assert!(parse_needs("").is_empty());
    }

    #[test]
    fn masks_keys() {
        assert_eq!(mask_api_key("AIzaSyExampleExample1234"), "AIza…1234");
        assert_eq!(mask_api_key("short"), "*****");
    }
}
