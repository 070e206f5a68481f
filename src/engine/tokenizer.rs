// file: src/engine/tokenizer.rs
// description: query string to normalized term list

/// Lower-cases the query and splits it on whitespace runs, dropping
/// single-char tokens. Never yields empty strings.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(tokenize("Bootstrap  SaaS\tGrowth"), vec!["bootstrap", "saas", "growth"]);
    }

    #[test]
    fn test_drops_single_chars() {
        assert_eq!(tokenize("a b the"), vec!["the"]);
        assert!(tokenize("a").is_empty());
    }

    #[test]
    fn test_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n ").is_empty());
    }

    #[test]
    fn test_multibyte_length_counts_chars() {
        assert_eq!(tokenize("é ün"), vec!["ün"]);
    }

    #[test]
    fn test_keeps_metacharacters_verbatim() {
        assert_eq!(tokenize("c++ $1m (beta)"), vec!["c++", "$1m", "(beta)"]);
    }
}
