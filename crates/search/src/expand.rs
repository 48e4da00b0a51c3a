//! Category synonym expansion
//!
//! Expands a search keyword to its full synonym set using the category
//! expansion table. The lookup is bidirectional: a synonym maps back to
//! its canonical term and all of its siblings.

use findit_config::Lexicon;

/// Expand `term` to the set of terms to search for.
///
/// The result always starts with the lowercased input term; expansion
/// terms follow in table order with duplicates removed, so the output is
/// deterministic for a given lexicon.
pub fn expand_category(lexicon: &Lexicon, term: &str) -> Vec<String> {
    let lower = term.to_lowercase();
    let mut terms = vec![lower.clone()];

    for entry in &lexicon.category_expansion {
        if entry.contains(&lower) {
            push_unique(&mut terms, &entry.canonical);
            for keyword in &entry.keywords {
                push_unique(&mut terms, keyword);
            }
        }
    }

    terms
}

fn push_unique(terms: &mut Vec<String>, term: &str) {
    if !terms.iter().any(|t| t == term) {
        terms.push(term.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_expands_to_synonyms() {
        let lex = Lexicon::default();
        let terms = expand_category(&lex, "phone");
        assert!(terms.contains(&"mobile".to_string()));
        assert!(terms.contains(&"iphone".to_string()));
        assert_eq!(terms[0], "phone");
    }

    #[test]
    fn test_synonym_maps_back_to_siblings() {
        let lex = Lexicon::default();
        let terms = expand_category(&lex, "iphone");
        assert!(terms.contains(&"phone".to_string()));
        assert!(terms.contains(&"android".to_string()));
    }

    #[test]
    fn test_unknown_term_passes_through() {
        let lex = Lexicon::default();
        let terms = expand_category(&lex, "Trombone");
        assert_eq!(terms, vec!["trombone".to_string()]);
    }

    #[test]
    fn test_no_duplicates() {
        let lex = Lexicon::default();
        let terms = expand_category(&lex, "wallet");
        let unique: std::collections::HashSet<&str> = terms.iter().map(|s| s.as_str()).collect();
        assert_eq!(unique.len(), terms.len());
    }
}
