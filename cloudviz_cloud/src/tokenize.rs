// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free text to a word-frequency table.

use hashbrown::HashMap;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;

/// Options for [`tokenize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizeOptions {
    /// Lowercase every token before counting, so `The` and `the` are one word.
    pub case_fold: bool,
}

impl TokenizeOptions {
    /// Sets [`Self::case_fold`].
    #[must_use]
    pub fn with_case_fold(mut self, case_fold: bool) -> Self {
        self.case_fold = case_fold;
        self
    }
}

/// A distinct word and how often it occurs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordToken {
    /// The word, punctuation removed.
    pub text: String,
    /// Number of occurrences; at least 1.
    pub frequency: u32,
}

/// Splits `text` into distinct words with their counts.
///
/// The text is NFC-composed, so `e` followed by U+0301 counts as `é`. Every character that is
/// then neither alphanumeric nor whitespace is dropped, including combining marks with no
/// precomposed form, and the text is split on whitespace runs. Tokens come back in order of
/// first occurrence.
pub fn tokenize(text: &str, options: &TokenizeOptions) -> Vec<WordToken> {
    let cleaned: String = text.nfc().filter(|&c| is_kept(c)).collect();

    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut tokens: Vec<WordToken> = Vec::new();
    for word in cleaned.split_whitespace() {
        let word = if options.case_fold {
            word.to_lowercase()
        } else {
            word.to_owned()
        };
        match slots.get(&word) {
            Some(&i) => tokens[i].frequency += 1,
            None => {
                slots.insert(word.clone(), tokens.len());
                tokens.push(WordToken {
                    text: word,
                    frequency: 1,
                });
            }
        }
    }
    tokens
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn texts(tokens: &[WordToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn case_sensitive_by_default() {
        let tokens = tokenize("the cat sat. The CAT ran!", &TokenizeOptions::default());
        assert_eq!(texts(&tokens), ["the", "cat", "sat", "The", "CAT", "ran"]);
        assert!(tokens.iter().all(|t| t.frequency == 1));
    }

    #[test]
    fn case_fold_merges_variants() {
        let options = TokenizeOptions::default().with_case_fold(true);
        let tokens = tokenize("the cat sat. The CAT ran!", &options);
        assert_eq!(texts(&tokens), ["the", "cat", "sat", "ran"]);
        assert_eq!(tokens[0].frequency, 2);
        assert_eq!(tokens[1].frequency, 2);
    }

    #[test]
    fn counts_sum_to_word_count_and_words_are_distinct() {
        let text = "to be, or not to be:\n\tthat is the question";
        let tokens = tokenize(text, &TokenizeOptions::default());
        let total: u32 = tokens.iter().map(|t| t.frequency).sum();
        assert_eq!(total, 10);
        let mut seen = texts(&tokens);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), tokens.len());
    }

    #[test]
    fn punctuation_inside_words_is_removed() {
        let tokens = tokenize("don't -- stop", &TokenizeOptions::default());
        assert_eq!(texts(&tokens), ["dont", "stop"]);
    }

    #[test]
    fn decomposed_accents_match_precomposed_letters() {
        let tokens = tokenize(
            "caf\u{e9} cafe\u{301} na\u{ef}ve naive",
            &TokenizeOptions::default(),
        );
        assert_eq!(texts(&tokens), ["caf\u{e9}", "na\u{ef}ve", "naive"]);
        assert_eq!(tokens[0].frequency, 2);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("  ... !? \n", &TokenizeOptions::default()).is_empty());
    }

    fn words_after_stripping(text: &str) -> usize {
        let cleaned: String = text.nfc().filter(|&c| is_kept(c)).collect();
        cleaned.split_whitespace().count()
    }

    fn check_table(text: &str, options: &TokenizeOptions) -> Result<(), TestCaseError> {
        let tokens = tokenize(text, options);
        let total: usize = tokens.iter().map(|t| t.frequency as usize).sum();
        prop_assert_eq!(total, words_after_stripping(text));
        let distinct: HashSet<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(distinct.len(), tokens.len());
        prop_assert!(tokens.iter().all(|t| t.frequency >= 1 && !t.text.is_empty()));
        Ok(())
    }

    proptest! {
        #[test]
        fn any_text_counts_every_word_once(text in "\\PC{0,64}", case_fold in any::<bool>()) {
            check_table(&text, &TokenizeOptions::default().with_case_fold(case_fold))?;
        }

        #[test]
        fn repetitive_text_counts_every_word_once(
            text in "[abAB .,;!?'\t\n-]{0,80}",
            case_fold in any::<bool>(),
        ) {
            check_table(&text, &TokenizeOptions::default().with_case_fold(case_fold))?;
        }
    }
}
