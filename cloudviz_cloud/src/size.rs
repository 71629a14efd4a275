// Copyright 2025 the cloudviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word importance (size factors) and font sizes.

use cloudviz_charts::ScaleLinear;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::tokenize::WordToken;

/// Default font-size range for factors `1..=10`, in pixels.
pub const DEFAULT_FONT_RANGE: (f64, f64) = (10.0, 50.0);

/// Factor used when every word has the same frequency.
pub const UNIFORM_FACTOR: f64 = 5.5;

/// A token with its normalized importance and font size.
#[derive(Clone, Debug, PartialEq)]
pub struct SizedWord {
    /// The word.
    pub text: String,
    /// Number of occurrences in the source text.
    pub frequency: u32,
    /// Importance in `[1, 10]`.
    pub factor: f64,
    /// Font size in pixels.
    pub font_size: f64,
}

/// How words are sized.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMode {
    /// Font size follows frequency, interpolated into `font_range`.
    Frequency {
        /// Font sizes for factor 1 and factor 10.
        font_range: (f64, f64),
    },
    /// Every word gets a uniformly random size in `[min, max)`.
    Random {
        /// Smallest font size.
        min: f64,
        /// Largest font size (exclusive).
        max: f64,
        /// RNG seed.
        seed: u64,
    },
}

impl Default for SizeMode {
    fn default() -> Self {
        Self::Frequency {
            font_range: DEFAULT_FONT_RANGE,
        }
    }
}

/// Maps `frequency` into `[1, 10]` given the smallest and largest frequency of the table.
///
/// `min` maps to 1 and `max` to 10. A table where every count is the same gets
/// [`UNIFORM_FACTOR`].
pub fn size_factor(frequency: u32, min: u32, max: u32) -> f64 {
    if min == max {
        return UNIFORM_FACTOR;
    }
    let a = f64::from(max - min) / 9.0;
    let b = f64::from(max) - 10.0 * a;
    (f64::from(frequency) - b) / a
}

/// Sizes `tokens` by frequency, with factor 1 at `font_range.0` and 10 at `font_range.1`.
pub fn size_words(tokens: &[WordToken], font_range: (f64, f64)) -> Vec<SizedWord> {
    let Some(min) = tokens.iter().map(|t| t.frequency).min() else {
        return Vec::new();
    };
    let max = tokens.iter().map(|t| t.frequency).max().unwrap_or(min);
    let font = ScaleLinear::new((1.0, 10.0), font_range);
    tokens
        .iter()
        .map(|t| {
            let factor = size_factor(t.frequency, min, max);
            SizedWord {
                text: t.text.clone(),
                frequency: t.frequency,
                factor,
                font_size: font.map(factor),
            }
        })
        .collect()
}

/// Sizes `tokens` according to `mode`.
pub fn size_words_with(tokens: &[WordToken], mode: &SizeMode) -> Vec<SizedWord> {
    match *mode {
        SizeMode::Frequency { font_range } => size_words(tokens, font_range),
        SizeMode::Random { min, max, seed } => {
            let mut rng = StdRng::seed_from_u64(seed);
            let factor = ScaleLinear::new((min, max), (1.0, 10.0));
            tokens
                .iter()
                .map(|t| {
                    let font_size = min + rng.r#gen::<f64>() * (max - min);
                    SizedWord {
                        text: t.text.clone(),
                        frequency: t.frequency,
                        factor: factor.map(font_size),
                        font_size,
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::tokenize::{TokenizeOptions, tokenize};

    fn token(text: &str, frequency: u32) -> WordToken {
        WordToken {
            text: text.to_owned(),
            frequency,
        }
    }

    #[test]
    fn extremes_map_to_one_and_ten() {
        let words = size_words(
            &[token("a", 2), token("b", 7), token("c", 20)],
            DEFAULT_FONT_RANGE,
        );
        assert!((words[0].factor - 1.0).abs() < 1e-9);
        assert!((words[2].factor - 10.0).abs() < 1e-9);
        assert!(words[1].factor > 1.0 && words[1].factor < 10.0);
        assert!((words[0].font_size - 10.0).abs() < 1e-9);
        assert!((words[2].font_size - 50.0).abs() < 1e-9);
    }

    #[test]
    fn uniform_counts_get_the_midpoint() {
        let tokens = tokenize("a a a", &TokenizeOptions::default());
        let words = size_words(&tokens, DEFAULT_FONT_RANGE);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].factor, UNIFORM_FACTOR);
        assert!((words[0].font_size - 30.0).abs() < 1e-9);
    }

    #[test]
    fn empty_table_sizes_nothing() {
        assert!(size_words(&[], DEFAULT_FONT_RANGE).is_empty());
    }

    #[test]
    fn random_sizes_are_seeded_and_in_range() {
        let tokens = [token("hello", 1), token("world", 1), token("words", 3)];
        let mode = SizeMode::Random {
            min: 10.0,
            max: 50.0,
            seed: 7,
        };
        let a = size_words_with(&tokens, &mode);
        let b = size_words_with(&tokens, &mode);
        assert_eq!(a, b);
        for w in &a {
            assert!((10.0..50.0).contains(&w.font_size), "{w:?}");
            assert!((1.0..10.0).contains(&w.factor), "{w:?}");
        }
    }

    fn table(frequencies: &[u32]) -> Vec<WordToken> {
        frequencies
            .iter()
            .enumerate()
            .map(|(i, &f)| token(&format!("w{i}"), f))
            .collect()
    }

    proptest! {
        #[test]
        fn factors_span_one_to_ten(frequencies in prop::collection::vec(1_u32..10_000, 1..40)) {
            let words = size_words(&table(&frequencies), DEFAULT_FONT_RANGE);
            prop_assert_eq!(words.len(), frequencies.len());
            for w in &words {
                prop_assert!(
                    (1.0 - 1e-9..=10.0 + 1e-9).contains(&w.factor),
                    "{:?} from {:?}", w, frequencies
                );
            }

            let min = frequencies.iter().copied().min().unwrap_or(1);
            let max = frequencies.iter().copied().max().unwrap_or(1);
            for w in &words {
                if min == max {
                    prop_assert_eq!(w.factor, UNIFORM_FACTOR);
                } else if w.frequency == min {
                    prop_assert!((w.factor - 1.0).abs() < 1e-9, "{:?}", w);
                } else if w.frequency == max {
                    prop_assert!((w.factor - 10.0).abs() < 1e-9, "{:?}", w);
                }
            }
        }

        #[test]
        fn equal_frequencies_get_the_midpoint(frequency in 1_u32.., count in 1_usize..20) {
            let words = size_words(&table(&vec![frequency; count]), DEFAULT_FONT_RANGE);
            prop_assert!(words.iter().all(|w| w.factor == UNIFORM_FACTOR));
            prop_assert!(words.iter().all(|w| (w.font_size - 30.0).abs() < 1e-9));
        }
    }
}
