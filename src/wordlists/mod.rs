//! Word lists, the guess dictionary and answer sources

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::Dictionary;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT, REFERENCE, REFERENCE_ANSWER};
pub use source::{FixedWord, RandomWord, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn allowed_count_matches_const() {
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn embedded_words_are_five_lowercase_letters() {
        for &word in ANSWERS.iter().chain(ALLOWED) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_subset_of_allowed() {
        let allowed = Dictionary::new(ALLOWED, 5).unwrap();
        for &answer in ANSWERS {
            assert!(
                allowed.is_valid_guess(answer),
                "Answer '{answer}' not in allowed list"
            );
        }
    }

    #[test]
    fn reference_list_holds_both_words() {
        let dictionary = Dictionary::new(REFERENCE, 5).unwrap();
        assert!(dictionary.is_valid_guess("hello"));
        assert!(dictionary.is_valid_guess(REFERENCE_ANSWER));
        assert!(ALLOWED.contains(&"hello") && ALLOWED.contains(&"world"));
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ANSWERS_COUNT, 486, "Expected 486 answer words");
        assert_eq!(ALLOWED_COUNT, 891, "Expected 891 allowed words");
    }
}
