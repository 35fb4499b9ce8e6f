//! Built-in word list
//!
//! The default list used when no `--word-file` is given, stored as one
//! concatenated blob of fixed-length words.

mod embedded;

pub use embedded::{BUILTIN_BLOB, BUILTIN_WORD_COUNT, BUILTIN_WORD_SIZE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_partitions_into_whole_words() {
        assert_eq!(BUILTIN_BLOB.len(), BUILTIN_WORD_COUNT * BUILTIN_WORD_SIZE);
    }

    #[test]
    fn builtin_words_are_five_letters() {
        assert_eq!(BUILTIN_WORD_SIZE, 5);
    }

    #[test]
    fn blob_is_lowercase_ascii() {
        assert!(BUILTIN_BLOB.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn blob_words_are_sorted() {
        let words: Vec<&str> = BUILTIN_BLOB
            .as_bytes()
            .chunks_exact(BUILTIN_WORD_SIZE)
            .map(|c| std::str::from_utf8(c).unwrap())
            .collect();
        assert!(words.windows(2).all(|w| w[0] <= w[1]));
    }
}
