//! Split key encoding.
//!
//! # Responsibilities
//! - Encode a split offset into a short shard-id suffix
//! - Rewrite a full key so it addresses one specific split
//!
//! # Design Decisions
//! - Suffixes use bijective base-26 over `a..=z`, so they are injective,
//!   grow logarithmically, and never contain key delimiters (`:`, `|`)
//! - Split number 0 (the primary) encodes to the empty suffix, making its
//!   rewrite the identity transform; callers never actually rewrite for it
//! - The shard region is addressed by byte range, not by content, since the
//!   shard bytes may repeat elsewhere in the key

use std::ops::Range;

/// Suffix that makes a key route to the split at `offset`.
///
/// Offset `i` addresses real split number `i + 1`; split number 0 is always
/// reached through the unmodified key.
pub fn split_suffix(offset: usize) -> String {
    split_number_suffix(offset + 1)
}

/// Rewrite `full_key` to address the split at `offset`.
///
/// `shard` is the shard region of `full_key` as reported by the directory
/// lookup that produced `offset`. Every byte outside the region is preserved;
/// the suffix lands immediately after it. A region that is not a sub-range
/// of the key is a broken directory contract, not a runtime condition.
pub fn build_split_key(full_key: &str, offset: usize, shard: Range<usize>) -> String {
    insert_after_shard(full_key, &split_number_suffix(offset + 1), shard)
}

/// Bijective base-26 rendering of a split number. Split 0 renders empty.
fn split_number_suffix(mut n: usize) -> String {
    let mut digits = Vec::new();
    while n > 0 {
        n -= 1;
        digits.push((b'a' + (n % 26) as u8) as char);
        n /= 26;
    }
    digits.iter().rev().collect()
}

fn insert_after_shard(full_key: &str, suffix: &str, shard: Range<usize>) -> String {
    assert!(
        shard.start <= shard.end && shard.end <= full_key.len(),
        "shard region {}..{} out of bounds for key of length {}",
        shard.start,
        shard.end,
        full_key.len()
    );
    let mut key = String::with_capacity(full_key.len() + suffix.len());
    key.push_str(&full_key[..shard.end]);
    key.push_str(suffix);
    key.push_str(&full_key[shard.end..]);
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn suffixes_are_injective() {
        let mut seen = HashSet::new();
        for offset in 0..2000 {
            assert!(seen.insert(split_suffix(offset)), "collision at {offset}");
        }
    }

    #[test]
    fn suffix_alphabet_avoids_delimiters() {
        for offset in [0, 1, 25, 26, 700, 1_000_000] {
            let suffix = split_suffix(offset);
            assert!(!suffix.is_empty());
            assert!(suffix.chars().all(|c| c.is_ascii_lowercase()), "{suffix:?}");
        }
    }

    #[test]
    fn suffix_length_grows_logarithmically() {
        assert_eq!(split_suffix(0), "a");
        assert_eq!(split_suffix(1), "b");
        assert_eq!(split_suffix(25), "z");
        assert_eq!(split_suffix(26), "aa");
        assert_eq!(split_suffix(26 + 26 * 26 - 1), "zz");
        assert_eq!(split_suffix(26 + 26 * 26), "aaa");
    }

    #[test]
    fn split_key_places_suffix_after_shard_region() {
        let key = "cache:user123:profile";
        let shard = 6..13;
        assert_eq!(&key[shard.clone()], "user123");

        assert_eq!(build_split_key(key, 0, shard.clone()), "cache:user123a:profile");
        assert_eq!(build_split_key(key, 1, shard.clone()), "cache:user123b:profile");
        assert_eq!(build_split_key(key, 26, shard), "cache:user123aa:profile");
    }

    #[test]
    fn split_key_preserves_bytes_outside_the_region() {
        let key = "user123:user123:user123";
        // Region is the middle occurrence; the identical bytes around it
        // must stay untouched.
        let split = build_split_key(key, 0, 8..15);
        assert_eq!(split, "user123:user123a:user123");
    }

    #[test]
    fn shard_region_at_end_of_key() {
        assert_eq!(build_split_key("cache:user123", 1, 6..13), "cache:user123b");
    }

    #[test]
    fn primary_split_rewrite_is_identity() {
        let key = "cache:user123:profile";
        assert_eq!(split_number_suffix(0), "");
        assert_eq!(insert_after_shard(key, &split_number_suffix(0), 6..13), key);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_range_region_is_a_defect() {
        build_split_key("short", 0, 2..99);
    }
}
