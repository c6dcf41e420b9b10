//! Letter codes for menu options.
//!
//! Positions `0..26` are labelled `a`..`z`. Past the alphabet, a position `i` gets the
//! two-letter code `letter(i / 26)` followed by `letter(i % 26)`, so position 26 is `ba`
//! and the last labelable position (675) is `zz`.

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const RADIX: usize = ALPHABET.len();

/// Number of positions that can be given a code.
pub const MAX_CODES: usize = RADIX * RADIX;

/// Returns the letter code for `index`, or `None` if it is past the two-letter space.
pub fn encode(index: usize) -> Option<String> {
    if index < RADIX {
        return Some(char::from(ALPHABET[index]).to_string());
    }
    if index >= MAX_CODES {
        return None;
    }
    let first = index / RADIX;
    let second = index - RADIX * first;
    Some([ALPHABET[first], ALPHABET[second]].iter().map(|&b| char::from(b)).collect())
}

/// Returns the position labelled by `code`.
///
/// Anything `encode` would never produce yields `None`: lengths other than one or two,
/// characters outside `a..=z`, and two-letter codes starting with `a`.
pub fn decode(code: &str) -> Option<usize> {
    match code.as_bytes() {
        [single] => position(*single),
        [first, second] => {
            let first = position(*first)?;
            let second = position(*second)?;
            if first == 0 {
                return None;
            }
            Some(first * RADIX + second)
        },
        _ => None,
    }
}

fn position(byte: u8) -> Option<usize> {
    byte.is_ascii_lowercase().then(|| usize::from(byte - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_single_letters_round_trip() {
        for i in 0..26 {
            let code = encode(i).unwrap();
            assert_eq!(code.len(), 1);
            assert_eq!(decode(&code), Some(i));
        }
    }

    #[test]
    fn test_two_letter_codes_round_trip() {
        for i in 26..MAX_CODES {
            let code = encode(i).unwrap();
            assert_eq!(code.len(), 2, "code for {i}");
            assert_eq!(decode(&code), Some(i), "code {code}");
        }
    }

    #[rstest]
    #[case(0, "a")]
    #[case(25, "z")]
    #[case(26, "ba")]
    #[case(27, "bb")]
    #[case(52, "ca")]
    #[case(675, "zz")]
    fn test_encode_known_positions(#[case] index: usize, #[case] expected: &str) {
        assert_eq!(encode(index).as_deref(), Some(expected));
    }

    #[test]
    fn test_encode_past_code_space() {
        assert_eq!(encode(MAX_CODES), None);
        assert_eq!(encode(usize::MAX), None);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("A")]
    #[case("1")]
    #[case("?")]
    #[case("b1")]
    #[case("aa")]
    #[case("é")]
    fn test_decode_rejects(#[case] input: &str) {
        assert_eq!(decode(input), None);
    }
}
