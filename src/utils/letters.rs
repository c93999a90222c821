use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashMap;

/// The 27-letter Spanish alphabet, including Ñ. Filler letters for
/// word-search gaps are drawn uniformly from this set.
pub const ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Accented uppercase letters folded to their base letter. Ñ is a distinct
/// letter, not an accent, so it is absent here.
static ACCENT_FOLD: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for ch in ['Á', 'À', 'Ä', 'Â'] {
        map.insert(ch, 'A');
    }
    for ch in ['É', 'È', 'Ë', 'Ê'] {
        map.insert(ch, 'E');
    }
    for ch in ['Í', 'Ì', 'Ï', 'Î'] {
        map.insert(ch, 'I');
    }
    for ch in ['Ó', 'Ò', 'Ö', 'Ô'] {
        map.insert(ch, 'O');
    }
    for ch in ['Ú', 'Ù', 'Ü', 'Û'] {
        map.insert(ch, 'U');
    }

    map
});

/// Normalize a raw word for grid placement: uppercase, fold accented vowels
/// to their base letter, keep Ñ, strip everything else. Idempotent; may
/// return an empty string when no letters survive.
pub fn normalize_word(raw: &str) -> String {
    raw.chars()
        .flat_map(|ch| ch.to_uppercase())
        .filter_map(|ch| {
            let ch = ACCENT_FOLD.get(&ch).copied().unwrap_or(ch);
            (ch.is_ascii_uppercase() || ch == 'Ñ').then_some(ch)
        })
        .collect()
}

/// Pick a uniform random letter from the Spanish alphabet.
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_normalize_uppercases_and_strips() {
        assert_eq!(normalize_word("sol"), "SOL");
        assert_eq!(normalize_word("  la luna! "), "LALUNA");
        assert_eq!(normalize_word("a-b_c 3"), "ABC");
    }

    #[test]
    fn test_normalize_folds_accents_and_keeps_enie() {
        assert_eq!(normalize_word("música"), "MUSICA");
        assert_eq!(normalize_word("año"), "AÑO");
        assert_eq!(normalize_word("pingüino"), "PINGUINO");
        assert_eq!(normalize_word("CAFÉ"), "CAFE");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["música", "año", "Sol y Luna", "ESTRELLA"] {
            let once = normalize_word(raw);
            assert_eq!(normalize_word(&once), once);
        }
    }

    #[test]
    fn test_normalize_can_empty_out() {
        assert_eq!(normalize_word("123 !?"), "");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn test_random_letter_stays_in_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let letter = random_letter(&mut rng);
            assert!(ALPHABET.contains(&letter), "unexpected letter {letter}");
        }
    }
}
