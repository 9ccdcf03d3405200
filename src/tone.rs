use std::collections::HashMap;
use std::sync::LazyLock;

use crate::common::{Result, TaiLoError};
use crate::config;

// Tone-marked letters which exist as a single Unicode code point
static PRECOMPOSED: &[(char, &[(u32, char)])] = &[
    ('a', &[(2, '\u{e1}'), (3, '\u{e0}'), (5, '\u{e2}'), (6, '\u{1ce}'), (7, '\u{101}')]),
    ('e', &[(2, '\u{e9}'), (3, '\u{e8}'), (5, '\u{ea}'), (6, '\u{11b}'), (7, '\u{113}')]),
    ('i', &[(2, '\u{ed}'), (3, '\u{ec}'), (5, '\u{ee}'), (6, '\u{1d0}'), (7, '\u{12b}')]),
    ('o', &[(2, '\u{f3}'), (3, '\u{f2}'), (5, '\u{f4}'), (6, '\u{1d2}'), (7, '\u{14d}'), (9, '\u{151}')]),
    ('u', &[(2, '\u{fa}'), (3, '\u{f9}'), (5, '\u{fb}'), (6, '\u{1d4}'), (7, '\u{16b}'), (9, '\u{171}')]),
    ('m', &[(2, '\u{1e3f}')]),
    ('n', &[(2, '\u{144}'), (3, '\u{1f9}'), (6, '\u{148}')]),
    ('A', &[(2, '\u{c1}'), (3, '\u{c0}'), (5, '\u{c2}'), (6, '\u{1cd}'), (7, '\u{100}')]),
    ('E', &[(2, '\u{c9}'), (3, '\u{c8}'), (5, '\u{ca}'), (6, '\u{11a}'), (7, '\u{112}')]),
    ('I', &[(2, '\u{cd}'), (3, '\u{cc}'), (5, '\u{ce}'), (6, '\u{1cf}'), (7, '\u{12a}')]),
    ('O', &[(2, '\u{d3}'), (3, '\u{d2}'), (5, '\u{d4}'), (6, '\u{1d1}'), (7, '\u{14c}'), (9, '\u{150}')]),
    ('U', &[(2, '\u{da}'), (3, '\u{d9}'), (5, '\u{db}'), (6, '\u{1d3}'), (7, '\u{16a}'), (9, '\u{170}')]),
    ('M', &[(2, '\u{1e3e}')]),
    ('N', &[(2, '\u{143}'), (3, '\u{1f8}'), (6, '\u{147}')]),
];

// Fallback when there is no precomposed character: base letter + combining mark
static COMBINING_MARKS: &[(u32, char)] = &[
    (2, '\u{301}'), // acute
    (3, '\u{300}'), // grave
    (5, '\u{302}'), // circumflex
    (6, '\u{30c}'), // caron
    (7, '\u{304}'), // macron
    (8, '\u{30d}'), // vertical line above
    (9, '\u{30b}'), // double acute
];

#[derive(Debug)]
struct ToneTables {
    precomposed: HashMap<(char, u32), char>,
    precomposed_base: HashMap<char, (char, u32)>,
    combining_marks: HashMap<u32, char>,
    combining_mark_tones: HashMap<char, u32>,
}

impl ToneTables {
    fn build() -> Self {
        let mut precomposed = HashMap::new();
        let mut precomposed_base = HashMap::new();
        for &(letter, row) in PRECOMPOSED {
            for &(tone, marked) in row {
                precomposed.insert((letter, tone), marked);
                // decoding relies on every marked character having exactly one origin
                let previous = precomposed_base.insert(marked, (letter, tone));
                assert!(previous.is_none(), "precomposed character {marked} is mapped twice");
            }
        }

        let mut combining_marks = HashMap::new();
        let mut combining_mark_tones = HashMap::new();
        for &(tone, mark) in COMBINING_MARKS {
            combining_marks.insert(tone, mark);
            let previous = combining_mark_tones.insert(mark, tone);
            assert!(previous.is_none(), "combining mark U+{:04X} is mapped twice", mark as u32);
        }

        ToneTables {
            precomposed,
            precomposed_base,
            combining_marks,
            combining_mark_tones,
        }
    }
}

static TABLES: LazyLock<ToneTables> = LazyLock::new(ToneTables::build);

pub fn is_tone_bearing(letter: char) -> bool {
    config::TONE_BEARING_LETTERS.contains(&letter.to_ascii_lowercase())
}

/// Add a tone mark to a single letter.
///
/// Tones 1 and 4 leave the letter unchanged. If the marked letter exists as a single
/// Unicode character that character is returned, otherwise the letter followed by a
/// combining mark.
pub fn add_tone_to_letter(letter: char, tone: u32) -> Result<String> {
    if !is_tone_bearing(letter) {
        return Err(TaiLoError::InvalidLetter(letter));
    }
    if !config::is_valid_tone(tone) {
        return Err(TaiLoError::InvalidTone(tone));
    }
    if config::UNMARKED_TONES.contains(&tone) {
        return Ok(letter.to_string());
    }
    if let Some(&marked) = TABLES.precomposed.get(&(letter, tone)) {
        return Ok(marked.to_string());
    }
    let mark = combining_mark(tone).ok_or(TaiLoError::InvalidTone(tone))?;
    Ok([letter, mark].iter().collect())
}

/// Split a tone-marked character (one code point, or base letter + combining mark)
/// into its base letter and tone. Unmarked characters are reported as tone 1.
pub fn parse_character(character: &str) -> Result<(char, u32)> {
    let mut chars = character.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => {
            Ok(precomposed_base(c).unwrap_or((c, config::DEFAULT_OPEN_TONE)))
        }
        (Some(base), Some(mark), None) => combining_mark_tone(mark)
            .map(|tone| (base, tone))
            .ok_or_else(|| TaiLoError::InvalidCharacter(character.to_owned())),
        _ => Err(TaiLoError::InvalidCharacter(character.to_owned())),
    }
}

pub(crate) fn precomposed_base(c: char) -> Option<(char, u32)> {
    TABLES.precomposed_base.get(&c).copied()
}

pub(crate) fn combining_mark(tone: u32) -> Option<char> {
    TABLES.combining_marks.get(&tone).copied()
}

pub(crate) fn combining_mark_tone(mark: char) -> Option<u32> {
    TABLES.combining_mark_tones.get(&mark).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_injective() {
        let tables = ToneTables::build();
        assert_eq!(tables.precomposed.len(), tables.precomposed_base.len());
        assert_eq!(tables.combining_marks.len(), tables.combining_mark_tones.len());
        assert_eq!(tables.combining_marks.len(), 7);
    }

    #[test]
    fn test_add_tone_to_letter() {
        assert_eq!(add_tone_to_letter('a', 2).unwrap(), "á");
        assert_eq!(add_tone_to_letter('a', 1).unwrap(), "a");
        assert_eq!(add_tone_to_letter('a', 4).unwrap(), "a");
        assert_eq!(add_tone_to_letter('e', 3).unwrap(), "è");
        assert_eq!(add_tone_to_letter('i', 5).unwrap(), "î");
        assert_eq!(add_tone_to_letter('o', 6).unwrap(), "ǒ");
        assert_eq!(add_tone_to_letter('u', 7).unwrap(), "ū");
        assert_eq!(add_tone_to_letter('o', 9).unwrap(), "ő");
        assert_eq!(add_tone_to_letter('U', 9).unwrap(), "Ű");
        assert_eq!(add_tone_to_letter('m', 2).unwrap(), "ḿ");
        assert_eq!(add_tone_to_letter('M', 2).unwrap(), "Ḿ");
        assert_eq!(add_tone_to_letter('n', 3).unwrap(), "ǹ");
        assert_eq!(add_tone_to_letter('A', 7).unwrap(), "Ā");
    }

    #[test]
    fn test_add_tone_to_letter_combining() {
        assert_eq!(add_tone_to_letter('n', 7).unwrap(), "n\u{304}");
        assert_eq!(add_tone_to_letter('m', 3).unwrap(), "m\u{300}");
        assert_eq!(add_tone_to_letter('a', 8).unwrap(), "a\u{30d}");
        assert_eq!(add_tone_to_letter('I', 8).unwrap(), "I\u{30d}");
        assert_eq!(add_tone_to_letter('a', 9).unwrap(), "a\u{30b}");
        assert_eq!(add_tone_to_letter('M', 5).unwrap(), "M\u{302}");
    }

    #[test]
    fn test_uppercase_n_follows_lowercase_n() {
        assert_eq!(add_tone_to_letter('n', 6).unwrap(), "ň");
        assert_eq!(add_tone_to_letter('N', 6).unwrap(), "Ň");
        assert_eq!(add_tone_to_letter('N', 3).unwrap(), "Ǹ");
        assert_eq!(add_tone_to_letter('N', 5).unwrap(), "N\u{302}");
        assert_eq!(parse_character("Ň"), Ok(('N', 6)));
    }

    #[test]
    fn test_add_tone_to_letter_errors() {
        assert_eq!(add_tone_to_letter('b', 2), Err(TaiLoError::InvalidLetter('b')));
        assert_eq!(add_tone_to_letter('á', 2), Err(TaiLoError::InvalidLetter('á')));
        assert_eq!(add_tone_to_letter('a', 0), Err(TaiLoError::InvalidTone(0)));
        assert_eq!(add_tone_to_letter('a', 10), Err(TaiLoError::InvalidTone(10)));
        // letter is checked before tone
        assert_eq!(add_tone_to_letter('x', 10), Err(TaiLoError::InvalidLetter('x')));
    }

    #[test]
    fn test_parse_character() {
        assert_eq!(parse_character("á"), Ok(('a', 2)));
        assert_eq!(parse_character("Ō"), Ok(('O', 7)));
        assert_eq!(parse_character("ű"), Ok(('u', 9)));
        assert_eq!(parse_character("ḿ"), Ok(('m', 2)));
        assert_eq!(parse_character("a"), Ok(('a', 1)));
        assert_eq!(parse_character("k"), Ok(('k', 1)));
        assert_eq!(parse_character("a\u{30d}"), Ok(('a', 8)));
        assert_eq!(parse_character("n\u{304}"), Ok(('n', 7)));
    }

    #[test]
    fn test_parse_character_errors() {
        assert_eq!(parse_character(""), Err(TaiLoError::InvalidCharacter(String::new())));
        assert_eq!(parse_character("ab"), Err(TaiLoError::InvalidCharacter("ab".to_owned())));
        assert_eq!(
            parse_character("a\u{303}"),
            Err(TaiLoError::InvalidCharacter("a\u{303}".to_owned()))
        );
        assert_eq!(
            parse_character("a\u{301}\u{301}"),
            Err(TaiLoError::InvalidCharacter("a\u{301}\u{301}".to_owned()))
        );
    }

    #[test]
    fn test_letter_round_trip() {
        for &letter in config::TONE_BEARING_LETTERS {
            for l in [letter, letter.to_ascii_uppercase()] {
                for tone in [2, 3, 5, 6, 7, 8, 9] {
                    let marked = add_tone_to_letter(l, tone).unwrap();
                    assert_eq!(parse_character(&marked), Ok((l, tone)), "{l} {tone}");
                }
            }
        }
    }
}
