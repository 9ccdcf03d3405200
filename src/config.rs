pub const MIN_TONE: u32 = 1;
pub const MAX_TONE: u32 = 9;

/// Tones written without any diacritic: 1 for open syllables, 4 for checked ones
pub const UNMARKED_TONES: [u32; 2] = [1, 4];

/// Default tone of an unmarked syllable, depending on whether it is ji̍p-siann
pub const DEFAULT_OPEN_TONE: u32 = 1;
pub const DEFAULT_CHECKED_TONE: u32 = 4;

/// Lowercase letters which can carry a tone mark, uppercase variants are accepted as well
pub const TONE_BEARING_LETTERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'm', 'n'];

/// Vowels ordered by how strongly they attract the tone mark, strongest first
pub const VOWEL_PRIORITY: &[char] = &['a', 'o', 'e', 'i', 'u'];

/// Final letters of a ji̍p-siann (入聲) syllable
pub const STOP_CODAS: &[char] = &['p', 't', 'k', 'h'];

/// Separator between the syllables of a word, "--" marks a following neutral tone syllable
pub const SYLLABLE_SEP: &str = "-";

pub const fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

pub const fn is_valid_tone(tone: u32) -> bool {
    tone >= MIN_TONE && tone <= MAX_TONE
}
