use itertools::Itertools;
use tracing::trace;

use crate::common::{Result, TaiLoError};
use crate::config;
use crate::tone::{add_tone_to_letter, combining_mark_tone, precomposed_base};

/// Add a tone mark to a syllable written without tone mark, e.g. ("tai", 5) -> "tâi".
pub fn add_tone_to_syllable(syllable: &str, tone: u32) -> Result<String> {
    if !config::is_valid_tone(tone) {
        return Err(TaiLoError::InvalidTone(tone));
    }
    let tone_index = find_tone_index(syllable)?;
    let mut marked = String::with_capacity(syllable.len() + 2);
    for (i, c) in syllable.chars().enumerate() {
        if i == tone_index {
            marked.push_str(&add_tone_to_letter(c, tone)?);
        } else {
            marked.push(c);
        }
    }
    Ok(marked)
}

/// Parse a tone-marked syllable into its base form and tone number.
///
/// A syllable without any tone mark is tone 4 if it is ji̍p-siann, otherwise tone 1.
pub fn parse_syllable(syllable: &str) -> Result<(String, u32)> {
    let mut chars: Vec<char> = syllable.chars().collect();
    if chars.is_empty() {
        return Err(TaiLoError::MalformedSyllable(syllable.to_owned()));
    }

    if let Some((i, tone)) = chars
        .iter()
        .enumerate()
        .find_map(|(i, &c)| combining_mark_tone(c).map(|tone| (i, tone)))
    {
        // a combining mark needs a letter to attach to
        if i == 0 {
            return Err(TaiLoError::MalformedSyllable(syllable.to_owned()));
        }
        chars.remove(i);
        return Ok((chars.into_iter().collect(), tone));
    }

    if let Some((i, (base, tone))) = chars
        .iter()
        .enumerate()
        .find_map(|(i, &c)| precomposed_base(c).map(|b| (i, b)))
    {
        chars[i] = base;
        return Ok((chars.into_iter().collect(), tone));
    }

    let tone = if is_jip_siann(syllable) {
        config::DEFAULT_CHECKED_TONE
    } else {
        config::DEFAULT_OPEN_TONE
    };
    Ok((syllable.to_owned(), tone))
}

/// Determine if a syllable is ji̍p-siann (入聲), i.e. ends in a stop consonant
pub fn is_jip_siann(syllable: &str) -> bool {
    syllable
        .chars()
        .next_back()
        .is_some_and(|c| config::STOP_CODAS.contains(&c.to_ascii_lowercase()))
}

/// Index (in chars, not bytes) of the letter which carries the tone mark.
pub fn find_tone_index(syllable: &str) -> Result<usize> {
    let lower: Vec<char> = syllable.chars().map(|c| c.to_ascii_lowercase()).collect();
    let first = lower.iter().position(|&c| config::is_vowel(c));
    let last = lower.iter().rposition(|&c| config::is_vowel(c));

    if let (Some(first), Some(last)) = (first, last) {
        let vowels = &lower[first..=last];
        if !vowels.iter().all(|&c| config::is_vowel(c)) {
            return Err(TaiLoError::MalformedSyllable(syllable.to_owned()));
        }
        let index = first + find_tone_index_vowels(vowels);
        trace!(syllable, index, "tone on vowel");
        return Ok(index);
    }

    // no vowel, the tone mark goes on either 'ng' or 'm'
    let index = lower
        .windows(2)
        .position(|w| w == ['n', 'g'])
        .or_else(|| lower.iter().position(|&c| c == 'm'))
        .ok_or_else(|| TaiLoError::MalformedSyllable(syllable.to_owned()))?;
    trace!(syllable, index, "tone on nasal");
    Ok(index)
}

fn find_tone_index_vowels(vowels: &[char]) -> usize {
    if vowels == ['i', 'u'] {
        return 1;
    }
    vowels
        .iter()
        .position_min_by_key(|&&c| vowel_rank(c))
        .unwrap_or(0)
}

fn vowel_rank(vowel: char) -> usize {
    config::VOWEL_PRIORITY
        .iter()
        .position(|&v| v == vowel)
        .unwrap_or(config::VOWEL_PRIORITY.len())
}
