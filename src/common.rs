use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TaiLoError {
    InvalidLetter(char),
    InvalidTone(u32),
    InvalidCharacter(String),
    MalformedSyllable(String),
    InvalidNumbered(String),
}

pub type Result<T> = std::result::Result<T, TaiLoError>;

impl fmt::Display for TaiLoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(letter) => write!(f, "Letter {letter} cannot bear a tone"),
            Self::InvalidTone(tone) => write!(f, "Tone must be between 1 and 9, got {tone}"),
            Self::InvalidCharacter(character) => {
                write!(f, "Invalid tone-marked character: {character}")
            }
            Self::MalformedSyllable(syllable) => write!(f, "Invalid syllable: {syllable}"),
            Self::InvalidNumbered(syllable) => {
                write!(f, "Invalid syllable in numbered notation: {syllable}")
            }
        }
    }
}

impl std::error::Error for TaiLoError {}
