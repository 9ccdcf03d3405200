//! Conversion between the numbered notation ("Tai5-gi2") and tone marks ("Tâi-gí").
//!
//! Input is a single syllable or a hyphen-joined word. Empty pieces from a
//! double hyphen ("a--lah") are kept as they are.

use itertools::Itertools;
use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::satisfy,
    combinator::{all_consuming, map_opt, opt},
    sequence::pair,
};

use crate::common::{Result, TaiLoError};
use crate::config;
use crate::syllable::{add_tone_to_syllable, parse_syllable};

pub fn mark_from_numbered(numbered: &str) -> Result<String> {
    let pieces = numbered
        .split(config::SYLLABLE_SEP)
        .map(|piece| {
            if piece.is_empty() {
                Ok(String::new())
            } else {
                mark_from_numbered_syllable(piece)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(pieces.iter().join(config::SYLLABLE_SEP))
}

pub fn numbered_from_mark(marked: &str) -> Result<String> {
    let pieces = marked
        .split(config::SYLLABLE_SEP)
        .map(|piece| {
            if piece.is_empty() {
                Ok(String::new())
            } else {
                parse_syllable(piece).map(|(base, tone)| format!("{base}{tone}"))
            }
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(pieces.iter().join(config::SYLLABLE_SEP))
}

fn mark_from_numbered_syllable(numbered: &str) -> Result<String> {
    match parse_numbered_syllable(numbered) {
        Ok((_, (base, Some(tone)))) => add_tone_to_syllable(base, tone),
        // no tone number, keep the unmarked spelling
        Ok((_, (base, None))) => Ok(base.to_owned()),
        Err(_) => Err(TaiLoError::InvalidNumbered(numbered.to_owned())),
    }
}

fn parse_numbered_syllable(numbered: &str) -> IResult<&str, (&str, Option<u32>)> {
    let letters = take_while1(|c: char| c.is_ascii_alphabetic());
    let tone = map_opt(satisfy(|c| ('1'..='9').contains(&c)), |c| c.to_digit(10));
    all_consuming(pair(letters, opt(tone))).parse(numbered)
}
