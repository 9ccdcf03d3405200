//! Tone marks for Tai-lo, the romanization of Taiwanese Hokkien.
//!
//! A syllable is handled either as base spelling plus tone number ("tai", 5) or
//! in its tone-marked written form ("tâi").

pub mod check;
pub mod common;
pub mod config;
pub mod numbered;
pub mod syllable;
pub mod tone;

pub use common::{Result, TaiLoError};
pub use syllable::{add_tone_to_syllable, parse_syllable};
pub use tone::{add_tone_to_letter, parse_character};
