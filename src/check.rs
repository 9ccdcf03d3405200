use std::fmt;

use tracing::debug;

use crate::common::TaiLoError;
use crate::syllable::{add_tone_to_syllable, parse_syllable};

#[derive(Debug, PartialEq)]
pub enum RoundTripError {
    Invalid(TaiLoError),
    Mismatch(String),
}

#[derive(Debug, PartialEq)]
pub struct RoundTripFailure {
    pub line_num: usize,
    pub syllable: String,
    pub error: RoundTripError,
}

impl fmt::Display for RoundTripFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            RoundTripError::Invalid(err) => {
                write!(f, "line {}: {}: {}", self.line_num, self.syllable, err)
            }
            RoundTripError::Mismatch(output) => write!(
                f,
                "line {}: {} != {}",
                self.line_num, self.syllable, output
            ),
        }
    }
}

/// Parse every tone-marked syllable and add the tone again, the result must be identical
/// to the input. Blank lines are skipped, line numbers start at 1.
pub fn round_trip_check<I, S>(lines: I) -> Vec<RoundTripFailure>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut failures = vec![];
    for (idx, line) in lines.into_iter().enumerate() {
        let syllable = line.as_ref();
        if syllable.is_empty() {
            continue;
        }
        let result = parse_syllable(syllable)
            .and_then(|(base, tone)| add_tone_to_syllable(&base, tone));
        let error = match result {
            Ok(output) if output == syllable => continue,
            Ok(output) => RoundTripError::Mismatch(output),
            Err(err) => RoundTripError::Invalid(err),
        };
        let failure = RoundTripFailure {
            line_num: idx + 1,
            syllable: syllable.to_owned(),
            error,
        };
        debug!("round trip failed, {failure}");
        failures.push(failure);
    }
    failures
}
