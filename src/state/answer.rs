// Parsing and judging the typed weight guess
use thiserror::Error;

use crate::model::{ItemId, Measurement};
use crate::util::format_weight;

#[derive(Debug, Error, PartialEq)]
pub enum AnswerError {
    #[error("empty answer")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Accepts a plain decimal with optional sign; no grouping separators.
pub fn parse_answer(raw: &str) -> Result<f64, AnswerError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(AnswerError::Empty);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AnswerError::NotANumber(text.to_string())),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Correct { item_id: ItemId, weight: f64 },
    /// `guess` is `None` when the text was not a number.
    Incorrect { expected: f64, guess: Option<f64> },
    NothingWeighed,
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Correct { .. })
    }

    pub fn message(&self, unit: &str) -> String {
        match self {
            Verdict::Correct { .. } => "Correct!".to_string(),
            Verdict::Incorrect { expected, .. } => {
                format!("Wrong. The correct weight is {} {}", format_weight(*expected), unit)
            }
            Verdict::NothingWeighed => "Put something on the scale first".to_string(),
        }
    }
}

pub fn judge(pending: Option<Measurement>, guess: Result<f64, AnswerError>, tolerance: f64) -> Verdict {
    let Some(m) = pending else {
        return Verdict::NothingWeighed;
    };
    match guess {
        Ok(g) if (g - m.weight).abs() <= tolerance => Verdict::Correct {
            item_id: m.item_id,
            weight: m.weight,
        },
        Ok(g) => Verdict::Incorrect { expected: m.weight, guess: Some(g) },
        Err(_) => Verdict::Incorrect { expected: m.weight, guess: None },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> Option<Measurement> {
        Some(Measurement { item_id: ItemId(1), weight: 9.0 })
    }

    #[test]
    fn parses_sign_and_decimal_point() {
        assert_eq!(parse_answer(" 9 "), Ok(9.0));
        assert_eq!(parse_answer("+8.5"), Ok(8.5));
        assert_eq!(parse_answer("-1"), Ok(-1.0));
        assert_eq!(parse_answer(".5"), Ok(0.5));
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(parse_answer("   "), Err(AnswerError::Empty));
        assert_eq!(parse_answer(""), Err(AnswerError::Empty));
    }

    #[test]
    fn rejects_grouping_and_words() {
        assert!(matches!(parse_answer("1,000"), Err(AnswerError::NotANumber(_))));
        assert!(matches!(parse_answer("nine"), Err(AnswerError::NotANumber(_))));
        assert!(matches!(parse_answer("inf"), Err(AnswerError::NotANumber(_))));
        assert!(matches!(parse_answer("NaN"), Err(AnswerError::NotANumber(_))));
    }

    #[test]
    fn exact_match_is_correct() {
        let v = judge(nine(), parse_answer("9"), 0.0);
        assert_eq!(v, Verdict::Correct { item_id: ItemId(1), weight: 9.0 });
        assert!(v.is_success());
        assert_eq!(v.message("kg"), "Correct!");
    }

    #[test]
    fn near_miss_reveals_the_weight() {
        let v = judge(nine(), parse_answer("9.1"), 0.0);
        assert_eq!(v, Verdict::Incorrect { expected: 9.0, guess: Some(9.1) });
        assert_eq!(v.message("kg"), "Wrong. The correct weight is 9 kg");
    }

    #[test]
    fn tolerance_widens_the_window() {
        assert!(judge(nine(), parse_answer("9.1"), 0.25).is_success());
        assert!(!judge(nine(), parse_answer("9.3"), 0.25).is_success());
    }

    #[test]
    fn garbage_counts_as_wrong() {
        let v = judge(nine(), parse_answer("abc"), 0.0);
        assert_eq!(v, Verdict::Incorrect { expected: 9.0, guess: None });
    }

    #[test]
    fn nothing_on_the_scale() {
        assert_eq!(judge(None, parse_answer("9"), 0.0), Verdict::NothingWeighed);
    }
}
