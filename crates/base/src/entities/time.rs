use chrono::{NaiveTime, Timelike};
use thiserror::Error;

/// Minutes since midnight. Values past 23:59 are representable; formatting
/// never wraps them around the day boundary.
pub type DeliveryTime = u32;

pub type TimeLiteral = String;

const MINUTES_IN_HOUR: DeliveryTime = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeLiteralError {
    #[error("a time literal {0} is missing the ':' separator")]
    MissingSeparator(String),
    #[error("a time literal {literal} contains a non-integer part {part}")]
    InvalidPart { literal: String, part: String },
}

/// Converts an "HH:MM" literal to minutes since midnight. The parts are not
/// range-checked, so "26:80" parses successfully.
pub fn parse_time_literal(literal: &str) -> Result<DeliveryTime, TimeLiteralError> {
    let (hours_part, minutes_part) = literal
        .split_once(':')
        .ok_or_else(|| TimeLiteralError::MissingSeparator(literal.to_string()))?;

    let hours = parse_part(literal, hours_part)?;
    let minutes = parse_part(literal, minutes_part)?;

    Ok(hours * MINUTES_IN_HOUR + minutes)
}

fn parse_part(literal: &str, part: &str) -> Result<DeliveryTime, TimeLiteralError> {
    part.parse().map_err(|_| TimeLiteralError::InvalidPart {
        literal: literal.to_string(),
        part: part.to_string(),
    })
}

pub fn format_delivery_time(time: DeliveryTime) -> TimeLiteral {
    format!("{:02}:{:02}", time / MINUTES_IN_HOUR, time % MINUTES_IN_HOUR)
}

pub fn minutes_since_midnight(time: NaiveTime) -> DeliveryTime {
    time.hour() * MINUTES_IN_HOUR + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__padded_literal__should_return_minutes_since_midnight() {
        assert_eq!(parse_time_literal("09:10"), Ok(550));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__unpadded_hours__should_return_minutes_since_midnight() {
        assert_eq!(parse_time_literal("9:10"), Ok(550));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__hours_beyond_one_day__should_not_wrap() {
        assert_eq!(parse_time_literal("25:00"), Ok(1500));
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__literal_without_separator__should_return_error() {
        assert_eq!(
            parse_time_literal("1140"),
            Err(TimeLiteralError::MissingSeparator(String::from("1140")))
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__non_integer_minutes__should_return_error() {
        assert_eq!(
            parse_time_literal("11:4o"),
            Err(TimeLiteralError::InvalidPart {
                literal: String::from("11:4o"),
                part: String::from("4o"),
            })
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__extra_separator__should_return_error() {
        assert!(parse_time_literal("11:40:30").is_err());
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_time_literal__empty_literal__should_return_error() {
        assert!(parse_time_literal("").is_err());
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_delivery_time__midnight__should_pad_both_parts() {
        assert_eq!(format_delivery_time(0), "00:00");
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_delivery_time__morning_time__should_pad_single_digits() {
        assert_eq!(format_delivery_time(9 * 60 + 5), "09:05");
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_delivery_time__time_beyond_one_day__should_not_wrap() {
        assert_eq!(format_delivery_time(1500), "25:00");
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_delivery_time__parsed_literal__should_round_trip() {
        for literal in ["00:00", "09:10", "11:40", "23:59"] {
            assert_eq!(format_delivery_time(parse_time_literal(literal).unwrap()), literal);
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn minutes_since_midnight__naive_time__should_ignore_seconds() {
        assert_eq!(minutes_since_midnight(NaiveTime::from_hms(11, 40, 59)), 700);
    }
}
