//! Letter-based date-time patterns
//!
//! Compiles patterns such as `MM/dd/yyyy HH:mm` into chrono format items so
//! that the same compiled pattern can both render and strictly parse a
//! [`NaiveDateTime`].
//!
//! # Pattern letters
//!
//! | Letters    | Meaning            | Accepted counts                                  |
//! |------------|--------------------|--------------------------------------------------|
//! | `y`, `u`   | year               | `yy` two-digit, `y`/`yyy` unpadded, `yyyy` padded |
//! | `M`, `L`   | month              | `M`, `MM`, `MMM` (Jan), `MMMM` (January)         |
//! | `d`        | day of month       | 1-2                                              |
//! | `D`        | day of year        | `D`, `DDD`                                       |
//! | `E`        | day of week        | 1-3 (Mon), 4 (Monday)                            |
//! | `a`        | AM/PM marker       | 1                                                |
//! | `H`        | hour (0-23)        | 1-2                                              |
//! | `h`        | hour (1-12)        | 1-2                                              |
//! | `m`        | minute             | 1-2                                              |
//! | `s`        | second             | 1-2                                              |
//! | `S`        | fraction of second | 3, 6, 9                                          |
//! | `n`        | nano of second     | 1                                                |
//!
//! Text between single quotes is copied verbatim and `''` stands for a single
//! quote. Any other ASCII letter, and the reserved characters `[ ] { } #`,
//! make the pattern invalid.
//!
//! Parsing is strict: literals must match exactly, a padded field (`MM`,
//! `dd`, `HH`...) needs exactly that many digits and names are
//! case-sensitive. A missing minute defaults to 0 when an hour was parsed.

use std::fmt;

use chrono::format::{self, Fixed, Item, Numeric, Pad, Parsed, StrftimeItems};
use chrono::NaiveDateTime;

use crate::error::{DateTimeError, Result};

const RESERVED: [char; 5] = ['[', ']', '{', '}', '#'];

const SHORT_MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const LONG_MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const SHORT_WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const LONG_WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const AM_PM: &[&str] = &["AM", "PM"];

/// Input accepted for one field when parsing.
#[derive(Debug, Clone)]
enum Shape {
    Literal(Box<str>),
    Digits { min: usize, max: usize, signed: bool },
    Names(&'static [&'static str]),
}

impl Shape {
    /// Length of the prefix of `s` this field consumes, if it matches.
    ///
    /// A variable-width number directly followed by another number only
    /// takes its minimum width, so `yyyyMMdd` splits as 4-2-2.
    fn scan(&self, s: &str, before_number: bool) -> Option<usize> {
        match self {
            Shape::Literal(literal) => s.starts_with(&**literal).then(|| literal.len()),
            Shape::Names(names) => names.iter().filter(|name| s.starts_with(**name)).map(|name| name.len()).max(),
            Shape::Digits { min, max, signed } => {
                let sign = usize::from(*signed && s.starts_with(['+', '-']));
                // a signed year may run past four digits
                let max = if sign == 1 { 9 } else { *max };
                let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
                let take = if before_number { digits.min(*min) } else { digits.min(max) };
                (take >= *min).then_some(sign + take)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Field {
    item: Item<'static>,
    shape: Shape,
}

impl Field {
    fn numeric(numeric: Numeric, pad: Pad, min: usize, max: usize) -> Self {
        Self {
            item: Item::Numeric(numeric, pad),
            shape: Shape::Digits { min, max, signed: false },
        }
    }

    fn year(pad: Pad, min: usize) -> Self {
        Self {
            item: Item::Numeric(Numeric::Year, pad),
            shape: Shape::Digits { min, max: 4, signed: true },
        }
    }

    fn named(fixed: Fixed, names: &'static [&'static str]) -> Self {
        Self {
            item: Item::Fixed(fixed),
            shape: Shape::Names(names),
        }
    }

    /// Fixed-width fraction without a leading dot.
    fn fraction(spec: &'static str, digits: usize) -> Option<Self> {
        StrftimeItems::new(spec).next().map(|item| Self {
            item,
            shape: Shape::Digits {
                min: digits,
                max: digits,
                signed: false,
            },
        })
    }

    fn literal(text: String) -> Self {
        let text = text.into_boxed_str();
        Self {
            item: Item::OwnedLiteral(text.clone()),
            shape: Shape::Literal(text),
        }
    }
}

/// A compiled date-time pattern.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    fields: Vec<Field>,
    // hour without minute: the minute defaults to 0
    default_minute: bool,
}

impl Pattern {
    /// Compile a pattern string.
    ///
    /// # Errors
    /// Returns [`DateTimeError::InvalidPattern`] for unknown letters, letter
    /// counts outside the supported range, reserved characters and
    /// unterminated quotes.
    pub fn compile(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut fields = Vec::new();
        let mut literal = String::new();
        let mut letters = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_ascii_alphabetic() {
                let start = i;
                while i < chars.len() && chars[i] == c {
                    i += 1;
                }
                flush_literal(&mut literal, &mut fields);
                fields.push(field(c, i - start, start)?);
                letters.push(c);
            } else if c == '\'' {
                let start = i;
                i += 1;
                loop {
                    match chars.get(i).copied() {
                        None => {
                            return Err(DateTimeError::InvalidPattern(format!(
                                "unterminated quote at position {} in '{}'",
                                start, pattern
                            )));
                        }
                        Some('\'') if chars.get(i + 1) == Some(&'\'') => {
                            literal.push('\'');
                            i += 2;
                        }
                        Some('\'') => {
                            // '' outside quoted text is an escaped quote
                            if i == start + 1 {
                                literal.push('\'');
                            }
                            i += 1;
                            break;
                        }
                        Some(q) => {
                            literal.push(q);
                            i += 1;
                        }
                    }
                }
            } else if RESERVED.contains(&c) {
                return Err(DateTimeError::InvalidPattern(format!(
                    "reserved character '{}' at position {} in '{}'",
                    c, i, pattern
                )));
            } else {
                literal.push(c);
                i += 1;
            }
        }
        flush_literal(&mut literal, &mut fields);

        let has_hour = letters.contains(['H', 'h']);
        Ok(Self {
            source: pattern.to_string(),
            fields,
            default_minute: has_hour && !letters.contains('m'),
        })
    }

    /// The pattern text this was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a date-time with this pattern.
    pub fn format(&self, date: &NaiveDateTime) -> String {
        date.format_with_items(self.fields.iter().map(|field| &field.item))
            .to_string()
    }

    /// Strictly parse text with this pattern.
    ///
    /// The whole input must be consumed and the fields must be enough to
    /// build a complete date and time of day.
    pub fn parse(&self, text: &str) -> Result<NaiveDateTime> {
        let mut parsed = Parsed::new();
        let mut rest = text;

        for (index, field) in self.fields.iter().enumerate() {
            let before_number = matches!(
                self.fields.get(index + 1).map(|next| &next.shape),
                Some(Shape::Digits { .. })
            );
            let len = field.shape.scan(rest, before_number).ok_or_else(|| {
                DateTimeError::Parse(format!(
                    "'{}' does not match pattern '{}' at position {}",
                    text,
                    self.source,
                    text.len() - rest.len()
                ))
            })?;
            let (head, tail) = rest.split_at(len);
            format::parse(&mut parsed, head, std::iter::once(&field.item)).map_err(|e| self.parse_error(text, e))?;
            rest = tail;
        }

        if !rest.is_empty() {
            return Err(DateTimeError::Parse(format!(
                "'{}' has unparsed text at position {} for pattern '{}'",
                text,
                text.len() - rest.len(),
                self.source
            )));
        }

        if self.default_minute {
            parsed.set_minute(0).map_err(|e| self.parse_error(text, e))?;
        }
        parsed
            .to_naive_datetime_with_offset(0)
            .map_err(|e| self.parse_error(text, e))
    }

    fn parse_error(&self, text: &str, err: format::ParseError) -> DateTimeError {
        DateTimeError::Parse(format!("'{}' does not match pattern '{}': {}", text, self.source, err))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn flush_literal(literal: &mut String, fields: &mut Vec<Field>) {
    if !literal.is_empty() {
        fields.push(Field::literal(std::mem::take(literal)));
    }
}

/// Map a run of `count` identical pattern letters to a field.
fn field(letter: char, count: usize, position: usize) -> Result<Field> {
    let field = match (letter, count) {
        ('y' | 'u', 1) => Some(Field::year(Pad::None, 1)),
        ('y' | 'u', 2) => Some(Field::numeric(Numeric::YearMod100, Pad::Zero, 2, 2)),
        ('y' | 'u', 3) => Some(Field::year(Pad::None, 3)),
        ('y' | 'u', 4) => Some(Field::year(Pad::Zero, 4)),
        ('M' | 'L', 1) => Some(Field::numeric(Numeric::Month, Pad::None, 1, 2)),
        ('M' | 'L', 2) => Some(Field::numeric(Numeric::Month, Pad::Zero, 2, 2)),
        ('M' | 'L', 3) => Some(Field::named(Fixed::ShortMonthName, SHORT_MONTHS)),
        ('M' | 'L', 4) => Some(Field::named(Fixed::LongMonthName, LONG_MONTHS)),
        ('d', 1) => Some(Field::numeric(Numeric::Day, Pad::None, 1, 2)),
        ('d', 2) => Some(Field::numeric(Numeric::Day, Pad::Zero, 2, 2)),
        ('D', 1) => Some(Field::numeric(Numeric::Ordinal, Pad::None, 1, 3)),
        ('D', 3) => Some(Field::numeric(Numeric::Ordinal, Pad::Zero, 3, 3)),
        ('E', 1..=3) => Some(Field::named(Fixed::ShortWeekdayName, SHORT_WEEKDAYS)),
        ('E', 4) => Some(Field::named(Fixed::LongWeekdayName, LONG_WEEKDAYS)),
        ('a', 1) => Some(Field::named(Fixed::UpperAmPm, AM_PM)),
        ('H', 1) => Some(Field::numeric(Numeric::Hour, Pad::None, 1, 2)),
        ('H', 2) => Some(Field::numeric(Numeric::Hour, Pad::Zero, 2, 2)),
        ('h', 1) => Some(Field::numeric(Numeric::Hour12, Pad::None, 1, 2)),
        ('h', 2) => Some(Field::numeric(Numeric::Hour12, Pad::Zero, 2, 2)),
        ('m', 1) => Some(Field::numeric(Numeric::Minute, Pad::None, 1, 2)),
        ('m', 2) => Some(Field::numeric(Numeric::Minute, Pad::Zero, 2, 2)),
        ('s', 1) => Some(Field::numeric(Numeric::Second, Pad::None, 1, 2)),
        ('s', 2) => Some(Field::numeric(Numeric::Second, Pad::Zero, 2, 2)),
        ('S', 3) => Field::fraction("%3f", 3),
        ('S', 6) => Field::fraction("%6f", 6),
        ('S', 9) => Field::fraction("%9f", 9),
        ('n', 1) => Some(Field::numeric(Numeric::Nanosecond, Pad::None, 1, 9)),
        _ => None,
    };

    field.ok_or_else(|| {
        if "yuMLdDEaHhmsSn".contains(letter) {
            DateTimeError::InvalidPattern(format!(
                "unsupported count {} of pattern letter '{}' at position {}",
                count, letter, position
            ))
        } else {
            DateTimeError::InvalidPattern(format!(
                "unknown pattern letter '{}' at position {}",
                letter, position
            ))
        }
    })
}
