//! Reading and writing the SVG path-data grammar (the `d` attribute).
//!
//! The parser accepts everything the SVG 1.1 grammar allows: implicit command
//! repetition, optional comma separators, packed numbers such as `1.5.5` or
//! `1-2`, exponents, and unseparated arc flags (`a1 1 0 015 5`). The encoder
//! writes each command letter followed by space-separated coordinates.

use crate::command::{Arc, CommandKind, PathCommand};
use crate::error::{ParseError, ParseErrorKind};
use crate::float::Float;
use crate::vec::Vec2;
use alloc::string::String;
use alloc::vec::Vec as AllocVec;
use core::fmt::Write;

/// Parse path data into commands.
///
/// An empty or whitespace-only string yields no commands. Otherwise the data
/// must start with a move command.
pub fn parse<F: Float>(data: &str) -> Result<AllocVec<PathCommand<F>>, ParseError> {
    let mut parser = Parser { data, bytes: data.as_bytes(), pos: 0 };
    let mut commands = AllocVec::new();

    parser.skip_whitespace();
    while let Some(byte) = parser.peek() {
        let offset = parser.pos;
        if !byte.is_ascii_alphabetic() {
            return Err(parser.unexpected());
        }
        let letter = byte.to_ascii_uppercase();
        let relative = byte.is_ascii_lowercase();
        if commands.is_empty() && letter != b'M' {
            return Err(ParseError::new(offset, ParseErrorKind::MissingMoveTo));
        }
        parser.pos += 1;

        if letter == b'Z' {
            commands.push(PathCommand { relative, kind: CommandKind::ClosePath });
            parser.skip_whitespace();
            continue;
        }

        let mut letter = letter;
        loop {
            parser.skip_whitespace();
            let kind = parser.arguments(letter, offset)?;
            commands.push(PathCommand { relative, kind });
            let had_comma = parser.skip_separator();
            if !parser.starts_number() {
                if had_comma {
                    return Err(ParseError::new(parser.pos, ParseErrorKind::ExpectedNumber));
                }
                break;
            }
            // Extra coordinate pairs after a move are implicit line commands.
            if letter == b'M' {
                letter = b'L';
            }
        }
    }
    Ok(commands)
}

/// Encode commands as path data, e.g. `M0 0l2 2Z`.
pub fn encode<F: Float>(commands: &[PathCommand<F>]) -> String {
    let mut out = String::new();
    for command in commands {
        out.push(command.letter());
        let mut numbers = NumberWriter { out: &mut out, first: true };
        match command.kind {
            CommandKind::MoveTo(to) | CommandKind::LineTo(to) | CommandKind::SmoothQuadTo(to) => {
                numbers.pair(to);
            }
            CommandKind::HorizontalLineTo(x) => numbers.number(x),
            CommandKind::VerticalLineTo(y) => numbers.number(y),
            CommandKind::CurveTo { control_start, control_end, to } => {
                numbers.pair(control_start);
                numbers.pair(control_end);
                numbers.pair(to);
            }
            CommandKind::SmoothCurveTo { control_end, to } => {
                numbers.pair(control_end);
                numbers.pair(to);
            }
            CommandKind::QuadTo { control, to } => {
                numbers.pair(control);
                numbers.pair(to);
            }
            CommandKind::Arc(arc) => {
                numbers.pair(arc.radii);
                numbers.number(arc.x_rotation);
                numbers.flag(arc.large_arc);
                numbers.flag(arc.sweep);
                numbers.pair(arc.to);
            }
            CommandKind::ClosePath => {}
        }
    }
    out
}

struct NumberWriter<'a> {
    out: &'a mut String,
    first: bool,
}

impl NumberWriter<'_> {
    fn separate(&mut self) {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
    }

    fn number<F: Float>(&mut self, value: F) {
        self.separate();
        let _ = write!(self.out, "{}", value);
    }

    fn pair<F: Float>(&mut self, value: Vec2<F>) {
        self.number(value.x);
        self.number(value.y);
    }

    fn flag(&mut self, value: bool) {
        self.separate();
        self.out.push(if value { '1' } else { '0' });
    }
}

struct Parser<'a> {
    data: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0C') = self.peek() {
            self.pos += 1;
        }
    }

    /// Whitespace with at most one comma. Returns whether a comma was seen.
    fn skip_separator(&mut self) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(b',') {
            self.pos += 1;
            self.skip_whitespace();
            return true;
        }
        false
    }

    fn starts_number(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'.' | b'+' | b'-'))
    }

    fn unexpected(&self) -> ParseError {
        let found = self.data[self.pos..].chars().next().unwrap_or('\0');
        let kind = if found.is_alphabetic() {
            ParseErrorKind::UnknownCommand(found)
        } else {
            ParseErrorKind::UnexpectedChar(found)
        };
        ParseError::new(self.pos, kind)
    }

    fn digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn number<F: Float>(&mut self) -> Result<F, ParseError> {
        let start = self.pos;
        if let Some(b'+' | b'-') = self.peek() {
            self.pos += 1;
        }
        let mut mantissa = self.digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            mantissa += self.digits();
        }
        if mantissa == 0 {
            self.pos = start;
            return Err(ParseError::new(start, ParseErrorKind::ExpectedNumber));
        }
        if let Some(b'e' | b'E') = self.peek() {
            let before_exponent = self.pos;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if self.digits() == 0 {
                self.pos = before_exponent;
            }
        }
        let value = self.data[start..self.pos]
            .parse::<f64>()
            .map(F::from_f64)
            .map_err(|_| ParseError::new(start, ParseErrorKind::ExpectedNumber))?;
        // Overflow parses to infinity, which the encoder could not write back.
        if !value.is_finite() {
            return Err(ParseError::new(start, ParseErrorKind::NumberOutOfRange));
        }
        Ok(value)
    }

    fn next_number<F: Float>(&mut self) -> Result<F, ParseError> {
        self.skip_separator();
        self.number()
    }

    fn pair<F: Float>(&mut self, first: bool) -> Result<Vec2<F>, ParseError> {
        let x = if first { self.number()? } else { self.next_number()? };
        let y = self.next_number()?;
        Ok(Vec2::new(x, y))
    }

    fn flag(&mut self) -> Result<bool, ParseError> {
        self.skip_separator();
        let value = match self.peek() {
            Some(b'0') => false,
            Some(b'1') => true,
            _ => return Err(ParseError::new(self.pos, ParseErrorKind::ExpectedFlag)),
        };
        self.pos += 1;
        Ok(value)
    }

    fn arguments<F: Float>(&mut self, letter: u8, offset: usize) -> Result<CommandKind<F>, ParseError> {
        let kind = match letter {
            b'M' => CommandKind::MoveTo(self.pair(true)?),
            b'L' => CommandKind::LineTo(self.pair(true)?),
            b'H' => CommandKind::HorizontalLineTo(self.number()?),
            b'V' => CommandKind::VerticalLineTo(self.number()?),
            b'C' => CommandKind::CurveTo {
                control_start: self.pair(true)?,
                control_end: self.pair(false)?,
                to: self.pair(false)?,
            },
            b'S' => CommandKind::SmoothCurveTo {
                control_end: self.pair(true)?,
                to: self.pair(false)?,
            },
            b'Q' => CommandKind::QuadTo {
                control: self.pair(true)?,
                to: self.pair(false)?,
            },
            b'T' => CommandKind::SmoothQuadTo(self.pair(true)?),
            b'A' => CommandKind::Arc(Arc {
                radii: self.pair(true)?,
                x_rotation: self.next_number()?,
                large_arc: self.flag()?,
                sweep: self.flag()?,
                to: self.pair(false)?,
                ellipse: None,
            }),
            other => {
                return Err(ParseError::new(offset, ParseErrorKind::UnknownCommand(other as char)));
            }
        };
        Ok(kind)
    }
}
