// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Bounded literal values.
//
// These are the payloads of the numeric escapes:
//
// - \0ooo    Octal value, `OctalValue`, 000 to 377
// - \xhh     Hexadecimal byte, `HexValue`, 00 to ff
// - \uhhhh   Unicode code point, `UnicodeValue`, 0000 to ffff
//
// A value is validated once when it is constructed, the builders
// append its text without checking it again.

use std::fmt::Display;

use crate::error::BuilderError;

/// Three octal digits, the first in 0..=3 and the others in 0..=7.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct OctalValue {
    digits: [u8; 3],
}

impl OctalValue {
    pub fn new(a: u8, b: u8, c: u8) -> Result<Self, BuilderError> {
        if a > 3 || b > 7 || c > 7 {
            return Err(BuilderError::InvalidLiteralRange(format!(
                "Octal digits \"{}{}{}\" are out of the range from 000 to 377 inclusive.",
                a, b, c
            )));
        }

        Ok(Self { digits: [a, b, c] })
    }

    /// `OctalValue::from_digit(7)` is equivalent to `OctalValue::new(0, 0, 7)`.
    pub fn from_digit(c: u8) -> Result<Self, BuilderError> {
        Self::new(0, 0, c)
    }

    /// `OctalValue::from_digits(7, 7)` is equivalent to `OctalValue::new(0, 7, 7)`.
    pub fn from_digits(b: u8, c: u8) -> Result<Self, BuilderError> {
        Self::new(0, b, c)
    }

    /// Every byte fits in three octal digits with a leading digit of at most 3.
    pub fn from_byte(value: u8) -> Self {
        Self {
            digits: [value >> 6, (value >> 3) & 0o7, value & 0o7],
        }
    }
}

impl Display for OctalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.digits;
        write!(f, "{}{}{}", a, b, c)
    }
}

/// Two hexadecimal digits, the casing given by the caller is preserved.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct HexValue {
    digits: [char; 2],
}

impl HexValue {
    pub fn new(a: char, b: char) -> Result<Self, BuilderError> {
        if !(a.is_ascii_hexdigit() && b.is_ascii_hexdigit()) {
            return Err(BuilderError::InvalidLiteralRange(format!(
                "Hexadecimal digits \"{}{}\" are out of the range from 00 to ff inclusive.",
                a, b
            )));
        }

        Ok(Self { digits: [a, b] })
    }

    pub fn from_byte(value: u8) -> Self {
        let [a, b] = hex_digits::<2>(value as u32);
        Self { digits: [a, b] }
    }
}

impl Display for HexValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.digits;
        write!(f, "{}{}", a, b)
    }
}

/// Four hexadecimal digits of a code point in the Basic Multilingual Plane.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct UnicodeValue {
    digits: [char; 4],
}

impl UnicodeValue {
    pub fn new(a: char, b: char, c: char, d: char) -> Result<Self, BuilderError> {
        let digits = [a, b, c, d];
        if !digits.iter().all(|c| c.is_ascii_hexdigit()) {
            return Err(BuilderError::InvalidLiteralRange(format!(
                "Unicode digits \"{}{}{}{}\" are out of the range from 0000 to ffff inclusive.",
                a, b, c, d
            )));
        }

        Ok(Self { digits })
    }

    pub fn from_u16(value: u16) -> Self {
        Self {
            digits: hex_digits::<4>(value as u32),
        }
    }
}

impl Display for UnicodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.digits;
        write!(f, "{}{}{}{}", a, b, c, d)
    }
}

// lowercase, most significant digit first
fn hex_digits<const N: usize>(value: u32) -> [char; N] {
    let mut digits = ['0'; N];
    for (idx, digit) in digits.iter_mut().enumerate() {
        let shift = (N - 1 - idx) * 4;
        let nibble = (value >> shift) & 0xf;
        *digit = char::from_digit(nibble, 16).unwrap_or('0');
    }
    digits
}
