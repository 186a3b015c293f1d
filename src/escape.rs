// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Notes on escaping literal characters:
//
// Outside a character class the meta characters `. * + ? { } [ ] \ $ ^`
// are escaped with a leading backslash, e.g. `\.`, `\*` and `\^`.
//
// Inside a character class only `\`, `[` and `]` are escaped when
// they appear in a string; a single `^` is escaped as `\^` since it
// would negate the class when it comes first.

use crate::{
    literal::{HexValue, OctalValue, UnicodeValue},
    token::{ControlChar, PresetCharSet, Property, PropertyClass},
};

const PATTERN_META_CHARS: [char; 11] = ['.', '*', '+', '?', '{', '}', '[', ']', '\\', '$', '^'];
const CLASS_META_CHARS: [char; 3] = ['\\', '[', ']'];

pub fn is_pattern_meta_char(c: char) -> bool {
    PATTERN_META_CHARS.contains(&c)
}

/// Escape a char for use outside a character class.
pub fn escape_pattern_char(c: char, output: &mut String) {
    if is_pattern_meta_char(c) {
        output.push('\\');
    }
    output.push(c);
}

/// Escape a string for use outside a character class.
///
/// Each meta character is escaped exactly once, a backslash written by
/// the caller becomes `\\` and is never mistaken for the escape of
/// another meta character.
pub fn escape_pattern_literal(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        escape_pattern_char(c, &mut output);
    }
    output
}

/// Escape a single char for use inside a character class.
pub fn escape_class_char(c: char, output: &mut String) {
    if c == '^' {
        output.push('\\');
    }
    output.push(c);
}

/// Escape a string for use inside a character class.
pub fn escape_class_literal(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        if CLASS_META_CHARS.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }
    output
}

/// The escape sequences and shorthand classes which are valid both
/// in a pattern and inside a character class.
///
/// Implementors only provide `push_token`, all other methods append
/// a fixed token and return the builder for chaining.
pub trait EscapeWriter {
    /// Append raw pattern text without escaping.
    fn push_token(&mut self, token: &str);

    fn control_char(&mut self, control_char: ControlChar) -> &mut Self {
        self.push_token(&control_char.to_string());
        self
    }

    fn tab(&mut self) -> &mut Self {
        self.control_char(ControlChar::Tab)
    }

    fn newline(&mut self) -> &mut Self {
        self.control_char(ControlChar::Newline)
    }

    fn carriage_return(&mut self) -> &mut Self {
        self.control_char(ControlChar::CarriageReturn)
    }

    fn form_feed(&mut self) -> &mut Self {
        self.control_char(ControlChar::FormFeed)
    }

    fn alert(&mut self) -> &mut Self {
        self.control_char(ControlChar::Alert)
    }

    fn escape(&mut self) -> &mut Self {
        self.control_char(ControlChar::Escape)
    }

    /// `\cX`, the designator is not checked.
    fn control(&mut self, designator: char) -> &mut Self {
        self.push_token(&format!("\\c{}", designator));
        self
    }

    /// `\0ooo`
    fn octal(&mut self, value: OctalValue) -> &mut Self {
        self.push_token(&format!("\\0{}", value));
        self
    }

    /// `\xhh`
    fn hex(&mut self, value: HexValue) -> &mut Self {
        self.push_token(&format!("\\x{}", value));
        self
    }

    /// `\uhhhh`
    fn unicode(&mut self, value: UnicodeValue) -> &mut Self {
        self.push_token(&format!("\\u{}", value));
        self
    }

    fn preset(&mut self, preset_char_set: PresetCharSet) -> &mut Self {
        self.push_token(&preset_char_set.to_string());
        self
    }

    fn digit(&mut self) -> &mut Self {
        self.preset(PresetCharSet::Digit)
    }

    fn non_digit(&mut self) -> &mut Self {
        self.preset(PresetCharSet::NonDigit)
    }

    fn horizontal_whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::HorizontalWhitespace)
    }

    fn non_horizontal_whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::NonHorizontalWhitespace)
    }

    fn whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::Whitespace)
    }

    fn non_whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::NonWhitespace)
    }

    fn vertical_whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::VerticalWhitespace)
    }

    fn non_vertical_whitespace(&mut self) -> &mut Self {
        self.preset(PresetCharSet::NonVerticalWhitespace)
    }

    fn word_char(&mut self) -> &mut Self {
        self.preset(PresetCharSet::Word)
    }

    fn non_word_char(&mut self) -> &mut Self {
        self.preset(PresetCharSet::NonWord)
    }

    /// `\p{name}`
    fn property(&mut self, property: Property) -> &mut Self {
        let class = PropertyClass {
            property,
            negative: false,
        };
        self.push_token(&class.to_string());
        self
    }

    /// `\P{name}`
    fn non_property(&mut self, property: Property) -> &mut Self {
        let class = PropertyClass {
            property,
            negative: true,
        };
        self.push_token(&class.to_string());
        self
    }
}
