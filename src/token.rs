// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Fixed tokens of the emitted syntax.
//
// Every token renders to its pattern text through `Display`, e.g.
// `PresetCharSet::Digit` renders `\d` and `Property::Lower` renders `\p{Lower}`.

use std::fmt::Display;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ControlChar {
    Tab,            // \t
    Newline,        // \n
    CarriageReturn, // \r
    FormFeed,       // \f
    Alert,          // \a
    Escape,         // \e
}

impl Display for ControlChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ControlChar::Tab => "\\t",
            ControlChar::Newline => "\\n",
            ControlChar::CarriageReturn => "\\r",
            ControlChar::FormFeed => "\\f",
            ControlChar::Alert => "\\a",
            ControlChar::Escape => "\\e",
        };
        f.write_str(token)
    }
}

#[allow(clippy::enum_variant_names)]
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PresetCharSet {
    Digit,                   // \d
    NonDigit,                // \D
    HorizontalWhitespace,    // \h
    NonHorizontalWhitespace, // \H
    Whitespace,              // \s
    NonWhitespace,           // \S
    VerticalWhitespace,      // \v
    NonVerticalWhitespace,   // \V
    Word,                    // \w
    NonWord,                 // \W
}

impl Display for PresetCharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            PresetCharSet::Digit => "\\d",
            PresetCharSet::NonDigit => "\\D",
            PresetCharSet::HorizontalWhitespace => "\\h",
            PresetCharSet::NonHorizontalWhitespace => "\\H",
            PresetCharSet::Whitespace => "\\s",
            PresetCharSet::NonWhitespace => "\\S",
            PresetCharSet::VerticalWhitespace => "\\v",
            PresetCharSet::NonVerticalWhitespace => "\\V",
            PresetCharSet::Word => "\\w",
            PresetCharSet::NonWord => "\\W",
        };
        f.write_str(token)
    }
}

// Members of `\h` and `\v`, written with escapes only so that they
// survive the ignore-whitespace (`x`) flag.
const HORIZONTAL_WHITESPACE_MEMBERS: &str =
    r"\t\x20\xA0\x{1680}\x{180E}\x{2000}-\x{200A}\x{202F}\x{205F}\x{3000}";
const VERTICAL_WHITESPACE_MEMBERS: &str = r"\n\x0B\x0C\r\x85\x{2028}\x{2029}";

impl PresetCharSet {
    /// The members and polarity of the presets which the regex engine
    /// reads differently (`\h` as a hex digit, `\v` as the vertical tab only),
    /// `None` for the presets the engine understands as they are.
    pub fn engine_members(&self) -> Option<(&'static str, bool)> {
        match self {
            PresetCharSet::HorizontalWhitespace => Some((HORIZONTAL_WHITESPACE_MEMBERS, false)),
            PresetCharSet::NonHorizontalWhitespace => Some((HORIZONTAL_WHITESPACE_MEMBERS, true)),
            PresetCharSet::VerticalWhitespace => Some((VERTICAL_WHITESPACE_MEMBERS, false)),
            PresetCharSet::NonVerticalWhitespace => Some((VERTICAL_WHITESPACE_MEMBERS, true)),
            _ => None,
        }
    }
}

/// A named character property, used as `\p{name}` or negated as `\P{name}`.
#[derive(Debug, PartialEq, Clone)]
pub enum Property {
    // POSIX character classes (US-ASCII only)
    Lower,
    Upper,
    Ascii,
    Alphabetic,
    Digit,
    Alphanumeric,
    Punctuation,
    Graph,
    Print,
    Blank,
    Control,
    HexDigit,
    Space,

    // java.lang.Character classes
    JavaLowerCase,
    JavaUpperCase,
    JavaWhitespace,
    JavaMirrored,

    // Unicode scripts, blocks, categories and binary properties
    Latin,
    Greek,
    UppercaseLetter,
    IsAlphabetic,
    CurrencySymbol,
    Letter,

    /// Any other property name, e.g. `Property::Other("IsHan".to_owned())`.
    Other(String),
}

impl Property {
    pub fn name(&self) -> &str {
        match self {
            Property::Lower => "Lower",
            Property::Upper => "Upper",
            Property::Ascii => "ASCII",
            Property::Alphabetic => "Alpha",
            Property::Digit => "Digit",
            Property::Alphanumeric => "Alnum",
            Property::Punctuation => "Punct",
            Property::Graph => "Graph",
            Property::Print => "Print",
            Property::Blank => "Blank",
            Property::Control => "Cntrl",
            Property::HexDigit => "XDigit",
            Property::Space => "Space",
            Property::JavaLowerCase => "javaLowerCase",
            Property::JavaUpperCase => "javaUpperCase",
            Property::JavaWhitespace => "javaWhitespace",
            Property::JavaMirrored => "javaMirrored",
            Property::Latin => "IsLatin",
            Property::Greek => "InGreek",
            Property::UppercaseLetter => "Lu",
            Property::IsAlphabetic => "IsAlphabetic",
            Property::CurrencySymbol => "Sc",
            Property::Letter => "L",
            Property::Other(name) => name.as_str(),
        }
    }
}

/// A property with its polarity, renders `\p{..}` or `\P{..}`.
#[derive(Debug, PartialEq, Clone)]
pub struct PropertyClass {
    pub property: Property,
    pub negative: bool,
}

impl Display for PropertyClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "\\P{{{}}}", self.property.name())
        } else {
            write!(f, "\\p{{{}}}", self.property.name())
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Anchor {
    StartOfLine,                     // ^
    EndOfLine,                       // $
    WordBoundary,                    // \b
    NonWordBoundary,                 // \B
    StartOfInput,                    // \A
    EndOfPreviousMatch,              // \G
    EndOfInputBeforeFinalTerminator, // \Z
    EndOfInput,                      // \z
}

impl Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Anchor::StartOfLine => "^",
            Anchor::EndOfLine => "$",
            Anchor::WordBoundary => "\\b",
            Anchor::NonWordBoundary => "\\B",
            Anchor::StartOfInput => "\\A",
            Anchor::EndOfPreviousMatch => "\\G",
            Anchor::EndOfInputBeforeFinalTerminator => "\\Z",
            Anchor::EndOfInput => "\\z",
        };
        f.write_str(token)
    }
}

/// The opening token of a scoped group, every kind is closed by `)`.
#[derive(Debug, PartialEq, Clone)]
pub enum GroupKind {
    Capturing,            // (
    NamedCapture(String), // (?<name>
    NonCapturing,         // (?:
    LookAhead,            // (?=
    LookAheadNegative,    // (?!
    LookBehind,           // (?<=
    LookBehindNegative,   // (?<!
    Atomic,               // (?>
}

impl Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKind::Capturing => f.write_str("("),
            GroupKind::NamedCapture(name) => write!(f, "(?<{}>", name),
            GroupKind::NonCapturing => f.write_str("(?:"),
            GroupKind::LookAhead => f.write_str("(?="),
            GroupKind::LookAheadNegative => f.write_str("(?!"),
            GroupKind::LookBehind => f.write_str("(?<="),
            GroupKind::LookBehindNegative => f.write_str("(?<!"),
            GroupKind::Atomic => f.write_str("(?>"),
        }
    }
}

pub const GROUP_END: char = ')';
