// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::ops::RangeInclusive;

use crate::{
    buffer::PatternText,
    escape::{escape_class_char, escape_class_literal, EscapeWriter},
    token::PresetCharSet,
};

/// Assembles the content of one character class `[...]`.
///
/// A `CharClassBuilder` is created by `PatternBuilder::character_class`
/// (or by `nested_class` of an enclosing class), populated by the
/// caller's closure and then rendered into the parent builder.
#[derive(Debug)]
pub struct CharClassBuilder {
    negative: bool,
    text: PatternText,
}

impl CharClassBuilder {
    pub fn new(negative: bool) -> Self {
        Self {
            negative,
            text: PatternText::new(),
        }
    }

    /// `a-z`, the order of the bounds is not checked.
    pub fn range(&mut self, start: char, end_included: char) -> &mut Self {
        self.text.push(start);
        self.text.push('-');
        self.text.push(end_included);
        self
    }

    pub fn range_inclusive(&mut self, range: RangeInclusive<char>) -> &mut Self {
        self.range(*range.start(), *range.end())
    }

    /// `ranges(&[('a', 'z'), ('0', '9')])` appends `a-z0-9`.
    pub fn ranges(&mut self, pairs: &[(char, char)]) -> &mut Self {
        for (start, end_included) in pairs {
            self.range(*start, *end_included);
        }
        self
    }

    pub fn range_set(&mut self, ranges: &[RangeInclusive<char>]) -> &mut Self {
        for range in ranges {
            self.range(*range.start(), *range.end());
        }
        self
    }

    pub fn literal_char(&mut self, c: char) -> &mut Self {
        let mut escaped = String::new();
        escape_class_char(c, &mut escaped);
        self.text.push_str(&escaped);
        self
    }

    pub fn literal_string(&mut self, s: &str) -> &mut Self {
        self.text.push_str(&escape_class_literal(s));
        self
    }

    /// A class within this class, e.g. `[a-c[x-z]]`.
    pub fn nested_class<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut CharClassBuilder),
    {
        let mut nested = CharClassBuilder::new(false);
        f(&mut nested);
        self.text.append(&nested.render_pattern_text());
        self
    }

    /// `&&[...]` or `&&[^...]`.
    ///
    /// Unlike `nested_class` the content is written directly into this
    /// builder between the opening `&&[` and the closing `]`.
    pub fn intersection<F>(&mut self, negative: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut CharClassBuilder),
    {
        self.text.push_str("&&[");
        if negative {
            self.text.push('^');
        }
        f(self);
        self.text.push(']');
        self
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The bracketed class, e.g. `[^a-z]`.
    pub fn render(&self) -> String {
        self.render_pattern_text().text().to_owned()
    }

    pub(crate) fn render_pattern_text(&self) -> PatternText {
        let rendered = self.text.bracketed(self.negative);
        log::trace!("character class rendered: {}", rendered.text());
        rendered
    }
}

impl EscapeWriter for CharClassBuilder {
    fn push_token(&mut self, token: &str) {
        self.text.push_str(token);
    }

    // the members of `\h` and `\v` are spliced into the class, the
    // negated forms can not be spliced and make compiling the pattern fail
    fn preset(&mut self, preset_char_set: PresetCharSet) -> &mut Self {
        let token = preset_char_set.to_string();
        match preset_char_set.engine_members() {
            Some((members, false)) => self.text.push_translated(&token, members),
            Some((_, true)) => self.text.push_unsupported(
                &token,
                format!(
                    "`{}` inside a character class is not supported by the regex engine.",
                    token
                ),
            ),
            None => self.text.push_str(&token),
        }
        self
    }
}
