// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// The text of a pattern under construction.
//
// Two renditions are kept side by side:
//
// - `text`         the exact pattern text, returned by `render_as_text`
// - `engine_text`  the same pattern with the tokens the regex engine
//                  reads differently (e.g. `\h`, `\v`) replaced by
//                  explicit character sets
//
// When a token has no equivalent in the engine the first such token is
// recorded in `unsupported`, and compiling the pattern fails.

#[derive(Debug, PartialEq, Clone, Default)]
pub struct PatternText {
    text: String,
    engine_text: String,
    unsupported: Option<String>,
}

impl PatternText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.engine_text.push(c);
    }

    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
        self.engine_text.push_str(s);
    }

    /// Append `token` to the text and `engine_token` in its place to the engine text.
    pub fn push_translated(&mut self, token: &str, engine_token: &str) {
        self.text.push_str(token);
        self.engine_text.push_str(engine_token);
    }

    /// Append `token` to both texts and remember that the engine can not read it.
    pub fn push_unsupported(&mut self, token: &str, message: String) {
        self.push_str(token);
        if self.unsupported.is_none() {
            self.unsupported = Some(message);
        }
    }

    pub fn append(&mut self, other: &PatternText) {
        self.text.push_str(&other.text);
        self.engine_text.push_str(&other.engine_text);
        if self.unsupported.is_none() {
            self.unsupported.clone_from(&other.unsupported);
        }
    }

    /// `[...]` or `[^...]` around both texts.
    pub fn bracketed(&self, negative: bool) -> PatternText {
        let prefix = if negative { "[^" } else { "[" };
        PatternText {
            text: format!("{}{}]", prefix, self.text),
            engine_text: format!("{}{}]", prefix, self.engine_text),
            unsupported: self.unsupported.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn engine_text(&self) -> &str {
        &self.engine_text
    }

    pub fn unsupported(&self) -> Option<&str> {
        self.unsupported.as_deref()
    }
}
