// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Compilation options forwarded to the regex engine.
///
/// The options are not part of the assembled pattern text, they are
/// passed to the engine as a leading inline flag group, e.g. `(?im)`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RegexOption {
    IgnoreCase,    // i
    Multiline,     // m
    DotMatchesAll, // s
    Comments,      // x
    SwapGreed,     // U
}

impl RegexOption {
    pub fn flag(&self) -> char {
        match self {
            RegexOption::IgnoreCase => 'i',
            RegexOption::Multiline => 'm',
            RegexOption::DotMatchesAll => 's',
            RegexOption::Comments => 'x',
            RegexOption::SwapGreed => 'U',
        }
    }
}

/// A set of `RegexOption`, kept in insertion order without duplicates.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct RegexOptions {
    options: Vec<RegexOption>,
}

impl RegexOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, option: RegexOption) -> Self {
        self.insert(option);
        self
    }

    pub fn insert(&mut self, option: RegexOption) {
        if !self.contains(option) {
            self.options.push(option);
        }
    }

    pub fn contains(&self, option: RegexOption) -> bool {
        self.options.contains(&option)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegexOption> {
        self.options.iter()
    }
}

impl From<RegexOption> for RegexOptions {
    fn from(option: RegexOption) -> Self {
        RegexOptions::new().with(option)
    }
}

impl FromIterator<RegexOption> for RegexOptions {
    fn from_iter<T: IntoIterator<Item = RegexOption>>(iter: T) -> Self {
        let mut options = RegexOptions::new();
        for option in iter {
            options.insert(option);
        }
        options
    }
}

impl<const N: usize> From<[RegexOption; N]> for RegexOptions {
    fn from(options: [RegexOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl Display for RegexOptions {
    // the empty set renders nothing
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.options.is_empty() {
            return Ok(());
        }

        let flags: String = self.options.iter().map(|o| o.flag()).collect();
        write!(f, "(?{})", flags)
    }
}
