// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::{self, Display};

#[derive(Debug, PartialEq, Clone)]
pub enum BuilderError {
    /// A digit passed to `OctalValue`, `HexValue` or `UnicodeValue`
    /// is outside its legal alphabet or range.
    InvalidLiteralRange(String),

    /// The regex engine rejected the assembled pattern text.
    PatternCompilation { pattern: String, message: String },
}

impl Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::InvalidLiteralRange(msg) => {
                write!(f, "Invalid literal range: {}", msg)
            }
            BuilderError::PatternCompilation { pattern, message } => {
                write!(f, "Failed to compile pattern \"{}\": {}", pattern, message)
            }
        }
    }
}

impl std::error::Error for BuilderError {}
