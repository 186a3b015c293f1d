// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Assemble regular expressions from typed builder operations.
//!
//! ```
//! use regex_dsl::make_pattern_string;
//!
//! let pattern = make_pattern_string(|b| {
//!     b.literal_char('#')
//!         .group(|g| {
//!             g.character_class(false, |c| {
//!                 c.range('a', 'f').range('A', 'F');
//!             })
//!             .or()
//!             .character_class(false, |c| {
//!                 c.range('0', '9');
//!             });
//!         })
//!         .between(3, 6);
//! });
//!
//! assert_eq!(pattern, "#([a-fA-F]|[0-9]){3,6}");
//! ```

mod buffer;
mod builder;
mod charclass;
mod error;
mod escape;
mod literal;
mod options;

pub mod token;

pub use builder::{make_pattern_string, make_regex, PatternBuilder};
pub use charclass::CharClassBuilder;
pub use error::BuilderError;
pub use escape::EscapeWriter;
pub use literal::{HexValue, OctalValue, UnicodeValue};
pub use options::{RegexOption, RegexOptions};
