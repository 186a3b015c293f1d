// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

// Syntax Summary:
//
// - .              any_char
// - [...] [^...]   character_class
// - (...)          group
// - (?<name>...)   named_group
// - (?:...)        non_capturing_group
// - (?=...)        positive_look_ahead
// - (?!...)        negative_look_ahead
// - (?<=...)       positive_look_behind
// - (?<!...)       negative_look_behind
// - (?>...)        atomic_group
// - ? * + {n} {n,} {n,m}  quantifiers, `*_lazy` append an extra `?`
// - |              or
// - ^ $ \b \B \A \G \Z \z  anchors and boundaries
// - \R             unicode_line_break
// - \Q \E          start_quoting, end_quoting
// - \k<name> \n    back references
//
// Scoped constructs take a closure which runs against the same builder
// before the closing `)` is appended, so the nesting of the emitted
// groups always follows the nesting of the closures.

use std::ops::RangeInclusive;

use fancy_regex::Regex;

use crate::{
    buffer::PatternText,
    charclass::CharClassBuilder,
    error::BuilderError,
    escape::{escape_pattern_char, escape_pattern_literal, EscapeWriter},
    options::RegexOptions,
    token::{Anchor, GroupKind, PresetCharSet, GROUP_END},
};

/// Assembles a pattern from builder operations.
#[derive(Debug, Default)]
pub struct PatternBuilder {
    text: PatternText,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn any_char(&mut self) -> &mut Self {
        self.text.push('.');
        self
    }

    pub fn literal_char(&mut self, c: char) -> &mut Self {
        let mut escaped = String::new();
        escape_pattern_char(c, &mut escaped);
        self.text.push_str(&escaped);
        self
    }

    pub fn literal_string(&mut self, s: &str) -> &mut Self {
        self.text.push_str(&escape_pattern_literal(s));
        self
    }

    pub fn character_class<F>(&mut self, negative: bool, f: F) -> &mut Self
    where
        F: FnOnce(&mut CharClassBuilder),
    {
        let mut char_class = CharClassBuilder::new(negative);
        f(&mut char_class);
        self.text.append(&char_class.render_pattern_text());
        self
    }

    /// Open `kind`, run `f` against this builder, then close with `)`.
    pub fn scoped<F>(&mut self, kind: GroupKind, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.text.push_str(&kind.to_string());
        f(self);
        self.text.push(GROUP_END);
        log::trace!("group closed: {:?}", kind);
        self
    }

    pub fn group<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::Capturing, f)
    }

    pub fn named_group<F>(&mut self, name: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::NamedCapture(name.to_owned()), f)
    }

    pub fn non_capturing_group<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::NonCapturing, f)
    }

    pub fn positive_look_ahead<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::LookAhead, f)
    }

    pub fn negative_look_ahead<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::LookAheadNegative, f)
    }

    pub fn positive_look_behind<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::LookBehind, f)
    }

    pub fn negative_look_behind<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::LookBehindNegative, f)
    }

    /// Independent, non-backtracking group.
    pub fn atomic_group<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.scoped(GroupKind::Atomic, f)
    }

    // Greedy quantifiers

    pub fn optional(&mut self) -> &mut Self {
        self.text.push('?');
        self
    }

    pub fn zero_or_more(&mut self) -> &mut Self {
        self.text.push('*');
        self
    }

    pub fn one_or_more(&mut self) -> &mut Self {
        self.text.push('+');
        self
    }

    pub fn exactly(&mut self, n: usize) -> &mut Self {
        self.text.push_str(&format!("{{{}}}", n));
        self
    }

    pub fn at_least(&mut self, n: usize) -> &mut Self {
        self.text.push_str(&format!("{{{},}}", n));
        self
    }

    pub fn between(&mut self, from: usize, to_included: usize) -> &mut Self {
        self.text.push_str(&format!("{{{},{}}}", from, to_included));
        self
    }

    pub fn between_range(&mut self, range: RangeInclusive<usize>) -> &mut Self {
        self.between(*range.start(), *range.end())
    }

    // Lazy quantifiers

    pub fn optional_lazy(&mut self) -> &mut Self {
        self.optional().optional()
    }

    pub fn zero_or_more_lazy(&mut self) -> &mut Self {
        self.zero_or_more().optional()
    }

    pub fn one_or_more_lazy(&mut self) -> &mut Self {
        self.one_or_more().optional()
    }

    pub fn at_least_lazy(&mut self, n: usize) -> &mut Self {
        self.at_least(n).optional()
    }

    pub fn between_lazy(&mut self, from: usize, to_included: usize) -> &mut Self {
        self.between(from, to_included).optional()
    }

    pub fn or(&mut self) -> &mut Self {
        self.text.push('|');
        self
    }

    // Anchors and boundaries

    pub fn anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.text.push_str(&anchor.to_string());
        self
    }

    pub fn start_of_line(&mut self) -> &mut Self {
        self.anchor(Anchor::StartOfLine)
    }

    pub fn end_of_line(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfLine)
    }

    pub fn word_boundary(&mut self) -> &mut Self {
        self.anchor(Anchor::WordBoundary)
    }

    pub fn non_word_boundary(&mut self) -> &mut Self {
        self.anchor(Anchor::NonWordBoundary)
    }

    pub fn start_of_input(&mut self) -> &mut Self {
        self.anchor(Anchor::StartOfInput)
    }

    pub fn end_of_previous_match(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfPreviousMatch)
    }

    pub fn end_of_input_before_final_terminator(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfInputBeforeFinalTerminator)
    }

    pub fn end_of_input(&mut self) -> &mut Self {
        self.anchor(Anchor::EndOfInput)
    }

    pub fn unicode_line_break(&mut self) -> &mut Self {
        self.text.push_str("\\R");
        self
    }

    /// `\Q`, the text up to `end_quoting` is taken literally by the engine.
    pub fn start_quoting(&mut self) -> &mut Self {
        self.text.push_str("\\Q");
        self
    }

    /// `\E`
    pub fn end_quoting(&mut self) -> &mut Self {
        self.text.push_str("\\E");
        self
    }

    /// `\k<name>`
    pub fn named_group_reference(&mut self, name: &str) -> &mut Self {
        self.text.push_str(&format!("\\k<{}>", name));
        self
    }

    /// `\n`, where `n` is the index of a capturing group starting from 1.
    pub fn group_reference(&mut self, index: usize) -> &mut Self {
        self.text.push_str(&format!("\\{}", index));
        self
    }

    pub fn render_as_text(&self) -> String {
        self.text.text().to_owned()
    }

    /// Compile the assembled text with the given engine options.
    ///
    /// `\h`, `\H`, `\v` and `\V` are handed to the engine as explicit
    /// character sets, the text returned by `render_as_text` is unchanged.
    pub fn render_as_regex(&self, options: &RegexOptions) -> Result<Regex, BuilderError> {
        if let Some(message) = self.text.unsupported() {
            log::debug!("pattern not compiled: {}", message);
            return Err(BuilderError::PatternCompilation {
                pattern: format!("{}{}", options, self.text.text()),
                message: message.to_owned(),
            });
        }

        let pattern = format!("{}{}", options, self.text.engine_text());
        log::debug!("compiling pattern: {}", pattern);

        match Regex::new(&pattern) {
            Ok(regex) => Ok(regex),
            Err(e) => {
                log::debug!("pattern rejected by the engine: {}", e);
                Err(BuilderError::PatternCompilation {
                    pattern,
                    message: e.to_string(),
                })
            }
        }
    }
}

impl EscapeWriter for PatternBuilder {
    fn push_token(&mut self, token: &str) {
        self.text.push_str(token);
    }

    fn preset(&mut self, preset_char_set: PresetCharSet) -> &mut Self {
        let token = preset_char_set.to_string();
        match preset_char_set.engine_members() {
            Some((members, negative)) => {
                let engine_token = if negative {
                    format!("[^{}]", members)
                } else {
                    format!("[{}]", members)
                };
                self.text.push_translated(&token, &engine_token);
            }
            None => self.text.push_str(&token),
        }
        self
    }
}

/// Run `f` against a new builder and return the pattern text.
pub fn make_pattern_string<F>(f: F) -> String
where
    F: FnOnce(&mut PatternBuilder),
{
    let mut builder = PatternBuilder::new();
    f(&mut builder);
    builder.render_as_text()
}

/// Run `f` against a new builder and compile the pattern.
///
/// `options` is a single `RegexOption` or a `RegexOptions` set.
pub fn make_regex<O, F>(options: O, f: F) -> Result<Regex, BuilderError>
where
    O: Into<RegexOptions>,
    F: FnOnce(&mut PatternBuilder),
{
    let mut builder = PatternBuilder::new();
    f(&mut builder);
    builder.render_as_regex(&options.into())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        charclass::CharClassBuilder,
        error::BuilderError,
        escape::EscapeWriter,
        literal::{HexValue, OctalValue, UnicodeValue},
        options::{RegexOption, RegexOptions},
        token::Property,
    };

    use super::{make_pattern_string, make_regex, PatternBuilder};

    // 25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?
    fn octet(b: &mut PatternBuilder) {
        b.literal_string("25")
            .character_class(false, |c| {
                c.range('0', '5');
            })
            .or()
            .literal_char('2')
            .character_class(false, |c| {
                c.range('0', '4');
            })
            .character_class(false, |c| {
                c.range('0', '9');
            })
            .or()
            .character_class(false, |c| {
                c.literal_string("01");
            })
            .optional()
            .character_class(false, |c| {
                c.range('0', '9');
            })
            .character_class(false, |c| {
                c.range('0', '9');
            })
            .optional();
    }

    #[test]
    fn test_email() {
        let text = make_pattern_string(|b| {
            b.start_of_line()
                .character_class(false, |c| {
                    c.range('a', 'z')
                        .range('A', 'Z')
                        .range('0', '9')
                        .literal_string("+_.-");
                })
                .one_or_more()
                .literal_char('@')
                .character_class(false, |c| {
                    c.range('a', 'z')
                        .range('A', 'Z')
                        .range('0', '9')
                        .literal_string(".-");
                })
                .one_or_more()
                .end_of_line();
        });

        assert_eq!(text, r"^[a-zA-Z0-9+_.-]+@[a-zA-Z0-9.-]+$");
    }

    #[test]
    fn test_hex_color() {
        let text = make_pattern_string(|b| {
            b.literal_char('#')
                .group(|g| {
                    g.character_class(false, |c| {
                        c.ranges(&[('a', 'f'), ('A', 'F')]);
                    })
                    .or()
                    .character_class(false, |c| {
                        c.range('0', '9');
                    });
                })
                .between(3, 6);
        });

        assert_eq!(text, "#([a-fA-F]|[0-9]){3,6}");
    }

    #[test]
    fn test_ipv4() {
        let text = make_pattern_string(|b| {
            b.word_boundary()
                .non_capturing_group(|g| {
                    g.non_capturing_group(octet).literal_char('.');
                })
                .exactly(3)
                .non_capturing_group(octet)
                .word_boundary();
        });

        assert_eq!(
            text,
            r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b"
        );
    }

    #[test]
    fn test_password() {
        let text = make_pattern_string(|b| {
            b.group(|g| {
                g.positive_look_ahead(|l| {
                    l.character_class(false, |c| {
                        c.range('A', 'Z').range('a', 'z');
                    })
                    .zero_or_more()
                    .character_class(false, |c| {
                        c.range('0', '9');
                    });
                })
                .positive_look_ahead(|l| {
                    l.character_class(false, |c| {
                        c.range('0', '9').range('A', 'Z');
                    })
                    .zero_or_more()
                    .character_class(false, |c| {
                        c.range('a', 'z');
                    });
                })
                .positive_look_ahead(|l| {
                    l.character_class(false, |c| {
                        c.range('0', '9').range('a', 'z');
                    })
                    .zero_or_more()
                    .character_class(false, |c| {
                        c.range('A', 'Z');
                    });
                });
            })
            .at_least(8);
        });

        assert_eq!(
            text,
            "((?=[A-Za-z]*[0-9])(?=[0-9A-Z]*[a-z])(?=[0-9a-z]*[A-Z])){8,}"
        );
    }

    #[test]
    fn test_literal() {
        for c in ['.', '*', '+', '?', '{', '}', '[', ']', '\\', '$', '^'] {
            assert_eq!(
                make_pattern_string(|b| {
                    b.literal_char(c);
                }),
                format!("\\{}", c)
            );

            assert_eq!(
                make_pattern_string(|b| {
                    b.literal_string(&c.to_string());
                }),
                format!("\\{}", c)
            );
        }

        assert_eq!(
            make_pattern_string(|b| {
                b.literal_char('a').literal_char('文').literal_char('-');
            }),
            "a文-"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.literal_string("1.5$ (^_^) [x]");
            }),
            r"1\.5\$ (\^_\^) \[x\]"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.any_char().zero_or_more();
            }),
            ".*"
        );
    }

    #[test]
    fn test_character_class() {
        assert_eq!(
            make_pattern_string(|b| {
                b.character_class(true, |c| {
                    c.range('a', 'z').literal_char('^');
                });
            }),
            r"[^a-z\^]"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.character_class(false, |c| {
                    c.range('a', 'z')
                        .intersection(true, |i| {
                            i.range('a', 'c');
                        })
                        .nested_class(|n| {
                            n.digit();
                        });
                });
            }),
            r"[a-z&&[^a-c][\d]]"
        );
    }

    #[test]
    fn test_groups() {
        assert_eq!(
            make_pattern_string(|b| {
                b.named_group("year", |g| {
                    g.digit().exactly(4);
                })
                .literal_char('-')
                .named_group("month", |g| {
                    g.digit().exactly(2);
                });
            }),
            r"(?<year>\d{4})-(?<month>\d{2})"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.negative_look_behind(|g| {
                    g.literal_char('$');
                })
                .positive_look_behind(|g| {
                    g.literal_char('#');
                })
                .digit()
                .one_or_more()
                .negative_look_ahead(|g| {
                    g.literal_char('%');
                })
                .atomic_group(|g| {
                    g.word_char().one_or_more();
                });
            }),
            r"(?<!\$)(?<=#)\d+(?!%)(?>\w+)"
        );

        // empty scope
        assert_eq!(
            make_pattern_string(|b| {
                b.group(|_| {}).non_capturing_group(|_| {});
            }),
            "()(?:)"
        );
    }

    #[test]
    fn test_nesting_is_well_formed() {
        fn nest(b: &mut PatternBuilder, depth: usize) {
            if depth == 0 {
                b.character_class(false, |c| {
                    c.nested_class(|n| {
                        n.intersection(false, |i| {
                            i.literal_char('x');
                        });
                    });
                });
                return;
            }

            match depth % 4 {
                0 => b.group(|g| nest(g, depth - 1)),
                1 => b.named_group("n", |g| nest(g, depth - 1)),
                2 => b.positive_look_ahead(|g| nest(g, depth - 1)),
                _ => b.atomic_group(|g| nest(g, depth - 1)),
            };
        }

        let text = make_pattern_string(|b| nest(b, 12));

        // the closing tokens follow the reverse order of the opening tokens
        let mut stack = vec![];
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => {
                    chars.next();
                }
                '(' | '[' => stack.push(c),
                ')' => assert_eq!(stack.pop(), Some('(')),
                ']' => assert_eq!(stack.pop(), Some('[')),
                _ => {}
            }
        }
        assert!(stack.is_empty());

        assert!(text.starts_with("((?>(?=(?<n>((?>"));
        assert!(text.ends_with(&format!("[[&&[x]]]{}", ")".repeat(12))));
    }

    #[test]
    fn test_quantifiers() {
        assert_eq!(
            make_pattern_string(|b| {
                b.literal_char('a')
                    .optional()
                    .literal_char('b')
                    .zero_or_more()
                    .literal_char('c')
                    .one_or_more()
                    .literal_char('d')
                    .exactly(2)
                    .literal_char('e')
                    .at_least(3)
                    .literal_char('f')
                    .between(1, 5)
                    .literal_char('g')
                    .between_range(0..=9);
            }),
            "a?b*c+d{2}e{3,}f{1,5}g{0,9}"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.any_char()
                    .optional_lazy()
                    .any_char()
                    .zero_or_more_lazy()
                    .any_char()
                    .one_or_more_lazy()
                    .any_char()
                    .at_least_lazy(2)
                    .any_char()
                    .between_lazy(2, 4);
            }),
            ".??.*?.+?.{2,}?.{2,4}?"
        );
    }

    #[test]
    fn test_anchors_and_escapes() {
        assert_eq!(
            make_pattern_string(|b| {
                b.start_of_input()
                    .end_of_previous_match()
                    .start_of_line()
                    .word_boundary()
                    .non_word_boundary()
                    .unicode_line_break()
                    .end_of_line()
                    .end_of_input_before_final_terminator()
                    .end_of_input();
            }),
            r"\A\G^\b\B\R$\Z\z"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.octal(OctalValue::new(3, 7, 7).unwrap())
                    .hex(HexValue::new('f', 'F').unwrap())
                    .unicode(UnicodeValue::new('0', '0', 'e', '9').unwrap())
                    .tab()
                    .escape()
                    .control('H');
            }),
            r"\0377\xfF\u00e9\t\e\cH"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.property(Property::Upper)
                    .non_property(Property::Greek)
                    .property(Property::JavaWhitespace)
                    .non_digit();
            }),
            r"\p{Upper}\P{InGreek}\p{javaWhitespace}\D"
        );

        assert_eq!(
            make_pattern_string(|b| {
                b.start_quoting()
                    .literal_string("a.b")
                    .end_quoting()
                    .named_group("q", |g| {
                        g.any_char();
                    })
                    .named_group_reference("q")
                    .group_reference(1);
            }),
            r"\Qa\.b\E(?<q>.)\k<q>\1"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        fn program(b: &mut PatternBuilder) {
            b.start_of_line()
                .group(|g| {
                    g.character_class(true, |c: &mut CharClassBuilder| {
                        c.whitespace();
                    })
                    .one_or_more();
                })
                .or()
                .literal_string("x+y");
        }

        let first = make_pattern_string(program);
        let second = make_pattern_string(program);
        assert_eq!(first, second);

        let mut builder = PatternBuilder::new();
        program(&mut builder);
        assert_eq!(builder.render_as_text(), builder.render_as_text());
        assert_eq!(builder.render_as_text(), first);
    }

    #[test]
    fn test_render_as_regex() {
        let email = make_regex(RegexOptions::new(), |b| {
            b.start_of_line()
                .character_class(false, |c| {
                    c.range('a', 'z').range('0', '9').literal_string("+_.-");
                })
                .one_or_more()
                .literal_char('@')
                .character_class(false, |c| {
                    c.range('a', 'z').range('0', '9').literal_string(".-");
                })
                .one_or_more()
                .end_of_line();
        })
        .unwrap();

        assert!(email.is_match("john.doe@example.com").unwrap());
        assert!(!email.is_match("JOHN@EXAMPLE.COM").unwrap());
        assert!(!email.is_match("john@@example.com").unwrap());

        let mut builder = PatternBuilder::new();
        builder
            .literal_char('#')
            .group(|g| {
                g.character_class(false, |c| {
                    c.range('a', 'f');
                })
                .or()
                .digit();
            })
            .between(3, 6)
            .end_of_line();

        let plain = builder.render_as_regex(&RegexOptions::new()).unwrap();
        assert!(plain.is_match("#ff0000").unwrap());
        assert!(!plain.is_match("#FF0000").unwrap());

        let ignore_case = builder
            .render_as_regex(&RegexOptions::from(RegexOption::IgnoreCase))
            .unwrap();
        assert!(ignore_case.is_match("#FF0000").unwrap());
        assert_eq!(builder.render_as_text(), r"#([a-f]|\d){3,6}$");
    }

    #[test]
    fn test_render_as_regex_with_fancy_features() {
        let repeated_word = make_regex(RegexOption::IgnoreCase, |b| {
            b.word_boundary()
                .named_group("word", |g| {
                    g.word_char().one_or_more();
                })
                .whitespace()
                .named_group_reference("word")
                .word_boundary();
        })
        .unwrap();

        assert!(repeated_word.is_match("it is is fine").unwrap());
        assert!(!repeated_word.is_match("it is fine").unwrap());

        let price = make_regex(RegexOptions::new(), |b| {
            b.positive_look_behind(|g| {
                g.literal_char('$');
            })
            .digit()
            .one_or_more()
            .negative_look_ahead(|g| {
                g.literal_char('%');
            });
        })
        .unwrap();

        let found = price.find("cost: $125").unwrap().unwrap();
        assert_eq!(found.as_str(), "125");
        assert!(!price.is_match("125%").unwrap());
    }

    #[test]
    fn test_render_as_regex_with_whitespace_presets() {
        let horizontal = make_regex(RegexOptions::new(), |b| {
            b.start_of_line().horizontal_whitespace().end_of_line();
        })
        .unwrap();

        assert!(horizontal.is_match(" ").unwrap());
        assert!(horizontal.is_match("\t").unwrap());
        assert!(horizontal.is_match("\u{3000}").unwrap());
        assert!(!horizontal.is_match("a").unwrap());
        assert!(!horizontal.is_match("F").unwrap());
        assert!(!horizontal.is_match("\n").unwrap());

        let vertical = make_regex(RegexOptions::new(), |b| {
            b.start_of_line().vertical_whitespace().end_of_line();
        })
        .unwrap();

        assert!(vertical.is_match("\n").unwrap());
        assert!(vertical.is_match("\r").unwrap());
        assert!(vertical.is_match("\u{0b}").unwrap());
        assert!(!vertical.is_match(" ").unwrap());

        let non_horizontal = make_regex(RegexOption::Comments, |b| {
            b.start_of_line()
                .non_horizontal_whitespace()
                .non_vertical_whitespace()
                .end_of_line();
        })
        .unwrap();

        assert!(non_horizontal.is_match("ab").unwrap());
        assert!(!non_horizontal.is_match(" b").unwrap());
        assert!(!non_horizontal.is_match("a\n").unwrap());

        // inside a character class
        let mut builder = PatternBuilder::new();
        builder
            .start_of_line()
            .character_class(false, |c| {
                c.horizontal_whitespace().digit();
            })
            .one_or_more()
            .end_of_line();

        assert_eq!(builder.render_as_text(), r"^[\h\d]+$");

        let regex = builder.render_as_regex(&RegexOptions::new()).unwrap();
        assert!(regex.is_match("1 2\t3").unwrap());
        assert!(!regex.is_match("1a2").unwrap());

        // negated presets can not be expressed inside a class
        let result = make_regex(RegexOptions::new(), |b| {
            b.character_class(false, |c| {
                c.nested_class(|n| {
                    n.non_vertical_whitespace();
                });
            });
        });

        assert!(matches!(
            result,
            Err(BuilderError::PatternCompilation { ref pattern, .. }) if pattern == r"[[\V]]"
        ));
    }

    #[test]
    fn test_render_as_regex_error() {
        let result = make_regex(RegexOptions::new(), |b| {
            b.named_group_reference("missing");
        });

        assert!(matches!(
            result,
            Err(BuilderError::PatternCompilation { ref pattern, .. }) if pattern == r"\k<missing>"
        ));

        // a property name the engine does not know
        let result = make_regex(RegexOption::Multiline, |b| {
            b.property(Property::JavaLowerCase);
        });

        assert!(matches!(
            result,
            Err(BuilderError::PatternCompilation { ref pattern, .. }) if pattern == r"(?m)\p{javaLowerCase}"
        ));
    }
}
