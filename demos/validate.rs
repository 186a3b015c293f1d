// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_dsl::{make_regex, EscapeWriter, RegexOption, RegexOptions};

pub fn main() {
    date();
    email();
}

fn date() {
    let re = make_regex(RegexOptions::new(), |b| {
        b.start_of_line()
            .digit()
            .exactly(4)
            .literal_char('-')
            .digit()
            .exactly(2)
            .literal_char('-')
            .digit()
            .exactly(2)
            .end_of_line();
    })
    .unwrap();

    println!("{}", re.as_str()); // ^\d{4}-\d{2}-\d{2}$
    println!("{}", re.is_match("2025-04-22").unwrap()); // should be true
    println!("{}", re.is_match("04-22").unwrap()); // should be false
}

fn email() {
    let re = make_regex(RegexOption::IgnoreCase, |b| {
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

    println!("{}", re.is_match("John.Doe@Example.com").unwrap()); // should be true
    println!("{}", re.is_match("john@@example.com").unwrap()); // should be false
}
