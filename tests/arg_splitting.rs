// tests/arg_splitting.rs

use proptest::prelude::*;
use ssh_action::config::parse::split_arg_lines;

// Plain ssh-style words that need no quoting.
fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9_./=@:+-]{0,15}"
}

#[derive(Debug, Clone)]
enum Line {
    Words(Vec<String>),
    Comment(String),
    Blank,
}

fn line() -> impl Strategy<Value = Line> {
    prop_oneof![
        3 => proptest::collection::vec(word(), 1..4).prop_map(Line::Words),
        1 => "[ -~]{0,20}".prop_map(Line::Comment),
        1 => Just(Line::Blank),
    ]
}

proptest! {
    #[test]
    fn comments_and_blank_lines_never_contribute_args(
        lines in proptest::collection::vec(line(), 0..8),
        indent in "[ \t]{0,3}",
    ) {
        let mut raw = String::new();
        let mut expected = Vec::new();

        for l in &lines {
            match l {
                Line::Words(words) => {
                    raw.push_str(&indent);
                    raw.push_str(&words.join(" "));
                    expected.extend(words.iter().cloned());
                }
                Line::Comment(text) => {
                    raw.push_str(&indent);
                    raw.push('#');
                    raw.push_str(text);
                }
                Line::Blank => raw.push_str(&indent),
            }
            raw.push('\n');
        }

        let args = split_arg_lines("args", &raw).unwrap();
        prop_assert_eq!(args, expected);
    }

    #[test]
    fn quoted_words_survive_as_single_args(
        parts in proptest::collection::vec(word(), 1..4),
    ) {
        let joined = parts.join(" ");
        let raw = format!("-o '{joined}'");

        let args = split_arg_lines("args", &raw).unwrap();
        prop_assert_eq!(args, vec!["-o".to_string(), joined]);
    }
}
