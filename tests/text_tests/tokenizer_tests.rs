//! Tokenizer Tests

use pircs::text::{tokenize, Tokens};

#[test]
fn test_compact_command_tokens() {
    let tokens: Vec<&str> =
        tokenize(r#"{"com":"S","par":"m","int":"t","mod":"0","val":150}"#).collect();

    assert_eq!(
        tokens,
        vec![
            r#""com""#, r#""S""#, r#""par""#, r#""m""#, r#""int""#, r#""t""#, r#""mod""#,
            r#""0""#, r#""val""#, "150",
        ]
    );
}

#[test]
fn test_delimiter_runs_are_one_boundary() {
    let tokens: Vec<&str> = tokenize("{{a::b,,,c}}").collect();
    assert_eq!(tokens, vec!["a", "b", "c"]);
}

#[test]
fn test_whitespace_is_kept_in_tokens() {
    let tokens: Vec<&str> = tokenize(r#"{ "com": "S" }"#).collect();
    assert_eq!(tokens, vec![r#" "com""#, r#" "S" "#]);
}

#[test]
fn test_only_delimiters() {
    assert_eq!(tokenize("{,:}").count(), 0);
    assert_eq!(tokenize("").count(), 0);
}

#[test]
fn test_quoted_colon_splits_value() {
    let tokens: Vec<&str> = tokenize(r#"{"com":":"}"#).collect();
    assert_eq!(tokens, vec![r#""com""#, r#"""#, r#"""#]);
}

#[test]
fn test_exhausted_iterator_stays_exhausted() {
    let mut tokens = Tokens::new("a}");
    assert_eq!(tokens.next(), Some("a"));
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}
