//! Test parsing.
#![cfg(test)]

use super::*;

/// Build the expected parts of a media type.
fn scanned(type_: &str, subtype: &str, parameters: &[(&str, &str)]) -> Scanned {
    Scanned {
        type_: type_.to_owned(),
        subtype: subtype.to_owned(),
        parameters: parameters
            .iter()
            .map(|(name, value)| {
                (ParameterName::new(*name).unwrap(), (*value).to_owned())
            })
            .collect(),
    }
}

/// Test a parsing with the passed parser.
macro_rules! assert_parse {
    ($input:expr, $parser:expr, Err(Blank)) => {
        assert_eq!($parser.parse($input), Err(ParseError::Blank));
    };
    (
        $input:expr,
        $parser:expr,
        Err($kind:ident { $($field:ident: $value:expr),* $(,)? })
    ) => {
        assert_eq!(
            $parser.parse($input),
            Err(ParseError::$kind {
                $($field: $value,)*
                input: $input.to_owned(),
            })
        );
    };
    ($input:expr, $parser:expr, Ok($expected:expr)) => {
        assert_eq!($parser.parse($input), Ok($expected));
    };
}

/// Test parsing a single media type.
macro_rules! assert_single_parse {
    ($input:expr, $($expected:tt)+) => {
        assert_parse!($input, Parser::single(), $($expected)+);
    };
}

/// Test parsing a list of media types.
macro_rules! assert_list_parse {
    ($input:expr, $($expected:tt)+) => {
        assert_parse!($input, Parser::list(), $($expected)+);
    };
}

/// Test both single and list parsers
macro_rules! tests_both {
    ($($name:ident { $input:literal == $($expected:tt)+ })*) => {
        $(
            #[test]
            fn $name() {
                assert_single_parse!($input, $($expected)+);
                assert_list_parse!($input, $($expected)+);
            }
        )*
    };
}

/// Test only the single parser
macro_rules! tests_single {
    ($($name:ident { $input:literal == $($expected:tt)+ })*) => {
        $(
            #[test]
            fn $name() {
                assert_single_parse!($input, $($expected)+);
            }
        )*
    };
}

/// Test only the list parser
macro_rules! tests_list {
    ($($name:ident { $input:literal == $($expected:tt)+ })*) => {
        $(
            #[test]
            fn $name() {
                assert_list_parse!($input, $($expected)+);
            }
        )*
    };
}

use TokenKind::{ParameterValue, Subtype, Type};

// Tests against both single and list parsers.
tests_both! {
    ok_type_subtype {
        "foo/bar" == Ok(vec![scanned("foo", "bar", &[])])
    }
    ok_type_subtype_suffix {
        "image/svg+xml" == Ok(vec![scanned("image", "svg+xml", &[])])
    }
    ok_star_star { "*/*" == Ok(vec![scanned("*", "*", &[])]) }
    ok_type_star { "text/*" == Ok(vec![scanned("text", "*", &[])]) }
    ok_braces_are_token_chars {
        "a{/}b" == Ok(vec![scanned("a{", "}b", &[])])
    }
    ok_mixed_case {
        "Text/HTML; Charset=UTF-8"
            == Ok(vec![scanned("Text", "HTML", &[("Charset", "UTF-8")])])
    }
    err_empty { "" == Err(Blank) }
    err_blank { "   " == Err(Blank) }
    err_blank_tab { "\t\n" == Err(Blank) }
    err_no_slash { "text" == Err(MissingToken { token: Subtype, pos: 4 }) }
    err_no_type { "/plain" == Err(MissingToken { token: Type, pos: 0 }) }
    err_just_slash { "/" == Err(MissingToken { token: Type, pos: 0 }) }
    err_no_subtype { "text/" == Err(MissingToken { token: Subtype, pos: 5 }) }
    err_no_subtype_parameter {
        "text/;a=b" == Err(MissingToken { token: Subtype, pos: 5 })
    }
    err_leading_space {
        " text/plain" == Err(InvalidCharacter { pos: 0, ch: ' ' })
    }
    err_bad_type {
        "a b/abc" == Err(InvalidCharacter { pos: 1, ch: ' ' })
    }
    err_multiple_slash {
        "ab//c" == Err(InvalidCharacter { pos: 3, ch: '/' })
    }
    err_multiple_separate_slash {
        "ab/c/d" == Err(InvalidCharacter { pos: 4, ch: '/' })
    }
    err_non_ascii_type {
        "tëxt/plain" == Err(InvalidCharacter { pos: 1, ch: 'ë' })
    }
    err_space_before_semicolon {
        "text/plain ;a=b" == Err(InvalidCharacter { pos: 10, ch: ' ' })
    }
    err_trailing_space {
        "text/plain " == Err(InvalidCharacter { pos: 10, ch: ' ' })
    }
    err_tab_after_semicolon {
        "a/b;\tk=v" == Err(InvalidCharacter { pos: 4, ch: '\t' })
    }
    err_dangling_semicolon {
        "text/plain;" == Err(MissingToken { token: TokenKind::ParameterName, pos: 11 })
    }
    err_dangling_semicolon_spaces {
        "text/plain;  " == Err(MissingToken { token: TokenKind::ParameterName, pos: 13 })
    }
    ok_one_parameter {
        "a/b; k=v" == Ok(vec![scanned("a", "b", &[("k", "v")])])
    }
    ok_one_parameter_no_space {
        "a/b;k=v" == Ok(vec![scanned("a", "b", &[("k", "v")])])
    }
    ok_one_parameter_many_spaces {
        "a/b;    k=v" == Ok(vec![scanned("a", "b", &[("k", "v")])])
    }
    ok_two_parameters {
        "a/b; k=v;key=value"
            == Ok(vec![scanned("a", "b", &[("k", "v"), ("key", "value")])])
    }
    ok_many_parameters {
        "a/b; a=1; b=2; c=3; d=4" == Ok(vec![scanned(
            "a",
            "b",
            &[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")],
        )])
    }
    ok_repeated_parameter_last_wins {
        "a/b; k=1; j=2; k=3"
            == Ok(vec![scanned("a", "b", &[("k", "3"), ("j", "2")])])
    }
    ok_parameter_quoted {
        r#"a/b; k="v""# == Ok(vec![scanned("a", "b", &[("k", "v")])])
    }
    ok_parameter_quoted_space {
        r#"text/plain; title="a b""#
            == Ok(vec![scanned("text", "plain", &[("title", "a b")])])
    }
    ok_parameter_quoted_specials {
        r#"a/b; k="(;=,/)""# == Ok(vec![scanned("a", "b", &[("k", "(;=,/)")])])
    }
    ok_parameter_quoted_quote {
        r#"a/b; k="a\"b""# == Ok(vec![scanned("a", "b", &[("k", r#"a"b"#)])])
    }
    ok_parameter_quoted_backslash {
        r#"a/b; k="a\\b""# == Ok(vec![scanned("a", "b", &[("k", r#"a\b"#)])])
    }
    ok_parameter_quoted_unicode {
        "a/b; k=\"π 🙂\"" == Ok(vec![scanned("a", "b", &[("k", "π 🙂")])])
    }
    ok_parameter_empty_quoted {
        r#"a/b; k="""# == Ok(vec![scanned("a", "b", &[("k", "")])])
    }
    ok_parameter_quoted_tab {
        "a/b; k=\"\t\"" == Ok(vec![scanned("a", "b", &[("k", "\t")])])
    }
    ok_two_parameters_one_quoted {
        r#"a/b; k="v"; a=b"#
            == Ok(vec![scanned("a", "b", &[("k", "v"), ("a", "b")])])
    }
    err_space_in_parameter_key {
        "a/b; k =v" == Err(InvalidCharacter { pos: 6, ch: ' ' })
    }
    err_space_after_equals {
        "a/b; k= v" == Err(InvalidCharacter { pos: 7, ch: ' ' })
    }
    err_space_after_parameter {
        "a/b; k=v " == Err(InvalidCharacter { pos: 8, ch: ' ' })
    }
    err_missing_parameter_key {
        "a/b; =v" == Err(MissingToken { token: TokenKind::ParameterName, pos: 5 })
    }
    err_parameter_double_equal {
        "a/b; k==v" == Err(InvalidCharacter { pos: 7, ch: '=' })
    }
    err_double_semicolon {
        "a/b;; k=v" == Err(InvalidCharacter { pos: 4, ch: ';' })
    }
    err_parameter_no_value {
        "a/b; k" == Err(MissingToken { token: ParameterValue, pos: 6 })
    }
    err_parameter_empty_value_at_end {
        "a/b; k=" == Err(MissingToken { token: ParameterValue, pos: 7 })
    }
    err_parameter_empty_value {
        "a/b; k=; j=v" == Err(MissingToken { token: ParameterValue, pos: 7 })
    }
    err_parameter_unterminated_quote {
        r#"a/b; k="a"# == Err(UnterminatedQuote { pos: 8 })
    }
    err_parameter_unterminated_escape {
        r#"a/b; k="a\"# == Err(UnterminatedQuote { pos: 9 })
    }
    err_parameter_bad_escape {
        r#"a/b; k="a\nb""# == Err(InvalidCharacter { pos: 10, ch: 'n' })
    }
    err_parameter_quoted_char_after_end {
        "a/b; k=\"a\"b" == Err(InvalidCharacter { pos: 10, ch: 'b' })
    }
    err_parameter_quoted_space_after_end {
        "a/b; k=\"a\" ; j=v" == Err(InvalidCharacter { pos: 10, ch: ' ' })
    }
    err_parameter_quote_in_middle_of_value {
        "a/b; k=a\"b\"" == Err(InvalidCharacter { pos: 8, ch: '"' })
    }
    err_comma_in_type {
        "a,b/c" == Err(InvalidCharacter { pos: 1, ch: ',' })
    }
}

// Tests against only the single parser.
tests_single! {
    single_err_comma_after_subtype {
        "text/plain,text/html" == Err(UnexpectedSeparator { pos: 10 })
    }
    single_err_comma_after_value {
        "text/plain; q=1,text/html" == Err(UnexpectedSeparator { pos: 15 })
    }
    single_err_comma_after_quoted_value {
        r#"a/b; k="v",c/d"# == Err(UnexpectedSeparator { pos: 10 })
    }
    single_err_trailing_comma {
        "text/plain," == Err(UnexpectedSeparator { pos: 10 })
    }
}

// Tests against only the list parser.
tests_list! {
    list_ok_two {
        "text/plain,text/html"
            == Ok(vec![
                scanned("text", "plain", &[]),
                scanned("text", "html", &[]),
            ])
    }
    list_ok_spaces_after_comma {
        "text/plain,   text/html"
            == Ok(vec![
                scanned("text", "plain", &[]),
                scanned("text", "html", &[]),
            ])
    }
    list_ok_parameters {
        "text/html; level=1, text/plain; q=0.5, */*; q=0.1"
            == Ok(vec![
                scanned("text", "html", &[("level", "1")]),
                scanned("text", "plain", &[("q", "0.5")]),
                scanned("*", "*", &[("q", "0.1")]),
            ])
    }
    list_ok_quoted_comma_is_not_separator {
        r#"a/b; k="x,y", c/d"#
            == Ok(vec![
                scanned("a", "b", &[("k", "x,y")]),
                scanned("c", "d", &[]),
            ])
    }
    list_ok_single {
        "text/plain" == Ok(vec![scanned("text", "plain", &[])])
    }
    list_err_trailing_comma {
        "text/plain," == Err(MissingToken { token: Type, pos: 11 })
    }
    list_err_trailing_comma_space {
        "text/plain, " == Err(MissingToken { token: Type, pos: 12 })
    }
    list_err_double_comma {
        "text/plain,,text/html" == Err(InvalidCharacter { pos: 11, ch: ',' })
    }
    list_err_space_before_comma {
        "text/plain ,text/html" == Err(InvalidCharacter { pos: 10, ch: ' ' })
    }
    list_err_second_invalid {
        "text/plain, text" == Err(MissingToken { token: Subtype, pos: 16 })
    }
    list_err_empty_value_before_comma {
        "a/b; k=,c/d" == Err(MissingToken { token: ParameterValue, pos: 7 })
    }
}

#[test]
fn parse_one_single() {
    assert_eq!(
        Parser::single().parse_one("a/b; c=d"),
        Ok(scanned("a", "b", &[("c", "d")])),
    );
}

#[test]
fn parse_one_list_rejects_separator() {
    assert_eq!(
        Parser::list().parse_one("a/b,c/d"),
        Err(ParseError::UnexpectedSeparator {
            pos: 3,
            input: "a/b,c/d".to_owned(),
        }),
    );
}

#[test]
fn default_is_single() {
    assert_eq!(Parser::default(), Parser::single());
}
