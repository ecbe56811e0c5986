use falsey::{
    error::LexErrorKind,
    interpreter::lexer::{TokenKind, lex, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap_or_else(|e| panic!("Script did not lex: {e}"))
                    .into_iter()
                    .map(|t| t.kind)
                    .collect()
}

#[test]
fn literal_span_excludes_quotes() {
    let source = "1 \"a b\" 2";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Literal);
    assert_eq!(tokens[1].lexeme(source), "a b");
    assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
}

#[test]
fn empty_literal_is_a_token() {
    let source = "\"\"";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].lexeme(source), "");
}

#[test]
fn positions_follow_newlines() {
    let tokens = tokenize("1\n 23\n\n\"x\ny\" 4").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.column)).collect();

    assert_eq!(positions, [(1, 1), (2, 2), (4, 1), (5, 4)]);
}

#[test]
fn columns_count_characters_not_bytes() {
    let tokens = tokenize("1ø2§3").unwrap();
    let columns: Vec<_> = tokens.iter().map(|t| t.column).collect();

    assert_eq!(columns, [1, 2, 3, 4, 5]);
}

#[test]
fn numbers_stop_at_non_digits() {
    let source = "12.34a";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [TokenKind::Number, TokenKind::Dot, TokenKind::Number, TokenKind::Identifier]);
    assert_eq!(tokens[0].lexeme(source), "12");
    assert_eq!(tokens[2].lexeme(source), "34");
}

#[test]
fn identifiers_take_trailing_digits() {
    let source = "count2 x1y;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].lexeme(source), "count2");
    assert_eq!(tokens[1].lexeme(source), "x1y");
    assert_eq!(tokens[2].kind, TokenKind::Semicolon);
}

#[test]
fn every_operator_has_a_kind() {
    assert_eq!(kinds("+-*/=>&|$%\\@?!~.,_#^:;[]ø€§"),
               [TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Slash,
                TokenKind::Equals,
                TokenKind::GreaterThan,
                TokenKind::Ampersand,
                TokenKind::Bar,
                TokenKind::Dollar,
                TokenKind::Percent,
                TokenKind::Backslash,
                TokenKind::At,
                TokenKind::Question,
                TokenKind::Exclamation,
                TokenKind::Tilde,
                TokenKind::Dot,
                TokenKind::Comma,
                TokenKind::Underscore,
                TokenKind::Hash,
                TokenKind::Caret,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::OpenBracket,
                TokenKind::CloseBracket,
                TokenKind::Pick,
                TokenKind::SectionDump]);
}

#[test]
fn identifiers_accept_unicode_letters_but_not_pick() {
    let source = "ab1 é ø aø straße";
    let tokens = tokenize(source).unwrap();
    let listing: Vec<_> =
        tokens.iter().map(|t| (t.kind, t.lexeme(source), t.column)).collect();

    assert_eq!(listing,
               [(TokenKind::Identifier, "ab1", 1),
                (TokenKind::Identifier, "é", 5),
                (TokenKind::Pick, "ø", 7),
                (TokenKind::Identifier, "a", 9),
                (TokenKind::Pick, "ø", 10),
                (TokenKind::Identifier, "straße", 12)]);
}

#[test]
fn nested_comments_are_skipped() {
    assert_eq!(kinds("{ a { b } c } 1 {}{{}}"), [TokenKind::Number]);
}

#[test]
fn comment_errors_point_at_the_brace() {
    let err = tokenize("1\n  { { }").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!((err.location.line, err.location.column), (2, 3));

    let err = tokenize("\"{\" }").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnmatchedCommentClose);
    assert_eq!((err.location.line, err.location.column), (1, 5));
}

#[test]
fn unterminated_literal_points_at_the_quote() {
    let err = tokenize("1 2 \"abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedLiteral);
    assert_eq!(err.to_string(),
               "Unclosed double-quoted string literal. @ line 1, column 5");
}

#[test]
fn stream_is_lazy_and_stops_after_first_error() {
    let mut stream = lex("1 } 2 }");

    assert_eq!(stream.next().unwrap().unwrap().kind, TokenKind::Number);
    assert!(stream.next().unwrap().is_err());
    assert!(stream.next().is_none());
}
