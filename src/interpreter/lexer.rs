use logos::Logos;

/// Represents a lexical token in the source input.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,

    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns the operator character for operator tokens.
    ///
    /// ```
    /// use expreval::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::Slash.operator(), Some('/'));
    /// assert_eq!(Token::Comma.operator(), None);
    /// ```
    #[must_use]
    pub const fn operator(&self) -> Option<char> {
        match self {
            Self::Plus => Some('+'),
            Self::Minus => Some('-'),
            Self::Star => Some('*'),
            Self::Slash => Some('/'),
            Self::Bang => Some('!'),
            _ => None,
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits `source` into tokens paired with their byte offsets.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` for the first slice of input that
/// does not form a token.
///
/// # Example
/// ```
/// use expreval::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x * 2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("x".to_string()), 0),
///                 (Token::Star, 2),
///                 (Token::Number(2.0), 4)]);
///
/// assert!(tokenize("x % 2").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, crate::error::ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(crate::error::ParseError::UnexpectedToken { token:    lexer.slice()
                                                                                  .to_string(),
                                                                   position: lexer.span().start, });
        }
    }

    Ok(tokens)
}
