use logos::Logos;

/// Represents a classified word of the input.
///
/// The input is first split on whitespace by [`tokenize`]; each resulting word
/// is then classified by [`classify`]. A word is a token only if the whole word
/// matches one of the variants below.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Non-negative integer literal, such as `42`. Kept as digits so that the
    /// builder can report literals that overflow an `i64`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
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
}

impl Token {
    /// Returns `true` for the four operator symbols.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }
}

/// Splits `text` into its whitespace-separated words.
///
/// No validation of the words takes place; that is left to [`classify`] and
/// the tree builder. Empty or whitespace-only input yields no words.
///
/// # Example
/// ```
/// use exprtree::interpreter::lexer::tokenize;
///
/// assert_eq!(tokenize("  3 +\t4\n"), vec!["3", "+", "4"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Classifies a single word.
///
/// Returns `None` unless the entire word lexes as exactly one token, so `3+`
/// or `--` are rejected even though they start with a valid token.
///
/// # Example
/// ```
/// use exprtree::interpreter::lexer::{Token, classify};
///
/// assert_eq!(classify("17"), Some(Token::Number("17".to_string())));
/// assert_eq!(classify("*"), Some(Token::Star));
/// assert_eq!(classify("3+"), None);
/// assert_eq!(classify("-5"), None);
/// ```
#[must_use]
pub fn classify(word: &str) -> Option<Token> {
    let mut lexer = Token::lexer(word);
    let token = lexer.next()?.ok()?;

    if lexer.next().is_some() {
        return None;
    }

    Some(token)
}
