//! Lexer (tokenizer) for the logic DSL.

use std::fmt;

use crate::error::{HdlError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Token {
    /// Human-readable form used in syntax error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Token types in the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An identifier (module, port, signal or parameter name)
    Identifier,
    /// A reserved word
    Keyword(Keyword),
    /// An unsigned decimal integer
    Number,
    /// A punctuation character
    Symbol(Symbol),
    /// End of file
    Eof,
}

/// Reserved words of the DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Module,
    Wire,
    Bus,
    In,
    Out,
    InOut,
}

impl Keyword {
    /// Look up a keyword by its exact spelling. Keywords are case-sensitive.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "module" => Some(Self::Module),
            "wire" => Some(Self::Wire),
            "bus" => Some(Self::Bus),
            "In" => Some(Self::In),
            "Out" => Some(Self::Out),
            "InOut" => Some(Self::InOut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Module => "module",
            Self::Wire => "wire",
            Self::Bus => "bus",
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "InOut",
        }
    }
}

/// Punctuation recognized by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LAngle,
    RAngle,
    Comma,
    Semicolon,
}

impl Symbol {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            '[' => Some(Self::LBracket),
            ']' => Some(Self::RBracket),
            '<' => Some(Self::LAngle),
            '>' => Some(Self::RAngle),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::LBrace => '{',
            Self::RBrace => '}',
            Self::LParen => '(',
            Self::RParen => ')',
            Self::LBracket => '[',
            Self::RBracket => ']',
            Self::LAngle => '<',
            Self::RAngle => '>',
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Keyword(kw) => write!(f, "'{}'", kw.as_str()),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Symbol(sym) => write!(f, "'{}'", sym.as_char()),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// Tokenize DSL source text.
///
/// The returned lexer is a lazy iterator over tokens. It yields a single
/// [`TokenKind::Eof`] token at the end of input and stops after the first
/// error. Calling `tokenize` again restarts from the beginning.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lexer for tokenizing DSL input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments()?;

        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.chars.peek().copied() {
            Some(ch) => ch,
            None => {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line: start_line,
                    column: start_column,
                });
            }
        };

        let (kind, text) = if let Some(sym) = Symbol::from_char(ch) {
            self.advance();
            (TokenKind::Symbol(sym), ch.to_string())
        } else if ch.is_ascii_digit() {
            let text = self.read_number();
            if text.parse::<u32>().is_err() {
                return Err(HdlError::lex(
                    start_line,
                    start_column,
                    format!("integer literal '{}' is too large", text),
                ));
            }
            (TokenKind::Number, text)
        } else if ch.is_ascii_alphabetic() || ch == '_' {
            let text = self.read_identifier();
            match Keyword::from_str(&text) {
                Some(kw) => (TokenKind::Keyword(kw), text),
                None => (TokenKind::Identifier, text),
            }
        } else {
            return Err(HdlError::lex(
                start_line,
                start_column,
                format!("unexpected character '{}'", ch),
            ));
        };

        Ok(Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        })
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<()> {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '/' {
                let (line, column) = (self.line, self.column);
                self.advance();
                match self.chars.peek() {
                    Some(&'/') => {
                        while let Some(&c) = self.chars.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    }
                    Some(&'*') => {
                        self.advance();
                        self.skip_block_comment(line, column)?;
                    }
                    _ => return Err(HdlError::lex(line, column, "unexpected character '/'")),
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    fn skip_block_comment(&mut self, line: usize, column: usize) -> Result<()> {
        let mut prev = '\0';
        while let Some(ch) = self.advance() {
            if prev == '*' && ch == '/' {
                return Ok(());
            }
            prev = ch;
        }
        Err(HdlError::lex(line, column, "unterminated block comment"))
    }

    fn read_identifier(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_number(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(tok) => {
                log::trace!("token {:?} '{}' at {}:{}", tok.kind, tok.text, tok.line, tok.column);
                if tok.kind == TokenKind::Eof {
                    self.finished = true;
                }
            }
            Err(_) => self.finished = true,
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).map(|t| t.unwrap().kind).collect()
    }

    #[test]
    fn test_lexer_module_header() {
        assert_eq!(
            kinds("module Adder<N>(In A[N])"),
            vec![
                TokenKind::Keyword(Keyword::Module),
                TokenKind::Identifier,
                TokenKind::Symbol(Symbol::LAngle),
                TokenKind::Identifier,
                TokenKind::Symbol(Symbol::RAngle),
                TokenKind::Symbol(Symbol::LParen),
                TokenKind::Keyword(Keyword::In),
                TokenKind::Identifier,
                TokenKind::Symbol(Symbol::LBracket),
                TokenKind::Identifier,
                TokenKind::Symbol(Symbol::RBracket),
                TokenKind::Symbol(Symbol::RParen),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let toks: Vec<Token> = tokenize("in Out inout InOut Module_1 _x9")
            .map(|t| t.unwrap())
            .collect();
        assert_eq!(toks[0].kind, TokenKind::Identifier);
        assert_eq!(toks[1].kind, TokenKind::Keyword(Keyword::Out));
        assert_eq!(toks[2].kind, TokenKind::Identifier);
        assert_eq!(toks[3].kind, TokenKind::Keyword(Keyword::InOut));
        assert_eq!(toks[4].kind, TokenKind::Identifier);
        assert_eq!(toks[5].text, "_x9");
    }

    #[test]
    fn test_positions_and_comments() {
        let input = "// header\nmodule /* inline\n comment */ A {\n  wire w;\n}";
        let toks: Vec<Token> = tokenize(input).map(|t| t.unwrap()).collect();

        assert_eq!((toks[0].text.as_str(), toks[0].line, toks[0].column), ("module", 2, 1));
        assert_eq!((toks[1].text.as_str(), toks[1].line, toks[1].column), ("A", 3, 13));
        assert_eq!((toks[3].text.as_str(), toks[3].line, toks[3].column), ("wire", 4, 3));

        let eof = toks.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!((eof.line, eof.column), (5, 2));
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let source = "bus Data[16];";
        let first: Vec<Token> = tokenize(source).map(|t| t.unwrap()).collect();
        let second: Vec<Token> = tokenize(source).map(|t| t.unwrap()).collect();
        assert_eq!(first, second);
        assert_eq!(first[3].kind, TokenKind::Number);
        assert_eq!(first[3].text, "16");
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = tokenize("module A {\n  wire $x;\n}");
        let err = lexer.find_map(|t| t.err()).unwrap();
        match err {
            HdlError::Lex { line, column, .. } => assert_eq!((line, column), (2, 8)),
            other => panic!("unexpected error: {other}"),
        }
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = tokenize("module A /* never closed").find_map(|t| t.err()).unwrap();
        assert_eq!(err.category(), "LexError");
        assert!(err.to_string().contains("unterminated block comment"));
    }

    #[test]
    fn test_number_overflow() {
        let err = tokenize("99999999999").find_map(|t| t.err()).unwrap();
        assert!(err.to_string().contains("too large"));
    }
}
