use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORDS: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("const", TokenKind::Const);
        map.insert("type", TokenKind::Type);
        map.insert("var", TokenKind::Var);
        map.insert("integer", TokenKind::Integer);
        map.insert("char", TokenKind::Char);
        map.insert("array", TokenKind::Array);
        map.insert("of", TokenKind::Of);
        map.insert("function", TokenKind::Function);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("call", TokenKind::Call);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("to", TokenKind::To);
        map
    };
}

/// Exact, case-sensitive keyword lookup.
pub fn check_keyword(spelling: &str) -> Option<TokenKind> {
    KEYWORDS.get(spelling).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Ident,
    Number,
    CharLiteral,
    /// A malformed construct that has already been reported.
    None,

    // Reserved
    Program,
    Const,
    Type,
    Var,
    Integer,
    Char,
    Array,
    Of,
    Function,
    Procedure,
    Begin,
    End,
    Call,
    If,
    Then,
    Else,
    While,
    Do,
    For,
    To,

    Semicolon,
    Colon,
    Period,
    Comma,
    Assign,   // :=
    Equal,    // =
    NotEqual, // !=
    Lt,
    Le,
    Gt,
    Ge,
    Plus,
    Minus,
    Times,
    Slash,
    LParen,
    RParen,
    LSel, // (.
    RSel, // .)
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.values().any(|kind| kind == self)
    }

    /// Name used when rendering a token, e.g. `KW_BEGIN` or `SB_ASSIGN`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EOF => "TK_EOF",
            TokenKind::Ident => "TK_IDENT",
            TokenKind::Number => "TK_NUMBER",
            TokenKind::CharLiteral => "TK_CHAR",
            TokenKind::None => "TK_NONE",

            TokenKind::Program => "KW_PROGRAM",
            TokenKind::Const => "KW_CONST",
            TokenKind::Type => "KW_TYPE",
            TokenKind::Var => "KW_VAR",
            TokenKind::Integer => "KW_INTEGER",
            TokenKind::Char => "KW_CHAR",
            TokenKind::Array => "KW_ARRAY",
            TokenKind::Of => "KW_OF",
            TokenKind::Function => "KW_FUNCTION",
            TokenKind::Procedure => "KW_PROCEDURE",
            TokenKind::Begin => "KW_BEGIN",
            TokenKind::End => "KW_END",
            TokenKind::Call => "KW_CALL",
            TokenKind::If => "KW_IF",
            TokenKind::Then => "KW_THEN",
            TokenKind::Else => "KW_ELSE",
            TokenKind::While => "KW_WHILE",
            TokenKind::Do => "KW_DO",
            TokenKind::For => "KW_FOR",
            TokenKind::To => "KW_TO",

            TokenKind::Semicolon => "SB_SEMICOLON",
            TokenKind::Colon => "SB_COLON",
            TokenKind::Period => "SB_PERIOD",
            TokenKind::Comma => "SB_COMMA",
            TokenKind::Assign => "SB_ASSIGN",
            TokenKind::Equal => "SB_EQ",
            TokenKind::NotEqual => "SB_NEQ",
            TokenKind::Lt => "SB_LT",
            TokenKind::Le => "SB_LE",
            TokenKind::Gt => "SB_GT",
            TokenKind::Ge => "SB_GE",
            TokenKind::Plus => "SB_PLUS",
            TokenKind::Minus => "SB_MINUS",
            TokenKind::Times => "SB_TIMES",
            TokenKind::Slash => "SB_SLASH",
            TokenKind::LParen => "SB_LPAR",
            TokenKind::RParen => "SB_RPAR",
            TokenKind::LSel => "SB_LSEL",
            TokenKind::RSel => "SB_RSEL",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    /// Source text for identifiers, numbers and char literals; empty otherwise.
    pub lexeme: String,
    pub number: Option<i32>,
    pub character: Option<char>,
}

/// Renders as `{line}-{column}:{KIND}`, with the lexeme in parentheses for
/// identifiers and numbers and the quoted character for char literals.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.position.line, self.position.column, self.kind)?;

        match self.kind {
            TokenKind::Ident | TokenKind::Number => write!(f, "({})", self.lexeme),
            TokenKind::CharLiteral => write!(f, "('{}')", self.lexeme),
            _ => Ok(()),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
