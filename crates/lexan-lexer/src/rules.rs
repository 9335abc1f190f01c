//! The rule table: reserved words and canonical names for punctuation.
//!
//! Rules are keyed by category and text, e.g. `keyword_while`, `bracket_(`,
//! `delimiter_;` or `operator_+`. The table is built once per process and
//! is read-only afterwards, so every scan shares the same instance.

use crate::token::TokenKind;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Reserved words of the language.
pub const KEYWORDS: &[&str] = &[
    "main", "void", "goto", "continue", "break", "switch", "case", "return", "sizeof", "int",
    "short", "double", "long", "float", "if", "else", "for", "while", "do", "const", "static",
    "struct", "union", "enum", "typedef", "auto", "register", "unsigned", "signed", "char",
    "boolean", "true", "false", "null", "this", "super", "new", "delete", "instanceof", "typeof",
    "var", "let", "function", "class", "interface", "package", "import", "export", "throw", "try",
    "catch", "finally", "debugger",
];

const BRACKETS: &[(char, TokenKind)] = &[
    ('(', TokenKind::LeftParen),
    (')', TokenKind::RightParen),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
    ('[', TokenKind::LeftSquareBracket),
    (']', TokenKind::RightSquareBracket),
];

const DELIMITERS: &[(char, TokenKind)] = &[
    (':', TokenKind::DelimiterColon),
    (';', TokenKind::DelimiterSemicolon),
    (',', TokenKind::DelimiterComma),
    ('.', TokenKind::DelimiterDot),
];

const OPERATORS: &[(&str, &str)] = &[
    ("+", "plus"),
    ("-", "minus"),
    ("=", "assignment"),
    ("*", "multiply"),
    ("^", "xor"),
    ("~", "complement"),
    ("%", "remainder"),
    ("!", "logical_not"),
    ("<", "less"),
    (">", "great"),
    ("&", "bitwise_and"),
    ("|", "bitwise_or"),
    (".", "dot"),
    (":", "colon"),
];

/// What a rule resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The key names a reserved word.
    Keyword,
    /// The key names a bracket or delimiter with a canonical kind.
    Kind(TokenKind),
    /// The key names an operator symbol with a canonical name.
    Operator(&'static str),
}

/// Immutable lookup table from rule keys to rules.
#[derive(Debug)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    /// Build the table with every built-in rule.
    pub fn new() -> Self {
        let mut rules = HashMap::new();

        for keyword in KEYWORDS {
            rules.insert(format!("keyword_{keyword}"), Rule::Keyword);
        }
        for &(ch, kind) in BRACKETS {
            rules.insert(format!("bracket_{ch}"), Rule::Kind(kind));
        }
        for &(ch, kind) in DELIMITERS {
            rules.insert(format!("delimiter_{ch}"), Rule::Kind(kind));
        }
        for &(symbol, name) in OPERATORS {
            rules.insert(format!("operator_{symbol}"), Rule::Operator(name));
        }

        Self { rules }
    }

    /// Look up a rule by its full key.
    pub fn get(&self, key: &str) -> Option<Rule> {
        self.rules.get(key).copied()
    }

    /// Whether `text` is a reserved word.
    pub fn is_keyword(&self, text: &str) -> bool {
        self.get(&format!("keyword_{text}")) == Some(Rule::Keyword)
    }

    /// Kind for a bracket character.
    ///
    /// Unregistered characters fall back to the delimiter rules, and then to
    /// a generic bracket tagged with the character itself.
    pub fn bracket_kind(&self, ch: char) -> TokenKind {
        self.kind(&format!("bracket_{ch}"))
            .or_else(|| self.delimiter_rule(ch))
            .unwrap_or(TokenKind::Bracket(ch))
    }

    /// Kind for a delimiter character, falling back to a generic delimiter.
    pub fn delimiter_kind(&self, ch: char) -> TokenKind {
        self.delimiter_rule(ch).unwrap_or(TokenKind::Delimiter(ch))
    }

    /// Canonical name for a single-character operator symbol.
    pub fn operator_name(&self, symbol: &str) -> Option<&'static str> {
        match self.get(&format!("operator_{symbol}")) {
            Some(Rule::Operator(name)) => Some(name),
            _ => None,
        }
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn delimiter_rule(&self, ch: char) -> Option<TokenKind> {
        self.kind(&format!("delimiter_{}", ch.to_lowercase()))
    }

    fn kind(&self, key: &str) -> Option<TokenKind> {
        match self.get(key) {
            Some(Rule::Kind(kind)) => Some(kind),
            _ => None,
        }
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_RULES: OnceLock<RuleTable> = OnceLock::new();

/// The process-wide rule table, built on first use.
pub fn rules() -> &'static RuleTable {
    GLOBAL_RULES.get_or_init(RuleTable::new)
}
