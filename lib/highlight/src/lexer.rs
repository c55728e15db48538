/// SPARQL keywords, matched case-insensitively.
///
/// The list covers the query and update grammars. `a` is the `rdf:type`
/// shorthand.
const KEYWORDS: &[&str] = &[
    "BASE", "PREFIX", "SELECT", "CONSTRUCT", "DESCRIBE", "ASK", "WHERE", "FROM",
    "NAMED", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET", "DISTINCT",
    "REDUCED", "OPTIONAL", "UNION", "FILTER", "GRAPH", "SERVICE", "BIND",
    "VALUES", "AS", "ASC", "DESC", "MINUS", "NOT", "EXISTS", "IN", "INSERT",
    "DELETE", "DATA", "WITH", "USING", "LOAD", "CLEAR", "DROP", "CREATE",
    "ADD", "MOVE", "COPY", "SILENT", "TRUE", "FALSE", "A",
];

/// The lexeme classes the formatter distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    /// `?name` or `$name`, sigil included.
    Variable,
    /// `<...>` IRI reference.
    Iri,
    /// `prefix:local`, `:local` or a bare name that is not a keyword.
    PrefixedName,
    /// Quoted string literal, quotes and escapes kept verbatim.
    Literal,
    Number,
    /// `# ...` up to the end of the line.
    Comment,
    /// `@lang` tag following a literal.
    LangTag,
    /// A single structural or operator character.
    Punctuation,
    Whitespace,
    /// Fallback for anything the lexer does not recognize.
    Text,
}

/// One lexeme together with the exact slice of input it covers.
///
/// Concatenating the `text` of all tokens reproduces the input unchanged,
/// which is what lets the formatter render arbitrary input losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if pred(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_comment(&mut self) -> String {
        self.take_while(|ch| ch != '\n')
    }

    /// Reads a quoted literal, keeping quotes and escape sequences verbatim.
    /// An unterminated literal runs to the end of the input instead of
    /// failing; display does not care.
    fn read_string(&mut self, quote: char) -> String {
        let mut result = String::new();
        result.push(quote);
        self.advance();

        while let Some(ch) = self.current_char() {
            result.push(ch);
            self.advance();
            if ch == '\\' {
                if let Some(escaped) = self.current_char() {
                    result.push(escaped);
                    self.advance();
                }
            } else if ch == quote {
                break;
            }
        }
        result
    }

    /// Reads `<...>` as an IRI if it closes before any whitespace; otherwise
    /// the `<` was a comparison operator.
    fn try_read_iri(&mut self) -> Option<String> {
        let mut offset = 1;
        loop {
            match self.peek_char(offset) {
                Some('>') => break,
                Some(ch) if ch.is_whitespace() => return None,
                Some(_) => offset += 1,
                None => return None,
            }
        }
        let mut result = String::new();
        for _ in 0..=offset {
            if let Some(ch) = self.current_char() {
                result.push(ch);
                self.advance();
            }
        }
        Some(result)
    }

    fn read_word(&mut self) -> String {
        self.take_while(|ch| ch.is_alphanumeric() || ch == '_' || ch == '-')
    }

    fn read_number(&mut self) -> String {
        let mut number = self.take_while(|ch| ch.is_ascii_digit());
        if self.current_char() == Some('.')
            && self.peek_char(1).is_some_and(|ch| ch.is_ascii_digit())
        {
            number.push('.');
            self.advance();
            number.push_str(&self.take_while(|ch| ch.is_ascii_digit()));
        }
        number
    }

    pub fn next_token(&mut self) -> Option<Token> {
        let ch = self.current_char()?;

        let token = match ch {
            _ if ch.is_whitespace() => Token::new(
                TokenKind::Whitespace,
                self.take_while(char::is_whitespace),
            ),
            '#' => Token::new(TokenKind::Comment, self.read_comment()),
            '"' | '\'' => Token::new(TokenKind::Literal, self.read_string(ch)),
            '<' => match self.try_read_iri() {
                Some(iri) => Token::new(TokenKind::Iri, iri),
                None => {
                    self.advance();
                    Token::new(TokenKind::Punctuation, "<")
                }
            },
            '?' | '$' => {
                if self
                    .peek_char(1)
                    .is_some_and(|next| next.is_alphanumeric() || next == '_')
                {
                    self.advance();
                    let name = self.read_word();
                    Token::new(TokenKind::Variable, format!("{ch}{name}"))
                } else {
                    self.advance();
                    Token::new(TokenKind::Punctuation, ch)
                }
            }
            '@' => {
                if self.peek_char(1).is_some_and(|next| next.is_alphabetic()) {
                    self.advance();
                    let tag = self.read_word();
                    Token::new(TokenKind::LangTag, format!("@{tag}"))
                } else {
                    self.advance();
                    Token::new(TokenKind::Punctuation, '@')
                }
            }
            ':' => {
                self.advance();
                let local = self.read_word();
                Token::new(TokenKind::PrefixedName, format!(":{local}"))
            }
            _ if ch.is_ascii_digit() => Token::new(TokenKind::Number, self.read_number()),
            _ if ch.is_alphabetic() || ch == '_' => {
                let word = self.read_word();
                if self.current_char() == Some(':') {
                    self.advance();
                    let local = self.read_word();
                    Token::new(TokenKind::PrefixedName, format!("{word}:{local}"))
                } else if KEYWORDS.iter().any(|kw| word.eq_ignore_ascii_case(kw)) {
                    Token::new(TokenKind::Keyword, word)
                } else {
                    Token::new(TokenKind::PrefixedName, word)
                }
            }
            _ if ch.is_ascii_punctuation() => {
                self.advance();
                Token::new(TokenKind::Punctuation, ch)
            }
            _ => {
                self.advance();
                Token::new(TokenKind::Text, ch)
            }
        };
        Some(token)
    }
}

/// Tokenizes `input` completely.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token() {
        tokens.push(token);
    }
    tokens
}
