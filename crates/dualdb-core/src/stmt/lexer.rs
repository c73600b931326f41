use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    /// A bare word, possibly dotted. Whether it names a field or spells an
    /// operator depends on where it sits in the comparison.
    Ident(String),

    /// A run of comparison punctuation such as `>=` or `<>`.
    Op(String),

    /// `?`
    Placeholder,

    /// Anything else: literals, parentheses, commas.
    Other,
}

const KEYWORDS: &[&str] = &[
    "AND", "BETWEEN", "ILIKE", "IN", "IS", "LIKE", "MATCH", "NOT", "OR", "REGEXP",
];

impl Token {
    /// The reserved word this token spells, upper-cased.
    pub(crate) fn keyword(&self) -> Option<&'static str> {
        let Token::Ident(word) = self else {
            return None;
        };

        KEYWORDS
            .iter()
            .copied()
            .find(|kw| kw.eq_ignore_ascii_case(word))
    }

    /// `AND` or `OR` joining two comparisons.
    pub(crate) fn is_connective(&self) -> bool {
        matches!(self.keyword(), Some("AND" | "OR"))
    }

    /// Tokens that may appear between a field and its placeholder.
    pub(crate) fn op_text(&self) -> Option<&str> {
        match self {
            Token::Op(op) => Some(op.as_str()),
            Token::Ident(_) if self.is_connective() => None,
            Token::Ident(_) => self.keyword(),
            _ => None,
        }
    }
}

pub(crate) struct Lexer<'a> {
    src: &'a str,
    next: VecDeque<Token>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(src: &'a str) -> Lexer<'a> {
        Lexer {
            src,
            next: VecDeque::new(),
        }
    }

    pub(crate) fn next(&mut self) -> Option<Token> {
        self.lex_n(1);
        self.next.pop_front()
    }

    pub(crate) fn peek_nth(&mut self, n: usize) -> Option<&Token> {
        self.lex_n(n + 1);
        self.next.get(n)
    }

    fn lex_n(&mut self, n: usize) {
        while self.next.len() < n {
            self.skip_whitespace();

            let Some(ch) = self.try_next_char() else {
                return;
            };

            let token = match ch {
                '?' => Token::Placeholder,
                '=' | '!' | '<' | '>' | '~' => {
                    let mut op = String::new();
                    op.push(ch);

                    while let Some(ch) = self.take_if(op_ch) {
                        op.push(ch);
                    }

                    Token::Op(op)
                }
                ch if ch == '_' || ch.is_alphabetic() => {
                    let mut ident = String::new();
                    ident.push(ch);

                    while let Some(ch) = self.take_if(ident_ch) {
                        ident.push(ch);
                    }

                    Token::Ident(ident)
                }
                ch if ch.is_ascii_digit() => {
                    while self.take_if(|ch| ch.is_ascii_digit() || ch == '.').is_some() {}
                    Token::Other
                }
                _ => Token::Other,
            };

            self.next.push_back(token);
        }
    }

    fn try_next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.consume(ch.len_utf8());
        Some(ch)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.src.chars().next()
    }

    fn take_if<P>(&mut self, predicate: P) -> Option<char>
    where
        P: FnOnce(char) -> bool,
    {
        match self.peek_char() {
            Some(ch) if predicate(ch) => {
                self.consume(ch.len_utf8());
                Some(ch)
            }
            _ => None,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                return;
            }
            self.consume(ch.len_utf8());
        }
    }

    fn consume(&mut self, amount: usize) {
        let (_, src) = self.src.split_at(amount);
        self.src = src;
    }
}

fn ident_ch(ch: char) -> bool {
    ch == '_' || ch == '.' || ch.is_alphanumeric()
}

fn op_ch(ch: char) -> bool {
    matches!(ch, '=' | '!' | '<' | '>' | '~')
}
