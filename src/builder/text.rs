//! A reader for formulas written as text.
//!
//! Reading happens in two steps: the string is tokenized, and the tokens are consumed by a recursive-descent parse, loosest connective first.
//! Errors carry the byte offset at which reading failed, where one exists.

use crate::{
    db::atom::AtomDB,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// A token of the formula syntax, without position.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    /// An external atom name.
    Atom(String),

    /// `~`
    Not,

    /// `&`
    And,

    /// `|`
    Or,

    /// `>>`
    Imp,

    /// `<>`
    Iff,

    /// `(`
    LeftParen,

    /// `)`
    RightParen,
}

/// The tokens of `string`, each at the byte offset it began.
fn tokenize(string: &str) -> Result<Vec<(usize, Token)>, err::ParseError> {
    let mut tokens = Vec::new();
    let mut characters = string.char_indices().peekable();

    while let Some((offset, character)) = characters.next() {
        match character {
            character if character.is_whitespace() => {}

            '~' => tokens.push((offset, Token::Not)),

            '&' => tokens.push((offset, Token::And)),

            '|' => tokens.push((offset, Token::Or)),

            '(' => tokens.push((offset, Token::LeftParen)),

            ')' => tokens.push((offset, Token::RightParen)),

            '>' => match characters.next() {
                Some((_, '>')) => tokens.push((offset, Token::Imp)),
                _ => return Err(err::ParseError::UnexpectedCharacter(offset)),
            },

            '<' => match characters.next() {
                Some((_, '>')) => tokens.push((offset, Token::Iff)),
                _ => return Err(err::ParseError::UnexpectedCharacter(offset)),
            },

            character if character.is_ascii_alphabetic() || character == '_' => {
                let mut name = String::from(character);
                while let Some((_, next)) = characters.peek() {
                    if next.is_ascii_alphanumeric() || *next == '_' {
                        name.push(*next);
                        characters.next();
                    } else {
                        break;
                    }
                }
                tokens.push((offset, Token::Atom(name)));
            }

            _ => return Err(err::ParseError::UnexpectedCharacter(offset)),
        }
    }

    Ok(tokens)
}

/// A recursive-descent parse over tokenized input, interning fresh atom names as they are read.
struct Parser<'db> {
    tokens: Vec<(usize, Token)>,
    index: usize,
    atom_db: &'db mut AtomDB,
}

impl Parser<'_> {
    /// The next token, without consuming it.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index).map(|(_, token)| token)
    }

    /// The next token and its offset, consumed.
    fn next(&mut self) -> Option<(usize, Token)> {
        let token = self.tokens.get(self.index).cloned();
        self.index += 1;
        token
    }

    /// An equivalence, or anything binding tighter.
    fn equivalence(&mut self) -> Result<Formula, ErrorKind> {
        let left = self.implication()?;

        match self.peek() {
            Some(Token::Iff) => {
                self.next();
                let right = self.equivalence()?;
                Ok(Formula::iff(left, right))
            }
            _ => Ok(left),
        }
    }

    /// An implication, or anything binding tighter. Right associative.
    fn implication(&mut self) -> Result<Formula, ErrorKind> {
        let left = self.disjunction()?;

        match self.peek() {
            Some(Token::Imp) => {
                self.next();
                let right = self.implication()?;
                Ok(Formula::imp(left, right))
            }
            _ => Ok(left),
        }
    }

    /// A disjunction, or anything binding tighter.
    fn disjunction(&mut self) -> Result<Formula, ErrorKind> {
        let mut left = self.conjunction()?;

        while let Some(Token::Or) = self.peek() {
            self.next();
            let right = self.conjunction()?;
            left = Formula::or(left, right);
        }

        Ok(left)
    }

    /// A conjunction, or anything binding tighter.
    fn conjunction(&mut self) -> Result<Formula, ErrorKind> {
        let mut left = self.unary()?;

        while let Some(Token::And) = self.peek() {
            self.next();
            let right = self.unary()?;
            left = Formula::and(left, right);
        }

        Ok(left)
    }

    /// A negation, a parenthesised formula, or an atom.
    fn unary(&mut self) -> Result<Formula, ErrorKind> {
        match self.next() {
            Some((_, Token::Not)) => Ok(Formula::not(self.unary()?)),

            Some((_, Token::LeftParen)) => {
                let inner = self.equivalence()?;
                match self.next() {
                    Some((_, Token::RightParen)) => Ok(inner),
                    Some((offset, _)) => Err(err::ParseError::UnexpectedToken(offset).into()),
                    None => Err(err::ParseError::UnexpectedEnd.into()),
                }
            }

            Some((_, Token::Atom(name))) => {
                let atom = self.atom_db.atom_or_fresh(&name)?;
                Ok(Formula::Atom(atom))
            }

            Some((offset, _)) => Err(err::ParseError::UnexpectedToken(offset).into()),

            None => Err(err::ParseError::UnexpectedEnd.into()),
        }
    }
}

/// The formula `string` describes, with fresh atom names interned in `atom_db`.
pub fn parse_formula(string: &str, atom_db: &mut AtomDB) -> Result<Formula, ErrorKind> {
    let tokens = tokenize(string)?;

    if tokens.is_empty() {
        return Err(err::ParseError::Empty.into());
    }

    let mut parser = Parser {
        tokens,
        index: 0,
        atom_db,
    };

    let formula = parser.equivalence()?;

    match parser.next() {
        None => Ok(formula),
        Some((offset, _)) => Err(err::ParseError::TrailingInput(offset).into()),
    }
}
