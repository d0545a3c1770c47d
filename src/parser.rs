//! Textual rule and query syntax
//!
//! A thin boundary over the core: the search engine only ever consumes
//! `Predicate` and `Rule` values, and this module is the one place where
//! text becomes those values. The surface syntax follows the usual toy
//! Prolog shape, with `?`-prefixed variables:
//!
//! ```text
//! parent(john, mary).
//! ancestor(?x, ?y) :- parent(?x, ?z), ancestor(?z, ?y).
//! % comments run to end of line
//! ```

use crate::logic::{Constant, Interner, Predicate, Rule, Term, Variable};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};
use std::fmt;

/// Failure to parse a query, rule, or program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not match the expected shape
    Syntax { near: String },
    /// A complete item parsed but input remained
    TrailingInput { rest: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax { near } => write!(f, "syntax error near '{}'", near),
            ParseError::TrailingInput { rest } => {
                write!(f, "unexpected trailing input '{}'", rest)
            }
        }
    }
}

// === Raw AST (before interning) ===

#[derive(Debug, Clone, PartialEq)]
enum RawTerm<'a> {
    Variable(&'a str),
    Constant(&'a str),
}

#[derive(Debug, Clone, PartialEq)]
struct RawPredicate<'a> {
    name: &'a str,
    args: Vec<RawTerm<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
struct RawRule<'a> {
    head: RawPredicate<'a>,
    body: Vec<RawPredicate<'a>>,
}

// === Combinators ===

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn ws(input: &str) -> IResult<&str, ()> {
    let mut rest = input;
    loop {
        let (r, _) = multispace0::<_, nom::error::Error<&str>>(rest)?;
        if let Some(stripped) = r.strip_prefix('%') {
            rest = match stripped.find('\n') {
                Some(i) => &stripped[i + 1..],
                None => "",
            };
        } else {
            return Ok((r, ()));
        }
    }
}

fn raw_term(input: &str) -> IResult<&str, RawTerm<'_>> {
    alt((
        map(preceded(char('?'), identifier), RawTerm::Variable),
        map(identifier, RawTerm::Constant),
    ))(input)
}

fn raw_predicate(input: &str) -> IResult<&str, RawPredicate<'_>> {
    let (input, name) = preceded(ws_discard, identifier)(input)?;
    let (input, args) = delimited(
        pair(ws_discard, char('(')),
        separated_list0(
            pair(ws_discard, char(',')),
            preceded(ws_discard, raw_term),
        ),
        pair(ws_discard, char(')')),
    )(input)?;
    Ok((input, RawPredicate { name, args }))
}

fn ws_discard(input: &str) -> IResult<&str, ()> {
    ws(input)
}

fn raw_rule(input: &str) -> IResult<&str, RawRule<'_>> {
    let (input, head) = raw_predicate(input)?;
    let (input, body) = opt(preceded(
        pair(ws_discard, tag(":-")),
        separated_list1(pair(ws_discard, char(',')), raw_predicate),
    ))(input)?;
    let (input, _) = pair(ws_discard, char('.'))(input)?;
    Ok((
        input,
        RawRule {
            head,
            body: body.unwrap_or_default(),
        },
    ))
}

fn raw_program(input: &str) -> IResult<&str, Vec<RawRule<'_>>> {
    terminated(many0(raw_rule), ws_discard)(input)
}

// === Interning pass ===

fn intern_term(raw: &RawTerm<'_>, interner: &mut Interner) -> Term {
    match raw {
        RawTerm::Variable(name) => Term::Variable(Variable::new(interner.intern_variable(name))),
        RawTerm::Constant(name) => Term::Constant(Constant::new(interner.intern_constant(name))),
    }
}

fn intern_predicate(raw: &RawPredicate<'_>, interner: &mut Interner) -> Predicate {
    let id = interner.intern_predicate(raw.name);
    let args = raw.args.iter().map(|t| intern_term(t, interner)).collect();
    Predicate::new(id, args)
}

fn intern_rule(raw: &RawRule<'_>, interner: &mut Interner) -> Rule {
    Rule {
        head: intern_predicate(&raw.head, interner),
        body: raw
            .body
            .iter()
            .map(|p| intern_predicate(p, interner))
            .collect(),
    }
}

fn truncate_for_error(input: &str) -> String {
    input.trim_start().chars().take(24).collect()
}

// === Public entry points ===

/// Parse a query like `ancestor(john, ?who)`, with an optional trailing
/// period.
pub fn parse_query(input: &str, interner: &mut Interner) -> Result<Predicate, ParseError> {
    let (rest, raw) = raw_predicate(input).map_err(|_| ParseError::Syntax {
        near: truncate_for_error(input),
    })?;
    let (rest, _) = opt(pair(ws_discard, char('.')))(rest).map_err(
        |_: nom::Err<nom::error::Error<&str>>| ParseError::Syntax {
            near: truncate_for_error(rest),
        },
    )?;
    let (rest, _) = ws_discard(rest).map_err(|_| ParseError::Syntax {
        near: truncate_for_error(rest),
    })?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            rest: truncate_for_error(rest),
        });
    }
    Ok(intern_predicate(&raw, interner))
}

/// Parse a single rule or fact, terminated by a period.
pub fn parse_rule(input: &str, interner: &mut Interner) -> Result<Rule, ParseError> {
    let (rest, raw) = raw_rule(input).map_err(|_| ParseError::Syntax {
        near: truncate_for_error(input),
    })?;
    let (rest, _) = ws_discard(rest).map_err(|_| ParseError::Syntax {
        near: truncate_for_error(rest),
    })?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            rest: truncate_for_error(rest),
        });
    }
    Ok(intern_rule(&raw, interner))
}

/// Parse a whole program: rules and facts separated by periods, with
/// `%` line comments.
pub fn parse_program(input: &str, interner: &mut Interner) -> Result<Vec<Rule>, ParseError> {
    let (rest, raws) = raw_program(input).map_err(|_| ParseError::Syntax {
        near: truncate_for_error(input),
    })?;
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            rest: truncate_for_error(rest),
        });
    }
    Ok(raws.iter().map(|r| intern_rule(r, interner)).collect())
}
