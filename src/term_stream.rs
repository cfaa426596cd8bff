//! Reading and writing polynomials as line-based term lists.
//!
//! The format has one term per line, `<coefficient> <degree>` separated by
//! whitespace, with degrees in strictly descending order:
//!
//! ```text
//!  4 5
//! -2 3
//!  2 1
//!  3 0
//! ```
//!
//! which is `4x^5 - 2x^3 + 2x + 3`. Blank lines are ignored and terms with
//! an exactly-zero coefficient are dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str;

use log::{debug, trace};
use thiserror::Error;

use crate::algebra::scalar::Scalar;
use crate::structures::poly::Poly;
use crate::structures::term::{Term, TermError};
use crate::utils;

/// Why a single line could not be turned into a term.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedTerm {
    /// The line stops decoding as UTF-8 at this byte offset.
    #[error("line is not valid UTF-8 after byte {0}")]
    InvalidUtf8(usize),
    #[error("missing degree")]
    MissingDegree,
    #[error("unexpected trailing token `{0}`")]
    TrailingToken(String),
    #[error("invalid coefficient `{0}`")]
    InvalidCoefficient(String),
    #[error("coefficient `{0}` is not finite")]
    NonFiniteCoefficient(String),
    #[error("invalid degree `{0}`")]
    InvalidDegree(String),
    #[error(transparent)]
    Order(#[from] TermError),
}

#[derive(Debug, Error)]
pub enum TermStreamError {
    /// A line could not be parsed; `line` is 1-based.
    #[error("malformed term on line {line}: {kind}")]
    MalformedTerm { line: usize, kind: MalformedTerm },
    #[error("failed to read term stream: {0}")]
    Io(#[from] io::Error),
}

/// Parse one non-blank line into a term.
fn parse_line<T: Scalar>(line: &str) -> Result<Term<T>, MalformedTerm> {
    let mut tokens = line.split_whitespace();

    let coeff_token = tokens.next().unwrap_or_default();
    let degree_token = tokens.next().ok_or(MalformedTerm::MissingDegree)?;
    if let Some(extra) = tokens.next() {
        return Err(MalformedTerm::TrailingToken(extra.to_owned()));
    }

    let coeff: T = coeff_token
        .parse()
        .map_err(|_| MalformedTerm::InvalidCoefficient(coeff_token.to_owned()))?;
    if !coeff.is_finite() {
        return Err(MalformedTerm::NonFiniteCoefficient(coeff_token.to_owned()));
    }
    let degree: u32 = degree_token
        .parse()
        .map_err(|_| MalformedTerm::InvalidDegree(degree_token.to_owned()))?;

    Ok(Term::new(coeff, degree))
}

/// Read a polynomial from a term list.
///
/// Reading stops at the first malformed line; the error carries its line
/// number. I/O failures of the underlying reader are passed through.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use termpoly::{read_terms, Poly};
///
/// let p: Poly = read_terms(Cursor::new("4 5\n-2 3\n2 1\n3 0\n")).unwrap();
/// assert_eq!(p.to_string(), "4x^5 - 2x^3 + 2x + 3");
/// ```
pub fn read_terms<T: Scalar, R: BufRead>(reader: R) -> Result<Poly<T>, TermStreamError> {
    let mut terms = Vec::new();
    let mut previous = None;

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let number = index + 1;
        let line = str::from_utf8(&bytes).map_err(|e| TermStreamError::MalformedTerm {
            line: number,
            kind: MalformedTerm::InvalidUtf8(e.valid_up_to()),
        })?;
        if line.trim().is_empty() {
            trace!("skipping blank line {}", number);
            continue;
        }

        let term = parse_line::<T>(line)
            .and_then(|term| {
                utils::check_order(previous, term.degree)?;
                Ok(term)
            })
            .map_err(|kind| TermStreamError::MalformedTerm { line: number, kind })?;
        previous = Some(term.degree);

        if term.is_zero() {
            trace!("dropping zero term of degree {} on line {}", term.degree, number);
            continue;
        }
        terms.push(term);
    }

    debug!("read {} terms", terms.len());
    Ok(Poly::from_raw(terms))
}

/// Write a polynomial as a term list, highest degree first.
///
/// The output reads back through [`read_terms`] to an equal polynomial.
pub fn write_terms<T: Scalar, W: Write>(poly: &Poly<T>, mut writer: W) -> io::Result<()> {
    for term in poly {
        writeln!(writer, "{} {}", term.coeff, term.degree)?;
    }
    writer.flush()?;
    debug!("wrote {} terms", poly.len());
    Ok(())
}

impl<T: Scalar> Poly<T> {
    /// Read a polynomial from a term list. See [`read_terms`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, TermStreamError> {
        read_terms(reader)
    }

    /// Write this polynomial as a term list. See [`write_terms`].
    pub fn write_to<W: Write>(&self, writer: W) -> io::Result<()> {
        write_terms(self, writer)
    }

    /// Load a polynomial from a term list file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TermStreamError> {
        let path = path.as_ref();
        debug!("loading polynomial from {}", path.display());
        let file = File::open(path)?;
        read_terms(BufReader::new(file))
    }

    /// Save this polynomial to a term list file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();
        debug!("saving polynomial to {}", path.display());
        let file = File::create(path)?;
        write_terms(self, BufWriter::new(file))
    }
}
