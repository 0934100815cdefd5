//! # exprtree
//!
//! exprtree turns whitespace-separated integer arithmetic into a binary
//! expression tree. The tree can be evaluated and rendered in prefix, infix
//! and postfix order.
//!
//! All four operators share one precedence level and group strictly left to
//! right, so `3 + 4 * 2` evaluates to `14`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead};

use crate::interpreter::parser::core::TreeBuilder;

/// Defines the tree nodes.
///
/// This module declares the `Node` enum and the `Operator` tag. A node is
/// either an integer leaf or an operator that exclusively owns its left and
/// right children.
///
/// # Responsibilities
/// - Constructs leaves and operator nodes.
/// - Attaches children and exposes them for traversal.
/// - Renders a node's own label.
pub mod ast;
/// Provides the error types for construction and evaluation.
///
/// # Responsibilities
/// - `ParseError` for failures while building a tree.
/// - `RuntimeError` for failures while evaluating one.
pub mod error;
/// Tokenizing, building, evaluating and rendering.
///
/// This module ties the phases together: the lexer splits and classifies the
/// input, the parser builds the tree, the evaluator computes its value and
/// the traversal module renders it.
pub mod interpreter;
/// The expression tree type and its public operations.
pub mod tree;

pub use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::{classify, tokenize},
        parser::core::build,
        traversal::{infix_order, postfix_order, prefix_order},
    },
    tree::ExprTree,
};

/// Everything the driver prints for one expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The evaluated result.
    pub value:   i64,
    /// Prefix rendering of the tree.
    pub prefix:  String,
    /// Infix rendering of the tree.
    pub infix:   String,
    /// Postfix rendering of the tree.
    pub postfix: String,
    /// Number of nodes in the tree.
    pub size:    usize,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "value:   {}", self.value)?;
        writeln!(f, "prefix:  {}", self.prefix)?;
        writeln!(f, "infix:   {}", self.infix)?;
        write!(f, "postfix: {}", self.postfix)
    }
}

/// Tokenizes, builds and evaluates `source`, and renders the resulting tree.
///
/// # Parameters
/// - `source`: The expression, e.g. `"3 + 4 * 2"`.
/// - `strict`: Whether unrecognized tokens are rejected instead of skipped.
///
/// # Errors
/// Returns an error if the tree cannot be built or evaluated.
///
/// # Examples
/// ```
/// use exprtree::get_result;
///
/// let report = get_result("3 + 4 * 2", false).unwrap();
/// assert_eq!(report.value, 14);
/// assert_eq!(report.postfix, "34+2*");
///
/// // Left-to-right grouping divides by zero before adding one.
/// assert!(get_result("10 / 0 + 1", false).is_err());
/// ```
pub fn get_result(source: &str, strict: bool) -> Result<Report, Box<dyn std::error::Error>> {
    let builder = if strict { TreeBuilder::strict() } else { TreeBuilder::new() };
    let tree = builder.build(&tokenize(source))?;
    let value = tree.evaluate()?;

    Ok(Report { value,
                prefix: tree.prefix_order(),
                infix: tree.infix_order(),
                postfix: tree.postfix_order(),
                size: tree.size() })
}

/// Reads every line of `reader`, collecting read failures instead of stopping
/// at the first one.
///
/// A line that is not valid UTF-8 is reported as an error and reading goes on
/// with the next line. Any other I/O error ends reading, since the reader
/// cannot be trusted afterwards.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use exprtree::read_lines;
///
/// let (lines, errors) = read_lines(Cursor::new(b"1 + 2\n\xff\n3 * 4\n".to_vec()));
/// assert_eq!(lines, vec!["1 + 2", "3 * 4"]);
/// assert_eq!(errors.len(), 1);
/// ```
pub fn read_lines<R: BufRead>(reader: R) -> (Vec<String>, Vec<io::Error>) {
    let mut lines = Vec::new();
    let mut errors = Vec::new();

    for line in reader.lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => errors.push(e),
            Err(e) => {
                errors.push(e);
                break;
            },
        }
    }

    (lines, errors)
}
