/// The lexer module splits and classifies input words.
///
/// The lexer splits raw text on whitespace and classifies each word as an
/// integer literal or one of the four operator symbols. It performs no
/// validation beyond that; unrecognized words are handled by the parser.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser consumes the token sequence with an operand stack and an
/// operator stack, folding pending operators as new ones arrive. It reports
/// construction errors such as missing operands instead of panicking.
pub mod parser;
/// The evaluator module computes the value of a finished tree.
///
/// # Responsibilities
/// - Evaluates leaves and operator nodes recursively.
/// - Performs checked integer arithmetic.
/// - Reports division by zero and overflow as runtime errors.
pub mod evaluator;
/// The traversal module renders a tree as prefix, infix or postfix text.
pub mod traversal;
