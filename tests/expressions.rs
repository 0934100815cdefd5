use std::{
    fs::{self},
    io::Cursor,
};

use exprtree::{
    ExprTree, ParseError, RuntimeError,
    ast::{Node, Operator},
    build, classify, evaluate, get_result, infix_order,
    interpreter::{lexer::Token, parser::core::TreeBuilder},
    postfix_order, prefix_order, read_lines, tokenize,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, block) in extract_exprtree_blocks(&content).into_iter().enumerate() {
            for line in block.lines().filter(|line| !line.trim().is_empty()) {
                count += 1;
                let (expression, expected) =
                    line.split_once("=>")
                        .unwrap_or_else(|| panic!("Example {} in {path:?} lacks '=>': {line}", i + 1));
                let expected: i64 = expected.trim()
                                            .parse()
                                            .unwrap_or_else(|e| panic!("Bad expected value in {path:?}: {line}: {e}"));

                match get_result(expression, false) {
                    Ok(report) => assert_eq!(report.value,
                                             expected,
                                             "Example {} in {:?} evaluated wrongly: {}",
                                             i + 1,
                                             path,
                                             line),
                    Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, line, e),
                }
            }
        }
    }

    assert!(count > 0, "No exprtree examples found in book/src");
}

fn extract_exprtree_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```exprtree") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn tree_of(src: &str) -> ExprTree {
    build(&tokenize(src)).unwrap_or_else(|e| panic!("Failed to build '{src}': {e}"))
}

fn assert_value(src: &str, expected: i64) {
    match tree_of(src).evaluate() {
        Ok(value) => assert_eq!(value, expected, "'{src}' evaluated wrongly"),
        Err(e) => panic!("Evaluating '{src}' failed: {e}"),
    }
}

fn assert_build_error(src: &str, expected: &ParseError) {
    match build(&tokenize(src)) {
        Ok(tree) => panic!("'{src}' built a tree of size {} but was expected to fail", tree.size()),
        Err(e) => assert_eq!(&e, expected, "'{src}' failed with the wrong error"),
    }
}

#[test]
fn tokenize_splits_on_any_whitespace() {
    assert_eq!(tokenize("3 + 4"), vec!["3", "+", "4"]);
    assert_eq!(tokenize("\t10\n/  2 "), vec!["10", "/", "2"]);
    assert_eq!(tokenize("3+4"), vec!["3+4"]);
    assert!(tokenize("").is_empty());
    assert!(tokenize(" \n\t ").is_empty());
}

#[test]
fn classify_requires_whole_words() {
    assert_eq!(classify("0"), Some(Token::Number("0".to_string())));
    assert_eq!(classify("007"), Some(Token::Number("007".to_string())));
    assert_eq!(classify("+"), Some(Token::Plus));
    assert_eq!(classify("-"), Some(Token::Minus));
    assert_eq!(classify("*"), Some(Token::Star));
    assert_eq!(classify("/"), Some(Token::Slash));
    assert_eq!(classify("++"), None);
    assert_eq!(classify("3+"), None);
    assert_eq!(classify("-3"), None);
    assert_eq!(classify("1.5"), None);
    assert_eq!(classify("x"), None);
    assert_eq!(classify(""), None);
}

#[test]
fn operators_group_left_to_right() {
    assert_value("3 + 4 * 2", 14);
    assert_value("2 * 3 + 4", 10);
    assert_value("3 + 4 - 5 * 2", 4);
    assert_value("20 / 3 * 3", 18);
    assert_value("1 - 2 - 3", -4);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("0 - 7 / 2", -3);
    assert_value("1 / 3", 0);
}

#[test]
fn traversal_orders() {
    let tree = tree_of("2 + 3");
    assert_eq!(tree.prefix_order(), "+23");
    assert_eq!(tree.infix_order(), "2+3");
    assert_eq!(tree.postfix_order(), "23+");

    let tree = tree_of("3 + 4 - 5 * 2");
    assert_eq!(prefix_order(&tree), "*-+3452");
    assert_eq!(infix_order(&tree), "3+4-5*2");
    assert_eq!(postfix_order(&tree), "34+5-2*");

    let tree = tree_of("12 / 4");
    assert_eq!(tree.prefix_order(), "/124");
}

#[test]
fn tree_shape_follows_folds() {
    let tree = tree_of("3 + 4 * 2");
    let root = tree.root().expect("tree has a root");

    assert_eq!(root.operator_tag(), Operator::Times);
    assert_eq!(root.right_child(), Some(&Node::leaf(2)));

    let sum = root.left_child().expect("root has a left child");
    assert_eq!(sum.operator_tag(), Operator::Plus);
    assert_eq!(sum.left_child().map(Node::value), Some(3));
    assert_eq!(sum.right_child().map(Node::value), Some(4));
}

#[test]
fn single_number_and_empty_input() {
    let tree = tree_of("5");
    assert_eq!(tree.size(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.infix_order(), "5");
    assert_eq!(tree.evaluate(), Ok(5));
    assert!(tree.root().is_some_and(Node::is_leaf));

    let tree = tree_of("");
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert!(tree.root().is_none());
    assert_eq!(tree.prefix_order(), "");
    assert_eq!(tree.infix_order(), "");
    assert_eq!(tree.postfix_order(), "");
    assert_eq!(evaluate(&tree), Ok(0));
}

#[test]
fn size_counts_consumed_tokens() {
    assert_eq!(tree_of("1 + 2 + 3 + 4").size(), 7);
    assert_eq!(tree_of("1 + 2 * 3").size(), 5);
    assert_eq!(tree_of("1 + foo 2").size(), 3);
    assert!(tree_of("foo bar").is_empty());
}

#[test]
fn unrecognized_tokens_are_skipped() {
    assert_value("2 + x 3", 5);
    assert_value("3+ 4", 4);
    assert_value("1 + -5 2", 3);
}

#[test]
fn skipped_tokens_can_leave_an_operator_short() {
    assert_build_error("-5 + 1 + 2", &ParseError::StackUnderflow { operator: Operator::Plus,
                                                                   position: 3, });
}

#[test]
fn strict_builder_rejects_unrecognized_tokens() {
    let err = TreeBuilder::strict().build(&tokenize("2 + x 3")).unwrap_err();
    assert_eq!(err,
               ParseError::MalformedInput { token:    "x".to_string(),
                                            position: 2, });

    let tree = TreeBuilder::strict().build(&tokenize("2 + 3")).unwrap();
    assert_eq!(tree.evaluate(), Ok(5));

    assert!(TreeBuilder::strict().is_strict());
    assert!(!TreeBuilder::new().is_strict());
    assert!(get_result("2 + x 3", true).is_err());
    assert!(get_result("2 + x 3", false).is_ok());
}

#[test]
fn missing_operands_fail_explicitly() {
    assert_build_error("+ 3", &ParseError::StackUnderflow { operator: Operator::Plus,
                                                            position: 2, });
    assert_build_error("3 +", &ParseError::StackUnderflow { operator: Operator::Plus,
                                                            position: 2, });
    assert_build_error("3 + + 4", &ParseError::StackUnderflow { operator: Operator::Plus,
                                                                position: 2, });
    assert_build_error("*", &ParseError::StackUnderflow { operator: Operator::Times,
                                                          position: 1, });
}

#[test]
fn leftover_operands_fail_explicitly() {
    assert_build_error("3 4", &ParseError::TrailingOperands { count: 2 });
    assert_build_error("1 + 2 3", &ParseError::TrailingOperands { count: 2 });
}

#[test]
fn oversized_literals_fail() {
    assert_build_error("1 + 99999999999999999999",
                       &ParseError::LiteralTooLarge { token:    "99999999999999999999".to_string(),
                                                      position: 2, });
    assert_value("9223372036854775807", i64::MAX);
}

#[test]
fn division_by_zero_surfaces() {
    let tree = tree_of("10 / 0 + 1");
    assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 10 }));

    let tree = tree_of("1 + 2 / 0");
    assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 3 }));

    let tree = tree_of("5 - 5 * 3 / 0");
    assert!(matches!(tree.evaluate(), Err(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn overflow_surfaces() {
    let tree = tree_of("9223372036854775807 + 1");
    assert_eq!(tree.evaluate(),
               Err(RuntimeError::Overflow { operator: Operator::Plus,
                                            left:     i64::MAX,
                                            right:    1, }));

    let tree = tree_of("0 - 9223372036854775807 - 2");
    assert!(matches!(tree.evaluate(), Err(RuntimeError::Overflow { .. })));

    let tree = tree_of("4611686018427387904 * 2");
    assert!(matches!(tree.evaluate(), Err(RuntimeError::Overflow { .. })));
}

#[test]
fn node_model_operations() {
    let mut node = Node::operator("/");
    assert_eq!(node.operator_tag(), Operator::Divide);
    assert_eq!(node.value(), 0);
    assert_eq!(node.to_string(), "/");

    node.set_left_child(Node::leaf(1));
    node.set_left_child(Node::leaf(8));
    node.set_right_child(Node::leaf(2));
    assert_eq!(node.left_child(), Some(&Node::leaf(8)));
    assert_eq!(node.count(), 3);

    let mut leaf = Node::leaf(17);
    leaf.set_left_child(Node::leaf(1));
    assert_eq!(leaf.left_child(), None);
    assert_eq!(leaf.operator_tag(), Operator::NoOp);
    assert_eq!(leaf.value(), 17);
    assert_eq!(leaf.to_string(), "17");

    assert_eq!(Node::operator("%").operator_tag(), Operator::NoOp);
    assert_eq!(Node::operator("%").to_string(), "");
    assert_eq!(Node::operator("+").to_string(), "+");
    assert_eq!(Node::operator("-").to_string(), "-");
    assert_eq!(Node::operator("*").to_string(), "*");

    let tree = ExprTree::from(node);
    assert_eq!(tree.size(), 3);
    assert_eq!(tree.evaluate(), Ok(4));
    assert_eq!(tree.infix_order(), "8/2");
}

#[test]
fn hand_built_trees_report_evaluation_errors() {
    let mut incomplete = Node::operator("+");
    incomplete.set_left_child(Node::leaf(1));
    let tree = ExprTree::from_root(incomplete);
    assert_eq!(tree.evaluate(),
               Err(RuntimeError::MissingOperand { operator: Operator::Plus }));
    assert_eq!(tree.infix_order(), "1+");

    let mut unknown = Node::operator("?");
    unknown.set_left_child(Node::leaf(1));
    unknown.set_right_child(Node::leaf(2));
    assert_eq!(ExprTree::from_root(unknown).evaluate(),
               Err(RuntimeError::UnknownOperator));

    assert!(ExprTree::new().is_empty());
    assert_eq!(ExprTree::default(), ExprTree::new());
}

#[test]
fn report_renders_all_orders() {
    let report = get_result("3 + 4 * 2", false).unwrap();
    assert_eq!(report.value, 14);
    assert_eq!(report.size, 5);
    assert_eq!(report.prefix, "*+342");
    assert_eq!(report.infix, "3+4*2");
    assert_eq!(report.postfix, "34+2*");
    assert_eq!(report.to_string(),
               "value:   14\nprefix:  *+342\ninfix:   3+4*2\npostfix: 34+2*");
}

#[test]
fn errors_have_readable_messages() {
    let err = get_result("3 +", false).unwrap_err();
    assert_eq!(err.to_string(), "Error at token 2: Operator '+' is missing an operand.");

    let err = get_result("10 / 0", false).unwrap_err();
    assert_eq!(err.to_string(), "Error: Division by zero while dividing 10.");
}

#[test]
fn long_chains_do_not_overflow_the_stack() {
    const OPERATORS: usize = 1_000_000;

    let source = format!("1{}", " + 1".repeat(OPERATORS));
    let tree = tree_of(&source);

    assert_eq!(tree.size(), 2 * OPERATORS + 1);
    assert_eq!(tree.evaluate(), Ok(1_000_001));

    let infix = tree.infix_order();
    assert_eq!(infix.len(), 2 * OPERATORS + 1);
    assert!(infix.starts_with("1+1+1"));

    let prefix = tree.prefix_order();
    assert_eq!(prefix, format!("{}{}", "+".repeat(OPERATORS), "1".repeat(OPERATORS + 1)));

    let postfix = tree.postfix_order();
    assert_eq!(postfix, format!("1{}", "1+".repeat(OPERATORS)));

    let copy = tree.clone();
    assert!(copy == tree);
    assert_eq!(copy.root().map(Node::count), Some(2 * OPERATORS + 1));

    drop(copy);
    drop(tree);
}

#[test]
fn deep_trees_compare_structurally() {
    let left = tree_of("1 + 2 - 3");
    let right = tree_of("1 + 2 * 3");
    assert_ne!(left, right);
    assert_eq!(left, tree_of("1 + 2 - 3"));

    let mut partial = Node::operator("+");
    partial.set_left_child(Node::leaf(1));
    let mut full = partial.clone();
    full.set_right_child(Node::leaf(2));
    assert_ne!(partial, full);
    assert_eq!(partial.clone(), partial);
}

#[test]
fn unreadable_lines_are_reported_not_dropped() {
    let input = b"1 + 2\n\xff\xfe\n3 * 4\n".to_vec();
    let (lines, errors) = read_lines(Cursor::new(input));

    assert_eq!(lines, vec!["1 + 2", "3 * 4"]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), std::io::ErrorKind::InvalidData);
}
