use super::*;

fn dump(pattern: &str) -> String {
    let graph = Compiler::compile(pattern).unwrap();
    let mut out = vec![];
    graph.dump(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn error(pattern: &str) -> Error {
    Compiler::compile(pattern).unwrap_err()
}

// errors
#[test]
fn empty_pattern() {
    let err = error("");
    assert_eq!(err.kind(), ErrorKind::EmptyPattern);
    assert_eq!(err.position(), 0);
}

#[test]
fn unsupported_escape() {
    for (input, pos) in &[("\\", 0), ("a\\q", 1), ("\\n", 0), ("ab\\0", 2), ("\\D", 0)] {
        let err = error(input);
        assert_eq!(err.kind(), ErrorKind::UnsupportedEscape, "{}", input);
        assert_eq!(err.position(), *pos, "{}", input);
    }
}

#[test]
fn unterminated_character_class() {
    for (input, pos) in &[("[abc", 0), ("x[^", 1), ("[", 0), ("[]a[", 3)] {
        let err = error(input);
        assert_eq!(err.kind(), ErrorKind::UnterminatedCharacterClass, "{}", input);
        assert_eq!(err.position(), *pos, "{}", input);
    }
}

#[test]
fn unbalanced_group() {
    for (input, pos) in &[(")", 0), ("a)", 1), ("(a", 2), ("((a)", 4), ("(a|b))", 5)] {
        let err = error(input);
        assert_eq!(err.kind(), ErrorKind::UnbalancedGroup, "{}", input);
        assert_eq!(err.position(), *pos, "{}", input);
    }
}

#[test]
fn nothing_to_repeat() {
    for (input, pos) in &[("+", 0), ("?", 0), ("(?a)", 1), ("a|+", 2)] {
        let err = error(input);
        assert_eq!(err.kind(), ErrorKind::NothingToRepeat, "{}", input);
        assert_eq!(err.position(), *pos, "{}", input);
    }
}

#[test]
fn empty_repetition() {
    for (input, pos) in &[
        ("()+", 2),
        ("^+", 1),
        ("a$+", 2),
        ("a?+", 2),
        ("(b|a?)+", 6),
        ("(\\1)+", 4),
        ("(a|)+", 4),
    ] {
        let err = error(input);
        assert_eq!(err.kind(), ErrorKind::EmptyRepetition, "{}", input);
        assert_eq!(err.position(), *pos, "{}", input);
    }
}

#[test]
fn repetitions_that_always_consume() {
    for input in &["a+", "a++", "(a)+", "(a|bc)+", "(a?b)+", "(a)\\1+", "[^x]+", "(\\d+)+"] {
        Compiler::compile(input).unwrap();
    }
}

// structure
#[test]
fn literal() {
    assert_eq!(
        dump("a"),
        "\
>0: epsilon -> 2
 1: epsilon (sink) -> match
 2: char 'a' -> 1
"
    );
}

#[test]
fn one_or_more_loops_on_itself() {
    assert_eq!(
        dump("a+"),
        "\
>0: epsilon -> 2
 1: epsilon (sink) -> match
 2: char 'a' -> 2, 1
"
    );
}

#[test]
fn one_or_more_on_group_loops_to_head() {
    assert_eq!(
        dump("(a)+"),
        "\
>0: epsilon -> 2
 1: epsilon (sink) -> match
 2: epsilon (capture head) -> 4
 3: epsilon (capture sink) -> 2, 1
 4: char 'a' -> 3
"
    );
}

#[test]
fn zero_or_one_adds_bypass() {
    assert_eq!(
        dump("ab?"),
        "\
>0: epsilon -> 2
 1: epsilon (sink) -> match
 2: char 'a' -> 3, 4
 3: char 'b' -> 4
 4: epsilon -> 1
"
    );
}

#[test]
fn alternation_joins_at_sink() {
    assert_eq!(
        dump("(a|b)"),
        "\
>0: epsilon -> 2
 1: epsilon (sink) -> match
 2: epsilon (capture head) -> 4, 5
 3: epsilon (capture sink) -> 1
 4: char 'a' -> 3
 5: char 'b' -> 3
"
    );
}

#[test]
fn top_level_alternation() {
    assert_eq!(
        dump("a|"),
        "\
>0: epsilon -> 2, 1
 1: epsilon (sink) -> match
 2: char 'a' -> 1
"
    );
}

#[test]
fn escapes() {
    let graph = Compiler::compile("\\d\\w\\\\\\3").unwrap();
    let tests = (2..graph.len())
        .map(|i| graph.node(NodeId::from_index(i)).test.clone())
        .collect::<Vec<_>>();
    assert_eq!(
        tests,
        vec![Test::Digit, Test::Word, Test::Char('\\'), Test::Backref(3)]
    );
}

#[test]
fn character_classes() {
    assert_eq!(dump("[^abc]").lines().nth(2), Some(" 2: set [^abc] -> 1"));
    assert_eq!(dump("[]").lines().nth(2), Some(" 2: set [] -> 1"));
    assert_eq!(dump("[(|+]").lines().nth(2), Some(" 2: set [(+|] -> 1"));
}

#[test]
fn anchors_and_wildcard() {
    let out = dump("^.$");
    let lines = out.lines().skip(2).collect::<Vec<_>>();
    assert_eq!(lines, vec![" 2: bol -> 3", " 3: any -> 4", " 4: eol -> 1"]);
}

#[test]
fn counts_groups() {
    for (input, groups) in &[("abc", 0), ("(a)", 1), ("(a(b))|(c)", 3), ("((()))", 3)] {
        let graph = Compiler::compile(input).unwrap();
        assert_eq!(graph.groups(), *groups, "{}", input);
    }
}

#[test]
fn compiling_twice_yields_the_same_graph() {
    for input in &["(\\w+) and \\1", "(cat|dog)s?", "^[^abc]+$", "a|b|(c+)?"] {
        assert_eq!(dump(input), dump(input));
    }
}

#[test]
fn every_node_but_the_top_sink_continues() {
    for input in &["(a|b)+c?", "a|", "((x)|y)z", "()"] {
        let graph = Compiler::compile(input).unwrap();
        let terminals = (0..graph.len())
            .filter(|&i| graph.node(NodeId::from_index(i)).is_terminal())
            .collect::<Vec<_>>();
        assert_eq!(terminals, vec![1], "{}", input);
    }
}
