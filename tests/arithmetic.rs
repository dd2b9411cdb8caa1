use pegtree::{
    combinator::{alt, literal, many0, regex, rule, seq},
    ErrorKind, Grammar, Value,
};

// sum := mul (("+" | "-") mul)*
// mul := num (("*" | "/") num)*
// num := [0-9]+
fn grammar() -> Grammar {
    Grammar::new()
        .rule(
            "sum",
            seq([rule("mul"), many0(seq([alt([literal("+"), literal("-")]), rule("mul")]))]),
        )
        .rule(
            "mul",
            seq([rule("num"), many0(seq([alt([literal("*"), literal("/")]), rule("num")]))]),
        )
        .rule("num", regex("[0-9]+"))
}

fn s(text: &str) -> Value {
    Value::Str(text.to_owned())
}

fn l(items: Vec<Value>) -> Value {
    Value::List(items)
}

fn mul(num: &str, steps: Vec<Value>) -> Value {
    l(vec![s(num), l(steps)])
}

fn step(op: &str, operand: Value) -> Value {
    l(vec![s(op), operand])
}

#[test]
fn single_number() {
    let res = pegtree::parse(&grammar(), "3").unwrap();

    assert_eq!(res, l(vec![mul("3", vec![]), l(vec![])]));
}

#[test]
fn mixed_expression() {
    let res = pegtree::parse(&grammar(), "3+1-2*4").unwrap();

    let expected = l(vec![
        mul("3", vec![]),
        l(vec![
            step("+", mul("1", vec![])),
            step("-", mul("2", vec![step("*", s("4"))])),
        ]),
    ]);
    assert_eq!(res, expected);
}

#[test]
fn division_chain() {
    let res = pegtree::parse(&grammar(), "8/4/2").unwrap();

    let expected = l(vec![
        mul("8", vec![step("/", s("4")), step("/", s("2"))]),
        l(vec![]),
    ]);
    assert_eq!(res, expected);
}

#[test]
fn multi_digit_numbers() {
    let res = pegtree::parse(&grammar(), "10*200").unwrap();

    assert_eq!(res, l(vec![mul("10", vec![step("*", s("200"))]), l(vec![])]));
}

#[test]
fn trailing_operator_aborts() {
    // After "+" is consumed the number terminal fails at end of input, and a
    // regex terminal failure is fatal rather than unwinding the repetition.
    let error = pegtree::parse(&grammar(), "3+").unwrap_err();
    assert!(error.is_fatal());
    assert!(matches!(error.kind(), ErrorKind::UnexpectedToken));
}

#[test]
fn leading_garbage_aborts() {
    let error = pegtree::parse(&grammar(), "x+1").unwrap_err();
    assert!(error.is_fatal());
    assert!(matches!(error.kind(), ErrorKind::UnexpectedToken));
}
