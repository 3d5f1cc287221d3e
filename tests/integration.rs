//! Integration tests for switchcase.
//!
//! These tests drive the public API end to end: declaration, construction,
//! resolution and direct handler calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::json;
use switchcase::declare::{attribute, case, default, Entry};
use switchcase::{
    build, build_and_resolve, resolve, CallArgs, Outcome, Switch, SwitchConfig, SwitchError,
};

fn returning(value: &'static str) -> impl Fn(&CallArgs) -> switchcase::Result<&'static str> {
    move |_| Ok(value)
}

/// play→A, back→B, forward→C, (back, forward)→D with multi-bind.
#[test]
fn test_multi_bind_commands() {
    let entries: Vec<Entry<String>> = vec![
        Entry::new("_", case(["play"]).unwrap().handle(returning("A"))),
        Entry::new("_", case(["back"]).unwrap().handle(returning("B"))),
        Entry::new("_", case(["forward"]).unwrap().handle(returning("C"))),
        Entry::new("_", case(["back", "forward"]).unwrap().handle(returning("D"))),
    ];
    let switch = build(entries, &SwitchConfig::with_duplicates()).unwrap();

    let outcome = switch.switch("back", &CallArgs::new()).unwrap();
    assert_eq!(outcome, Outcome::Multiple(vec![json!("B"), json!("D")]));

    let outcome = switch.switch("forward", &CallArgs::new()).unwrap();
    assert_eq!(outcome.into_values(), vec![json!("C"), json!("D")]);

    let err = switch.switch("nonexistent", &CallArgs::new()).unwrap_err();
    assert!(matches!(err, SwitchError::NoMatch(_)));
}

/// Single bindings plus a default, duplicates disallowed: results unwrapped.
#[test]
fn test_default_without_duplicates() {
    let switch = Switch::<String>::builder()
        .case("_", ["play"], returning("A"))
        .case("_", ["back"], returning("B"))
        .case("_", ["forward"], returning("C"))
        .default_case("_", returning("E"))
        .build()
        .unwrap();

    assert!(!switch.allow_duplicates());
    assert_eq!(
        switch.switch("exit", &CallArgs::new()).unwrap(),
        Outcome::Single(json!("E"))
    );
    assert_eq!(
        switch.switch("play", &CallArgs::new()).unwrap(),
        Outcome::Single(json!("A"))
    );
}

/// A case with no values fails before any table exists.
#[test]
fn test_empty_case_fails_immediately() {
    let result = case::<String, [&str; 0]>([]);
    assert!(matches!(result, Err(SwitchError::MalformedDeclaration)));
}

/// Duplicate values are rejected by default, without ever resolving.
#[test]
fn test_forbidden_duplicates() {
    let result = Switch::<String>::builder()
        .case("_", ["a"], |_: &CallArgs| Ok(()))
        .case("_", ["b", "a"], |_: &CallArgs| Ok(()))
        .build();

    assert!(matches!(result, Err(SwitchError::DuplicateCaseValue(_))));
}

#[test]
fn test_multiple_defaults() {
    let result = Switch::<String>::builder()
        .allow_duplicates(true)
        .default_case("_", |_: &CallArgs| Ok(()))
        .default_case("_", |_: &CallArgs| Ok(()))
        .build();

    assert!(matches!(result, Err(SwitchError::DuplicateDefault)));
}

#[test]
fn test_reserved_case_name() {
    let result = Switch::<String>::builder()
        .allow_duplicates(true)
        .case(switchcase::RESERVED_NAME, ["x"], |_: &CallArgs| Ok(()))
        .build();

    assert!(matches!(result, Err(SwitchError::ReservedName(_))));
}

/// Non-string match values work like any other hashable key.
#[test]
fn test_integer_and_string_cases() {
    let switch = Switch::<i64>::builder()
        .allow_duplicates(true)
        .case("_", [99i64], returning("99"))
        .case("_", [1i64, 2], returning("small"))
        .build()
        .unwrap();

    assert_eq!(
        switch.switch(&99i64, &CallArgs::new()).unwrap().into_value(),
        json!(["99"])
    );
    assert_eq!(
        switch.switch(&2i64, &CallArgs::new()).unwrap().into_value(),
        json!(["small"])
    );
}

/// Handlers receive positional and keyword arguments unchanged.
#[test]
fn test_cases_taking_args_and_kwargs() {
    let switch = Switch::<String>::builder()
        .allow_duplicates(true)
        .case("_", ["play"], |args: &CallArgs| {
            assert_eq!(args.arg::<i32>(0)?, 99);
            assert_eq!(args.kwarg::<String>("kw")?, "kw");
            Ok("play")
        })
        .case("_", ["back"], |args: &CallArgs| {
            assert_eq!(args.arg::<i32>(0)?, 99);
            Ok("back")
        })
        .case("_", ["forward"], |args: &CallArgs| {
            let kw2: String = args.kwarg_or("kw2", "4".to_string())?;
            assert_eq!(kw2, "kw2");
            Ok("forward")
        })
        .case("_", ["back", "forward"], |args: &CallArgs| {
            assert_eq!(args.arg::<i32>(0)?, 99);
            Ok("back or forward")
        })
        .default_case_typed("_", |param: i32| {
            assert_eq!(param, 99);
            Ok("default")
        })
        .build()
        .unwrap();

    let args = CallArgs::new()
        .with_arg(99)
        .with_kwarg("kw", "kw")
        .with_kwarg("kw2", "kw2");

    let output = switch.switch("back", &args).unwrap();
    assert_eq!(output.into_value(), json!(["back", "back or forward"]));

    let output = switch.switch("non-command", &args).unwrap();
    assert_eq!(output.into_value(), json!(["default"]));

    let output = switch.switch("play", &args).unwrap();
    assert_eq!(output.into_value(), json!(["play"]));
}

/// A named case handler is callable directly and returns its plain value.
#[test]
fn test_named_handler_called_directly() {
    let (switch, initial) = Switch::<String>::builder()
        .allow_duplicates(true)
        .case("_", ["water"], returning("water"))
        .case("_", ["salad"], |_: &CallArgs| Ok(()))
        .case("anyname", ["water", "salad"], returning("water or salad"))
        .default_case("_", returning("default"))
        .build_on("zooba")
        .unwrap();

    assert_eq!(initial, Outcome::Multiple(vec![json!("default")]));

    let value = switch.switch("water", &CallArgs::new()).unwrap();
    assert_eq!(value.into_value(), json!(["water", "water or salad"]));

    let value = switch.switch("salad", &CallArgs::new()).unwrap();
    assert_eq!(value.into_value(), json!([null, "water or salad"]));

    assert_eq!(
        switch.call("anyname", &CallArgs::new()).unwrap(),
        json!("water or salad")
    );
    assert!(matches!(
        switch.call("_", &CallArgs::new()),
        Err(SwitchError::UnknownHandler(_))
    ));
}

/// Attributes pass through and can be added after construction.
#[test]
fn test_attributes() {
    let entries: Vec<Entry<String>> = vec![
        Entry::new("_", case(["x"]).unwrap().handle(|_: &CallArgs| Ok(()))),
        Entry::new("x", attribute(json!([1, 2, 3]))),
    ];
    let mut switch = build(entries, &SwitchConfig::default()).unwrap();
    switch.set_attr("y", json!([4, 5, 6]));

    assert_eq!(switch.attr("x"), Some(&json!([1, 2, 3])));
    assert_eq!(switch.attr("y"), Some(&json!([4, 5, 6])));
}

/// Handlers see state captured from their surroundings.
#[test]
fn test_handlers_capture_environment() {
    let counter = Arc::new(AtomicUsize::new(0));
    let seen = counter.clone();

    let switch = Switch::<String>::builder()
        .case("_", ["tick"], move |_: &CallArgs| {
            Ok(seen.fetch_add(1, Ordering::SeqCst) + 1)
        })
        .build()
        .unwrap();

    for _ in 0..3 {
        switch.switch("tick", &CallArgs::new()).unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

/// A finished switch can be resolved from several threads at once.
#[test]
fn test_concurrent_resolution() {
    let switch = Switch::<i32>::builder()
        .case_typed("_", [1], |n: i32| Ok(n + 1))
        .default_case_typed("_", |n: i32| Ok(n - 1))
        .build()
        .unwrap();

    std::thread::scope(|scope| {
        for i in 0..4i32 {
            let switch = &switch;
            scope.spawn(move || {
                let args = CallArgs::new().with_arg(i);
                let expected = if i % 2 == 1 { i + 1 } else { i - 1 };
                let outcome = switch.switch(&(i % 2), &args).unwrap();
                assert_eq!(outcome, Outcome::Single(json!(expected)));
            });
        }
    });
}

/// Build-then-resolve as a single call, plus free-standing resolution.
#[test]
fn test_build_and_resolve_entry_points() {
    let entries: Vec<Entry<String>> = vec![
        Entry::new("_", case(["egg"]).unwrap().handle(returning("egg"))),
        Entry::new("_", default(returning("default"))),
    ];

    let (switch, outcome) = build_and_resolve(
        entries,
        &SwitchConfig::default(),
        "egg",
        &CallArgs::new(),
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Single(json!("egg")));

    let outcome = resolve(switch.table(), "spam", &CallArgs::new()).unwrap();
    assert_eq!(outcome.decode::<String>().unwrap(), "default");
}
