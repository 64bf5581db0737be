//! Unit tests for extremum search and prefixed printing

use std::io::{self, Write};

use proptest::prelude::*;
use test_case::test_case;

use crate::{
    Error, Person, PrefixedLinePrinter, find_max_by_key, find_oldest, format_prefixed,
    print_with_prefix, try_find_max_by_key,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Keyed {
    key: i64,
    id: usize,
}

fn printed(prefix: &str, lines: &[&str]) -> String {
    let mut printer = PrefixedLinePrinter::new(Vec::new(), prefix);
    printer.print_all(lines).unwrap();
    String::from_utf8(printer.into_inner()).unwrap()
}

// ============================================================================
// Extremum Tests
// ============================================================================

#[test]
fn oldest_of_two_distinct_ages() {
    let people = vec![Person::new("Alice", 29), Person::new("Bob", 31)];
    assert_eq!(find_oldest(&people), Some(&Person::new("Bob", 31)));
}

#[test]
fn oldest_tie_returns_first() {
    let people = vec![Person::new("Alice", 31), Person::new("Bob", 31)];
    assert_eq!(find_oldest(&people), Some(&Person::new("Alice", 31)));
}

#[test]
fn tie_on_key_keeps_first_occurrence() {
    let items = [Keyed { key: 5, id: 0 }, Keyed { key: 5, id: 1 }];
    assert_eq!(find_max_by_key(items, |k| k.key).map(|k| k.id), Some(0));
}

#[test]
fn later_strictly_greater_replaces() {
    let items = [
        Keyed { key: 5, id: 0 },
        Keyed { key: 9, id: 1 },
        Keyed { key: 9, id: 2 },
        Keyed { key: 1, id: 3 },
    ];
    assert_eq!(find_max_by_key(items, |k| k.key).map(|k| k.id), Some(1));
}

#[test]
fn empty_input_returns_none() {
    let people: Vec<Person> = Vec::new();
    assert_eq!(find_oldest(&people), None);
    assert_eq!(find_max_by_key(&people, |p| p.age), None);
}

#[test]
fn zero_age_is_still_a_result() {
    let people = vec![Person::new("Newborn", 0)];
    assert_eq!(find_oldest(&people), Some(&people[0]));
}

#[test]
fn negative_keys_are_ordered() {
    let items = [-3_i64, -1, -7];
    assert_eq!(find_max_by_key(items, |k| *k), Some(-1));
}

#[test]
fn string_keys_use_lexicographic_order() {
    let people = vec![Person::new("Bob", 1), Person::new("Alice", 2)];
    let max = find_max_by_key(&people, |p| p.name.clone());
    assert_eq!(max.map(|p| p.name.as_str()), Some("Bob"));
}

#[test]
fn key_function_called_once_per_element() {
    let people = vec![
        Person::new("A", 1),
        Person::new("B", 3),
        Person::new("C", 2),
    ];
    let mut calls = 0;
    let _ = find_max_by_key(&people, |p| {
        calls += 1;
        p.age
    });
    assert_eq!(calls, 3);
}

#[test]
fn repeated_search_is_idempotent() {
    let people = vec![Person::new("Alice", 31), Person::new("Bob", 31)];
    let first = find_oldest(&people);
    let second = find_oldest(&people);
    assert_eq!(first, second);
}

#[test]
fn key_error_propagates_immediately() {
    let raw = ["4", "oops", "9", "also bad"];
    let mut visited = Vec::new();

    let result = try_find_max_by_key(raw, |s| {
        visited.push(*s);
        s.parse::<u32>()
    });

    assert!(result.is_err());
    assert_eq!(visited, ["4", "oops"]);
}

#[test]
fn key_error_on_first_element_propagates() {
    let raw = ["bad", "1"];
    assert!(try_find_max_by_key(raw, |s| s.parse::<u32>()).is_err());
}

#[test]
fn fallible_empty_input_is_ok_none() {
    let raw: [&str; 0] = [];
    assert_eq!(try_find_max_by_key(raw, |s| s.parse::<u32>()), Ok(None));
}

#[test]
fn fallible_tie_keeps_first() {
    let raw = ["07", "7", "3"];
    assert_eq!(
        try_find_max_by_key(raw, |s| s.parse::<u32>()),
        Ok(Some("07"))
    );
}

// ============================================================================
// Printer Tests
// ============================================================================

#[test]
fn prints_lines_in_order() {
    assert_eq!(printed("P", &["x", "y"]), "P x\nP y\n");
}

#[test]
fn empty_input_prints_nothing() {
    let mut printer = PrefixedLinePrinter::new(Vec::new(), "P");
    let written = printer.print_all(Vec::<String>::new()).unwrap();
    assert_eq!(written, 0);
    assert!(printer.into_inner().is_empty());
}

#[test_case("", &["x"] => " x\n"; "empty prefix keeps separator")]
#[test_case("P", &[""] => "P \n"; "empty line")]
#[test_case(">>", &["a b", " c"] => ">> a b\n>>  c\n"; "inner spaces untouched")]
#[test_case("Hello", &["hi", "안녕"] => "Hello hi\nHello 안녕\n"; "unicode")]
fn print_cases(prefix: &str, lines: &[&str]) -> String {
    printed(prefix, lines)
}

#[test]
fn print_all_reports_line_count() {
    let mut printer = PrefixedLinePrinter::new(Vec::new(), "P");
    assert_eq!(printer.print_all(["a", "b", "c"]).unwrap(), 3);
    assert_eq!(printer.prefix(), "P");
}

#[test]
fn print_all_accepts_owned_strings() {
    let lines = vec![String::from("one"), String::from("two")];
    let mut printer = PrefixedLinePrinter::new(Vec::new(), String::from("-"));
    printer.print_all(&lines).unwrap();
    assert_eq!(printer.into_inner(), b"- one\n- two\n");
}

#[test]
fn format_prefixed_matches_printer() {
    assert_eq!(format_prefixed("P", "x"), "P x");
    assert_eq!(printed("P", &["x"]), format!("{}\n", format_prefixed("P", "x")));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_surfaces_as_io_error() {
    let mut printer = PrefixedLinePrinter::new(FailingWriter, "P");
    let err = printer.print_all(["x"]).unwrap_err();
    assert!(matches!(err, Error::Io { ref source } if source.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn print_with_prefix_to_stdout_succeeds() {
    print_with_prefix(["stdout line"], "test:").unwrap();
    print_with_prefix(Vec::<&str>::new(), "test:").unwrap();
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property: The result is an element whose key is >= every key
    #[test]
    fn prop_result_is_a_maximal_element(keys in prop::collection::vec(-1000i64..1000, 1..64)) {
        let items: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(id, &key)| Keyed { key, id })
            .collect();

        let best = find_max_by_key(&items, |k| k.key).unwrap();

        prop_assert!(items.contains(best));
        prop_assert!(items.iter().all(|k| best.key >= k.key));
    }

    /// Property: Among equal maxima, the earliest index wins
    #[test]
    fn prop_first_maximum_wins(keys in prop::collection::vec(0i64..5, 1..64)) {
        let items: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(id, &key)| Keyed { key, id })
            .collect();

        let best = find_max_by_key(&items, |k| k.key).unwrap();
        let max_key = keys.iter().copied().max().unwrap();
        let first_index = keys.iter().position(|&k| k == max_key).unwrap();

        prop_assert_eq!(best.id, first_index);
    }

    /// Property: Searching the same materialized input twice agrees
    #[test]
    fn prop_search_is_idempotent(keys in prop::collection::vec(any::<i32>(), 0..64)) {
        prop_assert_eq!(
            find_max_by_key(&keys, |k| **k),
            find_max_by_key(&keys, |k| **k)
        );
    }

    /// Property: Infallible and fallible search agree when the key never fails
    #[test]
    fn prop_fallible_matches_infallible(keys in prop::collection::vec(any::<i32>(), 0..64)) {
        let plain = find_max_by_key(&keys, |k| **k);
        let fallible: Result<_, ()> = try_find_max_by_key(&keys, |k| Ok(**k));
        prop_assert_eq!(fallible, Ok(plain));
    }

    /// Property: One output line per input, each exactly "<prefix> <line>"
    #[test]
    fn prop_printer_emits_one_prefixed_line_each(
        prefix in "[A-Za-z>:#-]{0,6}",
        lines in prop::collection::vec("[a-z ]{0,10}", 0..16),
    ) {
        let mut printer = PrefixedLinePrinter::new(Vec::new(), prefix.as_str());
        let written = printer.print_all(&lines).unwrap();
        let output = String::from_utf8(printer.into_inner()).unwrap();

        let expected: String = lines.iter().map(|l| format!("{prefix} {l}\n")).collect();
        prop_assert_eq!(written, lines.len());
        prop_assert_eq!(output, expected);
    }
}
