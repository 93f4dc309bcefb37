//! Tests for [`CaseEntry`] and [`MappedCase`].

use std::any::Any;
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::{fixture, rstest};

use crate::{Case, CaseEntry, Guard, Handler, MappedCase, Predicate};

type AnyCase = Arc<dyn Case<dyn Any, String, Infallible>>;

#[derive(Default)]
struct Counters {
    guard: Arc<AtomicUsize>,
    predicate: Arc<AtomicUsize>,
    handler: Arc<AtomicUsize>,
}

impl Counters {
    fn snapshot(&self) -> (usize, usize, usize) {
        (
            self.guard.load(Ordering::SeqCst),
            self.predicate.load(Ordering::SeqCst),
            self.handler.load(Ordering::SeqCst),
        )
    }
}

#[fixture]
fn counters() -> Counters {
    Counters::default()
}

fn counted_entry(counters: &Counters) -> CaseEntry<dyn Any, u32, String, Infallible> {
    let guard_calls = Arc::clone(&counters.guard);
    let predicate_calls = Arc::clone(&counters.predicate);
    let handler_calls = Arc::clone(&counters.handler);

    CaseEntry::new(
        Guard::<dyn Any, u32>::structural("u32", move |input| {
            guard_calls.fetch_add(1, Ordering::SeqCst);
            input.downcast_ref::<u32>()
        }),
        Some(Predicate::new(move |value: &u32| {
            predicate_calls.fetch_add(1, Ordering::SeqCst);
            *value > 10
        })),
        Handler::new(move |value: &u32| {
            handler_calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("big {value}"))
        }),
    )
}

#[rstest]
fn accepts_never_invokes_the_handler(counters: Counters) {
    let entry = counted_entry(&counters);

    assert!(entry.accepts(&20_u32));
    assert!(!entry.accepts(&5_u32));
    assert_eq!(counters.snapshot(), (2, 2, 0));
}

#[rstest]
fn predicate_is_skipped_when_guard_rejects(counters: Counters) {
    let entry = counted_entry(&counters);

    assert!(entry.try_apply(&"twenty").is_none());
    assert_eq!(counters.snapshot(), (1, 0, 0));
}

#[rstest]
fn try_apply_evaluates_each_phase_once(counters: Counters) {
    let entry = counted_entry(&counters);

    let outcome = entry.try_apply(&20_u32);
    assert_eq!(outcome, Some(Ok(String::from("big 20"))));
    assert_eq!(counters.snapshot(), (1, 1, 1));
}

#[rstest]
fn handler_is_skipped_when_predicate_rejects(counters: Counters) {
    let entry = counted_entry(&counters);

    assert!(entry.try_apply(&3_u32).is_none());
    assert_eq!(counters.snapshot(), (1, 1, 0));
}

#[test]
fn missing_predicate_always_holds() {
    let entry = CaseEntry::new(
        Guard::<dyn Any, u32>::exact(),
        None,
        Handler::new(|value: &u32| Ok::<_, Infallible>(value + 1)),
    );

    assert_eq!(entry.try_apply(&0_u32), Some(Ok(1)));
    assert!(entry.predicate().is_none());
}

#[test]
fn handler_errors_are_returned_verbatim() {
    #[derive(Debug, PartialEq)]
    struct Refused(&'static str);

    let entry = CaseEntry::new(
        Guard::<dyn Any, u32>::exact(),
        None,
        Handler::new(|_: &u32| Err::<(), _>(Refused("busy"))),
    );

    assert_eq!(entry.try_apply(&1_u32), Some(Err(Refused("busy"))));
}

#[rstest]
#[case::any_without_predicate(Guard::any(), None, true)]
#[case::any_with_predicate(Guard::any(), Some(Predicate::<dyn Any>::new(|_| true)), false)]
fn catch_all_requires_an_unconditional_any_guard(
    #[case] guard: Guard<dyn Any, dyn Any>,
    #[case] predicate: Option<Predicate<dyn Any>>,
    #[case] expected: bool,
) {
    let entry = CaseEntry::new(
        guard,
        predicate,
        Handler::<dyn Any, (), Infallible>::new(|_| Ok(())),
    );
    assert_eq!(entry.is_catch_all(), expected);
}

#[test]
fn exact_entry_is_not_a_catch_all() {
    let entry = CaseEntry::new(
        Guard::<dyn Any, u8>::exact(),
        None,
        Handler::new(|_: &u8| Ok::<_, Infallible>(())),
    );
    assert!(!entry.is_catch_all());
    assert_eq!(entry.label(), "u8");
}

#[test]
fn mapped_case_transforms_output_and_keeps_matching() {
    let inner: AnyCase = Arc::new(CaseEntry::new(
        Guard::<dyn Any, u32>::exact(),
        None,
        Handler::new(|value: &u32| Ok::<_, Infallible>(value.to_string())),
    ));
    let mapped = MappedCase::new(inner, Arc::new(|text: String| text.len()));

    assert_eq!(mapped.label(), "u32");
    assert!(mapped.accepts(&12_345_u32));
    assert_eq!(mapped.try_apply(&12_345_u32), Some(Ok(5)));
    assert!(mapped.try_apply(&"12345").is_none());
}
