//! A single dispatcher serving several threads at once.

use std::any::Any;
use std::thread;

use casematch::{Builder, Dispatcher};

type Shared = dyn Any + Send + Sync;

fn pricing() -> Dispatcher<Shared, u64> {
    Builder::<Shared, u64>::new()
        .match_equals(0_u32, |_| Ok(0))
        .match_type_if(|quantity: &u32| *quantity >= 100, |quantity| Ok(u64::from(*quantity) * 8))
        .match_type(|quantity: &u32| Ok(u64::from(*quantity) * 10))
        .match_type(|code: &String| Ok(u64::try_from(code.len()).unwrap_or(u64::MAX)))
        .build()
}

#[test]
fn scoped_threads_share_one_dispatcher() {
    let dispatcher = pricing();

    let totals: Vec<u64> = thread::scope(|scope| {
        let workers: Vec<_> = (0..4_u32)
            .map(|worker| {
                let dispatcher = &dispatcher;
                scope.spawn(move || {
                    (0..50_u32)
                        .map(|step| {
                            let quantity = worker * 50 + step;
                            dispatcher.apply(&quantity).expect("quantities are priced")
                        })
                        .sum::<u64>()
                })
            })
            .collect();
        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker panicked"))
            .collect()
    });

    let expected: u64 = (0..200_u32)
        .map(|quantity| match quantity {
            0 => 0,
            q if q >= 100 => u64::from(q) * 8,
            q => u64::from(q) * 10,
        })
        .sum();
    assert_eq!(totals.iter().sum::<u64>(), expected);
}

#[test]
fn clones_move_into_spawned_threads() {
    let dispatcher = pricing();

    let handles: Vec<_> = ["ab", "abcd"]
        .into_iter()
        .map(|code| {
            let local = dispatcher.clone();
            thread::spawn(move || local.apply(&String::from(code)).ok())
        })
        .collect();

    let answers: Vec<Option<u64>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();
    assert_eq!(answers, [Some(2), Some(4)]);
    assert!(!dispatcher.is_defined_at(&1.5_f32));
}
