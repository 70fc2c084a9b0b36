pub mod any;
pub mod collect;
pub mod every;
pub mod filter;
pub mod fold;
pub mod map;
pub mod value;

#[cfg(test)]
mod tests {
    use ::std::sync::atomic::{AtomicUsize, Ordering};
    use ::std::sync::{Arc, Mutex};
    use ::std::time::Duration;

    use futures::future::{ready, BoxFuture, FutureExt, Ready};

    use crate::*;

    fn xs() -> Stream<Sequence<i32>> {
        Stream::new(sequence(vec![1, 2, 3, 4]))
    }

    fn counted<T, P>(calls: &Arc<AtomicUsize>, predicate: P) -> impl Fn(&T) -> Ready<bool>
    where
        P: Fn(&T) -> bool,
    {
        let calls = calls.clone();

        move |x| {
            calls.fetch_add(1, Ordering::Relaxed);

            ready(predicate(x))
        }
    }

    fn counting_step(calls: &Arc<AtomicUsize>) -> StepFn<impl FnMut(Vec<i32>, i32) -> Ready<Vec<i32>>> {
        let calls = calls.clone();

        step_fn(move |mut acc: Vec<i32>, x: i32| {
            calls.fetch_add(1, Ordering::Relaxed);
            acc.push(x);

            ready(acc)
        })
    }

    /// Source that keeps visiting items no matter whether the step is full.
    #[derive(Clone)]
    struct Stubborn(Vec<i32>);

    impl<'a> Items<'a> for Stubborn {
        type Item = i32;
    }

    impl<'a, A> Foldable<'a, A> for Stubborn
    where
        A: Send + 'a,
    {
        fn fold<S>(&self, initial: A, step: S) -> BoxFuture<'a, A>
        where
            S: Folder<'a, A, i32>,
        {
            let xs = self.0.clone();

            async move {
                let mut step = step;
                let mut acc = initial;

                for x in xs {
                    let (next, result) = step.consume(acc, x).await;

                    step = next;
                    acc = result;
                }

                acc
            }
            .boxed()
        }
    }

    /// Source that reports a final accumulator as soon as it sees the
    /// second item, and keeps going afterwards.
    #[derive(Clone)]
    struct HaltOnSecond;

    impl<'a> Items<'a> for HaltOnSecond {
        type Item = i32;
    }

    impl<'a> Foldable<'a, Flow<i32>> for HaltOnSecond {
        fn fold<S>(&self, initial: Flow<i32>, step: S) -> BoxFuture<'a, Flow<i32>>
        where
            S: Folder<'a, Flow<i32>, i32>,
        {
            async move {
                let (step, acc) = step.consume(initial, 1).await;
                let (step, acc) = step.consume(end(acc.into_value() + 99), 2).await;
                let (_, acc) = step.consume(acc, 3).await;

                acc
            }
            .boxed()
        }
    }

    #[test]
    fn test_end() {
        let s = xs();

        assert!(is_final(&s.end(1)));
        assert_eq!(s.end(1).into_value(), 1);
        assert!(!is_final(&Flow::Continue(1)));
    }

    #[test]
    fn test_fold() {
        let s = xs();

        let sum = s
            .fold(0, step_fn(|acc: i32, x: i32| ready(acc + x)), identity)
            .exec();
        let product = s
            .fold(1, step_fn(|acc: i32, x: i32| ready(acc * x)), |x| x + 1)
            .exec();

        assert_eq!(sum, 10);
        assert_eq!(product, 25);
    }

    #[test]
    fn test_fold_finishes_on_final_accumulator() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let done = Arc::new(Mutex::new(Vec::new()));
        let done2 = done.clone();

        let step = step_fn(move |acc: i32, x: i32| {
            calls2.fetch_add(1, Ordering::Relaxed);

            ready(acc + x)
        });

        Stream::new(HaltOnSecond)
            .fold(0, step, move |x| done2.lock().unwrap().push(x))
            .exec();

        assert_eq!(calls.load(Ordering::Relaxed), 1);
        assert_eq!(*done.lock().unwrap(), vec![100]);
    }

    #[test]
    fn test_as_array() {
        let s = xs();

        assert_eq!(s.as_array(identity).exec(), vec![1, 2, 3, 4]);
        assert_eq!(s.as_array(|xs| xs.len()).exec(), 4);
    }

    #[test]
    fn test_value() {
        let x = xs().value(0, identity).exec();

        assert_eq!(x, 0);
    }

    #[test]
    fn test_map() {
        let s = xs();

        let same = s.map(|x| ready(x)).as_array(identity).exec();
        let ones = s.map(|_| ready(1)).as_array(identity).exec();
        let entries = Stream::new(mapping(vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)]))
            .map(|_| ready(1))
            .as_array(identity)
            .exec();

        assert_eq!(same, vec![1, 2, 3, 4]);
        assert_eq!(ones, vec![1, 1, 1, 1]);
        assert_eq!(entries, vec![1, 1, 1, 1]);
        assert_eq!(s.as_array(identity).exec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_map_changes_item_type() {
        let xs = xs()
            .map(|x| ready(format!("#{}", x)))
            .as_array(identity)
            .exec();

        assert_eq!(xs, vec!["#1", "#2", "#3", "#4"]);
    }

    #[test]
    fn test_filter() {
        let s = xs();
        let steps = Arc::new(AtomicUsize::new(0));

        let evens = s
            .filter(|x| ready(x % 2 == 0))
            .fold(Vec::new(), counting_step(&steps), identity)
            .exec();

        assert_eq!(evens, vec![2, 4]);
        assert_eq!(steps.load(Ordering::Relaxed), 2);
        assert_eq!(s.as_array(identity).exec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_every() {
        let s = xs();
        let calls = Arc::new(AtomicUsize::new(0));

        let all = s
            .every(counted(&calls, |x: &i32| *x > 0))
            .value(true, identity)
            .exec();

        assert!(all);
        assert_eq!(calls.load(Ordering::Relaxed), 4);
        assert_eq!(s.as_array(identity).exec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_every_stops_at_first_failure() {
        let calls = Arc::new(AtomicUsize::new(0));

        let all = xs()
            .every(counted(&calls, |x: &i32| *x < 3))
            .value(true, identity)
            .exec();

        assert!(!all);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_every_failing_on_last_item() {
        let all = Stream::new(sequence(vec![1, 2, 3]))
            .every(|x| ready(*x < 3))
            .value(true, identity)
            .exec();

        assert!(!all);
    }

    #[test]
    fn test_every_on_stubborn_source() {
        let calls = Arc::new(AtomicUsize::new(0));

        let all = Stream::new(Stubborn(vec![1, 2, 3, 4]))
            .every(counted(&calls, |x: &i32| *x < 3))
            .value(true, identity)
            .exec();

        assert!(!all);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_any() {
        let s = xs();
        let calls = Arc::new(AtomicUsize::new(0));

        let found = s
            .any(counted(&calls, |x: &i32| *x > 2))
            .value(false, identity)
            .exec();

        assert!(found);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(s.as_array(identity).exec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_any_without_match() {
        let calls = Arc::new(AtomicUsize::new(0));

        let found = xs()
            .any(counted(&calls, |_: &i32| false))
            .value(false, identity)
            .exec();

        assert!(!found);
        assert_eq!(calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_empty_stream_keeps_initial() {
        let empty = Stream::new(sequence(Vec::<i32>::new()));

        assert!(empty.every(|_| ready(false)).value(true, identity).exec());
        assert!(!empty.any(|_| ready(true)).value(false, identity).exec());
        assert!(empty.as_array(identity).exec().is_empty());
    }

    #[test]
    fn test_derived_stream_refolds_parent() {
        let calls = Arc::new(AtomicUsize::new(0));
        let odds = xs().filter(counted(&calls, |x: &i32| x % 2 == 1));

        assert_eq!(odds.as_array(identity).exec(), vec![1, 3]);
        assert_eq!(odds.as_array(identity).exec(), vec![1, 3]);
        assert_eq!(calls.load(Ordering::Relaxed), 8);
    }

    #[test]
    fn test_chained_combinators() {
        let calls = Arc::new(AtomicUsize::new(0));

        let doubled = xs()
            .filter(|x| ready(*x > 1))
            .map(|x| ready(x * 2))
            .every(counted(&calls, |x: &i32| *x < 6))
            .value(true, identity)
            .exec();

        assert!(!doubled);
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_stream_backed_by_stream() {
        let inner = xs().map(|x| ready(x + 1));
        let outer = Stream::new(inner).filter(|x| ready(x % 2 == 1));

        assert_eq!(outer.as_array(identity).exec(), vec![3, 5]);
    }

    #[test]
    fn test_stream_as_foldable() {
        let evens = xs().filter(|x| ready(x % 2 == 0));

        let sum = Foldable::fold(&evens, 0, step_fn(|acc: i32, x: i32| ready(acc + x)))
            .exec_with(SequentialExecutor);

        assert_eq!(sum, 6);
    }

    #[test]
    fn test_stream_backed_by_every_stream() {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = xs().every(counted(&calls, |x: &i32| *x < 3));

        let all = Stream::new(inner.clone()).value(true, identity).exec();

        assert!(!all);
        assert_eq!(calls.load(Ordering::Relaxed), 3);
        assert_eq!(inner.value(true, identity).exec(), all);
    }

    #[test]
    fn test_stream_backed_by_any_stream() {
        let found = Stream::new(xs().any(|x| ready(*x == 2)))
            .value(false, identity)
            .exec();
        let missing = Stream::new(xs().any(|x| ready(*x > 4)))
            .value(false, identity)
            .exec();

        assert!(found);
        assert!(!missing);
    }

    #[tokio::test]
    async fn test_suspending_predicates_run_in_order() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let events2 = events.clone();

        let found = xs()
            .any(move |x| {
                let x = *x;
                let events = events2.clone();

                async move {
                    events.lock().unwrap().push(format!("start {}", x));
                    tokio::time::sleep(Duration::from_millis(5 - x as u64)).await;
                    events.lock().unwrap().push(format!("end {}", x));

                    x == 2
                }
            })
            .value(false, identity)
            .drive()
            .await;

        assert!(found);
        assert_eq!(
            *events.lock().unwrap(),
            vec!["start 1", "end 1", "start 2", "end 2"]
        );
    }

    #[tokio::test]
    async fn test_concurrent_folds_do_not_interfere() {
        let s = xs();

        let slow = s
            .map(|x| async move {
                tokio::task::yield_now().await;

                x * 10
            })
            .as_array(identity)
            .drive();
        let small = s.every(|x| ready(*x < 10)).value(true, identity).drive();
        let plain = s.as_array(identity).drive();

        let (slow, small, plain) = futures::join!(slow, small, plain);

        assert_eq!(slow, vec![10, 20, 30, 40]);
        assert!(small);
        assert_eq!(plain, vec![1, 2, 3, 4]);
    }
}
