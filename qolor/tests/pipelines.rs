///
/// Integration tests for composed pipelines.
///
/// Tests cover:
/// - Shortest paths with pipelines driving the relaxation step
/// - Multi-way joins feeding aggregates
/// - Shared consumption through a synchronized iterable
/// - Capability propagation through adaptor chains
///

use std::collections::{BTreeMap, VecDeque};
use std::thread;

use qolor::{Capabilities, Category, Cursor, Iterable, SliceCursor, WhereCursor, from, from_iter, range};

#[test]
fn test_shortest_paths() {
    // (from, to, distance)
    let edges = [(1, 2, 7.0), (1, 3, 9.0), (1, 6, 14.0), (2, 3, 10.0), (2, 4, 15.0),
        (3, 4, 11.0), (3, 6, 2.0), (4, 5, 6.0), (5, 6, 9.0)];

    let mut links: BTreeMap<i32, Vec<(i32, f64)>> = BTreeMap::new();
    for (a, b, d) in from(&edges) {
        links.entry(a).or_default().push((b, d));
        links.entry(b).or_default().push((a, d));
    }

    let mut best: BTreeMap<i32, (f64, i32)> =
        links.keys().map(|&n| (n, (f64::MAX, -1))).collect();
    best.insert(1, (0.0, -1));
    let mut queue = VecDeque::from([1]);

    while let Some(node) = queue.pop_front() {
        let dist = best[&node].0;
        let improved = from(links[&node].as_slice())
            .r#where(|(next, d)| best[next].0 > dist + d)
            .to_vector();
        for (next, d) in improved {
            best.insert(next, (dist + d, node));
            queue.push_back(next);
        }
    }

    let mut path = Vec::new();
    let mut node = 5;
    while node >= 0 {
        path.push((node, best[&node].0));
        node = best[&node].1;
    }
    assert_eq!(path, vec![(5, 20.0), (6, 11.0), (3, 9.0), (1, 0.0)]);
}

#[test]
fn test_join_then_aggregate() {
    let customers = [(1, "ann"), (2, "bob"), (3, "cy")];
    let orders = [(10, 1, 25), (11, 2, 5), (12, 1, 40), (13, 3, 0)];

    let ann_total = from(&customers)
        .r#where(|c| c.1 == "ann")
        .join(from(&orders), |c, o| c.0 == o.1)
        .select(|&(_, _, _, _, amount)| amount)
        .sum();
    assert_eq!(ann_total, 65);

    let pairs = from(&customers)
        .join(from(&orders), |c, o| c.0 == o.1 && o.2 > 0)
        .select(|row| (row.1, row.2))
        .to_vector();
    assert_eq!(pairs, vec![("ann", 10), ("ann", 12), ("bob", 11)]);
}

#[test]
fn test_join_input_left_side() {
    let right = [1, 2, 3];
    let out = from_iter(vec![(2,), (3,), (9,)])
        .join(from(&right).select(|&x| (x * 10,)), |l, r| l.0 * 10 == r.0)
        .to_vector();
    assert_eq!(out, vec![(2, 20), (3, 30)]);
}

#[test]
fn test_synchronized_pipeline() {
    let shared = range(0u32, 500).synchronized();
    let counts: Vec<usize> = thread::scope(|s| {
        let workers: Vec<_> = (0..3)
            .map(|_| {
                let handle = shared.clone().into_cursor();
                s.spawn(move || {
                    let mut taken = 0;
                    while handle.pop().is_some() {
                        taken += 1;
                    }
                    taken
                })
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });
    assert_eq!(counts.iter().sum::<usize>(), 500);
    let mut rest = shared;
    assert!(rest.is_empty());
}

#[test]
fn test_capabilities_through_chain() {
    type Filtered<'a> = WhereCursor<SliceCursor<'a, u8>, fn(&u8) -> bool>;
    let caps = Iterable::<Filtered<'_>>::capabilities();
    assert_eq!(caps.category, Category::Forward);
    assert!(caps.resettable);

    let synced = range(0, 3).synchronized();
    assert!(!capabilities_of(&synced).resettable);
    assert_eq!(capabilities_of(&synced).category, Category::Input);
}

fn capabilities_of<C: Cursor>(_: &Iterable<C>) -> Capabilities {
    Iterable::<C>::capabilities()
}
