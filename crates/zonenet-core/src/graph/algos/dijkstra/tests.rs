use super::*;

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let near = HeapEntry {
        distance: Weight::new(1.0),
        position: 4,
    };
    let far = HeapEntry {
        distance: Weight::new(2.0),
        position: 0,
    };
    let near_earlier = HeapEntry {
        distance: Weight::new(1.0),
        position: 1,
    };

    assert_eq!(near.cmp(&far), Ordering::Less);
    assert_eq!(far.cmp(&near), Ordering::Greater);

    // Equal distances fall back to store position
    assert_eq!(near_earlier.cmp(&near), Ordering::Less);

    assert_eq!(near, near);
    assert_ne!(near, near_earlier);
}

#[test]
fn test_min_heap_pops_earliest_zone_on_ties() {
    let mut heap = BinaryHeap::new();
    for (distance, position) in [(3.0, 0), (1.0, 5), (1.0, 2), (2.0, 1)] {
        heap.push(Reverse(HeapEntry {
            distance: Weight::new(distance),
            position,
        }));
    }

    let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.position)).collect();
    assert_eq!(order, vec![2, 5, 1, 0]);
}

#[test]
fn test_prefers_lighter_longer_route() {
    let graph = Graph::from_streets([("A", "B", 10.0), ("A", "C", 1.0), ("C", "B", 1.0)]);

    let route = dijkstra_path(&graph, &"A", &"B").unwrap();
    assert_eq!(route.zones, vec!["A", "C", "B"]);
    assert_eq!(route.weight.value(), 2.0);
    assert_eq!(route.hops, 2);
}

#[test]
fn test_uses_lightest_parallel_street() {
    let graph = Graph::from_streets([("A", "B", 5.0), ("A", "B", 2.0), ("A", "B", 9.0)]);

    let route = dijkstra_path(&graph, &"A", &"B").unwrap();
    assert_eq!(route.zones, vec!["A", "B"]);
    assert_eq!(route.weight.value(), 2.0);
}

#[test]
fn test_equal_weight_routes_follow_creation_order() {
    // A-B-D and A-C-D both weigh 2; B is created before C and settles first
    let graph = Graph::from_streets([
        ("A", "B", 1.0),
        ("A", "C", 1.0),
        ("C", "D", 1.0),
        ("B", "D", 1.0),
    ]);

    let route = dijkstra_path(&graph, &"A", &"D").unwrap();
    assert_eq!(route.zones, vec!["A", "B", "D"]);
}

#[test]
fn test_zero_weight_streets() {
    let graph = Graph::from_streets([("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 1.0)]);

    let route = dijkstra_path(&graph, &"A", &"C").unwrap();
    assert_eq!(route.zones, vec!["A", "B", "C"]);
    assert_eq!(route.weight.value(), 0.0);
}

#[test]
fn test_origin_equals_destination() {
    let graph = Graph::from_streets([("A", "B", 3.0)]);

    let route = dijkstra_path(&graph, &"A", &"A").unwrap();
    assert_eq!(route.zones, vec!["A"]);
    assert_eq!(route.hops, 0);
    assert_eq!(route.weight.value(), 0.0);
}

#[test]
fn test_unreachable_destination() {
    let graph = Graph::from_streets([("A", "B", 1.0), ("C", "D", 1.0)]);

    let err = dijkstra_path(&graph, &"A", &"D").unwrap_err();
    assert!(matches!(
        err,
        ZoneNetError::Unreachable { ref from, ref to } if from == "A" && to == "D"
    ));
}

#[test]
fn test_isolated_destination() {
    let mut graph = Graph::from_streets([("A", "B", 1.0)]);
    graph.add_zone("Z");

    assert!(matches!(
        dijkstra_path(&graph, &"A", &"Z"),
        Err(ZoneNetError::Unreachable { .. })
    ));
}

#[test]
fn test_unknown_zones() {
    let graph = Graph::from_streets([("A", "B", 1.0)]);

    assert!(matches!(
        dijkstra_path(&graph, &"Q", &"B"),
        Err(ZoneNetError::UnknownZone { ref zone }) if zone == "Q"
    ));
    assert!(matches!(
        dijkstra_path(&graph, &"A", &"Q"),
        Err(ZoneNetError::UnknownZone { ref zone }) if zone == "Q"
    ));
}

#[test]
fn test_numeric_zone_ids() {
    let graph = Graph::from_streets([(1u32, 2u32, 4.0), (2, 3, 1.5), (1, 3, 6.0)]);

    let route = dijkstra_path(&graph, &1, &3).unwrap();
    assert_eq!(route.zones, vec![1, 2, 3]);
    assert_eq!(route.weight.value(), 5.5);
}
