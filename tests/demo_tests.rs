//! Integration tests for the town walkthrough

mod common;

use common::zonenet;
use predicates::prelude::*;

#[test]
fn test_demo_human() {
    zonenet()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("BFS route A -> E: A -> C -> D -> E"))
        .stdout(predicate::str::contains(
            "Dijkstra route A -> E: A -> B -> C -> D -> E (weight 7)",
        ))
        .stdout(predicate::str::contains("Most connected zone: C (3 links)"))
        .stdout(predicate::str::contains("Direct link A-C: yes"))
        .stdout(predicate::str::contains(
            "After closing C-D, Dijkstra route A -> E: no route",
        ));
}

#[test]
fn test_demo_json() {
    let output = zonenet().args(["--format", "json", "demo"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bfs"]["zones"], serde_json::json!(["A", "C", "D", "E"]));
    assert_eq!(json["dijkstra"]["weight"], 7.0);
    assert_eq!(json["most_connected"]["zone"], "C");
    assert_eq!(json["most_connected"]["links"], 3);
    assert_eq!(json["direct_link_a_c"], true);
    assert!(json["dijkstra_after_closing"].is_null());
}
