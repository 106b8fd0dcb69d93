//! E2E tests for the query commands:
//! `skyroute route`, `region`, `stops`, `connections`, `projection`, `mst`.
//!
//! Every test runs the binary against a small fixture network written into
//! a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Test harness helpers
// ---------------------------------------------------------------------------

const FIXTURE: &str = "\
Origin,Destination,Origin City,Destination City,Distance,Cost
ABE,ATL,\"Allentown, PA\",\"Atlanta, GA\",692,156
ATL,MIA,\"Atlanta, GA\",\"Miami, FL\",595,120
ABE,PHL,\"Allentown, PA\",\"Philadelphia, PA\",55,80
PHL,MIA,\"Philadelphia, PA\",\"Miami, FL\",1013,199
MIA,TPA,\"Miami, FL\",\"Tampa, FL\",204,70
TPA,ATL,\"Tampa, FL\",\"Atlanta, GA\",406,95
ABE,MIA,\"Allentown, PA\",\"Miami, FL\",1500,300
";

fn sky_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("skyroute"));
    cmd.current_dir(dir);
    cmd.env("SKYROUTE_LOG", "error");
    cmd.env("HOME", dir);
    cmd.env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd.env_remove("SKYROUTE_ROUTES");
    cmd.env_remove("SKYROUTE_FORMAT");
    cmd
}

fn fixture_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("routes.csv"), FIXTURE).expect("write fixture");
    dir
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = sky_cmd(dir)
        .args(["--routes", "routes.csv", "--json"])
        .args(args)
        .output()
        .expect("skyroute should not crash");
    assert!(
        output.status.success(),
        "skyroute {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid JSON output")
}

fn path_of(value: &Value) -> Vec<&str> {
    value["path"]
        .as_array()
        .expect("path array")
        .iter()
        .map(|v| v.as_str().expect("code"))
        .collect()
}

// ---------------------------------------------------------------------------
// route
// ---------------------------------------------------------------------------

#[test]
fn route_json_reports_shortest_path() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["route", "ABE", "MIA"]);
    assert_eq!(json["found"], true);
    assert_eq!(path_of(&json), vec!["ABE", "PHL", "MIA"]);
    assert_eq!(json["total_distance"], 1068);
    assert_eq!(json["total_cost"], 279);
}

#[test]
fn route_text_output_is_one_line() {
    let dir = fixture_dir();
    sky_cmd(dir.path())
        .args(["--routes", "routes.csv", "--format", "text", "route", "ABE", "TPA"])
        .assert()
        .success()
        .stdout("ABE -> PHL -> MIA -> TPA  distance=1272  cost=349\n");
}

#[test]
fn route_pretty_output_has_sections() {
    let dir = fixture_dir();
    sky_cmd(dir.path())
        .args(["--routes", "routes.csv", "--format", "pretty", "route", "ABE", "MIA"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route ABE → MIA"))
        .stdout(predicate::str::contains("Distance:    1068"));
}

#[test]
fn unknown_airport_is_a_normal_result() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["route", "ABE", "ZZZ"]);
    assert_eq!(json["found"], false);
    assert_eq!(json["destination"], "ZZZ");
    assert!(json["path"].as_array().is_some_and(Vec::is_empty));
}

#[test]
fn unreachable_destination_is_a_normal_result() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["route", "MIA", "ABE"]);
    assert_eq!(json["found"], false);
}

// ---------------------------------------------------------------------------
// region
// ---------------------------------------------------------------------------

#[test]
fn region_lists_each_airport_in_discovery_order() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["region", "ABE", "FL"]);
    let routes = json["routes"].as_array().expect("routes array");
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0]["destination"], "MIA");
    assert_eq!(routes[0]["total_distance"], 1068);
    assert_eq!(routes[1]["destination"], "TPA");
    assert_eq!(routes[1]["total_distance"], 1272);
}

#[test]
fn region_accepts_city_argument() {
    let dir = fixture_dir();
    let by_code = run_json(dir.path(), &["region", "ABE", "FL"]);
    let by_city = run_json(dir.path(), &["region", "ABE", "Orlando, FL"]);
    assert_eq!(by_code["routes"], by_city["routes"]);
}

#[test]
fn region_without_airports_is_empty() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["region", "ABE", "TX"]);
    assert!(json["routes"].as_array().is_some_and(Vec::is_empty));
}

// ---------------------------------------------------------------------------
// stops
// ---------------------------------------------------------------------------

#[test]
fn stops_zero_is_direct_route() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["stops", "ABE", "MIA", "--stops", "0"]);
    assert_eq!(json["stops"], 0);
    assert_eq!(path_of(&json), vec!["ABE", "MIA"]);
    assert_eq!(json["total_distance"], 1500);
}

#[test]
fn stops_one_picks_shortest_one_stop_route() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["stops", "ABE", "MIA", "-k", "1"]);
    assert_eq!(path_of(&json), vec!["ABE", "PHL", "MIA"]);
    assert_eq!(json["total_cost"], 279);
}

#[test]
fn stops_without_qualifying_route() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["stops", "ABE", "MIA", "--stops", "2"]);
    assert_eq!(json["found"], false);
    assert_eq!(json["stops"], 2);
}

// ---------------------------------------------------------------------------
// connections / projection / mst
// ---------------------------------------------------------------------------

#[test]
fn connections_ranked_by_total() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["connections"]);
    let airports = json["airports"].as_array().expect("airports array");
    let codes: Vec<&str> = airports
        .iter()
        .map(|a| a["code"].as_str().expect("code"))
        .collect();
    assert_eq!(codes, vec!["MIA", "ABE", "ATL", "PHL", "TPA"]);
    assert_eq!(airports[0]["inbound"], 3);
    assert_eq!(airports[0]["outbound"], 1);
    assert_eq!(airports[0]["total"], 4);
}

#[test]
fn connections_limit_truncates() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["connections", "--limit", "2"]);
    assert_eq!(json["airports"].as_array().map(Vec::len), Some(2));
}

#[test]
fn projection_has_one_edge_per_pair() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["projection"]);
    assert_eq!(json["airports"], 5);
    assert_eq!(json["edges"], 7);
    let rows = json["rows"].as_array().expect("rows array");
    assert_eq!(rows[0]["code"], "ABE");
    let abe: Vec<(&str, u64)> = rows[0]["links"]
        .as_array()
        .expect("links")
        .iter()
        .map(|l| (l["code"].as_str().expect("code"), l["weight"].as_u64().expect("weight")))
        .collect();
    assert_eq!(abe, vec![("ATL", 156), ("PHL", 80), ("MIA", 300)]);
}

#[test]
fn mst_algorithms_agree() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["mst"]);
    let trees = json["trees"].as_array().expect("trees array");
    assert_eq!(trees.len(), 2);
    assert_eq!(trees[0]["algorithm"], "prim");
    assert_eq!(trees[1]["algorithm"], "kruskal");
    for tree in trees {
        assert_eq!(tree["total_weight"], 401);
        assert_eq!(tree["complete"], true);
        assert_eq!(tree["edges"].as_array().map(Vec::len), Some(4));
    }
}

#[test]
fn mst_single_algorithm() {
    let dir = fixture_dir();
    let json = run_json(dir.path(), &["mst", "--algorithm", "kruskal"]);
    let trees = json["trees"].as_array().expect("trees array");
    assert_eq!(trees.len(), 1);
    assert_eq!(trees[0]["edges"][0]["from"], "MIA");
    assert_eq!(trees[0]["edges"][0]["to"], "TPA");
    assert_eq!(trees[0]["edges"][0]["weight"], 70);
}

#[test]
fn text_mode_commands_succeed() {
    let dir = fixture_dir();
    for args in [
        vec!["region", "ABE", "FL"],
        vec!["stops", "ABE", "MIA", "--stops", "1"],
        vec!["connections"],
        vec!["projection"],
        vec!["mst"],
    ] {
        for format in ["text", "pretty"] {
            sky_cmd(dir.path())
                .args(["--routes", "routes.csv", "--format", format])
                .args(&args)
                .assert()
                .success()
                .stdout(predicate::str::is_empty().not());
        }
    }
}
