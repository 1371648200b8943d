use portfolio_algorithms::knapsack::memoized::MEMOIZED_MAX_ITEMS;
use portfolio_challenges::knapsack::{builtin_scenarios, find_scenario, Challenge, Track};
use portfolio_runner::*;

#[test]
fn test_builtin_scenarios_pass() {
    for scenario in builtin_scenarios().unwrap() {
        let report = run_scenario(&scenario);
        assert!(report.passed(), "{}: {:?}", scenario.name, report.failures);
        assert_eq!(report.results.len(), 4);
        assert!(report.skipped.is_empty());
    }
}

#[test]
fn test_greedy_failure_report() {
    let report = run_scenario(&find_scenario("greedy-failure").unwrap());
    let greedy = report.result("greedy").unwrap();
    assert_eq!(greedy.total_value, 160);
    assert_eq!(greedy.total_hours, 30);
    assert_eq!(greedy.projects, vec!["X1", "X2"]);

    let bottom_up = report.result("bottom_up").unwrap();
    assert_eq!(bottom_up.total_value, 220);
    assert_eq!(bottom_up.total_hours, 50);
    assert_eq!(bottom_up.projects, vec!["X2", "X3"]);

    let text = format_report(&report);
    assert!(text.starts_with("===== greedy-failure ====="));
    assert!(text.contains("Expected optimum=220"));
    assert!(text.trim_end().ends_with("OK"));
}

#[test]
fn test_wrong_expectation_is_reported() {
    let scenario = find_scenario("extra-case").unwrap();
    let report = run_challenge(
        scenario.name,
        &scenario.challenge,
        Expectation {
            optimum: Some(10),
            greedy_reaches_optimum: Some(true),
        },
    );
    assert!(!report.passed());
    // three exact solvers plus greedy
    assert_eq!(report.failures.len(), 4);
    assert!(format_report(&report).contains("FAILED: brute_force found value 9, expected 10"));
}

#[test]
fn test_greedy_expected_to_fail_but_succeeds() {
    let scenario = find_scenario("class-example").unwrap();
    let report = run_challenge(
        scenario.name,
        &scenario.challenge,
        Expectation {
            optimum: Some(29),
            greedy_reaches_optimum: Some(false),
        },
    );
    assert_eq!(
        report.failures,
        vec!["greedy found value 29, expected it to fall short of 29".to_string()]
    );
}

#[test]
fn test_random_instance_without_expectation() {
    let challenge = Challenge::generate_instance(&seed_from_u64(3), &Track::default()).unwrap();
    let report = run_challenge("random-3", &challenge, Expectation::default());
    assert!(report.passed(), "{:?}", report.failures);
    assert_eq!(report.expected_value, None);
    let optimum = report.result("memoized").unwrap().total_value;
    assert!(report.result("greedy").unwrap().total_value <= optimum);
}

#[test]
fn test_brute_force_skipped_for_large_instances() {
    let track = Track {
        n_items: 30,
        ..Track::default()
    };
    let challenge = Challenge::generate_instance(&seed_from_u64(1), &track).unwrap();
    let report = run_challenge("large", &challenge, Expectation::default());
    assert!(report.passed(), "{:?}", report.failures);
    assert_eq!(report.skipped, vec!["brute_force"]);
    assert!(report.result("brute_force").is_none());
    assert!(format_report(&report).contains("brute_force  skipped"));
}

#[test]
fn test_memoized_skipped_for_deep_instances() {
    let triples = vec![("P", 2, 1); MEMOIZED_MAX_ITEMS + 1];
    let challenge = Challenge::from_triples(&triples, 5).unwrap();
    let report = run_challenge("deep", &challenge, Expectation::default());
    assert!(report.passed(), "{:?}", report.failures);
    assert_eq!(report.skipped, vec!["brute_force", "memoized"]);
    assert_eq!(report.result("bottom_up").unwrap().total_value, 10);
    assert_eq!(report.result("greedy").unwrap().total_value, 10);
    assert!(format_report(&report).contains("memoized     skipped"));
}

#[test]
fn test_report_json() {
    let report = run_scenario(&find_scenario("empty-list").unwrap());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["name"], "empty-list");
    assert_eq!(value["results"][3]["algorithm"], "bottom_up");
    assert_eq!(value["results"][3]["total_value"], 0);
}

#[test]
fn test_seed_from_u64() {
    let seed = seed_from_u64(1);
    assert_eq!(seed[0], 1);
    assert_eq!(seed[8], 1);
    assert_eq!(seed[7], 0);
    assert_ne!(seed_from_u64(1), seed_from_u64(2));
}
