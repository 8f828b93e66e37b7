use std::path::Path;
use std::time::Duration;

use knights_tour::config::{ConfigError, StartRange, TourConfig, DEFAULT_STARTS};
use knights_tour::core::square::Square;
use knights_tour::report::{run_all, run_start, summarize, StartReport, TourStatus};
use knights_tour::search::{find_tour, SearchLimits, SearchStats};
use knights_tour::topology::AdjacencyTable;
use knights_tour::validate::ValidationError;

fn parse(json: &str) -> Result<TourConfig, ConfigError> {
    TourConfig::from_json(json.as_bytes(), Path::new("inline.json"))
}

#[test]
fn default_config_searches_a1_through_e2() {
    let cfg = TourConfig::default();
    assert_eq!(cfg.starts, DEFAULT_STARTS);
    let names: Vec<String> = cfg.starts.squares().map(|s| s.to_string()).collect();
    assert_eq!(names.len(), 13);
    assert_eq!(names.first().map(String::as_str), Some("a1"));
    assert_eq!(names.last().map(String::as_str), Some("e2"));
    assert!(cfg.limits.max_steps.is_none());
    assert!(!cfg.parallel);
}

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let cfg = parse(r#"{ "limits": { "max_steps": 5000 } }"#).unwrap();
    assert_eq!(cfg.starts, DEFAULT_STARTS);
    assert_eq!(cfg.limits, SearchLimits::with_max_steps(5000));

    let cfg = parse(r#"{ "starts": { "first": 60, "end": 64 }, "parallel": true }"#).unwrap();
    assert_eq!(cfg.starts, StartRange::new(60, 64));
    assert!(cfg.parallel);
}

#[test]
fn json_config_rejects_unknown_fields_and_bad_ranges() {
    assert!(matches!(
        parse(r#"{ "start_squares": 3 }"#),
        Err(ConfigError::Json { .. })
    ));
    assert!(matches!(
        parse(r#"{ "starts": { "first": 5, "end": 5 } }"#),
        Err(ConfigError::InvalidStartRange { first: 5, end: 5 })
    ));
    assert!(matches!(
        parse(r#"{ "starts": { "first": 0, "end": 65 } }"#),
        Err(ConfigError::InvalidStartRange { .. })
    ));
    assert!(matches!(
        parse(r#"{ "enumerate": 0 }"#),
        Err(ConfigError::ZeroEnumerate)
    ));
}

#[test]
fn missing_config_file_is_an_io_error() {
    let err = TourConfig::load(Path::new("/nonexistent/knights_tour.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn report_for_a1_matches_the_search() {
    let table = AdjacencyTable::shared();
    let report = run_start(Square::A1, table, &TourConfig::default());

    assert_eq!(report.status, TourStatus::Found);
    assert!(report.is_valid());
    assert_eq!(report.stats.completion_checks, 10_759);
    assert_eq!(report.path().map(|p| p.len()), Some(64));

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Finding path for square: a1");
    assert!(lines[1].starts_with("Time elapsed (ms): "));
    assert_eq!(lines[2], "Iterations: 10759");
    assert!(lines[3].starts_with("a1,c2,a3,b1,"));
    assert_eq!(lines[3].split(',').count(), 64);
    assert_eq!(lines[4], "Moves sequence is valid? true");
}

#[test]
fn exceeded_budget_is_reported_not_fatal() {
    let table = AdjacencyTable::shared();
    let cfg = TourConfig {
        limits: SearchLimits::with_max_steps(100),
        ..TourConfig::default()
    };
    let report = run_start(Square::A1, table, &cfg);

    assert_eq!(report.status, TourStatus::LimitExceeded);
    assert!(report.path().is_none());
    assert_eq!(report.stats.completion_checks, 101);
    assert_eq!(
        report.validation_error,
        Some(ValidationError::WrongLength { len: 1 })
    );

    let text = report.to_string();
    assert!(text.contains("search stopped: limit exceeded"));
    assert!(text.ends_with("Moves sequence is valid? false (invalid moves count: 1 (expected 64))"));
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let table = AdjacencyTable::shared();
    let seq_cfg = TourConfig::default();
    let par_cfg = TourConfig {
        parallel: true,
        ..TourConfig::default()
    };

    let seq = run_all(&seq_cfg, table);
    let par = run_all(&par_cfg, table);

    assert_eq!(seq.len(), 13);
    assert_eq!(par.len(), 13);
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.start, b.start);
        assert_eq!(a.tours, b.tours);
        assert_eq!(a.stats, b.stats);
    }

    let summary = summarize(&seq);
    assert_eq!(summary.searched, 13);
    assert_eq!(summary.found, 13);
    assert_eq!(summary.valid, 13);
    assert_eq!(summary.limit_exceeded, 0);
}

#[test]
fn enumeration_report_lists_every_tour() {
    let table = AdjacencyTable::shared();
    let cfg = TourConfig {
        enumerate: Some(2),
        ..TourConfig::default()
    };
    let report = run_start(Square::new(8).unwrap(), table, &cfg);

    assert_eq!(report.tours.len(), 2);
    assert!(report.is_valid());
    assert!(report
        .to_string()
        .contains("Tours found: 2 (search exhausted: false)"));
}

#[test]
fn reports_serialize_with_algebraic_squares() {
    let table = AdjacencyTable::shared();
    let report = run_start(Square::A1, table, &TourConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["start"], "a1");
    assert_eq!(json["status"], "found");
    assert_eq!(json["tours"][0][0], "a1");
    assert_eq!(json["tours"][0][1], "c2");
    assert_eq!(json["stats"]["completion_checks"], 10_759u64);
}

#[test]
fn budget_cut_enumeration_still_reports_its_tours() {
    let table = AdjacencyTable::shared();
    let cfg = TourConfig {
        limits: SearchLimits::with_max_steps(10_800),
        enumerate: Some(1000),
        ..TourConfig::default()
    };
    let report = run_start(Square::A1, table, &cfg);

    assert_eq!(report.status, TourStatus::LimitExceeded);
    assert!(report.tours.len() >= 3);
    assert!(report.is_valid());
    assert!(!report.exhausted);
    assert!(report.search_error.is_some());

    let text = report.to_string();
    let n = report.tours.len();
    assert_eq!(text.lines().filter(|l| l.starts_with("a1,")).count(), n);
    assert!(text.contains(&format!("Tours found: {n} (search exhausted: false)")));
    assert!(text.contains("search stopped: limit exceeded"));
    assert!(text.ends_with("Moves sequence is valid? true"));

    let summary = summarize(&[report]);
    assert_eq!(summary.limit_exceeded, 1);
    assert_eq!(summary.valid, 1);
}

#[test]
fn report_without_a_tour_says_so() {
    let report = StartReport {
        start: Square::new(27).unwrap(),
        status: TourStatus::NotFound,
        elapsed: Duration::ZERO,
        elapsed_ms: 0.0,
        stats: SearchStats {
            completion_checks: 42,
            backtracks: 41,
            max_depth: 7,
        },
        tours: Vec::new(),
        exhausted: true,
        validation_error: Some(ValidationError::WrongLength { len: 1 }),
        search_error: None,
    };

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "Finding path for square: d4",
            "Time elapsed (ms): 0.000",
            "Iterations: 42",
            "no path found",
            "Moves sequence is valid? false (invalid moves count: 1 (expected 64))",
        ]
    );
    assert!(report.path().is_none());
    assert!(!report.is_valid());

    let summary = summarize(&[report]);
    assert_eq!(summary.found, 0);
    assert_eq!(summary.valid, 0);
    assert_eq!(summary.limit_exceeded, 0);
}

#[test]
fn exhausted_enumeration_with_one_tour_shows_the_count() {
    let table = AdjacencyTable::shared();
    let tour = find_tour(Square::A1, table).unwrap();
    let report = StartReport {
        start: Square::A1,
        status: TourStatus::Found,
        elapsed: Duration::ZERO,
        elapsed_ms: 0.0,
        stats: SearchStats::default(),
        tours: vec![tour.clone()],
        exhausted: true,
        validation_error: None,
        search_error: None,
    };

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[3], tour.to_string());
    assert_eq!(lines[4], "Tours found: 1 (search exhausted: true)");
    assert_eq!(lines[5], "Moves sequence is valid? true");
    assert_eq!(lines.len(), 6);
}
