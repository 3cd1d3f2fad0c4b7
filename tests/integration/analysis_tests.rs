//! Integration tests for the unused-result analysis pipeline
//!
//! These run the full pipeline (parse, resolve, classify) over the Go
//! fixtures and check which calls get flagged.

use std::path::PathBuf;

use unusedresult::{Analyzer, Finding, UnusedResultConfig};

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/go")
}

/// Run the analyzer over a set of fixture files
fn analyze(files: &[&str], config: &UnusedResultConfig) -> Vec<Finding> {
    let mut analyzer = Analyzer::new().expect("grammar loads");
    for file in files {
        let path = fixtures_path().join(file);
        assert!(path.exists(), "fixture not found: {:?}", path);
        analyzer.add_file(&path).expect("fixture parses");
    }
    analyzer.run(config)
}

fn messages(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.message.as_str()).collect()
}

#[test]
fn test_kitchen_defaults() {
    let config = UnusedResultConfig::defaults();
    let findings = analyze(&["pizza.go", "kitchen.go"], &config);

    assert_eq!(
        messages(&findings),
        vec![
            "result of fmt.Sprintf call not used",
            "result of (Pizza).String call not used",
            "result of errors.New call not used",
            "result of fmt.Sprintf call not used",
        ]
    );

    // Findings come out in document order within the file.
    let lines: Vec<_> = findings.iter().map(|f| f.line).collect();
    let mut sorted = lines.clone();
    sorted.sort();
    assert_eq!(lines, sorted);
}

#[test]
fn test_consumed_results_are_never_flagged() {
    let config = UnusedResultConfig::defaults();
    let findings = analyze(&["pizza.go", "kitchen.go"], &config);

    // `str = fmt.Sprintf(...)` and `str = p.String()` appear on lines 13
    // and 19; no finding may point there.
    for finding in &findings {
        assert_ne!(finding.line, 13, "assigned Sprintf result was flagged");
        assert_ne!(finding.line, 19, "assigned String result was flagged");
    }
}

#[test]
fn test_result_consumed_as_argument_is_not_flagged() {
    let config = UnusedResultConfig::defaults();
    let findings = analyze(&["pizza.go", "kitchen.go"], &config);

    // `fmt.Println(fmt.Sprintf(...))` on line 25 consumes the inner result;
    // only the bare statement's own callee is ever considered, so neither
    // the Println nor the nested Sprintf may report.
    for finding in &findings {
        assert_ne!(finding.line, 25, "call consumed as an argument was flagged");
    }
    let sprintf_count = findings
        .iter()
        .filter(|f| f.message == "result of fmt.Sprintf call not used")
        .count();
    assert_eq!(sprintf_count, 2, "only the two bare Sprintf statements report");
}

#[test]
fn test_wrong_shape_method_is_not_flagged() {
    // addTopping matches no configured name; Slices returns int. Configure
    // both names anyway and check that only correctly-shaped methods report.
    let config = UnusedResultConfig::from_lists("", "addTopping,Slices").unwrap();
    let findings = analyze(&["pizza.go", "kitchen.go"], &config);
    assert!(
        findings.is_empty(),
        "methods without the func() string shape must not be flagged: {:?}",
        messages(&findings)
    );
}

#[test]
fn test_error_method_flagged_when_configured() {
    let config = UnusedResultConfig::from_lists("", "Error").unwrap();
    let source = "package pizza\n\nfunc eat(p Pizza) {\n\tp.Error()\n}\n";

    let mut analyzer = Analyzer::new().unwrap();
    analyzer
        .add_file(&fixtures_path().join("pizza.go"))
        .unwrap();
    analyzer
        .add_source(std::path::Path::new("eat.go"), source.to_string())
        .unwrap();

    let findings = analyzer.run(&config);
    assert_eq!(
        messages(&findings),
        vec!["result of (Pizza).Error call not used"]
    );
    assert_eq!(findings[0].file, PathBuf::from("eat.go"));
}

#[test]
fn test_conversions_and_unqualified_calls_stay_silent() {
    let config = UnusedResultConfig::defaults();
    let findings = analyze(&["conversions.go"], &config);
    assert!(
        findings.is_empty(),
        "conversions and unqualified calls must not be flagged: {:?}",
        messages(&findings)
    );
}

#[test]
fn test_empty_configuration_flags_nothing() {
    let config = UnusedResultConfig::from_lists("", "").unwrap();
    let findings = analyze(&["pizza.go", "kitchen.go", "conversions.go"], &config);
    assert!(findings.is_empty());
}

#[test]
fn test_finding_positions_point_at_the_opening_paren() {
    let config = UnusedResultConfig::from_lists("fmt.Sprintf", "").unwrap();
    let source = "package p\n\nimport \"fmt\"\n\nfunc f() {\n\tfmt.Sprintf(\"x\")\n}\n";

    let mut analyzer = Analyzer::new().unwrap();
    analyzer
        .add_source(std::path::Path::new("pos.go"), source.to_string())
        .unwrap();

    let findings = analyzer.run(&config);
    assert_eq!(findings.len(), 1);
    // `\tfmt.Sprintf(` puts the opening paren at column 13 of line 6.
    assert_eq!((findings[0].line, findings[0].column), (6, 13));
}
