use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn parse_domain_and_problem() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-domain.pddl"))
        .arg(fixture_path("blocksworld-problem.pddl"));

    let output_pred = predicate::str::contains("(define (domain blocks)")
        .and(predicate::str::contains("(:goal (and (on a b) (on b c)))"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn json_format() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-problem.pddl"))
        .arg("--format")
        .arg("json");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  \"define\","));
}

#[test]
fn token_stream() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-problem.pddl")).arg("--tokens");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("(\ndefine\n(\nproblem\nblocks-3-0\n)\n"))
        .stdout(predicate::str::contains("three").not());
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("sexpr")
            .and(predicate::str::contains("json"))
            .and(predicate::str::contains("yaml"))
            .and(predicate::str::contains("treeviz")),
    );
}

#[test]
fn unterminated_file_fails_with_location() {
    let fixture = fixture_path("unterminated-problem.pddl");
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-domain.pddl")).arg(&fixture);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not parse problem file"))
        .stderr(predicate::str::contains("unterminated list"))
        .stderr(predicate::str::contains("unterminated-problem.pddl:4:3"));
}

#[test]
fn max_depth_flag() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-domain.pddl"))
        .arg("--max-depth")
        .arg("2");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nesting depth exceeds limit of 2"));
}

#[test]
fn default_depth_limit_rejects_deep_nesting() {
    let depth = 200_000;
    let mut deep = tempfile::Builder::new().suffix(".pddl").tempfile().unwrap();
    write!(deep, "{}{}", "(".repeat(depth), ")".repeat(depth)).unwrap();

    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(deep.path());

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("nesting depth exceeds limit of 512"));
}

#[test]
fn default_depth_limit_accepts_moderate_nesting() {
    let depth = 512;
    let mut nested = tempfile::Builder::new().suffix(".pddl").tempfile().unwrap();
    write!(nested, "{}{}", "(".repeat(depth), ")".repeat(depth)).unwrap();

    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(nested.path()).arg("--format").arg("json");

    cmd.assert().success();
}

#[test]
fn config_file_sets_format() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"treeviz\"").unwrap();

    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-problem.pddl"))
        .arg("--config")
        .arg(config.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("├─ ◦ define\n"));
}

#[test]
fn unknown_format_fails() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg(fixture_path("blocksworld-problem.pddl"))
        .arg("--format")
        .arg("xml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("pddl-reader");
    cmd.arg("does-not-exist.pddl");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not read domain file"));
}
