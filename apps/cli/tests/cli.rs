use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut command = Command::cargo_bin("guardrail").unwrap();
    command.env_remove("GUARDRAIL_API_URL").env_remove("GUARDRAIL_LOG");
    command
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("check"))
        .stdout(contains("country"))
        .stdout(contains("updates"))
        .stdout(contains("analytics"));
}

#[test]
fn check_without_country_fails_validation() {
    cmd()
        .args(["check", "--title", "Show A"])
        .assert()
        .failure()
        .stderr(contains("Please select a country"));
}

#[test]
fn check_without_title_fails_validation() {
    cmd()
        .args(["check", "--country", "india"])
        .assert()
        .failure()
        .stderr(contains("Please enter a content title"));
}

#[test]
fn country_requires_id() {
    cmd().arg("country").assert().failure();
}

#[test]
fn unreachable_api_is_a_network_error() {
    cmd()
        .args(["--api-url", "http://127.0.0.1:9/api", "updates"])
        .assert()
        .failure()
        .stderr(contains("network error"));
}
