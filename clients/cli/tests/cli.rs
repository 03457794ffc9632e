use assert_cmd::Command;
use predicates::prelude::*;

fn deel() -> Command {
    let mut cmd = Command::cargo_bin("deel").unwrap();
    cmd.env_remove("DEEL_API_TOKEN")
        .env_remove("DEEL_BASE_URL")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_resources() {
    deel()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("contracts"))
        .stdout(predicate::str::contains("timesheets"))
        .stdout(predicate::str::contains("whoami"));
}

#[test]
fn whoami_masks_token() {
    deel()
        .args(["--api-token", "tok_abcd1234", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deel API: https://api.letsdeel.com/",
        ))
        .stdout(predicate::str::contains("API Token: ********1234"));
}

#[test]
fn whoami_reveals_token_on_request() {
    deel()
        .args(["--api-token", "tok_abcd1234", "whoami", "--show-api-token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API Token: tok_abcd1234"));
}

#[test]
fn sandbox_switches_base_url() {
    deel()
        .args(["--api-token", "tok", "--sandbox", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://api-sandbox.demo.deel.com/",
        ));
}

#[test]
fn token_is_required() {
    deel()
        .args(["contracts", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-token"));
}

#[test]
fn limit_out_of_range_is_rejected() {
    deel()
        .args(["--api-token", "tok", "people", "list", "--limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--limit"));
}

#[test]
fn unreachable_server_fails_cleanly() {
    deel()
        .args([
            "--api-token",
            "tok",
            "--base-url",
            "http://127.0.0.1:9",
            "teams",
            "list",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("http client"));
}
