use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn coa_cmd() -> Command {
    let mut cmd = Command::cargo_bin("coa-nft").expect("Failed to find coa-nft binary");
    // keep the caller's environment from filling in flags
    for var in [
        "WORKTITLE",
        "ARTISTEMAIL",
        "ARTISTNAME",
        "ARTISTWALLET",
        "ARTISTWEBSITE",
        "ADDRESSLINE1",
        "ADDRESSLINE2",
        "ADDRESSCITY",
        "ADDRESSSTATE",
        "ADDRESSZIP",
        "ADDRESSCOUNTRY",
        "SKIPVALIDATEADDRESS",
        "TEMPLATE",
    ] {
        cmd.env_remove(var);
    }
    // nothing listens here; a validation attempt would fail loudly
    cmd.env("ADDRESS_DATA_URL", "http://127.0.0.1:9/data");
    cmd
}

fn scenario_args(address_line1: &str, email: &str) -> Vec<String> {
    [
        "render-local",
        "--workTitle",
        "Untitled #1",
        "--artistName",
        "A. Artist",
        "--artistEmail",
        email,
        "--artistWallet",
        "0xABC",
        "--artistWebsite",
        "https://a.example",
        "--addressLine1",
        address_line1,
        "--addressCity",
        "Springfield",
        "--addressState",
        "IL",
        "--addressZip",
        "62701",
        "--addressCountry",
        "US",
        "--skipValidateAddress",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn render_local_dumps_the_record() {
    coa_cmd()
        .args(scenario_args("1 Main St", "a@example.com"))
        .assert()
        .success()
        .stdout(contains("work_title: \"Untitled #1\""))
        .stdout(contains("name: \"A. Artist\""))
        .stdout(contains("email: \"a@example.com\""))
        .stdout(contains("value: \"0xABC\""))
        .stdout(contains("\"https://a.example\""))
        .stdout(contains("\"1 Main St\""))
        .stdout(contains("title: \"primary\""));
}

#[test]
fn render_local_empty_first_line_exits_with_1() {
    coa_cmd()
        .args(scenario_args("", "a@example.com"))
        .assert()
        .code(1)
        .stderr(contains("Address format invalid"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_local_bad_email_fails_without_dump() {
    coa_cmd()
        .args(scenario_args("1 Main St", "bad"))
        .assert()
        .failure()
        .stderr(contains("Validation error"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn render_local_missing_required_flag_is_a_usage_error() {
    coa_cmd()
        .args(["render-local", "--workTitle", "Untitled #1"])
        .assert()
        .code(2)
        .stderr(contains("--artistEmail"));
}

#[test]
fn environment_fills_missing_flags() {
    let args: Vec<String> = scenario_args("1 Main St", "a@example.com")
        .into_iter()
        .filter(|a| a != "--workTitle" && a != "Untitled #1")
        .collect();
    coa_cmd()
        .env("WORKTITLE", "From The Environment")
        .args(args)
        .assert()
        .success()
        .stdout(contains("\"From The Environment\""));
}

#[test]
fn unreachable_address_service_fails_the_run() {
    let args: Vec<String> = scenario_args("1 Main St", "a@example.com")
        .into_iter()
        .filter(|a| a != "--skipValidateAddress")
        .collect();
    coa_cmd()
        .args(args)
        .assert()
        .code(1)
        .stderr(contains("Address service error"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn skip_flag_accepts_boolish_environment_values() {
    for value in ["1", "yes", "t", "on", "true"] {
        let args: Vec<String> = scenario_args("1 Main St", "a@example.com")
            .into_iter()
            .filter(|a| a != "--skipValidateAddress")
            .collect();
        // the address service is unreachable, so success means no lookup
        coa_cmd()
            .env("SKIPVALIDATEADDRESS", value)
            .args(args)
            .assert()
            .success()
            .stdout(contains("\"1 Main St\""));
    }
}

#[test]
fn falsey_skip_value_keeps_validation_on() {
    let args: Vec<String> = scenario_args("1 Main St", "a@example.com")
        .into_iter()
        .filter(|a| a != "--skipValidateAddress")
        .collect();
    coa_cmd()
        .env("SKIPVALIDATEADDRESS", "0")
        .args(args)
        .assert()
        .code(1)
        .stderr(contains("Address service error"));
}
