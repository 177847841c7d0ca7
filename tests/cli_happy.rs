use predicates::prelude::*;
use predicates::str::contains;

fn app() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("app-utils");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn sum_prints_total() {
    app()
        .args(["sum", "2", "3"])
        .assert()
        .success()
        .stdout("5\n")
        .stderr(predicates::str::is_empty());
}

#[test]
fn sum_accepts_negative_numbers() {
    app().args(["sum", "-1", "1"]).assert().success().stdout("0\n");
}

#[test]
fn magic_numbers_listed_in_order() {
    app()
        .arg("magic-numbers")
        .assert()
        .success()
        .stdout("83,67,65,78\n");
}

#[test]
fn magic_numbers_decode() {
    app()
        .args(["magic-numbers", "--decode"])
        .assert()
        .success()
        .stdout("SCAN\n");
}

#[test]
fn secret_key_reveal_prints_exact_value() {
    app()
        .env("SECRET_KEY", "hunter2 ")
        .args(["secret-key", "--reveal"])
        .assert()
        .success()
        .stdout("hunter2 \n");
}

#[test]
fn secret_key_hidden_by_default() {
    app()
        .env("SECRET_KEY", "hunter2")
        .arg("secret-key")
        .assert()
        .success()
        .stdout("set\n");
}

#[test]
fn settings_mask_the_secret() {
    app()
        .env("SECRET_KEY", "hunter2")
        .arg("settings")
        .assert()
        .success()
        .stdout(contains("app-name = DataProcessor"))
        .stdout(contains("port = 8080"))
        .stdout(contains("secret-key = ***"))
        .stdout(contains("hunter2").not());
}

#[test]
fn verbose_emits_debug_logs() {
    app()
        .args(["-v", "magic-numbers"])
        .assert()
        .success()
        .stderr(contains("set up logging"));
}
