//! End-to-end storefront flows through the `greeny` binary.
//!
//! Each test runs the CLI as a subprocess against an isolated temp storage
//! directory, exercising the add/merge/edit/checkout/register surface the
//! way a page session would.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Build a `greeny` command rooted in an isolated storage directory.
fn greeny(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("greeny").expect("binary builds");
    cmd.env("GREENY_DATA_DIR", store);
    // keep the user's real config file out of the test
    cmd.env("HOME", store);
    cmd.env("XDG_CONFIG_HOME", store.join("config"));
    cmd.env("GREENY_LOG", "error");
    cmd
}

fn add_salad(store: &Path, qty: &str) {
    greeny(store)
        .args([
            "cart", "add", "--id", "101", "--name", "Kale Salad", "--price", "7.00", "--qty", qty,
        ])
        .assert()
        .success();
}

fn cart_json(store: &Path) -> Value {
    let output = greeny(store)
        .args(["cart", "list", "--json"])
        .output()
        .expect("list runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("cart list --json is valid JSON")
}

#[test]
fn empty_cart_lists_placeholder() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args(["cart", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty!"));
}

#[test]
fn identical_adds_merge_into_one_line() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "1");
    add_salad(dir.path(), "2");

    let json = cart_json(dir.path());
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["lineTotal"], 21.0);
    assert_eq!(json["item_count"], 3);
}

#[test]
fn different_notes_stay_distinct() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "1");
    greeny(dir.path())
        .args([
            "cart", "add", "--id", "101", "--name", "Kale Salad", "--price", "7.00", "--note",
            "no onions",
        ])
        .assert()
        .success();

    let json = cart_json(dir.path());
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
}

#[test]
fn decrease_to_zero_removes_the_line() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "1");
    greeny(dir.path())
        .args(["cart", "decrease", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your cart is empty!"));
}

#[test]
fn bundle_add_requires_three_choices() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "cart", "add", "--id", "905", "--name", "Smoothie Trio Deal", "--price", "14.50",
            "--choice", "Energy Boost", "--choice", "Green Detox",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("select all 3 choices"));

    // nothing was committed
    let json = cart_json(dir.path());
    assert_eq!(json["item_count"], 0);
}

#[test]
fn bundle_add_folds_choices_into_the_request() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "cart", "add", "--id", "905", "--name", "Smoothie Trio Deal", "--price", "14.50",
            "--choice", "Energy Boost", "--choice", "Green Detox", "--choice", "Mango Delight",
        ])
        .assert()
        .success();

    let json = cart_json(dir.path());
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0]["specialRequest"],
        "Smoothie Choices: Energy Boost, Green Detox, Mango Delight"
    );
    assert_eq!(items[0]["isBundle"], true);
}

#[test]
fn cart_persists_across_invocations() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "2");

    // fresh process, same store dir
    greeny(dir.path())
        .args(["cart", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kale Salad x2"))
        .stdout(predicate::str::contains("€14.00"));
}

#[test]
fn html_projection_escapes_user_text() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "cart", "add", "--id", "9", "--name", "<b>Sneaky</b>", "--price", "1.00",
        ])
        .assert()
        .success();

    greeny(dir.path())
        .args(["cart", "list", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;Sneaky&lt;/b&gt;"))
        .stdout(predicate::str::contains("<b>").not());
}

#[test]
fn html_list_honors_json_mode() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "cart", "add", "--id", "9", "--name", "<b>Sneaky</b>", "--price", "1.00",
        ])
        .assert()
        .success();

    let output = greeny(dir.path())
        .args(["cart", "list", "--html", "--json"])
        .output()
        .expect("list runs");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).expect("html list --json is JSON");
    assert!(json["html"].as_str().unwrap().contains("&lt;b&gt;Sneaky&lt;/b&gt;"));
    assert_eq!(json["badge"], "1");
}

#[test]
fn bad_bundle_choice_reports_error_envelope() {
    let dir = TempDir::new().unwrap();
    let output = greeny(dir.path())
        .args([
            "cart", "add", "--id", "905", "--name", "Smoothie Trio Deal", "--price", "14.50",
            "--choice", "Orange Pure", "--choice", "Green Detox", "--choice", "Mango Delight",
            "--json",
        ])
        .output()
        .expect("add runs");
    assert!(!output.status.success());

    // the JSON error envelope comes first on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("\"error\""));
    assert!(stderr.contains("not an available choice"));

    let json = cart_json(dir.path());
    assert_eq!(json["item_count"], 0);
}

#[test]
fn checkout_empty_cart_is_blocked() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args(["checkout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cart is empty"));
}

#[test]
fn checkout_without_session_requires_registration() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "1");

    let output = greeny(dir.path())
        .args(["checkout", "--json"])
        .output()
        .expect("checkout runs");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["decision"], "require_registration");
    assert_eq!(json["next_page"], "registration.html");
}

#[test]
fn checkout_after_registration_proceeds_to_payment() {
    let dir = TempDir::new().unwrap();
    add_salad(dir.path(), "1");

    greeny(dir.path())
        .args([
            "register",
            "--full-name", "Ada Lovelace",
            "--email", "ada@example.com",
            "--phone", "0612345678",
            "--address", "12 Analytical Way",
            "--city", "Amsterdam",
            "--postal-code", "1011AB",
            "--password", "Engine1843",
            "--confirm-password", "Engine1843",
            "--accept-terms",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Greeny Store, Ada Lovelace!"));

    greeny(dir.path())
        .args(["checkout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proceeding to Payment & Shipping"));
}

#[test]
fn invalid_registration_reports_every_field() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "register",
            "--full-name", "A",
            "--email", "not-an-email",
            "--phone", "123",
            "--address", "xy",
            "--city", "Z",
            "--postal-code", "1",
            "--password", "weak",
            "--confirm-password", "different",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Full Name"))
        .stderr(predicate::str::contains("email"))
        .stderr(predicate::str::contains("Terms"));

    // an invalid form must not create a session
    add_salad(dir.path(), "1");
    greeny(dir.path())
        .args(["checkout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create an account"));
}

#[test]
fn contact_form_validates_and_submits() {
    let dir = TempDir::new().unwrap();
    greeny(dir.path())
        .args([
            "contact", "--name", "Ada", "--email", "ada@example.com", "--subject", "Orders",
            "--message", "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10 characters"));

    greeny(dir.path())
        .args([
            "contact", "--name", "Ada", "--email", "ada@example.com", "--subject", "Orders",
            "--message", "Where is my smoothie bundle?",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message Sent Successfully!"));
}

#[test]
fn catalog_lists_bundle_choices() {
    let dir = TempDir::new().unwrap();
    let output = greeny(dir.path())
        .args(["catalog", "--family", "juice", "--json"])
        .output()
        .expect("catalog runs");
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let choices = json[0]["choices"].as_array().unwrap();
    assert_eq!(choices.len(), 5);
    assert_eq!(choices[0]["value"], "Orange Pure");
}
