#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MANAGER: [&str; 5] = ["Communication", "Empathy", "Futuristic", "Harmony", "Ideation"];
const ALICE: [&str; 5] = ["Achiever", "Activator", "Analytical", "Arranger", "Belief"];

fn strengths(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("strengths").unwrap();
    cmd.current_dir(dir.path()).env("STRENGTHS_ROOT", dir.path());
    cmd
}

fn init_team(dir: &TempDir) {
    strengths(dir).arg("init").assert().success();
}

fn onboard(dir: &TempDir) {
    strengths(dir)
        .args(["onboard", "--name", "Dana"])
        .args(MANAGER)
        .assert()
        .success();
}

fn add_alice(dir: &TempDir) {
    strengths(dir)
        .args(["member", "add", "Alice"])
        .args(ALICE)
        .assert()
        .success();
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

// ---------------------------------------------------------------------------
// strengths init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_store() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["init", "--team-name", "Platform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized team store"));

    assert!(dir.path().join(".strengths/config.yaml").exists());
    assert!(dir.path().join(".strengths/members").is_dir());
    let config = std::fs::read_to_string(dir.path().join(".strengths/config.yaml")).unwrap();
    assert!(config.contains("Platform"));
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    strengths(&dir).args(["init", "--team-name", "First"]).assert().success();
    strengths(&dir)
        .args(["init", "--team-name", "Second"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));

    let config = std::fs::read_to_string(dir.path().join(".strengths/config.yaml")).unwrap();
    assert!(config.contains("First"));
}

// ---------------------------------------------------------------------------
// strengths onboard / profile
// ---------------------------------------------------------------------------

#[test]
fn onboard_requires_init() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["onboard", "--name", "Dana"])
        .args(MANAGER)
        .assert()
        .failure()
        .stderr(predicate::str::contains("strengths init"));
}

#[test]
fn onboard_and_show_profile() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    onboard(&dir);

    strengths(&dir)
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana"))
        .stdout(predicate::str::contains("Relationship Building"));

    let profile = json_output(strengths(&dir).args(["profile", "--json"]));
    assert_eq!(profile["name"], "Dana");
    assert_eq!(profile["top_strengths"][0], "Communication");
}

#[test]
fn onboard_accepts_lowercase_and_commas() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["onboard", "--name", "Dana", "woo,focus,learner,relator,self-assurance"])
        .assert()
        .success();

    let profile = json_output(strengths(&dir).args(["profile", "--json"]));
    assert_eq!(profile["top_strengths"][4], "Self-Assurance");
}

#[test]
fn onboard_rejects_bad_selection() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["onboard", "--name", "Dana", "Woo", "Woo", "Zeal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must select exactly 5 strengths"))
        .stderr(predicate::str::contains("Strengths must be unique"))
        .stderr(predicate::str::contains("Invalid strengths: Zeal"));

    assert!(!dir.path().join(".strengths/profile.yaml").exists());
}

#[test]
fn profile_requires_onboarding() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("strengths onboard"));
}

// ---------------------------------------------------------------------------
// strengths member
// ---------------------------------------------------------------------------

#[test]
fn member_add_list_remove() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    add_alice(&dir);

    strengths(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Achiever, Activator"));

    strengths(&dir)
        .args(["member", "remove", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed Alice"));

    let list = json_output(strengths(&dir).args(["member", "list", "--json"]));
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[test]
fn member_add_duplicate_fails() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    add_alice(&dir);

    strengths(&dir)
        .args(["member", "add", "ALICE"])
        .args(ALICE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn member_add_rejects_manager_alias() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["member", "add", "You"])
        .args(ALICE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved for the manager"));

    add_alice(&dir);
    strengths(&dir)
        .args(["member", "rename", "Alice", "me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved for the manager"));
}

#[test]
fn member_add_rejects_four_strengths() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["member", "add", "Bob", "Woo", "Focus", "Input", "Relator"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("You must select exactly 5 strengths"));
}

#[test]
fn member_update_and_rename() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    add_alice(&dir);

    strengths(&dir)
        .args(["member", "update", "Alice", "Woo", "Focus", "Input", "Relator", "Learner"])
        .assert()
        .success();
    strengths(&dir)
        .args(["member", "rename", "Alice", "Alicia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed Alice to Alicia"));

    let member = json_output(strengths(&dir).args(["member", "show", "alicia", "--json"]));
    assert_eq!(member["name"], "Alicia");
    assert_eq!(member["top_strengths"][0], "Woo");
}

#[test]
fn member_show_unknown_fails() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["member", "show", "nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("team member not found"));
}

// ---------------------------------------------------------------------------
// strengths validate / sort / catalog
// ---------------------------------------------------------------------------

#[test]
fn validate_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["validate", "Achiever", "Achiever", "Zeal"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("You must select exactly 5 strengths"))
        .stdout(predicate::str::contains("Strengths must be unique"))
        .stdout(predicate::str::contains("Invalid strengths: Zeal"))
        .stderr(predicate::str::contains("selection is invalid"));
}

#[test]
fn validate_counts_empty_entries() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["validate", "", "Achiever", "Woo", "Empathy", "Learner", "Focus"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("You must select exactly 5 strengths"));
}

#[test]
fn validate_accepts_good_selection() {
    let dir = TempDir::new().unwrap();
    let result = json_output(strengths(&dir).arg("validate").args(ALICE).arg("--json"));
    assert_eq!(result["valid"], true);
    assert_eq!(result["errors"].as_array().unwrap().len(), 0);
}

#[test]
fn sort_groups_by_domain() {
    let dir = TempDir::new().unwrap();
    let sorted = json_output(
        strengths(&dir).args(["sort", "Learner", "Woo", "Achiever", "Empathy", "--json"]),
    );
    let names: Vec<&str> = sorted
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Achiever", "Woo", "Empathy", "Learner"]);
}

#[test]
fn catalog_show_and_domain() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["catalog", "show", "self-assurance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Self-Assurance"))
        .stdout(predicate::str::contains("Influencing"));

    strengths(&dir)
        .args(["catalog", "show", "Zeal"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown strength"));

    let domains = json_output(strengths(&dir).args(["catalog", "domain", "Zeal", "Woo", "--json"]));
    assert_eq!(domains[0]["domain"], "Strategic Thinking");
    assert_eq!(domains[0]["known"], false);
    assert_eq!(domains[1]["domain"], "Influencing");
}

#[test]
fn catalog_list_by_domain() {
    let dir = TempDir::new().unwrap();
    let list = json_output(
        strengths(&dir).args(["catalog", "list", "--domain", "relationship-building", "--json"]),
    );
    assert_eq!(list.as_array().unwrap().len(), 9);

    let all = json_output(strengths(&dir).args(["catalog", "list", "--json"]));
    assert_eq!(all.as_array().unwrap().len(), 34);
    assert_eq!(all[0]["name"], "Achiever");
}

// ---------------------------------------------------------------------------
// strengths team / gaps / compare
// ---------------------------------------------------------------------------

#[test]
fn team_dashboard() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    onboard(&dir);
    add_alice(&dir);

    let analytics = json_output(strengths(&dir).args(["team", "--json"]));
    assert_eq!(analytics["total_members"], 2);
    assert_eq!(analytics["domain_balance"]["executing"], 3);
    assert_eq!(analytics["domain_balance"]["influencing"], 2);
    assert_eq!(analytics["domain_balance"]["relationship_building"], 2);
    assert_eq!(analytics["domain_balance"]["strategic_thinking"], 3);
    assert_eq!(analytics["top_strengths"].as_array().unwrap().len(), 10);

    strengths(&dir)
        .arg("team")
        .assert()
        .success()
        .stdout(predicate::str::contains("Team of 2"))
        .stdout(predicate::str::contains("###"));
}

#[test]
fn team_requires_onboarding() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .arg("team")
        .assert()
        .failure()
        .stderr(predicate::str::contains("manager profile not found"));
}

#[test]
fn gaps_on_single_domain_team() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["onboard", "--name", "Dana"])
        .args(["Achiever", "Arranger", "Belief", "Consistency", "Deliberative"])
        .assert()
        .success();

    let gaps = json_output(strengths(&dir).args(["gaps", "--json"]));
    let weak: Vec<&str> = gaps["weak_domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect();
    assert_eq!(weak, ["Influencing", "Relationship Building", "Strategic Thinking"]);
    assert_eq!(gaps["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(gaps["missing_strengths"][0], "Discipline");
}

#[test]
fn compare_manager_and_member() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    strengths(&dir)
        .args(["onboard", "--name", "Dana"])
        .args(["Achiever", "Arranger", "Belief", "Focus", "Woo"])
        .assert()
        .success();
    strengths(&dir)
        .args(["member", "add", "Alice"])
        .args(["Analytical", "Context", "Futuristic", "Focus", "Input"])
        .assert()
        .success();

    let out = json_output(strengths(&dir).args(["compare", "you", "Alice", "--json"]));
    assert_eq!(out["first"], "You");
    assert_eq!(out["result"]["shared"][0], "Focus");
    assert_eq!(out["result"]["domain_complement"], true);

    strengths(&dir)
        .args(["compare", "me", "alice", "--prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You and Alice"))
        .stdout(predicate::str::contains("Shared strengths: Focus"));
}

// ---------------------------------------------------------------------------
// strengths coach / config
// ---------------------------------------------------------------------------

#[test]
fn coach_prompt_builds_request() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    onboard(&dir);
    add_alice(&dir);

    let req = json_output(
        strengths(&dir).args(["coach", "prompt", "--message", "How do I run retros?", "--json"]),
    );
    assert_eq!(req["max_tokens"], 1024);
    assert!(req["system"].as_str().unwrap().contains("helping Dana"));
    assert_eq!(req["messages"][0]["content"], "How do I run retros?");
}

#[test]
fn config_show_and_validate() {
    let dir = TempDir::new().unwrap();
    strengths(&dir)
        .args(["init", "--team-name", "Platform"])
        .assert()
        .success();

    strengths(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Platform"));
    strengths(&dir)
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config OK"));
}

#[test]
fn config_validate_fails_on_zero_tokens() {
    let dir = TempDir::new().unwrap();
    init_team(&dir);
    std::fs::write(
        dir.path().join(".strengths/config.yaml"),
        "version: 1\nteam:\n  name: Platform\ncoach:\n  max_tokens: 0\n",
    )
    .unwrap();

    strengths(&dir)
        .args(["config", "validate"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[error] coach.max_tokens"))
        .stderr(predicate::str::contains("1 error(s)"));
}
