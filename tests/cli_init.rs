//! End-to-end tests for `onboard init`
//!
//! Every test runs the binary in its own temp directory, so tests stay
//! independent of each other and of the checkout they run from.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn onboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("onboard").unwrap();
    cmd.current_dir(dir.path()).arg("init");
    cmd
}

#[test]
fn no_options_prints_sentinel_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No options selected"));

    // nothing was scaffolded
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn invalid_cursor_value_alone_behaves_like_no_options() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .args(["--cursor", "kotlin"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("No options selected"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn gitignore_flag_scaffolds_the_file() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .arg("--gitignore")
        .assert()
        .success()
        .stdout(predicate::str::contains("All executed successfully"));

    let content = fs::read_to_string(dir.path().join(".gitignore")).unwrap();
    assert!(content.contains("target/"));
}

#[test]
fn editorconfig_flag_scaffolds_the_file() {
    let dir = TempDir::new().unwrap();

    onboard(&dir).arg("--editorconfig").assert().success();

    let content = fs::read_to_string(dir.path().join(".editorconfig")).unwrap();
    assert!(content.contains("root = true"));
}

#[test]
fn sdkman_flag_writes_sdkmanrc() {
    let dir = TempDir::new().unwrap();

    onboard(&dir).arg("--sdkman").assert().success();

    let content = fs::read_to_string(dir.path().join(".sdkmanrc")).unwrap();
    assert!(content.starts_with("java="));
    assert!(content.contains("maven="));
}

#[test]
fn cursor_java_installs_rule_files() {
    let dir = TempDir::new().unwrap();

    onboard(&dir).args(["--cursor", "java"]).assert().success();

    let rules_dir = dir.path().join(".cursor/rules");
    let rules: Vec<_> = fs::read_dir(&rules_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert!(rules.iter().any(|name| name.ends_with(".mdc")));
    assert_eq!(rules.len(), 2);
}

#[test]
fn devcontainer_flag_excludes_the_template_readme() {
    let dir = TempDir::new().unwrap();

    onboard(&dir).arg("--devcontainer").assert().success();

    let devcontainer = dir.path().join(".devcontainer");
    assert!(devcontainer.join("devcontainer.json").is_file());
    assert!(!devcontainer.join("README.md").exists());
}

#[test]
fn github_action_flag_scaffolds_workflow_and_metadata() {
    let dir = TempDir::new().unwrap();

    onboard(&dir).arg("--github-action").assert().success();

    let github = dir.path().join(".github");
    assert!(github.join("workflows/maven.yml").is_file());
    assert!(github.join("CODEOWNERS").is_file());
    assert!(github.join("dependabot.yml").is_file());
}

#[test]
fn multiple_flags_run_all_requested_actions() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .args(["--gitignore", "--editorconfig", "--cursor", "agile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All executed successfully"));

    assert!(dir.path().join(".gitignore").is_file());
    assert!(dir.path().join(".editorconfig").is_file());
    assert!(dir.path().join(".cursor/rules").is_dir());
}

#[test]
fn maven_plugins_patches_an_existing_pom() {
    let dir = TempDir::new().unwrap();
    let pom = dir.path().join("pom.xml");
    fs::write(
        &pom,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <project>\n\
         \x20   <modelVersion>4.0.0</modelVersion>\n\
         \x20   <groupId>com.example</groupId>\n\
         \x20   <artifactId>demo</artifactId>\n\
         \x20   <version>1.0.0</version>\n\
         </project>\n",
    )
    .unwrap();

    onboard(&dir).arg("--maven-plugins").assert().success();

    let content = fs::read_to_string(&pom).unwrap();
    assert!(content.contains("<artifactId>maven-enforcer-plugin</artifactId>"));
    assert!(content
        .contains("<maven-enforcer-plugin.version>3.5.0</maven-enforcer-plugin.version>"));
}

#[test]
fn maven_plugins_without_a_pom_is_advisory() {
    let dir = TempDir::new().unwrap();

    // the merge degrades to a warning; the action and the run still succeed
    onboard(&dir)
        .arg("--maven-plugins")
        .assert()
        .success()
        .stdout(predicate::str::contains("All executed successfully"));

    assert!(!dir.path().join("pom.xml").exists());
}

#[test]
fn maven_flag_conflicts_with_an_existing_pom() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pom.xml"), "<project/>").unwrap();

    // the conflict is reported with a hint, but per-action failures are
    // advisory and the aggregate outcome stays successful
    onboard(&dir)
        .arg("--maven")
        .assert()
        .success()
        .stderr(predicate::str::contains("pom.xml already exists"));
}

#[test]
fn spring_cli_flag_prints_the_command_sequence() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .arg("--spring-cli")
        .assert()
        .success()
        .stdout(predicate::str::contains("sdk install springboot"))
        .stdout(predicate::str::contains("spring init"));
}

#[test]
fn quarkus_cli_flag_prints_the_command_sequence() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .arg("--quarkus-cli")
        .assert()
        .success()
        .stdout(predicate::str::contains("sdk install quarkus"));
}

#[test]
fn visualvm_and_jmc_flags_print_their_sequences() {
    let dir = TempDir::new().unwrap();

    onboard(&dir)
        .args(["--visualvm", "--jmc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sdk install visualvm"))
        .stdout(predicate::str::contains("sdk install jmc"));
}
