//! CLI contract tests
//!
//! Runs the built binary against fixture files in a temp directory and
//! checks the JSON it prints for each subcommand.

use std::path::Path;
use std::process::Command;

fn codescope_bin() -> &'static str {
    env!("CARGO_BIN_EXE_codescope")
}

const VULNERABLE_PY: &str = r#"import os

def load(user_id):
    cursor.execute("SELECT * FROM users WHERE id=" + user_id)

password = "hunter22"
"#;

const SERVICE_PY: &str = r#"# Service layer
class Client(Base):
    def fetch_user(self, user_id: int, timeout=5):
        pass

def main():
    pass
"#;

fn setup_workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("vulnerable.py"), VULNERABLE_PY).unwrap();
    std::fs::write(dir.path().join("service.py"), SERVICE_PY).unwrap();
    std::fs::write(
        dir.path().join("page.js"),
        "function render(html) {\n  el.innerHTML = html;\n}\n",
    )
    .unwrap();
    dir
}

/// Run in `dir`, returning (exit code, stdout, stderr)
fn run(dir: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(codescope_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CODESCOPE_CONFIG")
        .output()
        .expect("Failed to run codescope");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
    )
}

fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full: Vec<&str> = args.to_vec();
    full.extend(["--format", "json"]);
    let (code, stdout, stderr) = run(dir, &full);
    assert_eq!(code, 0, "codescope {:?} failed: {}", args, stderr);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("Invalid JSON ({e}): {stdout}"))
}

#[test]
fn test_structure_json() {
    let dir = setup_workspace();
    let v = run_json(dir.path(), &["structure", "service.py"]);

    assert_eq!(v["complexity"], 3);
    assert_eq!(v["lines_of_code"], 8);
    assert_eq!(v["classes"][0]["name"], "Client");
    assert_eq!(v["classes"][0]["parent_class"], "Base");
    assert_eq!(v["functions"][0]["name"], "fetch_user");
    assert_eq!(v["functions"][0]["line_number"], 3);
    assert_eq!(v["comments"][0]["text"], "Service layer");
}

#[test]
fn test_quality_json() {
    let dir = setup_workspace();
    let v = run_json(dir.path(), &["quality", "vulnerable.py"]);

    // One function and no comments
    assert_eq!(v["quality_score"], 90);
    assert_eq!(v["issues"][0]["type"], "documentation");
    assert_eq!(v["issues"][0]["severity"], "warning");
}

#[test]
fn test_security_json_with_fixes() {
    let dir = setup_workspace();
    let v = run_json(dir.path(), &["security", "vulnerable.py", "--fixes"]);

    let vulns = v["vulnerabilities"].as_array().unwrap();
    let types: Vec<&str> = vulns.iter().map(|x| x["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["sql_injection", "hardcoded_secrets"]);
    assert_eq!(vulns[0]["line"], 4);
    assert_eq!(vulns[1]["line"], 6);
    assert_eq!(v["security_score"], 100 - 25 - 15);
    assert_eq!(v["total_issues"], 2);

    let fixes = v["fixes"].as_array().unwrap();
    assert_eq!(fixes.len(), 2);
    assert!(fixes[0]["suggested_fix"]
        .as_str()
        .unwrap()
        .contains("# Fixed: Using parameterized query"));
}

#[test]
fn test_security_language_flag_overrides_extension() {
    let dir = setup_workspace();
    // Java has no language-specific patterns, only the generic ones
    let v = run_json(dir.path(), &["security", "vulnerable.py", "--language", "java"]);
    let types: Vec<&str> = v["vulnerabilities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|x| x["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["hardcoded_secrets"]);
}

#[test]
fn test_refactor_writes_output() {
    let dir = setup_workspace();
    let (code, stdout, stderr) = run(
        dir.path(),
        &["refactor", "page.js", "-o", "page.fixed.js", "-f", "json"],
    );
    assert_eq!(code, 0, "{stderr}");

    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["improvement_stats"]["fixes_applied"], 1);
    assert_eq!(v["improvement_stats"]["improvement_percentage"], 10);
    assert_eq!(v["applied_fixes"][0]["type"], "best_practices");

    let written = std::fs::read_to_string(dir.path().join("page.fixed.js")).unwrap();
    assert!(written.starts_with("\"use strict\";\nfunction render(html)"));
}

#[test]
fn test_refactor_with_security() {
    let dir = setup_workspace();
    let v = run_json(dir.path(), &["refactor", "vulnerable.py", "--security"]);

    let categories: Vec<&str> = v["applied_fixes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|x| x["type"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["security_fix", "security_fix"]);
    let code = v["refactored_code"].as_str().unwrap();
    assert!(code.contains("# TODO: Move secrets to environment variables"));
    assert!(!code.contains("hunter22"));
}

#[test]
fn test_recommend_json() {
    let dir = setup_workspace();
    let v = run_json(dir.path(), &["recommend", "service.py"]);
    let kinds: Vec<&str> = v
        .as_array()
        .unwrap()
        .iter()
        .map(|x| x["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["unit_test", "unit_test", "integration_test", "api_test"]);
}

#[test]
fn test_tests_command() {
    let dir = setup_workspace();
    let v = run_json(
        dir.path(),
        &["tests", "service.py", "--kind", "quality", "--project", "billing"],
    );
    let cases = v.as_array().unwrap();
    assert_eq!(cases.len(), 3);
    assert_eq!(cases[0]["title"], "Test for function fetch_user");
    assert_eq!(cases[0]["project"], "billing");
    assert_eq!(cases[0]["status"], "draft");
    assert_eq!(cases[0]["test_type"], "unit");
    assert!(cases[0]["test_code"]
        .as_str()
        .unwrap()
        .contains("result = fetch_user(user_id, timeout)"));
    assert_eq!(cases[2]["title"], "Test for class Client");

    let v = run_json(dir.path(), &["tests", "service.py", "--kind", "other"]);
    assert_eq!(v[0]["title"], "Test for service.py");
}

#[test]
fn test_init_and_config_defaults() {
    let dir = setup_workspace();
    let (code, _, stderr) = run(dir.path(), &["init"]);
    assert_eq!(code, 0, "{stderr}");
    assert!(dir.path().join("codescope.toml").exists());

    std::fs::write(
        dir.path().join("codescope.toml"),
        "[defaults]\nformat = \"json\"\n\n[security]\nweights = { hardcoded_secrets = 40 }\n",
    )
    .unwrap();

    // Format comes from the config file
    let (code, stdout, _) = run(dir.path(), &["security", "vulnerable.py"]);
    assert_eq!(code, 0);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["security_score"], 100 - 25 - 40);
}

#[test]
fn test_invalid_config_falls_back_with_warning() {
    let dir = setup_workspace();
    std::fs::write(dir.path().join("codescope.toml"), "[quality\n").unwrap();

    let (code, stdout, stderr) = run(
        dir.path(),
        &["quality", "vulnerable.py", "-f", "json"],
    );
    assert_eq!(code, 0);
    assert!(stderr.contains("WARN"), "expected a warning, got: {stderr}");
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v["quality_score"], 90);
}

#[test]
fn test_missing_file_fails() {
    let dir = setup_workspace();
    let (code, _, stderr) = run(dir.path(), &["structure", "nope.py"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to read nope.py"));
}

#[test]
fn test_text_output() {
    let dir = setup_workspace();
    let (code, stdout, _) = run(dir.path(), &["security", "page.js"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Security score"));
    assert!(stdout.contains("xss"));
}
