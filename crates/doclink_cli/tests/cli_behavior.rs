//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the doclink binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a command for the doclink CLI
fn doclink_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_doclink"))
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        doclink_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        doclink_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod scan_command {
    use super::*;

    #[test]
    fn lists_links_in_text_format() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .arg("scan")
            .arg(fixtures_dir().join("sample.rs"))
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "sample.rs:3:23  @doc  docs/parser.md:12",
            ))
            .stdout(predicate::str::contains("sample.rs:6:4  @see  README.md"))
            .stdout(predicate::str::contains("Scanned 1 files, found 2 links"));
    }

    #[test]
    fn emits_json() {
        let temp_dir = TempDir::new().unwrap();

        let output = doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "--format", "json"])
            .arg(fixtures_dir().join("sample.rs"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let files = json.as_array().unwrap();
        assert_eq!(files.len(), 1);

        let links = files[0]["links"].as_array().unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0]["tagName"], "@doc");
        assert_eq!(links[0]["filePath"], "docs/parser.md");
        assert_eq!(links[0]["lineNumber"], "12");
        assert_eq!(links[0]["location"]["start"]["line"], 3);
        assert!(links[1]["lineNumber"].is_null());
    }

    #[test]
    fn tag_override_limits_matches() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["--tags", "@see", "scan"])
            .arg(fixtures_dir().join("sample.rs"))
            .assert()
            .success()
            .stdout(predicate::str::contains("@doc").not())
            .stdout(predicate::str::contains("found 1 links"));
    }

    #[test]
    fn reads_settings_file_from_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(".doclink.jsonc"),
            "{\n  // custom tag\n  \"tagNames\": \"@ref\",\n}\n",
        )
        .unwrap();
        fs::write(temp_dir.path().join("a.rs"), "// @ref x.md#2\n// @doc y.md\n").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "a.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("a.rs:1:4  @ref  x.md:2"))
            .stdout(predicate::str::contains("found 1 links"));
    }

    #[test]
    fn fails_on_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("bad.json");
        fs::write(&config, r#"{ "tags": "@doc" }"#).unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .arg("--config")
            .arg(&config)
            .args(["scan", "a.rs"])
            .assert()
            .code(2);
    }

    #[test]
    fn reports_zero_files_for_nonexistent_path() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "nonexistent_file.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Scanned 0 files, found 0 links"));
    }

    #[test]
    fn scans_glob_patterns() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/a.rs"), "// @doc a.md:1").unwrap();
        fs::write(temp_dir.path().join("src/b.rs"), "// @see b.md").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "@doc c.md").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "**/*.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Scanned 2 files, found 2 links"));
    }

    #[test]
    fn lists_file_named_both_ways_once() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(temp_dir.path().join("src/lib.rs"), "// @doc a.md:1").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "src/lib.rs", "**/*.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("src/lib.rs:1:4  @doc  a.md:1"))
            .stdout(predicate::str::contains("./src").not())
            .stdout(predicate::str::contains("Scanned 1 files, found 1 links"));
    }
}

mod link_command {
    use super::*;

    #[test]
    fn prints_formatted_link() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["link", "docs/guide.md", "--line", "12"])
            .assert()
            .success()
            .stdout("// @doc docs/guide.md:12\n");
    }

    #[test]
    fn uses_overridden_tag_and_comment() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["--tags", "@see", "--separators", "#"])
            .args(["link", "notes.md", "--comment", "#"])
            .assert()
            .success()
            .stdout("# @see notes.md#1\n");
    }

    #[test]
    fn rejects_line_below_one() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["link", "docs/guide.md", "--line", "0"])
            .assert()
            .code(2);
    }

    #[test]
    fn inserts_link_into_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("main.rs");
        fs::write(&target, "fn main() {}\n").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["link", "docs/guide.md", "--line", "3", "--into"])
            .arg(&target)
            .args(["--at", "0"])
            .assert()
            .success();

        assert_eq!(
            fs::read_to_string(&target).unwrap(),
            "\n// @doc docs/guide.md:3\nfn main() {}\n"
        );
    }
}

mod init_command {
    use super::*;

    #[test]
    fn creates_settings_file() {
        let temp_dir = TempDir::new().unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success();

        let content = fs::read_to_string(temp_dir.path().join(".doclink.jsonc")).unwrap();
        assert!(content.contains("\"tagNames\": \"@doc,@markdown,@see\""));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".doclink.jsonc"), "{}").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .code(2);

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let content = fs::read_to_string(temp_dir.path().join(".doclink.jsonc")).unwrap();
        assert!(content.contains("separators"));
    }

    #[test]
    fn generated_settings_are_loadable() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.rs"), "// @markdown m.md:L9").unwrap();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .arg("init")
            .assert()
            .success();

        doclink_cmd()
            .current_dir(temp_dir.path())
            .args(["scan", "a.rs"])
            .assert()
            .success()
            .stdout(predicate::str::contains("@markdown  m.md:9"));
    }
}
