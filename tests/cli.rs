use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn fixture_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_file(
        tmp.path(),
        "docs/index.rst",
        "API Reference\n=============\n\n.. autoindex-start\n.. autoindex-end\n\n* :ref:`genindex`\n",
    );
    write_file(tmp.path(), "blog/__init__.py", "");
    write_file(
        tmp.path(),
        "blog/models.py",
        "class Post:\n    pass\n\n\nclass Comment:\n    pass\n",
    );
    write_file(tmp.path(), "blog/utils.py", "def slugify(title):\n    return title\n");
    write_file(tmp.path(), "blog/feeds/__init__.py", "");
    write_file(
        tmp.path(),
        "blog/feeds/rss.py",
        "class RssFeed:\n    pass\n",
    );
    write_file(tmp.path(), "tools/migrate.py", "class Migration:\n    pass\n");
    tmp
}

fn cli() -> Command {
    Command::cargo_bin("sphinx-autoindex").unwrap()
}

#[test]
fn generate_writes_directives_and_preserves_surroundings() {
    let project = fixture_project();

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .success();

    let index = fs::read_to_string(project.path().join("docs/index.rst")).unwrap();

    assert!(index.starts_with("API Reference\n=============\n\n.. autoindex-start\n"));
    assert!(index.ends_with(".. autoindex-end\n\n* :ref:`genindex`\n"));
    assert!(index.contains(".. automodule:: blog\n    :members:\n"));
    assert!(index.contains(".. automodule:: blog.feeds.rss\n    :members:\n"));
    assert!(index.contains(".. autoclass:: RssFeed\n    :members:\n"));
    // Comment sorts before Post within blog.models
    let comment = index.find(".. autoclass:: Comment").unwrap();
    let post = index.find(".. autoclass:: Post").unwrap();
    assert!(comment < post);
    // tools/ has no __init__.py, so nothing in it is importable
    assert!(!index.contains("Migration"));
}

#[test]
fn check_fails_when_stale_and_passes_after_generate() {
    let project = fixture_project();

    cli()
        .arg("check")
        .arg(project.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("out of date"));

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .success();

    cli()
        .arg("check")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("up to date"));
}

#[test]
fn prefix_flag_limits_output() {
    let project = fixture_project();
    write_file(project.path(), "extras/__init__.py", "");
    write_file(
        project.path(),
        "extras/misc.py",
        "class Misc:\n    pass\n",
    );

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--prefix")
        .arg("blog")
        .arg("--quiet")
        .assert()
        .success();

    let index = fs::read_to_string(project.path().join("docs/index.rst")).unwrap();
    assert!(index.contains(".. automodule:: blog"));
    assert!(!index.contains("extras"));
    assert!(!index.contains("Misc"));
}

#[test]
fn list_json_reports_modules_and_classes() {
    let project = fixture_project();

    let output = cli()
        .arg("list")
        .arg(project.path())
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project"]["modules_count"], 5);
    assert_eq!(json["project"]["classes_count"], 3);

    let names: Vec<&str> = json["modules"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["blog", "blog.feeds", "blog.feeds.rss", "blog.models", "blog.utils"]
    );
}

#[test]
fn missing_index_file_is_a_validation_error() {
    let project = TempDir::new().unwrap();

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn missing_markers_are_reported() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "docs/index.rst", "no markers here\n");

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("autoindex-start"));
}

#[test]
fn config_file_supplies_index_and_prefixes() {
    let project = fixture_project();
    write_file(
        project.path(),
        "documentation/api.rst",
        ".. autoindex-start\n.. autoindex-end\n",
    );
    write_file(
        project.path(),
        "autoindex.toml",
        "index = \"documentation/api.rst\"\nprefixes = [\"blog.feeds\"]\n",
    );

    cli()
        .arg("generate")
        .arg(project.path())
        .arg("--quiet")
        .assert()
        .success();

    let index = fs::read_to_string(project.path().join("documentation/api.rst")).unwrap();
    assert!(index.contains(".. automodule:: blog.feeds\n"));
    assert!(index.contains(".. automodule:: blog.feeds.rss\n"));
    assert!(!index.contains(".. automodule:: blog\n"));
    assert!(!index.contains("blog.models"));

    // the default docs/index.rst was left alone
    let default_index = fs::read_to_string(project.path().join("docs/index.rst")).unwrap();
    assert!(!default_index.contains("automodule"));
}
