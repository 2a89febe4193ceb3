use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn bundler() -> Command {
    let mut cmd = Command::cargo_bin("jfx-bundler").unwrap();
    cmd.env_remove("JAVA_HOME").env("RUST_LOG", "off");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// JDK 8 layout: `jre/lib` holds the runtime files.
fn fake_jdk(root: &Path) -> PathBuf {
    let home = root.join("jdk");
    let lib = home.join("jre/lib");
    std::fs::create_dir_all(&lib).unwrap();
    std::fs::write(
        lib.join("javafx.properties"),
        "javafx.runtime.version=2.2.3\njavafx.runtime.build=b05\n",
    )
    .unwrap();
    std::fs::write(lib.join("jfxrt.jar"), b"runtime").unwrap();
    std::fs::create_dir_all(home.join("lib")).unwrap();
    std::fs::write(home.join("lib/ant-javafx.jar"), b"ant").unwrap();
    home
}

#[test]
fn help_lists_commands() {
    bundler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("package"));
}

#[test]
fn install_copies_runtime_into_repository() {
    let tmp = tempfile::tempdir().unwrap();
    let home = fake_jdk(tmp.path());
    let repo = tmp.path().join("repo");

    bundler()
        .args(["install", "--java-home"])
        .arg(&home)
        .arg("--repository")
        .arg(&repo)
        .assert()
        .success()
        .stdout(predicate::str::contains("<artifactId>jfxrt</artifactId>"))
        .stdout(predicate::str::contains("<version>2.2.3</version>"));

    let dir = repo.join("com/sun/javafx");
    assert_eq!(
        std::fs::read(dir.join("jfxrt/2.2.3/jfxrt-2.2.3.jar")).unwrap(),
        b"runtime"
    );
    assert!(dir.join("jfxrt/2.2.3/jfxrt-2.2.3.pom").exists());
    assert!(dir.join("ant-javafx/2.2.3/ant-javafx-2.2.3.jar").exists());
}

#[test]
fn install_reads_java_home_from_environment() {
    let tmp = tempfile::tempdir().unwrap();
    let home = fake_jdk(tmp.path());

    bundler()
        .env("JAVA_HOME", &home)
        .args(["install", "--quiet", "--repository"])
        .arg(tmp.path().join("repo"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn install_without_runtime_fails() {
    let tmp = tempfile::tempdir().unwrap();

    bundler()
        .args(["install", "--java-home"])
        .arg(tmp.path())
        .arg("--repository")
        .arg(tmp.path().join("repo"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to find JavaFX"))
        .stderr(predicate::str::contains("7u9"));

    assert!(!tmp.path().join("repo").exists());
}

#[test]
fn package_rejects_unknown_bundle_type() {
    bundler()
        .args(["package", "--bundle-type", "pkg"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pkg"));
}

#[test]
fn package_without_config_fails() {
    let tmp = tempfile::tempdir().unwrap();

    bundler()
        .current_dir(tmp.path())
        .arg("package")
        .assert()
        .failure()
        .stderr(predicate::str::contains("jfx-bundle.toml"));
}

#[test]
fn package_without_packager_tool_fails() {
    bundler()
        .env("PATH", "")
        .args(["package", "--config"])
        .arg(fixture("jfx-bundle.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("javapackager"));
}
