//! End-to-end tests driving the compiled binary.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn workdir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ipexpand-it-{}-{}", tag, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create test workdir");
    dir
}

// Isolate the run from any user-level config and keep logs in the
// test workdir.
fn ipexpand(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_ipexpand"));
    cmd.current_dir(dir)
        .env("IPEXPAND_CONFIG", dir)
        .env("IPEXPAND_DATA", dir);
    cmd
}

fn assert_success(out: &Output) {
    assert!(
        out.status.success(),
        "ipexpand failed\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
}

#[test]
fn expands_file_given_as_argument() {
    let dir = workdir("arg");
    fs::write(dir.join("targets.txt"), "192.168.1.0/30\n10.0.0.5\nnot-an-ip\n").unwrap();

    let out = ipexpand(&dir).arg("targets.txt").output().expect("run ipexpand");
    assert_success(&out);

    let expanded = fs::read_to_string(dir.join("expanded_ip_list.txt")).unwrap();
    assert_eq!(
        expanded,
        "192.168.1.0\n192.168.1.1\n192.168.1.2\n192.168.1.3\n10.0.0.5\nnot-an-ip\n"
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("expanded_ip_list.txt"), "stdout: {}", stdout);
}

#[test]
fn prompts_for_path_when_no_argument() {
    let dir = workdir("prompt");
    fs::write(dir.join("targets.txt"), "2001:db8::/126\n").unwrap();

    let mut child = ipexpand(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn ipexpand");
    child.stdin.take().unwrap().write_all(b"targets.txt\n").unwrap();
    let out = child.wait_with_output().expect("wait for ipexpand");
    assert_success(&out);

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Enter the path to your file: "), "stdout: {}", stdout);

    let expanded = fs::read_to_string(dir.join("expanded_ip_list.txt")).unwrap();
    assert_eq!(expanded, "2001:db8::\n2001:db8::1\n2001:db8::2\n2001:db8::3\n");
}

#[test]
fn output_flag_overrides_default() {
    let dir = workdir("output");
    fs::write(dir.join("targets.txt"), "10.0.0.5\n").unwrap();

    let out = ipexpand(&dir)
        .args(["targets.txt", "--output", "custom.txt"])
        .output()
        .expect("run ipexpand");
    assert_success(&out);

    assert_eq!(fs::read_to_string(dir.join("custom.txt")).unwrap(), "10.0.0.5\n");
    assert!(!dir.join("expanded_ip_list.txt").exists());
}

#[test]
fn blank_lines_reappear_in_output() {
    let dir = workdir("blank");
    fs::write(dir.join("targets.txt"), "10.0.0.1\n\n10.0.0.2\n").unwrap();

    let out = ipexpand(&dir).arg("targets.txt").output().expect("run ipexpand");
    assert_success(&out);

    let expanded = fs::read_to_string(dir.join("expanded_ip_list.txt")).unwrap();
    assert_eq!(expanded, "10.0.0.1\n\n10.0.0.2\n");
}

#[test]
fn reruns_are_byte_identical() {
    let dir = workdir("rerun");
    fs::write(dir.join("targets.txt"), "172.16.0.0/29\nnot-an-ip\n\n8.8.8.8\n").unwrap();

    let out = ipexpand(&dir).arg("targets.txt").output().expect("run ipexpand");
    assert_success(&out);
    let first = fs::read(dir.join("expanded_ip_list.txt")).unwrap();

    let out = ipexpand(&dir).arg("targets.txt").output().expect("rerun ipexpand");
    assert_success(&out);
    let second = fs::read(dir.join("expanded_ip_list.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_input_file_exits_nonzero() {
    let dir = workdir("missing");

    let out = ipexpand(&dir).arg("no-such-file.txt").output().expect("run ipexpand");
    assert!(!out.status.success());
}
