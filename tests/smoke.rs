use assert_cmd::Command;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("arp-runner").expect("binary exists");
    cmd.arg("--help").assert().success();
}

#[test]
fn cli_rejects_unknown_flags() {
    let mut cmd = Command::cargo_bin("arp-runner").expect("binary exists");
    cmd.arg("--bogus").assert().failure();
}
