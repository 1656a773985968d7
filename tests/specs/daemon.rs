//! Behavioral specs for `onecfg daemon`.
//!
//! The watch loop itself never returns, so these specs only cover the
//! paths that exit: an empty registry and a held lock.

use crate::prelude::*;

/// With nothing registered the daemon has nothing to do
#[test]
fn daemon_without_registrations_exits_cleanly() {
    let temp = Project::empty();

    onecfg_in(&temp)
        .arg("daemon")
        .assert()
        .success()
        .stdout(predicates::str::contains("No manifests registered"));
}

/// A second instance backs off quietly
#[test]
fn daemon_backs_off_when_the_lock_is_held() {
    let temp = Project::empty();
    std::fs::create_dir_all(temp.config_dir()).unwrap();
    std::fs::write(temp.config_dir().join("daemon.lock"), "12345").unwrap();

    onecfg_in(&temp)
        .arg("daemon")
        .assert()
        .success()
        .stdout(predicates::str::is_empty());
}

/// Backing off leaves the other instance's lock in place
#[test]
fn daemon_back_off_keeps_the_lock_file() {
    let temp = Project::empty();
    std::fs::create_dir_all(temp.config_dir()).unwrap();
    std::fs::write(temp.config_dir().join("daemon.lock"), "12345").unwrap();

    onecfg_in(&temp).arg("daemon").assert().success();

    assert_eq!(std::fs::read_to_string(temp.config_dir().join("daemon.lock")).unwrap(), "12345");
}
