// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn clear() {
    for key in ["TRIAGE_STATE_DIR", "XDG_STATE_HOME", "TRIAGE_CONFIG", "TRIAGE_LOG"] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn state_dir_prefers_explicit_override() {
    clear();
    std::env::set_var("TRIAGE_STATE_DIR", "/tmp/triage-explicit");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");

    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/triage-explicit"));
    clear();
}

#[test]
#[serial]
fn state_dir_falls_back_to_xdg() {
    clear();
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");

    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/xdg/triage"));
    clear();
}

#[test]
#[serial]
fn blank_override_is_ignored() {
    clear();
    std::env::set_var("TRIAGE_STATE_DIR", "  ");
    std::env::set_var("XDG_STATE_HOME", "/tmp/xdg");

    assert_eq!(state_dir().unwrap(), PathBuf::from("/tmp/xdg/triage"));
    clear();
}

#[test]
#[serial]
fn config_path_defaults_into_state_dir() {
    clear();
    std::env::set_var("TRIAGE_STATE_DIR", "/tmp/triage-state");

    assert_eq!(config_path().unwrap(), PathBuf::from("/tmp/triage-state/config.toml"));

    std::env::set_var("TRIAGE_CONFIG", "/etc/triage.toml");
    assert_eq!(config_path().unwrap(), PathBuf::from("/etc/triage.toml"));
    clear();
}

#[test]
#[serial]
fn log_filter_defaults_to_info() {
    clear();
    assert_eq!(log_filter(), "info");

    std::env::set_var("TRIAGE_LOG", "triage_engine=debug");
    assert_eq!(log_filter(), "triage_engine=debug");
    clear();
}
