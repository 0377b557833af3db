// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_follow_color_setting() {
    let plain = format!("{:?}", Styles::plain());

    force_color();
    assert_ne!(format!("{:?}", styles()), plain);

    disable_color();
    assert_eq!(format!("{:?}", styles()), plain);
}

#[test]
#[serial]
fn header_produces_ansi_when_color_forced() {
    force_color();

    let result = header("AGENT");
    assert!(result.starts_with("\x1b[38;5;74m"), "expected ANSI header color");
    assert!(result.ends_with("\x1b[0m"), "expected ANSI reset");
}

#[test]
#[serial]
fn sla_colors_only_late_buckets() {
    force_color();

    assert_eq!(sla(SlaBucket::Normal, "5 min"), "5 min");
    assert!(sla(SlaBucket::Attention, "20 min").contains("\x1b[38;5;214m"));
    assert!(sla(SlaBucket::Critical, "1h 2m").contains("\x1b[38;5;203m"));
}

#[test]
#[serial]
fn occupancy_is_red_only_when_overloaded() {
    force_color();

    assert_eq!(occupancy(false, "50%"), "50%");
    assert!(occupancy(true, "90%").contains("\x1b[38;5;203m"));
}

#[test]
#[serial]
fn helpers_plain_when_no_color() {
    disable_color();

    assert_eq!(header("foo"), "foo");
    assert_eq!(literal("bar"), "bar");
    assert_eq!(context("baz"), "baz");
    assert_eq!(muted("dim"), "dim");
    assert_eq!(sla(SlaBucket::Critical, "1h 0m"), "1h 0m");
}

#[test]
#[serial]
fn no_color_overrides_color_force() {
    std::env::set_var("NO_COLOR", "1");
    std::env::set_var("COLOR", "1");
    assert!(!should_colorize(), "NO_COLOR=1 should override COLOR=1");
    std::env::remove_var("COLOR");
}
