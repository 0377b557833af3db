// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

const MIN: u64 = 60_000;

#[test]
fn rows_mark_active_ticket_and_bucket_waits() {
    let now = 100 * MIN;
    let fresh = Ticket::builder().id("1").created_at_ms(Some(now - 5 * MIN)).build();
    let late = Ticket::builder().id("2").created_at_ms(Some(now - 50 * MIN)).build();
    let unknown = Ticket::builder().id("3").build();

    let rows = pending_rows(vec![fresh.clone(), late, unknown], Some(&fresh), now);

    assert!(rows[0].active);
    assert_eq!(rows[0].sla, Some(SlaBucket::Normal));
    assert!(!rows[1].active);
    assert_eq!(rows[1].sla, Some(SlaBucket::Critical));
    assert_eq!(rows[1].wait_ms, Some(50 * MIN));
    assert_eq!(rows[2].sla, None);
}

#[test]
fn row_json_flattens_the_ticket() {
    let ticket = Ticket::builder().id("7").subject("pix falhou").created_at_ms(Some(0)).build();
    let rows = pending_rows(vec![ticket], None, 20 * MIN);

    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["id"], "7");
    assert_eq!(json["subject"], "pix falhou");
    assert_eq!(json["active"], false);
    assert_eq!(json["sla"], "attention");
}
