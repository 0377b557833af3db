// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn enqueue_stamps_arrival_time() {
    let desk = desk();
    desk.clock().set_epoch_ms(5_000);

    desk.enqueue(ticket("1")).unwrap();
    desk.enqueue(Ticket::builder().id("2").created_at_ms(Some(10)).build()).unwrap();

    let pending = desk.pending();
    assert_eq!(pending[0].created_at_ms, Some(5_000));
    assert_eq!(pending[1].created_at_ms, Some(10));
}

#[test]
fn enqueue_trims_and_rejects_blank_ids() {
    let desk = desk();
    assert!(matches!(desk.enqueue(ticket("  ")), Err(DeskError::BlankTicketId)));

    desk.enqueue(ticket(" 42 ")).unwrap();
    assert_eq!(desk.pending()[0].id, TicketId::new("42"));
}

#[test]
fn activate_requires_pending_ticket() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    desk.enqueue(ticket("2")).unwrap();

    assert!(matches!(desk.activate("9"), Err(DeskError::UnknownTicket(_))));
    assert_eq!(desk.active_ticket().unwrap().id, TicketId::new("1"));

    desk.activate("2").unwrap();
    assert_eq!(desk.active_ticket().unwrap().id, TicketId::new("2"));
}
