// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn columns_pad_to_widest_cell() {
    let mut table = Table::new(vec![Column::left("NAME"), Column::right("LOAD")]);
    table.row(vec!["Ana".into(), "0%".into()]);
    table.row(vec!["Bruno Costa".into(), "50%".into()]);

    assert_eq!(
        table.lines(),
        vec![
            "NAME         LOAD".to_string(),
            "Ana            0%".to_string(),
            "Bruno Costa   50%".to_string(),
        ]
    );
}

#[test]
fn short_rows_render_blank_cells() {
    let mut table = Table::new(vec![Column::left("ID"), Column::left("TAGS")]);
    table.row(vec!["7".into()]);

    assert_eq!(table.lines(), vec!["ID  TAGS".to_string(), "7".to_string()]);
}
