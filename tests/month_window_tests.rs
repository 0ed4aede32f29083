// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use kakebo::ledger::MonthWindow;

#[test]
fn normalizes_month_overflow() {
    assert_eq!(
        MonthWindow::normalized(2025, 0),
        MonthWindow {
            year: 2024,
            month: 12
        }
    );
    assert_eq!(
        MonthWindow::normalized(2025, 13),
        MonthWindow {
            year: 2026,
            month: 1
        }
    );
    assert_eq!(
        MonthWindow::normalized(2025, 7),
        MonthWindow {
            year: 2025,
            month: 7
        }
    );
    // large overflow folds across multiple years
    assert_eq!(
        MonthWindow::normalized(2025, 25),
        MonthWindow {
            year: 2027,
            month: 1
        }
    );
}

#[test]
fn prev_rolls_into_december() {
    let jan = MonthWindow {
        year: 2025,
        month: 1,
    };
    assert_eq!(
        jan.prev(),
        MonthWindow {
            year: 2024,
            month: 12
        }
    );
}

#[test]
fn next_rolls_into_january() {
    let dec = MonthWindow {
        year: 2024,
        month: 12,
    };
    assert_eq!(
        dec.next(),
        MonthWindow {
            year: 2025,
            month: 1
        }
    );
}

#[test]
fn prev_next_are_inverses_mid_year() {
    let w = MonthWindow {
        year: 2025,
        month: 8,
    };
    assert_eq!(w.prev().next(), w);
    assert_eq!(w.next().prev(), w);
}

#[test]
fn parses_year_month() {
    assert_eq!(
        MonthWindow::parse("2025-08"),
        Some(MonthWindow {
            year: 2025,
            month: 8
        })
    );
    assert_eq!(MonthWindow::parse("2025-13"), None);
    assert_eq!(MonthWindow::parse("2025-00"), None);
    assert_eq!(MonthWindow::parse("2025"), None);
    assert_eq!(MonthWindow::parse("abc-de"), None);
}

#[test]
fn displays_zero_padded() {
    let w = MonthWindow {
        year: 2025,
        month: 3,
    };
    assert_eq!(w.to_string(), "2025-03");
}
