//! Display orderings. Every sort here is stable, so records with equal keys
//! keep the order they were supplied in.

use crate::models::{ClientTotal, Promo};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// Stand-in for a missing due date; sorts after any real deadline.
pub const NO_DEADLINE: NaiveDate = NaiveDate::MAX;

/// Priority first, then earliest due date, undated last.
pub fn rank_active_queue<'a>(active: &[&'a Promo]) -> Vec<&'a Promo> {
    let mut queue = active.to_vec();
    queue.sort_by_key(|promo| {
        (
            Reverse(promo.priority),
            promo.due_date.unwrap_or(NO_DEADLINE),
        )
    });
    queue
}

/// Every client, highest total first.
pub fn client_leaderboard(totals: &[ClientTotal]) -> Vec<ClientTotal> {
    let mut board = totals.to_vec();
    board.sort_by(|a, b| b.total.cmp(&a.total));
    board
}

/// Most recently completed first; records without a completion time go last.
pub fn history_order<'a>(completed: &[&'a Promo]) -> Vec<&'a Promo> {
    let mut history = completed.to_vec();
    history.sort_by_key(|promo| {
        (
            promo.completed_at.is_none(),
            Reverse(promo.completed_at),
        )
    });
    history
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn promo(id: &str, priority: bool, due: Option<&str>) -> Promo {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "client_name": "Client",
            "amount": 10,
            "priority": priority,
            "due_date": due,
        }))
        .unwrap()
    }

    fn finished(id: &str, at: Option<&str>) -> Promo {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "client_name": "Client",
            "amount": 10,
            "completed": true,
            "completed_at": at,
        }))
        .unwrap()
    }

    fn client(name: &str, total: rust_decimal::Decimal) -> ClientTotal {
        ClientTotal {
            client_name: name.to_string(),
            total,
        }
    }

    fn ids(promos: &[&Promo]) -> Vec<String> {
        promos.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn priority_beats_earlier_due_date() {
        let a = promo("A", false, Some("2024-01-01"));
        let b = promo("B", true, Some("2024-12-31"));
        let ranked = rank_active_queue(&[&a, &b]);
        assert_eq!(ids(&ranked), vec!["B", "A"]);
    }

    #[test]
    fn due_date_ascending_with_undated_last() {
        let undated = promo("undated", false, None);
        let late = promo("late", false, Some("2025-09-01"));
        let soon = promo("soon", false, Some("2025-02-01"));
        let ranked = rank_active_queue(&[&undated, &late, &soon]);
        assert_eq!(ids(&ranked), vec!["soon", "late", "undated"]);
    }

    #[test]
    fn undated_priority_still_precedes_dated_regular() {
        let regular = promo("regular", false, Some("2020-01-01"));
        let urgent = promo("urgent", true, None);
        let ranked = rank_active_queue(&[&regular, &urgent]);
        assert_eq!(ids(&ranked), vec!["urgent", "regular"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let first = promo("first", true, Some("2024-05-05"));
        let second = promo("second", true, Some("2024-05-05"));
        let third = promo("third", false, None);
        let fourth = promo("fourth", false, None);
        let ranked = rank_active_queue(&[&third, &first, &fourth, &second]);
        assert_eq!(ids(&ranked), vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn leaderboard_descends_and_is_stable() {
        let totals = vec![
            client("Acme", dec!(300)),
            client("Beta", dec!(400)),
            client("Gamma", dec!(300)),
        ];
        let names: Vec<_> = client_leaderboard(&totals)
            .into_iter()
            .map(|entry| entry.client_name)
            .collect();
        assert_eq!(names, vec!["Beta", "Acme", "Gamma"]);
    }

    #[test]
    fn history_is_newest_first() {
        let old = finished("old", Some("2024-01-02T00:00:00Z"));
        let unknown = finished("unknown", None);
        let new = finished("new", Some("2024-06-02T00:00:00Z"));
        let ordered = history_order(&[&old, &unknown, &new]);
        assert_eq!(ids(&ordered), vec!["new", "old", "unknown"]);
    }
}
