//! Sums, averages and groupings over the completed set.
//!
//! Nothing here fails: invalid amounts count as zero, sums saturate at
//! `Decimal::MAX`, and records with gaps are reported through [`scan_issues`].

use crate::bucket::{bucket_for, this_month};
use crate::models::{ClientTotal, DataIssue, IssueKind, MonthTotal, Promo};
use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;
use std::collections::HashMap;

pub const BREAKDOWN_MONTHS: usize = 12;

pub fn total_earned(completed: &[&Promo]) -> Decimal {
    sum_earned(completed.iter().copied())
}

fn sum_earned<'a>(promos: impl Iterator<Item = &'a Promo>) -> Decimal {
    promos.fold(Decimal::ZERO, |acc, promo| acc.saturating_add(promo.earned()))
}

/// Completed promos whose completion falls in the month of `now`.
pub fn month_earned<Tz: TimeZone>(completed: &[&Promo], now: &DateTime<Tz>) -> Decimal {
    let current = this_month(now);
    sum_earned(completed.iter().copied().filter(|promo| {
        promo
            .completed_at
            .as_ref()
            .is_some_and(|ts| bucket_for(ts, now) == current)
    }))
}

pub fn average_per_promo(completed: &[&Promo]) -> Decimal {
    if completed.is_empty() {
        return Decimal::ZERO;
    }
    let count = Decimal::from(completed.len());
    total_earned(completed)
        .checked_div(count)
        .unwrap_or(Decimal::ZERO)
}

/// Totals per client name, in the order each client first appears.
pub fn client_totals(completed: &[&Promo]) -> Vec<ClientTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ClientTotal> = Vec::new();

    for promo in completed {
        let slot = *index.entry(promo.client_name.as_str()).or_insert_with(|| {
            totals.push(ClientTotal {
                client_name: promo.client_name.clone(),
                total: Decimal::ZERO,
            });
            totals.len() - 1
        });
        let entry = &mut totals[slot];
        entry.total = entry.total.saturating_add(promo.earned());
    }

    totals
}

/// Highest-earning client; the earliest one wins a tie.
pub fn best_client(totals: &[ClientTotal]) -> Option<ClientTotal> {
    let mut best: Option<&ClientTotal> = None;
    for entry in totals {
        if best.is_none_or(|current| entry.total > current.total) {
            best = Some(entry);
        }
    }
    best.cloned()
}

/// Totals per completion month, in the order each month first appears.
/// Records without `completed_at` do not land in any bucket.
pub fn month_totals<Tz: TimeZone>(completed: &[&Promo], now: &DateTime<Tz>) -> Vec<MonthTotal> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<MonthTotal> = Vec::new();

    for promo in completed {
        let Some(ts) = promo.completed_at.as_ref() else {
            continue;
        };
        let key = bucket_for(ts, now);
        let slot = match index.get(&key) {
            Some(slot) => *slot,
            None => {
                totals.push(MonthTotal {
                    month: key.clone(),
                    total: Decimal::ZERO,
                });
                index.insert(key, totals.len() - 1);
                totals.len() - 1
            }
        };
        let entry = &mut totals[slot];
        entry.total = entry.total.saturating_add(promo.earned());
    }

    totals
}

/// The `limit` most recent buckets, newest first.
pub fn recent_months(mut totals: Vec<MonthTotal>, limit: usize) -> Vec<MonthTotal> {
    totals.sort_by(|a, b| b.month.cmp(&a.month));
    totals.truncate(limit);
    totals
}

/// Best month among the retained buckets; ties go to the one listed first.
pub fn best_month(recent: &[MonthTotal]) -> Option<MonthTotal> {
    let mut best: Option<&MonthTotal> = None;
    for entry in recent {
        if best.is_none_or(|current| entry.total > current.total) {
            best = Some(entry);
        }
    }
    best.cloned()
}

/// Chronological breakdown of the retained buckets.
pub fn monthly_breakdown(recent: &[MonthTotal]) -> Vec<MonthTotal> {
    let mut ascending = recent.to_vec();
    ascending.sort_by(|a, b| a.month.cmp(&b.month));
    ascending
}

/// Month-to-date plus every open amount, regardless of due date.
pub fn projection(month_earned: Decimal, active: &[&Promo]) -> Decimal {
    month_earned.saturating_add(sum_earned(active.iter().copied()))
}

pub fn scan_issues(promos: &[Promo]) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    for promo in promos {
        let mut flag = |kind| {
            issues.push(DataIssue {
                promo_id: promo.id.clone(),
                kind,
            })
        };
        if promo.client_name.trim().is_empty() {
            flag(IssueKind::BlankClientName);
        }
        match promo.amount {
            None => flag(IssueKind::InvalidAmount),
            Some(amount) if amount < Decimal::ZERO => flag(IssueKind::NegativeAmount),
            Some(_) => {}
        }
        match (promo.completed, promo.completed_at.is_some()) {
            (true, false) => flag(IssueKind::MissingCompletedAt),
            (false, true) => flag(IssueKind::StrayCompletedAt),
            _ => {}
        }
    }
    issues
}
