use crate::aggregate::{
    BREAKDOWN_MONTHS, average_per_promo, best_client, best_month, client_totals, month_earned,
    month_totals, monthly_breakdown, projection, recent_months, scan_issues, total_earned,
};
use crate::bucket::this_month;
use crate::classify::partition;
use crate::goal::goal_progress;
use crate::models::{LedgerData, Promo, StatsResponse};
use crate::ranking::{client_leaderboard, history_order, rank_active_queue};
use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;

pub fn build_stats(data: &LedgerData, default_goal: Decimal) -> StatsResponse {
    build_stats_at(&Local::now(), data, default_goal)
}

pub fn build_stats_at<Tz: TimeZone>(
    now: &DateTime<Tz>,
    data: &LedgerData,
    default_goal: Decimal,
) -> StatsResponse {
    let split = partition(&data.promos);
    let goal = data.goal_or(default_goal);

    let total = total_earned(&split.completed);
    let this_month_earned = month_earned(&split.completed, now);
    let progress = goal_progress(this_month_earned, goal);

    let clients = client_totals(&split.completed);
    let recent = recent_months(month_totals(&split.completed, now), BREAKDOWN_MONTHS);

    StatsResponse {
        month: this_month(now),
        goal,
        total_earned: total,
        month_earned: this_month_earned,
        goal_percent: progress.percent,
        goal_remaining: progress.remaining,
        average_per_promo: average_per_promo(&split.completed),
        projection: projection(this_month_earned, &split.active),
        completed_count: split.completed.len(),
        active_count: split.active.len(),
        best_client: best_client(&clients),
        best_month: best_month(&recent),
        monthly_breakdown: monthly_breakdown(&recent),
        client_leaderboard: client_leaderboard(&clients),
        issues: scan_issues(&data.promos),
    }
}

pub fn build_queue(data: &LedgerData) -> Vec<Promo> {
    let split = partition(&data.promos);
    rank_active_queue(&split.active)
        .into_iter()
        .cloned()
        .collect()
}

pub fn build_history(data: &LedgerData) -> Vec<Promo> {
    let split = partition(&data.promos);
    history_order(&split.completed)
        .into_iter()
        .cloned()
        .collect()
}
