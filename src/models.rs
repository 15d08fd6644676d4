use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// One tracked deal between the user and a paying client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promo {
    #[serde(deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub client_name: String,
    /// `None` when the stored value was missing or not a number.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: Option<Decimal>,
    /// Unreadable dates are dropped and the promo ranks as undated.
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub priority: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub completed: bool,
    /// `None` when missing or unreadable; a completed record then shows up as
    /// a `MissingCompletedAt` issue.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub work_link: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
}

impl Promo {
    /// Amount used by every aggregate: invalid and negative values count as zero.
    pub fn earned(&self) -> Decimal {
        match self.amount {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LedgerData {
    #[serde(default)]
    pub promos: Vec<Promo>,
    #[serde(default)]
    pub monthly_goal: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPromo {
    pub client_name: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub amount: Decimal,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub priority: bool,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CompletionProof {
    #[serde(default)]
    pub work_link: Option<String>,
    #[serde(default)]
    pub screenshot_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriorityRequest {
    pub priority: bool,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub monthly_goal: Decimal,
}

#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub monthly_goal: Decimal,
    pub formatted: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientTotal {
    pub client_name: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthTotal {
    pub month: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    InvalidAmount,
    NegativeAmount,
    MissingCompletedAt,
    StrayCompletedAt,
    BlankClientName,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DataIssue {
    pub promo_id: String,
    pub kind: IssueKind,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub month: String,
    pub goal: Decimal,
    pub total_earned: Decimal,
    pub month_earned: Decimal,
    pub goal_percent: u8,
    pub goal_remaining: Decimal,
    pub average_per_promo: Decimal,
    pub projection: Decimal,
    pub completed_count: usize,
    pub active_count: usize,
    pub best_client: Option<ClientTotal>,
    pub best_month: Option<MonthTotal>,
    pub monthly_breakdown: Vec<MonthTotal>,
    pub client_leaderboard: Vec<ClientTotal>,
    pub issues: Vec<DataIssue>,
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number_to_decimal(&number),
        serde_json::Value::String(text) => parse_amount(&text),
        _ => None,
    })
}

fn number_to_decimal(number: &serde_json::Number) -> Option<Decimal> {
    if let Some(value) = number.as_i64() {
        return Some(Decimal::from(value));
    }
    if let Some(value) = number.as_u64() {
        return Some(Decimal::from(value));
    }
    parse_amount(&number.to_string())
        .or_else(|| number.as_f64().and_then(|value| Decimal::try_from(value).ok()))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "promo id must be a string or number, got {other}"
        ))),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => text,
        serde_json::Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(matches!(value, serde_json::Value::Bool(true)))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(|text| {
        NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .ok()
            .or_else(|| parse_timestamp(text).map(|ts| ts.date_naive()))
    }))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(parse_timestamp))
}

/// Reads RFC 3339, a zone-less date-time (taken as UTC) or a bare `YYYY-MM-DD`.
///
/// A bare date is anchored at 12:00 UTC, which lands on the same calendar day
/// in every offset from UTC-12 to UTC+14, so it buckets into its own month
/// whatever timezone `now` is in.
pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .map(|noon| noon.and_utc())
}

/// Parses a user- or service-supplied amount string; `None` when it is not numeric.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}
