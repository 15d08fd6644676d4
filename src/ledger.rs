//! Lifecycle operations on a ledger snapshot: add, complete, prioritise,
//! delete, and set the monthly goal.

use crate::errors::LedgerError;
use crate::models::{CompletionProof, LedgerData, NewPromo, Promo};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

impl LedgerData {
    pub fn find(&self, id: &str) -> Option<&Promo> {
        self.promos.iter().find(|promo| promo.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Promo, LedgerError> {
        self.promos
            .iter_mut()
            .find(|promo| promo.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))
    }

    /// Inserts a new active promo at the front (newest first).
    pub fn add_promo(
        &mut self,
        new: NewPromo,
        id: String,
        now: DateTime<Utc>,
    ) -> Result<Promo, LedgerError> {
        let client_name = new.client_name.trim();
        if client_name.is_empty() {
            return Err(LedgerError::Validation("client_name is required".into()));
        }
        if new.amount < Decimal::ZERO {
            return Err(LedgerError::Validation("amount must not be negative".into()));
        }

        let promo = Promo {
            id,
            client_name: client_name.to_string(),
            amount: Some(new.amount),
            due_date: new.due_date,
            priority: new.priority,
            completed: false,
            completed_at: None,
            created_at: Some(now),
            platform: non_blank(new.platform),
            notes: non_blank(new.notes),
            work_link: None,
            screenshot_url: None,
        };
        self.promos.insert(0, promo.clone());
        Ok(promo)
    }

    pub fn complete_promo(
        &mut self,
        id: &str,
        proof: CompletionProof,
        now: DateTime<Utc>,
    ) -> Result<Promo, LedgerError> {
        let promo = self.find_mut(id)?;
        if promo.completed {
            return Err(LedgerError::AlreadyCompleted(id.to_string()));
        }
        promo.completed = true;
        promo.completed_at = Some(now);
        if let Some(link) = non_blank(proof.work_link) {
            promo.work_link = Some(link);
        }
        if let Some(url) = non_blank(proof.screenshot_url) {
            promo.screenshot_url = Some(url);
        }
        Ok(promo.clone())
    }

    pub fn set_priority(&mut self, id: &str, priority: bool) -> Result<Promo, LedgerError> {
        let promo = self.find_mut(id)?;
        promo.priority = priority;
        Ok(promo.clone())
    }

    pub fn delete_promo(&mut self, id: &str) -> Result<Promo, LedgerError> {
        let position = self
            .promos
            .iter()
            .position(|promo| promo.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        Ok(self.promos.remove(position))
    }

    pub fn set_goal(&mut self, goal: Decimal) -> Result<Decimal, LedgerError> {
        if goal < Decimal::ZERO {
            return Err(LedgerError::Validation(
                "monthly_goal must not be negative".into(),
            ));
        }
        self.monthly_goal = Some(goal);
        Ok(goal)
    }

    /// Stored goal, or `default_goal` when none has been set yet.
    pub fn goal_or(&self, default_goal: Decimal) -> Decimal {
        self.monthly_goal.unwrap_or(default_goal)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn seed(data: &mut LedgerData, id: &str, client: &str, now: DateTime<Utc>) -> Promo {
        let draft = new_promo(client, dec!(100));
        data.add_promo(draft, id.to_string(), now).unwrap()
    }

    fn new_promo(client: &str, amount: Decimal) -> NewPromo {
        NewPromo {
            client_name: client.to_string(),
            platform: Some("TikTok".into()),
            amount,
            due_date: None,
            notes: Some("   ".into()),
            priority: false,
        }
    }

    #[test]
    fn add_inserts_active_promo_at_front() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        seed(&mut data, "p1", "Acme", now);
        let added = data
            .add_promo(new_promo("  Beta ", dec!(50)), "p2".into(), now)
            .unwrap();

        assert_eq!(added.client_name, "Beta");
        assert!(!added.completed);
        assert_eq!(added.created_at, Some(now));
        assert_eq!(added.notes, None);
        assert_eq!(added.platform.as_deref(), Some("TikTok"));
        assert_eq!(data.promos[0].id, "p2");
        assert_eq!(data.promos[1].id, "p1");
    }

    #[test]
    fn add_rejects_blank_client_and_negative_amount() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        assert!(matches!(
            data.add_promo(new_promo("  ", dec!(10)), "p1".into(), now),
            Err(LedgerError::Validation(_))
        ));
        assert!(matches!(
            data.add_promo(new_promo("Acme", dec!(-1)), "p1".into(), now),
            Err(LedgerError::Validation(_))
        ));
        assert!(data.promos.is_empty());
    }

    #[test]
    fn complete_sets_completion_time_and_proof() {
        let mut data = LedgerData::default();
        let created = at("2024-06-01T10:00:00Z");
        seed(&mut data, "p1", "Acme", created);
        let when = at("2024-06-03T18:30:00Z");
        let proof = CompletionProof {
            work_link: Some("https://video.example/1".into()),
            screenshot_url: Some("".into()),
        };
        let done = data.complete_promo("p1", proof, when).unwrap();

        assert!(done.completed);
        assert_eq!(done.completed_at, Some(when));
        assert_eq!(done.work_link.as_deref(), Some("https://video.example/1"));
        assert_eq!(done.screenshot_url, None);
        assert_eq!(data.find("p1"), Some(&done));
    }

    #[test]
    fn completing_twice_is_a_conflict() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        seed(&mut data, "p1", "Acme", now);
        let proof = CompletionProof::default();
        data.complete_promo("p1", proof.clone(), now).unwrap();
        assert_eq!(
            data.complete_promo("p1", proof, now),
            Err(LedgerError::AlreadyCompleted("p1".into()))
        );
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        let missing = Err(LedgerError::NotFound("nope".into()));
        let proof = CompletionProof::default();
        assert_eq!(data.complete_promo("nope", proof, now), missing);
        assert_eq!(data.set_priority("nope", true), missing);
        assert_eq!(data.delete_promo("nope"), missing);
    }

    #[test]
    fn priority_toggles_in_place() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        seed(&mut data, "p1", "Acme", now);
        assert!(data.set_priority("p1", true).unwrap().priority);
        assert!(!data.set_priority("p1", false).unwrap().priority);
    }

    #[test]
    fn delete_removes_the_record() {
        let mut data = LedgerData::default();
        let now = at("2024-06-01T10:00:00Z");
        seed(&mut data, "p1", "Acme", now);
        seed(&mut data, "p2", "Beta", now);
        let removed = data.delete_promo("p1").unwrap();
        assert_eq!(removed.client_name, "Acme");
        assert_eq!(data.promos.len(), 1);
        assert!(data.find("p1").is_none());
    }

    #[test]
    fn goal_falls_back_until_set() {
        let mut data = LedgerData::default();
        assert_eq!(data.goal_or(dec!(1000)), dec!(1000));
        data.set_goal(dec!(2500)).unwrap();
        assert_eq!(data.goal_or(dec!(1000)), dec!(2500));
        data.set_goal(Decimal::ZERO).unwrap();
        assert_eq!(data.goal_or(dec!(1000)), Decimal::ZERO);
        assert!(matches!(
            data.set_goal(dec!(-1)),
            Err(LedgerError::Validation(_))
        ));
    }
}
