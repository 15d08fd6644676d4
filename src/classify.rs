use crate::models::Promo;

/// Active and completed promos, each in input order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub active: Vec<&'a Promo>,
    pub completed: Vec<&'a Promo>,
}

pub fn partition(promos: &[Promo]) -> Partition<'_> {
    let (completed, active): (Vec<&Promo>, Vec<&Promo>) =
        promos.iter().partition(|promo| promo.completed);
    Partition { active, completed }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn promo(id: &str, completed: bool) -> Promo {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "client_name": "Client",
            "amount": 1,
            "completed": completed,
        }))
        .unwrap()
    }

    #[test]
    fn partition_is_total_and_disjoint() {
        let promos = vec![
            promo("a", false),
            promo("b", true),
            promo("c", false),
            promo("d", true),
        ];
        let split = partition(&promos);
        assert_eq!(split.active.len() + split.completed.len(), promos.len());
        assert!(split.active.iter().all(|p| !p.completed));
        assert!(split.completed.iter().all(|p| p.completed));
    }

    #[test]
    fn partition_keeps_input_order() {
        let promos = vec![
            promo("c1", true),
            promo("a1", false),
            promo("c2", true),
            promo("a2", false),
        ];
        let split = partition(&promos);
        let active: Vec<_> = split.active.iter().map(|p| p.id.as_str()).collect();
        let completed: Vec<_> = split.completed.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(active, vec!["a1", "a2"]);
        assert_eq!(completed, vec!["c1", "c2"]);
    }

    #[test]
    fn empty_input_gives_empty_partitions() {
        let split = partition(&[]);
        assert!(split.active.is_empty());
        assert!(split.completed.is_empty());
    }
}
