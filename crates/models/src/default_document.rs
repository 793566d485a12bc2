//! Seed document served before anything has been saved.

use once_cell::sync::Lazy;
use serde_json::Value;

static DEFAULT_DOCUMENT: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("default_document.json"))
        .expect("embedded default document is valid JSON")
});

/// The five-day cleaning plan used when no record exists yet.
pub fn default_document() -> Value {
    DEFAULT_DOCUMENT.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_days_in_order() {
        let doc = default_document();
        let days: Vec<u64> = doc["schedule"]
            .as_array()
            .map(|s| s.iter().filter_map(|d| d["day"].as_u64()).collect())
            .unwrap_or_default();
        assert_eq!(days, vec![1, 2, 3, 4, 5]);
        assert_eq!(doc["projectInfo"]["startDate"], "2025-12-22");
    }

    #[test]
    fn tasks_start_incomplete_with_unique_ids() {
        let doc = default_document();
        let mut ids = std::collections::HashSet::new();
        for day in doc["schedule"].as_array().into_iter().flatten() {
            for half in ["morning", "afternoon"] {
                for task in day[half]["tasks"].as_array().into_iter().flatten() {
                    assert_eq!(task["completed"], false);
                    assert!(ids.insert(task["id"].as_str().unwrap_or_default().to_string()));
                }
            }
        }
        assert_eq!(ids.len(), 32);
        // only the day-one morning tasks are high-level work
        let high: Vec<_> = doc["schedule"][0]["morning"]["tasks"]
            .as_array()
            .into_iter()
            .flatten()
            .filter(|t| t["isHighLevel"] == true)
            .collect();
        assert_eq!(high.len(), 3);
    }
}
