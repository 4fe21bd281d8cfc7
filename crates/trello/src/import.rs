//! Turning Trello cards into project tasks.

use anyhow::Result;
use async_trait::async_trait;
use burndown_core::{Complexity, Task};
use regex::Regex;
use tracing::debug;

use crate::client::{Card, TrelloClient};

/// Source of cards, abstracted so imports are testable without the network.
#[async_trait]
pub trait CardSource: Send + Sync {
    /// Cards in a list.
    async fn cards(&self, list_id: &str) -> Result<Vec<Card>>;
}

#[async_trait]
impl CardSource for TrelloClient {
    async fn cards(&self, list_id: &str) -> Result<Vec<Card>> {
        TrelloClient::cards(self, list_id).await
    }
}

/// Read a complexity bucket out of a card description.
///
/// "hard" beats "medium" beats "easy"; unmarked cards default to easy.
pub fn extract_complexity(desc: &str) -> Complexity {
    if mentions(desc, "hard") {
        Complexity::Hard
    } else if mentions(desc, "medium") {
        Complexity::Medium
    } else {
        Complexity::Easy
    }
}

fn mentions(desc: &str, word: &str) -> bool {
    Regex::new(&format!(r"(?i)\b{word}\b"))
        .map(|re| re.is_match(desc))
        .unwrap_or(false)
}

/// Import every card in a list as a task.
///
/// Each task gets a point estimate drawn from its complexity bucket.
pub async fn import_tasks(source: &dyn CardSource, list_id: &str) -> Result<Vec<Task>> {
    let cards = source.cards(list_id).await?;
    debug!(list_id, count = cards.len(), "importing cards as tasks");

    Ok(cards
        .into_iter()
        .map(|card| {
            let complexity = extract_complexity(&card.desc);
            Task::new(card.name, complexity.estimate_points()).with_complexity(complexity)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_complexity_precedence() {
        assert_eq!(
            extract_complexity("this one is hard, maybe medium"),
            Complexity::Hard
        );
        assert_eq!(
            extract_complexity("Medium effort refactoring"),
            Complexity::Medium
        );
        assert_eq!(extract_complexity("small cleanup"), Complexity::Easy);
        assert_eq!(extract_complexity(""), Complexity::Easy);
    }

    #[test]
    fn test_extract_complexity_matches_whole_words() {
        // "hardware" must not read as hard
        assert_eq!(extract_complexity("hardware setup"), Complexity::Easy);
    }

    struct FixedSource(Vec<Card>);

    #[async_trait]
    impl CardSource for FixedSource {
        async fn cards(&self, _list_id: &str) -> Result<Vec<Card>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_import_tasks_estimates_from_complexity() {
        let source = FixedSource(vec![
            Card {
                id: "1".into(),
                name: "Backend Infrastructure".into(),
                desc: "hard".into(),
                due: None,
            },
            Card {
                id: "2".into(),
                name: "Docs".into(),
                desc: String::new(),
                due: None,
            },
        ]);

        let tasks = import_tasks(&source, "list-1").await.unwrap();
        assert_eq!(tasks.len(), 2);

        assert_eq!(tasks[0].complexity, Some(Complexity::Hard));
        let (min, max) = Complexity::Hard.point_range();
        assert!(tasks[0].estimated_points >= min as f64);
        assert!(tasks[0].estimated_points <= max as f64);

        assert_eq!(tasks[1].complexity, Some(Complexity::Easy));
    }
}
