use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::card::{Card, CardKind};

/// Latest content of every card, shared between the refresh tasks and the
/// HTTP handlers.
pub struct DashboardState {
    cards: RwLock<HashMap<CardKind, Card>>,
}

impl DashboardState {
    pub fn new() -> Self {
        let cards = CardKind::ALL
            .iter()
            .map(|kind| (*kind, Card::loading(*kind)))
            .collect();
        Self {
            cards: RwLock::new(cards),
        }
    }

    pub async fn set(&self, card: Card) {
        self.cards.write().await.insert(card.kind, card);
    }

    pub async fn set_all(&self, cards: Vec<Card>) {
        let mut guard = self.cards.write().await;
        for card in cards {
            guard.insert(card.kind, card);
        }
    }

    pub async fn get(&self, kind: CardKind) -> Option<Card> {
        self.cards.read().await.get(&kind).cloned()
    }

    /// Cards in display order.
    pub async fn snapshot(&self) -> Vec<Card> {
        let guard = self.cards.read().await;
        CardKind::ALL
            .iter()
            .filter_map(|kind| guard.get(kind).cloned())
            .collect()
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
