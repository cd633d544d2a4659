//! Minimaler Publish/Subscribe-Mechanismus.
//!
//! Jede Komponente erzeugt ihren eigenen `EventBus` und reicht ihn per
//! Referenz weiter (Dependency Injection) — es gibt bewusst keine globale
//! Registry. Für Tests ist jeder Kanal unabhängig konstruierbar.

/// Handle eines registrierten Abonnenten, wird zum Abmelden benötigt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Event-Kanal mit beliebig vielen Callback-Abonnenten.
pub struct EventBus<E> {
    subscribers: Vec<(SubscriptionId, Box<dyn FnMut(&E)>)>,
    next_id: u64,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventBus<E> {
    /// Erstellt einen leeren Kanal.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Registriert einen Abonnenten und gibt sein Handle zurück.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Entfernt einen Abonnenten. Unbekannte Handles sind ein No-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Stellt ein Event an alle Abonnenten in Registrierungs-Reihenfolge zu.
    pub fn publish(&mut self, event: &E) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    /// Gibt die Anzahl aktiver Abonnenten zurück.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
