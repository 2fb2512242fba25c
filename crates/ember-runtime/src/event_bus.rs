//! Owner-scoped publish/subscribe registry

use crate::event::{EventKind, GameEvent};
use ember_core::NodeId;

/// Handle to one subscription. Ids are monotonically increasing and never
/// reused for the lifetime of the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A subscription callback. Receives the dispatch context (for the scene
/// bus this is the scene itself) and the event payload.
pub type Callback<C> = Box<dyn FnMut(&mut C, &GameEvent)>;

struct Subscription<C> {
    id: SubscriptionId,
    kind: EventKind,
    owner: NodeId,
    // Empty while the callback is checked out for dispatch
    callback: Option<Callback<C>>,
}

/// Publish/subscribe registry with owner-scoped bulk removal.
///
/// `C` is the mutable context handed to callbacks on dispatch. Dispatch
/// iterates a snapshot of the subscriber list taken at emit entry, so
/// handlers may subscribe, unsubscribe, or destroy owners mid-dispatch
/// without corrupting or skipping iteration.
///
/// When the context type itself owns the bus, callers orchestrate dispatch
/// with [`snapshot`](Self::snapshot) / [`begin_dispatch`](Self::begin_dispatch)
/// / [`finish_dispatch`](Self::finish_dispatch) so the callback can be
/// invoked while the bus is reachable through the context. [`emit`](Self::emit)
/// wraps the same sequence for standalone contexts.
pub struct EventBus<C> {
    subscriptions: Vec<Subscription<C>>,
    next_id: u64,
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback for one event kind under an owner identity.
    ///
    /// The owner is used only for bulk removal via [`unsubscribe`](Self::unsubscribe);
    /// scene-node destruction relies on it for cleanup.
    pub fn on<F>(&mut self, kind: EventKind, owner: NodeId, callback: F) -> SubscriptionId
    where
        F: FnMut(&mut C, &GameEvent) + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.push(Subscription {
            id,
            kind,
            owner,
            callback: Some(Box::new(callback)),
        });
        id
    }

    /// Remove exactly one subscription by id
    pub fn off(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|sub| sub.id != id);
    }

    /// Remove every subscription registered under `owner`
    pub fn unsubscribe(&mut self, owner: NodeId) {
        self.subscriptions.retain(|sub| sub.owner != owner);
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Number of live subscriptions registered under `owner`
    pub fn owner_count(&self, owner: NodeId) -> usize {
        self.subscriptions
            .iter()
            .filter(|sub| sub.owner == owner)
            .count()
    }

    /// Ids of every subscription matching `kind`, in registration order.
    /// This is the stable dispatch snapshot.
    pub fn snapshot(&self, kind: EventKind) -> Vec<SubscriptionId> {
        self.subscriptions
            .iter()
            .filter(|sub| sub.kind == kind)
            .map(|sub| sub.id)
            .collect()
    }

    /// Check out a subscription's callback for dispatch.
    ///
    /// Returns `None` if the subscription was removed since the snapshot was
    /// taken (or is already checked out by an outer dispatch of the same
    /// subscription).
    pub fn begin_dispatch(&mut self, id: SubscriptionId) -> Option<Callback<C>> {
        self.subscriptions
            .iter_mut()
            .find(|sub| sub.id == id)
            .and_then(|sub| sub.callback.take())
    }

    /// Return a checked-out callback. If the subscription was removed while
    /// its callback ran (e.g. the handler unsubscribed its own owner), the
    /// callback is dropped.
    pub fn finish_dispatch(&mut self, id: SubscriptionId, callback: Callback<C>) {
        if let Some(sub) = self.subscriptions.iter_mut().find(|sub| sub.id == id) {
            sub.callback = Some(callback);
        }
    }

    /// Synchronously invoke, in registration order, every live subscription
    /// matching the event's kind.
    pub fn emit(&mut self, ctx: &mut C, event: &GameEvent) {
        for id in self.snapshot(event.kind()) {
            let Some(mut callback) = self.begin_dispatch(id) else {
                continue;
            };
            callback(ctx, event);
            self.finish_dispatch(id, callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::Vec2;

    fn hero_at(x: f64, y: f64) -> GameEvent {
        GameEvent::HeroPosition(Vec2::new(x, y))
    }

    #[test]
    fn emit_invokes_in_registration_order() {
        let mut bus: EventBus<Vec<&'static str>> = EventBus::new();
        let owner = NodeId::new();
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push("first"));
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push("second"));
        bus.on(EventKind::ItemPickedUp, owner, |log, _| log.push("other"));

        let mut log = Vec::new();
        bus.emit(&mut log, &hero_at(1.0, 2.0));
        assert_eq!(log, vec!["first", "second"]);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut bus: EventBus<()> = EventBus::new();
        let owner = NodeId::new();
        let a = bus.on(EventKind::HeroPosition, owner, |_, _| {});
        let b = bus.on(EventKind::HeroPosition, owner, |_, _| {});
        bus.off(a);
        let c = bus.on(EventKind::HeroPosition, owner, |_, _| {});
        assert!(a < b && b < c);
    }

    #[test]
    fn off_removes_exactly_one() {
        let mut bus: EventBus<Vec<u32>> = EventBus::new();
        let owner = NodeId::new();
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push(1));
        let second = bus.on(EventKind::HeroPosition, owner, |log, _| log.push(2));
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push(3));

        bus.off(second);
        let mut log = Vec::new();
        bus.emit(&mut log, &hero_at(0.0, 0.0));
        assert_eq!(log, vec![1, 3]);
    }

    #[test]
    fn unsubscribe_removes_all_and_only_owner() {
        let mut bus: EventBus<Vec<&'static str>> = EventBus::new();
        let hero = NodeId::new();
        let camera = NodeId::new();
        bus.on(EventKind::HeroPosition, hero, |log, _| log.push("hero"));
        bus.on(EventKind::HeroPosition, camera, |log, _| log.push("camera"));
        bus.on(EventKind::ItemPickedUp, hero, |log, _| log.push("hero-item"));

        bus.unsubscribe(hero);
        assert_eq!(bus.owner_count(hero), 0);
        assert_eq!(bus.owner_count(camera), 1);

        let mut log = Vec::new();
        bus.emit(&mut log, &hero_at(0.0, 0.0));
        bus.emit(
            &mut log,
            &GameEvent::ItemPickedUp {
                image: "rod".into(),
                position: Vec2::ZERO,
            },
        );
        assert_eq!(log, vec!["camera"]);
    }

    #[test]
    fn subscription_added_mid_dispatch_waits_for_next_emit() {
        // The snapshot is taken at emit entry, so a handler registering a
        // new subscription must not see it fire during the same dispatch.
        let mut bus: EventBus<Vec<&'static str>> = EventBus::new();
        let owner = NodeId::new();

        // Orchestrate manually so the handler side effect can touch the bus
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push("a"));
        let event = hero_at(0.0, 0.0);
        let snapshot = bus.snapshot(event.kind());

        let mut log = Vec::new();
        for id in snapshot {
            let Some(mut cb) = bus.begin_dispatch(id) else {
                continue;
            };
            cb(&mut log, &event);
            // Handler side effect: a new subscription appears mid-dispatch
            bus.on(EventKind::HeroPosition, owner, |log, _| log.push("late"));
            bus.finish_dispatch(id, cb);
        }
        assert_eq!(log, vec!["a"]);

        // Next emit sees both
        bus.emit(&mut log, &event);
        assert_eq!(log, vec!["a", "a", "late"]);
    }

    #[test]
    fn subscription_removed_mid_dispatch_is_skipped() {
        let mut bus: EventBus<Vec<&'static str>> = EventBus::new();
        let owner = NodeId::new();
        bus.on(EventKind::HeroPosition, owner, |log, _| log.push("first"));
        let doomed = bus.on(EventKind::HeroPosition, owner, |log, _| log.push("doomed"));

        let event = hero_at(0.0, 0.0);
        let snapshot = bus.snapshot(event.kind());
        let mut log = Vec::new();
        for id in snapshot {
            let Some(mut cb) = bus.begin_dispatch(id) else {
                continue;
            };
            cb(&mut log, &event);
            // First handler's side effect removes the second subscription
            bus.off(doomed);
            bus.finish_dispatch(id, cb);
        }
        assert_eq!(log, vec!["first"]);
        assert_eq!(bus.len(), 1);
    }

    #[test]
    fn finish_dispatch_drops_removed_callback() {
        let mut bus: EventBus<()> = EventBus::new();
        let owner = NodeId::new();
        let id = bus.on(EventKind::HeroPosition, owner, |_, _| {});

        let cb = bus.begin_dispatch(id).unwrap();
        bus.unsubscribe(owner);
        bus.finish_dispatch(id, cb);
        assert!(bus.is_empty());
    }
}
