//! Visibility state machine for scroll-revealed content.
//!
//! The engine never touches the DOM or a clock. The host feeds it
//! intersection ratios and fires the tickets it hands out once their delay
//! has elapsed; in return it reports which targets changed visibility and
//! which no longer need to be observed.
//!
//! # Invariants
//!
//! 1. A target only becomes `Visible` after its container (or itself) was
//!    seen at or above the configured threshold.
//! 2. Each target has at most one pending flip. Scheduling a new one bumps
//!    the target's generation, so a ticket from an older schedule is inert.
//! 3. `once` targets stop being observed at their first trigger and never
//!    return to `Hidden`.
//! 4. Unregistering drops all state; tickets for the target become inert.

use std::collections::HashMap;

use log::{debug, warn};

use super::config::RevealConfig;
use super::style::{RevealStyle, Visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Proof that a flip was scheduled; hand it back to [`RevealEngine::fire`]
/// when the delay is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTicket {
    pub subscription: SubscriptionId,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    Changed {
        subscription: SubscriptionId,
        visibility: Visibility,
    },
    Scheduled {
        ticket: FlipTicket,
        delay_ms: u32,
    },
    /// The host can disconnect its observer for this subscription.
    Released { subscription: SubscriptionId },
}

/// The platform's reduced-motion signal, sampled at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: SubscriptionId,
    /// False when there is nothing to observe (reduced motion).
    pub observe: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRegistration {
    pub container: SubscriptionId,
    pub children: Vec<SubscriptionId>,
    pub observe: bool,
}

#[derive(Debug)]
enum Role {
    Single,
    Container {
        children: Vec<SubscriptionId>,
        stagger_ms: u32,
    },
    Child,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    generation: u64,
    to: Visibility,
}

#[derive(Debug)]
struct Target {
    config: RevealConfig,
    role: Role,
    visibility: Visibility,
    in_view: bool,
    observing: bool,
    generation: u64,
    pending: Option<Pending>,
}

impl Target {
    fn new(config: RevealConfig, role: Role, motion: MotionPreference) -> Self {
        let reduced = motion == MotionPreference::Reduced;
        let observing = !reduced && !matches!(role, Role::Child);
        Self {
            config,
            role,
            visibility: if reduced { Visibility::Visible } else { Visibility::Hidden },
            in_view: false,
            observing,
            generation: 0,
            pending: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RevealEngine {
    next_id: u64,
    targets: HashMap<SubscriptionId, Target>,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, config: RevealConfig, motion: MotionPreference) -> Registration {
        let id = self.insert(Target::new(config, Role::Single, motion));
        let observe = motion == MotionPreference::Full;
        debug!("Registered reveal target {:?} (observe: {})", id, observe);
        Registration { id, observe }
    }

    /// Registers a container whose intersection reveals `child_count`
    /// children, child `i` after `config.delay_ms + i * stagger_ms`.
    pub fn register_group(
        &mut self,
        child_count: usize,
        stagger_ms: u32,
        config: RevealConfig,
        motion: MotionPreference,
    ) -> GroupRegistration {
        let children: Vec<SubscriptionId> = (0..child_count)
            .map(|_| self.insert(Target::new(config, Role::Child, motion)))
            .collect();
        let role = Role::Container {
            children: children.clone(),
            stagger_ms,
        };
        let container = self.insert(Target::new(config, role, motion));
        let observe = motion == MotionPreference::Full;
        debug!(
            "Registered reveal group {:?} with {} children (observe: {})",
            container, child_count, observe
        );
        GroupRegistration {
            container,
            children,
            observe,
        }
    }

    /// Feeds one observed intersection ratio for an observed subscription.
    pub fn on_intersection(&mut self, id: SubscriptionId, ratio: f64) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let Some(target) = self.targets.get_mut(&id) else {
            return events;
        };
        if !target.observing {
            return events;
        }

        let meets = target.config.is_met_by(ratio);
        if meets == target.in_view {
            return events;
        }
        target.in_view = meets;
        let config = target.config;

        let children = match &target.role {
            Role::Container {
                children,
                stagger_ms,
            } => Some((children.clone(), *stagger_ms)),
            _ => None,
        };

        if meets {
            match children {
                Some((children, stagger_ms)) => {
                    events.extend(self.schedule(id, Visibility::Visible, 0));
                    for (index, child) in children.into_iter().enumerate() {
                        let delay = stagger_delay(config.delay_ms, stagger_ms, index);
                        events.extend(self.schedule(child, Visibility::Visible, delay));
                    }
                }
                None => events.extend(self.schedule(id, Visibility::Visible, config.delay_ms)),
            }
            if config.once {
                if let Some(target) = self.targets.get_mut(&id) {
                    target.observing = false;
                }
                events.push(RevealEvent::Released { subscription: id });
            }
        } else {
            // Leaving the viewport hides at once and cancels anything pending.
            events.extend(self.schedule(id, Visibility::Hidden, 0));
            if let Some((children, _)) = children {
                for child in children {
                    events.extend(self.schedule(child, Visibility::Hidden, 0));
                }
            }
        }
        events
    }

    /// Applies a previously scheduled flip, unless it has been superseded or
    /// the target is gone.
    pub fn fire(&mut self, ticket: FlipTicket) -> Option<RevealEvent> {
        let target = self.targets.get_mut(&ticket.subscription)?;
        match target.pending {
            Some(pending) if pending.generation == ticket.generation => {
                target.pending = None;
                apply(ticket.subscription, target, pending.to)
            }
            _ => None,
        }
    }

    /// Observation could not be set up: show the content without animation.
    pub fn fall_back_to_visible(&mut self, id: SubscriptionId) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        let Some(target) = self.targets.get_mut(&id) else {
            return events;
        };
        warn!("Reveal target {:?} cannot be observed, showing it immediately", id);
        target.observing = false;
        let children = match &target.role {
            Role::Container { children, .. } => children.clone(),
            _ => Vec::new(),
        };
        for subscription in std::iter::once(id).chain(children) {
            if let Some(target) = self.targets.get_mut(&subscription) {
                target.generation += 1;
                target.pending = None;
                events.extend(apply(subscription, target, Visibility::Visible));
            }
        }
        events.push(RevealEvent::Released { subscription: id });
        events
    }

    /// Drops a subscription (and a container's children). Unknown or already
    /// released ids are ignored.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        let Some(target) = self.targets.remove(&id) else {
            return false;
        };
        if let Role::Container { children, .. } = target.role {
            for child in children {
                self.targets.remove(&child);
            }
        }
        debug!("Unregistered reveal target {:?}", id);
        true
    }

    pub fn visibility(&self, id: SubscriptionId) -> Option<Visibility> {
        self.targets.get(&id).map(|target| target.visibility)
    }

    pub fn is_observing(&self, id: SubscriptionId) -> bool {
        self.targets.get(&id).map_or(false, |target| target.observing)
    }

    /// Current style of a target. Unknown targets render settled so content
    /// is never stuck invisible.
    pub fn compute_style(&self, id: SubscriptionId) -> RevealStyle {
        match self.targets.get(&id) {
            Some(target) => RevealStyle::compute(target.visibility, &target.config),
            None => RevealStyle::settled(0),
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    fn insert(&mut self, target: Target) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.targets.insert(id, target);
        id
    }

    fn schedule(&mut self, id: SubscriptionId, to: Visibility, delay_ms: u32) -> Option<RevealEvent> {
        let target = self.targets.get_mut(&id)?;
        target.generation += 1;
        target.pending = None;
        if delay_ms == 0 {
            return apply(id, target, to);
        }
        target.pending = Some(Pending {
            generation: target.generation,
            to,
        });
        Some(RevealEvent::Scheduled {
            ticket: FlipTicket {
                subscription: id,
                generation: target.generation,
            },
            delay_ms,
        })
    }
}

fn apply(id: SubscriptionId, target: &mut Target, to: Visibility) -> Option<RevealEvent> {
    if target.visibility == to {
        return None;
    }
    target.visibility = to;
    Some(RevealEvent::Changed {
        subscription: id,
        visibility: to,
    })
}

/// Delay before child `index` of a stagger group flips.
pub fn stagger_delay(group_delay_ms: u32, stagger_ms: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    group_delay_ms.saturating_add(stagger_ms.saturating_mul(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::Direction;

    fn tickets(events: &[RevealEvent]) -> Vec<(FlipTicket, u32)> {
        events
            .iter()
            .filter_map(|event| match event {
                RevealEvent::Scheduled { ticket, delay_ms } => Some((*ticket, *delay_ms)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn hidden_until_threshold_reached() {
        let mut engine = RevealEngine::new();
        let config = RevealConfig::new().threshold(0.5).direction(Direction::Down).distance(30.0);
        let reg = engine.register(config, MotionPreference::Full);
        assert!(reg.observe);

        assert!(engine.on_intersection(reg.id, 0.3).is_empty());
        let style = engine.compute_style(reg.id);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate, (0.0, -30.0));

        let events = engine.on_intersection(reg.id, 0.5);
        assert!(events.contains(&RevealEvent::Changed {
            subscription: reg.id,
            visibility: Visibility::Visible,
        }));
        assert_eq!(engine.compute_style(reg.id).opacity, 1.0);
    }

    #[test]
    fn delayed_flip_waits_for_its_ticket() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new().delay(300), MotionPreference::Full);

        let events = engine.on_intersection(reg.id, 1.0);
        let scheduled = tickets(&events);
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].1, 300);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Hidden));

        assert_eq!(
            engine.fire(scheduled[0].0),
            Some(RevealEvent::Changed {
                subscription: reg.id,
                visibility: Visibility::Visible,
            })
        );
        // A ticket only works once.
        assert_eq!(engine.fire(scheduled[0].0), None);
    }

    #[test]
    fn once_targets_stay_visible_and_release_observation() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new(), MotionPreference::Full);

        let events = engine.on_intersection(reg.id, 0.8);
        assert!(events.contains(&RevealEvent::Released { subscription: reg.id }));
        assert!(!engine.is_observing(reg.id));

        assert!(engine.on_intersection(reg.id, 0.0).is_empty());
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Visible));
    }

    #[test]
    fn repeatable_targets_hide_immediately_and_redelay_on_return() {
        let mut engine = RevealEngine::new();
        let config = RevealConfig::new().once(false).delay(200);
        let reg = engine.register(config, MotionPreference::Full);

        let first = tickets(&engine.on_intersection(reg.id, 0.9));
        engine.fire(first[0].0);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Visible));

        let out = engine.on_intersection(reg.id, 0.05);
        assert_eq!(
            out,
            vec![RevealEvent::Changed {
                subscription: reg.id,
                visibility: Visibility::Hidden,
            }]
        );

        let again = tickets(&engine.on_intersection(reg.id, 0.9));
        assert_eq!(again[0].1, 200);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Hidden));
        engine.fire(again[0].0);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Visible));
    }

    #[test]
    fn superseded_flip_never_applies() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new().once(false).delay(500), MotionPreference::Full);

        let stale = tickets(&engine.on_intersection(reg.id, 1.0))[0].0;
        engine.on_intersection(reg.id, 0.0);
        let fresh = tickets(&engine.on_intersection(reg.id, 1.0))[0].0;

        assert_eq!(engine.fire(stale), None);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Hidden));
        assert!(engine.fire(fresh).is_some());
    }

    #[test]
    fn leaving_before_delay_cancels_reveal() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new().once(false).delay(500), MotionPreference::Full);

        let ticket = tickets(&engine.on_intersection(reg.id, 1.0))[0].0;
        // Still hidden, so leaving produces no visible change.
        assert!(engine.on_intersection(reg.id, 0.0).is_empty());
        assert_eq!(engine.fire(ticket), None);
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Hidden));
    }

    #[test]
    fn reduced_motion_is_visible_without_observing() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(
            RevealConfig::new().delay(1000).direction(Direction::Blur),
            MotionPreference::Reduced,
        );
        assert!(!reg.observe);
        let style = engine.compute_style(reg.id);
        assert_eq!(style.opacity, 1.0);
        assert_eq!(style.blur_px, 0.0);
        assert!(engine.on_intersection(reg.id, 1.0).is_empty());
    }

    #[test]
    fn unregister_is_idempotent_and_cancels_pending() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new().delay(100), MotionPreference::Full);
        let ticket = tickets(&engine.on_intersection(reg.id, 1.0))[0].0;

        assert!(engine.unregister(reg.id));
        assert!(!engine.unregister(reg.id));
        assert_eq!(engine.fire(ticket), None);
        assert_eq!(engine.visibility(reg.id), None);
        assert!(engine.on_intersection(reg.id, 1.0).is_empty());
        assert!(engine.is_empty());
    }

    #[test]
    fn unknown_targets_render_settled() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new(), MotionPreference::Full);
        engine.unregister(reg.id);
        assert_eq!(engine.compute_style(reg.id).opacity, 1.0);
    }

    #[test]
    fn fallback_shows_content() {
        let mut engine = RevealEngine::new();
        let reg = engine.register(RevealConfig::new().delay(400), MotionPreference::Full);
        assert!(engine.on_intersection(reg.id, 0.0).is_empty());

        let events = engine.fall_back_to_visible(reg.id);
        assert!(events.contains(&RevealEvent::Released { subscription: reg.id }));
        assert_eq!(engine.visibility(reg.id), Some(Visibility::Visible));
        assert!(!engine.is_observing(reg.id));
    }

    #[test]
    fn stagger_delays_grow_with_index() {
        let mut engine = RevealEngine::new();
        let group = engine.register_group(4, 120, RevealConfig::new().delay(50), MotionPreference::Full);

        for child in &group.children {
            assert!(engine.on_intersection(*child, 1.0).is_empty());
            assert_eq!(engine.visibility(*child), Some(Visibility::Hidden));
        }

        let events = engine.on_intersection(group.container, 1.0);
        let scheduled = tickets(&events);
        let delays: Vec<u32> = scheduled.iter().map(|(_, d)| *d).collect();
        assert_eq!(delays, vec![50, 170, 290, 410]);
        for ((ticket, _), child) in scheduled.iter().zip(&group.children) {
            assert_eq!(ticket.subscription, *child);
        }
    }

    #[test]
    fn stagger_children_wait_for_container() {
        let mut engine = RevealEngine::new();
        let group = engine.register_group(3, 100, RevealConfig::new(), MotionPreference::Full);

        assert!(engine.on_intersection(group.container, 0.1).is_empty());
        for child in &group.children {
            assert_eq!(engine.visibility(*child), Some(Visibility::Hidden));
        }

        // With no group delay the first child flips right away.
        let events = engine.on_intersection(group.container, 0.6);
        assert!(events.contains(&RevealEvent::Changed {
            subscription: group.children[0],
            visibility: Visibility::Visible,
        }));
        assert_eq!(tickets(&events).len(), 2);
        assert!(events.contains(&RevealEvent::Released {
            subscription: group.container
        }));
    }

    #[test]
    fn repeatable_group_hides_children_together() {
        let mut engine = RevealEngine::new();
        let group = engine.register_group(2, 100, RevealConfig::new().once(false), MotionPreference::Full);

        let events = engine.on_intersection(group.container, 1.0);
        let pending = tickets(&events);
        assert_eq!(engine.visibility(group.children[0]), Some(Visibility::Visible));

        engine.on_intersection(group.container, 0.0);
        assert_eq!(engine.visibility(group.children[0]), Some(Visibility::Hidden));
        assert_eq!(engine.fire(pending[0].0), None);
        assert_eq!(engine.visibility(group.children[1]), Some(Visibility::Hidden));
    }

    #[test]
    fn unregistering_group_drops_children() {
        let mut engine = RevealEngine::new();
        let group = engine.register_group(3, 100, RevealConfig::new(), MotionPreference::Full);
        assert_eq!(engine.len(), 4);
        assert!(engine.unregister(group.container));
        assert!(engine.is_empty());
    }

    #[test]
    fn reduced_motion_group_is_fully_visible() {
        let mut engine = RevealEngine::new();
        let group = engine.register_group(3, 100, RevealConfig::new(), MotionPreference::Reduced);
        assert!(!group.observe);
        for child in &group.children {
            assert_eq!(engine.compute_style(*child).opacity, 1.0);
        }
    }

    #[test]
    fn targets_in_one_callback_are_independent() {
        let mut engine = RevealEngine::new();
        let a = engine.register(RevealConfig::new().threshold(0.2), MotionPreference::Full);
        let b = engine.register(RevealConfig::new().threshold(0.8), MotionPreference::Full);

        engine.on_intersection(a.id, 0.5);
        engine.on_intersection(b.id, 0.5);
        assert_eq!(engine.visibility(a.id), Some(Visibility::Visible));
        assert_eq!(engine.visibility(b.id), Some(Visibility::Hidden));
    }

    #[test]
    fn stagger_delay_saturates() {
        assert_eq!(stagger_delay(0, 100, 3), 300);
        assert_eq!(stagger_delay(u32::MAX, 100, 3), u32::MAX);
    }
}
