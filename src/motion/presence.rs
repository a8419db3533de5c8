use super::transition::Transition;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::time::Duration;

/// How visible an animated item is on the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visibility {
    /// Waiting out an entrance delay; laid out but not drawn.
    Hidden,
    Entering(f32),
    Shown,
    Exiting(f32),
}

impl Visibility {
    pub fn opacity(&self) -> f32 {
        match *self {
            Visibility::Hidden => 0.0,
            Visibility::Entering(p) => p,
            Visibility::Shown => 1.0,
            Visibility::Exiting(p) => 1.0 - p,
        }
    }

    /// Signed slide amount in `-1.0..=1.0`: positive before settling in,
    /// negative while leaving, zero at rest.
    pub fn offset(&self) -> f32 {
        match *self {
            Visibility::Hidden => 1.0,
            Visibility::Entering(p) => 1.0 - p,
            Visibility::Shown => 0.0,
            Visibility::Exiting(p) => -p,
        }
    }
}

/// Enter and exit lengths for a presence wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub enter: Duration,
    pub exit: Duration,
}

impl Timing {
    pub const fn new(enter: Duration, exit: Duration) -> Self {
        Self { enter, exit }
    }

    pub const fn symmetric(duration: Duration) -> Self {
        Self::new(duration, duration)
    }

    /// Collapses both phases to zero length when animations are turned off.
    pub fn enabled(self, animations: bool) -> Self {
        if animations {
            self
        } else {
            Self::new(Duration::ZERO, Duration::ZERO)
        }
    }
}

#[derive(Debug, Clone)]
enum Phase<K> {
    Entering(Transition),
    Exiting { leaving: K, transition: Transition },
}

/// Keyed single-child presence in "wait" mode: when the key changes, the old
/// child finishes exiting before the new one starts entering, so two children
/// are never shown together.
#[derive(Debug, Clone)]
pub struct Presence<K> {
    current: K,
    phase: Option<Phase<K>>,
    timing: Timing,
}

impl<K: Clone + PartialEq> Presence<K> {
    /// Starts with `key` entering, like a child appearing on first mount.
    pub fn new(key: K, timing: Timing) -> Self {
        let mut presence = Self {
            current: key,
            phase: Some(Phase::Entering(Transition::new(timing.enter))),
            timing,
        };
        presence.settle();
        presence
    }

    pub fn key(&self) -> &K {
        &self.current
    }

    /// Retarget to `next`. Returns `false` when `next` is already the key.
    pub fn switch(&mut self, next: K) -> bool {
        if next == self.current {
            return false;
        }
        match self.phase.take() {
            Some(exiting @ Phase::Exiting { .. }) => {
                self.phase = Some(exiting);
                self.current = next;
            }
            _ => {
                let leaving = std::mem::replace(&mut self.current, next);
                self.phase = Some(Phase::Exiting {
                    leaving,
                    transition: Transition::new(self.timing.exit),
                });
            }
        }
        self.settle();
        true
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let animating = match &mut self.phase {
            Some(Phase::Entering(t)) | Some(Phase::Exiting { transition: t, .. }) => {
                t.advance(dt);
                true
            }
            None => false,
        };
        self.settle();
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_some()
    }

    /// The child to draw this frame and how visible it is.
    pub fn visible(&self) -> (&K, Visibility) {
        match &self.phase {
            None => (&self.current, Visibility::Shown),
            Some(Phase::Entering(t)) => (&self.current, Visibility::Entering(t.progress())),
            Some(Phase::Exiting {
                leaving,
                transition,
            }) => (leaving, Visibility::Exiting(transition.progress())),
        }
    }

    fn settle(&mut self) {
        loop {
            let next = match &self.phase {
                Some(Phase::Exiting { transition, .. }) if transition.is_done() => {
                    Some(Phase::Entering(Transition::new(self.timing.enter)))
                }
                Some(Phase::Entering(t)) if t.is_done() => None,
                _ => break,
            };
            self.phase = next;
        }
    }
}

#[derive(Debug, Clone)]
enum Entry {
    Entering(Transition),
    Shown,
    Exiting(Transition),
}

/// Presence for a keyed set of children that may enter and leave
/// independently. Leaving children linger until their exit completes.
#[derive(Debug, Clone)]
pub struct ListPresence<K> {
    entries: HashMap<K, Entry>,
    timing: Timing,
}

impl<K: Clone + Eq + Hash> ListPresence<K> {
    pub fn new(initial: impl IntoIterator<Item = K>, timing: Timing) -> Self {
        let entries = initial
            .into_iter()
            .map(|k| (k, Entry::Entering(Transition::new(timing.enter))))
            .collect();
        let mut list = Self { entries, timing };
        list.settle();
        list
    }

    /// Reconcile with the current membership. Returns `true` if anything
    /// started entering or exiting.
    pub fn sync(&mut self, members: &[K]) -> bool {
        let wanted: HashSet<&K> = members.iter().collect();
        let mut changed = false;

        for key in members {
            if matches!(self.entries.get(key), None | Some(Entry::Exiting(_))) {
                self.entries
                    .insert(key.clone(), Entry::Entering(Transition::new(self.timing.enter)));
                changed = true;
            }
        }

        for (key, entry) in self.entries.iter_mut() {
            if !wanted.contains(key) && !matches!(entry, Entry::Exiting(_)) {
                *entry = Entry::Exiting(Transition::new(self.timing.exit));
                changed = true;
            }
        }

        self.settle();
        changed
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let mut animating = false;
        for entry in self.entries.values_mut() {
            if let Entry::Entering(t) | Entry::Exiting(t) = entry {
                t.advance(dt);
                animating = true;
            }
        }
        self.settle();
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.entries
            .values()
            .any(|e| !matches!(e, Entry::Shown))
    }

    /// `None` once a child has fully left.
    pub fn visibility(&self, key: &K) -> Option<Visibility> {
        self.entries.get(key).map(|entry| match entry {
            Entry::Entering(t) => Visibility::Entering(t.progress()),
            Entry::Shown => Visibility::Shown,
            Entry::Exiting(t) => Visibility::Exiting(t.progress()),
        })
    }

    fn settle(&mut self) {
        self.entries.retain(|_, e| !matches!(e, Entry::Exiting(t) if t.is_done()));
        for entry in self.entries.values_mut() {
            if matches!(entry, Entry::Entering(t) if t.is_done()) {
                *entry = Entry::Shown;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_300: Duration = Duration::from_millis(300);

    fn timing() -> Timing {
        Timing::symmetric(MS_300)
    }

    #[test]
    fn test_presence_waits_for_exit_before_enter() {
        let mut p = Presence::new("a", timing());
        p.advance(MS_300);
        assert_eq!(p.visible(), (&"a", Visibility::Shown));

        assert!(p.switch("b"));
        assert_eq!(p.key(), &"b");
        let (shown, vis) = p.visible();
        assert_eq!(*shown, "a");
        assert!(matches!(vis, Visibility::Exiting(_)));

        p.advance(MS_300);
        let (shown, vis) = p.visible();
        assert_eq!(*shown, "b");
        assert!(matches!(vis, Visibility::Entering(_)));

        p.advance(MS_300);
        assert_eq!(p.visible(), (&"b", Visibility::Shown));
        assert!(!p.is_animating());
    }

    #[test]
    fn test_presence_same_key_is_noop() {
        let mut p = Presence::new(1, timing());
        p.advance(MS_300);
        assert!(!p.switch(1));
        assert!(!p.is_animating());
    }

    #[test]
    fn test_presence_retarget_during_exit_keeps_single_child() {
        let mut p = Presence::new(0, timing());
        p.advance(MS_300);
        p.switch(1);
        p.switch(2);
        assert_eq!(*p.visible().0, 0);
        p.advance(MS_300);
        assert_eq!(*p.visible().0, 2);
    }

    #[test]
    fn test_presence_without_animation_switches_instantly() {
        let mut p = Presence::new("a", timing().enabled(false));
        assert!(!p.is_animating());
        p.switch("b");
        assert_eq!(p.visible(), (&"b", Visibility::Shown));
    }

    #[test]
    fn test_list_presence_enters_and_exits() {
        let mut list = ListPresence::new(["a", "b"], timing());
        list.advance(MS_300);
        assert_eq!(list.visibility(&"a"), Some(Visibility::Shown));

        assert!(list.sync(&["b", "c"]));
        assert!(matches!(list.visibility(&"a"), Some(Visibility::Exiting(_))));
        assert_eq!(list.visibility(&"b"), Some(Visibility::Shown));
        assert!(matches!(list.visibility(&"c"), Some(Visibility::Entering(_))));

        list.advance(MS_300);
        assert_eq!(list.visibility(&"a"), None);
        assert_eq!(list.visibility(&"c"), Some(Visibility::Shown));
        assert!(!list.is_animating());
    }

    #[test]
    fn test_list_presence_reentering_cancels_exit() {
        let mut list = ListPresence::new(["a"], timing().enabled(false));
        list.sync(&[]);
        assert_eq!(list.visibility(&"a"), None);
        assert!(list.sync(&["a"]));
        assert_eq!(list.visibility(&"a"), Some(Visibility::Shown));
    }

    #[test]
    fn test_visibility_opacity_and_offset() {
        assert_eq!(Visibility::Hidden.opacity(), 0.0);
        assert_eq!(Visibility::Shown.opacity(), 1.0);
        assert_eq!(Visibility::Shown.offset(), 0.0);
        assert!(Visibility::Exiting(0.5).offset() < 0.0);
        assert!(Visibility::Entering(0.5).offset() > 0.0);
    }
}
