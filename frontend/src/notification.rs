use crate::types::{NotificationKind, NotificationRequest};

pub type NotificationId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Sliding in or resting on screen.
    Entering,
    /// Exit animation running; removal follows.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl ActiveNotification {
    pub fn animation(&self) -> &'static str {
        match self.phase {
            NotificationPhase::Entering => "slideInRight 0.3s ease",
            NotificationPhase::Leaving => "slideOutRight 0.3s ease",
        }
    }
}

/// Single-slot toast state. Showing replaces whatever is on screen, and every
/// transition names the id it targets so late timers of a replaced toast are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    current: Option<ActiveNotification>,
    next_id: NotificationId,
}

impl NotificationCenter {
    pub fn show(&mut self, request: NotificationRequest) -> NotificationId {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveNotification {
            id,
            message: request.message,
            kind: request.kind,
            phase: NotificationPhase::Entering,
        });
        id
    }

    pub fn current(&self) -> Option<&ActiveNotification> {
        self.current.as_ref()
    }

    pub fn is_current(&self, id: NotificationId) -> bool {
        self.current.as_ref().is_some_and(|n| n.id == id)
    }

    /// Starts the exit animation. Returns false for stale ids or a toast that
    /// is already leaving.
    pub fn begin_exit(&mut self, id: NotificationId) -> bool {
        match self.current.as_mut() {
            Some(active) if active.id == id && active.phase == NotificationPhase::Entering => {
                active.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> bool {
        if self.is_current(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(message: &str) -> NotificationRequest {
        NotificationRequest::new(message, NotificationKind::Info)
    }

    #[test]
    fn second_show_replaces_first() {
        let mut center = NotificationCenter::default();
        let first = center.show(info("um"));
        let second = center.show(NotificationRequest::new("dois", NotificationKind::Success));
        assert_ne!(first, second);
        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.message, "dois");
        assert_eq!(current.kind.icon(), "fa-check-circle");
    }

    #[test]
    fn stale_timers_do_not_touch_the_replacement() {
        let mut center = NotificationCenter::default();
        let first = center.show(info("um"));
        let second = center.show(info("dois"));
        assert!(!center.begin_exit(first));
        assert!(!center.remove(first));
        assert!(center.is_current(second));
        assert_eq!(center.current().unwrap().phase, NotificationPhase::Entering);
    }

    #[test]
    fn exit_then_remove() {
        let mut center = NotificationCenter::default();
        let id = center.show(info("olá"));
        assert!(center.begin_exit(id));
        assert!(!center.begin_exit(id));
        assert_eq!(center.current().unwrap().animation(), "slideOutRight 0.3s ease");
        assert!(center.remove(id));
        assert!(center.current().is_none());
    }

    #[test]
    fn toast_shown_during_exit_survives_the_old_removal() {
        let mut center = NotificationCenter::default();
        let first = center.show(info("copiado"));
        assert!(center.begin_exit(first));

        let second = center.show(info("copiado de novo"));
        assert!(!center.remove(first));
        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.phase, NotificationPhase::Entering);

        assert!(center.begin_exit(second));
        assert!(center.remove(second));
        assert!(center.current().is_none());
    }
}
