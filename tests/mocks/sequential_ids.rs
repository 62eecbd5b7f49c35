use contact_form::{ContactId, IdGenerator};
use std::sync::atomic::{AtomicU64, Ordering};

/// Deterministic ID generator producing `contact-1`, `contact-2`, ...
#[allow(dead_code)]
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> ContactId {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        ContactId::new(format!("contact-{}", n)).unwrap()
    }
}
