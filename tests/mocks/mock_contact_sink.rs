use contact_form::{Contact, CreateContact};
use std::sync::{Arc, Mutex};

/// Mock creation callback for testing.
///
/// Records every contact it receives. Clones share the same record, so a
/// test can hand one clone to the form and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactSink {
    created: Arc<Mutex<Vec<Contact>>>,
}

#[allow(dead_code)]
impl MockContactSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the callback was invoked.
    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len()
    }

    /// All contacts received so far, in order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.created.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Contact> {
        self.created.lock().unwrap().last().cloned()
    }
}

impl CreateContact for MockContactSink {
    fn create_contact(&mut self, contact: Contact) {
        self.created.lock().unwrap().push(contact);
    }
}
