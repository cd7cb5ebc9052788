use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

/// Form instance ids with a submission in progress.
///
/// This is the server-side counterpart of the submitting flag: a form
/// instance can hold at most one guard at a time.
#[derive(Clone, Default, Debug)]
pub struct InFlight(Arc<Mutex<HashSet<String>>>);

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `form_id`. Returns `None` while another guard for the same id
    /// is alive.
    pub fn try_acquire(&self, form_id: impl Into<String>) -> Option<InFlightGuard> {
        let form_id = form_id.into();
        let mut ids = self.0.lock().unwrap_or_else(PoisonError::into_inner);

        if !ids.insert(form_id.clone()) {
            return None;
        }

        Some(InFlightGuard {
            ids: self.0.clone(),
            form_id,
        })
    }

    pub fn contains(&self, form_id: &str) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(form_id)
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases the form id on drop, whatever the outcome was.
#[derive(Debug)]
pub struct InFlightGuard {
    ids: Arc<Mutex<HashSet<String>>>,
    form_id: String,
}

impl InFlightGuard {
    pub fn form_id(&self) -> &str {
        &self.form_id
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ids
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.form_id);
    }
}
