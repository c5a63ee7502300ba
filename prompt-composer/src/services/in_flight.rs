//! Loading guard: at most one outstanding gateway call per rendered form.

use dashmap::DashSet;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InFlightForms {
    forms: Arc<DashSet<Uuid>>,
}

/// Held while a form's call is outstanding; dropping it releases the form.
#[must_use]
pub struct InFlightClaim {
    forms: Arc<DashSet<Uuid>>,
    form_id: Uuid,
}

impl InFlightForms {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` if `form_id` already has a call in flight.
    pub fn try_claim(&self, form_id: Uuid) -> Option<InFlightClaim> {
        if !self.forms.insert(form_id) {
            return None;
        }
        Some(InFlightClaim {
            forms: self.forms.clone(),
            form_id,
        })
    }

    pub fn is_in_flight(&self, form_id: &Uuid) -> bool {
        self.forms.contains(form_id)
    }
}

impl Drop for InFlightClaim {
    fn drop(&mut self) {
        self.forms.remove(&self.form_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_while_first_is_held() {
        let forms = InFlightForms::new();
        let form_id = Uuid::new_v4();

        let claim = forms.try_claim(form_id);
        assert!(claim.is_some());
        assert!(forms.try_claim(form_id).is_none());
        assert!(forms.is_in_flight(&form_id));
    }

    #[test]
    fn dropping_claim_releases_form() {
        let forms = InFlightForms::new();
        let form_id = Uuid::new_v4();

        drop(forms.try_claim(form_id));

        assert!(!forms.is_in_flight(&form_id));
        assert!(forms.try_claim(form_id).is_some());
    }

    #[test]
    fn forms_are_guarded_independently() {
        let forms = InFlightForms::new();

        let _first = forms.try_claim(Uuid::new_v4()).unwrap();
        assert!(forms.try_claim(Uuid::new_v4()).is_some());
    }
}
