use crate::application::ports::IdentityProvider;
use crate::domain::value_objects::PrincipalId;
use std::sync::{Arc, RwLock};

/// In-process holder for the signed-in principal.
#[derive(Clone, Default)]
pub struct SessionIdentity {
    principal: Arc<RwLock<Option<PrincipalId>>>,
}

impl SessionIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(principal: PrincipalId) -> Self {
        Self {
            principal: Arc::new(RwLock::new(Some(principal))),
        }
    }

    pub fn sign_in(&self, principal: PrincipalId) {
        if let Ok(mut guard) = self.principal.write() {
            *guard = Some(principal);
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut guard) = self.principal.write() {
            *guard = None;
        }
    }
}

impl IdentityProvider for SessionIdentity {
    fn active_principal(&self) -> Option<PrincipalId> {
        self.principal.read().ok().and_then(|guard| guard.clone())
    }
}
