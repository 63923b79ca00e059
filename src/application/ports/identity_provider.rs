use crate::domain::value_objects::PrincipalId;

/// Source of the active authenticated principal.
pub trait IdentityProvider: Send + Sync {
    /// `None` while no session is active.
    fn active_principal(&self) -> Option<PrincipalId>;

    fn is_authenticated(&self) -> bool {
        self.active_principal().is_some()
    }
}
