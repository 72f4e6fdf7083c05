use catalog::TierId;

/// Which single tier's supplementary detail list, if any, is currently
/// visible. A single optional id, not a set: expanding one card implicitly
/// collapses any other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailsExpansion(Option<TierId>);

impl DetailsExpansion {
    pub fn toggle(&mut self, id: &TierId) {
        if self.0.as_ref() == Some(id) {
            self.0 = None;
        } else {
            self.0 = Some(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &TierId) -> bool {
        self.0.as_ref() == Some(id)
    }

    pub fn expanded(&self) -> Option<&TierId> {
        self.0.as_ref()
    }

    pub fn collapse(&mut self) {
        self.0 = None;
    }
}
