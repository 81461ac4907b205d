use crate::common::id::OwnerId;

/// Identity record for the person or entity accounts belong to.
#[derive(Debug, Clone)]
pub struct AccountOwner {
    id: OwnerId,
    name: String,
}

impl AccountOwner {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: OwnerId::new(),
            name: name.into(),
        }
    }

    pub fn id(&self) -> OwnerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
