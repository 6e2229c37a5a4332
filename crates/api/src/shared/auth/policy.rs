use serde::{Deserialize, Serialize};

/// A Policy is part of the json web token claims and decides which actions
/// the client can and cannot take.
///
/// Every mutating `UseCase` contains a list of `Permission`s that is required
/// to execute it. If the `Policy` is not authorized some of these
/// `Permission`s the request will be rejected. Tokens without a policy can
/// only read.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Policy {
    /// `Permission`s allowed by the `Policy`
    allow: Option<Vec<Permission>>,
    /// `Permission`s rejected by the `Policy`
    reject: Option<Vec<Permission>>,
}

impl Policy {
    pub fn new(allow: Option<Vec<Permission>>, reject: Option<Vec<Permission>>) -> Self {
        Self { allow, reject }
    }

    /// Checks if this `Policy` has the right to list of `Permission`s
    pub fn authorize(&self, permissions: &[Permission]) -> bool {
        if permissions.is_empty() {
            return true;
        }

        if let Some(rejected) = &self.reject {
            let rejects_any = rejected
                .iter()
                .any(|p| *p == Permission::All || permissions.contains(p));
            if rejects_any {
                return false;
            }
        }

        match &self.allow {
            Some(allowed) if allowed.contains(&Permission::All) => true,
            Some(allowed) => permissions.iter().all(|p| allowed.contains(p)),
            None => false,
        }
    }
}

/// `Permission` are different kind of actions that can be performed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub enum Permission {
    #[serde(rename = "*")]
    All,
    CreateChurch,
    UpdateChurch,
    DeleteChurch,
    CreateMember,
    DeleteMember,
    CreateTeam,
    UpdateTeam,
    DeleteTeam,
    CreateEvent,
    UpdateEvent,
    DeleteEvent,
    CreateService,
    UpdateService,
    DeleteService,
}
