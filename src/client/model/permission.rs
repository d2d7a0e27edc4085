use crate::{client::model::session::SessionUser, model::role::Role};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Details,
    History,
    Delete,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "Edit",
            RowAction::Details => "Details",
            RowAction::History => "History",
            RowAction::Delete => "Delete",
        }
    }
}

/// Row actions an entity offers at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub history: bool,
    pub details: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const EDIT_ONLY: Capabilities = Capabilities {
        history: false,
        details: false,
        delete: false,
    };
}

/// The account a row belongs to, for rows that are themselves panel users.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordOwner<'a> {
    pub id: i64,
    pub username: &'a str,
    pub role: &'a str,
}

impl RecordOwner<'_> {
    fn is_super_admin(&self) -> bool {
        Role::from_name(self.role) == Some(Role::SuperAdmin)
    }

    /// Compares ids when the actor's id is known; `/check-auth` does not report it,
    /// so the username is the fallback.
    fn is(&self, actor: &SessionUser) -> bool {
        match actor.id {
            Some(id) => id == self.id,
            None => actor.username == self.username,
        }
    }
}

/// Actions rendered for one row, in display order.
pub fn visible_actions(
    capabilities: Capabilities,
    actor: &SessionUser,
    owner: Option<RecordOwner<'_>>,
) -> Vec<RowAction> {
    let mut actions = vec![RowAction::Edit];

    if capabilities.details {
        actions.push(RowAction::Details);
    }
    if capabilities.history {
        actions.push(RowAction::History);
    }
    if capabilities.delete {
        let deletable = owner.is_none_or(|owner| !owner.is_super_admin() && !owner.is(actor));
        if deletable {
            actions.push(RowAction::Delete);
        }
    }

    actions
}

/// Form fields the actor may not change on this row.
pub fn locked_fields(actor: &SessionUser, owner: Option<RecordOwner<'_>>) -> Vec<&'static str> {
    match owner {
        Some(owner) if owner.is_super_admin() && !actor.has_permission(Role::SuperAdmin) => {
            vec!["role"]
        }
        _ => Vec::new(),
    }
}

/// Who may open a list page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAccess {
    Anyone,
    AtLeast(Role),
    /// Ranked at least the first role, or holding exactly the second.
    AtLeastOrExactly(Role, Role),
}

impl PageAccess {
    pub fn allows(self, user: &SessionUser) -> bool {
        match self {
            PageAccess::Anyone => true,
            PageAccess::AtLeast(role) => user.has_permission(role),
            PageAccess::AtLeastOrExactly(role, exact) => {
                user.has_permission(role) || user.role == exact.name()
            }
        }
    }
}
