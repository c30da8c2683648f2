use crate::Route;

/// Two-valued role classifier for selectable account profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Parent,
    Child,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Parent => "Parent",
            Self::Child => "Child",
        }
    }
}

/// A selectable identity on the login screen. Read-only reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub avatar_url: &'static str,
    pub card_color: &'static str,
    pub username_hint: Option<&'static str>,
    pub role: Role,
}

/// Lookup interface over selectable profiles, so the seed roster can be
/// swapped for a real data provider without touching the selection logic.
pub trait AccountDirectory {
    fn accounts(&self) -> &[AccountProfile];

    fn by_id(&self, id: &str) -> Option<&AccountProfile> {
        self.accounts().iter().find(|account| account.id == id)
    }

    fn for_role(&self, role: Role) -> Vec<&AccountProfile> {
        self.accounts()
            .iter()
            .filter(|account| account.role == role)
            .collect()
    }
}

pub const SEED_ACCOUNTS: &[AccountProfile] = &[
    AccountProfile {
        id: "abel",
        name: "Abel Kebede",
        avatar_url: "/nick-name-page-avatar-boy-blue-eyes.png",
        card_color: "#00A99D",
        username_hint: Some("abelk"),
        role: Role::Child,
    },
    AccountProfile {
        id: "kebede",
        name: "Kebede",
        avatar_url: "/nick-name-page-avatar-boy-brown-hair.jpg",
        card_color: "#B0BEC5",
        username_hint: Some("kebede_p"),
        role: Role::Parent,
    },
    AccountProfile {
        id: "tantos",
        name: "Tantos Kebede",
        avatar_url: "/nick-name-page-avatar-boy-laugh.png",
        card_color: "#FF7F50",
        username_hint: Some("tantosk"),
        role: Role::Child,
    },
    AccountProfile {
        id: "babi",
        name: "Babi Kebede",
        avatar_url: "/nick-name-page-avatar-boy-red-shirt.png",
        card_color: "#D4AC0D",
        username_hint: Some("babik"),
        role: Role::Child,
    },
];

/// The hardcoded family roster.
pub struct SeedAccounts;

impl AccountDirectory for SeedAccounts {
    fn accounts(&self) -> &[AccountProfile] {
        SEED_ACCOUNTS
    }
}

/// Local fallback destination after a successful login when the backend
/// supplies no redirect.
pub fn default_dashboard(
    role: Option<Role>,
    account_id: Option<&str>,
) -> Route {
    match (role, account_id) {
        (Some(Role::Parent), Some("kebede")) => Route::ParentDashboard,
        _ => Route::Dashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_role_keeps_only_matching_profiles() {
        let directory = SeedAccounts;

        let parents = directory.for_role(Role::Parent);
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].id, "kebede");

        let children = directory.for_role(Role::Child);
        assert_eq!(children.len(), 3);
        assert!(children.iter().all(|account| account.role == Role::Child));
    }

    #[test]
    fn by_id_finds_seeded_profiles() {
        let directory = SeedAccounts;
        assert_eq!(
            directory.by_id("tantos").map(|account| account.name),
            Some("Tantos Kebede")
        );
        assert_eq!(directory.by_id("nobody"), None);
    }

    #[test]
    fn parent_kebede_lands_on_the_parent_dashboard() {
        assert_eq!(
            default_dashboard(Some(Role::Parent), Some("kebede")),
            Route::ParentDashboard
        );
    }

    #[test]
    fn every_other_combination_lands_on_the_default_dashboard() {
        assert_eq!(
            default_dashboard(Some(Role::Child), Some("abel")),
            Route::Dashboard
        );
        assert_eq!(
            default_dashboard(Some(Role::Parent), Some("abel")),
            Route::Dashboard
        );
        assert_eq!(
            default_dashboard(Some(Role::Child), Some("kebede")),
            Route::Dashboard
        );
        assert_eq!(default_dashboard(None, None), Route::Dashboard);
    }
}
