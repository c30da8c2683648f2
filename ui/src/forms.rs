//! Pure form state for the account screens: presence checks, per-field
//! error maps, and request construction. Free of DOM types so the submit
//! rules stay unit-testable.

use std::collections::HashMap;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = HashMap<String, String>;

pub mod login {
    use payloads::requests;

    use super::FieldErrors;
    use crate::accounts::{AccountDirectory, AccountProfile, Role};

    /// Field names the login screen renders errors for.
    pub const FIELDS: &[&str] = &["username", "password"];

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Fields {
        pub role: Option<Role>,
        pub account_id: Option<&'static str>,
        pub username: String,
        pub password: String,
    }

    impl Fields {
        /// Choose a role. A previously selected account of the other role
        /// is dropped along with both credential fields.
        pub fn select_role(
            &mut self,
            role: Role,
            directory: &impl AccountDirectory,
        ) {
            self.role = Some(role);
            match self.account_id.and_then(|id| directory.by_id(id)) {
                Some(account) if account.role == role => {}
                _ => {
                    self.account_id = None;
                    self.username.clear();
                    self.password.clear();
                }
            }
        }

        /// Choose an account profile. Its username hint seeds the username
        /// field; any stale password is dropped.
        pub fn select_account(&mut self, account: &AccountProfile) {
            self.account_id = Some(account.id);
            self.username =
                account.username_hint.unwrap_or_default().to_string();
            self.password.clear();
        }

        pub fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.username.trim().is_empty() {
                errors.insert(
                    "username".to_string(),
                    "Username is required.".to_string(),
                );
            }
            if self.password.is_empty() {
                errors.insert(
                    "password".to_string(),
                    "Password is required.".to_string(),
                );
            }
            errors
        }

        /// Validate and build the submission request. `Err` means nothing
        /// may be dispatched.
        pub fn prepare(
            &self,
            query_params: &[(String, String)],
        ) -> Result<requests::LoginRequest, FieldErrors> {
            let errors = self.validate();
            if !errors.is_empty() {
                return Err(errors);
            }
            Ok(requests::LoginRequest {
                email_or_username: self.username.clone(),
                password: self.password.clone(),
                query_params: query_params.iter().cloned().collect(),
            })
        }
    }
}

pub mod register {
    use payloads::requests;

    use super::FieldErrors;

    /// Field names the creation screen renders errors for.
    pub const FIELDS: &[&str] = &["name", "username", "email", "password"];

    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Fields {
        pub name: String,
        pub username: String,
        pub email: String,
        pub password: String,
        pub terms_accepted: bool,
    }

    impl Fields {
        pub fn validate(&self) -> FieldErrors {
            let mut errors = FieldErrors::new();
            if self.name.trim().is_empty() {
                errors.insert(
                    "name".to_string(),
                    "Name is required.".to_string(),
                );
            } else if self.name.len() > requests::NAME_MAX_LEN {
                errors.insert(
                    "name".to_string(),
                    "Name must be at most 255 characters.".to_string(),
                );
            }
            if self.username.trim().is_empty() {
                errors.insert(
                    "username".to_string(),
                    "Username is required.".to_string(),
                );
            }
            if let Some(message) =
                requests::validate_email(&self.email).error_message()
            {
                errors.insert("email".to_string(), message.to_string());
            }
            if self.password.is_empty() {
                errors.insert(
                    "password".to_string(),
                    "Password is required.".to_string(),
                );
            }
            errors
        }

        /// Validate and build the submission request. `honor_code` mirrors
        /// the terms checkbox, matching the backend contract.
        pub fn prepare(
            &self,
            query_params: &[(String, String)],
        ) -> Result<requests::RegisterRequest, FieldErrors> {
            let errors = self.validate();
            if !errors.is_empty() {
                return Err(errors);
            }
            Ok(requests::RegisterRequest {
                name: self.name.trim().to_string(),
                username: self.username.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                terms_of_service: self.terms_accepted,
                honor_code: self.terms_accepted,
                query_params: query_params.iter().cloned().collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::{AccountDirectory, Role, SeedAccounts};

    fn query() -> Vec<(String, String)> {
        vec![
            ("next".to_string(), "/course/algebra".to_string()),
            ("utm_source".to_string(), "newsletter".to_string()),
        ]
    }

    #[test]
    fn login_prepare_rejects_blank_required_fields() {
        let fields = login::Fields {
            role: Some(Role::Parent),
            account_id: Some("kebede"),
            username: "kebede_p".to_string(),
            password: String::new(),
        };

        let errors = fields.prepare(&query()).unwrap_err();
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("username"));
    }

    #[test]
    fn login_prepare_carries_fields_and_query_params() {
        let fields = login::Fields {
            role: Some(Role::Parent),
            account_id: Some("kebede"),
            username: "kebede_p".to_string(),
            password: "hunter2".to_string(),
        };

        let request = fields.prepare(&query()).unwrap();
        assert_eq!(request.email_or_username, "kebede_p");
        assert_eq!(request.password, "hunter2");
        assert_eq!(
            request.query_params.get("next").map(String::as_str),
            Some("/course/algebra")
        );
        assert_eq!(
            request.query_params.get("utm_source").map(String::as_str),
            Some("newsletter")
        );
    }

    #[test]
    fn switching_role_clears_mismatched_account_and_credentials() {
        let directory = SeedAccounts;
        let mut fields = login::Fields::default();
        fields.select_role(Role::Parent, &directory);
        fields.select_account(directory.by_id("kebede").unwrap());
        fields.password = "hunter2".to_string();

        fields.select_role(Role::Child, &directory);

        assert_eq!(fields.role, Some(Role::Child));
        assert_eq!(fields.account_id, None);
        assert!(fields.username.is_empty());
        assert!(fields.password.is_empty());
    }

    #[test]
    fn switching_role_keeps_a_matching_account() {
        let directory = SeedAccounts;
        let mut fields = login::Fields::default();
        fields.select_role(Role::Child, &directory);
        fields.select_account(directory.by_id("abel").unwrap());

        fields.select_role(Role::Child, &directory);
        assert_eq!(fields.account_id, Some("abel"));
        assert_eq!(fields.username, "abelk");
    }

    #[test]
    fn selecting_an_account_seeds_the_username_hint() {
        let directory = SeedAccounts;
        let mut fields = login::Fields::default();
        fields.select_role(Role::Child, &directory);
        fields.password = "left-over".to_string();

        fields.select_account(directory.by_id("tantos").unwrap());
        assert_eq!(fields.username, "tantosk");
        assert!(fields.password.is_empty());
    }

    #[test]
    fn register_prepare_rejects_any_blank_required_field() {
        for missing in ["name", "username", "email", "password"] {
            let mut fields = register::Fields {
                name: "Abel Kebede".to_string(),
                username: "abelk".to_string(),
                email: "abel@example.com".to_string(),
                password: "hunter2".to_string(),
                terms_accepted: true,
            };
            match missing {
                "name" => fields.name.clear(),
                "username" => fields.username.clear(),
                "email" => fields.email.clear(),
                "password" => fields.password.clear(),
                _ => unreachable!(),
            }

            let errors = fields.prepare(&query()).unwrap_err();
            assert!(
                errors.contains_key(missing),
                "expected an error for {missing}"
            );
        }
    }

    #[test]
    fn register_prepare_mirrors_terms_into_honor_code() {
        let fields = register::Fields {
            name: " Abel Kebede ".to_string(),
            username: "abelk".to_string(),
            email: "abel@example.com".to_string(),
            password: "hunter2".to_string(),
            terms_accepted: true,
        };

        let request = fields.prepare(&query()).unwrap();
        assert_eq!(request.name, "Abel Kebede");
        assert!(request.terms_of_service);
        assert!(request.honor_code);
        assert_eq!(
            request.query_params.get("utm_source").map(String::as_str),
            Some("newsletter")
        );
    }

    #[test]
    fn error_keys_stay_within_the_declared_field_lists() {
        let login_errors = login::Fields::default().validate();
        assert!(
            login_errors
                .keys()
                .all(|key| login::FIELDS.contains(&key.as_str()))
        );

        let register_errors = register::Fields::default().validate();
        assert!(
            register_errors
                .keys()
                .all(|key| register::FIELDS.contains(&key.as_str()))
        );
    }
}
