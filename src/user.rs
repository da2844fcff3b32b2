use std::sync::Arc;
use serde::{Deserialize, Serialize};

/// A single user record, as returned by the users endpoint \
/// Any additional fields in the JSON are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub address: Address,
}

/// The part of a users address, that is actually shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

impl User {

    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            address: Address { city: city.into() },
        }
    }

    /// Shorthand for `address.city`
    pub fn city(&self) -> &str {
        &self.address.city
    }

}

/// The users, that are shown when the endpoint can not be reached
pub static FALLBACK_USERS: once_cell::sync::Lazy<Arc<[User]>> = once_cell::sync::Lazy::new(|| {
    Arc::from([
        User::new(1, "Leanne Graham", "Sincere@april.biz", "Gwenborough"),
        User::new(2, "Ervin Howell", "Shanna@melissa.tv", "Wisokyburgh"),
        User::new(3, "Clementine Bauch", "Nathan@yesenia.net", "McKenziehaven"),
    ])
});

/// Returns a shared handle to the default fallback dataset
pub fn fallback_users() -> Arc<[User]> {
    FALLBACK_USERS.clone()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_users() {
        let names: Vec<_> = fallback_users().iter().map(|user| user.name.clone()).collect();
        assert_eq!(names, ["Leanne Graham", "Ervin Howell", "Clementine Bauch"]);
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "id": 7,
            "name": "Kurtis Weissnat",
            "username": "Elwyn.Skiles",
            "email": "Telly.Hoeger@billy.biz",
            "address": {"street": "Rex Trail", "city": "Howemouth", "zipcode": "58804-1099"},
            "phone": "210.067.6132"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user, User::new(7, "Kurtis Weissnat", "Telly.Hoeger@billy.biz", "Howemouth"));
        assert_eq!(user.city(), "Howemouth");
    }

    #[test]
    fn test_deserialize_requires_city() {
        let json = r#"{"id": 1, "name": "A", "email": "a@x.com", "address": {}}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
