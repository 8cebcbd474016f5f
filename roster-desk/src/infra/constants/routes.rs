//! Endpoints of the remote users API, relative to the base URL.

/// Public demo service the client talks to unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://reqres.in/api";

pub const USERS: &str = "/users";
pub const USER_ITEM: &str = "/users/{id}";

/// The single result page the client ever lists.
pub const LIST_PAGE: u32 = 2;

pub fn replace_param(route: &str, param: &str, value: impl AsRef<str>) -> String {
    route.replace(param, value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_item_path() {
        assert_eq!(replace_param(USER_ITEM, "{id}", "7"), "/users/7");
    }
}
