use std::fmt;

/// Identifier assigned by the remote directory.
///
/// Listed users carry integer ids while freshly created ones come back with
/// string ids, so both shapes are kept as-is. Equality is shape-sensitive:
/// `Number(7)` and `Text("7")` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum UserId {
    Number(u64),
    Text(String),
}

impl UserId {
    /// Path segment used for id-scoped endpoints.
    pub fn as_path_segment(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        UserId::Number(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        UserId::Text(id.to_string())
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        UserId::Text(id)
    }
}
