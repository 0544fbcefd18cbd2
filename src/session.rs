//! The persisted session record left behind by the login form.

use crate::{
    options::SessionOptions,
    storage::{SessionStorage, StorageError},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Category of the logged-in user, as written by the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    #[serde(rename = "anonymous", alias = "student")]
    Student,
}

const MENTOR_LABEL: &str = "mentor";
const STUDENT_LABEL: &str = "student";
const ANONYMOUS_LABEL: &str = "anonymous";

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Mentor => write!(f, "{MENTOR_LABEL}"),
            Role::Student => write!(f, "{ANONYMOUS_LABEL}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role label: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            MENTOR_LABEL => Ok(Role::Mentor),
            ANONYMOUS_LABEL | STUDENT_LABEL => Ok(Role::Student),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// Identity and role labels stored under two independent keys.
///
/// Nothing keeps the two fields consistent: either may be present without the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "username", skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(rename = "userType", skip_serializing_if = "Option::is_none")]
    pub role_label: Option<String>,
}

impl SessionRecord {
    pub fn new(identity: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            identity: Some(identity.into()),
            role_label: role.map(|role| role.to_string()),
        }
    }

    /// Reads the record from `storage`.
    ///
    /// A key that cannot be read is treated as absent, and so is an empty identity label.
    pub fn load<S: SessionStorage>(storage: &S, options: &SessionOptions) -> Self {
        let identity = read_key(storage, &options.identity_key).filter(|value| !value.is_empty());
        let role_label = read_key(storage, &options.role_key);
        Self {
            identity,
            role_label,
        }
    }

    /// Writes the present fields to `storage`. Absent fields are left untouched.
    pub fn save<S: SessionStorage>(
        &self,
        storage: &mut S,
        options: &SessionOptions,
    ) -> Result<(), StorageError> {
        if let Some(identity) = &self.identity {
            storage.set(&options.identity_key, identity)?;
        }
        if let Some(role_label) = &self.role_label {
            storage.set(&options.role_key, role_label)?;
        }
        Ok(())
    }

    /// Removes both keys from `storage`, whether or not they exist.
    ///
    /// Failures are logged and do not stop the remaining removal.
    pub fn clear<S: SessionStorage>(storage: &mut S, options: &SessionOptions) {
        for key in [&options.identity_key, &options.role_key] {
            if let Err(_e) = storage.remove(key) {
                #[cfg(feature = "tracing")]
                warn!("Could not remove {key} from session storage: {_e}");
            }
        }
    }

    /// Whether an identity label is present.
    pub fn is_logged_in(&self) -> bool {
        self.identity.is_some()
    }

    /// The parsed role, or `None` when the label is absent or not recognised.
    pub fn role(&self) -> Option<Role> {
        self.role_label.as_deref()?.parse().ok()
    }
}

fn read_key<S: SessionStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            debug!("Treating unreadable key {key} as absent: {_e}");
            None
        }
    }
}
