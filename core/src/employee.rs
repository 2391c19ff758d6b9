//! Employee records and role capabilities.

use crate::types::EmployeeId;
use serde::{Deserialize, Serialize};

/// Role capability tag.
///
/// The assigner consults only this tag; free-text job titles are parsed
/// once at the ingestion boundary via [`RoleTag::from_title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleTag {
    Staff,
    KeyHolder,
}

impl RoleTag {
    /// Parse a free-text job title. Titles containing both "key" and
    /// "holder" (any case) carry opening/closing responsibility.
    pub fn from_title(title: &str) -> RoleTag {
        let t = title.to_lowercase();
        if t.contains("key") && t.contains("holder") {
            RoleTag::KeyHolder
        } else {
            RoleTag::Staff
        }
    }

    /// Stable code used in the employees table.
    pub fn code(self) -> &'static str {
        match self {
            RoleTag::Staff => "staff",
            RoleTag::KeyHolder => "key_holder",
        }
    }

    pub fn from_code(code: &str) -> RoleTag {
        match code {
            "key_holder" => RoleTag::KeyHolder,
            _ => RoleTag::Staff,
        }
    }
}

/// One roster member. Immutable for the duration of a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: RoleTag,
    /// Floats between stores rather than being tied to one location;
    /// eligible only for the global-evening template.
    pub global_worker: bool,
    pub active: bool,
}

impl Employee {
    pub fn is_key_holder(&self) -> bool {
        self.role == RoleTag::KeyHolder
    }
}
