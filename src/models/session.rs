use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Leader,
    Member,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "leader" => Some(Self::Leader),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Leader => "leader",
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The acting user. Passed explicitly to every operation that needs to
/// know who is acting and what they may do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Leaders and admins may edit the roster, the schedule and attendance.
    pub fn can_manage(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Leader)
    }

    /// Returns `PermissionDenied` naming `action` when the session may not manage.
    pub fn require_manage(&self, action: &str) -> AppResult<()> {
        if self.can_manage() {
            Ok(())
        } else {
            Err(AppError::PermissionDenied {
                user: self.user_id.clone(),
                role: self.role.to_string(),
                action: action.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_cannot_manage() {
        let s = Session::new("rina", Role::Member);
        let err = s.require_manage("record attendance").unwrap_err();
        assert!(err.to_string().contains("rina (member) cannot record attendance"));
    }

    #[test]
    fn leaders_and_admins_can_manage() {
        assert!(Session::new("a", Role::Admin).can_manage());
        assert!(Session::new("l", Role::Leader).require_manage("x").is_ok());
    }

    #[test]
    fn role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("LEADER"), Some(Role::Leader));
        assert_eq!(Role::parse("guest"), None);
    }
}
