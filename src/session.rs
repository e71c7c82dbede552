// src/session.rs

//! Console login.
//!
//! Role resolution only: passwords are compared as plain strings. The
//! dispatch engine itself never authenticates anyone.

use crate::config::AccessSection;
use crate::engine::DispatchEngine;
use crate::registry::{Collaborator, Desk};
use crate::types::{CollaboratorId, Profile};

/// A logged-in console user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Administrator,
    Panel,
    Attendant {
        id: CollaboratorId,
        /// `"<first> <last>"`, matched against desk attendants.
        display_name: String,
    },
}

impl Session {
    pub fn profile(&self) -> Profile {
        match self {
            Session::Administrator => Profile::Administrator,
            Session::Panel => Profile::Panel,
            Session::Attendant { .. } => Profile::Attendant,
        }
    }

    /// Human-readable name for prompts and notices.
    pub fn display_name(&self) -> &str {
        match self {
            Session::Administrator => "Admin",
            Session::Panel => "Painel",
            Session::Attendant { display_name, .. } => display_name,
        }
    }

    /// The desk staffed by this attendant, if any.
    ///
    /// Only attendant sessions have a desk; the first desk whose attendant
    /// name matches wins.
    pub fn desk<'a>(&self, engine: &'a DispatchEngine) -> Option<&'a Desk> {
        match self {
            Session::Attendant { display_name, .. } => engine
                .desks()
                .iter()
                .find(|desk| &desk.attendant == display_name),
            _ => None,
        }
    }
}

/// Resolve `user`/`password` to a session.
///
/// The built-in admin and panel accounts are checked first. Otherwise the
/// credentials must match a collaborator's registration and password, and
/// that collaborator must have the attendant profile.
pub fn authenticate(
    access: &AccessSection,
    collaborators: &[Collaborator],
    user: &str,
    password: &str,
) -> Option<Session> {
    if user == access.admin_user && password == access.admin_password {
        return Some(Session::Administrator);
    }
    if user == access.panel_user && password == access.panel_password {
        return Some(Session::Panel);
    }

    collaborators
        .iter()
        .find(|c| {
            c.registration == user
                && c.password.as_deref() == Some(password)
                && c.profile == Profile::Attendant
        })
        .map(|c| Session::Attendant {
            id: c.id,
            display_name: c.full_name(),
        })
}
