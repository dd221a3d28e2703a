// crates/infra/src/identity.rs
use std::{cell::RefCell, collections::HashMap};

use file_lister_ports::identity::IdentityResolver;
use log::debug;

/// Looks names up in the system user and group databases, once per id.
#[derive(Debug, Default)]
pub struct SystemIdentityResolver {
    users: RefCell<HashMap<u32, String>>,
    groups: RefCell<HashMap<u32, String>>,
}

impl SystemIdentityResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityResolver for SystemIdentityResolver {
    fn user_name(&self, uid: u32) -> String {
        self.users
            .borrow_mut()
            .entry(uid)
            .or_insert_with(|| lookup_user(uid).unwrap_or_else(|| uid.to_string()))
            .clone()
    }

    fn group_name(&self, gid: u32) -> String {
        self.groups
            .borrow_mut()
            .entry(gid)
            .or_insert_with(|| lookup_group(gid).unwrap_or_else(|| gid.to_string()))
            .clone()
    }
}

#[cfg(unix)]
fn lookup_user(uid: u32) -> Option<String> {
    use nix::unistd::{Uid, User};

    match User::from_uid(Uid::from_raw(uid)) {
        Ok(user) => user.map(|u| u.name),
        Err(err) => {
            debug!("user lookup for {uid} failed: {err}");
            None
        }
    }
}

#[cfg(unix)]
fn lookup_group(gid: u32) -> Option<String> {
    use nix::unistd::{Gid, Group};

    match Group::from_gid(Gid::from_raw(gid)) {
        Ok(group) => group.map(|g| g.name),
        Err(err) => {
            debug!("group lookup for {gid} failed: {err}");
            None
        }
    }
}

#[cfg(not(unix))]
fn lookup_user(uid: u32) -> Option<String> {
    debug!("no user database on this platform, showing {uid}");
    None
}

#[cfg(not(unix))]
fn lookup_group(gid: u32) -> Option<String> {
    debug!("no group database on this platform, showing {gid}");
    None
}
