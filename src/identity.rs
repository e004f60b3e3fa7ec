//! Owner and group name resolution

use std::collections::HashMap;
use std::sync::Mutex;

/// Maps numeric owner/group ids to names. Lookups may fail.
pub trait IdentityResolver: Sync {
    fn user_name(&self, uid: u32) -> Option<String>;
    fn group_name(&self, gid: u32) -> Option<String>;

    /// `owner:group`, substituting the numeric id for any name that cannot
    /// be resolved.
    fn owner_group(&self, uid: u32, gid: u32) -> String {
        let user = self.user_name(uid).unwrap_or_else(|| uid.to_string());
        let group = self.group_name(gid).unwrap_or_else(|| gid.to_string());
        format!("{}:{}", user, group)
    }
}

/// Resolver backed by the system user and group databases.
///
/// Results, including misses, are cached per id.
#[derive(Debug, Default)]
pub struct SystemResolver {
    users: Mutex<HashMap<u32, Option<String>>>,
    groups: Mutex<HashMap<u32, Option<String>>>,
}

impl SystemResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityResolver for SystemResolver {
    fn user_name(&self, uid: u32) -> Option<String> {
        cached(&self.users, uid, || {
            uzers::get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
        })
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        cached(&self.groups, gid, || {
            uzers::get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
        })
    }
}

fn cached(
    cache: &Mutex<HashMap<u32, Option<String>>>,
    id: u32,
    lookup: impl FnOnce() -> Option<String>,
) -> Option<String> {
    // Poisoning leaves the map intact
    let mut map = cache.lock().unwrap_or_else(|e| e.into_inner());
    map.entry(id).or_insert_with(lookup).clone()
}

/// Resolver that never resolves anything; every id is shown numerically.
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericResolver;

impl IdentityResolver for NumericResolver {
    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}
