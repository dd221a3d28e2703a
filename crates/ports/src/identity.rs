// crates/ports/src/identity.rs

/// Maps numeric owner and group ids to display names.
///
/// Implementations fall back to the decimal id when no name is known.
pub trait IdentityResolver {
    fn user_name(&self, uid: u32) -> String;
    fn group_name(&self, gid: u32) -> String;
}
