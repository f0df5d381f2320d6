use crate::registry::structs::connected_user::ConnectedUser;

/// What a session writes back before closing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Status 0 with no payload.
    Ok,
    /// Status 0, then the connected users (LIST USERS).
    Users(Vec<ConnectedUser>),
    /// Status 0, then the target's filenames (LIST CONTENT).
    Content(Vec<String>),
    /// Operation-specific non-zero status with no payload.
    Failure(u8),
}
