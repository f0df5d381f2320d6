use std::fmt;
use std::str::FromStr;
use crate::registry::enums::registry_error::RegistryError;
use crate::session::enums::dispatch_error::DispatchError;
use crate::session::enums::operation::Operation;
use crate::session::enums::session_error::SessionError;

pub const STATUS_OK: u8 = 0;

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Register,
        Operation::Unregister,
        Operation::Connect,
        Operation::Disconnect,
        Operation::Publish,
        Operation::Delete,
        Operation::ListUsers,
        Operation::ListContent,
    ];

    pub fn wire_name(&self) -> &'static str
    {
        match self {
            Operation::Register => "REGISTER",
            Operation::Unregister => "UNREGISTER",
            Operation::Connect => "CONNECT",
            Operation::Disconnect => "DISCONNECT",
            Operation::Publish => "PUBLISH",
            Operation::Delete => "DELETE",
            Operation::ListUsers => "LIST USERS",
            Operation::ListContent => "LIST CONTENT",
        }
    }

    /// The catch-all failure status of this operation.
    pub fn generic_error_code(&self) -> u8
    {
        match self {
            Operation::Register | Operation::Unregister => 2,
            Operation::Connect | Operation::Disconnect | Operation::Delete | Operation::ListUsers => 3,
            Operation::Publish | Operation::ListContent => 4,
        }
    }

    /// Maps a failure to the status byte this operation uses for it.
    ///
    /// The same number means different things on different operations:
    /// 2 is "already connected" for CONNECT but "not connected" for DISCONNECT.
    /// A missing file on DELETE shares the generic code 3 ("content not published").
    pub fn status_code(&self, error: &DispatchError) -> u8
    {
        let DispatchError::Registry(error) = error else {
            return self.generic_error_code();
        };
        match (self, error) {
            (Operation::Register, RegistryError::UserAlreadyExists(_)) => 1,
            (Operation::Register, _) => self.generic_error_code(),
            (_, RegistryError::UserNotFound(_)) => 1,
            (Operation::Connect, RegistryError::AlreadyConnected(_)) => 2,
            (
                Operation::Disconnect | Operation::Publish | Operation::Delete | Operation::ListUsers | Operation::ListContent,
                RegistryError::NotConnected(_),
            ) => 2,
            (Operation::Publish, RegistryError::FileAlreadyExists(_)) => 3,
            (Operation::ListContent, RegistryError::RemoteUserNotFound(_)) => 3,
            _ => self.generic_error_code(),
        }
    }
}

impl FromStr for Operation {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.wire_name() == s)
            .ok_or_else(|| SessionError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
