/// A request whose tokens have all been read from the stream.
///
/// `username` is always the caller's own identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Register { username: String },
    Unregister { username: String },
    /// `port` is kept as received; it is parsed at dispatch time.
    Connect { username: String, port: String },
    Disconnect { username: String },
    Publish { username: String, filename: String, description: String },
    Delete { username: String, filename: String },
    ListUsers { username: String },
    ListContent { username: String, target: String },
}
