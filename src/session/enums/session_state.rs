#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitOperation,
    AwaitUsername,
    /// Reading operation-specific arguments, then running the registry transaction.
    Dispatch,
    Responding,
    Closed,
}
