use log::trace;
use crate::session::enums::session_state::SessionState;

impl SessionState {
    pub fn advance(&mut self, next: SessionState)
    {
        trace!("[SESSION] {:?} -> {:?}", self, next);
        *self = next;
    }

    pub fn is_closed(&self) -> bool
    {
        *self == SessionState::Closed
    }
}
