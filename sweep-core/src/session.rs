use sweep_types::Pubkey;

/// The logged-in user, passed explicitly to every operation that acts on the
/// user's behalf.
///
/// Pages without a session render their logged-out state; nothing in this
/// crate reads ambient global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// The user's public key
    pub pubkey: Pubkey,
}

impl Session {
    /// A session for the given user
    pub fn new(pubkey: Pubkey) -> Session {
        Session { pubkey }
    }
}
