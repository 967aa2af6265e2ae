use std::fmt;

/// Length of a hash-shaped resource id
const HASH_LENGTH: usize = 36;
/// Number of `-` separators in a hash-shaped resource id
const HASH_DELIMS: usize = 4;

/// Syntactic class of a user supplied identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Undefined,
    Hash,
    Name,
    Email,
}

impl IdKind {
    /// Offline classification, never touches the network.
    pub fn classify(id: &str) -> Self {
        if id.is_empty() {
            return IdKind::Undefined;
        }
        if id.contains('@') {
            return IdKind::Email;
        }
        if is_hash(id) {
            return IdKind::Hash;
        }
        IdKind::Name
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdKind::Undefined => "undefined",
            IdKind::Hash => "hash",
            IdKind::Name => "name",
            IdKind::Email => "email",
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_hash(id: &str) -> bool {
    id.len() == HASH_LENGTH && id.matches('-').count() == HASH_DELIMS
}
