use std::fmt::{self, Debug, Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque 128-bit identifier for a font inside a single [`Cache`](crate::Cache).
///
/// IDs are stable for the lifetime of the cache that produced them, but two
/// builds of a cache (even from identical sources) are not guaranteed to
/// assign the same ids to the same fonts: identity tracks the build, not the
/// font's content. Rendered as two lowercase hex halves.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontId(u64, u64);

impl FontId {
    /// Generates a fresh, process-wide unique id.
    ///
    /// Only uniqueness within a cache build is required, so a monotonic
    /// counter combined with a per-process random salt is sufficient; we
    /// don't need true randomness or cryptographic strength.
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        static SALT: AtomicU64 = AtomicU64::new(0);

        let salt = SALT.load(Ordering::Relaxed);
        let salt = if salt == 0 {
            let fresh = process_salt();
            SALT.store(fresh, Ordering::Relaxed);
            fresh
        } else {
            salt
        };

        let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(salt, counter)
    }

    /// The two 64-bit halves, high first.
    pub fn as_parts(&self) -> (u64, u64) {
        (self.0, self.1)
    }
}

fn process_salt() -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};
    RandomState::new().build_hasher().finish() | 1
}

impl Display for FontId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}-{:016x}", self.0, self.1)
    }
}

impl Debug for FontId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FontId({self})")
    }
}
