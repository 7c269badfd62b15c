/// An encoded asymmetric key pair, held by node identity management.
///
/// The gateway treats both halves as opaque blobs: it never parses,
/// validates, or uses them for signing or encryption, only carries them on
/// behalf of the component that minted them. Immutable after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedKeyPair {
    private_key: String,
    public_key: String,
}

impl EncodedKeyPair {
    pub fn new(private_key: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            private_key: private_key.into(),
            public_key: public_key.into(),
        }
    }

    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }
}

// Keep the private half out of debug output and logs.
impl std::fmt::Debug for EncodedKeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedKeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}
