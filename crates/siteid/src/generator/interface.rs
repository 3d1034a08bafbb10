use crate::Identifier;

/// A minimal interface for generating identifiers.
pub trait IdentifierGenerator {
    /// Returns a fresh identifier. Never fails.
    fn generate(&self) -> Identifier;

    /// Returns a fresh identifier as a plain string.
    fn generate_id(&self) -> String {
        self.generate().into_string()
    }
}
