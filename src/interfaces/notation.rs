// ============================================================================
// Notation Interface
// Fixed-grammar textual forms consumed by rendering collaborators
// ============================================================================

/// Serializations every numeric type exposes next to `Display`.
pub trait Notation {
    /// LaTeX source for the value.
    fn to_latex(&self) -> String;

    /// Presentation MathML fragment (without the `<math>` wrapper).
    fn to_mathml(&self) -> String;

    /// Content MathML fragment (without the `<math>` wrapper).
    fn to_content_mathml(&self) -> String;
}
