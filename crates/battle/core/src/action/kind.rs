use strum::Display;

/// The kind of action a battle entity can perform.
///
/// Marked `#[non_exhaustive]` so new kinds can be added without breaking
/// downstream matches; the execution worker keeps a logged fail-soft
/// wildcard arm for kinds it does not recognize.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Basic player attack.
    Attack,
    /// Reduce incoming damage (placeholder, no mitigation yet).
    Defend,
    /// Use a healing item on self.
    Item,
    /// Attempt to flee the battle (placeholder, no escape chance yet).
    Run,
    /// Enemy-specific spectral attack.
    Haunt,
}
