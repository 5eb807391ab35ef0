use smallvec::SmallVec;

/// One layer of wrapping around a base type.
///
/// A sequence of modifiers is always stored outer-to-inner. A non-null layer
/// has no modifier of its own; it is the absence of [`Modifier::Nullable`] at
/// that layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    ArrayOf,
    Nullable,
}

/// Few real-world types nest deeper than `[[T!]!]`, so four layers fit inline.
pub type Modifiers = SmallVec<[Modifier; 4]>;
