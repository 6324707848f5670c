/// Unique identifier of an atom, as written in column 0 of the `Atoms` section.
pub type AtomId = u32;

/// Chemical role of an atom, as written in column 2 of the `Atoms` section.
pub type AtomType = u32;

/// Type tag shared by interactions with the same expected parameters.
pub type InteractionTypeId = u32;
