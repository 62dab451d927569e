//! Arena identifiers for classes, attributes and refs.
//!
//! Every record lives in a `Vec` owned by the symbol table (and later the
//! model); links between records are these indices, never references, so the
//! cyclic attribute-type graph needs no shared ownership.

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        impl $name {
            pub(crate) fn new(index: usize) -> Self {
                Self(index as u32)
            }

            /// Position in declaration order across the whole model.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// A class, numbered in declaration order.
    ClassId
);

arena_id!(
    /// An attribute, numbered in declaration order over all classes.
    AttrId
);

arena_id!(
    /// A ref, numbered in declaration order over all classes.
    RefId
);

arena_id!(
    /// A distinct ref path suffix, interned by the symbol table.
    SuffixId
);

impl SuffixId {
    /// The empty suffix, after a path's last segment.
    pub(crate) const EMPTY: Self = Self(0);
}
