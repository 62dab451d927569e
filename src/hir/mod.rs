//! High-level IR (HIR): name resolution over the schema AST.
//!
//! Resolution runs in three phases, each consuming the previous phase's
//! output by shared reference:
//!
//! ```text
//! SourceModel                 ← AST (from text or built in code)
//!     │
//!     ▼
//! SymbolTable::build          ← class namespace + per-class attribute namespaces
//!     │
//!     ▼
//! link_types                  ← attribute type name → ClassId (parallel per class)
//!     │
//!     ▼
//! PathResolver::resolve_all   ← ref path → matched attributes (parallel, memoized)
//!     │
//!     ▼
//! Model                       ← immutable, queried through Class / Attribute / Ref
//! ```
//!
//! ## Key Types
//!
//! - [`Model`] - the resolved model; build it with [`Model::from_ast`]
//! - [`LoadOptions`] - memoization, parallelism and cache sharding
//! - [`LoadError`] - the first failure of a load
//! - [`ClassId`], [`AttrId`], [`RefId`] - arena indices in declaration order

mod error;
mod ids;
mod link;
mod model;
mod options;
mod resolve;
mod symbols;

pub use error::{LoadError, NameKind};
pub use ids::{AttrId, ClassId, RefId, SuffixId};
pub use link::{TypeLinks, link_types};
pub use model::{Attribute, Class, Model, Ref};
pub use options::LoadOptions;
pub use resolve::{PathResolver, ResolutionCache, ResolveStats, Unresolved};
pub use symbols::{AttributeEntry, ClassEntry, RefEntry, SymbolTable};
