mod rule;
pub use rule::*;
mod subst;
pub use subst::*;
mod store;
pub use store::*;

mod execute;
pub use execute::*;
mod util;
pub(crate) use util::Progress;
pub mod verbs;
