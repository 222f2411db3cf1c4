pub mod pair;
pub mod pair_authority;
pub mod receipt;

pub use pair::*;
pub use pair_authority::*;
pub use receipt::*;
