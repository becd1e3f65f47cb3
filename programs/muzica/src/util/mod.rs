pub mod constants;
pub mod pda;
pub mod royalty_math;
pub mod token_helpers;

pub use constants::*;
pub use pda::*;
pub use royalty_math::*;
pub use token_helpers::*;
