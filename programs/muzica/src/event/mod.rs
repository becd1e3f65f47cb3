pub mod track;
pub mod escrow;
pub mod stem;

pub use track::*;
pub use escrow::*;
pub use stem::*;
