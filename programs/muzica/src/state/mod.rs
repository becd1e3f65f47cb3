pub mod track;
pub mod track_decoder;

pub use track::*;
pub use track_decoder::*;
