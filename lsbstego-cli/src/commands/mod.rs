pub mod hide;
pub mod inspect;
pub mod keygen;
pub mod reveal;
