pub mod prelude;

pub mod song;
pub mod verse;
