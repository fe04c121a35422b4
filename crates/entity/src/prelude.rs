pub use super::song::Entity as Song;
pub use super::verse::Entity as Verse;
