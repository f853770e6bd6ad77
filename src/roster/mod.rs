// Roster transform layer: pure functions over the immutable player snapshot.

pub mod squads;
pub mod summary;
pub mod view;
