// Service module exports
// Month construction, event classification, lane layout, geometry and the
// calendar facade that drives them against a presentation surface.

pub mod calendar;
pub mod classifier;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod settings;
pub mod skeleton;
pub mod surface;
