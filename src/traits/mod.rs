// Traits module
//
// Seams towards the collaborators around a metric instance: the poller that
// reads raw values from a device, and the layer that stores or routes
// cooked values.

pub mod collaborators;

pub use collaborators::{CookedSink, SampleSource};
