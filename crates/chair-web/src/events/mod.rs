pub mod activity;
pub mod panel;
pub mod pointer;

pub use activity::{wire_activity_listeners, wire_teardown};
pub use panel::wire_panel_clicks;
pub use pointer::wire_orbit_controls;
