//! Page model, input dispatch and the view controller.

mod controller;
mod dispatch;
mod state;

pub use controller::{App, Flow};
pub use dispatch::{decode, Action};
pub use state::{Page, ViewState};
