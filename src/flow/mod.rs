//! Screen flow: the session, its declarative views and the intent reducer
//!
//! Nothing here depends on egui. The app shell renders [`View`] values and
//! feeds [`Intent`]s back into [`Session::apply`].

mod intent;
mod render;
mod session;
mod view;

pub use intent::{Intent, Outcome};
pub use render::render;
pub use session::Session;
pub use view::{Button, ButtonId, Element, View};
