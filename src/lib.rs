//! Word-search puzzle engine: grid generation, drag-selection tracking and
//! round scoring, independent of any rendering surface.

mod common;
mod config;
mod direction;
mod grid;
mod logging;
mod matcher;
mod placer;
mod selection;
mod selector;
mod session;
mod settings;
mod ui;
mod wordlist;

pub use common::*;
pub use config::*;
pub use direction::*;
pub use grid::*;
pub use logging::init_logging;
pub use matcher::*;
pub use placer::*;
pub use selection::*;
pub use selector::*;
pub use session::*;
pub use settings::*;
pub use ui::*;
pub use wordlist::*;
