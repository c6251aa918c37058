pub mod amount;
pub mod engine;
pub mod fees;
pub mod model;
pub mod rates;
pub mod script;
pub mod session;

pub use amount::Amount;
pub use engine::{Engine, Snapshot};
pub use model::{Asset, Currency, Event, Field, Mode};
