pub mod cli;
pub mod error;
pub mod form;
pub mod ids;
pub mod render;
pub mod session;
pub mod store;
pub mod types;
pub mod utils;

pub use error::{Field, ValidationError};
pub use form::FormValues;
pub use store::WorkoutStore;
pub use types::{Activity, Location, Workout, WorkoutKind};
