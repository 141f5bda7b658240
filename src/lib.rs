//! Room codes and geographic distance helpers for location-based rooms.
//!
//! - [`util::geo`]: haversine distance between coordinates.
//! - [`util::id`]: short room codes from an injectable random source.
//! - [`room::manager`]: optional registry that keeps live codes unique.
//! - [`config`]: hosted backend configuration as a typed state.
//! - [`telemetry`]: tracing subscriber setup.

pub mod config;
pub mod room;
pub mod telemetry;
pub mod util;

pub use config::{BackendConfig, BackendCredentials, ConfigError};
pub use room::manager::{Room, RoomError, RoomManager};
pub use util::geo::{calculate_distance, GeoPoint, EARTH_RADIUS_KM};
pub use util::id::{
    generate_room_id, generate_room_id_with, is_room_id, RngSource, SequenceSource, SymbolSource,
};
