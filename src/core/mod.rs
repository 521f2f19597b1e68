pub mod space;
pub mod config;
pub mod storage;
pub mod events;

pub use self::space::Space;
pub use self::config::SpaceConfig;
pub use self::storage::BodyStorage;
pub use self::events::{EventQueue, TouchEvent, BodyEvent, BodyEventType};

slotmap::new_key_type! {
    /// Generation-checked handle to a body stored in a [`Space`]
    pub struct BodyHandle;
}
