pub mod cache;
pub mod defaults;
pub mod editor;
pub mod sanitize;
pub mod types;

pub use cache::ProfileCollection;
pub use editor::{IdentifierError, OffsetRow, ProfileEditor};
pub use sanitize::sanitize_identifier;
pub use types::{
    FormFactor, ListedProfile, MachineType, Origin, ProbeDevice, ProfileList, ProfileRecord,
};
