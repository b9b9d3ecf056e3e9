pub mod athlete;
pub mod belt;
pub mod category;
pub mod cedula;
pub mod claim;
pub mod event;
pub mod school;
pub mod user;

pub use athlete::Athlete;
pub use belt::Belt;
pub use category::Category;
pub use cedula::{CedulaParts, DocumentType};
pub use claim::{Claim, ClaimStatus, RepresentedType};
pub use event::{EventStatus, EventType, KarateEvent};
pub use school::{School, slugify};
pub use user::{Role, User};
