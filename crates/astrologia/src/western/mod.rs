pub mod compatibility;
pub mod groups;
pub mod resolver;
pub mod signs;

pub use compatibility::{compatibility, compatibility_between, Compatibility, CompatibilityTier};
pub use groups::{Element, ElementInfo, Modality, ModalityInfo, ELEMENTS, MODALITIES};
pub use resolver::{resolve_sign, resolve_sign_from_month_day};
pub use signs::{lookup_sign_by_name, Sign, SignInfo, ZODIAC};
