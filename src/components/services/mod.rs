//! Services carousel: autoplaying card track with a detail modal.

mod carousel;
mod detail_modal;

pub use carousel::ServicesSection;
pub use detail_modal::ServiceDetailModal;
