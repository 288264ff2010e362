//! Domain primitives and services.
//!
//! Purpose: Define the food enquete record, the ordered rule set that
//! validates it, and the pure display computations shared by record types.
//! Keep rule evaluation free of I/O; the service performs the single store
//! read the uniqueness rule needs and hands the result to the rules.
//!
//! Public surface:
//! - FoodEnquete (alias to `enquete::FoodEnquete`) — one survey response.
//! - Violations (alias to `validation::Violations`) — field-level failures.
//! - CommonDisplay (alias to `common_display::CommonDisplay`) — tax price
//!   and satisfaction label capability.
//! - EnqueteService (alias to `enquete_service::EnqueteService`) — validate
//!   before save orchestration over the persistence port.

pub mod common_display;
pub mod eligibility;
pub mod enquete;
pub mod enquete_service;
pub mod menu;
pub mod messages;
pub mod ports;
pub mod validation;

pub use self::common_display::{CommonDisplay, ScoreLabel, TAX_RATE, TaxRate, tax_included_price};
pub use self::eligibility::{ADULT_AGE, GIFT_ALCOHOL_ID, is_adult};
pub use self::enquete::{EnqueteId, EnqueteIdValidationError, FoodEnquete, StoredEnquete};
pub use self::enquete_service::{EnqueteService, EnqueteServiceError};
pub use self::validation::{Field, RuleContext, Violation, ViolationKind, Violations};
