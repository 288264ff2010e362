//! Food enquete backend library modules.
//!
//! The domain owns the survey record, its validation rules and the derived
//! display computations. Outbound adapters implement the persistence and
//! message catalogue ports, and the intake module wires them together for the
//! `enquete-intake` binary.

pub mod domain;
pub mod intake;
pub mod outbound;
