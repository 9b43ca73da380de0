//! Message template rendering for the dockhand CLI.
//!
//! Templates live in `dockhand-messages`; this crate fills their
//! `{placeholder}` slots. Use the [`msg!`] macro rather than the builder
//! directly.

pub mod builder;
pub mod macros;

pub use builder::MessageBuilder;
