// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Descriptor protocol.
//!
//! An attribute found in a type's table is one of three kinds, fixed when it
//! is stored:
//!
//! | Kind | Through an instance | Without instance |
//! |------|---------------------|------------------|
//! | `Plain` | the value itself | the value itself |
//! | `NonDataDescriptor` | result of binding | the descriptor |
//! | `DataDescriptor` | result of binding | the descriptor |
//!
//! Setter capability only matters for attribute assignment, which this crate
//! does not perform; on the read path both descriptor kinds bind the same way.

mod evaluator;
mod slot;

pub use evaluator::evaluate;
pub use slot::{AttributeSlot, Binder, SlotKind};
