// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Binding a mask to an editable text surface
//!
//! The engine never registers listeners itself. Whatever owns the event loop
//! (a toolkit entry widget, a terminal line editor, a test) implements
//! [`MaskTarget`] and forwards edit events to a [`MaskController`]:
//!
//! ```
//! use input_mask::binding::{EditEvent, MaskController, TextField};
//! use input_mask::Mask;
//!
//! let mut controller = MaskController::new(Mask::new("00/00/0000")?);
//! let mut field = TextField::new();
//!
//! for c in "12345678".chars() {
//!     field.insert(c);
//!     controller.handle(EditEvent::Input, &mut field);
//! }
//!
//! assert_eq!(field.value(), "12/34/5678");
//! # Ok::<(), input_mask::MaskError>(())
//! ```

pub mod controller;
pub mod field;

pub use controller::{BindingOptions, EditHandler, MaskController};
pub use field::TextField;

/// An editable surface holding a value and a caret
pub trait MaskTarget {
    /// Current text
    fn value(&self) -> String;

    /// Replace the text
    fn set_value(&mut self, value: &str);

    /// Caret offset in chars, if the surface has one
    fn caret(&self) -> Option<usize>;

    /// Move the caret (offset in chars)
    fn set_caret(&mut self, caret: usize);
}

/// Edit events a controller reacts to
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditEvent {
    /// Fired on every keystroke
    Input,
    /// Fired when an edit is committed (focus loss, paste completion)
    Change,
}

#[cfg(test)]
mod tests;
