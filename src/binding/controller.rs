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

//! Controller - Mediates between a Mask (model) and an editable surface (view)
//!
//! # Responsibilities
//!
//! - Re-mask the surface value on `Input` and, if enabled, `Change` events
//! - Write the formatted value and recomputed caret back to the surface
//! - Hand the formatted value to caller-supplied handlers instead, when given
//!
//! # Architecture
//!
//! The controller owns the [`Mask`] but never a widget. Surfaces are borrowed
//! per event through [`MaskTarget`], which keeps toolkit types out of the
//! masking logic.

use std::fmt;

use tracing::debug;

use crate::binding::{EditEvent, MaskTarget};
use crate::core::{Mask, MaskResult};

/// Callback receiving the surface and the freshly formatted value
///
/// When installed, the controller does not write the value back itself.
pub type EditHandler = Box<dyn FnMut(&mut dyn MaskTarget, &str)>;

/// Which events re-mask the surface, and who writes the result back
pub struct BindingOptions {
    /// Mask on every keystroke (default: true)
    pub mask_on_input: bool,
    /// Mask on committed edits (default: false)
    pub mask_on_change: bool,
    pub on_input: Option<EditHandler>,
    pub on_change: Option<EditHandler>,
}

impl BindingOptions {
    pub fn new() -> Self {
        Self {
            mask_on_input: true,
            mask_on_change: false,
            on_input: None,
            on_change: None,
        }
    }

    pub fn mask_on_input(mut self, enabled: bool) -> Self {
        self.mask_on_input = enabled;
        self
    }

    pub fn mask_on_change(mut self, enabled: bool) -> Self {
        self.mask_on_change = enabled;
        self
    }

    pub fn on_input(mut self, handler: impl FnMut(&mut dyn MaskTarget, &str) + 'static) -> Self {
        self.on_input = Some(Box::new(handler));
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(&mut dyn MaskTarget, &str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BindingOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingOptions")
            .field("mask_on_input", &self.mask_on_input)
            .field("mask_on_change", &self.mask_on_change)
            .field("on_input", &self.on_input.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Controller coordinating a mask and the surfaces it formats
#[derive(Debug)]
pub struct MaskController {
    mask: Mask,
    options: BindingOptions,
}

impl MaskController {
    /// Creates a controller with default binding options
    ///
    /// # Example
    ///
    /// ```
    /// use input_mask::binding::{EditEvent, MaskController, TextField};
    /// use input_mask::Mask;
    ///
    /// let mut controller = MaskController::new(Mask::new("(000) 000-0000")?);
    /// let mut field = TextField::with_value("5551234567");
    ///
    /// controller.handle(EditEvent::Input, &mut field);
    /// assert_eq!(field.value(), "(555) 123-4567");
    /// # Ok::<(), input_mask::MaskError>(())
    /// ```
    pub fn new(mask: Mask) -> Self {
        Self::with_options(mask, BindingOptions::new())
    }

    pub fn with_options(mask: Mask, options: BindingOptions) -> Self {
        Self { mask, options }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn mask_mut(&mut self) -> &mut Mask {
        &mut self.mask
    }

    pub fn options(&self) -> &BindingOptions {
        &self.options
    }

    /// Formats whatever the surface already holds
    ///
    /// Call once when the surface is first bound. The value is written back
    /// unconditionally and the caret is left alone.
    pub fn attach(&mut self, target: &mut dyn MaskTarget) -> MaskResult {
        let result = self.mask.mask_with_caret(&target.value(), None);
        target.set_value(&result.formatted);
        debug!(formatted = %result.formatted, "attached mask to surface");
        result
    }

    /// Reacts to an edit event on `target`
    ///
    /// # Returns
    ///
    /// * `Some(MaskResult)` - The event was masked
    /// * `None` - Masking is disabled for this event kind
    pub fn handle(&mut self, event: EditEvent, target: &mut dyn MaskTarget) -> Option<MaskResult> {
        let enabled = match event {
            EditEvent::Input => self.options.mask_on_input,
            EditEvent::Change => self.options.mask_on_change,
        };
        if !enabled {
            return None;
        }

        let raw = target.value();
        let result = self.mask.mask_with_caret(&raw, target.caret());

        let handler = match event {
            EditEvent::Input => self.options.on_input.as_mut(),
            EditEvent::Change => self.options.on_change.as_mut(),
        };

        match handler {
            Some(handler) => handler(target, &result.formatted),
            None => {
                target.set_value(&result.formatted);
                if event == EditEvent::Input {
                    target.set_caret(result.caret);
                }
            }
        }

        debug!(
            ?event,
            raw = %raw,
            formatted = %result.formatted,
            caret = result.caret,
            complete = result.complete,
            "handled edit event"
        );

        Some(result)
    }
}
