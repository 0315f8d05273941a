// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host rendering collaborator.

use kurbo::Size;

use crate::{Animation, Primitive};

/// Handle to a drawn primitive, valid until the next [`RenderSurface::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u64);

/// A drawing surface supplied by the host environment.
///
/// Charts redraw from scratch on every update: one `clear`, one `set_content_size`, then a
/// `draw` per primitive, each optionally followed by `animate` calls for the returned layer.
/// Surfaces play animations on their own clock; charts never wait for or cancel them.
pub trait RenderSurface {
    /// Removes every layer drawn so far.
    fn clear(&mut self);

    /// Resizes the scrollable content area.
    fn set_content_size(&mut self, size: Size);

    /// Adds a layer showing `primitive` at its final geometry.
    fn draw(&mut self, primitive: Primitive) -> LayerId;

    /// Starts a transition on a layer returned by [`Self::draw`].
    fn animate(&mut self, layer: LayerId, animation: Animation);
}
