// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory surface that records every call.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Size;

use crate::{Animation, LayerId, Primitive, RenderSurface};

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum SurfaceCommand {
    /// [`RenderSurface::clear`].
    Clear,
    /// [`RenderSurface::set_content_size`].
    SetContentSize(Size),
    /// [`RenderSurface::draw`], with the id handed back to the caller.
    Draw {
        /// Id of the new layer.
        layer: LayerId,
        /// What was drawn.
        primitive: Primitive,
    },
    /// [`RenderSurface::animate`].
    Animate {
        /// Target layer.
        layer: LayerId,
        /// Requested transition.
        animation: Animation,
    },
}

/// A [`RenderSurface`] that keeps a log of the calls made against it.
///
/// Layer ids increase monotonically across clears, so an id from an earlier frame never aliases a
/// layer in the current one.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<SurfaceCommand>,
    content_size: Size,
    next_layer: u64,
}

impl RecordingSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command recorded so far.
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Drains the command log.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Commands issued since the most recent [`SurfaceCommand::Clear`].
    pub fn current_frame(&self) -> &[SurfaceCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, SurfaceCommand::Clear))
            .map_or(0, |i| i + 1);
        self.commands.get(start..).unwrap_or_default()
    }

    /// Primitives drawn in the current frame, in draw order.
    pub fn primitives(&self) -> impl Iterator<Item = (LayerId, &Primitive)> + '_ {
        self.current_frame().iter().filter_map(|c| match c {
            SurfaceCommand::Draw { layer, primitive } => Some((*layer, primitive)),
            _ => None,
        })
    }

    /// Animations requested in the current frame, in request order.
    pub fn animations(&self) -> impl Iterator<Item = (LayerId, &Animation)> + '_ {
        self.current_frame().iter().filter_map(|c| match c {
            SurfaceCommand::Animate { layer, animation } => Some((*layer, animation)),
            _ => None,
        })
    }

    /// Animations requested for one layer.
    pub fn animations_for(&self, layer: LayerId) -> impl Iterator<Item = &Animation> + '_ {
        self.animations()
            .filter(move |(id, _)| *id == layer)
            .map(|(_, animation)| animation)
    }

    /// The most recent content size.
    pub fn content_size(&self) -> Size {
        self.content_size
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(SurfaceCommand::Clear);
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.commands.push(SurfaceCommand::SetContentSize(size));
    }

    fn draw(&mut self, primitive: Primitive) -> LayerId {
        let layer = LayerId(self.next_layer);
        self.next_layer += 1;
        let command = SurfaceCommand::Draw { layer, primitive };
        self.commands.push(command);
        layer
    }

    fn animate(&mut self, layer: LayerId, animation: Animation) {
        let command = SurfaceCommand::Animate { layer, animation };
        self.commands.push(command);
    }
}
