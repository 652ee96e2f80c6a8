//! Replay host: feeds recorded events through the input adapters and controls.

use crate::controls::{ClearButton, ColorControl, ControlError, ExportButton, SizeControl};
use crate::draw::{CairoSurface, Surface, SurfaceError};
use crate::export::{ExportError, ExportedImage};
use crate::input::{Disposition, DrawingSurface, SurfaceOrigin, ToolState};
use crate::script::{DeviceEvent, HostEvent, Script};
use log::{debug, info};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("event #{index}: {source}")]
    Control {
        index: usize,
        #[source]
        source: ControlError,
    },

    #[error("event #{index}: {source}")]
    Export {
        index: usize,
        #[source]
        source: ExportError,
    },
}

/// What the host observed while replaying a script.
#[derive(Debug, Default)]
pub struct ReplaySummary {
    /// Events dispatched
    pub events: usize,
    /// Events whose platform default was suppressed
    pub prevented_defaults: usize,
    /// Files written by export events, in order
    pub saved: Vec<PathBuf>,
    /// Most recent export
    pub last_export: Option<ExportedImage>,
}

/// Owns a canvas and routes host events to it.
pub struct Host<S: Surface = CairoSurface> {
    canvas: DrawingSurface<S>,
    origin: SurfaceOrigin,
    export_dir: PathBuf,
}

impl<S: Surface> Host<S> {
    /// Mounts a canvas of the given viewport size.
    pub fn mount(
        width: u32,
        height: u32,
        tools: ToolState,
        origin: SurfaceOrigin,
        export_dir: impl Into<PathBuf>,
    ) -> Result<Self, SurfaceError> {
        Ok(Self {
            canvas: DrawingSurface::initialize(width, height, tools)?,
            origin,
            export_dir: export_dir.into(),
        })
    }

    pub fn canvas(&self) -> &DrawingSurface<S> {
        &self.canvas
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Exports the canvas and writes `drawing.png` into the export directory.
    pub fn export_to_disk(&self) -> Result<(ExportedImage, PathBuf), ExportError> {
        let image = ExportButton::press(&self.canvas)?;
        let path = image.save_in(&self.export_dir)?;
        Ok((image, path))
    }

    /// Replays every event of `script` in order.
    ///
    /// The first rejected control value or failed export aborts the replay.
    pub fn replay(&mut self, script: &Script) -> Result<ReplaySummary, HostError> {
        let mut summary = ReplaySummary::default();

        for (index, event) in script.events.iter().enumerate() {
            summary.events += 1;
            match self.dispatch(event, index, &mut summary)? {
                Disposition::PreventDefault => summary.prevented_defaults += 1,
                Disposition::Default => {}
            }
        }

        info!(
            "Replayed {} event(s), {} export(s)",
            summary.events,
            summary.saved.len()
        );
        Ok(summary)
    }

    fn dispatch(
        &mut self,
        event: &HostEvent,
        index: usize,
        summary: &mut ReplaySummary,
    ) -> Result<Disposition, HostError> {
        if let Some(device) = event.as_device_event() {
            return Ok(match device {
                DeviceEvent::Pointer(pointer) => self.canvas.on_pointer_event(pointer),
                DeviceEvent::Touch(touch) => self.canvas.on_touch_event(&touch, self.origin),
            });
        }

        let control_err = |source| HostError::Control { index, source };
        match event {
            HostEvent::SetColor { value } => {
                ColorControl::apply(&mut self.canvas, value).map_err(control_err)?;
            }
            HostEvent::SetSize { value } => {
                SizeControl::apply(&mut self.canvas, *value).map_err(control_err)?;
            }
            HostEvent::Clear => ClearButton::press(&mut self.canvas),
            HostEvent::Export => {
                let (image, path) = self
                    .export_to_disk()
                    .map_err(|source| HostError::Export { index, source })?;
                summary.saved.push(path);
                summary.last_export = Some(image);
            }
            HostEvent::Submit => {
                debug!("Form submission suppressed");
                return Ok(crate::controls::on_form_submit());
            }
            _ => {}
        }

        Ok(Disposition::Default)
    }
}
