//! Edit session
//!
//! Owns one working clip and the current edit parameters, standing in for
//! the pile of mutable editor fields a host UI would otherwise thread
//! through every call. The session is a plain value; the host hands it
//! around explicitly and the core never holds a reference to host-owned
//! assets.
//!
//! Destructive operations (normalize, reverse, crush) rewrite the working
//! clip in place, mirroring how a sample editor commits them before the
//! next preview. Rendering never touches the working clip.

use crate::engine::clip::SampleClip;
use crate::engine::ops;
use crate::engine::render::{render, EditParams};
use crate::engine::wav;
use crate::error::Result;

/// One clip being edited, plus its pending parameters
#[derive(Debug, Clone)]
pub struct EditSession {
    clip: SampleClip,
    params: EditParams,
}

impl EditSession {
    /// Start a session over a clip with default parameters
    pub fn new(clip: SampleClip) -> Self {
        Self {
            clip,
            params: EditParams::default(),
        }
    }

    /// The working clip
    pub fn clip(&self) -> &SampleClip {
        &self.clip
    }

    /// Current edit parameters
    pub fn params(&self) -> &EditParams {
        &self.params
    }

    /// Mutable access to the edit parameters
    pub fn params_mut(&mut self) -> &mut EditParams {
        &mut self.params
    }

    /// Restore default parameters, keeping the working clip
    pub fn reset_params(&mut self) {
        self.params = EditParams::default();
    }

    /// Render the working clip under the current parameters
    pub fn render(&self) -> Result<SampleClip> {
        render(&self.clip, &self.params)
    }

    /// Render and encode to a WAV byte stream
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(wav::encode(&self.render()?))
    }

    /// Peak-normalize the working clip
    ///
    /// The volume parameter snaps back to 1: the rescale has absorbed
    /// whatever gain was dialed in.
    pub fn normalize(&mut self) {
        self.clip = ops::normalize(&self.clip);
        self.params.volume = 1.0;
    }

    /// Reverse the working clip's frame order
    pub fn reverse(&mut self) {
        self.clip = ops::reverse(&self.clip);
    }

    /// Crush the working clip to the given bit depth
    pub fn crush(&mut self, bit_depth: u32) -> Result<()> {
        self.clip = ops::crush(&self.clip, bit_depth)?;
        Ok(())
    }
}
