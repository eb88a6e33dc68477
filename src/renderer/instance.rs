//! GPU instance layout for sprite quads

use bytemuck::{Pod, Zeroable};

use super::sprite::DrawCommand;

/// One sprite quad, ready for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Degrees clockwise
    pub rotation: f32,
    /// Texture slot, see [`super::SpriteId::index`]
    pub sprite: u32,
    pub frame: u32,
}

impl From<&DrawCommand> for SpriteInstance {
    fn from(cmd: &DrawCommand) -> Self {
        Self {
            position: cmd.position.to_array(),
            size: cmd.size.to_array(),
            rotation: cmd.rotation,
            sprite: cmd.sprite.index(),
            frame: u32::from(cmd.frame),
        }
    }
}

/// Raw bytes for upload
pub fn instance_bytes(instances: &[SpriteInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
