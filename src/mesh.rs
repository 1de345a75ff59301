//! Face-culled chunk meshing: every solid cell emits a quad for each of its
//! six sides that borders air, and nothing else.

use glam::{IVec3, Vec2, Vec3};

use crate::world::block::{BlockFace, BlockType};
use crate::world::block_info::BlockDatabase;
use crate::world::chunk::{Chunk, BLOCK_SCALE, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::core::World;

/// Pixel width of the square texture atlas UVs are expressed against.
pub const ATLAS_SIZE: f32 = 256.0;

/// Atlas tile used when a block has no database entry.
const MISSING_TEXTURE_PX: Vec2 = Vec2::new(160.0, 240.0);

/// Transient render buffers for one chunk: positions, one UV per vertex and
/// triangle indices. Handed to the render collaborator whole; bounds,
/// normals and collision shapes are recomputed on that side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChunkMesh {
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Two triangles over the four most recently appended vertices. The
    /// second triangle reuses n-2 as its final corner; that asymmetry is
    /// what keeps both halves of the quad wound the same way.
    fn push_quad_indices(&mut self) {
        let n = self.vertices.len() as u32;
        self.indices
            .extend_from_slice(&[n - 4, n - 3, n - 2, n - 3, n - 1, n - 2]);
    }
}

/// Builds chunk meshes against a block metadata database.
pub struct MeshBuilder {
    database: BlockDatabase,
}

impl MeshBuilder {
    pub fn new(database: BlockDatabase) -> Self {
        Self { database }
    }

    pub fn database(&self) -> &BlockDatabase {
        &self.database
    }

    /// Build a fresh mesh for `chunk`. Neighbor chunks are consulted
    /// through `world`, so seam faces between loaded chunks are culled
    /// while faces against the unloaded frontier stay visible.
    pub fn build(&self, chunk: &Chunk, world: &World) -> ChunkMesh {
        let mut mesh = ChunkMesh::new();
        self.build_into(&mut mesh, chunk, world);
        mesh
    }

    /// Rebuild into an existing buffer. The buffer is cleared first: a
    /// rebuild replaces the previous geometry entirely, it never appends.
    pub fn build_into(&self, mesh: &mut ChunkMesh, chunk: &Chunk, world: &World) {
        mesh.clear();
        for x in 0..CHUNK_WIDTH {
            for y in 0..CHUNK_HEIGHT {
                for z in 0..CHUNK_WIDTH {
                    let block = chunk.get(x, y, z);
                    if block.is_air() {
                        continue;
                    }
                    let position = IVec3::new(x as i32, y as i32, z as i32);
                    for face in BlockFace::ALL {
                        if world
                            .resolve_block(chunk, position + face.neighbor_offset())
                            .is_air()
                        {
                            emit_face(mesh, face, position);
                            self.push_face_uvs(mesh, block, face);
                        }
                    }
                }
            }
        }
    }

    /// Rebuild the stored mesh of a loaded chunk in place. No-op when the
    /// coordinate is not loaded.
    pub fn remesh(&self, world: &mut World, coord: ChunkCoord) {
        let Some(chunk) = world.get_mut(coord) else {
            return;
        };
        let mut mesh = chunk.mesh.take().unwrap_or_default();
        if let Some(chunk) = world.get(coord) {
            self.build_into(&mut mesh, chunk, world);
        }
        if let Some(chunk) = world.get_mut(coord) {
            chunk.mesh = Some(mesh);
        }
    }

    fn push_face_uvs(&self, mesh: &mut ChunkMesh, block: BlockType, face: BlockFace) {
        let pixel = match self.database.get(block) {
            Some(info) => info.face_offsets.pixel_offset(face),
            None => MISSING_TEXTURE_PX,
        };
        let uv = pixel / ATLAS_SIZE;
        for _ in 0..4 {
            mesh.uvs.push(uv);
        }
    }
}

/// Quad corners per face, in the winding order the index pattern expects.
fn emit_face(mesh: &mut ChunkMesh, face: BlockFace, position: IVec3) {
    let corners: [Vec3; 4] = match face {
        BlockFace::Right => [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ],
        BlockFace::Left => [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
        ],
        BlockFace::Front => [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ],
        BlockFace::Back => [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ],
        BlockFace::Top => [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        ],
        BlockFace::Bottom => [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ],
    };

    let base = position.as_vec3();
    for corner in corners {
        mesh.vertices.push((corner + base) * BLOCK_SCALE);
    }
    mesh.push_quad_indices();
}
