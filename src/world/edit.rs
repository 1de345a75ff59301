use glam::IVec3;
use log::debug;

use crate::mesh::MeshBuilder;
use crate::world::block::BlockType;
use crate::world::chunk::CHUNK_HEIGHT;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::core::World;

/// Point-edit kinds delivered by the input collaborator, already resolved
/// to a target block coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Place,
    Remove,
}

/// Apply a single-block edit and rebuild the owning chunk's mesh. Edits
/// against unloaded chunks or outside the vertical range are silently
/// dropped. Returns the replaced block value when a cell was written.
///
/// Only the owning chunk is remeshed; a boundary edit can leave a stale
/// face on the neighbor until that neighbor rebuilds for its own reasons.
pub fn apply_edit(
    world: &mut World,
    mesher: &MeshBuilder,
    block: IVec3,
    kind: EditKind,
) -> Option<BlockType> {
    if block.y < 0 || block.y >= CHUNK_HEIGHT as i32 {
        return None;
    }
    let coord = ChunkCoord::containing_block(block);
    let Some(chunk) = world.get_mut(coord) else {
        debug!("edit at {block} dropped: chunk {coord:?} not loaded");
        return None;
    };

    let local = block - coord.block_origin();
    let value = match kind {
        EditKind::Place => BlockType::Wood,
        EditKind::Remove => BlockType::Air,
    };
    let previous = chunk.get_local(local);
    chunk.set_local(local, value);
    mesher.remesh(world, coord);
    Some(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::block_info::BlockDatabase;
    use crate::world::chunk::Chunk;

    fn setup() -> (World, MeshBuilder) {
        let mut world = World::new();
        world.insert(Chunk::new(ChunkCoord::new(0, 0))).unwrap();
        (world, MeshBuilder::new(BlockDatabase::standard()))
    }

    #[test]
    fn place_then_remove_restores_prior_value() {
        let (mut world, mesher) = setup();
        let target = IVec3::new(4, 20, 4);

        let before = world.block_at(target);
        assert_eq!(before, BlockType::Air);

        let prior = apply_edit(&mut world, &mesher, target, EditKind::Place);
        assert_eq!(prior, Some(BlockType::Air));
        assert_eq!(world.block_at(target), BlockType::Wood);

        let prior = apply_edit(&mut world, &mesher, target, EditKind::Remove);
        assert_eq!(prior, Some(BlockType::Wood));
        assert_eq!(world.block_at(target), before);
    }

    #[test]
    fn each_edit_rebuilds_the_owning_mesh_once() {
        let (mut world, mesher) = setup();
        let target = IVec3::new(4, 20, 4);

        apply_edit(&mut world, &mesher, target, EditKind::Place);
        let after_place = world
            .get(ChunkCoord::new(0, 0))
            .and_then(|c| c.mesh.as_ref())
            .expect("place edit must produce a mesh")
            .clone();
        assert_eq!(after_place.vertices.len(), 24);

        apply_edit(&mut world, &mesher, target, EditKind::Remove);
        let after_remove = world
            .get(ChunkCoord::new(0, 0))
            .and_then(|c| c.mesh.as_ref())
            .expect("remove edit must rebuild the mesh");
        assert!(after_remove.vertices.is_empty());
    }

    #[test]
    fn edit_on_unloaded_chunk_is_a_no_op() {
        let (mut world, mesher) = setup();
        assert_eq!(
            apply_edit(&mut world, &mesher, IVec3::new(200, 20, 0), EditKind::Place),
            None
        );
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn vertical_out_of_range_is_a_no_op() {
        let (mut world, mesher) = setup();
        assert_eq!(
            apply_edit(&mut world, &mesher, IVec3::new(4, -1, 4), EditKind::Place),
            None
        );
        assert_eq!(
            apply_edit(
                &mut world,
                &mesher,
                IVec3::new(4, CHUNK_HEIGHT as i32, 4),
                EditKind::Place
            ),
            None
        );
    }

    #[test]
    fn negative_coordinates_edit_the_owning_chunk() {
        let (mut world, mesher) = setup();
        world.insert(Chunk::new(ChunkCoord::new(-1, 0))).unwrap();

        let target = IVec3::new(-1, 20, 3);
        apply_edit(&mut world, &mesher, target, EditKind::Place);

        let chunk = world.get(ChunkCoord::new(-1, 0)).unwrap();
        assert_eq!(chunk.get(15, 20, 3), BlockType::Wood);
        assert_eq!(world.get(ChunkCoord::new(0, 0)).unwrap().get(0, 20, 3), BlockType::Air);
    }
}
