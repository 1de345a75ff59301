use anyhow::Result;
use glam::{IVec3, Vec3};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;

use voxelfield::{
    apply_edit, BlockDatabase, ChunkLoader, EditKind, EngineConfig, MeshBuilder, TerrainGenerator,
    World,
};

/// Headless walk: stream terrain around a viewpoint marching east, poke a
/// place/remove pair into it, and report totals.
fn main() -> Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    info!(
        "seed {}, view radius {}, {} octaves",
        config.terrain.seed,
        config.streaming.view_radius,
        config.terrain.octaves.len()
    );

    let generator = TerrainGenerator::new(&config.terrain)?;
    let mesher = MeshBuilder::new(BlockDatabase::standard());
    let mut world = World::new();
    let mut loader = ChunkLoader::new(generator, &config.streaming);

    let mut viewpoint = Vec3::new(0.0, 40.0, 0.0);
    for tick in 0..400 {
        let loaded = loader.update(viewpoint, &mut world, &mesher);
        if loaded > 0 {
            info!("tick {tick}: +{loaded} chunks ({} total)", world.len());
        }
        viewpoint.x += 1.0;
    }

    let target = IVec3::new(8, 100, 8);
    apply_edit(&mut world, &mesher, target, EditKind::Place);
    info!("placed block at {target}: now {:?}", world.block_at(target));
    apply_edit(&mut world, &mesher, target, EditKind::Remove);
    info!("removed block at {target}: now {:?}", world.block_at(target));

    let vertices: usize = world
        .chunks()
        .filter_map(|chunk| chunk.mesh.as_ref())
        .map(|mesh| mesh.vertices.len())
        .sum();
    info!("done: {} chunks, {vertices} mesh vertices", world.len());
    Ok(())
}
