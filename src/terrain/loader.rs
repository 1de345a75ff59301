use std::collections::VecDeque;

use glam::Vec3;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::StreamingConfig;
use crate::mesh::MeshBuilder;
use crate::terrain::generator::TerrainGenerator;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::core::World;

/// Streams chunks in around a moving viewpoint. Pending loads sit in an
/// explicit queue, so pacing is a configuration knob rather than a
/// suspension point: each tick works off up to `loads_per_tick` entries.
pub struct ChunkLoader {
    generator: TerrainGenerator,
    view_radius: i32,
    loads_per_tick: Option<usize>,
    current_chunk: Option<ChunkCoord>,
    pending: VecDeque<ChunkCoord>,
}

impl ChunkLoader {
    pub fn new(generator: TerrainGenerator, config: &StreamingConfig) -> Self {
        Self {
            generator,
            view_radius: config.view_radius,
            loads_per_tick: config.loads_per_tick,
            current_chunk: None,
            pending: VecDeque::new(),
        }
    }

    pub fn current_chunk(&self) -> Option<ChunkCoord> {
        self.current_chunk
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Per-tick entry point: re-derive the viewpoint's chunk, queue a new
    /// sweep when it changed, then work off the load budget. Returns the
    /// number of chunks loaded this tick.
    pub fn update(&mut self, viewpoint: Vec3, world: &mut World, mesher: &MeshBuilder) -> usize {
        let coord = ChunkCoord::from_world(viewpoint);
        if self.current_chunk != Some(coord) {
            self.current_chunk = Some(coord);
            self.queue_sweep(coord, world);
        }
        self.step(world, mesher)
    }

    /// Queue every missing coordinate in the half-open square window
    /// around `center`. A new sweep replaces whatever the previous one
    /// left queued; the loaded check in `step` keeps stale entries
    /// harmless either way.
    fn queue_sweep(&mut self, center: ChunkCoord, world: &World) {
        self.pending.clear();
        for x in center.x() - self.view_radius..center.x() + self.view_radius {
            for z in center.z() - self.view_radius..center.z() + self.view_radius {
                let coord = ChunkCoord::new(x, z);
                if !world.contains(coord) {
                    self.pending.push_back(coord);
                }
            }
        }
        info!(
            "sweep around ({}, {}): {} chunks queued",
            center.x(),
            center.z(),
            self.pending.len()
        );
    }

    /// Pop up to the configured budget of pending coordinates and load
    /// them. Block grids for the batch are generated on rayon workers;
    /// insertion and meshing stay on the calling thread.
    fn step(&mut self, world: &mut World, mesher: &MeshBuilder) -> usize {
        let budget = self.loads_per_tick.unwrap_or(usize::MAX);
        let mut batch = Vec::new();
        while batch.len() < budget {
            let Some(coord) = self.pending.pop_front() else {
                break;
            };
            if !world.contains(coord) {
                batch.push(coord);
            }
        }
        if batch.is_empty() {
            return 0;
        }

        let generated: Vec<_> = batch
            .par_iter()
            .map(|&coord| self.generator.generate(coord))
            .collect();

        let mut loaded = 0;
        for chunk in generated {
            let coord = chunk.coord();
            if world.insert(chunk).is_ok() {
                mesher.remesh(world, coord);
                debug!("loaded chunk ({}, {})", coord.x(), coord.z());
                loaded += 1;
            }
        }
        loaded
    }

    /// Load one chunk immediately, outside the sweep machinery. Returns
    /// false when the coordinate is already loaded.
    pub fn load(&self, coord: ChunkCoord, world: &mut World, mesher: &MeshBuilder) -> bool {
        if world.contains(coord) {
            return false;
        }
        let chunk = self.generator.generate(coord);
        if world.insert(chunk).is_err() {
            return false;
        }
        mesher.remesh(world, coord);
        true
    }
}
