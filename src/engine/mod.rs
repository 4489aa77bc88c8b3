pub mod core;
pub mod geometry;
pub mod renderer;
pub mod resources;
pub mod scene;

use self::core::PoiConfig;

use crate::control::{CommandQueue, CommandSender, PoiCommand};
use crate::map::MapHost;
use crate::sights::SightsManager;

/// Owns the sights controller and the host map, and applies queued commands.
pub struct PoiApp<M: MapHost> {
    config: PoiConfig,
    sights: SightsManager,
    map: M,
    commands: CommandQueue,
    sender: CommandSender,
}

impl<M: MapHost> PoiApp<M> {
    pub fn new(config: PoiConfig, map: M) -> Self {
        let sights = SightsManager::new(&config);
        Self::with_sights(config, sights, map)
    }

    pub fn with_sights(config: PoiConfig, sights: SightsManager, map: M) -> Self {
        tracing::info!(
            target: "engine",
            app = %config.app_name,
            sights = sights.len(),
            models = sights.resources().model_count(),
            "POI add-on ready"
        );
        let (commands, sender) = CommandQueue::new();
        Self {
            sights,
            config,
            map,
            commands,
            sender,
        }
    }

    pub fn sender(&self) -> CommandSender {
        self.sender.clone()
    }

    pub fn config(&self) -> &PoiConfig {
        &self.config
    }

    pub fn sights(&self) -> &SightsManager {
        &self.sights
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    pub fn apply(&mut self, command: PoiCommand) {
        tracing::debug!(target: "engine", ?command, "applying command");
        match command {
            PoiCommand::Next => {
                self.sights.next(&mut self.map);
            }
            PoiCommand::Toggle => self.sights.toggle(&mut self.map),
            PoiCommand::JumpTo(index) => {
                self.sights.jump_to(index, &mut self.map);
            }
        }
    }

    /// Drains every queued command; returns how many were applied.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        while let Some(command) = self.commands.try_recv() {
            self.apply(command);
            applied += 1;
        }
        applied
    }
}
