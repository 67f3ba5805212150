//! Frame driver
//!
//! Owns the arena, the texture registry and the settings. Each frame it
//! drains pending events, steps every entity once, then draws statics and
//! entities. A window backend feeds events in and presents the draw list.

use crate::error::Error;
use crate::renderer::{DrawList, TextureRegistry, draw_arena};
use crate::settings::Settings;
use crate::sim::Arena;

/// Input delivered by the window backend
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Window closed
    Quit,
    KeyDown(char),
    /// Game logic pushing an entity before the next update
    ApplyForce { entity: usize, force: glam::Vec2 },
    SetForcefieldsOpen(bool),
}

pub struct App {
    pub settings: Settings,
    pub arena: Arena,
    pub textures: TextureRegistry,
    running: bool,
    frame: u64,
}

impl App {
    /// Load textures and the map named in `settings`
    pub fn new(settings: Settings) -> Result<Self, Error> {
        let mut textures = TextureRegistry::new();
        for entry in &settings.textures {
            match textures.load(&entry.name, &entry.path) {
                Ok(_) => {}
                Err(e) if settings.missing_textures_fatal => return Err(e.into()),
                Err(e) => log::warn!("{}; falling back to flat colors", e),
            }
        }

        let arena = Arena::load(&settings.map_path)?;
        Ok(Self::from_parts(settings, arena, textures))
    }

    pub fn from_parts(settings: Settings, arena: Arena, textures: TextureRegistry) -> Self {
        Self {
            settings,
            arena,
            textures,
            running: true,
            frame: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit("quit event"),
            AppEvent::KeyDown(key) if key.eq_ignore_ascii_case(&self.settings.quit_key) => {
                self.quit("quit key")
            }
            AppEvent::KeyDown(_) => {}
            AppEvent::ApplyForce { entity, force } => match self.arena.entities.get_mut(entity) {
                Some(e) => e.apply_force(force),
                None => log::warn!("Force for unknown entity {}", entity),
            },
            AppEvent::SetForcefieldsOpen(open) => self.arena.set_forcefields_open(open),
        }
    }

    fn quit(&mut self, reason: &str) {
        if self.running {
            log::info!("Stopping after {} frames ({})", self.frame, reason);
        }
        self.running = false;
    }

    /// Run one frame: update every entity, then draw everything
    ///
    /// Returns `None` once the driver has stopped.
    pub fn frame_step(&mut self) -> Option<DrawList> {
        if self.settings.max_frames.is_some_and(|max| self.frame >= max) {
            self.quit("frame limit");
        }
        if !self.running {
            return None;
        }

        self.arena.step(self.settings.dt);
        let list = draw_arena(&self.arena, &self.textures, self.settings.projection());
        self.frame += 1;
        Some(list)
    }

    /// Drive frames until a quit event, the quit key or the frame limit
    ///
    /// `poll` is asked for the events of each frame; `present` receives the
    /// finished draw list.
    pub fn run(
        &mut self,
        mut poll: impl FnMut(u64) -> Vec<AppEvent>,
        mut present: impl FnMut(&DrawList),
    ) {
        log::info!(
            "Running {}x{} arena ({} entities, {} statics)",
            self.arena.width,
            self.arena.height,
            self.arena.entities.len(),
            self.arena.statics.len()
        );
        while self.running {
            for event in poll(self.frame) {
                self.handle_event(event);
            }
            if let Some(list) = self.frame_step() {
                present(&list);
            }
        }
    }
}
