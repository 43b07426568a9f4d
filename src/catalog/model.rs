//! Catalog record types: `Category`, `TrackSpec` and `Preset`.

/// Tab grouping for tracks.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Nature,
    Frequencies,
    Stories,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 3] = [Category::Nature, Category::Frequencies, Category::Stories];

    pub fn label(self) -> &'static str {
        match self {
            Category::Nature => "Nature sounds",
            Category::Frequencies => "Frequencies",
            Category::Stories => "Stories",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Nature => "♣",
            Category::Frequencies => "≈",
            Category::Stories => "☾",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        match self {
            Category::Nature => 0,
            Category::Frequencies => 1,
            Category::Stories => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Immutable description of a catalog track.
#[derive(Debug, Clone, Copy)]
pub struct TrackSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub icon: &'static str,
    /// Base frequency (Hz) of the synthesized placeholder tone.
    pub frequency: f32,
    /// Label shown next to the name, e.g. "∞" or "15 min".
    pub duration: &'static str,
    pub default_volume: u8,
}

/// A named combination of tracks started together at fixed volumes.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Tracks to start, in order.
    pub tracks: &'static [&'static str],
    /// Target volume per track id.
    pub volumes: &'static [(&'static str, u8)],
}

impl Preset {
    /// Target volume for `track_id`, if the preset names one.
    pub fn volume_for(&self, track_id: &str) -> Option<u8> {
        self.volumes
            .iter()
            .find(|(id, _)| *id == track_id)
            .map(|&(_, v)| v)
    }

    pub fn contains(&self, track_id: &str) -> bool {
        self.tracks.contains(&track_id)
    }
}

/// Look up a preset by id.
pub fn find_preset<'a>(presets: &'a [Preset], id: &str) -> Option<&'a Preset> {
    presets.iter().find(|p| p.id == id)
}
