use super::model::{Category, Preset, TrackSpec};

pub static TRACKS: [TrackSpec; 10] = [
    TrackSpec {
        id: "rain",
        name: "Rain in the forest",
        category: Category::Nature,
        icon: "☂",
        frequency: 200.0,
        duration: "∞",
        default_volume: 70,
    },
    TrackSpec {
        id: "ocean",
        name: "Ocean waves",
        category: Category::Nature,
        icon: "≋",
        frequency: 150.0,
        duration: "∞",
        default_volume: 70,
    },
    TrackSpec {
        id: "forest",
        name: "Forest sounds",
        category: Category::Nature,
        icon: "♣",
        frequency: 300.0,
        duration: "∞",
        default_volume: 70,
    },
    TrackSpec {
        id: "wind",
        name: "Wind noise",
        category: Category::Nature,
        icon: "∿",
        frequency: 100.0,
        duration: "∞",
        default_volume: 60,
    },
    TrackSpec {
        id: "fire",
        name: "Crackling campfire",
        category: Category::Nature,
        icon: "♨",
        frequency: 250.0,
        duration: "∞",
        default_volume: 65,
    },
    TrackSpec {
        id: "birds",
        name: "Birdsong",
        category: Category::Nature,
        icon: "♪",
        frequency: 800.0,
        duration: "∞",
        default_volume: 55,
    },
    // Sub-audible base tones; the noise term is what you actually hear.
    TrackSpec {
        id: "alpha",
        name: "Alpha waves (8-12 Hz)",
        category: Category::Frequencies,
        icon: "≈",
        frequency: 10.0,
        duration: "60 min",
        default_volume: 50,
    },
    TrackSpec {
        id: "theta",
        name: "Theta waves (4-8 Hz)",
        category: Category::Frequencies,
        icon: "≈",
        frequency: 6.0,
        duration: "60 min",
        default_volume: 50,
    },
    TrackSpec {
        id: "story1",
        name: "A tale of the starry sky",
        category: Category::Stories,
        icon: "☾",
        frequency: 440.0,
        duration: "15 min",
        default_volume: 80,
    },
    TrackSpec {
        id: "meditation",
        name: "Bedtime meditation",
        category: Category::Stories,
        icon: "✧",
        frequency: 528.0,
        duration: "20 min",
        default_volume: 75,
    },
];

pub static PRESETS: [Preset; 4] = [
    Preset {
        id: "forest_rain",
        name: "Forest rain",
        description: "Rain + forest sounds + birdsong",
        tracks: &["rain", "forest", "birds"],
        volumes: &[("rain", 70), ("forest", 50), ("birds", 30)],
    },
    Preset {
        id: "ocean_meditation",
        name: "Ocean meditation",
        description: "Ocean + alpha waves",
        tracks: &["ocean", "alpha"],
        volumes: &[("ocean", 60), ("alpha", 40)],
    },
    Preset {
        id: "nature_mix",
        name: "Nature mix",
        description: "Wind + fire + birds",
        tracks: &["wind", "fire", "birds"],
        volumes: &[("wind", 45), ("fire", 65), ("birds", 35)],
    },
    Preset {
        id: "relaxation",
        name: "Deep relaxation",
        description: "Theta waves + a story",
        tracks: &["theta", "story1"],
        volumes: &[("theta", 45), ("story1", 70)],
    },
];
