use egui::Color32;

/// Background theme preset for the rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTheme {
    Light,
    Dark,
}

impl ChartTheme {
    pub const ALL: [ChartTheme; 2] = [ChartTheme::Light, ChartTheme::Dark];

    pub fn label(&self) -> &'static str {
        match self {
            ChartTheme::Light => "White Background",
            ChartTheme::Dark => "Dark Background",
        }
    }

    /// Fill behind the bars.
    pub fn plot_bg(&self) -> Color32 {
        match self {
            ChartTheme::Light => Color32::WHITE,
            ChartTheme::Dark => Color32::from_rgb(34, 34, 34),
        }
    }

    /// Fill around the plot area (titles, axis labels).
    pub fn frame_bg(&self) -> Color32 {
        match self {
            ChartTheme::Light => Color32::WHITE,
            ChartTheme::Dark => Color32::from_rgb(17, 17, 17),
        }
    }

    pub fn text(&self) -> Color32 {
        match self {
            ChartTheme::Light => Color32::BLACK,
            ChartTheme::Dark => Color32::WHITE,
        }
    }

    pub fn grid(&self) -> Color32 {
        match self {
            ChartTheme::Light => Color32::from_rgb(211, 211, 211),
            ChartTheme::Dark => Color32::from_rgb(68, 70, 80),
        }
    }
}

/// Named single-bar color swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    DefaultBlue,
    EmeraldGreen,
    CrimsonRed,
    GoldenrodYellow,
    PurpleHaze,
}

impl BarColor {
    pub const ALL: [BarColor; 5] = [
        BarColor::DefaultBlue,
        BarColor::EmeraldGreen,
        BarColor::CrimsonRed,
        BarColor::GoldenrodYellow,
        BarColor::PurpleHaze,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BarColor::DefaultBlue => "Default Blue",
            BarColor::EmeraldGreen => "Emerald Green",
            BarColor::CrimsonRed => "Crimson Red",
            BarColor::GoldenrodYellow => "Goldenrod Yellow",
            BarColor::PurpleHaze => "Purple Haze",
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            BarColor::DefaultBlue => Color32::from_rgb(0x1f, 0x77, 0xb4),
            BarColor::EmeraldGreen => Color32::from_rgb(0x2c, 0xa0, 0x2c),
            BarColor::CrimsonRed => Color32::from_rgb(0xd6, 0x27, 0x28),
            BarColor::GoldenrodYellow => Color32::from_rgb(0xff, 0x7f, 0x0e),
            BarColor::PurpleHaze => Color32::from_rgb(0x94, 0x67, 0xbd),
        }
    }
}

/// Named continuous scales mapping a duration to a bar color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScale {
    Plasma,
    Viridis,
    Inferno,
    Magma,
    Cividis,
    Blues,
    Greens,
    Reds,
    Purples,
    RdBu,
    Portland,
    Greys,
}

impl ColorScale {
    pub const ALL: [ColorScale; 12] = [
        ColorScale::Plasma,
        ColorScale::Viridis,
        ColorScale::Inferno,
        ColorScale::Magma,
        ColorScale::Cividis,
        ColorScale::Blues,
        ColorScale::Greens,
        ColorScale::Reds,
        ColorScale::Purples,
        ColorScale::RdBu,
        ColorScale::Portland,
        ColorScale::Greys,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScale::Plasma => "Plasma",
            ColorScale::Viridis => "Viridis",
            ColorScale::Inferno => "Inferno",
            ColorScale::Magma => "Magma",
            ColorScale::Cividis => "Cividis",
            ColorScale::Blues => "Blues",
            ColorScale::Greens => "Greens",
            ColorScale::Reds => "Reds",
            ColorScale::Purples => "Purples",
            ColorScale::RdBu => "RdBu",
            ColorScale::Portland => "Portland",
            ColorScale::Greys => "Greys",
        }
    }

    /// Gradient stops, evenly spaced from the low end to the high end.
    fn stops(&self) -> &'static [Color32] {
        match self {
            ColorScale::Plasma => PLASMA,
            ColorScale::Viridis => VIRIDIS,
            ColorScale::Inferno => INFERNO,
            ColorScale::Magma => MAGMA,
            ColorScale::Cividis => CIVIDIS,
            ColorScale::Blues => BLUES,
            ColorScale::Greens => GREENS,
            ColorScale::Reds => REDS,
            ColorScale::Purples => PURPLES,
            ColorScale::RdBu => RDBU,
            ColorScale::Portland => PORTLAND,
            ColorScale::Greys => GREYS,
        }
    }

    /// Sample the scale at `t` in `[0, 1]`, interpolating between stops.
    pub fn sample(&self, t: f32) -> Color32 {
        let stops = self.stops();
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (stops.len() - 1) as f32;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = scaled - lo as f32;
        lerp_color(stops[lo], stops[hi], frac)
    }
}

const PLASMA: &[Color32] = &[
    Color32::from_rgb(0x0d, 0x08, 0x87),
    Color32::from_rgb(0x7e, 0x03, 0xa8),
    Color32::from_rgb(0xcc, 0x47, 0x78),
    Color32::from_rgb(0xf8, 0x94, 0x41),
    Color32::from_rgb(0xf0, 0xf9, 0x21),
];

const VIRIDIS: &[Color32] = &[
    Color32::from_rgb(0x44, 0x01, 0x54),
    Color32::from_rgb(0x3b, 0x52, 0x8b),
    Color32::from_rgb(0x21, 0x91, 0x8c),
    Color32::from_rgb(0x5e, 0xc9, 0x62),
    Color32::from_rgb(0xfd, 0xe7, 0x25),
];

const INFERNO: &[Color32] = &[
    Color32::from_rgb(0x00, 0x00, 0x04),
    Color32::from_rgb(0x57, 0x10, 0x6e),
    Color32::from_rgb(0xbc, 0x37, 0x54),
    Color32::from_rgb(0xf9, 0x8e, 0x09),
    Color32::from_rgb(0xfc, 0xff, 0xa4),
];

const MAGMA: &[Color32] = &[
    Color32::from_rgb(0x00, 0x00, 0x04),
    Color32::from_rgb(0x51, 0x12, 0x7c),
    Color32::from_rgb(0xb7, 0x37, 0x79),
    Color32::from_rgb(0xfc, 0x89, 0x61),
    Color32::from_rgb(0xfc, 0xfd, 0xbf),
];

const CIVIDIS: &[Color32] = &[
    Color32::from_rgb(0x00, 0x22, 0x4e),
    Color32::from_rgb(0x35, 0x45, 0x6c),
    Color32::from_rgb(0x66, 0x69, 0x70),
    Color32::from_rgb(0xa6, 0x9d, 0x75),
    Color32::from_rgb(0xfe, 0xe8, 0x38),
];

const BLUES: &[Color32] = &[
    Color32::from_rgb(0xf7, 0xfb, 0xff),
    Color32::from_rgb(0x6b, 0xae, 0xd6),
    Color32::from_rgb(0x08, 0x30, 0x6b),
];

const GREENS: &[Color32] = &[
    Color32::from_rgb(0xf7, 0xfc, 0xf5),
    Color32::from_rgb(0x74, 0xc4, 0x76),
    Color32::from_rgb(0x00, 0x44, 0x1b),
];

const REDS: &[Color32] = &[
    Color32::from_rgb(0xff, 0xf5, 0xf0),
    Color32::from_rgb(0xfb, 0x6a, 0x4a),
    Color32::from_rgb(0x67, 0x00, 0x0d),
];

const PURPLES: &[Color32] = &[
    Color32::from_rgb(0xfc, 0xfb, 0xfd),
    Color32::from_rgb(0x9e, 0x9a, 0xc8),
    Color32::from_rgb(0x3f, 0x00, 0x7d),
];

const RDBU: &[Color32] = &[
    Color32::from_rgb(0x67, 0x00, 0x1f),
    Color32::from_rgb(0xf7, 0xf7, 0xf7),
    Color32::from_rgb(0x05, 0x30, 0x61),
];

const PORTLAND: &[Color32] = &[
    Color32::from_rgb(0x0c, 0x33, 0x83),
    Color32::from_rgb(0x0a, 0x88, 0xba),
    Color32::from_rgb(0xf2, 0xd3, 0x38),
    Color32::from_rgb(0xf2, 0x8f, 0x38),
    Color32::from_rgb(0xd9, 0x1e, 0x1e),
];

const GREYS: &[Color32] = &[
    Color32::from_rgb(0xff, 0xff, 0xff),
    Color32::from_rgb(0x96, 0x96, 0x96),
    Color32::from_rgb(0x00, 0x00, 0x00),
];

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let ch = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgb(ch(a.r(), b.r()), ch(a.g(), b.g()), ch(a.b(), b.b()))
}
