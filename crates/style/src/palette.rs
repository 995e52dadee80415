use papermill_types::Color;
use serde::Serialize;

/// A named set of five role-bound colors applied consistently across one
/// generated document. Color-bearing elements never pick colors directly;
/// they name a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text_dark: Color,
    pub text_light: Color,
}

const fn palette(
    name: &'static str,
    primary: Color,
    secondary: Color,
    accent: Color,
    text_dark: Color,
    text_light: Color,
) -> Palette {
    Palette { name, primary, secondary, accent, text_dark, text_light }
}

/// The closed palette table. The first entry is the default.
static PALETTES: [Palette; 6] = [
    palette(
        "corporate",
        Color::rgb(0x1F, 0x4E, 0x79),
        Color::rgb(0x44, 0x72, 0xC4),
        Color::rgb(0xED, 0x7D, 0x31),
        Color::rgb(0x1A, 0x1A, 0x1A),
        Color::rgb(0xFF, 0xFF, 0xFF),
    ),
    palette(
        "ocean",
        Color::rgb(0x0B, 0x53, 0x94),
        Color::rgb(0x3D, 0x85, 0xC6),
        Color::rgb(0x00, 0xB8, 0xA9),
        Color::rgb(0x10, 0x2A, 0x43),
        Color::rgb(0xF7, 0xFA, 0xFC),
    ),
    palette(
        "forest",
        Color::rgb(0x27, 0x4E, 0x13),
        Color::rgb(0x6A, 0xA8, 0x4F),
        Color::rgb(0xB4, 0x53, 0x09),
        Color::rgb(0x1C, 0x1C, 0x1C),
        Color::rgb(0xFF, 0xFF, 0xFF),
    ),
    palette(
        "sunset",
        Color::rgb(0x7F, 0x1D, 0x1D),
        Color::rgb(0xE2, 0x57, 0x4C),
        Color::rgb(0xF5, 0xA6, 0x23),
        Color::rgb(0x2B, 0x2B, 0x2B),
        Color::rgb(0xFF, 0xF8, 0xF0),
    ),
    palette(
        "slate",
        Color::rgb(0x37, 0x47, 0x4F),
        Color::rgb(0x78, 0x90, 0x9C),
        Color::rgb(0xFF, 0xB3, 0x00),
        Color::rgb(0x21, 0x21, 0x21),
        Color::rgb(0xFA, 0xFA, 0xFA),
    ),
    palette(
        "berry",
        Color::rgb(0x4A, 0x14, 0x8C),
        Color::rgb(0x8E, 0x24, 0xAA),
        Color::rgb(0x26, 0xC6, 0xDA),
        Color::rgb(0x21, 0x15, 0x26),
        Color::rgb(0xFF, 0xFF, 0xFF),
    ),
];

/// Resolve a palette by name, case-insensitively.
///
/// Unknown names fall back to the default palette; this is deliberate
/// forgiveness, not an error path.
pub fn resolve(name: &str) -> &'static Palette {
    let trimmed = name.trim();
    if let Some(found) = PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(trimmed)) {
        return found;
    }
    if !trimmed.is_empty() {
        log::debug!("unknown palette '{trimmed}', using '{}'", PALETTES[0].name);
    }
    &PALETTES[0]
}

pub fn default_palette() -> &'static Palette {
    &PALETTES[0]
}

/// All supported palettes, e.g. for a palette-listing endpoint.
pub fn all() -> &'static [Palette] {
    &PALETTES
}
