// STD Dependencies -----------------------------------------------------------
use std::collections::{BTreeMap, HashMap};


// Internal Dependencies ------------------------------------------------------
use crate::color::{Rgb444, Rgb888};
use crate::sprite::{Sprite, PIXEL_COUNT, SPRITE_SIZE};


// Constants ------------------------------------------------------------------
const ALPHA_THRESHOLD: u8 = 128;


// Pixel Classification -------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Texel {
    Transparent,
    Opaque(Rgb888)
}

impl Texel {
    pub fn color(&self) -> Option<Rgb888> {
        match self {
            Texel::Transparent => None,
            Texel::Opaque(color) => Some(*color)
        }
    }

    pub fn quantize(&self) -> Rgb444 {
        match self {
            Texel::Transparent => Rgb444::TRANSPARENT,
            Texel::Opaque(color) => color.quantize()
        }
    }

    pub fn is_transparent(&self) -> bool {
        *self == Texel::Transparent
    }
}

/// Row-major classification of all 256 sprite pixels.
#[derive(Debug)]
pub struct Texels {
    texels: Vec<Texel>
}

impl Texels {
    pub fn from_sprite(sprite: &Sprite, transparent: Option<Rgb888>) -> Self {
        let texels = sprite.pixels().iter().map(|p| {
            if p.alpha.map(|a| a < ALPHA_THRESHOLD).unwrap_or(false) || Some(p.color) == transparent {
                Texel::Transparent

            } else {
                Texel::Opaque(p.color)
            }

        }).collect();

        Self {
            texels
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Texel> {
        self.texels.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Texel]> {
        self.texels.chunks(SPRITE_SIZE as usize)
    }

    pub fn transparent_count(&self) -> usize {
        self.texels.iter().filter(|t| t.is_transparent()).count()
    }

    pub fn opaque_count(&self) -> usize {
        PIXEL_COUNT - self.transparent_count()
    }

    /// Groups the opaque columns of a row by color, in ascending color order.
    pub fn row_groups(row: &[Texel]) -> BTreeMap<Rgb888, Vec<u8>> {
        let mut groups: BTreeMap<Rgb888, Vec<u8>> = BTreeMap::new();
        for (x, texel) in row.iter().enumerate() {
            if let Some(color) = texel.color() {
                groups.entry(color).or_default().push(x as u8);
            }
        }
        groups
    }
}


// Symbolic Color Names -------------------------------------------------------
#[derive(Debug, Default)]
pub struct ColorTable {
    colors: Vec<Rgb888>,
    indices: HashMap<Rgb888, usize>
}

impl ColorTable {
    pub fn from_texels(texels: &Texels) -> Self {
        let mut table = Self::default();
        for color in texels.iter().filter_map(Texel::color) {
            table.insert(color);
        }
        table
    }

    pub fn insert(&mut self, color: Rgb888) -> usize {
        if let Some(index) = self.indices.get(&color) {
            *index

        } else {
            let index = self.colors.len();
            self.colors.push(color);
            self.indices.insert(color, index);
            index
        }
    }

    pub fn name(&self, color: &Rgb888) -> Option<String> {
        self.indices.get(color).map(|i| Self::name_of(*i))
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries ordered by their generated name, compared as strings.
    pub fn by_name(&self) -> Vec<(String, Rgb888)> {
        let mut entries: Vec<(String, Rgb888)> = self.colors.iter().enumerate().map(|(i, c)| {
            (Self::name_of(i), *c)

        }).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn name_of(index: usize) -> String {
        format!("COLOR_{}", index)
    }
}
