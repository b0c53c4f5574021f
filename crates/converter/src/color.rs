// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::str::FromStr;


// Colors ---------------------------------------------------------------------
/// A 24-bit color, ordered by red, then green, then blue.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8
}

impl Rgb888 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn quantize(&self) -> Rgb444 {
        Rgb444::from(*self)
    }
}

impl From<[u8; 3]> for Rgb888 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

// Matches the tuple notation used in generated comments, e.g. (255, 0, 255)
impl fmt::Display for Rgb888 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb888 {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(ColorParseError::ComponentCount(s.to_string(), parts.len()));
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(parts) {
            let part = part.trim();
            *channel = part.parse::<u8>().map_err(|_| {
                ColorParseError::Component(s.to_string(), part.to_string())
            })?;
        }
        Ok(Self::from(channels))
    }
}

/// A 12-bit color holding the upper nibble of each RGB888 channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Rgb444(u16);

impl Rgb444 {
    pub const TRANSPARENT: Rgb444 = Rgb444(0x000);

    pub fn value(&self) -> u16 {
        self.0
    }
}

impl From<Rgb888> for Rgb444 {
    fn from(c: Rgb888) -> Self {
        let (r4, g4, b4) = (c.r >> 4, c.g >> 4, c.b >> 4);
        Rgb444((r4 as u16) << 8 | (g4 as u16) << 4 | b4 as u16)
    }
}

impl fmt::Display for Rgb444 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:03X}", self.0)
    }
}


// Errors ---------------------------------------------------------------------
#[derive(Debug, Eq, PartialEq)]
pub enum ColorParseError {
    ComponentCount(String, usize),
    Component(String, String)
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ColorParseError::ComponentCount(color, count) => write!(
                f,
                "Transparent color \"{}\" has {} component(s), expected R,G,B (e.g. 255,0,255)",
                color,
                count
            ),
            ColorParseError::Component(color, part) => write!(
                f,
                "Transparent color \"{}\" contains \"{}\" which is not a value between 0 and 255, expected R,G,B (e.g. 255,0,255)",
                color,
                part
            )
        }
    }
}


// Tests ----------------------------------------------------------------------
#[cfg(test)]
mod test {
    use super::{ColorParseError, Rgb444, Rgb888};

    #[test]
    fn test_quantize() {
        assert_eq!(Rgb888::new(16, 32, 48).quantize().value(), 0x123);
        assert_eq!(Rgb888::new(255, 255, 255).quantize().value(), 0xFFF);
        assert_eq!(Rgb888::new(15, 15, 15).quantize().value(), 0x000);
        assert_eq!(Rgb888::new(0xAB, 0xCD, 0xEF).quantize().value(), 0xACE);
    }

    #[test]
    fn test_quantize_all_channels() {
        for v in 0..=255u8 {
            let q = Rgb888::new(v, v, v).quantize().value();
            let n = (v >> 4) as u16;
            assert_eq!(q, n << 8 | n << 4 | n);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgb888::new(16, 32, 48).quantize().to_string(), "123");
        assert_eq!(Rgb888::new(0, 0, 0xF0).quantize().to_string(), "00F");
        assert_eq!(Rgb444::TRANSPARENT.to_string(), "000");
        assert_eq!(Rgb888::new(255, 0, 255).to_string(), "(255, 0, 255)");
    }

    #[test]
    fn test_ordering() {
        let mut colors = vec![Rgb888::new(0, 0, 255), Rgb888::new(0, 255, 0), Rgb888::new(255, 0, 0), Rgb888::new(0, 0, 1)];
        colors.sort();
        assert_eq!(colors, vec![Rgb888::new(0, 0, 1), Rgb888::new(0, 0, 255), Rgb888::new(0, 255, 0), Rgb888::new(255, 0, 0)]);
    }

    #[test]
    fn test_parse() {
        assert_eq!("255,0,255".parse::<Rgb888>(), Ok(Rgb888::new(255, 0, 255)));
        assert_eq!(" 1, 2 ,3".parse::<Rgb888>(), Ok(Rgb888::new(1, 2, 3)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("255,0".parse::<Rgb888>(), Err(ColorParseError::ComponentCount("255,0".to_string(), 2)));
        assert_eq!("1,2,3,4".parse::<Rgb888>(), Err(ColorParseError::ComponentCount("1,2,3,4".to_string(), 4)));
        assert_eq!("256,0,0".parse::<Rgb888>(), Err(ColorParseError::Component("256,0,0".to_string(), "256".to_string())));
        assert_eq!("a,b,c".parse::<Rgb888>(), Err(ColorParseError::Component("a,b,c".to_string(), "a".to_string())));
        assert_eq!("-1,0,0".parse::<Rgb888>(), Err(ColorParseError::Component("-1,0,0".to_string(), "-1".to_string())));
        assert!("".parse::<Rgb888>().is_err());
    }
}
