// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num >> 0) as u8;

        Color { r, g, b, a }
    }

    // CSS hex string for the canvas fill style, alpha dropped
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // CSS rgba() string with an explicit alpha for translucent strokes
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_unpacks_channels() {
        let violet = Color::from_u32(0x9333eaff);
        assert_eq!(violet.r, 0x93);
        assert_eq!(violet.g, 0x33);
        assert_eq!(violet.b, 0xea);
        assert_eq!(violet.a, 0xff);
    }

    #[test]
    fn css_strings_match_canvas_syntax() {
        let violet = Color::from_u32(0x9333eaff);
        assert_eq!(violet.to_css(), "#9333ea");
        assert_eq!(violet.to_css_with_alpha(0.15), "rgba(147, 51, 234, 0.15)");
    }
}
