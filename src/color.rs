// Simple color struct, RGB channels plus a fractional alpha so it can be handed
// to the canvas as a css string or blended into a pixel buffer

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const GOLD: Color = Color {
        r: 212,
        g: 175,
        b: 55,
        a: 1.0,
    };

    pub fn with_alpha(self, a: f64) -> Color {
        Color {
            a: a.max(0.0).min(1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    /// Source-over composite of `self` onto one RGBA8 pixel.
    pub fn blend_onto(&self, dst: &mut [u8]) {
        let src_a = self.a;
        let dst_a = dst[3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            dst.copy_from_slice(&[0, 0, 0, 0]);
            return;
        }
        let channel = |src: u8, dst: u8| -> u8 {
            let c = (src as f64 * src_a + dst as f64 * dst_a * (1.0 - src_a)) / out_a;
            c.round() as u8
        };
        dst[0] = channel(self.r, dst[0]);
        dst[1] = channel(self.g, dst[1]);
        dst[2] = channel(self.b, dst[2]);
        dst[3] = (out_a * 255.0).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_string_keeps_fractional_alpha() {
        assert_eq!(
            Color::GOLD.with_alpha(0.25).to_css(),
            "rgba(212, 175, 55, 0.25)"
        );
    }

    #[test]
    fn blending_onto_transparent_keeps_source() {
        let mut px = [0u8; 4];
        Color::GOLD.with_alpha(0.5).blend_onto(&mut px);
        assert_eq!(px, [212, 175, 55, 128]);
    }

    #[test]
    fn zero_alpha_leaves_pixel_untouched() {
        let mut px = [10u8, 20, 30, 255];
        Color::GOLD.with_alpha(0.0).blend_onto(&mut px);
        assert_eq!(px, [10, 20, 30, 255]);
    }
}
