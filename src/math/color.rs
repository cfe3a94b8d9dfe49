use cgmath::BaseFloat;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// A RGBA `Color`. Each color component is a floating point value
/// with a range from 0 to 1.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color<S> {
    pub r: S,
    pub g: S,
    pub b: S,
    pub a: S,
}

impl<S: BaseFloat> Color<S> {
    pub fn new(r: S, g: S, b: S, a: S) -> Self {
        Color { r, g, b, a }
    }

    /// Samples each of the RGB channels uniformly from [0, 1), with a fully
    /// opaque alpha channel.
    pub fn random_opaque<R: Rng + ?Sized>(rng: &mut R) -> Self
    where
        Standard: Distribution<S>,
    {
        Color::new(rng.gen(), rng.gen(), rng.gen(), S::one())
    }

    /// Clip to [0.0, 1.0] range.
    pub fn clip(&self) -> Self {
        let mut color = *self;
        color.r = self.r.max(S::zero()).min(S::one());
        color.g = self.g.max(S::zero()).min(S::one());
        color.b = self.b.max(S::zero()).min(S::one());
        color.a = self.a.max(S::zero()).min(S::one());
        color
    }

    /// Returns true if the alpha channel is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= S::one()
    }

    /// Truncate alpha channel.
    pub fn rgb(&self) -> [S; 3] {
        [self.r, self.g, self.b]
    }
}

impl<S: BaseFloat> Color<S> {
    pub fn transparent() -> Self {
        Color::new(S::zero(), S::zero(), S::zero(), S::zero())
    }
}

impl From<Color<f32>> for [u8; 4] {
    fn from(color: Color<f32>) -> Self {
        let v = color.clip();
        let max = 255.0;
        [
            (v.r * max) as u8,
            (v.g * max) as u8,
            (v.b * max) as u8,
            (v.a * max) as u8,
        ]
    }
}
