use crate::core::data::complex::Complex;

/// The three roots of the monic cubic `f(x) = (x - a)(x - b)(x - c)`.
///
/// Distinctness is not enforced; coincident roots are a valid but
/// numerically unstable input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootSet {
    pub a: Complex,
    pub b: Complex,
    pub c: Complex,
}

impl RootSet {
    /// Derives the elementary symmetric functions of the roots. Pure; must
    /// be called again whenever a root moves.
    #[must_use]
    pub fn coefficients(&self) -> SymmetricCoefficients {
        SymmetricCoefficients {
            sum: self.a + self.b + self.c,
            pair_sum: self.a * self.b + self.a * self.c + self.b * self.c,
            prod: self.a * self.b * self.c,
        }
    }
}

/// Expanded-form coefficients of the cubic, letting `f` and `f'` be
/// evaluated per cell without re-deriving the product form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SymmetricCoefficients {
    pub sum: Complex,
    pub pair_sum: Complex,
    pub prod: Complex,
}

impl SymmetricCoefficients {
    /// f(x) = x³ - sum·x² + pair_sum·x - prod
    #[must_use]
    pub fn value(&self, x: Complex) -> Complex {
        let sqr = x * x;
        sqr * x - self.sum * sqr + self.pair_sum * x - self.prod
    }

    /// f'(x) = 3x² - 2·sum·x + pair_sum
    #[must_use]
    pub fn slope(&self, x: Complex) -> Complex {
        let sqr = x * x;
        sqr.scale(3.0) - (self.sum * x).scale(2.0) + self.pair_sum
    }
}
