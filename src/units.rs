use derive_more::{
    Add, AddAssign, Deref, DerefMut, Display, From, Into, MulAssign, Sub, SubAssign, Sum,
};

/// A measurement in points, where 1 point == 1/72 inches. All page-space
/// coordinates, widths, and font sizes in this crate are expressed in points.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    MulAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl std::ops::Mul<f32> for Pt {
    type Output = Pt;

    fn mul(self, rhs: f32) -> Pt {
        Pt(self.0 * rhs)
    }
}

impl std::ops::Div<f32> for Pt {
    type Output = Pt;

    fn div(self, rhs: f32) -> Pt {
        Pt(self.0 / rhs)
    }
}

impl std::ops::Neg for Pt {
    type Output = Pt;

    fn neg(self) -> Pt {
        Pt(-self.0)
    }
}
