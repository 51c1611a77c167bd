use crate::SgfError;

/// Default numeric edge weight.
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SgfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SgfError::NonFinite { what, value: v })
    }
}

/// Weight types that can be checked for finiteness before they reach an
/// encoder. Integer weights are always finite.
pub trait FiniteCheck {
    fn is_finite_weight(&self) -> bool;
}

macro_rules! always_finite {
    ($($t:ty),*) => {
        $(impl FiniteCheck for $t {
            fn is_finite_weight(&self) -> bool {
                true
            }
        })*
    };
}

always_finite!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl FiniteCheck for core::convert::Infallible {
    fn is_finite_weight(&self) -> bool {
        match *self {}
    }
}

impl FiniteCheck for f32 {
    fn is_finite_weight(&self) -> bool {
        self.is_finite()
    }
}

impl FiniteCheck for f64 {
    fn is_finite_weight(&self) -> bool {
        self.is_finite()
    }
}
