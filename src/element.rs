//! Element trait: the capability bound for matrix elements

use num_traits::Zero;
use std::fmt;
use std::ops::Mul;

/// Trait for types that can be elements of a [`Matrix`](crate::matrix::Matrix)
///
/// Matrix operations need exactly three capabilities from an element type:
/// it must be additive, multiplicative, and renderable. The bounds spell
/// that out:
///
/// - `Zero` - the additive identity and `Add`, used as the starting value
///   and combining step of the dot product
/// - `Mul` - elementwise products inside the dot product
/// - `fmt::Display` - textual rendering of a matrix, one row per line
/// - `Copy + PartialEq` - value semantics and elementwise equality
///
/// The blanket impl covers every type satisfying the bounds, so all
/// primitive numeric types are elements out of the box. Anything heavier
/// (ordering, division, negation) is deliberately not required: unsigned
/// integers and user-defined semiring-like types qualify.
pub trait Element: Copy + PartialEq + Zero + Mul<Output = Self> + fmt::Display {}

impl<T> Element for T where T: Copy + PartialEq + Zero + Mul<Output = Self> + fmt::Display {}

#[cfg(test)]
mod tests {
    use super::Element;

    fn assert_element<T: Element>() {}

    #[test]
    fn primitive_types_are_elements() {
        assert_element::<i32>();
        assert_element::<i64>();
        assert_element::<u8>();
        assert_element::<f32>();
        assert_element::<f64>();
    }
}
