use core::hash::Hash;
use core::ops::{Add, Mul, Sub};

use num::{Integer, PrimInt, Zero};

/// An integer scalar usable for lattice coordinates.
///
/// Callers pick the scalar to restrict signedness and width of coordinates; signed scalars permit
/// negative coordinates, and chunk splitting uses true floor division so they land in the chunk
/// below zero.
pub trait LatticeScalar: PrimInt + Integer + Hash {}

impl<I> LatticeScalar for I where I: PrimInt + Integer + Hash {}

/// An N-dimensional point on an integer lattice.
///
/// The dimensionality is a const generic, so the coordinate arity is checked at compile time; a
/// `PointN<I, 3>` can never be confused with a `PointN<I, 2>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PointN<I, const D: usize>(pub [I; D]);

/// A 2-dimensional point with scalar type `I`.
pub type Point2<I> = PointN<I, 2>;
/// A 2-dimensional point with scalar type `i32`.
pub type Point2i = PointN<i32, 2>;
/// A 3-dimensional point with scalar type `I`.
pub type Point3<I> = PointN<I, 3>;
/// A 3-dimensional point with scalar type `i32`.
pub type Point3i = PointN<i32, 3>;

impl<I, const D: usize> PointN<I, D>
where
    I: Copy,
{
    /// The point with `value` in every component.
    #[inline]
    pub fn fill(value: I) -> Self {
        Self([value; D])
    }

    /// Returns the component for axis `axis`. I.e. X = 0, Y = 1, Z = 2.
    #[inline]
    pub fn at(&self, axis: usize) -> I {
        self.0[axis]
    }

    /// Returns the point after applying `f` component-wise.
    #[inline]
    pub fn map_components_unary(&self, f: impl Fn(I) -> I) -> Self {
        let mut out = *self;
        for c in out.0.iter_mut() {
            *c = f(*c);
        }

        out
    }

    /// Returns the point after applying `f` component-wise to both `self` and `other` in parallel.
    #[inline]
    pub fn map_components_binary(&self, other: &Self, f: impl Fn(I, I) -> I) -> Self {
        let mut out = *self;
        for (c, other_c) in out.0.iter_mut().zip(other.0.iter()) {
            *c = f(*c, *other_c);
        }

        out
    }
}

impl<I, const D: usize> PointN<I, D>
where
    I: Copy + Integer,
{
    /// Component-wise floor division by the scalar `rhs`.
    ///
    /// This is true mathematical floor division, not truncation: `-1 / 4` is `-1`, not `0`. It is
    /// what maps a negative coordinate to the chunk below zero.
    #[inline]
    pub fn div_floor(&self, rhs: I) -> Self {
        self.map_components_unary(|c| Integer::div_floor(&c, &rhs))
    }

    /// Component-wise floor remainder by the scalar `rhs`.
    ///
    /// The result of each component is in `[0, rhs)` for any sign of the input, satisfying
    /// `p == p.div_floor(s) * s + p.mod_floor(s)`.
    #[inline]
    pub fn mod_floor(&self, rhs: I) -> Self {
        self.map_components_unary(|c| Integer::mod_floor(&c, &rhs))
    }
}

impl<I, const D: usize> Default for PointN<I, D>
where
    I: Copy + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::fill(I::zero())
    }
}

impl<I, const D: usize> Add for PointN<I, D>
where
    I: Copy + Add<Output = I>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.map_components_binary(&rhs, |c1, c2| c1 + c2)
    }
}

impl<I, const D: usize> Sub for PointN<I, D>
where
    I: Copy + Sub<Output = I>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.map_components_binary(&rhs, |c1, c2| c1 - c2)
    }
}

/// Scalar multiplication.
impl<I, const D: usize> Mul<I> for PointN<I, D>
where
    I: Copy + Mul<Output = I>,
{
    type Output = Self;

    #[inline]
    fn mul(self, rhs: I) -> Self::Output {
        self.map_components_unary(|c| c * rhs)
    }
}

impl<I, const D: usize> Zero for PointN<I, D>
where
    I: Copy + Zero + PartialEq,
{
    #[inline]
    fn zero() -> Self {
        Self::fill(I::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| *c == I::zero())
    }
}

// Serde does not derive for arrays of generic length, so these are written out as tuple impls.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::PointN;

    use core::fmt;
    use core::marker::PhantomData;

    use serde::{
        de::{self, SeqAccess, Visitor},
        ser::SerializeTuple,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl<I, const D: usize> Serialize for PointN<I, D>
    where
        I: Serialize,
    {
        fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
        where
            Ser: Serializer,
        {
            let mut tuple = serializer.serialize_tuple(D)?;
            for c in self.0.iter() {
                tuple.serialize_element(c)?;
            }

            tuple.end()
        }
    }

    impl<'de, I, const D: usize> Deserialize<'de> for PointN<I, D>
    where
        I: Deserialize<'de>,
    {
        fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
        where
            De: Deserializer<'de>,
        {
            use core::convert::TryFrom;

            struct PointVisitor<I, const D: usize>(PhantomData<I>);

            impl<'de, I, const D: usize> Visitor<'de> for PointVisitor<I, D>
            where
                I: Deserialize<'de>,
            {
                type Value = PointN<I, D>;

                fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                    write!(formatter, "a point with {} integer components", D)
                }

                fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
                where
                    A: SeqAccess<'de>,
                {
                    let mut components = Vec::with_capacity(D);
                    for i in 0..D {
                        components.push(
                            seq.next_element()?
                                .ok_or_else(|| de::Error::invalid_length(i, &self))?,
                        );
                    }

                    let components = <[I; D]>::try_from(components)
                        .map_err(|_| de::Error::invalid_length(D, &self))?;

                    Ok(PointN(components))
                }
            }

            deserializer.deserialize_tuple(D, PointVisitor(PhantomData))
        }
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_floor_rounds_toward_negative_infinity() {
        let p = PointN([5, -1, -4, -5]);

        assert_eq!(p.div_floor(4), PointN([1, -1, -1, -2]));
    }

    #[test]
    fn mod_floor_is_nonnegative_for_negative_coordinates() {
        let p = PointN([5, -1, -4, -5]);

        assert_eq!(p.mod_floor(4), PointN([1, 3, 0, 3]));
    }

    #[test]
    fn div_floor_and_mod_floor_recompose_the_input() {
        for x in -100i64..100 {
            for s in 1i64..8 {
                let p = PointN([x]);
                let recomposed = p.div_floor(s) * s + p.mod_floor(s);
                assert_eq!(recomposed, p);
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn points_deserialize_from_a_sequence_of_components() {
        use serde::de::value::{Error, SeqDeserializer};
        use serde::Deserialize;

        let de: SeqDeserializer<_, Error> = SeqDeserializer::new([5i32, -1].iter().copied());
        assert_eq!(PointN::<i32, 2>::deserialize(de), Ok(PointN([5, -1])));

        let de: SeqDeserializer<_, Error> = SeqDeserializer::new([5i32].iter().copied());
        assert!(PointN::<i32, 2>::deserialize(de).is_err());
    }

    #[test]
    fn componentwise_arithmetic() {
        let p1 = Point3i::fill(2);
        let p2 = PointN([1, -2, 3]);

        assert_eq!(p1 + p2, PointN([3, 0, 5]));
        assert_eq!(p1 - p2, PointN([1, 4, -1]));
        assert_eq!(p2 * 2, PointN([2, -4, 6]));
    }
}
