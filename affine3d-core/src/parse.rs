//! Text literals for the value types: whitespace-separated floats, as in 3DMF text
use std::fmt;
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{multispace0, multispace1},
    combinator::{all_consuming, value},
    number::complete::float,
    sequence::preceded,
    IResult,
};

use crate::error::{MathError, MathResult};
use crate::matrix::Matrix4x4;
use crate::param::Param2D;
use crate::point::{Point2D, Point3D};
use crate::rational::RationalPoint4D;
use crate::vector::{Vector2D, Vector3D};

/// One float. nom's `float` takes `inf` but not the `-inf` that `Display` writes.
fn signed_float(input: &str) -> IResult<&str, f32> {
    alt((float, value(f32::NEG_INFINITY, tag_no_case("-inf"))))(input)
}

/// Exactly `N` floats, separated by at least one whitespace character
fn parse_floats<const N: usize>(input: &str) -> IResult<&str, [f32; N]> {
    let mut values = [0.0; N];
    let mut input = input;
    for (i, slot) in values.iter_mut().enumerate() {
        let (rest, value) = if i == 0 {
            preceded(multispace0, signed_float)(input)?
        } else {
            preceded(multispace1, signed_float)(input)?
        };
        *slot = value;
        input = rest;
    }
    let (input, _) = multispace0(input)?;
    Ok((input, values))
}

fn parse_literal<const N: usize>(kind: &'static str, input: &str) -> MathResult<[f32; N]> {
    match all_consuming(parse_floats::<N>)(input) {
        Ok((_, values)) => Ok(values),
        Err(_) => Err(MathError::Parse {
            kind,
            input: input.to_string(),
        }),
    }
}

macro_rules! impl_literal {
    ($ty:ident, $n:literal, |$v:ident| $build:expr, |$s:ident| [$($field:expr),+]) => {
        impl FromStr for $ty {
            type Err = MathError;

            fn from_str(input: &str) -> MathResult<Self> {
                let $v = parse_literal::<$n>(stringify!($ty), input)?;
                Ok($build)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let $s = self;
                let fields = [$($field),+];
                for (i, value) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    };
}

impl_literal!(Vector2D, 2, |v| Vector2D::new(v[0], v[1]), |s| [s.x, s.y]);
impl_literal!(Vector3D, 3, |v| Vector3D::new(v[0], v[1], v[2]), |s| [s.x, s.y, s.z]);
impl_literal!(Point2D, 2, |v| Point2D::new(v[0], v[1]), |s| [s.x, s.y]);
impl_literal!(Point3D, 3, |v| Point3D::new(v[0], v[1], v[2]), |s| [s.x, s.y, s.z]);
impl_literal!(Param2D, 2, |v| Param2D::new(v[0], v[1]), |s| [s.u, s.v]);
impl_literal!(
    RationalPoint4D,
    4,
    |v| RationalPoint4D::new(v[0], v[1], v[2], v[3]),
    |s| [s.x, s.y, s.z, s.w]
);

impl FromStr for Matrix4x4 {
    type Err = MathError;

    fn from_str(input: &str) -> MathResult<Self> {
        parse_literal::<16>("Matrix4x4", input).map(Matrix4x4::from_flat)
    }
}

/// One row per line
impl fmt::Display for Matrix4x4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.value.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {} {} {}", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vector() {
        let v: Vector3D = "1 -2.5 3e2".parse().unwrap();
        assert_eq!(v, Vector3D::new(1.0, -2.5, 300.0));

        let v2: Vector2D = "  0.5\t0.25\n".parse().unwrap();
        assert_eq!(v2, Vector2D::new(0.5, 0.25));
    }

    #[test]
    fn test_parse_point_and_rational() {
        let p: Point3D = "-0.5 -1 0.5".parse().unwrap();
        assert_eq!(p, Point3D::new(-0.5, -1.0, 0.5));

        let r: RationalPoint4D = "1 2 3 0".parse().unwrap();
        assert!(r.is_direction());

        let uv: Param2D = "0.5 1".parse().unwrap();
        assert_eq!(uv, Param2D::new(0.5, 1.0));
    }

    #[test]
    fn test_wrong_arity_is_error() {
        assert!("1 2".parse::<Vector3D>().is_err());
        assert!("1 2 3 4".parse::<Point3D>().is_err());
        assert!("".parse::<Point2D>().is_err());
    }

    #[test]
    fn test_garbage_is_error() {
        let err = "1 2 x".parse::<Vector3D>().unwrap_err();
        assert_eq!(
            err,
            MathError::Parse {
                kind: "Vector3D",
                input: "1 2 x".to_string()
            }
        );
        assert!("1,2,3".parse::<Vector3D>().is_err());
    }

    #[test]
    fn test_display_reparses() {
        let v = Vector3D::new(0.1, -7.25, 1000.0);
        assert_eq!(v.to_string().parse::<Vector3D>().unwrap(), v);

        let m = Matrix4x4::rotate_xyz(0.1, 0.2, 0.3) * Matrix4x4::translate(Vector3D::new(1.0, 2.0, 3.0));
        let text = m.to_string();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.parse::<Matrix4x4>().unwrap(), m);
    }

    #[test]
    fn test_infinities_reparse() {
        let v: Vector3D = "-inf 0 1".parse().unwrap();
        assert_eq!(v, Vector3D::new(f32::NEG_INFINITY, 0.0, 1.0));

        let w = Vector3D::new(f32::NEG_INFINITY, f32::INFINITY, 0.0);
        assert_eq!(w.to_string(), "-inf inf 0");
        assert_eq!(w.to_string().parse::<Vector3D>().unwrap(), w);
        assert!("- inf 0 1".parse::<Vector3D>().is_err());
    }

    #[test]
    fn test_parse_matrix() {
        let m: Matrix4x4 = "1 0 0 0\n0 1 0 0\n0 0 1 0\n4 5 6 1".parse().unwrap();
        assert_eq!(m, Matrix4x4::translate(Vector3D::new(4.0, 5.0, 6.0)));
    }
}
