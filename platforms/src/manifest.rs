use std::str::FromStr;

use anyhow::Result;
use nom::{
    character::complete::{line_ending, multispace0, space0, space1},
    combinator::map,
    multi::separated_list0,
    sequence::{delimited, terminated, tuple},
    IResult,
};
use nom_supreme::error::ErrorTree;
use util::{parse_nice, parse_unsigned, Span};

use crate::optimal_number_of_platforms;

/// Robot weights on the first line, the platform limit on the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub weights: Vec<u64>,
    pub limit: u64,
}

fn parse_weights(i: Span) -> IResult<Span, Vec<u64>, ErrorTree<Span>> {
    delimited(space0, separated_list0(space1, parse_unsigned), space0)(i)
}

fn parse_limit(i: Span) -> IResult<Span, u64, ErrorTree<Span>> {
    delimited(space0, parse_unsigned, space0)(i)
}

fn parse_manifest(i: Span) -> IResult<Span, Manifest, ErrorTree<Span>> {
    map(
        tuple((
            terminated(parse_weights, line_ending),
            terminated(parse_limit, multispace0),
        )),
        |(weights, limit)| Manifest { weights, limit },
    )(i)
}

impl FromStr for Manifest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_nice(s, parse_manifest)
    }
}

pub fn get_min_platforms(input: &str) -> Result<usize> {
    let manifest: Manifest = input.parse()?;

    Ok(optimal_number_of_platforms(
        &manifest.weights,
        manifest.limit,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlatformError;
    use rstest::rstest;

    const TEST_INPUT: &str = include_str!("../data/test_input");

    #[test]
    fn part1() {
        let res = get_min_platforms(TEST_INPUT);
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), 4);
    }

    #[rstest]
    #[case("1 2 2 3\n3\n", vec![1, 2, 2, 3], 3)]
    #[case("\n10\n", vec![], 10)]
    #[case("   \n10", vec![], 10)]
    #[case("5\n5", vec![5], 5)]
    #[case("\t4  4\t4 \r\n 4 \r\n\r\n", vec![4, 4, 4], 4)]
    fn manifest_ok(#[case] input: &str, #[case] weights: Vec<u64>, #[case] limit: u64) {
        let res = input.parse::<Manifest>();
        assert!(res.is_ok());
        assert_eq!(res.unwrap(), Manifest { weights, limit });
    }

    #[rstest]
    #[case("1 2 3")]
    #[case("1 2 3\n")]
    #[case("1 two 3\n5\n")]
    #[case("1 -2 3\n5\n")]
    #[case("1 2\n5 6\n")]
    #[case("1 2\n5\nextra\n")]
    #[case("")]
    fn manifest_bad(#[case] input: &str) {
        assert!(input.parse::<Manifest>().is_err());
    }

    #[test]
    fn overweight_robot_rejected() {
        let err = get_min_platforms("1 9\n5\n").unwrap_err();

        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::RobotExceedsLimit {
                index: 1,
                weight: 9,
                limit: 5
            })
        );
    }

    #[test]
    fn zero_limit_rejected() {
        let err = get_min_platforms("0 0\n0\n").unwrap_err();

        assert_eq!(
            err.downcast_ref::<PlatformError>(),
            Some(&PlatformError::ZeroLimit)
        );
    }
}
