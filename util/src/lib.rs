use std::{
    io::{self, Read},
    num::ParseIntError,
};

use anyhow::{anyhow, Context, Result};
use miette::GraphicalReportHandler;
use nom::{
    character::complete::digit1,
    combinator::map_res,
    error::{FromExternalError, ParseError},
    IResult,
};
use nom_locate::LocatedSpan;
use nom_supreme::{
    error::{BaseErrorKind, ErrorTree, GenericErrorTree},
    final_parser::final_parser,
};

pub type Span<'a> = LocatedSpan<&'a str>;

type Kind = BaseErrorKind<&'static str, Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
#[error("bad input")]
struct BadInput<'a> {
    #[source_code]
    src: &'a str,

    #[label("{kind}")]
    bad_bit: miette::SourceSpan,

    kind: Kind,
}

pub fn parse_unsigned<'a, E>(i: Span<'a>) -> IResult<Span<'a>, u64, E>
where
    E: ParseError<Span<'a>> + FromExternalError<Span<'a>, ParseIntError>,
{
    map_res(digit1, |d: Span<'a>| d.fragment().parse::<u64>())(i)
}

/// Walks down to the innermost failure of an error tree.
fn first_base<'a>(e: ErrorTree<Span<'a>>) -> Option<(Span<'a>, Kind)> {
    match e {
        GenericErrorTree::Base { location, kind } => Some((location, kind)),
        GenericErrorTree::Stack { base, .. } => first_base(*base),
        GenericErrorTree::Alt(alts) => alts.into_iter().find_map(first_base),
    }
}

/// Runs `parse_fun` over the whole of `l`, turning any failure into an error
/// that carries a rendered report pointing at the bad column.
pub fn parse_nice<'a, T, F>(l: &'a str, parse_fun: F) -> Result<T>
where
    F: FnMut(Span<'a>) -> IResult<Span<'a>, T, ErrorTree<Span<'a>>>,
{
    let span = Span::new(l);
    let parsed: Result<_, ErrorTree<Span>> = final_parser(parse_fun)(span);

    parsed.map_err(|e| {
        let Some((location, kind)) = first_base(e) else {
            return anyhow!("bad input");
        };

        let err = BadInput {
            src: l,
            bad_bit: miette::SourceSpan::new(location.location_offset().into(), 0.into()),
            kind,
        };

        let mut s = String::new();
        match GraphicalReportHandler::new().render_report(&mut s, &err) {
            Ok(()) => anyhow!(s),
            Err(_) => anyhow!("bad input at offset {}", location.location_offset()),
        }
    })
}

pub fn read_input_as_string() -> Result<String> {
    let mut input = String::new();

    io::stdin()
        .lock()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    Ok(input)
}
