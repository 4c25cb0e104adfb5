use std::iter;
use std::num::NonZeroU64;

use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, not, opt, preceded, repeat, separated, terminated};
use winnow::error::{ContextError, ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, one_of};

use crate::{
    Condition, Expr, OperandKind, Operands, Range, Relation, RelationKind, Sample, SampleKind,
    SetMode,
};

use super::parser::ParsedRule;

// -- Lexical helpers --------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    multispace0.void().parse_next(input)
}

fn expected(what: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(what))
}

/// A keyword that is not the prefix of a longer word.
fn keyword<'i>(word: &'static str) -> impl Parser<&'i str, &'i str, ErrMode<ContextError>> {
    terminated(word, not(one_of(|c: char| c.is_ascii_alphanumeric())))
}

// -- Values -----------------------------------------------------------------

fn value(input: &mut &str) -> ModalResult<u64> {
    terminated(digit1, not(('.', digit1)))
        .try_map(|digits: &str| digits.parse::<u64>())
        .context(expected("non-negative integer"))
        .parse_next(input)
}

fn modulus(input: &mut &str) -> ModalResult<NonZeroU64> {
    value
        .verify_map(NonZeroU64::new)
        .context(StrContext::Label("modulus"))
        .context(expected("integer of at least 1"))
        .parse_next(input)
}

fn range(input: &mut &str) -> ModalResult<Range> {
    let low = value.parse_next(input)?;
    let high = opt(preceded(
        (ws, "..", ws),
        cut_err(
            value
                .verify(move |high: &u64| *high >= low)
                .context(StrContext::Label("range")),
        ),
    ))
    .parse_next(input)?;
    Ok(match high {
        Some(high) => Range::new(low, high).unwrap_or(Range::single(low)),
        None => Range::single(low),
    })
}

fn range_list(input: &mut &str) -> ModalResult<Vec<Range>> {
    separated(1.., cut_err(range), (ws, ',', ws)).parse_next(input)
}

// -- Relations (precedence: or < and < relation) ----------------------------

fn operand(input: &mut &str) -> ModalResult<OperandKind> {
    terminated(
        any.verify_map(OperandKind::from_symbol),
        not(one_of(|c: char| c.is_ascii_alphanumeric())),
    )
    .context(expected("operand (n, i, v, w, f, t)"))
    .parse_next(input)
}

fn expr(input: &mut &str) -> ModalResult<Expr> {
    let operand = operand.parse_next(input)?;
    let modulus = opt(preceded(
        (ws, alt((keyword("mod"), "%")), ws),
        cut_err(modulus),
    ))
    .parse_next(input)?;
    Ok(Expr { operand, modulus })
}

fn negation(input: &mut &str) -> ModalResult<bool> {
    opt(terminated(keyword("not"), ws))
        .map(|not| not.is_some())
        .parse_next(input)
}

fn relation_kind(input: &mut &str) -> ModalResult<(bool, RelationKind)> {
    alt((
        preceded((keyword("is"), ws), negation).map(|negated| (negated, RelationKind::Is)),
        "!=".value((true, RelationKind::InSet(SetMode::In))),
        "=".value((false, RelationKind::InSet(SetMode::In))),
        (
            negation,
            alt((
                keyword("in").value(SetMode::In),
                keyword("within").value(SetMode::Within),
            )),
        )
            .map(|(negated, mode)| (negated, RelationKind::InSet(mode))),
    ))
    .context(expected("'is', 'in', 'within', '=' or '!='"))
    .parse_next(input)
}

fn relation(input: &mut &str) -> ModalResult<Relation> {
    ws.parse_next(input)?;
    let expr = expr.parse_next(input)?;
    ws.parse_next(input)?;
    let (negated, kind) = cut_err(relation_kind).parse_next(input)?;
    ws.parse_next(input)?;
    let ranges = match kind {
        RelationKind::Is => vec![Range::single(cut_err(value).parse_next(input)?)],
        RelationKind::InSet(_) => cut_err(range_list).parse_next(input)?,
    };
    Ok(Relation {
        expr,
        negated,
        kind,
        ranges,
    })
}

fn and_condition(input: &mut &str) -> ModalResult<Condition> {
    let first = relation.parse_next(input)?;
    let rest: Vec<Relation> =
        repeat(0.., preceded((multispace1, keyword("and")), cut_err(relation)))
            .parse_next(input)?;
    if rest.is_empty() {
        return Ok(Condition::Relation(first));
    }
    Ok(Condition::And(
        iter::once(first).chain(rest).map(Condition::Relation).collect(),
    ))
}

fn condition(input: &mut &str) -> ModalResult<Condition> {
    let first = and_condition.parse_next(input)?;
    let rest: Vec<Condition> =
        repeat(0.., preceded((multispace1, keyword("or")), cut_err(and_condition)))
            .parse_next(input)?;
    if rest.is_empty() {
        return Ok(first);
    }
    Ok(Condition::Or(iter::once(first).chain(rest).collect()))
}

// -- Samples ----------------------------------------------------------------

fn sample_value(input: &mut &str) -> ModalResult<Operands> {
    (digit1, opt(('.', digit1)))
        .take()
        .try_map(str::parse::<Operands>)
        .context(expected("sample number"))
        .parse_next(input)
}

fn sample<'i>(kind: SampleKind) -> impl FnMut(&mut &'i str) -> ModalResult<Sample> {
    move |input: &mut &'i str| {
        let low = sample_value.parse_next(input)?;
        let high = opt(preceded((ws, '~', ws), cut_err(sample_value))).parse_next(input)?;
        Ok(Sample { kind, low, high })
    }
}

fn sample_list<'i>(kind: SampleKind) -> impl FnMut(&mut &'i str) -> ModalResult<Vec<Sample>> {
    move |input: &mut &'i str| {
        let samples: Vec<Sample> =
            separated(1.., sample(kind), (ws, ',', ws)).parse_next(input)?;
        opt((ws, ',', ws, alt(("…", "...")))).parse_next(input)?;
        Ok(samples)
    }
}

fn samples(input: &mut &str) -> ModalResult<Vec<Sample>> {
    let integer = opt(preceded(
        ("@integer", ws),
        cut_err(sample_list(SampleKind::Integer)),
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    let decimal = opt(preceded(
        ("@decimal", ws),
        cut_err(sample_list(SampleKind::Decimal)),
    ))
    .parse_next(input)?;
    Ok(integer.into_iter().chain(decimal).flatten().collect())
}

// -- Top-level parser -------------------------------------------------------

pub(crate) fn plural_rule(input: &mut &str) -> ModalResult<ParsedRule> {
    ws.parse_next(input)?;
    let condition = if input.is_empty() || input.starts_with('@') {
        Condition::always()
    } else {
        condition.parse_next(input)?
    };
    ws.parse_next(input)?;
    let samples = samples.parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedRule { condition, samples })
}
