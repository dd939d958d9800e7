// Command parser for chart-spec strings

use super::ast::{ChartKind, Selection};
use super::lexer::{column_name, ws};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::char,
    combinator::{eof, map, opt},
    multi::separated_list0,
    sequence::preceded,
    IResult,
};

/// Parse a 2D chart command
/// Format: pie(column: country), doughnut(column: country),
///         bar(column: month), line(column: month)
/// The column argument is optional; an omitted column means "nothing
/// selected yet" and derives an empty view.
pub fn parse_chart2d(input: &str) -> IResult<&str, Selection> {
    let (input, chart) = ws(alt((
        map(tag("pie"), |_| ChartKind::Pie),
        map(tag("doughnut"), |_| ChartKind::Doughnut),
        map(tag("bar"), |_| ChartKind::Bar),
        map(tag("line"), |_| ChartKind::Line),
    )))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, column) = opt(preceded(ws(tag("column:")), ws(column_name)))(input)?;

    let (input, _) = ws(char(')'))(input)?;

    Ok((
        input,
        Selection {
            chart,
            column,
            ..Default::default()
        },
    ))
}

/// Parse a 3D chart command
/// Format: bar3d(x: region, y: sales), scatter3d(x: a, y: b, z: c),
///         surface3d(x: a, y: b)
/// All axes are optional named arguments in any order; the validator
/// decides later whether the selection is usable.
pub fn parse_chart3d(input: &str) -> IResult<&str, Selection> {
    let (input, chart) = ws(alt((
        map(tag("bar3d"), |_| ChartKind::Bar3d),
        map(tag("scatter3d"), |_| ChartKind::Scatter3d),
        map(tag("surface3d"), |_| ChartKind::Surface3d),
    )))(input)?;
    let (input, _) = ws(char('('))(input)?;

    let (input, args) = separated_list0(
        ws(char(',')),
        alt((
            map(preceded(ws(tag("x:")), ws(column_name)), |v| ("x", v)),
            map(preceded(ws(tag("y:")), ws(column_name)), |v| ("y", v)),
            map(preceded(ws(tag("z:")), ws(column_name)), |v| ("z", v)),
        )),
    )(input)?;

    let (input, _) = ws(char(')'))(input)?;

    let mut selection = Selection {
        chart,
        ..Default::default()
    };
    for (key, val) in args {
        match key {
            "x" => selection.x = Some(val),
            "y" => selection.y = Some(val),
            "z" => selection.z = Some(val),
            _ => {}
        }
    }

    Ok((input, selection))
}

/// Parse a complete chart selection, consuming the whole input.
pub fn parse_selection(input: &str) -> IResult<&str, Selection> {
    let (input, selection) = alt((parse_chart3d, parse_chart2d))(input)?;
    let (input, _) = ws(eof)(input)?;
    Ok((input, selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pie() {
        let (_, selection) = parse_selection("pie(column: country)").unwrap();
        assert_eq!(selection.chart, ChartKind::Pie);
        assert_eq!(selection.column, Some("country".to_string()));
        assert_eq!(selection.x, None);
    }

    #[test]
    fn test_parse_empty_selection() {
        let (_, selection) = parse_selection("line()").unwrap();
        assert_eq!(selection.chart, ChartKind::Line);
        assert_eq!(selection.column, None);
    }

    #[test]
    fn test_parse_quoted_column() {
        let (_, selection) = parse_selection(r#"bar(column: "unit price")"#).unwrap();
        assert_eq!(selection.column, Some("unit price".to_string()));
    }

    #[test]
    fn test_parse_scatter3d_full_axes() {
        let (_, selection) = parse_selection("scatter3d(x: height, y: weight, z: age)").unwrap();
        assert_eq!(selection.chart, ChartKind::Scatter3d);
        assert_eq!(selection.x, Some("height".to_string()));
        assert_eq!(selection.y, Some("weight".to_string()));
        assert_eq!(selection.z, Some("age".to_string()));
    }

    #[test]
    fn test_parse_bar3d_without_z() {
        let (_, selection) = parse_selection("bar3d(x: region, y: sales)").unwrap();
        assert_eq!(selection.chart, ChartKind::Bar3d);
        assert_eq!(selection.z, None);
    }

    #[test]
    fn test_parse_axes_in_any_order() {
        let (_, selection) = parse_selection("surface3d(y: b, x: a)").unwrap();
        assert_eq!(selection.chart, ChartKind::Surface3d);
        assert_eq!(selection.x, Some("a".to_string()));
        assert_eq!(selection.y, Some("b".to_string()));
    }

    #[test]
    fn test_parse_with_whitespace() {
        let (_, selection) = parse_selection("  pie( column: tag )  ").unwrap();
        assert_eq!(selection.column, Some("tag".to_string()));
    }

    #[test]
    fn test_bar_and_bar3d_disambiguate() {
        let (_, selection) = parse_selection("bar(column: month)").unwrap();
        assert_eq!(selection.chart, ChartKind::Bar);
        let (_, selection) = parse_selection("bar3d(x: month, y: sales)").unwrap();
        assert_eq!(selection.chart, ChartKind::Bar3d);
    }

    #[test]
    fn test_parse_rejects_unknown_chart() {
        assert!(parse_selection("radar(column: a)").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_input() {
        assert!(parse_selection("pie(column: a) garbage").is_err());
    }

    #[test]
    fn test_parse_rejects_unclosed_paren() {
        assert!(parse_selection("pie(column: a").is_err());
    }
}
