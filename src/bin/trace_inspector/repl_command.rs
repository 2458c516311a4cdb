use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, multispace0, multispace1},
    combinator::{all_consuming, map_res, opt},
    sequence::{delimited, preceded},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    Help,
    Next(usize),
    Prev(usize),
    Show,
    Reset,
}

impl ReplCommand {
    pub fn parse(input: &str) -> Option<Self> {
        all_consuming(delimited(
            multispace0,
            alt((
                Self::parse_exit,
                Self::parse_help,
                Self::parse_next,
                Self::parse_prev,
                Self::parse_show,
                Self::parse_reset,
            )),
            multispace0,
        ))(input)
        .ok()
        .map(|(_, cmd)| cmd)
    }

    fn parse_exit(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = alt((tag("exit"), tag("quit")))(input)?;
        Ok((input, ReplCommand::Exit))
    }

    fn parse_help(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = tag("help")(input)?;
        Ok((input, ReplCommand::Help))
    }

    fn parse_count(input: &str) -> IResult<&str, usize> {
        let (input, count) = opt(preceded(multispace1, map_res(digit1, str::parse)))(input)?;
        Ok((input, count.unwrap_or(1)))
    }

    fn parse_next(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = alt((tag("next"), tag("n")))(input)?;
        let (input, count) = Self::parse_count(input)?;
        Ok((input, ReplCommand::Next(count)))
    }

    fn parse_prev(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = alt((tag("prev"), tag("p")))(input)?;
        let (input, count) = Self::parse_count(input)?;
        Ok((input, ReplCommand::Prev(count)))
    }

    fn parse_show(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = tag("show")(input)?;
        Ok((input, ReplCommand::Show))
    }

    fn parse_reset(input: &str) -> IResult<&str, ReplCommand> {
        let (input, _) = tag("reset")(input)?;
        Ok((input, ReplCommand::Reset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("help "), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("next"), Some(ReplCommand::Next(1)));
        assert_eq!(ReplCommand::parse("next 12"), Some(ReplCommand::Next(12)));
        assert_eq!(ReplCommand::parse("n 3"), Some(ReplCommand::Next(3)));
        assert_eq!(ReplCommand::parse("  prev 2"), Some(ReplCommand::Prev(2)));
        assert_eq!(ReplCommand::parse("p"), Some(ReplCommand::Prev(1)));
        assert_eq!(ReplCommand::parse("show"), Some(ReplCommand::Show));
        assert_eq!(ReplCommand::parse("reset"), Some(ReplCommand::Reset));
    }

    #[test]
    fn reject_unknown_commands() {
        assert_eq!(ReplCommand::parse(""), None);
        assert_eq!(ReplCommand::parse("nextt"), None);
        assert_eq!(ReplCommand::parse("next two"), None);
        assert_eq!(ReplCommand::parse("next 99999999999999999999999"), None);
        assert_eq!(ReplCommand::parse("jump 3"), None);
    }
}
