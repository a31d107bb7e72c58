/// The argument typed after the keyword, split into at most two tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Query<'a> {
    pub first: Option<&'a str>,
    pub second: Option<&'a str>,
}

impl<'a> Query<'a> {
    /// Splits the argument at its first whitespace character. Anything after
    /// that, including further whitespace, ends up in the second token.
    pub fn parse(argument: Option<&'a str>) -> Self {
        match argument {
            None | Some("") => Self::default(),

            Some(argument) => match argument.split_once(char::is_whitespace) {
                Some((first, second)) => Self { first: Some(first), second: Some(second) },
                None => Self { first: Some(argument), second: None },
            },
        }
    }
}
