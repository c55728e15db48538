/// The parsed form of a directive line: `[varname] [endpoint]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Name the result table should be bound under, if any.
    pub varname: Option<String>,
    /// Endpoint the query goes to; the default unless overridden.
    pub endpoint: String,
}

impl Directive {
    /// Splits `line` on whitespace and resolves the tokens against
    /// `default_endpoint`. Never fails; extra tokens beyond the second are
    /// ignored.
    ///
    /// A single token is an endpoint override when it starts with `http`,
    /// a variable name otherwise. The prefix check is deliberate and known
    /// to misclassify names such as `httpResult`; callers wanting such a
    /// name must spell the endpoint out as the second token.
    pub fn parse(line: &str, default_endpoint: &str) -> Self {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (None, _) => Directive {
                varname: None,
                endpoint: default_endpoint.to_owned(),
            },
            (Some(single), None) => {
                if single.starts_with("http") {
                    Directive {
                        varname: None,
                        endpoint: single.to_owned(),
                    }
                } else {
                    Directive {
                        varname: Some(single.to_owned()),
                        endpoint: default_endpoint.to_owned(),
                    }
                }
            }
            (Some(varname), Some(endpoint)) => Directive {
                varname: Some(varname.to_owned()),
                endpoint: endpoint.to_owned(),
            },
        }
    }
}
