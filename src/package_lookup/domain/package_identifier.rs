/// Delimiter between package name and version in an identifier token
pub const IDENTIFIER_DELIMITER: char = '@';

/// PackageIdentifier value object: the (name, version) pair of a token
///
/// No syntax validation is performed. Malformed tokens are passed on to the
/// resolvers unchanged and simply fail remotely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentifier {
    name: String,
    version: String,
}

impl PackageIdentifier {
    /// Splits a raw token such as `Newtonsoft.Json@13.0.1`.
    ///
    /// The name is the text before the first `@` and the version is the text
    /// after the last `@`. A token without `@` yields name == version == token.
    pub fn parse(token: &str) -> Self {
        let name = token
            .split(IDENTIFIER_DELIMITER)
            .next()
            .unwrap_or(token);
        let version = token
            .rsplit(IDENTIFIER_DELIMITER)
            .next()
            .unwrap_or(token);

        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, IDENTIFIER_DELIMITER, self.version)
    }
}
