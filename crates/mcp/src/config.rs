const DEFAULT_PROGRAM: &str = "npx";
const DEFAULT_ARGS: &[&str] =
    &["-y", "@modelcontextprotocol/server-everything", "stdio"];

/// Builder for [`ClientConfig`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientConfigBuilder {
    program: String,
    args: Vec<String>,
}

impl ClientConfigBuilder {
    /// Creates a builder with the given program to spawn.
    #[inline]
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument to the command line.
    #[inline]
    pub fn arg<S: Into<String>>(mut self, arg: S) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends multiple arguments to the command line.
    #[inline]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            program: self.program,
            args: self.args,
        }
    }
}

/// Configuration for the command that serves tools over its standard
/// streams.
///
/// The working directory, environment, and executable resolution are
/// inherited from the parent process.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClientConfig {
    pub(crate) program: String,
    pub(crate) args: Vec<String>,
}

impl Default for ClientConfig {
    /// Returns the configuration for the reference "everything" tool
    /// server, launched via a package runner in stdio mode.
    fn default() -> Self {
        ClientConfigBuilder::with_program(DEFAULT_PROGRAM)
            .args(DEFAULT_ARGS.iter().copied())
            .build()
    }
}
