use std::fmt::{self, Debug, Display};

#[derive(Debug)]
pub struct ApprovalResult {
    pub approved: bool,
    pub why: Option<String>,
}

/// A pending confirmation for a tool call.
///
/// Consuming the approval with [`Approval::approve`] or
/// [`Approval::reject`] resolves the tool call that produced it.
pub struct Approval {
    what: String,
    hint: String,
    pub(crate) on_result: Option<Box<dyn FnOnce(ApprovalResult) + Send>>,
}

impl Approval {
    /// Creates a new approval.
    #[inline]
    pub fn new<S1: Into<String>, S2: Into<String>>(
        what: S1,
        hint: S2,
    ) -> Self {
        Self {
            what: what.into(),
            hint: hint.into(),
            on_result: None,
        }
    }

    /// Returns what the approval is for.
    #[inline]
    pub fn what(&self) -> &str {
        &self.what
    }

    /// Returns the hint shown to the user when deciding.
    #[inline]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Approves the request.
    #[inline]
    pub fn approve(self) {
        let Some(on_result) = self.on_result else {
            return;
        };
        (on_result)(ApprovalResult {
            approved: true,
            why: None,
        });
    }

    /// Rejects the request with an optional reason.
    #[inline]
    pub fn reject(self, reason: Option<String>) {
        let Some(on_result) = self.on_result else {
            return;
        };
        (on_result)(ApprovalResult {
            approved: false,
            why: reason,
        });
    }
}

impl Debug for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Approval")
            .field("what", &self.what)
            .field("hint", &self.hint)
            .finish_non_exhaustive()
    }
}

impl Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{} ({})", self.what, self.hint))
    }
}
