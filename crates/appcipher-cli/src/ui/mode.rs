//! How command results are written to stdout.

/// Output style for envelopes, key status and receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One JSON document per command, nothing else on stdout
    Json,
    /// `key=value` lines and bare envelopes for scripts
    #[default]
    Plain,
    /// Badges and styled labels for a terminal user
    Pretty,
}

impl OutputMode {
    /// Pick the mode for a command.
    ///
    /// `--json` always wins. Otherwise a dumb terminal or a redirected
    /// stdout gets `Plain`, so piping `appcipher encrypt` never picks up
    /// escape codes.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        match (json_flag, is_tty && !term_is_dumb) {
            (true, _) => Self::Json,
            (false, true) => Self::Pretty,
            (false, false) => Self::Plain,
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
