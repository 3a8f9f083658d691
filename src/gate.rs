use thiserror::Error;

/// Whether the admin view is showing. Session-local only; a reload starts
/// over at `Locked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("Missing admin password")]
    MissingPassword,
    #[error("Wrong password.")]
    WrongPassword,
}

/// A password check in front of the admin listing. The configured password
/// ships inside the client bundle, so this keeps casual visitors out and
/// nothing more; anyone who wants the listing can read the password out of
/// the build. Real protection would need a server-verified session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminGate {
    state: GateState,
}

impl AdminGate {
    pub fn new() -> Self {
        Self {
            state: GateState::Locked,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Checks a candidate password against the configured one. Returns
    /// `Ok(true)` only on the submission that performs the Locked -> Unlocked
    /// transition, so the caller loads the listing exactly once. An unset
    /// configured password is a configuration error, distinct from a wrong
    /// guess.
    pub fn submit(
        &mut self,
        configured: Option<&str>,
        candidate: &str,
    ) -> Result<bool, GateError> {
        let secret = configured.ok_or(GateError::MissingPassword)?;
        if candidate != secret {
            return Err(GateError::WrongPassword);
        }
        if self.state == GateState::Unlocked {
            return Ok(false);
        }
        self.state = GateState::Unlocked;
        Ok(true)
    }
}

impl Default for AdminGate {
    fn default() -> Self {
        Self::new()
    }
}
