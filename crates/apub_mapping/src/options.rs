use jiff::Timestamp;

use crate::model::Account;

/// Per-request options. `now` is the only clock the mappings read, so fixing
/// it makes renders reproducible.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// When false, wrapped objects are always referenced by URI.
    pub allow_inlining: bool,
    /// Emit quote approvals even before the quote was accepted.
    pub force_approval_id: bool,
    /// Actor override for activities sent on someone else's behalf.
    pub account: Option<Account>,
    pub now: Timestamp,
}

impl RenderOptions {
    pub fn new(now: Timestamp) -> RenderOptions {
        RenderOptions {
            allow_inlining: true,
            force_approval_id: false,
            account: None,
            now,
        }
    }

    pub fn with_allow_inlining(mut self, allow_inlining: bool) -> RenderOptions {
        self.allow_inlining = allow_inlining;
        self
    }

    pub fn with_force_approval_id(mut self, force_approval_id: bool) -> RenderOptions {
        self.force_approval_id = force_approval_id;
        self
    }

    pub fn with_account(mut self, account: Account) -> RenderOptions {
        self.account = Some(account);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::new(Timestamp::now())
    }
}
