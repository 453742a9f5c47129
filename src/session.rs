//! Per-form session state.
//!
//! The petition form grows and shrinks its party blocks while it is open,
//! and the submit control must stay disabled while a generation is pending.
//! Both live here, owned by whoever owns the form, instead of in globals.

use std::cell::Cell;

/// Which party list a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartySide {
    Petitioner,
    Defendant,
}

impl PartySide {
    /// Field-name prefix used by the petition form, e.g. `petitioner_name_0`.
    pub fn field_prefix(&self) -> &'static str {
        match self {
            PartySide::Petitioner => "petitioner",
            PartySide::Defendant => "defendant",
        }
    }

    /// Label used on the document, e.g. `Petitioner`.
    pub fn label(&self) -> &'static str {
        match self {
            PartySide::Petitioner => "Petitioner",
            PartySide::Defendant => "Defendant",
        }
    }

    /// Form field name for `field` of the block at `index`.
    pub fn field_name(&self, field: &str, index: usize) -> String {
        format!("{}_{}_{}", self.field_prefix(), field, index)
    }
}

/// Party block counts of one open petition form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetitionSession {
    petitioners: usize,
    defendants: usize,
}

impl Default for PetitionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PetitionSession {
    /// A freshly opened form: one petitioner block, one defendant block.
    pub fn new() -> Self {
        Self {
            petitioners: 1,
            defendants: 1,
        }
    }

    fn slot(&mut self, side: PartySide) -> &mut usize {
        match side {
            PartySide::Petitioner => &mut self.petitioners,
            PartySide::Defendant => &mut self.defendants,
        }
    }

    /// Add a block and return its index.
    pub fn add_party(&mut self, side: PartySide) -> usize {
        let slot = self.slot(side);
        *slot += 1;
        *slot - 1
    }

    /// Remove the last block; returns false when the list is already empty.
    pub fn remove_party(&mut self, side: PartySide) -> bool {
        let slot = self.slot(side);
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Number of blocks on `side`.
    pub fn count(&self, side: PartySide) -> usize {
        match side {
            PartySide::Petitioner => self.petitioners,
            PartySide::Defendant => self.defendants,
        }
    }
}

/// The submit button of a form.
#[derive(Debug, Default)]
pub struct SubmitControl {
    pending: Cell<bool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the control accepts a submit right now.
    pub fn is_enabled(&self) -> bool {
        !self.pending.get()
    }

    /// Disable the control for one generation.
    ///
    /// Returns `None` while a previous generation is still pending.
    pub fn begin(&self) -> Option<SubmitGuard<'_>> {
        if self.pending.replace(true) {
            return None;
        }
        Some(SubmitGuard { control: self })
    }
}

/// Re-enables its [`SubmitControl`] when dropped, on success and failure alike.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    control: &'a SubmitControl,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.control.pending.set(false);
    }
}
