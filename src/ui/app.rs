use anyhow::Result;
use rust_decimal::Decimal;

use crate::models::month::{self, Month};
use crate::models::{Ledger, CATEGORIES, OTHER_CATEGORY};
use crate::report::{self, MonthSummary};
use crate::store::Store;
use crate::ui::util::{format_amount, humanize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Entry,
    MonthSelect,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Entry => write!(f, "ENTRY"),
            Self::MonthSelect => write!(f, "MONTH"),
        }
    }
}

/// Focusable fields of the entry form. `Remark` is reachable only while the
/// selected category is `other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Category,
    Amount,
    Remark,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    pub(crate) ledger: Ledger,
    pub(crate) months: Vec<Month>,
    pub(crate) month_index: usize,
    pub(crate) month_cursor: usize,

    pub(crate) summary: MonthSummary,

    pub(crate) form_category: usize,
    pub(crate) form_amount: String,
    pub(crate) form_remark: String,
    pub(crate) form_focus: FormField,
}

impl App {
    pub(crate) fn new(ledger: Ledger) -> Self {
        let mut app = Self {
            running: true,
            input_mode: InputMode::Normal,
            status_message: String::new(),
            show_help: false,

            ledger,
            months: month::recent_months(12),
            month_index: 0,
            month_cursor: 0,

            summary: MonthSummary::default(),

            form_category: 0,
            form_amount: String::new(),
            form_remark: String::new(),
            form_focus: FormField::Category,
        };
        app.refresh_summary();
        app
    }

    pub(crate) fn active_month(&self) -> &Month {
        &self.months[self.month_index]
    }

    /// Recompute the active month's aggregate from the ledger. Pure
    /// derivation; never mutates stored data.
    pub(crate) fn refresh_summary(&mut self) {
        self.summary = self
            .ledger
            .month(&self.months[self.month_index].key)
            .map(report::summarize)
            .unwrap_or_default();
    }

    /// Month-changed trigger: switch the active month and recompute.
    pub(crate) fn select_month(&mut self, index: usize) {
        if index < self.months.len() {
            self.month_index = index;
            self.refresh_summary();
        }
    }

    pub(crate) fn selected_category(&self) -> &'static str {
        CATEGORIES[self.form_category]
    }

    /// The remark field is shown and required iff `other` is selected.
    pub(crate) fn remark_required(&self) -> bool {
        self.selected_category() == OTHER_CATEGORY
    }

    /// Category-selector-changed trigger: cycle the selection and keep the
    /// remark field consistent (hidden and empty when not required).
    pub(crate) fn cycle_category(&mut self, delta: i32) {
        let len = CATEGORIES.len() as i32;
        self.form_category = (self.form_category as i32 + delta).rem_euclid(len) as usize;
        if !self.remark_required() {
            self.form_remark.clear();
            if self.form_focus == FormField::Remark {
                self.form_focus = FormField::Amount;
            }
        }
    }

    pub(crate) fn focus_next_field(&mut self) {
        self.form_focus = match self.form_focus {
            FormField::Category => FormField::Amount,
            FormField::Amount if self.remark_required() => FormField::Remark,
            FormField::Amount => FormField::Category,
            FormField::Remark => FormField::Category,
        };
    }

    pub(crate) fn focus_prev_field(&mut self) {
        self.form_focus = match self.form_focus {
            FormField::Category if self.remark_required() => FormField::Remark,
            FormField::Category => FormField::Amount,
            FormField::Amount => FormField::Category,
            FormField::Remark => FormField::Amount,
        };
    }

    pub(crate) fn reset_form(&mut self) {
        self.form_category = 0;
        self.form_amount.clear();
        self.form_remark.clear();
        self.form_focus = FormField::Category;
    }

    /// Form-submitted trigger. Validation failures leave the form open with
    /// a status message; nothing is mutated or persisted. On success the
    /// contribution is applied to the active month, the full ledger is
    /// written back, and the form resets to its defaults.
    pub(crate) fn submit_expense(&mut self, store: &Store) -> Result<()> {
        let category = self.selected_category();

        let Ok(amount) = self.form_amount.trim().parse::<Decimal>() else {
            self.set_status("Amount must be a number");
            return Ok(());
        };
        if amount < Decimal::ZERO {
            self.set_status("Amount must not be negative");
            return Ok(());
        }
        let remark = self.form_remark.trim().to_string();
        if category == OTHER_CATEGORY && remark.is_empty() {
            self.set_status("A remark is required for \"other\"");
            return Ok(());
        }

        let month_key = self.active_month().key.clone();
        if category == OTHER_CATEGORY {
            self.ledger.add_entry(&month_key, amount, remark);
        } else {
            self.ledger.add(&month_key, category, amount);
        }
        store.save(&self.ledger)?;

        self.refresh_summary();
        self.set_status(format!(
            "Added {} to {}",
            format_amount(amount),
            humanize(category)
        ));
        self.reset_form();
        self.input_mode = InputMode::Normal;
        Ok(())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
