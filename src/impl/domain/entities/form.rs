use std::{fmt, str::FromStr};

use fractic_server_error::ServerError;

use crate::errors::UnknownFormField;

/// Text fields of the new-bill form, identified by the ids the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ExpenseType,
    ExpenseName,
    Date,
    Amount,
    Vat,
    Pct,
    Commentary,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::ExpenseType,
        FormField::ExpenseName,
        FormField::Date,
        FormField::Amount,
        FormField::Vat,
        FormField::Pct,
        FormField::Commentary,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormField::ExpenseType => "expense-type",
            FormField::ExpenseName => "expense-name",
            FormField::Date => "datepicker",
            FormField::Amount => "amount",
            FormField::Vat => "vat",
            FormField::Pct => "pct",
            FormField::Commentary => "commentary",
        }
    }
}

impl FromStr for FormField {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| UnknownFormField::new(s))
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raw values currently typed into the new-bill form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub expense_name: String,
    pub date: String,
    pub amount: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl NewBillForm {
    /// Builds a form from `(field id, value)` pairs as read from the view.
    pub fn from_fields<I, K, V>(fields: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = NewBillForm::default();
        for (id, value) in fields {
            form.set(FormField::from_str(id.as_ref())?, value);
        }
        Ok(form)
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::ExpenseType => &self.expense_type,
            FormField::ExpenseName => &self.expense_name,
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
            FormField::Vat => &self.vat,
            FormField::Pct => &self.pct,
            FormField::Commentary => &self.commentary,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::ExpenseType => &mut self.expense_type,
            FormField::ExpenseName => &mut self.expense_name,
            FormField::Date => &mut self.date,
            FormField::Amount => &mut self.amount,
            FormField::Vat => &mut self.vat,
            FormField::Pct => &mut self.pct,
            FormField::Commentary => &mut self.commentary,
        };
        *slot = value.into();
    }
}

/// Submission of the new-bill form.
#[derive(Debug, Clone, Default)]
pub struct FormSubmitEvent {
    pub form: NewBillForm,
    default_prevented: bool,
}

impl FormSubmitEvent {
    pub fn new(form: NewBillForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    /// Keeps the browser from performing its own form navigation.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
